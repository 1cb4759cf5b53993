//! Entity types.
//!
//! [`Game`], [`Author`] and [`Review`] are plain records. Reviews reference
//! their game and author by id only; see [`Store`](crate::Store) for how those
//! references are resolved.

/// A game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Identifier, unique among the seed data.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Platforms the game ships on, in display order.
    pub platform: Vec<String>,
}

impl Game {
    /// Create a new game.
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, title: impl Into<String>, platform: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            platform: platform.into_iter().map(Into::into).collect(),
        }
    }
}

/// A review author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub verified: bool,
}

impl Author {
    /// Create a new author.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, verified: bool) -> Self {
        Self { id: id.into(), name: name.into(), verified }
    }
}

/// A review of a game by an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    /// Score out of ten.
    pub rating: u8,
    pub content: String,
    /// Foreign key into the author collection.
    pub author_id: String,
    /// Foreign key into the game collection.
    pub game_id: String,
}

impl Review {
    /// Create a new review.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        rating: u8,
        content: impl Into<String>,
        author_id: impl Into<String>,
        game_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            rating,
            content: content.into(),
            author_id: author_id.into(),
            game_id: game_id.into(),
        }
    }
}

/// The payload for a game that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub title: String,
    pub platform: Vec<String>,
}

impl NewGame {
    /// Create a new game payload.
    #[must_use]
    pub fn new<I, S>(title: impl Into<String>, platform: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { title: title.into(), platform: platform.into_iter().map(Into::into).collect() }
    }

    /// Attach an id, producing a stored game.
    #[must_use]
    pub fn into_game(self, id: impl Into<String>) -> Game {
        Game { id: id.into(), title: self.title, platform: self.platform }
    }
}

/// A partial update to a [`Game`].
///
/// Each field that is `Some` replaces the game's current value wholesale;
/// fields left as `None` are kept. The platform list is replaced, never
/// appended to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEdits {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl GameEdits {
    /// Set the new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the new platform list.
    #[must_use]
    pub fn with_platform<I, S>(mut self, platform: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platform = Some(platform.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.platform.is_none()
    }

    /// Merge these edits into `game`. The id is never touched.
    pub fn apply(&self, game: &mut Game) {
        if let Some(title) = &self.title {
            game.title.clone_from(title);
        }
        if let Some(platform) = &self.platform {
            game.platform.clone_from(platform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mario_kart() -> Game {
        Game::new("4", "Mario Kart", ["Switch"])
    }

    #[test]
    fn title_edit_keeps_platform() {
        let mut game = mario_kart();
        GameEdits::default().with_title("Mario Kart 8").apply(&mut game);

        assert_eq!(game.id, "4");
        assert_eq!(game.title, "Mario Kart 8");
        assert_eq!(game.platform, vec!["Switch"]);
    }

    #[test]
    fn platform_edit_replaces_whole_list() {
        let mut game = mario_kart();
        GameEdits::default().with_platform(["Switch 2", "PC"]).apply(&mut game);

        assert_eq!(game.title, "Mario Kart");
        assert_eq!(game.platform, vec!["Switch 2", "PC"]);
    }

    #[test]
    fn empty_edits_change_nothing() {
        let edits = GameEdits::default();
        assert!(edits.is_empty());

        let mut game = mario_kart();
        edits.apply(&mut game);
        assert_eq!(game, mario_kart());
    }

    #[test]
    fn new_game_takes_the_given_id() {
        let game = NewGame::new("X", ["PC"]).into_game("17");
        assert_eq!(game, Game::new("17", "X", ["PC"]));
    }
}

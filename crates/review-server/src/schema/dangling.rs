//! Nulling of reviews whose game or author no longer exists.
//!
//! `Review.game` and `Review.author` are non-null, so a review whose selected
//! foreign key does not resolve cannot be returned. The nearest nullable
//! position takes the null instead: the item in `[Review]`, the whole list in
//! `[Review!]`, the field itself for `review(id)`. One error is reported per
//! nulled position, pointing at the unresolved field.

use async_graphql::{Context, PathSegment, Result};
use reviewdb::{Error, Review as DbReview, Store};

use super::types::Review;

/// The first relationship the current selection follows from `review` that
/// does not resolve, with the field name it is selected under.
fn unresolved(
    ctx: &Context<'_>,
    store: &Store,
    review: &DbReview,
) -> reviewdb::Result<Option<(&'static str, Error)>> {
    let selection = ctx.look_ahead();
    if selection.field("game").exists() && store.game(&review.game_id)?.is_none() {
        return Ok(Some(("game", Error::missing_game(&review.game_id))));
    }
    if selection.field("author").exists() && store.author(&review.author_id)?.is_none() {
        return Ok(Some(("author", Error::missing_author(&review.author_id))));
    }
    Ok(None)
}

fn report(ctx: &Context<'_>, index: Option<usize>, field: &str, error: Error) {
    let error = async_graphql::Error::new(error.to_string()).into_server_error(ctx.item.pos);
    let mut error = ctx.set_error_path(error);
    if let Some(index) = index {
        error.path.push(PathSegment::Index(index));
    }
    error.path.push(PathSegment::Field(field.to_string()));
    ctx.add_error(error);
}

/// Resolve a `[Review]` list, nulling each review that cannot be resolved.
pub(crate) fn nullable_items(
    ctx: &Context<'_>,
    store: &Store,
    reviews: Vec<DbReview>,
) -> Result<Option<Vec<Option<Review>>>> {
    let mut items = Vec::with_capacity(reviews.len());
    for (index, review) in reviews.into_iter().enumerate() {
        match unresolved(ctx, store, &review)? {
            Some((field, error)) => {
                report(ctx, Some(index), field, error);
                items.push(None);
            }
            None => items.push(Some(review.into())),
        }
    }
    Ok(Some(items))
}

/// Resolve a `[Review!]` list, nulling the whole list if any review cannot be
/// resolved.
pub(crate) fn non_null_items(
    ctx: &Context<'_>,
    store: &Store,
    reviews: Vec<DbReview>,
) -> Result<Option<Vec<Review>>> {
    for (index, review) in reviews.iter().enumerate() {
        if let Some((field, error)) = unresolved(ctx, store, review)? {
            report(ctx, Some(index), field, error);
            return Ok(None);
        }
    }
    Ok(Some(reviews.into_iter().map(Review::from).collect()))
}

/// Resolve a single nullable review.
pub(crate) fn nullable_item(
    ctx: &Context<'_>,
    store: &Store,
    review: Option<DbReview>,
) -> Result<Option<Review>> {
    let Some(review) = review else {
        return Ok(None);
    };
    if let Some((field, error)) = unresolved(ctx, store, &review)? {
        report(ctx, None, field, error);
        return Ok(None);
    }
    Ok(Some(review.into()))
}

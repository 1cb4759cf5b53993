//! Game reviews GraphQL server.

use anyhow::Result;
use clap::Parser;
use review_server::config::{DEFAULT_HOST, DEFAULT_PORT};
use review_server::{create_schema, server, ServerConfig};
use reviewdb::{Store, StoreConfig};

#[derive(Parser)]
#[command(name = "review-server")]
#[command(about = "GraphQL server for games, authors and reviews")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Start with empty collections instead of the seed data
    #[arg(long)]
    no_seed: bool,

    /// Print the GraphQL schema (SDL) and exit
    #[arg(long)]
    print_schema: bool,
}

impl Args {
    fn store_config(&self) -> StoreConfig {
        StoreConfig::default().seed(!self.no_seed)
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig { host: self.host.clone(), port: self.port }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("review_server=info".parse()?)
                .add_directive("reviewdb=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let store = Store::new(args.store_config());

    if args.print_schema {
        print!("{}", create_schema(store).sdl());
        return Ok(());
    }

    server::run(&args.server_config(), store).await
}

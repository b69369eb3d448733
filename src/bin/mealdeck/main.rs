// ABOUTME: Mealdeck CLI - terminal front end for browsing recipes and managing favorites
// ABOUTME: Wires configuration, the TheMealDB client, and the favorites store into one session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the trending recipes
//! mealdeck trending
//!
//! # Search by name
//! mealdeck search teriyaki
//!
//! # List a category, or your favorites
//! mealdeck category Seafood
//! mealdeck favorites
//!
//! # Show one recipe, then toggle it as a favorite
//! mealdeck show 52772
//! mealdeck favorite 52772
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use mealdeck::{
    config::AppConfig,
    errors::AppResult,
    external::{MealDbClient, MealDbClientConfig},
    favorites::FavoritesStore,
    http_client::initialize_shared_client,
    logging::LoggingConfig,
    services::ViewSynchronizer,
    storage::FileStorage,
};
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

/// Session type shared by all commands
pub type Browser = ViewSynchronizer<MealDbClient, FileStorage>;

#[derive(Parser)]
#[command(
    name = "mealdeck",
    version,
    about = "Browse TheMealDB recipes and keep a list of favorites",
    long_about = "Terminal recipe browser backed by TheMealDB. Favorites are stored locally and stay available offline."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the favorites file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Recipe API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print views and results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the trending recipes
    Trending,

    /// Search recipes by name
    Search {
        /// Search term (blank shows trending recipes)
        #[arg(default_value = "")]
        term: String,
    },

    /// List the recipes in a category ("Favorites" lists your favorites)
    Category {
        /// Category name, e.g. Seafood
        name: String,
    },

    /// List your favorite recipes
    Favorites,

    /// Show the full detail of a recipe
    Show {
        /// Recipe id
        id: String,
    },

    /// Add a recipe to your favorites, or remove it if already there
    Favorite {
        /// Recipe id
        id: String,
    },

    /// Show one random recipe
    Random,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = AppConfig::from_env()?
        .with_overrides(cli.api_url.as_deref(), cli.data_dir.as_deref())?;
    initialize_shared_client(config.http);

    let client = MealDbClient::new(MealDbClientConfig::from(&config));
    let favorites = FavoritesStore::load(FileStorage::new(&config.data_dir)).await;
    let mut browser: Browser =
        ViewSynchronizer::new(client, favorites).with_trending_limit(config.trending_limit);
    debug!(data_dir = %config.data_dir.display(), "Session ready");

    let json = cli.json;
    match cli.command {
        Command::Trending => commands::views::trending(&mut browser, json).await?,
        Command::Search { term } => commands::views::search(&mut browser, &term, json).await?,
        Command::Category { name } => {
            commands::views::category(&mut browser, &name, json).await?;
        }
        Command::Favorites => commands::views::favorites(&mut browser, json).await?,
        Command::Random => commands::views::random(&mut browser, json).await?,
        Command::Show { id } => commands::recipes::show(&browser, &id, json).await?,
        Command::Favorite { id } => commands::recipes::favorite(&mut browser, &id, json).await?,
    }

    Ok(())
}

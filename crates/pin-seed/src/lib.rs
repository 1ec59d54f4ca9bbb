//! Seed utilities for the pinboard database.
//!
//! This crate puts one known demo pin — a geotagged post with a title,
//! description, vote counters, and an attached image — into the
//! `public."Pins"` table of a PostgreSQL development database. It is a seed
//! tool, not an ingestion pipeline: one row per run, values taken from
//! configuration, fail-fast on any error.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pin_seed::prelude::*;
//!
//! let config = SeedConfig::load()?;
//! let mut seeder = Seeder::connect(&config.database).await?;
//! let bytes = image::load_bytes(&config.image_path)?;
//! seeder.insert_pin(&config.pin.into_row(bytes)).await?;
//! seeder.close().await?;
//! println!("{SUCCESS_MESSAGE}");
//! ```

pub mod config;
pub mod db;
pub mod image;
pub mod pin;

/// The one line printed to stdout after a successful commit.
pub const SUCCESS_MESSAGE: &str = "Obraz został poprawnie wstawiony do bazy danych.";

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::SUCCESS_MESSAGE;
    pub use crate::config::{ConfigError, DatabaseConfig, PinValues, SeedConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::image;
    pub use crate::pin::PinRow;
}

//! Default seed binary - inserts the configured pin into the database.
//!
//! Run with:
//! ```
//! cargo run -p pin-seed --bin seed
//! ```
//!
//! Configuration comes from the environment (`DATABASE_URL` or the discrete
//! `PG*` variables, `PIN_IMAGE_PATH`, per-field `PIN_*` row overrides), with
//! an optional JSON file named by `SEED_CONFIG` underneath; the defaults
//! target a local development database and insert the stock demo pin.
//!
//! On success the confirmation line is the only thing written to stdout;
//! all logging goes to stderr.

use pin_seed::SUCCESS_MESSAGE;
use pin_seed::config::SeedConfig;
use pin_seed::db::Seeder;
use pin_seed::image;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the final confirmation line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig::load()?;

    tracing::info!("Connecting to {}", config.database.display_target());
    let mut seeder = Seeder::connect(&config.database).await?;
    tracing::info!("Connected to database");

    // The image is read only after the connection is up, and always before
    // any statement reaches the server.
    let bytes = image::load_bytes(&config.image_path)?;
    tracing::info!(
        "Read {} bytes from {}",
        bytes.len(),
        config.image_path.display()
    );

    let pin = config.pin.into_row(bytes);
    seeder.insert_pin(&pin).await?;

    seeder.close().await?;

    println!("{SUCCESS_MESSAGE}");

    Ok(())
}

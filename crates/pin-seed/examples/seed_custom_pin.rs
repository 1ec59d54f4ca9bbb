//! Example: Seed a single custom pin.
//!
//! Sets the row values through the library API instead of environment
//! variables - useful as a template for one-off demo rows. The database
//! endpoint and image path still come from the environment.
//!
//! Run with:
//! ```
//! cargo run -p pin-seed --example seed_custom_pin
//! ```

use pin_seed::config::{PinValues, SeedConfig};
use pin_seed::db::Seeder;
use pin_seed::image;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig::load()?;

    let values = PinValues {
        id: 2,
        longitude: 16.9335,
        latitude: 52.4087,
        title: "Zamknięte przejście przy Starym Rynku".to_string(),
        description: "Remont nawierzchni, od strony Wrocławskiej nie da się przejść"
            .to_string(),
        ..PinValues::default()
    };

    let bytes = image::load_bytes(&config.image_path)?;

    let mut seeder = Seeder::connect(&config.database).await?;
    tracing::info!("Connected to database");

    seeder.insert_pin(&values.into_row(bytes)).await?;
    seeder.close().await?;

    tracing::info!("Custom pin seeded");
    Ok(())
}

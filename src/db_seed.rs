use canteen_cli::config::CliConfig;
use canteen_core::clock::{Clock, SystemClock};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = CliConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Seeding data directory {}", config.data_dir.display());
    canteen_db::open_store(&config.data_dir, SystemClock.now())?;
    println!("Data directory {} is ready.", config.data_dir.display());

    Ok(())
}

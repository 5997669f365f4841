use canteen_cli::{config::CliConfig, handle_command, Cli, HandlerContext};
use canteen_core::clock::{Clock, SystemClock};
use canteen_db::open_store;
use clap::Parser;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // Load configuration, the command line wins over the environment
    let mut config = CliConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir.clone() {
        config.data_dir = data_dir;
    }

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { config.log_level };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let now = SystemClock.now();
    let store = open_store(&config.data_dir, now)?;
    let ctx = HandlerContext::new(&store, &config, now);

    match handle_command(&ctx, cli.command).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

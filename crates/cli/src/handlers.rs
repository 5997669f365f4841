use canteen_core::errors::CanteenResult;
use canteen_db::KeyValueStore;
use chrono::NaiveDateTime;
use tracing::debug;

use crate::commands::Commands;
use crate::config::CliConfig;

pub mod admin;
pub mod browse;
pub mod owner;
pub mod session;

/// Shared context for command handlers.
///
/// Bundles the store, the configuration and the reference instant so every
/// handler evaluates schedules against the same moment.
pub struct HandlerContext<'a, S: ?Sized> {
    pub store: &'a S,
    pub config: &'a CliConfig,
    pub now: NaiveDateTime,
}

impl<'a, S: ?Sized> HandlerContext<'a, S> {
    pub fn new(store: &'a S, config: &'a CliConfig, now: NaiveDateTime) -> Self {
        Self { store, config, now }
    }
}

/// Runs one command and returns the text to print.
pub async fn handle_command<S>(
    ctx: &HandlerContext<'_, S>,
    command: Commands,
) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    match &command {
        Commands::Login { username, .. } => {
            debug!("Handling command: Login {{ username: {} }}", username)
        }
        other => debug!("Handling command: {:?}", other),
    }

    match command {
        Commands::List(args) => browse::list_canteens(ctx, &args),
        Commands::Show { id } => browse::show_canteen(ctx, &id),
        Commands::Login { username, password } => session::login(ctx, &username, &password),
        Commands::Logout => session::logout(ctx),
        Commands::Whoami => session::whoami(ctx),
        Commands::Stats => admin::stats(ctx),
        Commands::Status { state } => owner::set_status(ctx, state),
        Commands::Details(args) => owner::update_details(ctx, &args),
        Commands::Menu(args) => owner::menu(ctx, args.action),
        Commands::Hours(args) => owner::hours(ctx, args.action),
        Commands::Closed(args) => owner::closed_dates(ctx, args.action),
        Commands::Image(args) => owner::image(ctx, args.action).await,
    }
}

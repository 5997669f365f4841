use std::time::Duration;

use canteen_cli::config::CliConfig;
use canteen_cli::{handle_command, Cli, HandlerContext};
use canteen_core::errors::CanteenResult;
use canteen_core::models::canteen::Canteen;
use canteen_db::mock::seeded_memory_store;
use canteen_db::repositories::canteen::get_canteen_by_id;
use canteen_db::MemoryStore;
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;

/// Monday 2024-06-03 at the given time.
pub fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub struct TestContext {
    pub store: MemoryStore,
    pub config: CliConfig,
    pub now: NaiveDateTime,
}

impl TestContext {
    pub fn new() -> Self {
        Self::at(monday_at(10, 0))
    }

    pub fn at(now: NaiveDateTime) -> Self {
        let config = CliConfig {
            upload_delay: Duration::ZERO,
            ..CliConfig::default()
        };
        Self {
            store: seeded_memory_store(now),
            config,
            now,
        }
    }

    /// Parses `args` as a command line and runs it against the seeded store.
    pub async fn run(&self, args: &[&str]) -> CanteenResult<String> {
        let cli = Cli::try_parse_from(std::iter::once("canteen").chain(args.iter().copied()))
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", args, e));
        let ctx = HandlerContext::new(&self.store, &self.config, self.now);
        handle_command(&ctx, cli.command).await
    }

    pub async fn login(&self, username: &str, password: &str) {
        self.run(&["login", username, password]).await.unwrap();
    }

    pub async fn login_owner(&self) {
        self.login("nilachal_owner", "nilachal123").await;
    }

    pub fn canteen(&self, id: &str) -> Canteen {
        get_canteen_by_id(&self.store, id).unwrap().unwrap()
    }
}

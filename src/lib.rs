use chrono::Local;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use jobs::reminder::{run_reminder_job, RunReport, TelegramClient};
use store::ReminderStore;
use utils::mask_token;

pub mod config;
pub mod constants;
pub mod jobs;
pub mod models;
pub mod store;
pub mod utils;

/// Run the daily reminder check once.
///
/// Returns `None` when the configuration is incomplete and nothing was attempted.
pub async fn start_reminder_job() -> Option<RunReport> {
    // import .env file
    dotenv().ok();
    initialize_logging();
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            return None;
        }
    };
    tracing::info!(
        "starting reminder run, bot token {}, chat id {}",
        mask_token(&config.bot_token),
        config.chat_id
    );
    let notifier = match TelegramClient::new(&config) {
        Ok(notifier) => notifier,
        Err(e) => {
            tracing::error!("not able to build telegram client: {e}");
            return None;
        }
    };
    notifier.check_connection().await;
    let store = ReminderStore::from_config(&config);
    let now = Local::now().naive_local();
    Some(run_reminder_job(&store, &notifier, now).await)
}

fn initialize_logging() {
    // create default env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or("telegram_reminder=debug".into());

    // initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

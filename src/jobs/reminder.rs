pub mod due_check;
pub mod message;
pub mod reminder_job;
pub mod telegram;

pub use due_check::{evaluate, DueCheck};
pub use reminder_job::{run_reminder_job, RunOutcome, RunReport};
pub use telegram::{Notifier, TelegramClient};

pub mod helper;

pub use helper::build_config;
pub use helper::build_store;
pub use helper::mount_send_message;
pub use helper::read_reminders;
pub use helper::run_time;
pub use helper::telegram_ok;
pub use helper::write_reminders;
pub use helper::CHAT_ID;
pub use helper::GET_ME_PATH;
pub use helper::SEND_MESSAGE_PATH;

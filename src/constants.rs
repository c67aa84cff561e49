pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const TELEGRAM_PARSE_MODE: &str = "HTML";
pub const TELEGRAM_SEND_MESSAGE: &str = "sendMessage";
pub const TELEGRAM_GET_ME: &str = "getMe";
pub const TELEGRAM_MAX_MESSAGE_LEN: usize = 4096;
pub const TRUNCATION_RESERVE: usize = 100;
pub const TOKEN_VISIBLE_CHARS: usize = 10;

pub const DEFAULT_REMINDERS_FILE: &str = "reminders.json";
pub const DEFAULT_BACKUP_DIR: &str = "backups";
pub const BACKUP_FILE_PREFIX: &str = "reminders-";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const DEFAULT_INTERVAL_DAYS: i64 = 3;
pub const DEFAULT_REMINDER_NAME: &str = "unnamed";
pub const EXAMPLE_REMINDER_NAME: &str = "Example reminder";
pub const NEXT_CHECK_HINT: &str = "tomorrow 11:00 (Beijing time)";

pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_REMINDERS_FILE: &str = "REMINDERS_FILE";
pub const ENV_BACKUP_DIR: &str = "REMINDERS_BACKUP_DIR";
pub const ENV_API_BASE: &str = "TELEGRAM_API_BASE";

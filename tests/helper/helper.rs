use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};
use std::{fs, path::Path};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use telegram_reminder::{config::AppConfig, store::ReminderStore};

pub const BOT_TOKEN: &str = "123456:TEST-TOKEN";
pub const CHAT_ID: &str = "-1001234";
pub const SEND_MESSAGE_PATH: &str = "/bot123456:TEST-TOKEN/sendMessage";
pub const GET_ME_PATH: &str = "/bot123456:TEST-TOKEN/getMe";

pub fn build_config(server: &MockServer, dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::new(BOT_TOKEN, CHAT_ID);
    config.api_base = server.uri();
    config.reminders_file = dir.path().join("reminders.json");
    config.backup_dir = Some(dir.path().join("backups"));
    config
}

pub fn build_store(config: &AppConfig) -> ReminderStore {
    ReminderStore::from_config(config)
}

pub fn write_reminders(path: &Path, reminders: &Value) -> String {
    let content = serde_json::to_string_pretty(reminders).unwrap();
    fs::write(path, &content).unwrap();
    content
}

pub fn read_reminders(path: &Path) -> Value {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn run_time(date: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(11, 0, 0)
        .unwrap()
}

pub async fn mount_send_message(server: &MockServer, template: ResponseTemplate, times: u64) {
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .respond_with(template)
        .expect(times)
        .mount(server)
        .await;
}

pub fn telegram_ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ok": true,
        "result": {"message_id": 1}
    }))
}

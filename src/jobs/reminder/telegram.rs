use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use super::message::truncate_message;
use crate::{config::AppConfig, constants::*, utils::NotifyError};

/// Delivers one text message to the configured chat.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GetMeResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    result: Option<BotUser>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BotUser {
    #[serde(default)]
    username: Option<String>,
}

/// Telegram Bot API client bound to one bot and one chat
pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Self::with_timeout(config, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(config: &AppConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = format!("{}/bot{}", config.api_base, config.bot_token);
        Ok(Self {
            client,
            base_url,
            chat_id: config.chat_id.clone(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// Ask Telegram who the bot is and log the answer.
    ///
    /// Diagnostic only: failures are logged and reported as `false`.
    pub async fn check_connection(&self) -> bool {
        match self.get_me().await {
            Ok(username) => {
                tracing::info!("connected to telegram as @{username}");
                true
            }
            Err(e) => {
                tracing::warn!("telegram connection check failed: {e}");
                false
            }
        }
    }

    async fn get_me(&self) -> Result<String, NotifyError> {
        let res = self.client.get(self.method_url(TELEGRAM_GET_ME)).send().await?;
        let status = res.status();
        let body = res.text().await?;
        if status != StatusCode::OK {
            return Err(NotifyError::Http {
                status: status.as_u16(),
                body,
            });
        }
        let response: GetMeResponse = serde_json::from_str(&body)
            .map_err(|e| NotifyError::Rejected(format!("unexpected response {body:?}: {e}")))?;
        if !response.ok {
            let description = response
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(NotifyError::Rejected(description));
        }
        let username = response
            .result
            .and_then(|user| user.username)
            .unwrap_or_else(|| "unknown".to_string());
        Ok(username)
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        let text = truncate_message(text);
        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text: &text,
            parse_mode: TELEGRAM_PARSE_MODE,
            disable_web_page_preview: true,
        };
        tracing::debug!("sending message to telegram chat {}", self.chat_id);
        let res = self
            .client
            .post(self.method_url(TELEGRAM_SEND_MESSAGE))
            .json(&payload)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;
        if status != StatusCode::OK {
            return Err(NotifyError::Http {
                status: status.as_u16(),
                body,
            });
        }
        let response: SendMessageResponse = serde_json::from_str(&body)
            .map_err(|e| NotifyError::Rejected(format!("unexpected response {body:?}: {e}")))?;
        if !response.ok {
            let description = response
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(NotifyError::Rejected(description));
        }
        Ok(())
    }
}

use anyhow::anyhow;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{constants::*, utils::format_date};

/// One reminder item as stored in the reminders file.
///
/// Fields keep the JSON value they were read with; a key that is present with
/// `null` stays `Some(Value::Null)` and is written back as `null`. Typed views
/// are produced on demand by the accessors, so a record is always saved exactly
/// as it was read unless the due check advances `lastUpdated`.
/// Keys this type does not know about are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "deserialize_present")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "deserialize_present")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "deserialize_present")]
    pub last_updated: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "deserialize_present")]
    pub days: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "deserialize_present")]
    pub created_at: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "deserialize_present")]
    pub enabled: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReminderRecord {
    /// Seed record written when no reminders file exists yet
    pub fn example(now: NaiveDateTime) -> Self {
        Self {
            id: Some(Value::from(1)),
            name: Some(Value::from(EXAMPLE_REMINDER_NAME)),
            last_updated: Some(Value::from(format_date(now.date()))),
            days: Some(Value::from(DEFAULT_INTERVAL_DAYS)),
            created_at: Some(Value::from(now.format(CREATED_AT_FORMAT).to_string())),
            enabled: None,
            extra: Map::new(),
        }
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            None | Some(Value::Null) => DEFAULT_REMINDER_NAME.to_string(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Only an explicit `false` disables a record
    pub fn is_enabled(&self) -> bool {
        !matches!(self.enabled, Some(Value::Bool(false)))
    }

    /// The stored update date, `default` when the key is absent
    pub fn last_updated_or(&self, default: &str) -> anyhow::Result<String> {
        match &self.last_updated {
            None => Ok(default.to_string()),
            Some(Value::String(date)) => Ok(date.clone()),
            Some(other) => Err(anyhow!("invalid lastUpdated {other}")),
        }
    }

    pub fn set_last_updated(&mut self, date: String) {
        self.last_updated = Some(Value::String(date));
    }

    /// The reminder interval as a whole number of days.
    ///
    /// Accepts an integer, a float (truncated) or a numeric string; the stored
    /// value itself is never rewritten.
    pub fn interval_days(&self) -> anyhow::Result<i64> {
        let Some(days) = &self.days else {
            return Ok(DEFAULT_INTERVAL_DAYS);
        };
        let interval = match days {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        interval.ok_or_else(|| anyhow!("invalid interval {days}"))
    }
}

/// An element of the reminders array.
///
/// Elements that are not JSON objects are kept verbatim so that a single bad
/// entry never costs the rest of the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ReminderEntry {
    Record(ReminderRecord),
    Malformed(Value),
}

impl From<ReminderRecord> for ReminderEntry {
    fn from(record: ReminderRecord) -> Self {
        Self::Record(record)
    }
}

// a present key always yields Some, even when its value is null
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

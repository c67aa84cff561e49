use anyhow::anyhow;
use chrono::{Days, NaiveDate};

use super::message::reminder_fragment;
use crate::{
    models::{ReminderEntry, ReminderRecord},
    utils::{format_date, parse_date},
};

/// Result of checking the whole reminder list against one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DueCheck {
    /// one fragment per due reminder, in list order
    pub messages: Vec<String>,
    /// the full list with `lastUpdated` advanced on due reminders
    pub updated: Vec<ReminderEntry>,
}

impl DueCheck {
    pub fn due_count(&self) -> usize {
        self.messages.len()
    }
}

/// Find the reminders due on `today`.
///
/// A reminder is due once `lastUpdated + days` is on or before `today`.
/// Entries that cannot be evaluated are passed through untouched.
pub fn evaluate(entries: &[ReminderEntry], today: NaiveDate) -> DueCheck {
    tracing::info!("checking {} reminders for {}", entries.len(), format_date(today));
    let mut messages = Vec::new();
    let mut updated = Vec::with_capacity(entries.len());
    for entry in entries {
        let record = match entry {
            ReminderEntry::Record(record) => record,
            ReminderEntry::Malformed(value) => {
                tracing::warn!("skipping malformed reminder entry: {value}");
                updated.push(entry.clone());
                continue;
            }
        };
        if !record.is_enabled() {
            tracing::debug!("reminder '{}' is disabled", record.display_name());
            updated.push(entry.clone());
            continue;
        }
        match check_record(record, today) {
            Ok(Some(fragment)) => {
                messages.push(fragment);
                let mut record = record.clone();
                record.set_last_updated(format_date(today));
                updated.push(record.into());
            }
            Ok(None) => updated.push(entry.clone()),
            Err(e) => {
                tracing::warn!("not able to process reminder '{}': {e}", record.display_name());
                updated.push(entry.clone());
            }
        }
    }
    tracing::info!("found {} due reminders", messages.len());
    DueCheck { messages, updated }
}

// returns the message fragment when the record is due
fn check_record(record: &ReminderRecord, today: NaiveDate) -> anyhow::Result<Option<String>> {
    let name = record.display_name();
    let last_updated = record.last_updated_or(&format_date(today))?;
    let days = record.interval_days()?;
    let last_date =
        parse_date(&last_updated).ok_or_else(|| anyhow!("invalid lastUpdated {last_updated:?}"))?;
    let next_due = add_days(last_date, days)
        .ok_or_else(|| anyhow!("interval of {days} days is out of range"))?;
    tracing::debug!(
        "reminder '{name}': last updated {last_updated}, every {days} days, next due {}",
        format_date(next_due)
    );
    if next_due <= today {
        return Ok(Some(reminder_fragment(&name, &last_updated, days)));
    }
    let days_left = (next_due - today).num_days();
    tracing::debug!("reminder '{name}' is due in {days_left} days");
    Ok(None)
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

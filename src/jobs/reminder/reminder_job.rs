use chrono::NaiveDateTime;

use super::{
    due_check::evaluate,
    message::{all_clear_message, combined_message, no_reminders_message},
    telegram::Notifier,
};
use crate::store::ReminderStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// the list was empty or could not be read
    NoReminders,
    /// nothing was due, a status message was sent
    AllClear,
    /// due reminders were delivered
    Reminded,
    /// due reminders could not be delivered, nothing was saved
    DeliveryFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub total: usize,
    pub due: usize,
    pub delivered: bool,
    pub saved: bool,
}

/// One complete reminder run.
///
/// Advanced dates are written back only after Telegram has acknowledged the
/// message, so undelivered reminders stay due for the next run.
pub async fn run_reminder_job<N>(store: &ReminderStore, notifier: &N, now: NaiveDateTime) -> RunReport
where
    N: Notifier + ?Sized,
{
    let today = now.date();
    let entries = store.load(now).unwrap_or_else(|e| {
        tracing::error!("not able to load reminders: {e}");
        vec![]
    });

    if entries.is_empty() {
        tracing::info!("no reminders configured");
        let delivered = deliver(notifier, &no_reminders_message()).await;
        return finish(RunReport {
            outcome: RunOutcome::NoReminders,
            total: 0,
            due: 0,
            delivered,
            saved: false,
        });
    }

    let total = entries.len();
    let check = evaluate(&entries, today);
    if check.messages.is_empty() {
        let delivered = deliver(notifier, &all_clear_message(today, total)).await;
        return finish(RunReport {
            outcome: RunOutcome::AllClear,
            total,
            due: 0,
            delivered,
            saved: false,
        });
    }

    let due = check.due_count();
    tracing::info!("sending {due} reminders");
    let message = combined_message(&check.messages, now);
    if !deliver(notifier, &message).await {
        tracing::error!("reminders were not delivered, keeping {} unchanged", store.path().display());
        return finish(RunReport {
            outcome: RunOutcome::DeliveryFailed,
            total,
            due,
            delivered: false,
            saved: false,
        });
    }

    let saved = match store.save(&check.updated, today) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("not able to save reminders: {e}");
            false
        }
    };
    finish(RunReport {
        outcome: RunOutcome::Reminded,
        total,
        due,
        delivered: true,
        saved,
    })
}

async fn deliver<N>(notifier: &N, text: &str) -> bool
where
    N: Notifier + ?Sized,
{
    match notifier.send_message(text).await {
        Ok(()) => {
            tracing::info!("message delivered");
            true
        }
        Err(e) => {
            tracing::error!("not able to deliver message: {e}");
            false
        }
    }
}

fn finish(report: RunReport) -> RunReport {
    tracing::info!(
        "run finished: {:?}, total {}, due {}, delivered {}, saved {}",
        report.outcome,
        report.total,
        report.due,
        report.delivered,
        report.saved
    );
    report
}

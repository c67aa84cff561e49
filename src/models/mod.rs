pub mod reminder;

pub use reminder::{ReminderEntry, ReminderRecord};

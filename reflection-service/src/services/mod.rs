pub mod providers;
pub mod webhook;

pub use webhook::{ForwardOutcome, SheetWebhook};

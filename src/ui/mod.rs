mod output;

pub use output::{display_reply, AlertSink, RecordingAlerts, TerminalAlerts};

use colored::*;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::time::Duration;

use crate::models::Message;

/// Sink for the global blocking alerts fired by the HTTP layer
/// (server unreachable, internal server error). The alert never replaces
/// error propagation; it fires in addition to the returned error.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints alerts to stderr in red, the closest terminal equivalent of a
/// blocking browser alert.
pub struct TerminalAlerts;

impl AlertSink for TerminalAlerts {
    fn alert(&self, message: &str) {
        eprintln!("{} {}", "[!]".red().bold(), message.red());
    }
}

/// Records alerts for inspection in tests.
#[derive(Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Render a model reply. New replies get a typewriter effect; replayed
/// history prints at once.
pub fn display_reply(message: &Message) {
    if message.is_new {
        let mut stdout = io::stdout();
        for ch in message.content.chars() {
            print!("{}", ch);
            let _ = stdout.flush();
            std::thread::sleep(Duration::from_millis(12));
        }
        println!();
    } else {
        println!("{}", message.content);
    }
}

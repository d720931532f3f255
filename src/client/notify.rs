use std::time::Duration;

use tokio::time::Instant;

/// How long an error message stays on screen.
pub const MESSAGE_SHOW_TIME: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub raised_at: Instant,
}

/// Transient, self-dismissing error messages.
#[derive(Debug)]
pub struct Notifications {
    entries: Vec<Notification>,
    show_time: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(MESSAGE_SHOW_TIME)
    }
}

impl Notifications {
    pub fn new(show_time: Duration) -> Self {
        Self {
            entries: Vec::new(),
            show_time,
        }
    }

    pub fn error(&mut self, message: &str) {
        let now = Instant::now();
        self.prune(now);
        self.entries.push(Notification {
            message: message.to_string(),
            raised_at: now,
        });
    }

    /// Messages still visible at `now`, oldest first.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.entries
            .iter()
            .filter(move |n| now.duration_since(n.raised_at) < self.show_time)
    }

    pub fn prune(&mut self, now: Instant) {
        let show_time = self.show_time;
        self.entries
            .retain(|n| now.duration_since(n.raised_at) < show_time);
    }
}

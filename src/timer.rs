use std::time::Duration;

/// One-shot countdown driven by the host's frame time.
///
/// Holds at most one pending deadline: scheduling replaces whatever was
/// pending, so a chain of self-rescheduling cycles can never fork.
#[derive(Debug, Default)]
pub struct Timer {
    remaining: Option<Duration>,
}

impl Timer {
    pub fn new() -> Self {
        Self { remaining: None }
    }

    pub fn schedule(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    #[cfg(test)]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advances the countdown. Returns true on the tick the deadline is reached.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(remaining) if dt >= remaining => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - dt);
                false
            }
            None => false,
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::modules::contact::application::ports::outgoing::{ContactSubmitter, SubmissionError};
use crate::modules::contact::domain::ContactMessage;

pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Demo transport: waits a fixed delay, then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedContactSubmitter {
    delay: Duration,
}

impl SimulatedContactSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedContactSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedContactSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<(), SubmissionError> {
        debug!(from = %message.email, delay_ms = self.delay.as_millis() as u64, "Simulating contact delivery");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_default_delay() {
        let submitter = SimulatedContactSubmitter::default();
        let started = Instant::now();

        submitter.submit(message()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn still_pending_before_delay() {
        let submitter = SimulatedContactSubmitter::new(Duration::from_millis(500));

        let result =
            tokio::time::timeout(Duration::from_millis(499), submitter.submit(message())).await;
        assert!(result.is_err());
    }
}

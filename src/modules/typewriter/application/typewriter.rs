use std::time::Duration;

use futures::stream::{self, Stream};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::modules::typewriter::domain::Frame;

/// Reveals a fixed string one character per `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    delay: Duration,
}

impl Typewriter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }

    pub fn with_default_delay(text: impl Into<String>) -> Self {
        Self::new(text, Self::DEFAULT_DELAY)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Prefixes in reveal order, one per character, ending with the full text.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.text
            .char_indices()
            .map(|(idx, ch)| &self.text[..idx + ch.len_utf8()])
    }

    /// The whole reveal as a timed schedule; frame `k` (1-based) lands at `k * delay`.
    pub fn frames(&self) -> Vec<Frame> {
        self.prefixes()
            .zip(1u32..)
            .map(|(prefix, step)| Frame {
                at: self.delay * step,
                text: prefix.to_string(),
            })
            .collect()
    }

    /// Lazily paced prefixes. Nothing is emitted before the first delay
    /// elapses and the stream ends after the full text.
    pub fn stream(&self) -> impl Stream<Item = String> + Send + 'static {
        let delay = self.delay;
        let prefixes: Vec<String> = self.prefixes().map(str::to_string).collect();

        stream::unfold(prefixes.into_iter(), move |mut pending| async move {
            let next = pending.next()?;
            tokio::time::sleep(delay).await;
            Some((next, pending))
        })
    }

    /// Starts a fresh reveal from empty on a background task.
    pub fn mount(&self) -> TypewriterHandle {
        let (sender, receiver) = watch::channel(String::new());
        let delay = self.delay;
        let prefixes: Vec<String> = self.prefixes().map(str::to_string).collect();

        let task = tokio::spawn(async move {
            for prefix in prefixes {
                tokio::time::sleep(delay).await;
                if sender.send(prefix).is_err() {
                    break;
                }
            }
        });

        TypewriterHandle {
            current: receiver,
            task: Some(task),
        }
    }
}

/// A mounted reveal. Unmounting (or dropping) cancels the pending timer.
pub struct TypewriterHandle {
    current: watch::Receiver<String>,
    task: Option<JoinHandle<()>>,
}

impl TypewriterHandle {
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// Waits for the next revealed prefix. `None` once the reveal has ended.
    pub async fn next_change(&mut self) -> Option<String> {
        self.current.changed().await.ok()?;
        Some(self.current.borrow_and_update().clone())
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }

    pub fn unmount(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

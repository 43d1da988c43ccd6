use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::modules::reveal::application::ports::outgoing::ViewportObserver;
use crate::modules::reveal::domain::{RevealConfig, RevealPhase, VisualState};

//
// ──────────────────────────────────────────────────────────
// State machine
// ──────────────────────────────────────────────────────────
//

/// Viewport-gated staged reveal of a region and its children.
///
/// Starts hidden. The first intersection at or above the configured
/// threshold reveals it; with `once` set it never hides again until the
/// key changes. A key change resets to hidden and replays at once if the
/// region is in view.
#[derive(Debug, Clone)]
pub struct RevealOnView<K = ()> {
    config: RevealConfig,
    phase: RevealPhase,
    generation: u32,
    in_view: bool,
    key: Option<K>,
}

impl<K: PartialEq> RevealOnView<K> {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phase: RevealPhase::Hidden,
            generation: 0,
            in_view: false,
            key: None,
        }
    }

    pub fn keyed(config: RevealConfig, key: K) -> Self {
        Self {
            key: Some(key),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Number of times the reveal has played.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Feeds one intersection ratio. Returns `true` when this call played the reveal.
    pub fn on_intersection(&mut self, ratio: f32) -> bool {
        self.in_view = ratio > 0.0 && ratio >= self.config.threshold;

        match self.phase {
            RevealPhase::Hidden if self.in_view => {
                self.reveal();
                true
            }
            RevealPhase::Revealed { .. } if !self.in_view && !self.config.once => {
                self.phase = RevealPhase::Hidden;
                false
            }
            _ => false,
        }
    }

    /// Switches the key. A different key resets and, when in view, replays.
    /// Returns `true` when the reveal replayed.
    pub fn rekey(&mut self, key: K) -> bool {
        if self.key.as_ref() == Some(&key) {
            return false;
        }

        self.key = Some(key);
        self.phase = RevealPhase::Hidden;

        if self.in_view {
            self.reveal();
            return true;
        }
        false
    }

    /// Reveals without an observation signal and treats the region as in view.
    pub fn fail_open(&mut self) {
        self.in_view = true;
        if !self.phase.is_revealed() {
            self.reveal();
        }
    }

    /// State of child `index`, `elapsed` after the current reveal started.
    pub fn child_state(&self, index: usize, elapsed: Duration) -> VisualState {
        if !self.phase.is_revealed() {
            return self.config.hidden;
        }

        let delay = self.config.child_delay(index);
        if elapsed <= delay {
            return self.config.hidden;
        }

        let duration = self.config.duration();
        let progress = if duration.is_zero() {
            1.0
        } else {
            ((elapsed - delay).as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };

        interpolate(&self.config.hidden, &self.config.visible, progress)
    }

    fn reveal(&mut self) {
        self.generation += 1;
        self.phase = RevealPhase::Revealed {
            generation: self.generation,
        };
    }
}

fn interpolate(from: &VisualState, to: &VisualState, t: f32) -> VisualState {
    let lerp = |a: f32, b: f32| a + (b - a) * t;
    VisualState {
        opacity: lerp(from.opacity, to.opacity),
        x: lerp(from.x, to.x),
        y: lerp(from.y, to.y),
        scale: lerp(from.scale, to.scale),
    }
}

//
// ──────────────────────────────────────────────────────────
// Observation binding
// ──────────────────────────────────────────────────────────
//

/// A mounted [`RevealOnView`] bound to a viewport subscription.
///
/// Dropping the handle (or calling [`RevealHandle::detach`]) ends the
/// subscription.
pub struct RevealHandle<K = ()> {
    state: Arc<Mutex<RevealOnView<K>>>,
    task: Option<JoinHandle<()>>,
}

impl<K> RevealOnView<K>
where
    K: PartialEq + Send + 'static,
{
    /// Mounts the reveal. Must run inside a tokio runtime.
    ///
    /// Without an observer, or when observation fails, the region is
    /// revealed straight away. If the signal stream ends while still
    /// hidden, the region is revealed as well.
    pub fn attach(self, region: &str, observer: Option<&dyn ViewportObserver>) -> RevealHandle<K> {
        let threshold = self.config.threshold;
        let state = Arc::new(Mutex::new(self));

        let receiver = match observer.map(|o| o.observe(region, threshold)) {
            Some(Ok(receiver)) => receiver,
            Some(Err(err)) => {
                warn!(region, error = %err, "Viewport observation failed, revealing immediately");
                lock(&state).fail_open();
                return RevealHandle { state, task: None };
            }
            None => {
                debug!(region, "No viewport observer, revealing immediately");
                lock(&state).fail_open();
                return RevealHandle { state, task: None };
            }
        };

        let task_state = Arc::clone(&state);
        let region = region.to_string();
        let task = tokio::spawn(async move {
            let mut receiver = receiver;
            while let Some(ratio) = receiver.recv().await {
                if lock(&task_state).on_intersection(ratio) {
                    debug!(region = %region, ratio, "Region revealed");
                }
            }

            let mut reveal = lock(&task_state);
            if !reveal.phase().is_revealed() {
                warn!(region = %region, "Viewport signal ended before reveal, revealing");
                reveal.fail_open();
            }
        });

        RevealHandle {
            state,
            task: Some(task),
        }
    }
}

impl<K: PartialEq> RevealHandle<K> {
    pub fn phase(&self) -> RevealPhase {
        lock(&self.state).phase()
    }

    pub fn generation(&self) -> u32 {
        lock(&self.state).generation()
    }

    pub fn rekey(&self, key: K) -> bool {
        lock(&self.state).rekey(key)
    }

    pub fn child_state(&self, index: usize, elapsed: Duration) -> VisualState {
        lock(&self.state).child_state(index, elapsed)
    }

    pub fn is_attached(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn detach(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<K> Drop for RevealHandle<K> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn lock<K>(state: &Mutex<RevealOnView<K>>) -> MutexGuard<'_, RevealOnView<K>> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

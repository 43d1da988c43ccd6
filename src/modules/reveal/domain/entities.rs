use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One end of an entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::shown()
    }
}

impl VisualState {
    pub fn shown() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }

    pub fn faded() -> Self {
        Self {
            opacity: 0.0,
            ..Self::shown()
        }
    }

    pub fn rising(y: f32) -> Self {
        Self {
            y,
            ..Self::faded()
        }
    }

    pub fn sliding(x: f32) -> Self {
        Self {
            x,
            ..Self::faded()
        }
    }

    pub fn growing(scale: f32) -> Self {
        Self {
            scale,
            ..Self::faded()
        }
    }
}

/// Typed staged-transition settings for a revealed region and its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the region's area that must be visible, `0.0..=1.0`.
    pub threshold: f32,
    pub stagger_ms: u64,
    pub duration_ms: u64,
    pub delay_children_ms: u64,
    pub hidden: VisualState,
    pub visible: VisualState,
    /// Play once, then ignore scroll-out/scroll-in.
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            stagger_ms: 200,
            duration_ms: 600,
            delay_children_ms: 0,
            hidden: VisualState::rising(20.0),
            visible: VisualState::shown(),
            once: true,
        }
    }
}

impl RevealConfig {
    pub fn new(threshold: f32, stagger_ms: u64, duration_ms: u64, hidden: VisualState) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            stagger_ms,
            duration_ms,
            hidden,
            ..Self::default()
        }
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Start offset of the child at `index` once the region is revealed.
    pub fn child_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.delay_children_ms + self.stagger_ms * index as u64)
    }

    pub fn schedule(&self, children: usize) -> Vec<ChildReveal> {
        (0..children)
            .map(|index| ChildReveal {
                index,
                delay_ms: self.child_delay(index).as_millis() as u64,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChildReveal {
    pub index: usize,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RevealPhase {
    Hidden,
    Revealed { generation: u32 },
}

impl RevealPhase {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealPhase::Revealed { .. })
    }
}

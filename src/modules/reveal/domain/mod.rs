pub mod entities;

pub use entities::{ChildReveal, RevealConfig, RevealPhase, VisualState};

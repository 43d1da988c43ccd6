pub mod typewriter;

pub use typewriter::{Typewriter, TypewriterHandle};

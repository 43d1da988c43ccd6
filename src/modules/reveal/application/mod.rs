pub mod ports;
pub mod reveal_on_view;

pub use reveal_on_view::{RevealHandle, RevealOnView};

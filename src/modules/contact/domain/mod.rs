pub mod entities;

pub use entities::{AckStatus, Acknowledgment, ContactField, ContactMessage, FormState};

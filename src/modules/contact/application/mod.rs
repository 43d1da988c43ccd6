pub mod contact_form;
pub mod ports;

pub use contact_form::{ContactForm, ContactFormError};

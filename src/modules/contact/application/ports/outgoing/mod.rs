mod contact_submitter;

pub use contact_submitter::{ContactSubmitter, SubmissionError};

pub mod email_submitter;
pub mod simulated_submitter;

pub use email_submitter::EmailContactSubmitter;
pub use simulated_submitter::SimulatedContactSubmitter;

use serde::Serialize;
use std::time::Duration;

/// One step of a typewriter reveal: `text` is shown from `at` onwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    #[serde(rename = "atMs", serialize_with = "as_millis")]
    pub at: Duration,
    pub text: String,
}

fn as_millis<S: serde::Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(value.as_millis() as u64)
}

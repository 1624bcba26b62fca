use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub input: Value,
}

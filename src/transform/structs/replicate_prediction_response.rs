use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ReplicatePredictionResponse {
    pub id: String,
    pub model: Option<String>,
    pub status: String,
    pub input: Option<Value>,
    pub output: Option<Value>,
    pub error: Option<String>,
    pub logs: Option<String>,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub urls: Option<ReplicateUrls>,
}

#[derive(Debug, Deserialize)]
pub struct ReplicateUrls {
    pub get: Option<String>,
    pub cancel: Option<String>,
}

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    pub result_url: String,
    pub style: String,
    pub style_name: String,
    pub prediction_id: String,
    pub created_at: i64,
}

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpecGen4 {
    pub prompt: String,
    pub aspect_ratio: String,
    pub reference_tags: Vec<String>,
    pub reference_images: Vec<String>,
    pub output_resolution: String,
}

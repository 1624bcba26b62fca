use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransformPhotoDto {
    #[validate(url(message = "image_url must be a valid url."))]
    pub image_url: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "style must be between 1 and 50 characters."
    ))]
    pub style: String,
    pub user_id: i64,
    pub aspect_ratio: Option<String>,
    pub resolution: Option<String>,
}

impl TransformPhotoDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            image_url: self.image_url.trim().to_string(),
            style: self.style.trim().to_lowercase(),
            user_id: self.user_id,
            aspect_ratio: self
                .aspect_ratio
                .as_ref()
                .map(|ratio| ratio.trim().to_string()),
            resolution: self
                .resolution
                .as_ref()
                .map(|resolution| resolution.trim().to_string()),
        };
    }
}

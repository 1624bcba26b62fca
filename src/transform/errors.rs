use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransformApiError {
    StyleNotFound,
    AspectRatioNotSupported,
    ResolutionNotSupported,
    NotAnImage,
}

impl TransformApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::StyleNotFound => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Style not found.".to_string(),
            },
            Self::AspectRatioNotSupported => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Aspect ratio not supported.".to_string(),
            },
            Self::ResolutionNotSupported => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Resolution not supported.".to_string(),
            },
            Self::NotAnImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "File is not an image.".to_string(),
            },
        }
    }
}

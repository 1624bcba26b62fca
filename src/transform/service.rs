use std::time::Duration;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use reqwest::{header, StatusCode};
use serde_json::Value;
use tokio::time::sleep;
use tokio_retry::{strategy::FixedInterval, Retry};
use uuid::Uuid;

use crate::app::{envy::Envy, errors::DefaultApiError, models::api_error::ApiError, util::time};

use super::{
    config::API_URL,
    dtos::transform_photo_dto::TransformPhotoDto,
    enums::replicate_prediction_status::ReplicatePredictionStatus,
    errors::TransformApiError,
    models::{
        input_spec::InputSpec, input_spec_gen4::InputSpecGen4, style::Style,
        transform_result::TransformResult,
    },
    structs::replicate_prediction_response::ReplicatePredictionResponse,
    styles,
    util::replicate_files,
    DEFAULT_RESOLUTION,
};

static JPEG_QUALITY: u8 = 95;
static POLL_INTERVAL_SECS: u32 = 2;
static MAX_WAIT_SECS: u32 = 600;

/// Runs the full transformation: fetch the source photo, normalize it to
/// JPEG, re-upload it, submit a prediction and poll until it finishes.
pub async fn transform_photo(
    dto: &TransformPhotoDto,
    envy: &Envy,
) -> Result<TransformResult, ApiError> {
    let dto = dto.sanitized();
    let api_key = &envy.replicate_api_key;

    let Some(style) = styles::get_style(&dto.style)
    else {
        return Err(TransformApiError::StyleNotFound.value());
    };

    let aspect_ratio = styles::normalize_aspect_ratio(
        dto.aspect_ratio.as_deref().unwrap_or(style.aspect_ratio),
    );

    if !styles::is_supported_aspect_ratio(aspect_ratio) {
        return Err(TransformApiError::AspectRatioNotSupported.value());
    }

    let resolution = dto.resolution.as_deref().unwrap_or(DEFAULT_RESOLUTION);

    if !styles::is_supported_resolution(resolution) {
        return Err(TransformApiError::ResolutionNotSupported.value());
    }

    tracing::info!(
        "transforming photo for user {} with style {}, aspect_ratio {}, resolution {}",
        dto.user_id,
        style.key,
        aspect_ratio,
        resolution
    );

    let bytes = replicate_files::service::download_file_with_retry(&dto.image_url, api_key).await?;
    let jpeg = to_jpeg(&bytes)?;

    let file_name = format!("{}.jpg", Uuid::new_v4());
    let reference_url =
        replicate_files::service::upload_file_with_retry(&jpeg, &file_name, api_key).await?;

    let response =
        await_prediction_completion(style, aspect_ratio, resolution, &reference_url, api_key)
            .await?;

    let Some(result_url) = response.output.as_ref().and_then(output_to_url)
    else {
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Prediction generated no image.".to_string(),
        });
    };

    tracing::info!("transformation {} succeeded: {}", response.id, result_url);

    Ok(TransformResult {
        result_url,
        style: style.key.to_string(),
        style_name: style.name.to_string(),
        prediction_id: response.id,
        created_at: time::current_time_in_secs() as i64,
    })
}

/// Re-encodes arbitrary image bytes as an RGB JPEG.
fn to_jpeg(data: &Bytes) -> Result<Bytes, ApiError> {
    let img = match image::load_from_memory(data) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!("to_jpeg (1): {:?}", e);
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Failed to open image.".to_string(),
            });
        }
    };

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);

    match img.to_rgb8().write_with_encoder(encoder) {
        Ok(_) => Ok(Bytes::from(buffer)),
        Err(e) => {
            tracing::error!("to_jpeg (2): {:?}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// The service reports `output` as a plain url, or as a list of urls for
/// multi-output models. Anything else is stringified.
fn output_to_url(output: &Value) -> Option<String> {
    match output {
        Value::String(url) => Some(url.to_string()),
        Value::Array(values) => values.first().and_then(|value| value.as_str().map(|url| url.to_string())),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

async fn await_prediction_completion(
    style: &Style,
    aspect_ratio: &str,
    resolution: &str,
    reference_url: &str,
    api_key: &str,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let create_prediction_result =
        create_prediction_with_retry(style, aspect_ratio, resolution, reference_url, api_key).await;
    let Ok(create_prediction_response) = create_prediction_result
    else {
        tracing::error!("await_prediction_completion failed create_prediction_with_retry");
        return Err(create_prediction_result.unwrap_err());
    };

    let mut prediction = create_prediction_response;
    let mut succeeded = false;
    let mut failed = false;
    let mut canceled = false;
    let mut encountered_error = false;

    let mut elapsed_time: u32 = 0;
    let wait_time: u32 = POLL_INTERVAL_SECS;

    while !succeeded && !failed && !canceled && !encountered_error {
        tracing::debug!("waiting for prediction {}", prediction.id);
        sleep(Duration::from_secs(wait_time.into())).await;

        let Ok(check_response) = get_prediction_by_id_with_retry(&prediction.id, api_key).await
        else {
            tracing::error!("await_prediction_completion failed get_prediction_by_id_with_retry");
            encountered_error = true;
            continue;
        };

        prediction = check_response;
        elapsed_time += wait_time;

        if elapsed_time > MAX_WAIT_SECS {
            tracing::error!("await_prediction_completion failed (ran out of time)");
            encountered_error = true;
            continue;
        }

        succeeded = prediction.status == ReplicatePredictionStatus::Succeeded.value();
        failed = prediction.status == ReplicatePredictionStatus::Failed.value();
        canceled = prediction.status == ReplicatePredictionStatus::Canceled.value();
    }

    if succeeded {
        return Ok(prediction);
    }

    tracing::error!(
        "await_prediction_completion failed (status {}): {:?}",
        prediction.status,
        prediction.error
    );

    let mut message = format!("Transformation ended with status: {}", prediction.status);
    if let Some(error) = &prediction.error {
        message = format!("{} - {}", message, error);
    }

    Err(ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message,
    })
}

async fn create_prediction_with_retry(
    style: &Style,
    aspect_ratio: &str,
    resolution: &str,
    reference_url: &str,
    api_key: &str,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let retry_strategy = FixedInterval::from_millis(10000).take(3);

    Retry::spawn(retry_strategy, || async {
        create_prediction(style, aspect_ratio, resolution, reference_url, api_key).await
    })
    .await
}

async fn create_prediction(
    style: &Style,
    aspect_ratio: &str,
    resolution: &str,
    reference_url: &str,
    api_key: &str,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let input_spec = provide_input_spec(style, aspect_ratio, resolution, reference_url);

    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", mime::APPLICATION_JSON.to_string().parse().unwrap());
    headers.insert(
        "Authorization",
        format!("Token {}", api_key).parse().unwrap(),
    );

    let client = reqwest::Client::new();
    let url = format!("{}/models/{}/predictions", API_URL, style.model);
    let result = client
        .post(url)
        .headers(headers)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => match res.text().await {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(prediction_response) => Ok(prediction_response),
                Err(_) => {
                    tracing::warn!("create_prediction (1): {:?}", text);
                    Err(DefaultApiError::InternalServerError.value())
                }
            },
            Err(e) => {
                tracing::warn!("create_prediction (2): {:?}", e);
                Err(DefaultApiError::InternalServerError.value())
            }
        },
        Err(e) => {
            tracing::warn!("create_prediction (3): {:?}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

async fn get_prediction_by_id_with_retry(
    id: &str,
    api_key: &str,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let retry_strategy = FixedInterval::from_millis(10000).take(3);

    Retry::spawn(retry_strategy, || async {
        get_prediction_by_id(id, api_key).await
    })
    .await
}

async fn get_prediction_by_id(
    id: &str,
    api_key: &str,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", mime::APPLICATION_JSON.to_string().parse().unwrap());
    headers.insert(
        "Authorization",
        format!("Token {}", api_key).parse().unwrap(),
    );

    let client = reqwest::Client::new();
    let url = format!("{}/predictions/{}", API_URL, id);
    let result = client.get(url).headers(headers).send().await;

    match result {
        Ok(res) => match res.text().await {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(prediction_response) => Ok(prediction_response),
                Err(_) => {
                    tracing::warn!("get_prediction_by_id (1): {:?}", text);
                    Err(DefaultApiError::InternalServerError.value())
                }
            },
            Err(e) => {
                tracing::warn!("get_prediction_by_id (2): {:?}", e);
                Err(DefaultApiError::InternalServerError.value())
            }
        },
        Err(e) => {
            tracing::warn!("get_prediction_by_id (3): {:?}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

fn provide_input_spec(
    style: &Style,
    aspect_ratio: &str,
    resolution: &str,
    reference_url: &str,
) -> InputSpec {
    let input = serde_json::to_value(InputSpecGen4 {
        prompt: style.prompt_template.to_string(),
        aspect_ratio: aspect_ratio.to_string(),
        reference_tags: vec!["person".to_string()],
        reference_images: vec![reference_url.to_string()],
        output_resolution: resolution.to_string(),
    })
    .unwrap();

    InputSpec { input }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_url_from_string_array_and_null() {
        assert_eq!(
            output_to_url(&Value::String("https://x/y.png".to_string())),
            Some("https://x/y.png".to_string())
        );
        assert_eq!(
            output_to_url(&serde_json::json!(["https://x/a.png", "https://x/b.png"])),
            Some("https://x/a.png".to_string())
        );
        assert_eq!(output_to_url(&Value::Null), None);
    }

    #[test]
    fn input_spec_carries_prompt_and_reference() {
        let style = styles::get_style("lego").unwrap();
        let spec = provide_input_spec(style, "9:16", "720p", "https://files/ref");
        let input = &spec.input;

        assert_eq!(input["prompt"], style.prompt_template);
        assert_eq!(input["aspect_ratio"], "9:16");
        assert_eq!(input["reference_tags"], serde_json::json!(["person"]));
        assert_eq!(
            input["reference_images"],
            serde_json::json!(["https://files/ref"])
        );
        assert_eq!(input["output_resolution"], "720p");
    }

    #[tokio::test]
    async fn unknown_style_is_rejected_before_any_network_call() {
        let dto = TransformPhotoDto {
            image_url: "https://api.replicate.com/v1/files/abc".to_string(),
            style: "claymation".to_string(),
            user_id: 1,
            aspect_ratio: None,
            resolution: None,
        };
        let envy = Envy {
            app_env: "test".to_string(),
            replicate_api_key: "test-key".to_string(),
        };

        let result = transform_photo(&dto, &envy).await;
        assert_eq!(result.unwrap_err(), TransformApiError::StyleNotFound.value());
    }

    #[tokio::test]
    async fn unsupported_ratio_and_resolution_are_rejected() {
        let envy = Envy {
            app_env: "test".to_string(),
            replicate_api_key: "test-key".to_string(),
        };
        let mut dto = TransformPhotoDto {
            image_url: "https://api.replicate.com/v1/files/abc".to_string(),
            style: "art".to_string(),
            user_id: 1,
            aspect_ratio: Some("2:3".to_string()),
            resolution: None,
        };

        let result = transform_photo(&dto, &envy).await;
        assert_eq!(
            result.unwrap_err(),
            TransformApiError::AspectRatioNotSupported.value()
        );

        dto.aspect_ratio = Some("9".to_string());
        dto.resolution = Some("1080p".to_string());
        let result = transform_photo(&dto, &envy).await;
        assert_eq!(
            result.unwrap_err(),
            TransformApiError::ResolutionNotSupported.value()
        );
    }

    #[test]
    fn jpeg_reencode_accepts_png_and_rejects_garbage() {
        let mut png = Vec::new();
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image::ImageFormat::Png,
            )
            .unwrap();

        let jpeg = to_jpeg(&Bytes::from(png)).unwrap();
        let size = imagesize::blob_size(&jpeg).unwrap();
        assert_eq!((size.width, size.height), (4, 4));
        assert!(jpeg.starts_with(&[0xFF, 0xD8, 0xFF]));

        let err = to_jpeg(&Bytes::from_static(b"definitely not an image")).unwrap_err();
        assert_eq!(err.code, StatusCode::BAD_REQUEST);
    }
}

use bytes::Bytes;
use reqwest::{header, StatusCode};
use tokio_retry::{strategy::FixedInterval, Retry};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    transform::{config::API_URL, errors::TransformApiError},
};

use super::structs::replicate_file_response::ReplicateFileResponse;

pub async fn upload_file_with_retry(
    data: &Bytes,
    file_name: &str,
    api_key: &str,
) -> Result<String, ApiError> {
    let retry_strategy = FixedInterval::from_millis(10000).take(3);

    Retry::spawn(retry_strategy, || async {
        upload_file(data, file_name, api_key).await
    })
    .await
}

/// Uploads raw bytes to the file store and returns the metadata URL.
pub async fn upload_file(data: &Bytes, file_name: &str, api_key: &str) -> Result<String, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        "Content-Type",
        mime::APPLICATION_OCTET_STREAM.to_string().parse().unwrap(),
    );
    headers.insert("X-File-Name", file_name.parse().unwrap());
    headers.insert(
        "Authorization",
        format!("Token {}", api_key).parse().unwrap(),
    );

    let client = reqwest::Client::new();
    let url = format!("{}/files", API_URL);
    let result = client
        .post(url)
        .headers(headers)
        .body(data.clone())
        .send()
        .await;

    match result {
        Ok(res) => {
            if res.status() != StatusCode::CREATED {
                let status = res.status();
                let text = res.text().await.unwrap_or_default();
                tracing::warn!("upload_file (1): {} {:?}", status, text);
                return Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Failed to upload file: HTTP {}", status),
                });
            }

            match res.text().await {
                Ok(text) => match serde_json::from_str::<ReplicateFileResponse>(&text) {
                    Ok(file_response) => match file_response.metadata_url(API_URL) {
                        Some(metadata_url) => {
                            tracing::info!("uploaded file, metadata url: {}", metadata_url);
                            Ok(metadata_url)
                        }
                        None => {
                            tracing::warn!("upload_file (2): {:?}", text);
                            Err(ApiError {
                                code: StatusCode::INTERNAL_SERVER_ERROR,
                                message: "Upload response contains no url.".to_string(),
                            })
                        }
                    },
                    Err(_) => {
                        tracing::warn!("upload_file (3): {:?}", text);
                        Err(DefaultApiError::InternalServerError.value())
                    }
                },
                Err(e) => {
                    tracing::warn!("upload_file (4): {:?}", e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => {
            tracing::warn!("upload_file (5): {:?}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn download_file_with_retry(
    metadata_url: &str,
    api_key: &str,
) -> Result<Bytes, ApiError> {
    let retry_strategy = FixedInterval::from_millis(10000).take(3);

    Retry::spawn(retry_strategy, || async {
        download_file(metadata_url, api_key).await
    })
    .await
}

/// Resolves a metadata URL to raw bytes and validates they are image data.
pub async fn download_file(metadata_url: &str, api_key: &str) -> Result<Bytes, ApiError> {
    let metadata = get_file_metadata(metadata_url, api_key).await?;

    let Some(file_id) = metadata.id
    else {
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "File metadata contains no id.".to_string(),
        });
    };

    tracing::debug!("downloading file {}", file_id);

    // urls.get is known to sometimes echo the metadata url back
    let content_url = match metadata.urls.and_then(|urls| urls.get) {
        Some(get) if get != metadata_url => get,
        _ => metadata_url.to_string(),
    };

    let bytes = get_content_bytes(&content_url, api_key).await?;

    if imagesize::blob_size(&bytes).is_err() {
        tracing::warn!(
            "download_file (1): file {} first bytes {:?}",
            file_id,
            &bytes[..bytes.len().min(10)]
        );
        return Err(TransformApiError::NotAnImage.value());
    }

    Ok(bytes)
}

pub async fn get_file_metadata(
    metadata_url: &str,
    api_key: &str,
) -> Result<ReplicateFileResponse, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert("Accept", mime::APPLICATION_JSON.to_string().parse().unwrap());
    headers.insert(
        "Authorization",
        format!("Token {}", api_key).parse().unwrap(),
    );

    let client = reqwest::Client::new();
    let result = client.get(metadata_url).headers(headers).send().await;

    match result {
        Ok(res) => {
            if res.status() != StatusCode::OK {
                let status = res.status();
                let text = res.text().await.unwrap_or_default();
                tracing::warn!("get_file_metadata (1): {} {:?}", status, text);
                return Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Failed to get file metadata: HTTP {}", status),
                });
            }

            let content_type = res
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();

            if !is_json_content_type(&content_type) {
                tracing::warn!("get_file_metadata (2): {:?}", content_type);
                return Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!(
                        "Expected JSON metadata, received Content-Type: {}",
                        content_type
                    ),
                });
            }

            match res.text().await {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(file_response) => Ok(file_response),
                    Err(_) => {
                        tracing::warn!("get_file_metadata (3): {:?}", text);
                        Err(DefaultApiError::InternalServerError.value())
                    }
                },
                Err(e) => {
                    tracing::warn!("get_file_metadata (4): {:?}", e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => {
            tracing::warn!("get_file_metadata (5): {:?}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

async fn get_content_bytes(url: &str, api_key: &str) -> Result<Bytes, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        "Accept",
        mime::APPLICATION_OCTET_STREAM.to_string().parse().unwrap(),
    );
    headers.insert(
        "Authorization",
        format!("Token {}", api_key).parse().unwrap(),
    );

    let client = reqwest::Client::new();
    let result = client.get(url).headers(headers).send().await;

    match result {
        Ok(res) => match res.bytes().await {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                tracing::error!(%e);
                Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Failed to get bytes from response.".to_string(),
                })
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to get url response.".to_string(),
            })
        }
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    content_type.starts_with(mime::APPLICATION_JSON.essence_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_content_type_check_ignores_charset() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(!is_json_content_type("text/html"));
        assert!(!is_json_content_type("application/octet-stream"));
    }

    #[test]
    fn image_check_accepts_png_bytes_and_rejects_json() {
        let mut png = Vec::new();
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image::ImageFormat::Png,
            )
            .unwrap();

        assert!(imagesize::blob_size(&png).is_ok());
        assert!(imagesize::blob_size(b"{\"error\":\"not found\"}").is_err());
    }
}

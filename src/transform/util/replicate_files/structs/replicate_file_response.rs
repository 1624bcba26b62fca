use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReplicateFileResponse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<u64>,
    pub url: Option<String>,
    pub urls: Option<ReplicateFileUrls>,
    pub created_at: Option<String>,
    pub expires_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplicateFileUrls {
    pub get: Option<String>,
}

impl ReplicateFileResponse {
    /// The metadata URL callers use to refer back to this file.
    pub fn metadata_url(&self, api_url: &str) -> Option<String> {
        if let Some(url) = &self.url {
            return Some(url.to_string());
        }

        if let Some(urls) = &self.urls {
            if let Some(get) = &urls.get {
                return Some(get.to_string());
            }
        }

        self.id.as_ref().map(|id| [api_url, "/files/", id].concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_url_prefers_url_field() {
        let response = ReplicateFileResponse {
            id: Some("abc".to_string()),
            name: None,
            content_type: None,
            size: None,
            url: Some("https://api.replicate.com/v1/files/abc".to_string()),
            urls: Some(ReplicateFileUrls {
                get: Some("https://api.replicate.com/v1/files/abc/other".to_string()),
            }),
            created_at: None,
            expires_at: None,
        };

        assert_eq!(
            response.metadata_url("https://api.replicate.com/v1"),
            Some("https://api.replicate.com/v1/files/abc".to_string())
        );
    }

    #[test]
    fn metadata_url_falls_back_to_urls_get_then_id() {
        let mut response = ReplicateFileResponse {
            id: Some("abc".to_string()),
            name: None,
            content_type: None,
            size: None,
            url: None,
            urls: Some(ReplicateFileUrls {
                get: Some("https://api.replicate.com/v1/files/abc".to_string()),
            }),
            created_at: None,
            expires_at: None,
        };

        assert_eq!(
            response.metadata_url("https://api.replicate.com/v1"),
            Some("https://api.replicate.com/v1/files/abc".to_string())
        );

        response.urls = None;
        assert_eq!(
            response.metadata_url("https://api.replicate.com/v1"),
            Some("https://api.replicate.com/v1/files/abc".to_string())
        );

        response.id = None;
        assert_eq!(response.metadata_url("https://api.replicate.com/v1"), None);
    }
}

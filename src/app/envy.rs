use std::env;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub replicate_api_key: String,
}

/// Loads `.env.{APP_ENV}` then deserializes the environment.
pub fn load_envy() -> Result<Envy, envy::Error> {
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));

    envy::from_env::<Envy>()
}

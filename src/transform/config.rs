pub static API_URL: &str = "https://api.replicate.com/v1";

use std::env;

pub struct Config {
    pub api_base_url: String,
    pub log_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            log_file: env::var("LOG_FILE")
                .unwrap_or_else(|_| "customer-dashboard.log".to_string()),
        }
    }
}

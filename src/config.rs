use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub mocky_base_url: String,
    pub chat_base_url: String,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("MOCKY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid MOCKY_HOST: {e}"))?;

        let port: u16 = env_or("MOCKY_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid MOCKY_PORT: {e}"))?;

        let mocky_base_url = base_url(env_or("MOCKY_API_BASE_URL", "http://localhost:8010"));
        let chat_base_url = base_url(env_or("MOCKY_CHAT_BASE_URL", "http://localhost:8011"));

        let max_body_size: usize = env_or("MOCKY_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid MOCKY_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("MOCKY_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            mocky_base_url,
            chat_base_url,
            max_body_size,
            log_level,
        })
    }

    /// Resolve a logical proxy service name to its configured base URL.
    pub fn service_base(&self, service: &str) -> Option<&str> {
        match service {
            "mocky" => Some(&self.mocky_base_url),
            "chat" => Some(&self.chat_base_url),
            _ => None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub admin_secret: String,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        let port: u16 = env_or("CONTACT_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_PORT: {e}"))?;

        let data_dir = PathBuf::from(env_or("CONTACT_DATA_DIR", "data"));
        let static_dir = PathBuf::from(env_or("CONTACT_STATIC_DIR", "static"));

        let admin_secret = env_or("CONTACT_ADMIN_SECRET", "athletica-secret");
        if admin_secret.is_empty() {
            return Err("CONTACT_ADMIN_SECRET must not be empty".to_string());
        }

        let max_body_size: usize = env_or("CONTACT_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("CONTACT_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            data_dir,
            static_dir,
            admin_secret,
            max_body_size,
            log_level,
        })
    }

    /// Location of the JSON array holding every submission.
    pub fn submissions_file(&self) -> PathBuf {
        self.data_dir.join("submissions.json")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

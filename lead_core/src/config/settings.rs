use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub mail: MailConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub log_file_name: String,
    pub site_dir: PathBuf,
    pub success_redirect: String,
}

/// Operator notification settings. The operator and sender addresses are
/// configuration values, not constants, so deployments can swap them
/// without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub enabled: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub operator_email: String,
    pub sender_email: String,
    pub send_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            mail: MailConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            log_file_name: "submissions.csv".to_string(),
            site_dir: PathBuf::from("./site"),
            success_redirect: "/success.html".to_string(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 25,
            username: String::new(),
            password: String::new(),
            operator_email: "hello@soulfulkitchen.example".to_string(),
            sender_email: "no-reply@soulfulkitchen.example".to_string(),
            send_timeout_seconds: 10,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.storage.log_file_name.is_empty() {
            return Err(ConfigError::Message(
                "Submission log file name cannot be empty".to_string(),
            ));
        }

        if self.storage.success_redirect.is_empty() {
            return Err(ConfigError::Message(
                "Success redirect target cannot be empty".to_string(),
            ));
        }

        if self.mail.operator_email.is_empty() {
            return Err(ConfigError::Message(
                "Operator email cannot be empty".to_string(),
            ));
        }

        if self.mail.sender_email.is_empty() {
            return Err(ConfigError::Message(
                "Sender email cannot be empty".to_string(),
            ));
        }

        if self.mail.enabled && self.mail.smtp_host.is_empty() {
            return Err(ConfigError::Message(
                "SMTP host cannot be empty when mail is enabled".to_string(),
            ));
        }

        if self.mail.send_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Mail send timeout must be greater than 0".to_string(),
            ));
        }

        if self.mail.operator_email == "hello@soulfulkitchen.example" && self.mail.enabled {
            tracing::warn!("Using placeholder operator email - change this in production!");
        }

        Ok(())
    }

    pub fn create_directories(&self) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(&self.storage.data_dir)?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn submission_log_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.log_file_name)
    }
}

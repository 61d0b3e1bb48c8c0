use std::collections::HashSet;
use std::env;

use crate::shared::validation::CODE_REGEX;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub queue: QueueConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Queue behaviour shared by every service counter
#[derive(Debug, Clone, PartialEq)]
pub struct QueueConfig {
    /// Configured service categories, in display order
    pub services: Vec<String>,
    /// Service used when a request does not name one
    pub default_service: String,
    /// Expected handling time of a single ticket, in minutes
    pub service_minutes: u32,
    /// Issue the demo ticket set at startup
    pub seed_demo: bool,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            queue: QueueConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl QueueConfig {
    const DEFAULT_SERVICES: &'static str = "passport,tax,support,municipal";
    const DEFAULT_SERVICE_MINUTES: u32 = 10;

    pub fn from_env() -> Result<Self, String> {
        let services =
            env::var("QUEUE_SERVICES").unwrap_or_else(|_| Self::DEFAULT_SERVICES.to_string());
        let default_service = env::var("QUEUE_DEFAULT_SERVICE").ok().filter(|s| !s.is_empty());

        let service_minutes = env::var("QUEUE_SERVICE_MINUTES")
            .unwrap_or_else(|_| Self::DEFAULT_SERVICE_MINUTES.to_string())
            .parse::<u32>()
            .map_err(|_| "QUEUE_SERVICE_MINUTES must be a valid number".to_string())?;

        let seed_demo = env::var("QUEUE_SEED_DEMO")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self::build(&services, default_service, service_minutes, seed_demo)
    }

    /// Validate and assemble a queue configuration from raw values
    pub fn build(
        services: &str,
        default_service: Option<String>,
        service_minutes: u32,
        seed_demo: bool,
    ) -> Result<Self, String> {
        let services: Vec<String> = services
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if services.is_empty() {
            return Err("QUEUE_SERVICES must list at least one service".to_string());
        }

        let mut seen = HashSet::new();
        for service in &services {
            if !CODE_REGEX.is_match(service) {
                return Err(format!(
                    "Invalid service name '{}': use lowercase letters, digits and hyphens",
                    service
                ));
            }
            if !seen.insert(service.as_str()) {
                return Err(format!("Service '{}' is listed more than once", service));
            }
        }

        let default_service = default_service.unwrap_or_else(|| services[0].clone());
        if !seen.contains(default_service.as_str()) {
            return Err(format!(
                "QUEUE_DEFAULT_SERVICE '{}' is not one of QUEUE_SERVICES",
                default_service
            ));
        }

        if service_minutes == 0 {
            return Err("QUEUE_SERVICE_MINUTES must be greater than zero".to_string());
        }

        Ok(Self {
            services,
            default_service,
            service_minutes,
            seed_demo,
        })
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            services: Self::DEFAULT_SERVICES
                .split(',')
                .map(str::to_string)
                .collect(),
            default_service: "passport".to_string(),
            service_minutes: Self::DEFAULT_SERVICE_MINUTES,
            seed_demo: false,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "SmartQueue API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Ticket queue service for kiosks and service counters".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

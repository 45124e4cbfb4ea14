use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the document service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub documents: DocumentConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let documents = DocumentConfig {
            support_email: env::var("DOCS_SUPPORT_EMAIL")
                .unwrap_or_else(|_| DocumentConfig::DEFAULT_SUPPORT_EMAIL.to_string()),
            signature: env::var("DOCS_SIGNATURE")
                .unwrap_or_else(|_| DocumentConfig::DEFAULT_SIGNATURE.to_string()),
            tax_rate: parse_tax_rate(env::var("DOCS_TAX_RATE").ok())?,
        };

        let storage = StorageConfig {
            template_root: env::var("DOCS_TEMPLATE_ROOT")
                .unwrap_or_else(|_| "./templates".to_string()),
            applications_file: env::var("DOCS_APPLICATIONS_FILE").ok().map(PathBuf::from),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            documents,
            storage,
        })
    }
}

fn parse_tax_rate(raw: Option<String>) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(1.0);
    };

    match raw.trim().parse::<f64>() {
        Ok(rate) if rate.is_finite() => Ok(rate),
        _ => Err(ConfigError::InvalidTaxRate { value: raw }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Values copied into every generated document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    pub support_email: String,
    pub signature: String,
    /// Multiplier applied to every fund's net amount.
    pub tax_rate: f64,
}

impl DocumentConfig {
    pub const DEFAULT_SUPPORT_EMAIL: &'static str = "support@example.com";
    pub const DEFAULT_SIGNATURE: &'static str = "The Client Services Team";
}

/// Where templates and seed records live.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub template_root: String,
    pub applications_file: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTaxRate { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTaxRate { value } => {
                write!(f, "DOCS_TAX_RATE must be a finite number, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidTaxRate { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

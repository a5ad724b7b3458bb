use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the platform.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub simulation: SimulationConfig,
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

        let simulation = SimulationConfig::load()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            simulation,
        })
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

/// Tuning knobs for the simulated task pipelines (uploads, analysis, code
/// evaluation). All delays are expressed in milliseconds of simulated time.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub upload_step_percent: u8,
    pub upload_interval_ms: u64,
    pub analysis_delay_ms: u64,
    pub execution_delay_ms: u64,
    pub run_pass_probability: f64,
    pub submit_pass_probability: f64,
    pub passing_score: u8,
}

impl SimulationConfig {
    fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("APP_UPLOAD_STEP_PERCENT") {
            config.upload_step_percent = parse_number(&raw, "APP_UPLOAD_STEP_PERCENT")?;
        }
        if let Ok(raw) = env::var("APP_UPLOAD_INTERVAL_MS") {
            config.upload_interval_ms = parse_number(&raw, "APP_UPLOAD_INTERVAL_MS")?;
        }
        if let Ok(raw) = env::var("APP_ANALYSIS_DELAY_MS") {
            config.analysis_delay_ms = parse_number(&raw, "APP_ANALYSIS_DELAY_MS")?;
        }
        if let Ok(raw) = env::var("APP_EXECUTION_DELAY_MS") {
            config.execution_delay_ms = parse_number(&raw, "APP_EXECUTION_DELAY_MS")?;
        }
        if let Ok(raw) = env::var("APP_RUN_PASS_PROBABILITY") {
            config.run_pass_probability = parse_probability(&raw, "APP_RUN_PASS_PROBABILITY")?;
        }
        if let Ok(raw) = env::var("APP_SUBMIT_PASS_PROBABILITY") {
            config.submit_pass_probability =
                parse_probability(&raw, "APP_SUBMIT_PASS_PROBABILITY")?;
        }
        if let Ok(raw) = env::var("APP_PASSING_SCORE") {
            config.passing_score = parse_number(&raw, "APP_PASSING_SCORE")?;
        }

        if config.upload_step_percent == 0 {
            return Err(ConfigError::InvalidNumber {
                key: "APP_UPLOAD_STEP_PERCENT",
            });
        }

        Ok(config)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            upload_step_percent: 10,
            upload_interval_ms: 200,
            analysis_delay_ms: 1500,
            execution_delay_ms: 1200,
            run_pass_probability: 0.5,
            submit_pass_probability: 0.7,
            passing_score: 70,
        }
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, key: &'static str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber { key })
}

fn parse_probability(raw: &str, key: &'static str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidProbability { key })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { key });
    }
    Ok(value)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
    InvalidProbability { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative integer")
            }
            ConfigError::InvalidProbability { key } => {
                write!(f, "{key} must be a probability between 0.0 and 1.0")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

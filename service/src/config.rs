use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::str::FromStr;

/// Default Mastra API base URL used when `MASTRA_BASE_URL` is not set.
pub const DEFAULT_MASTRA_BASE_URL: &str = "https://api.mastra.ai";

/// Default Composio API base URL used when `COMPOSIO_BASE_URL` is not set.
pub const DEFAULT_COMPOSIO_BASE_URL: &str = "https://api.composio.dev";

/// Origin wildcard accepted in `ALLOWED_ORIGINS`.
pub const ANY_ORIGIN: &str = "*";

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    /// Use `*` to allow any origin.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = ANY_ORIGIN
    )]
    pub allowed_origins: Vec<String>,

    /// The base URL of the Mastra agent API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_MASTRA_BASE_URL)]
    mastra_base_url: String,

    /// The API key to use when calling the Mastra agent API. Requests are sent
    /// anonymously when unset.
    #[arg(long, env)]
    mastra_api_key: Option<String>,

    /// The base URL of the Composio API used to push tasks to Notion and Jira.
    #[arg(long, env, default_value = DEFAULT_COMPOSIO_BASE_URL)]
    composio_base_url: String,

    /// The API key to use when calling the Composio API. Task push is disabled when unset.
    #[arg(long, env)]
    composio_api_key: Option<String>,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env = "BACKEND_HOST", default_value = "0.0.0.0")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env = "BACKEND_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the Mastra agent API base URL without a trailing slash.
    pub fn mastra_base_url(&self) -> &str {
        self.mastra_base_url.trim_end_matches('/')
    }

    /// Returns the Mastra API key, if configured.
    pub fn mastra_api_key(&self) -> Option<String> {
        self.mastra_api_key.clone()
    }

    /// Returns the Composio API base URL without a trailing slash.
    pub fn composio_base_url(&self) -> &str {
        self.composio_base_url.trim_end_matches('/')
    }

    /// Returns the Composio API key, if configured.
    pub fn composio_api_key(&self) -> Option<String> {
        self.composio_api_key.clone()
    }

    /// Whether derived tasks should be forwarded to project-management tools.
    pub fn task_push_enabled(&self) -> bool {
        self.composio_api_key.is_some()
    }

    /// Whether `allowed_origins` contains the `*` wildcard.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == ANY_ORIGIN)
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_env_parses_any_case() {
        assert_eq!("PRODUCTION".parse::<RustEnv>(), Ok(RustEnv::Production));
        assert_eq!("staging".parse::<RustEnv>(), Ok(RustEnv::Staging));
        assert_eq!("qa".parse::<RustEnv>(), Err(RustEnvParseError));
    }

    #[test]
    fn test_config_from_flags() {
        let config = Config::parse_from([
            "transcript_relay",
            "--mastra-base-url",
            "http://127.0.0.1:9000/",
            "--mastra-api-key",
            "mastra_key",
            "--composio-api-key",
            "composio_key",
            "--allowed-origins",
            "http://localhost:3000,https://app.example.com",
            "--port",
            "8080",
            "--runtime-env",
            "production",
        ]);

        assert_eq!(config.mastra_base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.mastra_api_key().as_deref(), Some("mastra_key"));
        assert!(config.task_push_enabled());
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(!config.allows_any_origin());
        assert_eq!(config.port, 8080);
        assert!(config.is_production());
    }

    #[test]
    fn test_origin_wildcard() {
        let config = Config::parse_from(["transcript_relay", "--allowed-origins", "*"]);
        assert!(config.allows_any_origin());
    }
}

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::allow_list::NsAllowList;

/// Main configuration for nsgate.
///
/// Loaded from environment variables at process start, with CLI flags
/// applied on top. The allow-list is required; everything else has a
/// default.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,

    pub dns: DnsConfig,

    pub logging: LoggingConfig,

    /// Nameservers authorized to serve checked domains.
    pub allow_list: NsAllowList,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `OUR_NS` (required): comma-separated allow-listed nameservers
    /// - `NAMESERVERS`: comma-separated upstream resolvers
    /// - `PORT`: HTTP listener port
    /// - `BIND_ADDRESS`: HTTP bind address
    /// - `LOG_LEVEL`: tracing filter level
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let allow_list = match std::env::var("OUR_NS") {
            Ok(raw) => NsAllowList::from_csv(&raw)?,
            Err(_) => return Err(ConfigError::MissingAllowList),
        };

        let mut server = ServerConfig::default();
        if let Ok(raw) = std::env::var("PORT") {
            server.port = Self::parse_port(&raw)?;
        }
        if let Ok(bind) = std::env::var("BIND_ADDRESS") {
            server.bind_address = bind;
        }

        let mut dns = DnsConfig::default();
        if let Ok(raw) = std::env::var("NAMESERVERS") {
            let resolvers = DnsConfig::parse_resolvers(&raw);
            if !resolvers.is_empty() {
                dns.resolvers = resolvers;
            }
        }

        let mut logging = LoggingConfig::default();
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        let mut config = Self {
            server,
            dns,
            logging,
            allow_list,
        };
        config.apply_cli_overrides(overrides);
        Ok(config)
    }

    pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
        raw.trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidPort(raw.to_string(), e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use tracing::warn;

use crate::display::DEFAULT_GAP;
use crate::model::DimensionPolicy;
use crate::optimizer::PackingConfig;

/// Complete application configuration, loaded from environment variables or default values.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub optimizer: OptimizerConfig,
}

impl AppConfig {
    /// Creates a configuration from the currently available environment variables.
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            optimizer: OptimizerConfig::from_env(),
        }
    }
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    bind_ip: IpAddr,
    display_host: String,
    port: u16,
}

impl ApiConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_IP: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    const DEFAULT_PORT: u16 = 8080;

    fn from_env() -> Self {
        Self::from_values(env_string("BOXFIT_API_HOST"), env_string("BOXFIT_API_PORT"))
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Self {
        let host_value = host.unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let (bind_ip, effective_host) = match host_value.parse::<IpAddr>() {
            Ok(ip) => (ip, host_value),
            Err(err) => {
                warn!(
                    "⚠️ Could not parse BOXFIT_API_HOST ('{}'): {}. Using {}.",
                    host_value,
                    err,
                    Self::DEFAULT_HOST
                );
                (Self::DEFAULT_IP, Self::DEFAULT_HOST.to_string())
            }
        };

        let port = match port {
            Some(raw) => match raw.parse::<u16>() {
                Ok(value) if value != 0 => value,
                Ok(_) => {
                    warn!(
                        "⚠️ BOXFIT_API_PORT must not be 0. Using {}.",
                        Self::DEFAULT_PORT
                    );
                    Self::DEFAULT_PORT
                }
                Err(err) => {
                    warn!(
                        "⚠️ Could not parse BOXFIT_API_PORT ('{}'): {}. Using {}.",
                        raw,
                        err,
                        Self::DEFAULT_PORT
                    );
                    Self::DEFAULT_PORT
                }
            },
            None => Self::DEFAULT_PORT,
        };

        Self {
            bind_ip,
            display_host: effective_host,
            port,
        }
    }

    /// Socket address to bind the server to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_ip, self.port)
    }

    /// Visible hostname for logging and hints.
    pub fn display_host(&self) -> &str {
        &self.display_host
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Indicates whether binding to all interfaces.
    pub fn binds_to_all_interfaces(&self) -> bool {
        match self.bind_ip {
            IpAddr::V4(addr) => addr == Ipv4Addr::UNSPECIFIED,
            IpAddr::V6(addr) => addr == Ipv6Addr::UNSPECIFIED,
        }
    }
}

/// Configuration for packing and display projection.
#[derive(Clone, Debug)]
pub struct OptimizerConfig {
    packing: PackingConfig,
    display_gap: f64,
    display_scale: Option<f64>,
}

impl OptimizerConfig {
    const DISPLAY_GAP_VAR: &'static str = "BOXFIT_DISPLAY_GAP";
    const DISPLAY_SCALE_VAR: &'static str = "BOXFIT_DISPLAY_SCALE";
    const MISSING_DIMENSIONS_VAR: &'static str = "BOXFIT_MISSING_DIMENSIONS";
    const MAX_ITEMS_VAR: &'static str = "BOXFIT_MAX_ITEMS";

    fn from_env() -> Self {
        let display_gap = load_f64_with_warning(
            Self::DISPLAY_GAP_VAR,
            DEFAULT_GAP,
            |value| (0.0..1.0).contains(&value),
            "must be between 0 (inclusive) and 1 (exclusive)",
            "Warning: Adjusted display gap changes how items are rendered",
        );

        // No default: without a configured scale the API only projects on request.
        let display_scale = env_string(Self::DISPLAY_SCALE_VAR).and_then(|raw| {
            match raw.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => Some(value),
                Ok(_) => {
                    warn!(
                        "⚠️ {} contains invalid value '{}': must be positive. Ignoring it.",
                        Self::DISPLAY_SCALE_VAR,
                        raw
                    );
                    None
                }
                Err(err) => {
                    warn!(
                        "⚠️ Could not parse {} ('{}') as number: {}. Ignoring it.",
                        Self::DISPLAY_SCALE_VAR,
                        raw,
                        err
                    );
                    None
                }
            }
        });

        let dimension_policy = env_string(Self::MISSING_DIMENSIONS_VAR)
            .and_then(|raw| parse_dimension_policy(&raw, Self::MISSING_DIMENSIONS_VAR))
            .unwrap_or_default();
        if dimension_policy == DimensionPolicy::DefaultToZero {
            warn!("⚠️ Missing item dimensions will be treated as 0");
        }

        let max_items = env_string(Self::MAX_ITEMS_VAR)
            .and_then(|raw| parse_max_items(&raw, Self::MAX_ITEMS_VAR))
            .unwrap_or(PackingConfig::DEFAULT_MAX_ITEMS);

        let packing = PackingConfig::builder()
            .dimension_policy(dimension_policy)
            .max_items(max_items)
            .build();

        Self {
            packing,
            display_gap,
            display_scale,
        }
    }

    /// Returns the configured PackingConfig.
    pub fn packing_config(&self) -> PackingConfig {
        self.packing
    }

    /// Gap taken off every rendered edge.
    pub fn display_gap(&self) -> f64 {
        self.display_gap
    }

    /// Scale used when a request does not name one.
    pub fn display_scale(&self) -> Option<f64> {
        self.display_scale
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            packing: PackingConfig::default(),
            display_gap: DEFAULT_GAP,
            display_scale: None,
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(env::VarError::NotPresent) => None,
        Err(err) => {
            warn!(
                "⚠️ Access to {} failed: {}. Using default value.",
                name, err
            );
            None
        }
    }
}

fn parse_dimension_policy(raw: &str, var_name: &str) -> Option<DimensionPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "reject" | "strict" => Some(DimensionPolicy::Reject),
        "zero" | "default_to_zero" | "lenient" => Some(DimensionPolicy::DefaultToZero),
        other => {
            warn!(
                "⚠️ Could not interpret {} ('{}') as dimension policy. Using default value.",
                var_name, other
            );
            None
        }
    }
}

fn parse_max_items(raw: &str, var_name: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Some(value),
        Ok(_) => {
            warn!(
                "⚠️ {} must be greater than 0. Using {}.",
                var_name,
                PackingConfig::DEFAULT_MAX_ITEMS
            );
            None
        }
        Err(err) => {
            warn!(
                "⚠️ Could not parse {} ('{}'): {}. Using {}.",
                var_name,
                raw,
                err,
                PackingConfig::DEFAULT_MAX_ITEMS
            );
            None
        }
    }
}

fn load_f64_with_warning(
    var_name: &str,
    default: f64,
    validator: impl Fn(f64) -> bool,
    invalid_hint: &str,
    warning: &str,
) -> f64 {
    match env_string(var_name) {
        Some(raw) => parse_f64_with_warning(var_name, &raw, default, validator, invalid_hint, warning),
        None => default,
    }
}

fn parse_f64_with_warning(
    var_name: &str,
    raw: &str,
    default: f64,
    validator: impl Fn(f64) -> bool,
    invalid_hint: &str,
    warning: &str,
) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) => {
            if !validator(value) {
                warn!(
                    "⚠️ {} contains invalid value '{}': {}. Using {}.",
                    var_name, raw, invalid_hint, default
                );
                default
            } else {
                let tolerance = (default.abs().max(1.0)) * 1e-9;
                if (value - default).abs() > tolerance {
                    warn!("⚠️ {} ({} = {}).", warning, var_name, value);
                }
                value
            }
        }
        Err(err) => {
            warn!(
                "⚠️ Could not parse {} ('{}') as number: {}. Using {}.",
                var_name, raw, err, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension_policy_values() {
        assert_eq!(
            parse_dimension_policy("reject", "TEST_VAR"),
            Some(DimensionPolicy::Reject)
        );
        assert_eq!(
            parse_dimension_policy("zero", "TEST_VAR"),
            Some(DimensionPolicy::DefaultToZero)
        );

        // Test case insensitivity
        assert_eq!(
            parse_dimension_policy("ZERO", "TEST_VAR"),
            Some(DimensionPolicy::DefaultToZero)
        );
        assert_eq!(
            parse_dimension_policy("Reject", "TEST_VAR"),
            Some(DimensionPolicy::Reject)
        );

        // Test with whitespace
        assert_eq!(
            parse_dimension_policy("  lenient ", "TEST_VAR"),
            Some(DimensionPolicy::DefaultToZero)
        );
    }

    #[test]
    fn test_parse_dimension_policy_invalid_values() {
        assert_eq!(parse_dimension_policy("ignore", "TEST_VAR"), None);
        assert_eq!(parse_dimension_policy("", "TEST_VAR"), None);
        assert_eq!(parse_dimension_policy("0", "TEST_VAR"), None);
    }

    #[test]
    fn test_parse_max_items() {
        assert_eq!(parse_max_items("500", "TEST_VAR"), Some(500));
        assert_eq!(parse_max_items(" 25 ", "TEST_VAR"), Some(25));
        assert_eq!(parse_max_items("0", "TEST_VAR"), None);
        assert_eq!(parse_max_items("-3", "TEST_VAR"), None);
        assert_eq!(parse_max_items("many", "TEST_VAR"), None);
    }

    #[test]
    fn test_parse_f64_falls_back_on_invalid_input() {
        let in_range = |value: f64| (0.0..1.0).contains(&value);
        assert_eq!(
            parse_f64_with_warning("TEST_VAR", "0.01", 0.005, in_range, "hint", "warn"),
            0.01
        );
        assert_eq!(
            parse_f64_with_warning("TEST_VAR", "abc", 0.005, in_range, "hint", "warn"),
            0.005
        );
        assert_eq!(
            parse_f64_with_warning("TEST_VAR", "2.5", 0.005, in_range, "hint", "warn"),
            0.005
        );
    }

    #[test]
    fn test_api_config_defaults_and_fallbacks() {
        let defaults = ApiConfig::from_values(None, None);
        assert_eq!(defaults.port(), 8080);
        assert_eq!(defaults.display_host(), "0.0.0.0");
        assert!(defaults.binds_to_all_interfaces());

        let custom = ApiConfig::from_values(Some("127.0.0.1".to_string()), Some("9000".to_string()));
        assert_eq!(custom.socket_addr(), "127.0.0.1:9000".parse().unwrap());
        assert!(!custom.binds_to_all_interfaces());

        let broken = ApiConfig::from_values(Some("not-a-host".to_string()), Some("0".to_string()));
        assert_eq!(broken.display_host(), "0.0.0.0");
        assert_eq!(broken.port(), 8080);
    }

    #[test]
    fn test_optimizer_config_default() {
        let config = OptimizerConfig::default();
        assert_eq!(config.display_gap(), DEFAULT_GAP);
        assert_eq!(config.display_scale(), None);
        assert_eq!(
            config.packing_config().dimension_policy,
            DimensionPolicy::Reject
        );
        assert_eq!(
            config.packing_config().max_items,
            PackingConfig::DEFAULT_MAX_ITEMS
        );
    }
}

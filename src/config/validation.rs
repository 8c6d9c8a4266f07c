//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid and distinct)
//! - Check the upstream base URL parses as http(s)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.rest_port must be nonzero")]
    RestPortZero,

    #[error("listener.rpc_port must be nonzero")]
    RpcPortZero,

    #[error("listener.rest_port and listener.rpc_port must differ (both {0})")]
    PortClash(u16),

    #[error("listener.host must not be empty")]
    HostEmpty,

    #[error("upstream.base_url is not a valid http(s) URL: {0}")]
    BaseUrl(String),

    #[error("timeouts.connect_secs must be nonzero")]
    ConnectTimeoutZero,

    #[error("timeouts.total_secs must be nonzero")]
    TotalTimeoutZero,

    #[error("timeouts.connect_secs ({connect}) must not exceed timeouts.total_secs ({total})")]
    ConnectExceedsTotal { connect: u64, total: u64 },
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.is_empty() {
        errors.push(ValidationError::HostEmpty);
    }
    if config.listener.rest_port == 0 {
        errors.push(ValidationError::RestPortZero);
    }
    if config.listener.rpc_port == 0 {
        errors.push(ValidationError::RpcPortZero);
    }
    if config.listener.rest_port != 0 && config.listener.rest_port == config.listener.rpc_port {
        errors.push(ValidationError::PortClash(config.listener.rest_port));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::BaseUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        ))),
        Err(e) => errors.push(ValidationError::BaseUrl(e.to_string())),
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ConnectTimeoutZero);
    }
    if config.timeouts.total_secs == 0 {
        errors.push(ValidationError::TotalTimeoutZero);
    }
    if config.timeouts.connect_secs > 0
        && config.timeouts.total_secs > 0
        && config.timeouts.connect_secs > config.timeouts.total_secs
    {
        errors.push(ValidationError::ConnectExceedsTotal {
            connect: config.timeouts.connect_secs,
            total: config.timeouts.total_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn rejects_port_clash() {
        let mut config = GatewayConfig::default();
        config.listener.rest_port = 9000;
        config.listener.rpc_port = 9000;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::PortClash(9000)));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = "ftp://example.com/items/".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::BaseUrl(_)));
    }

    #[test]
    fn collects_all_violations() {
        let mut config = GatewayConfig::default();
        config.listener.host = String::new();
        config.listener.rest_port = 0;
        config.upstream.base_url = "not a url".to_string();
        config.timeouts.connect_secs = 20;
        config.timeouts.total_secs = 10;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::HostEmpty));
        assert!(errors.contains(&ValidationError::RestPortZero));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::BaseUrl(_))));
        assert!(errors.contains(&ValidationError::ConnectExceedsTotal {
            connect: 20,
            total: 10
        }));
    }
}

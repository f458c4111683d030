use crate::config::types::{ChannelConfig, Config, PacingConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_pacing_config(&config.pacing)?;
    validate_channel_config(&config.channel)?;
    Ok(())
}

/// Validates site identity and headers
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "site name cannot be empty".to_string(),
        ));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    validate_http_url("root-url", &config.root_url)?;
    validate_http_url("referer", &config.referer)?;

    // index_pN.html is appended directly to the root
    if !config.root_url.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "root-url must end with '/', got '{}'",
            config.root_url
        )));
    }

    Ok(())
}

/// Validates the delay window
fn validate_pacing_config(config: &PacingConfig) -> Result<(), ConfigError> {
    if config.min_delay_secs >= config.max_delay_secs {
        return Err(ConfigError::Validation(format!(
            "min-delay-secs must be less than max-delay-secs, got {}..{}",
            config.min_delay_secs, config.max_delay_secs
        )));
    }

    Ok(())
}

fn validate_channel_config(config: &ChannelConfig) -> Result<(), ConfigError> {
    if config.capacity < 1 {
        return Err(ConfigError::Validation(
            "channel capacity must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Checks that `value` is an absolute http(s) URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            field, scheme
        ))),
    }
}

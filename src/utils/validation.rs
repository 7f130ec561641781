use crate::utils::error::{Result, ServiceError};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*(ms|s|m|h)?\s*$").expect("duration pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ServiceError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Request-level check, so it reports a `ValidationError` rather than a config error.
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ServiceError::ValidationError {
            message: format!("'{}' is not a valid email address", email),
        })
    }
}

/// Parses `500ms`, `5s`, `2m`, `1h`. A bare number is read as seconds.
pub fn parse_duration(field_name: &str, value: &str) -> Result<Duration> {
    let invalid = |reason: &str| ServiceError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let caps = DURATION_RE
        .captures(value)
        .ok_or_else(|| invalid("Expected a duration such as 500ms, 5s or 1m"))?;
    let amount: u64 = caps[1]
        .parse()
        .map_err(|_| invalid("Duration amount is out of range"))?;

    let duration = match caps.get(2).map(|m| m.as_str()) {
        Some("ms") => Duration::from_millis(amount),
        Some("m") => Duration::from_secs(
            amount
                .checked_mul(60)
                .ok_or_else(|| invalid("Duration amount is out of range"))?,
        ),
        Some("h") => Duration::from_secs(
            amount
                .checked_mul(3600)
                .ok_or_else(|| invalid("Duration amount is out of range"))?,
        ),
        _ => Duration::from_secs(amount),
    };

    if duration.is_zero() {
        return Err(invalid("Duration must be greater than zero"));
    }
    Ok(duration)
}

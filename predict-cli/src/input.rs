//! Input parsing
//!
//! A line holds comma-separated tokens. A token is either a decimal
//! (`1.5`, `-3`, `2e3`) or a fraction with an optional whole part
//! separated by whitespace (`3/4`, `2 1/5`).

use predict_core::PredictError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid token \"{token}\": {reason}")]
pub struct InvalidToken {
    pub token: String,
    pub reason: String,
}

impl InvalidToken {
    fn new(token: &str, reason: impl Into<String>) -> Self {
        Self {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<InvalidToken> for PredictError {
    fn from(err: InvalidToken) -> Self {
        PredictError::invalid_token(&err.token, err.reason)
    }
}

/// Split a line on commas, dropping empty tokens
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse every token of a line
pub fn parse(input: &str) -> Result<Vec<f64>, InvalidToken> {
    tokenize(input).into_iter().map(parse_token).collect()
}

pub fn parse_token(token: &str) -> Result<f64, InvalidToken> {
    if token.contains('/') {
        parse_fraction(token)
    } else {
        parse_decimal(token)
    }
}

fn parse_decimal(token: &str) -> Result<f64, InvalidToken> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidToken::new(token, "Not a valid number"))
}

fn parse_fraction(token: &str) -> Result<f64, InvalidToken> {
    let invalid = || InvalidToken::new(token, "Not a valid fraction");

    let (head, denominator) = token.split_once('/').ok_or_else(invalid)?;
    let head = head.trim();
    let (whole, numerator) = match head.rsplit_once(char::is_whitespace) {
        Some((whole, numerator)) => (Some(whole.trim()), numerator),
        None => (None, head),
    };

    let numerator = parse_decimal(numerator).map_err(|_| invalid())?;
    let denominator = parse_decimal(denominator).map_err(|_| invalid())?;
    if denominator == 0.0 {
        return Err(InvalidToken::new(token, "Division by zero"));
    }
    let fraction = numerator / denominator;

    match whole {
        None => Ok(fraction),
        Some(whole) => {
            let whole = parse_decimal(whole).map_err(|_| invalid())?;
            // "-2 1/5" is -(2 + 1/5)
            if whole.is_sign_negative() {
                Ok(whole - fraction)
            } else {
                Ok(whole + fraction)
            }
        }
    }
}

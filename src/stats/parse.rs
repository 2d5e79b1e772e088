use crate::StatsError;

/// Splits a comma-separated `nums` parameter into floats, preserving input order.
///
/// An absent or empty parameter is `MissingInput`. Tokens are trimmed before
/// parsing, but the error carries the token exactly as received. Blank tokens
/// and non-finite values (`NaN`, `inf`) are rejected rather than skipped.
pub fn parse_nums(raw: Option<&str>) -> Result<Vec<f64>, StatsError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(StatsError::MissingInput),
    };

    raw.split(',').map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<f64, StatsError> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| StatsError::InvalidNumber(token.to_string()))
}

use spoor_core::format::OutputFormat;
use spoor_core::graph::Strategy;

/// Parse a search strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse an output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse the default edge weight, rejecting negative or non-finite values
pub fn parse_default_weight(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("must be finite and non-negative: {}", s));
    }
    Ok(value)
}

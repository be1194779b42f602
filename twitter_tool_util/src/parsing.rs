use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParsingError {
    #[error("Invalid boolean flag: {0}")]
    InvalidFlag(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

type Result<T> = std::result::Result<T, ParsingError>;

/// Parse a boolean host property. Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitive.
pub fn parse_flag(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ParsingError::InvalidFlag(s.to_string())),
    }
}

pub fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T> {
    s.trim().parse::<T>().map_err(|_| ParsingError::InvalidNumber(s.to_string()))
}

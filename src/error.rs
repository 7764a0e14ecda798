/// Errors that can occur while decomposing a URL string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Authority ends in a port that is not a number in `0..=65535`
    InvalidPort,
    /// IDNA processing of a non-ASCII hostname failed
    IdnaError,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPort => "Invalid port",
            Self::IdnaError => "IDNA processing error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL operations
pub type Result<T> = core::result::Result<T, ParseError>;

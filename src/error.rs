use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenegridError {
    #[error("Invalid generation count: {actual} (must be between {min} and {max})")]
    InvalidGenerations { min: u32, max: u32, actual: u32 },

    #[error("Palette error: {0}")]
    Palette(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenegridError {
    /// Whether the caller can recover by prompting for new input.
    /// Render and IO failures abort the invocation instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GenegridError::InvalidGenerations { .. })
    }
}

pub type Result<T> = std::result::Result<T, GenegridError>;

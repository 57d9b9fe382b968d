use std::fmt;

/// Broad class of a [`ClockError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller broke an operation's contract (bad digit, wrong length, ...)
    InvalidArgument,
    /// The configuration could not be read or failed validation
    Config,
}

/// Error types for the clock display
#[derive(Debug, Clone, PartialEq)]
pub enum ClockError {
    InvalidDigit(u8),
    ValueCountMismatch { expected: usize, actual: usize },
    NonPositiveSpeed(f32),
    EmptyGrid { rows: usize, cols: usize },
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    LayoutTooSmall { width: f32, height: f32 },
    Config(String),
}

impl ClockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClockError::Config(_) => ErrorKind::Config,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::InvalidDigit(v) => write!(f, "{} is not a digit (expected 0-9)", v),
            ClockError::ValueCountMismatch { expected, actual } => {
                write!(f, "Expected {} digit values, got {}", expected, actual)
            }
            ClockError::NonPositiveSpeed(speed) => {
                write!(f, "Angular speed must be positive and finite, got {}", speed)
            }
            ClockError::EmptyGrid { rows, cols } => {
                write!(f, "Grid needs at least one cell, got {}x{}", rows, cols)
            }
            ClockError::ShapeMismatch { expected, actual } => write!(
                f,
                "Glyph shape {}x{} does not match grid shape {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            ClockError::LayoutTooSmall { width, height } => {
                write!(f, "Area {}x{} is too small to lay out the clock", width, height)
            }
            ClockError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ClockError {}

impl From<serde_json::Error> for ClockError {
    fn from(err: serde_json::Error) -> Self {
        ClockError::Config(err.to_string())
    }
}

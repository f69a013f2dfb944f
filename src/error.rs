use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shapesmith operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShapeError {
    #[error("IO error: {0}")]
    #[diagnostic(code(shapesmith::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(shapesmith::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(shapesmith::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(shapesmith::invalid_parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Degenerate geometry: {message}")]
    #[diagnostic(code(shapesmith::degenerate))]
    ArithmeticDegeneracy { message: String },

    #[error("Malformed input: {message}")]
    #[diagnostic(code(shapesmith::malformed))]
    MalformedInput {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Fetch error for {url}: {message}")]
    #[diagnostic(code(shapesmith::fetch))]
    Fetch { url: String, message: String },

    #[error("Watch error: {message}")]
    #[diagnostic(code(shapesmith::watch))]
    Watch { message: String },
}

impl ShapeError {
    /// Shorthand for an `InvalidParameter` error without help text.
    pub fn invalid(message: impl Into<String>) -> Self {
        ShapeError::InvalidParameter {
            message: message.into(),
            help: None,
        }
    }

    /// Shorthand for an `ArithmeticDegeneracy` error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        ShapeError::ArithmeticDegeneracy {
            message: message.into(),
        }
    }

    /// Shorthand for a `MalformedInput` error without help text.
    pub fn malformed(message: impl Into<String>) -> Self {
        ShapeError::MalformedInput {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;

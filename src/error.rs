use miette::Diagnostic;
use thiserror::Error;

/// Main error type for spritefx operations
#[derive(Error, Diagnostic, Debug)]
pub enum FxError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(spritefx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(spritefx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(spritefx::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to decode image: {0}")]
    #[diagnostic(
        code(spritefx::decode),
        help("The input must be a valid PNG (or another format the image crate reads)")
    )]
    Decode(#[from] image::ImageError),

    #[error("Build error: {message}")]
    #[diagnostic(code(spritefx::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FxError>;

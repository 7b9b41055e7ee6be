use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brandmark operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrandError {
    #[error("IO error: {0}")]
    #[diagnostic(code(brandmark::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(brandmark::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(brandmark::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Font unavailable: {path}: {message}")]
    #[diagnostic(
        code(brandmark::font),
        help("The builtin bitmap font is used when the display font cannot be loaded")
    )]
    FontUnavailable {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(brandmark::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(brandmark::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BrandError>;

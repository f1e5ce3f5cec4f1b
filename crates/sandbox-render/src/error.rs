use std::fmt;
use std::io;
use std::path::PathBuf;

use sandbox_shader::{ParseError, Stage};

/// Why a shader file could not be turned into stage sources.
#[derive(Debug)]
pub enum ShaderFileError {
    Io(io::Error),
    Parse(ParseError),
}

impl fmt::Display for ShaderFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "unreadable: {e}"),
            Self::Parse(e) => write!(f, "malformed: {e}"),
        }
    }
}

impl std::error::Error for ShaderFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

/// Errors surfaced while creating GPU objects.
///
/// Graphics-API errors raised by individual calls are not part of this type;
/// see [`GlError`](crate::gl::GlError) and [`ErrorPolicy`](crate::gl::ErrorPolicy).
#[derive(Debug)]
pub enum Error {
    ShaderFile {
        path: PathBuf,
        source: ShaderFileError,
    },
    /// The driver rejected a stage; `log` is its full info log.
    ShaderCompile { stage: Stage, log: String },
    ShaderLink { log: String },
    /// The API refused to hand out a new object name.
    Allocation {
        object: &'static str,
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShaderFile { path, source } => {
                write!(f, "shader file {}: {source}", path.display())
            }
            Self::ShaderCompile { stage, log } => {
                write!(f, "failed to compile {stage} shader:\n{log}")
            }
            Self::ShaderLink { log } => write!(f, "failed to link program:\n{log}"),
            Self::Allocation { object, message } => {
                write!(f, "failed to create {object}: {message}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ShaderFile { source, .. } => Some(source),
            _ => None,
        }
    }
}

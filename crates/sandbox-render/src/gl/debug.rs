use std::fmt;

use super::GraphicsApi;

/// Decoded `glGetError` value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorCategory {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    StackUnderflow,
    StackOverflow,
    Unknown(u32),
}

impl ErrorCategory {
    /// Returns `None` for `GL_NO_ERROR`.
    pub fn from_code(code: u32) -> Option<Self> {
        let category = match code {
            glow::NO_ERROR => return None,
            glow::INVALID_ENUM => Self::InvalidEnum,
            glow::INVALID_VALUE => Self::InvalidValue,
            glow::INVALID_OPERATION => Self::InvalidOperation,
            glow::INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
            glow::OUT_OF_MEMORY => Self::OutOfMemory,
            glow::STACK_UNDERFLOW => Self::StackUnderflow,
            glow::STACK_OVERFLOW => Self::StackOverflow,
            other => Self::Unknown(other),
        };
        Some(category)
    }

    /// The GL symbol name, e.g. `GL_INVALID_ENUM`.
    pub fn name(self) -> &'static str {
        match self {
            Self::InvalidEnum => "GL_INVALID_ENUM",
            Self::InvalidValue => "GL_INVALID_VALUE",
            Self::InvalidOperation => "GL_INVALID_OPERATION",
            Self::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            Self::OutOfMemory => "GL_OUT_OF_MEMORY",
            Self::StackUnderflow => "GL_STACK_UNDERFLOW",
            Self::StackOverflow => "GL_STACK_OVERFLOW",
            Self::Unknown(_) => "unrecognized error",
        }
    }

    /// Human-readable cause.
    pub fn cause(self) -> &'static str {
        match self {
            Self::InvalidEnum => "An unacceptable value is specified for an enumerated argument.",
            Self::InvalidValue => "A numeric argument is out of range.",
            Self::InvalidOperation => {
                "The specified operation is not allowed in the current state."
            }
            Self::InvalidFramebufferOperation => "The framebuffer object is not complete.",
            Self::OutOfMemory => "There is not enough memory left to execute the command.",
            Self::StackUnderflow => {
                "An attempt has been made to perform an operation that would cause an internal stack to underflow."
            }
            Self::StackOverflow => {
                "An attempt has been made to perform an operation that would cause an internal stack to overflow."
            }
            Self::Unknown(_) => "The driver reported an error code outside the core set.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "{} 0x{code:04X}: {}", self.name(), self.cause()),
            _ => write!(f, "{}: {}", self.name(), self.cause()),
        }
    }
}

/// A graphics-API error detected right after a wrapped call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GlError {
    /// Name of the wrapped call, e.g. `"draw_elements"`.
    pub call: &'static str,
    pub category: ErrorCategory,
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[OpenGL Error] `{}` raised {}", self.call, self.category)
    }
}

impl std::error::Error for GlError {}

/// Pops error flags off the context until `GL_NO_ERROR`.
///
/// Callers bound the iterator (`take`) since a lost context may keep
/// reporting.
pub fn pending_errors<G: GraphicsApi>(api: &G) -> impl Iterator<Item = ErrorCategory> + '_ {
    std::iter::from_fn(move || ErrorCategory::from_code(api.get_error()))
}

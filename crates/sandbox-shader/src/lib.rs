//! Splitter for the **`#shader` source format**: one text file holding every
//! stage of a GLSL program, each section introduced by `#shader <stage>`.
//!
//! Nothing here touches GL; the renderer compiles what this crate splits.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ParseError`, `ParseErrorKind` |
//! | [`parser`] | `parse_str` entry point, `MARKER` |
//! | [`source`] | `ShaderSource` |
//! | [`stage`] | `Stage` |
//!
//! # Quick start
//!
//! ```rust
//! use sandbox_shader::{parse_str, Stage};
//!
//! let src = "\
//! #shader vertex
//! void main() { gl_Position = vec4(0.0); }
//! #shader fragment
//! out vec4 color;
//! void main() { color = vec4(1.0); }
//! ";
//!
//! let source = parse_str(src).unwrap();
//! assert_eq!(source.get(Stage::Vertex), Some("void main() { gl_Position = vec4(0.0); }\n"));
//! assert_eq!(source.stages().count(), 2);
//! ```

pub mod error;
pub mod parser;
pub mod source;
pub mod stage;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse_str, MARKER};
pub use source::ShaderSource;
pub use stage::Stage;

//! Frame-loop contracts.
//!
//! The window and GL context live with the host (GLFW, glutin, SDL...); this
//! module only defines what the loop needs from it and from the application,
//! so the loop itself stays platform-free.

mod app;
mod runner;

pub use app::{App, AppControl, Host};
pub use runner::run;

use crate::time::FrameTime;

/// Control directive returned by [`App::on_frame`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-frame application logic: upload uniforms, clear, draw.
pub trait App {
    /// Called once per frame, before the host presents it.
    fn on_frame(&mut self, time: FrameTime) -> anyhow::Result<AppControl>;
}

/// The windowing side of the loop: owns the window and the GL context.
pub trait Host {
    /// Polls platform events; `true` once the window should close.
    fn should_close(&mut self) -> bool;

    /// Swaps buffers.
    fn present(&mut self);
}

use anyhow::Context;

use crate::time::FrameClock;

use super::app::{App, AppControl, Host};

/// Drives `app` until the host closes or the app asks to exit.
///
/// Each iteration ticks the frame clock, runs the app and presents. A failing
/// frame ends the loop without presenting and the error is returned.
pub fn run(host: &mut impl Host, app: &mut impl App) -> anyhow::Result<()> {
    let mut clock = FrameClock::new();
    log::info!("entering frame loop");

    while !host.should_close() {
        let time = clock.tick();
        let control = app
            .on_frame(time)
            .with_context(|| format!("frame {} failed", time.frame_index))?;
        if control == AppControl::Exit {
            log::info!("app requested exit after frame {}", time.frame_index);
            return Ok(());
        }
        host.present();
    }

    log::info!("host closed, leaving frame loop");
    Ok(())
}

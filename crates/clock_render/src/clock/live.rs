use log::{debug, info, warn};
use tokio::time::{self, Instant};

use super::{
    face::ClockFace, schedule::next_deadline, source::TimeSource, terminal::Terminal, ClockConfig,
};
use crate::{ClockError, ClockRenderer};

/// Printed once the live clock has been stopped.
pub const STOP_NOTICE: &str = "Terminated.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Redraws the clock once per wall clock second.
///
/// The loop owns the terminal while running. Leaving the `Running` state,
/// through [`ClockLoop::stop`] or by dropping the loop, shows the cursor again
/// and prints [`STOP_NOTICE`] exactly once.
pub struct ClockLoop<T: Terminal, S: TimeSource> {
    terminal: T,
    source: S,
    config: ClockConfig,
    renderer: ClockRenderer,
    state: LoopState,
}

impl<T: Terminal, S: TimeSource> ClockLoop<T, S> {
    pub fn new(terminal: T, source: S, config: ClockConfig) -> Self {
        Self { terminal, source, config, renderer: ClockRenderer, state: LoopState::Idle }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn start(&mut self) -> Result<(), ClockError> {
        self.transition(LoopState::Running)?;
        self.terminal.hide_cursor()?;
        info!("live clock started");
        Ok(())
    }

    /// Draws the current instant and returns the monotonic deadline of the
    /// next second boundary.
    pub fn tick(&mut self) -> Result<Instant, ClockError> {
        if self.state != LoopState::Running {
            return Err(ClockError::InvalidTransition { from: self.state, to: LoopState::Running });
        }

        let now = self.source.now();
        let face = ClockFace::at(now, &self.config.face);
        let viewport = self.terminal.viewport();
        let frame = self.renderer.render_face(&face, &self.config, viewport)?;

        self.terminal.clear_screen()?;
        self.terminal.write(&format!("{frame}\n"))?;
        debug!("drew {} at {now}", face.display_text());

        Ok(next_deadline(Instant::now(), self.source.now()))
    }

    /// Ticks until an error occurs. Starts the loop first if it is idle.
    ///
    /// Cancelling the returned future between ticks is safe; call
    /// [`ClockLoop::stop`] afterwards to release the terminal.
    pub async fn run(&mut self) -> Result<(), ClockError> {
        if self.state == LoopState::Idle {
            self.start()?;
        }

        loop {
            let deadline = self.tick()?;
            time::sleep_until(deadline).await;
        }
    }

    /// Releases the terminal. Stopping twice is a no-op.
    pub fn stop(&mut self) -> Result<(), ClockError> {
        match self.state {
            LoopState::Stopped => Ok(()),
            LoopState::Idle => self.transition(LoopState::Stopped),
            LoopState::Running => {
                self.transition(LoopState::Stopped)?;
                let shown = self.terminal.show_cursor();
                self.terminal.write(&format!("\n{STOP_NOTICE}\n"))?;
                info!("live clock stopped");
                Ok(shown?)
            },
        }
    }

    fn transition(&mut self, to: LoopState) -> Result<(), ClockError> {
        let allowed = matches!(
            (self.state, to),
            (LoopState::Idle, LoopState::Running)
                | (LoopState::Idle, LoopState::Stopped)
                | (LoopState::Running, LoopState::Stopped)
        );
        if !allowed {
            return Err(ClockError::InvalidTransition { from: self.state, to });
        }

        debug!("clock loop {:?} -> {:?}", self.state, to);
        self.state = to;
        Ok(())
    }
}

impl<T: Terminal, S: TimeSource> Drop for ClockLoop<T, S> {
    fn drop(&mut self) {
        if self.state == LoopState::Running {
            if let Err(err) = self.stop() {
                warn!("failed to restore terminal: {err}");
            }
        }
    }
}

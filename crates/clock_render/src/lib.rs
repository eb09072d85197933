mod ascii;
mod clock;
mod layout;

pub use ascii::{
    block::GlyphBlock,
    glyph::{Glyph, GLYPH_ROWS, GUTTER},
    palette::{colorize, Color},
};
pub use clock::{
    display_once,
    face::{parse_time, to_12h, validate_time, ClockFace, FaceOptions},
    live::{ClockLoop, LoopState, STOP_NOTICE},
    schedule::{next_deadline, until_next_second},
    source::{LocalTime, TimeSource},
    terminal::{CrosstermTerminal, Terminal},
    ClockConfig,
};
pub use layout::{
    frame::{visible_width, Frame, FrameComposer, FrameOptions},
    viewport::{Alignment, Viewport},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid character {0:?}: only digits and ':' can be rendered")]
    InvalidCharacter(char),
}

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("invalid time {0:?}: use HH:MM between 00:00 and 23:59")]
    InvalidTimeFormat(String),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("clock loop cannot go from {from:?} to {to:?}")]
    InvalidTransition { from: LoopState, to: LoopState },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Size multiplier, values below one are treated as one.
    pub scale: u16,
    /// Foreground color applied to every rendered row.
    pub color: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1, color: None }
    }
}

impl RenderOptions {
    /// Builds options from a user supplied color name, dropping names that
    /// are not in the palette.
    pub fn with_color_name(scale: u16, color: Option<&str>) -> Self {
        Self { scale: scale.max(1), color: color.and_then(Color::from_name) }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ClockRenderer;

impl ClockRenderer {
    /// Renders `text`, failing before any output if a character has no glyph.
    pub fn render_text(
        &self,
        text: &str,
        options: &RenderOptions,
    ) -> Result<GlyphBlock, RenderError> {
        let glyphs = ascii::glyph::resolve(text)?;
        Ok(self.render_glyphs(&glyphs, options))
    }

    pub fn render_glyphs(&self, glyphs: &[&Glyph], options: &RenderOptions) -> GlyphBlock {
        GlyphBlock::compose(glyphs, options.scale).paint(options.color)
    }

    /// Renders a clock face and lays it out with its suffix lines.
    pub fn render_face(
        &self,
        face: &ClockFace,
        config: &ClockConfig,
        viewport: Viewport,
    ) -> Result<Frame, RenderError> {
        let glyphs = face.glyphs()?;
        let block = self.render_glyphs(&glyphs, &config.render);
        let composer = FrameComposer::new(config.frame);
        Ok(composer.compose(block.into_lines(), face.suffixes(), viewport))
    }
}

/// Renders `text` as newline separated rows.
pub fn render(text: &str, options: &RenderOptions) -> Result<String, RenderError> {
    ClockRenderer.render_text(text, options).map(|block| block.to_string())
}

use log::warn;

/// Terminal dimensions in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
}

impl Viewport {
    /// Used whenever the terminal does not report a usable size.
    pub const FALLBACK: Viewport = Viewport { columns: 80, rows: 24 };

    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Queries the controlling terminal.
    pub fn detect() -> Self {
        match crossterm::terminal::size() {
            Ok((columns, rows)) if columns > 0 && rows > 0 => Self { columns, rows },
            Ok(_) => Self::FALLBACK,
            Err(err) => {
                warn!("terminal size unavailable, assuming 80x24: {err}");
                Self::FALLBACK
            },
        }
    }

    /// Same width as `self` but without vertical room, for output that is
    /// printed inline rather than drawn over a cleared screen.
    pub fn inline(self) -> Self {
        Self { columns: self.columns, rows: 0 }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

impl Alignment {
    /// Leading columns and blank lines needed to place `width × height`
    /// content inside `viewport`.
    pub fn offsets(self, viewport: Viewport, width: usize, height: usize) -> (usize, usize) {
        match self {
            Alignment::Left => (0, 0),
            Alignment::Center => (
                usize::from(viewport.columns).saturating_sub(width) / 2,
                usize::from(viewport.rows).saturating_sub(height) / 2,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_alignment_never_pads() {
        assert_eq!(Alignment::Left.offsets(Viewport::new(200, 50), 10, 3), (0, 0));
    }

    #[test]
    fn center_alignment_splits_free_space() {
        assert_eq!(Alignment::Center.offsets(Viewport::FALLBACK, 30, 4), (25, 10));
        assert_eq!(Alignment::Center.offsets(Viewport::new(81, 25), 30, 4), (25, 10));
    }

    #[test]
    fn oversized_content_is_not_shifted() {
        assert_eq!(Alignment::Center.offsets(Viewport::new(20, 2), 30, 4), (0, 0));
        assert_eq!(Alignment::Center.offsets(Viewport::FALLBACK.inline(), 30, 4), (25, 0));
    }
}

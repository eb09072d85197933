use super::{
    glyph::{Glyph, GLYPH_ROWS, GUTTER},
    palette::Color,
};

/// Rendered rows of a glyph sequence, before any framing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBlock {
    rows: Vec<String>,
}

impl GlyphBlock {
    /// Lays out `glyphs` left to right, each followed by the gutter, then
    /// repeats every row `scale` times.
    pub fn compose(glyphs: &[&Glyph], scale: u16) -> Self {
        let scale = scale.max(1);
        let mut base = vec![String::new(); GLYPH_ROWS];

        for glyph in glyphs {
            for (index, row) in base.iter_mut().enumerate() {
                row.push_str(&glyph.scaled_row(index, scale));
                row.push_str(GUTTER);
            }
        }

        let rows = base
            .into_iter()
            .flat_map(|row| std::iter::repeat(row).take(usize::from(scale)))
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(String::as_str)
    }

    /// Paints each row on its own so every line carries a full escape pair.
    pub fn paint(self, color: Option<Color>) -> Self {
        match color {
            Some(color) => Self { rows: self.rows.iter().map(|row| color.paint(row)).collect() },
            None => self,
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        self.rows
    }
}

impl std::fmt::Display for GlyphBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rows.join("\n"))
    }
}

use crate::RenderError;

/// Number of text rows in every unscaled glyph.
pub const GLYPH_ROWS: usize = 3;

/// Columns separating two adjacent glyphs.
pub const GUTTER: &str = "  ";

/// A seven-segment pattern for a single character.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    key: char,
    rows: [&'static str; GLYPH_ROWS],
}

impl Glyph {
    /// Blank glyph with the same footprint as the separator.
    pub const BLANK: Glyph = Glyph { key: ' ', rows: ["    ", "    ", "    "] };

    const fn new(key: char, rows: [&'static str; GLYPH_ROWS]) -> Self {
        Self { key, rows }
    }

    pub fn is_separator(&self) -> bool {
        self.key == ':'
    }

    /// Expands one pattern row for the given scale.
    ///
    /// Ink is always doubled once the scale exceeds one, while blanks and the
    /// separator dots grow with the scale factor itself.
    pub fn scaled_row(&self, row: usize, scale: u16) -> String {
        let pattern = self.rows[row];
        if scale <= 1 {
            return pattern.to_owned();
        }

        let mut expanded = String::with_capacity(pattern.len() * usize::from(scale));
        for ch in pattern.chars() {
            let count = if is_ink(ch) { 2 } else { usize::from(scale) };
            expanded.extend(std::iter::repeat(ch).take(count));
        }
        expanded
    }
}

fn is_ink(ch: char) -> bool {
    !ch.is_whitespace() && ch != '.'
}

static GLYPHS: [Glyph; 11] = [
    Glyph::new('0', [" __ ", "|  |", "|__|"]),
    Glyph::new('1', ["    ", "   |", "   |"]),
    Glyph::new('2', [" __ ", " __|", "|__ "]),
    Glyph::new('3', [" __ ", " __|", " __|"]),
    Glyph::new('4', ["    ", "|__|", "   |"]),
    Glyph::new('5', [" __ ", "|__ ", " __|"]),
    Glyph::new('6', [" __ ", "|__ ", "|__|"]),
    Glyph::new('7', [" __ ", "   |", "   |"]),
    Glyph::new('8', [" __ ", "|__|", "|__|"]),
    Glyph::new('9', [" __ ", "|__|", " __|"]),
    Glyph::new(':', ["    ", "  . ", "  . "]),
];

pub fn lookup(ch: char) -> Result<&'static Glyph, RenderError> {
    GLYPHS.iter().find(|glyph| glyph.key == ch).ok_or(RenderError::InvalidCharacter(ch))
}

/// Resolves a whole string, failing on the first unsupported character.
pub fn resolve(text: &str) -> Result<Vec<&'static Glyph>, RenderError> {
    text.chars().map(lookup).collect()
}

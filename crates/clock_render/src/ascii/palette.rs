const RESET: &str = "\x1b[0m";

/// Foreground colors understood by `--color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Bright,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Bright,
    ];

    /// Case-insensitive lookup; names outside the palette yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Bright => "bright",
        }
    }

    /// SGR foreground code.
    pub fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Bright => 97,
        }
    }

    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{text}{RESET}", self.code())
    }
}

/// Wraps `text` in the escape pair for `color`, or returns it untouched when
/// the name is absent or unknown.
pub fn colorize(text: &str, color: Option<&str>) -> String {
    match color.and_then(Color::from_name) {
        Some(color) => color.paint(text),
        None => text.to_owned(),
    }
}

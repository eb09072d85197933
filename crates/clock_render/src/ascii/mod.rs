pub mod block;
pub mod glyph;
pub mod palette;

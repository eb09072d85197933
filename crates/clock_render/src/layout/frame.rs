use log::debug;
use unicode_width::UnicodeWidthChar;

use super::viewport::{Alignment, Viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOptions {
    pub align: Alignment,
    /// Draw a single-line box around the block and its suffixes.
    pub border: bool,
}

/// Final lines for one displayed instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameComposer {
    options: FrameOptions,
}

impl FrameComposer {
    pub fn new(options: FrameOptions) -> Self {
        Self { options }
    }

    pub fn compose<S: AsRef<str>>(
        &self,
        block: Vec<String>,
        suffixes: &[S],
        viewport: Viewport,
    ) -> Frame {
        let anchor = block.first().map_or(0, |line| visible_width(line));
        let mut lines = block;

        for suffix in suffixes {
            let suffix = suffix.as_ref();
            let pad = anchor.saturating_sub(visible_width(suffix)) / 2;
            lines.push(format!("{}{suffix}", " ".repeat(pad)));
        }

        if self.options.border {
            lines = draw_border(lines);
        }

        let width = content_width(&lines);
        let (left, top) = self.options.align.offsets(viewport, width, lines.len());
        debug!("frame {}x{} placed at column {left}, row {top}", width, lines.len());

        if left > 0 {
            let margin = " ".repeat(left);
            for line in &mut lines {
                line.insert_str(0, &margin);
            }
        }

        if top > 0 {
            let mut padded = vec![String::new(); top];
            padded.append(&mut lines);
            lines = padded;
        }

        Frame { lines }
    }
}

fn draw_border(lines: Vec<String>) -> Vec<String> {
    let width = content_width(&lines);
    let rule = "─".repeat(width + 2);

    let mut boxed = Vec::with_capacity(lines.len() + 2);
    boxed.push(format!("┌{rule}┐"));
    for line in lines {
        let fill = " ".repeat(width - visible_width(&line));
        boxed.push(format!("│ {line}{fill} │"));
    }
    boxed.push(format!("└{rule}┘"));
    boxed
}

fn content_width(lines: &[String]) -> usize {
    lines.iter().map(|line| visible_width(line)).max().unwrap_or(0)
}

/// Display width of `text`, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequences end on the first byte in '@'..='~' after the '['.
            if chars.next() == Some('[') {
                for terminator in chars.by_ref() {
                    if ('@'..='~').contains(&terminator) {
                        break;
                    }
                }
            }
            continue;
        }
        width += ch.width().unwrap_or(0);
    }

    width
}

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::ascii::glyph::{self, Glyph};
use crate::{ClockError, RenderError};

/// Formatting switches for a clock face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceOptions {
    /// 12 hour display with an AM/PM line underneath.
    pub ampm: bool,
    pub seconds: bool,
    /// Hide the first separator on even seconds.
    pub blink: bool,
    pub show_date: bool,
}

/// Everything shown for a single instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockFace {
    time: String,
    hide_separator: bool,
    suffixes: Vec<String>,
}

impl ClockFace {
    /// Face for an explicit hour and minute, without seconds.
    pub fn new(hour: u32, minute: u32, ampm: bool) -> Self {
        let mut face = Self { time: String::new(), hide_separator: false, suffixes: Vec::new() };
        if ampm {
            face.time = hour_minute_12h(hour, minute);
            face.suffixes.push(meridiem(hour).to_owned());
        } else {
            face.time = format!("{hour:02}:{minute:02}");
        }
        face
    }

    /// Face for a wall clock reading.
    pub fn at(now: NaiveDateTime, options: &FaceOptions) -> Self {
        let mut face = Self::new(now.hour(), now.minute(), options.ampm);
        if options.seconds {
            face.time.push_str(&format!(":{:02}", now.second()));
        }
        face.hide_separator = options.blink && now.second() % 2 == 0;
        if options.show_date {
            face = face.with_date(now.date());
        }
        face
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.suffixes.push(date.format("%Y-%m-%d").to_string());
        self
    }

    /// The time string as shown, with a blinked separator replaced by a space.
    pub fn display_text(&self) -> String {
        if self.hide_separator {
            self.time.replacen(':', " ", 1)
        } else {
            self.time.clone()
        }
    }

    /// Lines printed under the digits.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn glyphs(&self) -> Result<Vec<&'static Glyph>, RenderError> {
        let mut glyphs = glyph::resolve(&self.time)?;
        if self.hide_separator {
            if let Some(separator) = glyphs.iter_mut().find(|glyph| glyph.is_separator()) {
                *separator = &Glyph::BLANK;
            }
        }
        Ok(glyphs)
    }
}

/// Parses a strict `HH:MM` string into hour and minute.
pub fn parse_time(text: &str) -> Result<(u32, u32), ClockError> {
    let invalid = || ClockError::InvalidTimeFormat(text.to_owned());

    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&index| bytes[index].is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    let digit = |index: usize| u32::from(bytes[index] - b'0');
    let hour = digit(0) * 10 + digit(1);
    let minute = digit(3) * 10 + digit(4);
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok((hour, minute))
}

pub fn validate_time(text: &str) -> bool {
    parse_time(text).is_ok()
}

/// `"HH:MM AM"` or `"HH:MM PM"` for a 24 hour reading.
pub fn to_12h(hour: u32, minute: u32) -> String {
    format!("{} {}", hour_minute_12h(hour, minute), meridiem(hour))
}

fn hour_minute_12h(hour: u32, minute: u32) -> String {
    let hour = match hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{hour:02}:{minute:02}")
}

fn meridiem(hour: u32) -> &'static str {
    if hour < 12 {
        "AM"
    } else {
        "PM"
    }
}

pub mod face;
pub mod live;
pub mod schedule;
pub mod source;
pub mod terminal;

use chrono::NaiveDate;

use crate::layout::{frame::FrameOptions, viewport::Viewport};
use crate::{ClockError, ClockRenderer, Frame, RenderOptions};

use face::{parse_time, ClockFace, FaceOptions};

/// Read-only settings shared by every frame of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockConfig {
    pub face: FaceOptions,
    pub render: RenderOptions,
    pub frame: FrameOptions,
}

/// Renders a user supplied `HH:MM` once.
///
/// Seconds and blinking only apply to the live clock. The frame is laid out
/// inline, so centering is horizontal only.
pub fn display_once(
    text: &str,
    config: &ClockConfig,
    date: Option<NaiveDate>,
    viewport: Viewport,
) -> Result<Frame, ClockError> {
    let (hour, minute) = parse_time(text)?;
    let mut face = ClockFace::new(hour, minute, config.face.ampm);
    if let Some(date) = date {
        face = face.with_date(date);
    }

    Ok(ClockRenderer.render_face(&face, config, viewport.inline())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::viewport::Alignment;

    #[test]
    fn one_shot_24h_is_just_the_digits() {
        let frame =
            display_once("14:30", &ClockConfig::default(), None, Viewport::FALLBACK).unwrap();
        assert_eq!(frame.height(), 3);
        assert!(!frame.to_string().contains("PM"));
    }

    #[test]
    fn one_shot_12h_adds_meridiem_line() {
        let mut config = ClockConfig::default();
        config.face.ampm = true;
        let frame = display_once("14:30", &config, None, Viewport::FALLBACK).unwrap();
        assert_eq!(frame.height(), 4);
        assert!(frame.lines()[3].contains("PM"));
    }

    #[test]
    fn one_shot_rejects_bad_input() {
        let result = display_once("25:00", &ClockConfig::default(), None, Viewport::FALLBACK);
        assert!(matches!(result, Err(ClockError::InvalidTimeFormat(text)) if text == "25:00"));
    }

    #[test]
    fn one_shot_ignores_live_only_options() {
        let mut config = ClockConfig::default();
        config.face.seconds = true;
        config.face.blink = true;
        let plain = ClockConfig::default();
        let frame = display_once("08:00", &config, None, Viewport::FALLBACK).unwrap();
        assert_eq!(frame, display_once("08:00", &plain, None, Viewport::FALLBACK).unwrap());
    }

    #[test]
    fn one_shot_centering_is_horizontal_only() {
        let mut config = ClockConfig::default();
        config.frame.align = Alignment::Center;
        config.frame.border = true;
        let date = NaiveDate::from_ymd_opt(2024, 2, 29);
        let frame = display_once("09:15", &config, date, Viewport::FALLBACK).unwrap();

        // Box around three art rows and the date line.
        assert_eq!(frame.height(), 6);
        assert!(frame.lines()[0].trim_start().starts_with('┌'));
        assert!(frame.lines()[4].contains("2024-02-29"));
        assert!(frame.lines()[0].starts_with(' '));
    }
}

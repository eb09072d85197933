use clock_render::{
    display_once, render, validate_time, ClockConfig, ClockError, RenderError, RenderOptions,
    Viewport,
};
use proptest::prelude::*;

fn valid_time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| format!("{hour:02}:{minute:02}"))
}

proptest! {
    #[test]
    fn every_valid_time_renders_three_rows(time in valid_time()) {
        prop_assert!(validate_time(&time));
        let art = render(&time, &RenderOptions::default()).unwrap();
        prop_assert_eq!(art.lines().count(), 3);
    }

    #[test]
    fn doubling_the_scale_grows_the_output(time in valid_time()) {
        let small = render(&time, &RenderOptions::default()).unwrap();
        let large = render(&time, &RenderOptions { scale: 2, color: None }).unwrap();
        prop_assert!(large.chars().count() > small.chars().count());
    }

    #[test]
    fn rendering_is_deterministic(time in valid_time(), scale in 1u16..5) {
        let options = RenderOptions::with_color_name(scale, Some("magenta"));
        prop_assert_eq!(render(&time, &options), render(&time, &options));
    }

    #[test]
    fn foreign_characters_are_rejected(
        prefix in "[0-9:]{0,4}",
        bad in any::<char>().prop_filter("outside the glyph set", |ch| {
            !ch.is_ascii_digit() && *ch != ':'
        }),
    ) {
        let text = format!("{prefix}{bad}");
        prop_assert_eq!(
            render(&text, &RenderOptions::default()),
            Err(RenderError::InvalidCharacter(bad))
        );
    }

    #[test]
    fn one_shot_accepts_exactly_the_valid_times(text in "[0-9]{2}:[0-9]{2}") {
        let result = display_once(&text, &ClockConfig::default(), None, Viewport::FALLBACK);
        match result {
            Ok(frame) => {
                prop_assert!(validate_time(&text));
                prop_assert_eq!(frame.height(), 3);
            },
            Err(ClockError::InvalidTimeFormat(rejected)) => {
                prop_assert!(!validate_time(&text));
                prop_assert_eq!(rejected, text);
            },
            Err(err) => prop_assert!(false, "unexpected error {}", err),
        }
    }
}

#[test]
fn twelve_hour_one_shot_prints_the_meridiem() {
    let mut config = ClockConfig::default();
    config.face.ampm = true;

    let frame = display_once("14:30", &config, None, Viewport::FALLBACK).unwrap();
    let text = frame.to_string();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().last().unwrap().contains("PM"));
}

use super::*;
use crate::surface::RecordingSurface;

type Recorder = RecordingSurface<u16, 256>;

const GREEN: u16 = 0x07E0;

fn lit(c: char) -> usize {
    RETRO_DIGITS.glyph(c).unwrap().lit_count(RETRO_DIGITS.rows())
}

fn time(h: u8, m: u8, s: u8) -> ClockTime {
    ClockTime::new(h, m, s).unwrap()
}

#[test]
fn time_components_are_validated() {
    assert!(ClockTime::new(23, 59, 59).is_ok());
    assert_eq!(ClockTime::new(24, 0, 0), Err(ClockError::OutOfRange));
    assert_eq!(ClockTime::new(0, 60, 0), Err(ClockError::OutOfRange));
    assert_eq!(ClockTime::new(0, 0, 60), Err(ClockError::OutOfRange));
}

#[test]
fn seconds_counter_wraps_at_midnight() {
    let t = ClockTime::from_seconds_since_midnight(86_400 + 3_661);

    assert_eq!((t.hours(), t.minutes(), t.seconds()), (1, 1, 1));
    assert_eq!(t.seconds_since_midnight(), 3_661);
}

#[test]
fn parse_accepts_short_and_long_forms() {
    assert_eq!(ClockTime::parse("07:05"), Ok(time(7, 5, 0)));
    assert_eq!(ClockTime::parse(" 23:59:58\n"), Ok(time(23, 59, 58)));
    assert_eq!(ClockTime::parse("7:5"), Ok(time(7, 5, 0)));
}

#[test]
fn parse_rejects_garbage() {
    for text in ["", "12", "12:", "12:3a", "+1:00", "123:00", "1:2:3:4"] {
        assert_eq!(ClockTime::parse(text), Err(ClockError::Malformed), "{text:?}");
    }
    assert_eq!(ClockTime::parse("25:00"), Err(ClockError::OutOfRange));
}

#[test]
fn layout_24_hour() {
    let face = ClockFace::default();

    assert_eq!(face.layout(time(9, 41, 7)).as_str(), "09:41");
    assert_eq!(face.layout(time(0, 0, 0)).as_str(), "00:00");
}

#[test]
fn layout_12_hour_with_seconds_and_blank_pad() {
    let face = ClockFace::new(ClockConfig {
        format: HourFormat::TwelveHour,
        show_seconds: true,
        leading_zero: false,
        ..ClockConfig::default()
    });

    assert_eq!(face.layout(time(0, 5, 9)).as_str(), "12:05:09");
    assert_eq!(face.layout(time(13, 30, 0)).as_str(), " 1:30:00");
    assert_eq!(face.layout(time(12, 0, 0)).as_str(), "12:00:00");
    assert_eq!(face.layout(time(23, 59, 59)).as_str(), "11:59:59");
}

#[test]
fn longest_readout_fills_capacity_exactly() {
    let face = ClockFace::new(ClockConfig {
        show_seconds: true,
        ..ClockConfig::default()
    });

    let readout = face.layout(time(23, 59, 59));
    assert_eq!(readout.as_str(), "23:59:59");
    assert_eq!(readout.len(), READOUT_CAPACITY);
}

#[test]
fn size_accounts_for_cells_and_spacing() {
    let face = ClockFace::default();
    assert_eq!(face.size(), Ok((100, 32)));

    let with_seconds = ClockFace::new(ClockConfig {
        show_seconds: true,
        scale: 2,
        glyph_spacing: 0,
        ..ClockConfig::default()
    });
    assert_eq!(with_seconds.size(), Ok((64, 16)));
}

#[test]
fn render_places_cells_left_to_right() {
    let face = ClockFace::default();
    let mut surface = Recorder::new();

    let outcome = face.render(&mut surface, time(12, 34, 0), true, GREEN);

    let expected = lit('1') + lit('2') + lit('3') + lit('4') + 2;
    assert_eq!(
        outcome,
        Ok(ClockOutcome {
            rects: expected,
            digits: 4,
        })
    );
    assert!(!surface.overflowed());
    assert_eq!(surface.bounding_box(), Some((8 + 4, 8, 96, 32)));

    let colon: Vec<_> = surface.rects().iter().filter(|r| r.x == 56).collect();
    assert_eq!(colon.len(), 2);
    assert_eq!((colon[0].y, colon[1].y), (16, 28));
    assert!(surface.rects().iter().all(|r| r.color == GREEN));
}

#[test]
fn hidden_colon_leaves_its_cell_blank() {
    let face = ClockFace::default();
    let mut lit_colon = Recorder::new();
    let mut dark_colon = Recorder::new();

    let shown = face.render(&mut lit_colon, time(10, 10, 0), true, GREEN).unwrap();
    let hidden = face.render(&mut dark_colon, time(10, 10, 0), false, GREEN).unwrap();

    assert_eq!(shown.rects, hidden.rects + 2);
    assert!(dark_colon.rects().iter().all(|r| r.x != 56));
}

#[test]
fn blank_padded_hour_skips_tens_cell() {
    let face = ClockFace::new(ClockConfig {
        leading_zero: false,
        ..ClockConfig::default()
    });
    let mut surface = Recorder::new();

    let outcome = face.render(&mut surface, time(7, 0, 0), false, GREEN).unwrap();

    assert_eq!(outcome.digits, 3);
    assert!(surface.rects().iter().all(|r| r.x >= 32));
}

#[test]
fn invalid_scale_draws_nothing() {
    let face = ClockFace::new(ClockConfig {
        scale: 0,
        ..ClockConfig::default()
    });
    let mut surface = Recorder::new();

    assert_eq!(
        face.render(&mut surface, time(1, 2, 3), true, GREEN),
        Err(ClockError::Raster(RasterError::InvalidScale(0)))
    );
    assert_eq!(
        face.clear(&mut surface, 0),
        Err(ClockError::Raster(RasterError::InvalidScale(0)))
    );
    assert!(surface.is_empty());
}

#[test]
fn clear_fills_the_readout_box() {
    let face = ClockFace::default();
    let mut surface = Recorder::new();

    face.clear(&mut surface, 0).unwrap();

    assert_eq!(surface.len(), 1);
    assert_eq!(surface.bounding_box(), Some((8, 8, 100, 32)));
}

#[test]
fn colon_blinks_on_even_seconds() {
    assert!(colon_visible_at(0));
    assert!(!colon_visible_at(1));
    assert!(colon_visible_at(58));
}

#[test]
fn clock_error_display() {
    assert_eq!(
        ClockError::from(RasterError::InvalidScale(-1)).to_string(),
        "clock render failed: invalid glyph scale -1"
    );
}

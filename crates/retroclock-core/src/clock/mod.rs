//! Retro clock face: time model, layout, and rendering.

use core::fmt;

use heapless::String;
use log::debug;

use crate::{
    font::{GlyphTable, RETRO_DIGITS},
    raster::{self, DrawOutcome, RasterError},
    surface::Surface,
};

const SECONDS_PER_DAY: u32 = 86_400;
/// Longest readout, `HH:MM:SS`.
pub const READOUT_CAPACITY: usize = 8;
/// Logical width of a separator cell.
const SEPARATOR_COLUMNS: i32 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockError {
    /// An hour, minute, or second component is out of range.
    OutOfRange,
    /// Text is not `HH:MM` or `HH:MM:SS`.
    Malformed,
    Raster(RasterError),
}

impl From<RasterError> for ClockError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("time component out of range"),
            Self::Malformed => f.write_str("expected HH:MM or HH:MM:SS"),
            Self::Raster(err) => write!(f, "clock render failed: {err}"),
        }
    }
}

/// Wall-clock time of day.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, ClockError> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(ClockError::OutOfRange);
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Builds a time from a seconds counter, wrapping at midnight.
    pub const fn from_seconds_since_midnight(total: u32) -> Self {
        let total = total % SECONDS_PER_DAY;
        Self {
            hours: (total / 3_600) as u8,
            minutes: ((total / 60) % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Parses `HH:MM` or `HH:MM:SS`.
    pub fn parse(text: &str) -> Result<Self, ClockError> {
        let mut parts = text.trim().split(':');
        let hours = parse_component(parts.next())?;
        let minutes = parse_component(parts.next())?;
        let seconds = match parts.next() {
            Some(part) => parse_component(Some(part))?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(ClockError::Malformed);
        }

        Self::new(hours, minutes, seconds)
    }

    pub const fn hours(&self) -> u8 {
        self.hours
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    pub const fn seconds_since_midnight(&self) -> u32 {
        self.hours as u32 * 3_600 + self.minutes as u32 * 60 + self.seconds as u32
    }
}

fn parse_component(part: Option<&str>) -> Result<u8, ClockError> {
    let part = part.ok_or(ClockError::Malformed)?;
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClockError::Malformed);
    }

    part.parse().map_err(|_| ClockError::Malformed)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HourFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

/// Clock face layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClockConfig {
    /// Top-left corner of the readout.
    pub origin: (i32, i32),
    pub scale: i32,
    /// Logical pixels between cells.
    pub glyph_spacing: i32,
    pub format: HourFormat,
    pub show_seconds: bool,
    /// Pad single-digit hours with `0` instead of a blank cell.
    pub leading_zero: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            origin: (8, 8),
            scale: 4,
            glyph_spacing: 1,
            format: HourFormat::TwentyFourHour,
            show_seconds: false,
            leading_zero: true,
        }
    }
}

/// Counts from one [`ClockFace::render`] call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ClockOutcome {
    pub rects: usize,
    pub digits: usize,
}

/// Colon blink phase: lit on even seconds.
pub const fn colon_visible_at(seconds: u8) -> bool {
    seconds % 2 == 0
}

/// Renders a time of day as a row of retro digits.
#[derive(Clone, Copy, Debug)]
pub struct ClockFace {
    config: ClockConfig,
    table: &'static GlyphTable,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

impl ClockFace {
    pub fn new(config: ClockConfig) -> Self {
        Self::with_table(config, &RETRO_DIGITS)
    }

    /// Uses `table` for digits; it must cover `'0'..='9'`.
    pub const fn with_table(config: ClockConfig, table: &'static GlyphTable) -> Self {
        Self { config, table }
    }

    pub const fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ClockConfig) {
        self.config = config;
    }

    /// Characters shown for `time`, e.g. `"09:41"` or `" 9:41:07"`.
    pub fn layout(&self, time: ClockTime) -> String<READOUT_CAPACITY> {
        let hours = match self.config.format {
            HourFormat::TwentyFourHour => time.hours(),
            HourFormat::TwelveHour => match time.hours() % 12 {
                0 => 12,
                h => h,
            },
        };

        let mut out = String::new();
        let tens = if hours < 10 && !self.config.leading_zero {
            ' '
        } else {
            digit_char(hours / 10)
        };
        push_all(&mut out, &[tens, digit_char(hours % 10), ':']);
        push_all(
            &mut out,
            &[digit_char(time.minutes() / 10), digit_char(time.minutes() % 10)],
        );
        if self.config.show_seconds {
            push_all(
                &mut out,
                &[
                    ':',
                    digit_char(time.seconds() / 10),
                    digit_char(time.seconds() % 10),
                ],
            );
        }

        out
    }

    /// Pixel `(width, height)` of the readout. Independent of the time shown.
    pub fn size(&self) -> Result<(i32, i32), RasterError> {
        let scale = raster::check_scale(self.config.scale)?;
        let (digits, separators) = if self.config.show_seconds {
            (6, 2)
        } else {
            (4, 1)
        };
        let cells = digits + separators;
        let columns = digits * self.table.columns() as i32 + separators * SEPARATOR_COLUMNS;
        let spacing = (cells - 1).saturating_mul(self.config.glyph_spacing.max(0));

        Ok((
            columns.saturating_add(spacing).saturating_mul(scale),
            i32::from(self.table.rows()).saturating_mul(scale),
        ))
    }

    /// Draws `time` at the configured origin.
    ///
    /// Separators are two dots when `colon_visible`, blank otherwise. The
    /// scale is validated before anything is drawn.
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        time: ClockTime,
        colon_visible: bool,
        color: S::Color,
    ) -> Result<ClockOutcome, ClockError> {
        let scale = raster::check_scale(self.config.scale)?;
        let text = self.layout(time);
        debug!("clock face render {}", text.as_str());

        let (mut x, y) = self.config.origin;
        let spacing = self.config.glyph_spacing.max(0).saturating_mul(scale);
        let digit_width = (self.table.columns() as i32).saturating_mul(scale);
        let separator_width = SEPARATOR_COLUMNS.saturating_mul(scale);
        let mut outcome = ClockOutcome::default();

        for c in text.chars() {
            if c == ':' {
                if colon_visible {
                    outcome.rects += self.draw_separator(surface, x, y, scale, color);
                }
                x = x.saturating_add(separator_width.saturating_add(spacing));
                continue;
            }

            if let DrawOutcome::Drawn { rects } =
                raster::draw_scaled_glyph(surface, self.table, x, y, c, scale, color)?
            {
                outcome.rects += rects;
                outcome.digits += 1;
            }
            x = x.saturating_add(digit_width.saturating_add(spacing));
        }

        Ok(outcome)
    }

    /// Paints the readout's bounding box with `background`.
    pub fn clear<S: Surface>(
        &self,
        surface: &mut S,
        background: S::Color,
    ) -> Result<(), ClockError> {
        let (width, height) = self.size()?;
        let (x, y) = self.config.origin;
        surface.fill_rect(x, y, width, height, background);
        Ok(())
    }

    fn draw_separator<S: Surface>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        scale: i32,
        color: S::Color,
    ) -> usize {
        let rows = i32::from(self.table.rows());
        let upper = rows / 3;
        let lower = rows - 1 - rows / 3;

        for row in [upper, lower] {
            let dot_y = y.saturating_add(row.saturating_mul(scale));
            surface.fill_rect(x, dot_y, scale, scale, color);
        }
        2
    }
}

const fn digit_char(value: u8) -> char {
    (b'0' + value % 10) as char
}

fn push_all(out: &mut String<READOUT_CAPACITY>, chars: &[char]) {
    for &c in chars {
        let pushed = out.push(c);
        debug_assert!(pushed.is_ok(), "readout longer than {READOUT_CAPACITY} chars");
    }
}

#[cfg(test)]
mod tests;

//! Host preview for the retro clock face.
//!
//! Renders one frame into a panel-sized offscreen framebuffer and prints it
//! as ASCII art. Usage: `retroclock [HH:MM[:SS]] [--12h] [--seconds]`.
//! Log verbosity follows `RUST_LOG`.

use std::{env, process::ExitCode};

use embedded_graphics_core::pixelcolor::{IntoStorage, Rgb565, RgbColor};
use log::{LevelFilter, info, warn};
use retroclock_core::{
    clock::{ClockConfig, ClockFace, ClockTime, HourFormat, colon_visible_at},
    surface::GraphicsSurface,
};
use retroclock_framebuf::FrameBuffer;

use options::PreviewOptions;

#[path = "main/ascii.rs"]
mod ascii;
#[path = "main/options.rs"]
mod options;

// 1.14" ST7789 panel in landscape.
const PANEL_WIDTH: usize = 240;
const PANEL_HEIGHT: usize = 135;
const PANEL_MARGIN: i32 = 8;
const SCALE_CANDIDATES: [i32; 6] = [6, 5, 4, 3, 2, 1];
const DIGIT_COLOR: Rgb565 = Rgb565::new(31, 40, 0);
const BACKGROUND: Rgb565 = Rgb565::BLACK;
const DEFAULT_TIME_SECS: u32 = 12 * 3_600 + 34 * 60 + 56;

type Panel = FrameBuffer<PANEL_WIDTH, PANEL_HEIGHT>;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let options = match PreviewOptions::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            warn!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let time = options
        .time
        .unwrap_or(ClockTime::from_seconds_since_midnight(DEFAULT_TIME_SECS));

    let base = ClockConfig {
        format: if options.twelve_hour {
            HourFormat::TwelveHour
        } else {
            HourFormat::TwentyFourHour
        },
        show_seconds: options.show_seconds,
        ..ClockConfig::default()
    };
    let Some(face) = fit_face(base) else {
        warn!("clock face does not fit a {}x{} panel", PANEL_WIDTH, PANEL_HEIGHT);
        return ExitCode::FAILURE;
    };

    let mut frame = Panel::new();
    frame.clear(BACKGROUND.into_storage());

    let colon = colon_visible_at(time.seconds());
    let outcome = {
        let mut surface = GraphicsSurface::new(&mut frame);
        face.render(&mut surface, time, colon, DIGIT_COLOR)
    };
    match outcome {
        Ok(outcome) => info!(
            "rendered {} at scale {}: {} digits, {} rects",
            face.layout(time).as_str(),
            face.config().scale,
            outcome.digits,
            outcome.rects
        ),
        Err(err) => {
            warn!("clock render failed: {}", err);
            return ExitCode::FAILURE;
        }
    }

    let background = BACKGROUND.into_storage();
    for line in ascii::render_rows(&frame, background) {
        println!("{line}");
    }

    ExitCode::SUCCESS
}

/// Picks the largest scale whose readout fits the panel, centered.
fn fit_face(base: ClockConfig) -> Option<ClockFace> {
    let max_w = PANEL_WIDTH as i32 - 2 * PANEL_MARGIN;
    let max_h = PANEL_HEIGHT as i32 - 2 * PANEL_MARGIN;

    for scale in SCALE_CANDIDATES {
        let face = ClockFace::new(ClockConfig { scale, ..base });
        let Ok((width, height)) = face.size() else {
            continue;
        };
        if width <= max_w && height <= max_h {
            let origin = (
                (PANEL_WIDTH as i32 - width) / 2,
                (PANEL_HEIGHT as i32 - height) / 2,
            );
            return Some(ClockFace::new(ClockConfig {
                scale,
                origin,
                ..base
            }));
        }
    }

    None
}

//! Diverging red–grey colormap.

use plotters::style::RGBColor;

// Endpoints of matplotlib's RdGy map, which the original figures used.
const DARK_RED: (u8, u8, u8) = (103, 0, 31);
const WHITE_MID: (u8, u8, u8) = (255, 255, 255);
const DARK_GREY: (u8, u8, u8) = (26, 26, 26);

/// Red–grey colormap: maps `t` in `[0, 1]` to a color, dark red at 0,
/// white at 0.5, dark grey at 1. Out-of-range inputs clamp.
pub fn red_grey_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        lerp_rgb(DARK_RED, WHITE_MID, t * 2.0)
    } else {
        lerp_rgb(WHITE_MID, DARK_GREY, (t - 0.5) * 2.0)
    }
}

fn lerp_rgb(from: (u8, u8, u8), to: (u8, u8, u8), s: f64) -> RGBColor {
    let channel = |a: u8, b: u8| (a as f64 + s * (b as f64 - a as f64)).round() as u8;
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

use super::wrap_unit;
use crate::core::data::colour::Colour;
use crate::core::ports::colour_map::Colormap;

/// Full-saturation hue wheel. Cyclic: `t = 0` and `t = 1` are both red.
#[derive(Debug, Default, Copy, Clone)]
pub struct Hsv;

impl Colormap for Hsv {
    fn sample(&self, t: f64) -> Colour {
        let hue = wrap_unit(t) * 6.0;
        let sector = hue.floor() as u32 % 6;
        let fraction = hue - hue.floor();

        let rising = (fraction * 255.0).round() as u8;
        let falling = ((1.0 - fraction) * 255.0).round() as u8;

        let (r, g, b) = match sector {
            0 => (255, rising, 0),
            1 => (falling, 255, 0),
            2 => (0, 255, rising),
            3 => (0, falling, 255),
            4 => (rising, 0, 255),
            _ => (255, 0, falling),
        };

        Colour { r, g, b }
    }

    fn display_name(&self) -> &str {
        "hsv"
    }

    fn is_cyclic(&self) -> bool {
        true
    }
}

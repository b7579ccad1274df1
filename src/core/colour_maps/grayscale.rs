use crate::core::data::colour::Colour;
use crate::core::ports::colour_map::Colormap;

/// Linear black-to-white ramp; the escape-time engine's default mapping.
#[derive(Debug, Default, Copy, Clone)]
pub struct Grayscale;

impl Colormap for Grayscale {
    fn sample(&self, t: f64) -> Colour {
        let level = (t.clamp(0.0, 1.0) * 255.0).round() as u8;

        Colour {
            r: level,
            g: level,
            b: level,
        }
    }

    fn display_name(&self) -> &str {
        "grayscale"
    }

    fn is_cyclic(&self) -> bool {
        false
    }
}

use super::interpolate_anchors;
use crate::core::data::colour::Colour;
use crate::core::ports::colour_map::Colormap;

// Black through purple and orange to pale yellow, after matplotlib's
// `inferno`. Sequential, so out-of-range inputs clamp instead of wrapping.
const ANCHORS: [[f64; 3]; 9] = [
    [0.001, 0.000, 0.014],
    [0.120, 0.047, 0.286],
    [0.341, 0.063, 0.431],
    [0.541, 0.135, 0.416],
    [0.735, 0.216, 0.330],
    [0.894, 0.353, 0.194],
    [0.976, 0.557, 0.035],
    [0.976, 0.788, 0.196],
    [0.988, 1.000, 0.643],
];

#[derive(Debug, Default, Copy, Clone)]
pub struct Inferno;

impl Colormap for Inferno {
    fn sample(&self, t: f64) -> Colour {
        interpolate_anchors(&ANCHORS, t.clamp(0.0, 1.0))
    }

    fn display_name(&self) -> &str {
        "inferno"
    }

    fn is_cyclic(&self) -> bool {
        false
    }
}

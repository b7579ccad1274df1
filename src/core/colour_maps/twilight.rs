use super::{interpolate_anchors, wrap_unit};
use crate::core::data::colour::Colour;
use crate::core::ports::colour_map::Colormap;

// White through blue to a dark middle, back through red to white; the first
// and last anchors coincide so the palette closes on itself.
const ANCHORS: [[f64; 3]; 9] = [
    [0.886, 0.850, 0.888],
    [0.655, 0.745, 0.847],
    [0.400, 0.576, 0.820],
    [0.310, 0.329, 0.698],
    [0.184, 0.122, 0.216],
    [0.576, 0.227, 0.322],
    [0.796, 0.459, 0.341],
    [0.824, 0.698, 0.557],
    [0.886, 0.850, 0.888],
];

/// Cyclic blue-to-red palette in the shape of matplotlib's `twilight`.
#[derive(Debug, Default, Copy, Clone)]
pub struct Twilight;

impl Colormap for Twilight {
    fn sample(&self, t: f64) -> Colour {
        interpolate_anchors(&ANCHORS, wrap_unit(t))
    }

    fn display_name(&self) -> &str {
        "twilight"
    }

    fn is_cyclic(&self) -> bool {
        true
    }
}

use crate::core::data::colour::Colour;

/// A named palette sampled at `t ∈ [0, 1]`.
///
/// Implementations clamp out-of-range inputs; cyclic palettes additionally
/// wrap, so `sample(0.0) == sample(1.0)`.
pub trait Colormap: Send + Sync {
    fn sample(&self, t: f64) -> Colour;

    fn display_name(&self) -> &str;

    /// Whether the palette wraps around at `t = 0` / `t = 1`.
    fn is_cyclic(&self) -> bool;
}

impl Colormap for Box<dyn Colormap> {
    fn sample(&self, t: f64) -> Colour {
        (**self).sample(t)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn is_cyclic(&self) -> bool {
        (**self).is_cyclic()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    /// Scales each channel by `factor`, clamped to `[0, 1]`.
    ///
    /// Used by the domain-coloring engine to darken a palette colour with a
    /// contour shading term.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);

        Self {
            r: (f64::from(self.r) * factor).round() as u8,
            g: (f64::from(self.g) * factor).round() as u8,
            b: (f64::from(self.b) * factor).round() as u8,
        }
    }
}

use crate::core::data::colour::Colour;
use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::ports::colour_map::Colormap;
use crate::core::ports::complex_map::{ComplexMap, ParametricMap};
use num::complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::PI;

const SHARP: f64 = 0.5;
const CONTOUR_COUNT: f64 = 16.0;
const MODULUS_BAND_BASE: f64 = 1.5;

/// Which contour term darkens the palette colour.
///
/// The modulus and phase terms are both computed by the reference
/// technique; live rendering historically used only the phase bands, so
/// that is the default, with the `min` combination kept as an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContourMode {
    #[default]
    Phase,
    Modulus,
    Enhanced,
}

/// Domain-coloring engine: maps `F = f(Z)` over the grid straight to
/// colour, hue from the argument of `F` and shading from log-modulus and
/// phase contour bands.
///
/// The hue sweep is scaled by `|sin(modulation / 3)|`, so the external
/// signal breathes the palette: at zero every hue collapses to the
/// palette's origin, and the full wheel returns as the signal cycles.
#[derive(Debug, Clone)]
pub struct DomainColoringEngine {
    width: u32,
    height: u32,
    samples: Vec<Complex64>,
    modulation: f64,
    contour_mode: ContourMode,
}

impl DomainColoringEngine {
    #[must_use]
    pub fn new(grid: &ComplexGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            samples: grid.samples(),
            modulation: 0.0,
            contour_mode: ContourMode::default(),
        }
    }

    #[must_use]
    pub fn with_contour_mode(mut self, contour_mode: ContourMode) -> Self {
        self.contour_mode = contour_mode;
        self
    }

    #[must_use]
    pub fn contour_mode(&self) -> ContourMode {
        self.contour_mode
    }

    #[must_use]
    pub fn modulation(&self) -> f64 {
        self.modulation
    }

    pub fn set_modulation(&mut self, modulation: f64) {
        self.modulation = modulation;
    }

    /// Direct mode: colours `f(Z)` over the whole grid.
    #[must_use]
    pub fn render(&self, f: &dyn ComplexMap, palette: &dyn Colormap) -> PixelBuffer {
        self.shade(|z| f.eval(z), palette)
    }

    /// Power mode: colours `p(Z, c)` where `c` is derived from the
    /// modulation signal by the orchestrator.
    #[must_use]
    pub fn render_power(
        &self,
        p: &dyn ParametricMap,
        c: Complex64,
        palette: &dyn Colormap,
    ) -> PixelBuffer {
        self.shade(|z| p.eval(z, c), palette)
    }

    fn shade<F>(&self, f: F, palette: &dyn Colormap) -> PixelBuffer
    where
        F: Fn(Complex64) -> Complex64 + Sync,
    {
        let hue_factor = (self.modulation / 3.0).sin().abs();
        let contour_mode = self.contour_mode;

        let data: Vec<u8> = self
            .samples
            .par_iter()
            .flat_map_iter(|&z| {
                let value = f(z);
                let colour = shade_value(value, hue_factor, contour_mode, palette);

                [colour.r, colour.g, colour.b]
            })
            .collect();

        PixelBuffer::from_raw(self.width, self.height, data)
    }
}

fn shade_value(
    value: Complex64,
    hue_factor: f64,
    contour_mode: ContourMode,
    palette: &dyn Colormap,
) -> Colour {
    let shading = match contour_mode {
        ContourMode::Phase => phase_term(value),
        ContourMode::Modulus => modulus_term(value),
        ContourMode::Enhanced => modulus_term(value).min(phase_term(value)),
    };

    palette.sample(hue_angle(value, hue_factor)).scaled(shading)
}

/// Hue input in `[0, hue_factor]`, periodic in the argument of `value`.
pub(crate) fn hue_angle(value: Complex64, hue_factor: f64) -> f64 {
    (PI - (-value.im).atan2(-value.re)) * hue_factor / (2.0 * PI)
}

/// Log-spaced modulus contour bands. Diverges along with `ln |F|` at zeros
/// and poles of `F`; the clamp absorbs it.
pub(crate) fn modulus_term(value: Complex64) -> f64 {
    let aux = value.norm().ln() / MODULUS_BAND_BASE.ln();

    (SHARP * (aux - aux.floor()) + 0.7).clamp(0.0, 1.0)
}

/// Angular contour bands, `CONTOUR_COUNT` per full turn.
pub(crate) fn phase_term(value: Complex64) -> f64 {
    let phase = (PI - value.im.atan2(-value.re)) / (2.0 * PI);
    let aux = CONTOUR_COUNT * phase;

    (SHARP * (aux - aux.floor()) + 0.7).clamp(0.0, 1.0)
}

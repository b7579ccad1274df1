use crate::core::data::field::IterationField;
use num::complex::Complex64;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeTimeError {
    InvalidSize { width: u32, height: u32 },
    ZeroMaxIterations,
    NonPositiveScale { scale: f64 },
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel lattice must be non-empty: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonPositiveScale { scale } => {
                write!(f, "scale must be positive, got {}", scale)
            }
        }
    }
}

impl Error for EscapeTimeError {}

/// Mandelbrot-style escape-time engine over a `width × height` pixel
/// lattice.
///
/// Pixel `(x, y)` maps to `c = (x + iy − offset) · scale`, then `z ← z² + c`
/// is iterated from zero until `|z| > 2` or the budget runs out. A count of
/// `max_iterations` means the point never escaped. `offset` and `scale` stay
/// mutable so the orchestrator can zoom between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeEngine {
    width: u32,
    height: u32,
    max_iterations: u32,
    offset: Complex64,
    scale: f64,
}

impl EscapeTimeEngine {
    pub fn new(
        width: u32,
        height: u32,
        max_iterations: u32,
        offset: Complex64,
        scale: f64,
    ) -> Result<Self, EscapeTimeError> {
        if width == 0 || height == 0 {
            return Err(EscapeTimeError::InvalidSize { width, height });
        }

        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        if scale <= 0.0 {
            return Err(EscapeTimeError::NonPositiveScale { scale });
        }

        Ok(Self {
            width,
            height,
            max_iterations,
            offset,
            scale,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Complex64 {
        self.offset
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), EscapeTimeError> {
        if scale <= 0.0 {
            return Err(EscapeTimeError::NonPositiveScale { scale });
        }

        self.scale = scale;
        Ok(())
    }

    pub fn set_offset(&mut self, offset: Complex64) {
        self.offset = offset;
    }

    /// Complex parameter for pixel `(x, y)` under the current offset/scale.
    #[must_use]
    pub fn pixel_parameter(&self, x: u32, y: u32) -> Complex64 {
        (Complex64::new(f64::from(x), f64::from(y)) - self.offset) * self.scale
    }

    /// Escape count for a single parameter; the scalar reference loop.
    ///
    /// Counts are in `[1, max_iterations]` for escaping points (a point with
    /// `|c| > 2` escapes on the first iteration, count 1) and exactly
    /// `max_iterations` for points that never escape.
    #[must_use]
    pub fn escape_count(&self, c: Complex64) -> u32 {
        let mut z = Complex64::new(0.0, 0.0);

        for iteration in 1..=self.max_iterations {
            z = z * z + c;
            if z.norm_sqr() > 4.0 {
                return iteration;
            }
        }

        self.max_iterations
    }

    /// Renders the full field, rows in parallel.
    #[must_use]
    pub fn render(&self) -> IterationField {
        let counts: Vec<u32> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| self.render_row(y))
            .collect();

        IterationField::from_counts(self.width, self.height, counts)
    }

    /// One row as a lane of pixels iterated together with freeze-on-escape:
    /// escaped pixels stop updating while the rest of the lane continues.
    /// Counts are identical to [`Self::escape_count`] per pixel.
    fn render_row(&self, y: u32) -> Vec<u32> {
        let width = self.width as usize;
        let parameters: Vec<Complex64> =
            (0..self.width).map(|x| self.pixel_parameter(x, y)).collect();

        let mut z = vec![Complex64::new(0.0, 0.0); width];
        // max_iterations doubles as the "still iterating" marker; pixels
        // that escape on the final iteration would record it anyway.
        let mut counts = vec![self.max_iterations; width];
        let mut live = width;

        for iteration in 1..=self.max_iterations {
            if live == 0 {
                break;
            }

            for i in 0..width {
                if counts[i] != self.max_iterations {
                    continue;
                }

                z[i] = z[i] * z[i] + parameters[i];

                if z[i].norm_sqr() > 4.0 {
                    counts[i] = iteration;
                    live -= 1;
                }
            }
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(max_iterations: u32) -> EscapeTimeEngine {
        // 4x4 lattice centred on the origin: pixel (2, 2) maps to c = 0.
        EscapeTimeEngine::new(
            4,
            4,
            max_iterations,
            Complex64::new(2.0, 2.0),
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_constructor_rejects_bad_parameters() {
        let offset = Complex64::new(0.0, 0.0);

        assert_eq!(
            EscapeTimeEngine::new(0, 4, 10, offset, 1.0),
            Err(EscapeTimeError::InvalidSize {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            EscapeTimeEngine::new(4, 4, 0, offset, 1.0),
            Err(EscapeTimeError::ZeroMaxIterations)
        );
        assert_eq!(
            EscapeTimeEngine::new(4, 4, 10, offset, 0.0),
            Err(EscapeTimeError::NonPositiveScale { scale: 0.0 })
        );
        assert_eq!(
            EscapeTimeEngine::new(4, 4, 10, offset, -2.0),
            Err(EscapeTimeError::NonPositiveScale { scale: -2.0 })
        );
    }

    #[test]
    fn test_set_scale_rejects_non_positive() {
        let mut engine = engine(10);

        assert_eq!(
            engine.set_scale(-1.0),
            Err(EscapeTimeError::NonPositiveScale { scale: -1.0 })
        );
        assert_eq!(engine.scale(), 1.0);

        engine.set_scale(0.5).unwrap();
        assert_eq!(engine.scale(), 0.5);
    }

    #[test]
    fn test_origin_never_escapes() {
        // The orbit of 0 under z² stays at 0.
        let engine = engine(30);

        assert_eq!(engine.escape_count(Complex64::new(0.0, 0.0)), 30);
    }

    #[test]
    fn test_parameter_outside_radius_two_escapes_immediately() {
        // First iteration puts z = c with |z| > 2 already.
        let engine = engine(50);

        assert_eq!(engine.escape_count(Complex64::new(2.5, 0.0)), 1);
        assert_eq!(engine.escape_count(Complex64::new(-2.0, -2.0)), 1);
        assert_eq!(engine.escape_count(Complex64::new(0.0, 3.0)), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let engine = EscapeTimeEngine::new(
            32,
            24,
            40,
            Complex64::new(20.0, 12.0),
            0.1,
        )
        .unwrap();

        assert_eq!(engine.render(), engine.render());
    }

    #[test]
    fn test_freeze_on_escape_matches_scalar_reference() {
        let engine = EscapeTimeEngine::new(
            48,
            36,
            60,
            Complex64::new(31.0, 18.0),
            2.2 / 36.0,
        )
        .unwrap();
        let field = engine.render();

        for y in 0..engine.height() {
            for x in 0..engine.width() {
                let c = engine.pixel_parameter(x, y);

                assert_eq!(
                    field.get(x, y),
                    engine.escape_count(c),
                    "mismatch at pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_end_to_end_lattice_scenario() {
        // Centre pixel maps to c = 0 and saturates; the (0, 0) corner maps
        // to c = -2 - 2i, outside radius two, so it escapes on the first
        // iteration.
        let engine = engine(10);
        let field = engine.render();

        assert_eq!(engine.pixel_parameter(2, 2), Complex64::new(0.0, 0.0));
        assert_eq!(field.get(2, 2), 10);

        assert_eq!(engine.pixel_parameter(0, 0), Complex64::new(-2.0, -2.0));
        assert_eq!(field.get(0, 0), 1);
    }

    #[test]
    fn test_zoom_changes_the_field() {
        let mut engine = EscapeTimeEngine::new(
            16,
            16,
            20,
            Complex64::new(8.0, 8.0),
            0.25,
        )
        .unwrap();
        let before = engine.render();

        engine.set_scale(0.125).unwrap();
        let after = engine.render();

        assert_ne!(before, after);
    }
}

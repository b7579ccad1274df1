use crate::core::data::complex_grid::ComplexGrid;
use crate::core::data::field::{RootClass, RootField};
use crate::core::engines::root_table::RootTable;
use crate::core::ports::complex_map::DifferentiableMap;
use num::complex::Complex64;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

pub const DEFAULT_TOLERANCE: f64 = 1e-8;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NewtonError {
    ZeroMaxIterations,
    NonPositiveTolerance { tolerance: f64 },
}

impl fmt::Display for NewtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonPositiveTolerance { tolerance } => {
                write!(f, "tolerance must be positive, got {}", tolerance)
            }
        }
    }
}

impl Error for NewtonError {}

/// Newton-Raphson root fractal engine.
///
/// Runs `z ← z − f(z)/f'(z)` from every grid point and classifies the point
/// by which root it converges to. Roots are not known up front; they are
/// discovered during the render and collected in a [`RootTable`] that
/// persists across renders until [`Self::reset_roots`].
#[derive(Debug)]
pub struct RootFractalEngine {
    grid: ComplexGrid,
    max_iterations: u32,
    tolerance: f64,
    roots: RootTable,
}

impl RootFractalEngine {
    pub fn new(
        grid: ComplexGrid,
        max_iterations: u32,
        tolerance: f64,
    ) -> Result<Self, NewtonError> {
        if max_iterations == 0 {
            return Err(NewtonError::ZeroMaxIterations);
        }

        if tolerance <= 0.0 {
            return Err(NewtonError::NonPositiveTolerance { tolerance });
        }

        Ok(Self {
            grid,
            max_iterations,
            tolerance,
            roots: RootTable::new(tolerance),
        })
    }

    pub fn with_default_tolerance(
        grid: ComplexGrid,
        max_iterations: u32,
    ) -> Result<Self, NewtonError> {
        Self::new(grid, max_iterations, DEFAULT_TOLERANCE)
    }

    #[must_use]
    pub fn grid(&self) -> &ComplexGrid {
        &self.grid
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn roots(&self) -> Vec<Complex64> {
        self.roots.snapshot()
    }

    /// Forgets every discovered root; the next render starts a fresh table.
    pub fn reset_roots(&mut self) {
        self.roots.clear();
    }

    /// Runs Newton iteration from `z0`, returning the approximate root, or
    /// `None` when the derivative vanishes or the budget runs out.
    ///
    /// Convergence is checked before the step is applied, so a point that
    /// starts on a root converges with zero iterations.
    #[must_use]
    pub fn converge(&self, f: &dyn DifferentiableMap, z0: Complex64) -> Option<Complex64> {
        let tolerance_sqr = self.tolerance * self.tolerance;
        let mut z = z0;

        for _ in 0..self.max_iterations {
            let slope = f.slope(z);

            if slope == Complex64::new(0.0, 0.0) {
                return None;
            }

            let dz = f.value(z) / slope;

            if !dz.re.is_finite() || !dz.im.is_finite() {
                return None;
            }

            if dz.norm_sqr() < tolerance_sqr {
                return Some(z);
            }

            z -= dz;
        }

        None
    }

    /// Classifies every grid point, pixels in parallel.
    ///
    /// The per-pixel iteration is read-only with respect to shared state;
    /// only the table's lookup-or-append is serialized, so concurrent
    /// discovery of the same physical root cannot mint duplicate indices.
    #[must_use]
    pub fn render(&self, f: &dyn DifferentiableMap) -> RootField {
        let width = self.grid.width();
        let height = self.grid.height();

        let classes: Vec<RootClass> = (0..self.grid.len())
            .into_par_iter()
            .map(|index| {
                let x = (index % width as usize) as u32;
                let y = (index / width as usize) as u32;
                let z0 = self.grid.sample(x, y);

                match self.converge(f, z0) {
                    Some(root) => RootClass::Root(self.roots.index_of(root)),
                    None => RootClass::Undetermined,
                }
            })
            .collect();

        RootField::from_classes(width, height, classes)
    }
}

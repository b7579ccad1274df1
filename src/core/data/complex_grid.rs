use crate::core::data::region::Region;
use num::complex::Complex64;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComplexGridError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ComplexGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "grid must be at least two samples wide and tall: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexGridError {}

/// Fixed sampling lattice over a [`Region`] of the complex plane.
///
/// Sample `(i, j)` maps to the region by linear interpolation with exact
/// endpoints: `i = 0` lands on `xmin`, `i = width - 1` on `xmax`, and
/// likewise for the imaginary axis. Immutable after construction; zooming
/// means building a new grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    width: u32,
    height: u32,
    region: Region,
}

impl ComplexGrid {
    pub fn new(width: u32, height: u32, region: Region) -> Result<Self, ComplexGridError> {
        // Interpolation divides by width - 1 / height - 1, so a single
        // row or column is as degenerate as an empty one.
        if width < 2 || height < 2 {
            return Err(ComplexGridError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            region,
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
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Complex coordinate of sample `(i, j)`.
    #[must_use]
    pub fn sample(&self, i: u32, j: u32) -> Complex64 {
        debug_assert!(i < self.width && j < self.height);

        let x = self.region.xmin()
            + (f64::from(i) / f64::from(self.width - 1)) * self.region.width();
        let y = self.region.ymin()
            + (f64::from(j) / f64::from(self.height - 1)) * self.region.height();

        Complex64::new(x, y)
    }

    /// All samples in row-major order: index `j * width + i` is sample `(i, j)`.
    #[must_use]
    pub fn samples(&self) -> Vec<Complex64> {
        let mut samples = Vec::with_capacity(self.len());

        for j in 0..self.height {
            for i in 0..self.width {
                samples.push(self.sample(i, j));
            }
        }

        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_region() -> Region {
        Region::new(-2.0, 2.0, -2.0, 2.0).unwrap()
    }

    #[test]
    fn test_grid_new_valid() {
        let grid = ComplexGrid::new(4, 3, square_region()).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn test_grid_rejects_degenerate_dimensions() {
        let region = square_region();

        assert_eq!(
            ComplexGrid::new(0, 10, region),
            Err(ComplexGridError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            ComplexGrid::new(10, 1, region),
            Err(ComplexGridError::InvalidSize {
                width: 10,
                height: 1
            })
        );
    }

    #[test]
    fn test_sample_hits_region_corners_exactly() {
        let grid = ComplexGrid::new(101, 51, square_region()).unwrap();

        assert_eq!(grid.sample(0, 0), Complex64::new(-2.0, -2.0));
        assert_eq!(grid.sample(100, 0), Complex64::new(2.0, -2.0));
        assert_eq!(grid.sample(0, 50), Complex64::new(-2.0, 2.0));
        assert_eq!(grid.sample(100, 50), Complex64::new(2.0, 2.0));
    }

    #[test]
    fn test_sample_center() {
        let grid = ComplexGrid::new(101, 101, square_region()).unwrap();

        assert_eq!(grid.sample(50, 50), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_samples_are_row_major() {
        let grid = ComplexGrid::new(3, 2, Region::new(0.0, 2.0, 0.0, 1.0).unwrap()).unwrap();
        let samples = grid.samples();

        assert_eq!(samples.len(), 6);
        assert_eq!(samples[0], grid.sample(0, 0));
        assert_eq!(samples[1], grid.sample(1, 0));
        assert_eq!(samples[2], grid.sample(2, 0));
        assert_eq!(samples[3], grid.sample(0, 1));
        assert_eq!(samples[5], grid.sample(2, 1));
    }
}

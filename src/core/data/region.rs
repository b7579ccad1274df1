use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    InvalidBounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            } => {
                write!(
                    f,
                    "region bounds must satisfy xmin < xmax and ymin < ymax: \
                     x in [{}, {}], y in [{}, {}]",
                    xmin, xmax, ymin, ymax
                )
            }
        }
    }
}

impl Error for RegionError {}

/// Rectangular region of the complex plane, `[xmin, xmax] × [ymin, ymax]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Region {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, RegionError> {
        if xmin >= xmax || ymin >= ymax {
            return Err(RegionError::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

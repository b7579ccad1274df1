use crate::core::data::field::{IterationField, RootClass, RootField};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::ports::colour_map::Colormap;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColouriseError {
    CountExceedsMax {
        count: u32,
        max_iterations: u32,
    },
    RootIndexOutOfRange {
        index: usize,
        root_count: usize,
    },
}

impl fmt::Display for ColouriseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountExceedsMax {
                count,
                max_iterations,
            } => {
                write!(
                    f,
                    "iteration count {} exceeds maximum {}",
                    count, max_iterations
                )
            }
            Self::RootIndexOutOfRange { index, root_count } => {
                write!(
                    f,
                    "root index {} outside table of {} roots",
                    index, root_count
                )
            }
        }
    }
}

impl Error for ColouriseError {}

/// Maps an escape-time field through a palette at `t = count / max`.
///
/// With the grayscale palette this is the classic
/// `brightness = 255 · iterations / max_iterations` mapping.
pub fn colourise_iterations(
    field: &IterationField,
    max_iterations: u32,
    palette: &dyn Colormap,
) -> Result<PixelBuffer, ColouriseError> {
    let mut data = Vec::with_capacity(field.counts().len() * 3);

    for &count in field.counts() {
        if count > max_iterations {
            return Err(ColouriseError::CountExceedsMax {
                count,
                max_iterations,
            });
        }

        let colour = palette.sample(f64::from(count) / f64::from(max_iterations));
        data.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(PixelBuffer::from_raw(field.width(), field.height(), data))
}

/// Maps a root-classification field through a palette.
///
/// Root `index` samples the palette at `(index + 1) / (root_count + 1)`,
/// which is never 0, so undetermined pixels keep `t = 0` as a reserved
/// sentinel colour no root can collide with.
pub fn colourise_roots(
    field: &RootField,
    root_count: usize,
    palette: &dyn Colormap,
) -> Result<PixelBuffer, ColouriseError> {
    let mut data = Vec::with_capacity(field.classes().len() * 3);

    for &class in field.classes() {
        let t = match class {
            RootClass::Undetermined => 0.0,
            RootClass::Root(index) => {
                if index >= root_count {
                    return Err(ColouriseError::RootIndexOutOfRange { index, root_count });
                }

                (index + 1) as f64 / (root_count + 1) as f64
            }
        };

        let colour = palette.sample(t);
        data.extend_from_slice(&[colour.r, colour.g, colour.b]);
    }

    Ok(PixelBuffer::from_raw(field.width(), field.height(), data))
}

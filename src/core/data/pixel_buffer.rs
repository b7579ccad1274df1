use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    SizeMismatch {
        expected_bytes: usize,
        actual_bytes: usize,
    },
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected_bytes,
                actual_bytes,
            } => {
                write!(
                    f,
                    "pixel data is {} bytes, expected {}",
                    actual_bytes, expected_bytes
                )
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel ({}, {}) outside of {}x{} buffer",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Owned `width × height × 3` RGB byte buffer, row-major.
///
/// Produced fresh each frame by an engine or field mapper and handed to the
/// display sink by value; the sink takes ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; buffer_size(width, height)],
        }
    }

    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected_bytes = buffer_size(width, height);

        if data.len() != expected_bytes {
            return Err(PixelBufferError::SizeMismatch {
                expected_bytes,
                actual_bytes: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Infallible constructor for callers that build the byte vector from
    /// the grid itself, so the length is correct by construction.
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), buffer_size(width, height));

        Self {
            width,
            height,
            data,
        }
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
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = (y as usize * self.width as usize + x as usize) * 3;
        self.data[index] = colour.r;
        self.data[index + 1] = colour.g;
        self.data[index + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * 3;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }
}

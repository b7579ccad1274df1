use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::orchestrator::FrameStats;
use std::error::Error;

/// Display-side collaborator: receives ownership of each finished frame.
///
/// A sink failure is fatal to the render loop; the orchestrator propagates
/// it and stops.
pub trait FrameSink: Send {
    fn present(&mut self, frame: PixelBuffer, stats: &FrameStats) -> Result<(), Box<dyn Error>>;
}

/// Sink that drops every frame; keeps the loop running in tests and
/// benchmarks.
#[derive(Debug, Default)]
pub struct NullFrameSink {
    frames_presented: u64,
}

impl NullFrameSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl FrameSink for NullFrameSink {
    fn present(&mut self, _frame: PixelBuffer, _stats: &FrameStats) -> Result<(), Box<dyn Error>> {
        self.frames_presented += 1;
        Ok(())
    }
}

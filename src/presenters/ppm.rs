use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::orchestrator::FrameStats;
use crate::core::ports::frame_sink::FrameSink;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

/// Frame sink that writes each frame as a binary PPM file.
///
/// Files land in the configured directory as `<prefix>_<frame>.ppm`. The
/// directory and prefix are explicit constructor configuration; there is no
/// process-wide output state.
pub struct PpmFrameSink {
    directory: PathBuf,
    prefix: String,
}

impl PpmFrameSink {
    pub fn new(directory: impl Into<PathBuf>) -> std::io::Result<Self> {
        Self::with_prefix(directory, "frame")
    }

    pub fn with_prefix(
        directory: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> std::io::Result<Self> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory)?;

        Ok(Self {
            directory,
            prefix: prefix.into(),
        })
    }
}

impl FrameSink for PpmFrameSink {
    fn present(&mut self, frame: PixelBuffer, stats: &FrameStats) -> Result<(), Box<dyn Error>> {
        let path = self
            .directory
            .join(format!("{}_{:05}.ppm", self.prefix, stats.frame));
        let mut file = std::fs::File::create(path)?;

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", frame.width(), frame.height())?;
        writeln!(file, "255")?;
        file.write_all(frame.data())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use std::time::Duration;

    fn stats(frame: u64) -> FrameStats {
        FrameStats {
            frame,
            render_duration: Duration::from_millis(5),
            fps: 30.0,
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fractal_scope_ppm_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_writes_header_and_pixels() {
        let dir = temp_dir("header");
        let mut sink = PpmFrameSink::new(&dir).unwrap();

        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set_pixel(0, 0, Colour { r: 255, g: 0, b: 0 }).unwrap();

        sink.present(buffer, &stats(0)).unwrap();

        let written = std::fs::read(dir.join("frame_00000.ppm")).unwrap();
        let expected_header = b"P6\n2 2\n255\n";

        assert_eq!(&written[..expected_header.len()], expected_header);
        assert_eq!(written.len(), expected_header.len() + 12);
        assert_eq!(written[expected_header.len()], 255);
    }

    #[test]
    fn test_consecutive_frames_get_distinct_files() {
        let dir = temp_dir("sequence");
        let mut sink = PpmFrameSink::with_prefix(&dir, "demo").unwrap();

        sink.present(PixelBuffer::new(2, 2), &stats(0)).unwrap();
        sink.present(PixelBuffer::new(2, 2), &stats(1)).unwrap();

        assert!(dir.join("demo_00000.ppm").exists());
        assert!(dir.join("demo_00001.ppm").exists());
    }
}

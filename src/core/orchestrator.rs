use crate::core::actions::colourise_field::{
    ColouriseError, colourise_iterations, colourise_roots,
};
use crate::core::engines::domain_coloring::DomainColoringEngine;
use crate::core::engines::escape_time::EscapeTimeEngine;
use crate::core::engines::newton::RootFractalEngine;
use crate::core::ports::colour_map::Colormap;
use crate::core::ports::complex_map::{ComplexMap, DifferentiableMap, ParametricMap};
use crate::core::ports::frame_sink::FrameSink;
use crate::core::ports::modulation::ModulationSource;
use num::complex::Complex64;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared flag that tells a running orchestrator to stop between frames.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Which engine renders each frame. Exactly one is active at a time.
pub enum EngineMode {
    EscapeTime,
    RootFractal { map: Box<dyn DifferentiableMap> },
    DomainDirect { map: Box<dyn ComplexMap> },
    DomainPower { map: Box<dyn ParametricMap> },
}

/// Per-frame timing handed to the sink alongside the pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub render_duration: Duration,
    pub fps: f64,
}

#[derive(Debug)]
pub enum FrameError {
    Colourise(ColouriseError),
    Sink(Box<dyn Error>),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colourise(err) => write!(f, "colour mapping error: {}", err),
            Self::Sink(err) => write!(f, "frame sink error: {}", err),
        }
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Colourise(err) => Some(err),
            Self::Sink(err) => Some(err.as_ref()),
        }
    }
}

impl From<ColouriseError> for FrameError {
    fn from(err: ColouriseError) -> Self {
        Self::Colourise(err)
    }
}

/// Exponentially smoothed frames-per-second estimate.
#[derive(Debug, Default)]
struct FpsCounter {
    last_tick: Option<Instant>,
    smoothed: f64,
}

impl FpsCounter {
    fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if let Some(last) = self.last_tick {
            let elapsed = now.duration_since(last).as_secs_f64();

            if elapsed > 0.0 {
                let instantaneous = 1.0 / elapsed;

                self.smoothed = if self.smoothed == 0.0 {
                    instantaneous
                } else {
                    0.9 * self.smoothed + 0.1 * instantaneous
                };
            }
        }

        self.last_tick = Some(now);
        self.smoothed
    }
}

/// Drives the per-frame pipeline: poll the modulation source, run the
/// active engine, hand the finished buffer to the display sink.
///
/// All three engines are constructed once and kept; [`EngineMode`] picks
/// the one that renders. Engine state (zoom, root table, modulation) is
/// only ever mutated here between frames, never during one.
pub struct FrameOrchestrator {
    escape: EscapeTimeEngine,
    newton: RootFractalEngine,
    domain: DomainColoringEngine,
    mode: EngineMode,
    palette: Box<dyn Colormap>,
    sink: Box<dyn FrameSink>,
    modulation: Box<dyn ModulationSource>,
    stop: StopHandle,
    frame: u64,
    fps: FpsCounter,
}

impl FrameOrchestrator {
    #[must_use]
    pub fn new(
        escape: EscapeTimeEngine,
        newton: RootFractalEngine,
        domain: DomainColoringEngine,
        mode: EngineMode,
        palette: Box<dyn Colormap>,
        sink: Box<dyn FrameSink>,
        modulation: Box<dyn ModulationSource>,
    ) -> Self {
        Self {
            escape,
            newton,
            domain,
            mode,
            palette,
            sink,
            modulation,
            stop: StopHandle::new(),
            frame: 0,
            fps: FpsCounter::default(),
        }
    }

    /// Handle the display side can use to end [`Self::run`].
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn set_mode(&mut self, mode: EngineMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn escape_engine_mut(&mut self) -> &mut EscapeTimeEngine {
        &mut self.escape
    }

    #[must_use]
    pub fn newton_engine_mut(&mut self) -> &mut RootFractalEngine {
        &mut self.newton
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frame
    }

    /// Renders and presents a single frame.
    pub fn frame(&mut self) -> Result<FrameStats, FrameError> {
        let started = Instant::now();
        let modulation = self.modulation.poll();

        let buffer = match &self.mode {
            EngineMode::EscapeTime => {
                let field = self.escape.render();

                colourise_iterations(&field, self.escape.max_iterations(), &self.palette)?
            }
            EngineMode::RootFractal { map } => {
                let field = self.newton.render(map.as_ref());

                colourise_roots(&field, self.newton.root_count(), &self.palette)?
            }
            EngineMode::DomainDirect { map } => {
                self.domain.set_modulation(modulation);

                self.domain.render(map.as_ref(), &self.palette)
            }
            EngineMode::DomainPower { map } => {
                self.domain.set_modulation(modulation);

                // Modulation drives both halves of the power-map parameter.
                let parameter = 3.0 * (0.5 * modulation).sin() + 1.0;
                let c = Complex64::new(parameter, parameter);

                self.domain.render_power(map.as_ref(), c, &self.palette)
            }
        };

        let render_duration = started.elapsed();
        let stats = FrameStats {
            frame: self.frame,
            render_duration,
            fps: self.fps.tick(),
        };

        self.sink
            .present(buffer, &stats)
            .map_err(FrameError::Sink)?;
        self.frame += 1;

        Ok(stats)
    }

    /// Renders frames until the stop handle is raised or a frame fails.
    pub fn run(&mut self) -> Result<(), FrameError> {
        while !self.stop.is_stopped() {
            self.frame()?;
        }

        Ok(())
    }
}

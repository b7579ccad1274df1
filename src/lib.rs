mod adapters;
mod core;
mod presenters;

pub use crate::adapters::udp::UdpModulationSource;
pub use crate::core::actions::colourise_field::{ColouriseError, colourise_iterations, colourise_roots};
pub use crate::core::colour_maps::ColormapKind;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex_grid::{ComplexGrid, ComplexGridError};
pub use crate::core::data::field::{IterationField, RootClass, RootField};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::engines::domain_coloring::{ContourMode, DomainColoringEngine};
pub use crate::core::engines::escape_time::{EscapeTimeEngine, EscapeTimeError};
pub use crate::core::engines::newton::{DEFAULT_TOLERANCE, NewtonError, RootFractalEngine};
pub use crate::core::engines::root_table::RootTable;
pub use crate::core::orchestrator::{EngineMode, FrameError, FrameOrchestrator, FrameStats, StopHandle};
pub use crate::core::ports::colour_map::Colormap;
pub use crate::core::ports::complex_map::{
    ComplexMap, ComplexPower, DifferentiableMap, ParametricMap, RationalMap, UnityQuartic,
};
pub use crate::core::ports::frame_sink::{FrameSink, NullFrameSink};
pub use crate::core::ports::modulation::{ModulationSource, ScriptedModulation, StaticModulation};
pub use crate::presenters::ppm::PpmFrameSink;

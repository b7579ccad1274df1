use fractal_scope::{
    ColormapKind, ComplexGrid, DomainColoringEngine, EngineMode, EscapeTimeEngine,
    FrameOrchestrator, PpmFrameSink, RationalMap, Region, RootFractalEngine, StaticModulation,
};
use num::complex::Complex64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let width = 400;
    let height = 300;

    let region = Region::new(-2.0, 2.0, -2.0, 2.0)?;
    let grid = ComplexGrid::new(width, height, region)?;

    // Classic Mandelbrot view: offset centres the set, scale fits 2.2
    // units of imaginary axis into the frame.
    let escape = EscapeTimeEngine::new(
        width,
        height,
        30,
        Complex64::new(1.3 * f64::from(width) / 2.0, f64::from(height) / 2.0),
        2.2 / f64::from(height),
    )?;
    let newton = RootFractalEngine::with_default_tolerance(grid.clone(), 100)?;
    let domain = DomainColoringEngine::new(&grid);

    let sink = PpmFrameSink::new("output")?;

    let mut orchestrator = FrameOrchestrator::new(
        escape,
        newton,
        domain,
        EngineMode::DomainDirect {
            map: Box::new(RationalMap),
        },
        ColormapKind::Hsv.create(),
        Box::new(sink),
        Box::new(StaticModulation::new(2.0)),
    );

    println!("Rendering 3 frames to output/ ...");

    for _ in 0..3 {
        let stats = orchestrator.frame()?;
        println!(
            "frame {:>3}  {:>7.2?}  {:.2} fps",
            stats.frame, stats.render_duration, stats.fps
        );
    }

    Ok(())
}

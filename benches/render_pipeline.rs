use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fractal_scope::{
    ColormapKind, ComplexGrid, DomainColoringEngine, EscapeTimeEngine, RationalMap, Region,
    RootFractalEngine, UnityQuartic, colourise_iterations,
};
use num::complex::Complex64;

const WIDTH: u32 = 200;
const HEIGHT: u32 = 150;

fn grid() -> ComplexGrid {
    ComplexGrid::new(WIDTH, HEIGHT, Region::new(-2.0, 2.0, -2.0, 2.0).unwrap()).unwrap()
}

fn bench_escape_time(c: &mut Criterion) {
    let engine = EscapeTimeEngine::new(
        WIDTH,
        HEIGHT,
        256,
        Complex64::new(1.3 * f64::from(WIDTH) / 2.0, f64::from(HEIGHT) / 2.0),
        2.2 / f64::from(HEIGHT),
    )
    .unwrap();
    let palette = ColormapKind::Grayscale.create();

    c.bench_function("escape_time_render", |b| {
        b.iter(|| black_box(engine.render()))
    });

    c.bench_function("escape_time_render_and_colourise", |b| {
        b.iter(|| {
            let field = engine.render();
            black_box(colourise_iterations(&field, engine.max_iterations(), &palette).unwrap())
        })
    });
}

fn bench_root_fractal(c: &mut Criterion) {
    let engine = RootFractalEngine::with_default_tolerance(grid(), 100).unwrap();

    c.bench_function("root_fractal_render", |b| {
        b.iter(|| black_box(engine.render(&UnityQuartic)))
    });
}

fn bench_domain_coloring(c: &mut Criterion) {
    let mut engine = DomainColoringEngine::new(&grid());
    engine.set_modulation(2.0);
    let palette = ColormapKind::Hsv.create();

    c.bench_function("domain_coloring_render", |b| {
        b.iter(|| black_box(engine.render(&RationalMap, &palette)))
    });
}

criterion_group!(
    benches,
    bench_escape_time,
    bench_root_fractal,
    bench_domain_coloring
);
criterion_main!(benches);

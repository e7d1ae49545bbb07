use criterion::{Criterion, criterion_group, criterion_main};
use scatter_rs::ScatterChart;
use scatter_rs::api::ChartConfig;
use scatter_rs::core::{Attribute, Dataset, Record, build_scale};
use scatter_rs::render::NullRenderer;
use std::hint::black_box;

fn synthetic_dataset(len: usize) -> Dataset {
    let records = (0..len)
        .map(|i| {
            let t = i as f64;
            Record {
                state: format!("Region {i}"),
                abbr: format!("R{}", i % 100),
                poverty: 8.0 + (t * 0.37) % 15.0,
                age: 30.0 + (t * 0.11) % 12.0,
                income: 38_000.0 + (t * 97.0) % 40_000.0,
                healthcare: 4.0 + (t * 0.23) % 20.0,
                smokes: 9.0 + (t * 0.19) % 18.0,
                obesity: 21.0 + (t * 0.29) % 16.0,
            }
        })
        .collect();
    Dataset::new(records).expect("non-empty dataset")
}

fn bench_build_scale_10k(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);

    c.bench_function("build_scale_10k", |b| {
        b.iter(|| {
            let _ = build_scale(
                black_box(&dataset),
                black_box(Attribute::Income),
                black_box((0.0, 610.0)),
                black_box(false),
            );
        })
    });
}

fn bench_axis_switch_10k(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let mut chart = ScatterChart::new(NullRenderer::default(), dataset, ChartConfig::default())
        .expect("chart init");
    let mut now = 0.0;
    let mut toggle = false;

    c.bench_function("axis_switch_10k", |b| {
        b.iter(|| {
            toggle = !toggle;
            now += 16.0;
            let value = if toggle { "age" } else { "poverty" };
            chart.click_label(black_box(value), now).expect("known control");
        })
    });
}

fn bench_render_frame_2k(c: &mut Criterion) {
    let dataset = synthetic_dataset(2_000);
    let mut chart = ScatterChart::new(NullRenderer::default(), dataset, ChartConfig::default())
        .expect("chart init");
    chart.click_label("smokes", 0.0).expect("known control");

    c.bench_function("render_frame_2k_mid_transition", |b| {
        b.iter(|| {
            chart.render(black_box(500.0)).expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_build_scale_10k,
    bench_axis_switch_10k,
    bench_render_frame_2k
);
criterion_main!(benches);

use chart_config::api::{build_legend, get_customized_configuration};
use chart_config::core::{
    Axis, ChartData, ChartOptions, ChartType, DataPoint, Series, StackingMode,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn stacked_column_options(series_count: usize, category_count: usize) -> ChartOptions {
    let categories: Vec<String> = (0..category_count).map(|i| format!("Category {i}")).collect();
    let series = (0..series_count)
        .map(|s| {
            let values: Vec<Option<f64>> = (0..category_count)
                .map(|c| Some(((s * 31 + c * 17) % 200) as f64 - 50.0))
                .collect();
            Series::new(format!("Series {s}"))
                .with_values(&values)
                .with_drillable(s % 2 == 0)
        })
        .collect();

    ChartOptions::new(ChartType::Column)
        .with_stacking(StackingMode::Normal)
        .with_data(ChartData::new(series, vec![categories]))
        .with_y_axes(vec![Some(Axis::new("Amount").with_format("#,##0.00"))])
        .with_x_axes(vec![Some(Axis::new("Category"))])
        .with_color_palette(["rgb(20,178,226)", "rgb(0,193,141)", "rgb(229,77,66)"])
        .with_tooltip(|point| point.series_name.clone().unwrap_or_default())
}

fn pie_options(slice_count: usize) -> ChartOptions {
    let points = (0..slice_count)
        .map(|i| {
            DataPoint::named(format!("Slice {i}"))
                .with_y(i as f64 + 1.0)
                .with_drilldown(i % 3 == 0)
        })
        .collect();
    ChartOptions::new(ChartType::Pie).with_data(ChartData::new(
        vec![Series::new("Slices").with_points(points)],
        Vec::new(),
    ))
}

fn bench_stacked_column_pipeline(c: &mut Criterion) {
    let options = stacked_column_options(8, 500);

    c.bench_function("stacked_column_pipeline_8x500", |b| {
        b.iter(|| {
            let _ = get_customized_configuration(black_box(&options)).expect("configuration");
        })
    });
}

fn bench_pie_pipeline_with_legend(c: &mut Criterion) {
    let options = pie_options(200);

    c.bench_function("pie_pipeline_with_legend_200", |b| {
        b.iter(|| {
            let config = get_customized_configuration(black_box(&options)).expect("configuration");
            let legend = build_legend(black_box(&options));
            black_box((config, legend));
        })
    });
}

fn bench_configuration_json(c: &mut Criterion) {
    let config = get_customized_configuration(&stacked_column_options(4, 200))
        .expect("configuration");

    c.bench_function("configuration_to_json_4x200", |b| {
        b.iter(|| {
            let _ = black_box(&config).to_json_pretty().expect("json");
        })
    });
}

criterion_group!(
    benches,
    bench_stacked_column_pipeline,
    bench_pie_pipeline_with_legend,
    bench_configuration_json
);
criterion_main!(benches);

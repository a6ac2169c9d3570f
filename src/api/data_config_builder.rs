use tracing::trace;

use crate::core::{ChartOptions, ChartType, Series, escape_angle_brackets, escape_optional};

use super::render_config::{AxisConfig, AxisLabels, RenderConfiguration, SeriesConfig};

/// Engine series plus category axes, shaped per chart family.
#[must_use]
pub fn data_configuration(options: &ChartOptions) -> RenderConfiguration {
    match options.chart_type {
        ChartType::Scatter | ChartType::Bubble => RenderConfiguration {
            series: colored_series(options.series(), &options.color_palette),
            ..RenderConfiguration::default()
        },
        ChartType::Heatmap => heat_map_configuration(options),
        ChartType::Line
        | ChartType::Area
        | ChartType::Dual
        | ChartType::Bar
        | ChartType::Column
        | ChartType::Funnel
        | ChartType::Combo
        | ChartType::Pie
        | ChartType::Donut
        | ChartType::Treemap => {
            let categories = escape_categories(options.categories().first().map(Vec::as_slice));
            RenderConfiguration {
                series: colored_series(options.series(), &options.color_palette),
                x_axis: vec![category_axis(categories)],
                ..RenderConfiguration::default()
            }
        }
    }
}

/// Clones the series, assigns palette colors round-robin and escapes names.
#[must_use]
pub fn colored_series(series: &[Series], palette: &[String]) -> Vec<SeriesConfig> {
    series
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut config = SeriesConfig::from(item);
            if let Some(color) = palette_color(palette, index) {
                config.color = Some(color.to_owned());
            }
            config.name = escape_optional(item.name.as_deref());
            for point in config.data.iter_mut().flatten() {
                point.name = escape_optional(point.name.as_deref());
            }
            config
        })
        .collect()
}

/// Palette color for series `index`, wrapping around short palettes.
#[must_use]
pub fn palette_color(palette: &[String], index: usize) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    palette.get(index % palette.len()).map(String::as_str)
}

// Heat-map series carry per-cell values colored by the engine's color axis,
// so they are passed through untouched.
fn heat_map_configuration(options: &ChartOptions) -> RenderConfiguration {
    let categories = options.categories();
    let x_categories = escape_categories(categories.first().map(Vec::as_slice));
    let y_categories = escape_categories(categories.get(1).map(Vec::as_slice));
    trace!(
        x_categories = x_categories.len(),
        y_categories = y_categories.len(),
        "heat map category axes"
    );

    RenderConfiguration {
        series: options.series().iter().map(SeriesConfig::from).collect(),
        x_axis: vec![category_axis(x_categories)],
        y_axis: vec![category_axis(y_categories)],
        ..RenderConfiguration::default()
    }
}

fn escape_categories(categories: Option<&[String]>) -> Vec<String> {
    categories
        .map(|categories| {
            categories
                .iter()
                .map(|category| escape_angle_brackets(category))
                .collect()
        })
        .unwrap_or_default()
}

fn category_axis(categories: Vec<String>) -> AxisConfig {
    let enabled = categories.iter().any(|category| !category.is_empty());
    AxisConfig {
        labels: Some(AxisLabels {
            enabled: Some(enabled),
            ..AxisLabels::default()
        }),
        categories: Some(categories),
        ..AxisConfig::default()
    }
}

use serde::Serialize;

use crate::core::{ChartOptions, ChartType, LegendOptions, LegendPosition};

/// Legend shown next to the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub enabled: bool,
    pub position: LegendPosition,
    pub items: Vec<LegendItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_index: Option<usize>,
}

/// Whether the data carries enough distinct entries to justify a legend.
#[must_use]
pub fn should_legend_be_enabled(options: &ChartOptions) -> bool {
    let series = options.series();
    let has_more_than_one_series = series.len() > 1;
    let first = series.first();

    let is_single_series_area = options.chart_type.is_area()
        && !has_more_than_one_series
        && !options.has_stack_by_attribute;
    let is_stacked = !is_single_series_area && options.stacking.is_some();

    let is_slice_with_several_categories =
        options.chart_type.is_slice() && first.is_some_and(|series| series.data.len() > 1);

    let is_scatter_with_attribute =
        options.chart_type.is_scatter() && first.is_some_and(|series| series.name.is_some());

    has_more_than_one_series
        || is_slice_with_several_categories
        || is_stacked
        || is_scatter_with_attribute
}

/// Legend entries: the first series' points for charts whose categories are
/// points, the series themselves otherwise.
#[must_use]
pub fn legend_items(options: &ChartOptions) -> Vec<LegendItem> {
    let series = options.series();
    if lists_points(options.chart_type) {
        return series
            .first()
            .map(|series| {
                series
                    .data
                    .iter()
                    .flatten()
                    .map(|point| LegendItem {
                        name: point.name.clone(),
                        color: point.color.clone(),
                        legend_index: point.legend_index,
                    })
                    .collect()
            })
            .unwrap_or_default();
    }

    series
        .iter()
        .map(|series| LegendItem {
            name: series.name.clone(),
            color: series.color.clone(),
            legend_index: series.legend_index,
        })
        .collect()
}

/// Resolves the legend from the user's legend options and the chart data.
#[must_use]
pub fn build_legend(options: &ChartOptions) -> LegendConfig {
    let LegendOptions { enabled, position } = options.legend.unwrap_or_default();
    let position = if forces_right_legend(options.chart_type) {
        LegendPosition::Right
    } else {
        position.unwrap_or_default()
    };

    LegendConfig {
        enabled: enabled.unwrap_or(true) && should_legend_be_enabled(options),
        position,
        items: legend_items(options),
    }
}

fn lists_points(chart_type: ChartType) -> bool {
    matches!(
        chart_type,
        ChartType::Pie
            | ChartType::Donut
            | ChartType::Treemap
            | ChartType::Funnel
            | ChartType::Scatter
    )
}

fn forces_right_legend(chart_type: ChartType) -> bool {
    matches!(
        chart_type,
        ChartType::Scatter | ChartType::Treemap | ChartType::Bubble
    )
}

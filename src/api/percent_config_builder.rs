use crate::core::{Axis, ChartOptions};

use super::label_formatter::AxisLabelFormatter;
use super::render_config::{AxisConfig, AxisLabels, RenderConfiguration};

/// Switches tick labels to percentages on axes whose format contains `%`.
#[must_use]
pub fn percent_configuration(options: &ChartOptions) -> RenderConfiguration {
    RenderConfiguration {
        x_axis: options.x_axes.iter().map(percent_labels).collect(),
        y_axis: options.y_axes.iter().map(percent_labels).collect(),
        ..RenderConfiguration::default()
    }
}

fn percent_labels(axis: &Option<Axis>) -> AxisConfig {
    match axis {
        Some(axis) if axis.is_percent() => AxisConfig {
            labels: Some(AxisLabels {
                formatter: Some(AxisLabelFormatter::Percent),
                ..AxisLabels::default()
            }),
            ..AxisConfig::default()
        },
        _ => AxisConfig::default(),
    }
}

use crate::core::{Axis, ChartOptions, escape_angle_brackets};

use super::render_config::{AxisConfig, AxisTitle, RenderConfiguration};

/// Axis title text, escaped once for the engine.
#[must_use]
pub fn title_configuration(options: &ChartOptions) -> RenderConfiguration {
    RenderConfiguration {
        y_axis: options.y_axes.iter().map(title_config).collect(),
        x_axis: options.x_axes.iter().map(title_config).collect(),
        ..RenderConfiguration::default()
    }
}

fn title_config(axis: &Option<Axis>) -> AxisConfig {
    let Some(axis) = axis else {
        return AxisConfig::default();
    };
    AxisConfig {
        title: Some(AxisTitle {
            text: Some(escape_angle_brackets(&axis.label)),
            ..AxisTitle::default()
        }),
        ..AxisConfig::default()
    }
}

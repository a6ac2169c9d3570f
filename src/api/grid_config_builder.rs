use crate::core::ChartOptions;

use super::render_config::{AxisConfig, RenderConfiguration};

/// Hides y-axis grid lines when the grid is switched off; the engine default
/// grid stays otherwise.
#[must_use]
pub fn grid_configuration(options: &ChartOptions) -> RenderConfiguration {
    if options.grid.enabled {
        return RenderConfiguration::default();
    }

    RenderConfiguration {
        y_axis: options
            .y_axes
            .iter()
            .map(|_| AxisConfig {
                grid_line_width: Some(0.0),
                ..AxisConfig::default()
            })
            .collect(),
        ..RenderConfiguration::default()
    }
}

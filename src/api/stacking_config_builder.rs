use crate::core::ChartOptions;

use super::label_formatter::StackLabelFormatter;
use super::render_config::{
    AxisConfig, PlotOptions, RenderConfiguration, SeriesPlotOptions, StackLabels,
};

/// Stacking mode plus a stack-total label on every y axis; empty when unstacked.
#[must_use]
pub fn stacking_configuration(options: &ChartOptions) -> RenderConfiguration {
    let Some(stacking) = options.stacking else {
        return RenderConfiguration::default();
    };

    let y_axis = options
        .y_axes
        .iter()
        .map(|_| AxisConfig {
            stack_labels: Some(StackLabels {
                formatter: Some(StackLabelFormatter),
            }),
            ..AxisConfig::default()
        })
        .collect();

    RenderConfiguration {
        plot_options: Some(PlotOptions {
            series: Some(SeriesPlotOptions {
                stacking: Some(stacking),
            }),
            ..PlotOptions::default()
        }),
        y_axis,
        ..RenderConfiguration::default()
    }
}

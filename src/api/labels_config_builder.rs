use crate::core::ChartOptions;

use super::label_formatter::DataLabelFormatter;
use super::render_config::{
    AxisConfig, DataLabels, DrilldownConfig, PlotOptions, RenderConfiguration, TextStyle,
    TypePlotOptions,
};

const STACKED_LABEL_COLOR: &str = "#ffffff";
const STACKED_LABEL_SHADOW: &str = "0 0 1px #000000";
const LABEL_COLOR: &str = "#000000";
const LABEL_SHADOW: &str = "none";

/// Data-label formatters for bar, column and heat-map points.
///
/// Stacked labels sit on top of colored segments, so they switch to white
/// text with a thin shadow.
#[must_use]
pub fn labels_configuration(options: &ChartOptions) -> RenderConfiguration {
    let stacked = options.stacking.is_some();
    let style = if stacked {
        TextStyle {
            color: Some(STACKED_LABEL_COLOR.to_owned()),
            font: None,
            text_shadow: Some(STACKED_LABEL_SHADOW.to_owned()),
        }
    } else {
        TextStyle {
            color: Some(LABEL_COLOR.to_owned()),
            font: None,
            text_shadow: Some(LABEL_SHADOW.to_owned()),
        }
    };

    let drilldown = stacked.then(|| DrilldownConfig {
        active_data_label_style: Some(TextStyle::colored(STACKED_LABEL_COLOR)),
    });

    let value_labels = || TypePlotOptions {
        data_labels: Some(DataLabels {
            formatter: Some(DataLabelFormatter::Value),
            style: Some(style.clone()),
            allow_overlap: Some(false),
        }),
    };

    let y_axis = options
        .y_axes
        .iter()
        .map(|axis| AxisConfig {
            default_format: axis.as_ref().and_then(|axis| axis.format.clone()),
            ..AxisConfig::default()
        })
        .collect();

    RenderConfiguration {
        drilldown,
        plot_options: Some(PlotOptions {
            bar: Some(value_labels()),
            column: Some(value_labels()),
            heatmap: Some(TypePlotOptions {
                data_labels: Some(DataLabels {
                    formatter: Some(DataLabelFormatter::HeatMap),
                    ..DataLabels::default()
                }),
            }),
            ..PlotOptions::default()
        }),
        y_axis,
        ..RenderConfiguration::default()
    }
}

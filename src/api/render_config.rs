//! Engine-facing render configuration.
//!
//! Every configurator returns a [`RenderConfiguration`] fragment; the
//! pipeline folds fragments together with [`Merge`](super::merge::Merge).
//! Fields left as `None` (or empty vectors) are "not set by this fragment".
//! Formatter and positioner values are runtime callbacks for the engine and
//! are not part of the serialized JSON.

use serde::Serialize;

use crate::core::{DataPoint, Series, ShapeArgs, StackingMode};

use super::label_formatter::{AxisLabelFormatter, DataLabelFormatter, StackLabelFormatter};
use super::merge::{merge_by_replace, merge_fields};
use super::tooltip_formatter::TooltipFormatter;
use super::tooltip_positioner::TooltipPositioner;

merge_by_replace!(
    AxisLabelFormatter,
    StackLabelFormatter,
    DataLabelFormatter,
    TooltipPositioner,
    TooltipFormatter,
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfiguration {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x_axis: Vec<AxisConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y_axis: Vec<AxisConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_options: Option<PlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drilldown: Option<DrilldownConfig>,
}

merge_fields!(RenderConfiguration {
    x_axis,
    y_axis,
    plot_options,
    tooltip,
    series,
    drilldown,
});

impl RenderConfiguration {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_on_tick: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_on_tick: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opposite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_tick_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<AxisLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_labels: Option<StackLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,
}

merge_fields!(AxisConfig {
    visible,
    min,
    max,
    start_on_tick,
    end_on_tick,
    opposite,
    grid_line_color,
    grid_line_width,
    line_color,
    minor_tick_length,
    tick_length,
    max_padding,
    labels,
    title,
    stack_labels,
    categories,
    default_format,
});

impl AxisConfig {
    /// Placeholder for an absent axis slot.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: Some(false),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_rotation: Option<Vec<i32>>,
    #[serde(skip)]
    pub formatter: Option<AxisLabelFormatter>,
}

merge_fields!(AxisLabels {
    enabled,
    style,
    auto_rotation,
    formatter,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

merge_fields!(AxisTitle {
    text,
    margin,
    style,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackLabels {
    #[serde(skip)]
    pub formatter: Option<StackLabelFormatter>,
}

merge_fields!(StackLabels { formatter });

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<String>,
}

merge_fields!(TextStyle {
    color,
    font,
    text_shadow,
});

impl TextStyle {
    #[must_use]
    pub fn colored(color: &str) -> Self {
        Self {
            color: Some(color.to_owned()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesPlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<TypePlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<TypePlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<TypePlotOptions>,
}

merge_fields!(PlotOptions {
    series,
    bar,
    column,
    heatmap,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking: Option<StackingMode>,
}

merge_fields!(SeriesPlotOptions { stacking });

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypePlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
}

merge_fields!(TypePlotOptions { data_labels });

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLabels {
    #[serde(skip)]
    pub formatter: Option<DataLabelFormatter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_overlap: Option<bool>,
}

merge_fields!(DataLabels {
    formatter,
    style,
    allow_overlap,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrilldownConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_data_label_style: Option<TextStyle>,
}

merge_fields!(DrilldownConfig {
    active_data_label_style
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<bool>,
    #[serde(rename = "useHTML", skip_serializing_if = "Option::is_none")]
    pub use_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_pointer: Option<bool>,
    #[serde(skip)]
    pub positioner: Option<TooltipPositioner>,
    #[serde(skip)]
    pub formatter: Option<TooltipFormatter>,
}

merge_fields!(TooltipConfig {
    border_width,
    border_radius,
    shadow,
    use_html,
    follow_pointer,
    positioner,
    formatter,
});

/// Engine series: the input series plus presentation and hover state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_drillable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    pub series_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_index: Option<usize>,
    pub data: Vec<Option<PointConfig>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y_data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<StatesConfig>,
}

merge_fields!(SeriesConfig {
    name,
    color,
    is_drillable,
    series_type,
    legend_index,
    data,
    y_data,
    marker,
    cursor,
    states,
});

impl From<&Series> for SeriesConfig {
    fn from(series: &Series) -> Self {
        Self {
            name: series.name.clone(),
            color: series.color.clone(),
            is_drillable: Some(series.is_drillable),
            series_type: series.series_type.clone(),
            legend_index: series.legend_index,
            data: series
                .data
                .iter()
                .map(|point| point.as_ref().map(PointConfig::from))
                .collect(),
            y_data: series.y_data.clone(),
            marker: None,
            cursor: None,
            states: None,
        }
    }
}

impl SeriesConfig {
    #[must_use]
    pub fn drillable(&self) -> bool {
        self.is_drillable.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drilldown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_index: Option<usize>,
    #[serde(skip)]
    pub shape_args: Option<ShapeArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<StatesConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halo: Option<HaloConfig>,
}

merge_by_replace!(ShapeArgs);

merge_fields!(PointConfig {
    name,
    x,
    y,
    value,
    format,
    color,
    negative,
    drilldown,
    legend_index,
    shape_args,
    states,
    halo,
});

impl From<&DataPoint> for PointConfig {
    fn from(point: &DataPoint) -> Self {
        Self {
            name: point.name.clone(),
            x: point.x,
            y: point.y,
            value: point.value,
            format: point.format.clone(),
            color: point.color.clone(),
            negative: Some(point.negative),
            drilldown: Some(point.drilldown),
            legend_index: point.legend_index,
            shape_args: point.shape_args,
            states: None,
            halo: None,
        }
    }
}

impl PointConfig {
    #[must_use]
    pub fn drillable(&self) -> bool {
        self.drilldown.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<MarkerStates>,
}

merge_fields!(MarkerConfig { states });

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<MarkerHover>,
}

merge_fields!(MarkerStates { hover });

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerHover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

merge_fields!(MarkerHover { fill_color });

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverState>,
}

merge_fields!(StatesConfig { hover });

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halo: Option<HaloConfig>,
}

merge_fields!(HoverState {
    enabled,
    brightness,
    halo,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HaloConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

merge_fields!(HaloConfig { size });

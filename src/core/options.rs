use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use super::{ChartType, StackingMode};

/// Immutable chart descriptor consumed by the configuration pipeline.
///
/// Every configurator borrows the same instance; nothing in the pipeline
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(default)]
    pub stacking: Option<StackingMode>,
    #[serde(default)]
    pub data: Option<ChartData>,
    #[serde(default)]
    pub y_axes: Vec<Option<Axis>>,
    #[serde(default)]
    pub x_axes: Vec<Option<Axis>>,
    #[serde(default)]
    pub x_axis_props: Option<AxisProps>,
    #[serde(default)]
    pub y_axis_props: Option<AxisProps>,
    #[serde(default)]
    pub color_palette: Vec<String>,
    #[serde(skip)]
    pub actions: ChartActions,
    #[serde(default)]
    pub grid: GridOptions,
    #[serde(default)]
    pub has_stack_by_attribute: bool,
    #[serde(default)]
    pub legend: Option<LegendOptions>,
    #[serde(default)]
    pub theme: AxisTheme,
}

impl ChartOptions {
    /// Creates options for `chart_type` with no data, axes or actions.
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            stacking: None,
            data: None,
            y_axes: Vec::new(),
            x_axes: Vec::new(),
            x_axis_props: None,
            y_axis_props: None,
            color_palette: Vec::new(),
            actions: ChartActions::default(),
            grid: GridOptions::default(),
            has_stack_by_attribute: false,
            legend: None,
            theme: AxisTheme::default(),
        }
    }

    #[must_use]
    pub fn with_stacking(mut self, stacking: StackingMode) -> Self {
        self.stacking = Some(stacking);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: ChartData) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_y_axes(mut self, axes: Vec<Option<Axis>>) -> Self {
        self.y_axes = axes;
        self
    }

    #[must_use]
    pub fn with_x_axes(mut self, axes: Vec<Option<Axis>>) -> Self {
        self.x_axes = axes;
        self
    }

    #[must_use]
    pub fn with_x_axis_props(mut self, props: AxisProps) -> Self {
        self.x_axis_props = Some(props);
        self
    }

    #[must_use]
    pub fn with_y_axis_props(mut self, props: AxisProps) -> Self {
        self.y_axis_props = Some(props);
        self
    }

    #[must_use]
    pub fn with_color_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Installs the tooltip content callback; without it no tooltip is configured.
    #[must_use]
    pub fn with_tooltip<F>(mut self, callback: F) -> Self
    where
        F: Fn(&HoveredPoint) -> String + Send + Sync + 'static,
    {
        self.actions.tooltip = Some(TooltipCallback::new(callback));
        self
    }

    #[must_use]
    pub fn with_grid_enabled(mut self, enabled: bool) -> Self {
        self.grid.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_stack_by_attribute(mut self, has_stack_by_attribute: bool) -> Self {
        self.has_stack_by_attribute = has_stack_by_attribute;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: AxisTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Series of the data block, empty when data is absent.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        self.data.as_ref().map_or(&[], |data| data.series.as_slice())
    }

    /// Category lists of the data block, empty when data is absent.
    #[must_use]
    pub fn categories(&self) -> &[Vec<String>] {
        self.data.as_ref().map_or(&[], |data| data.categories.as_slice())
    }

    /// Axis property bag that drives the visual y axis (swapped for bar charts).
    #[must_use]
    pub fn value_axis_props(&self) -> Option<&AxisProps> {
        if self.chart_type.is_bar() {
            self.x_axis_props.as_ref()
        } else {
            self.y_axis_props.as_ref()
        }
    }

    /// Axis property bag that drives the visual x axis (swapped for bar charts).
    #[must_use]
    pub fn category_axis_props(&self) -> Option<&AxisProps> {
        if self.chart_type.is_bar() {
            self.y_axis_props.as_ref()
        } else {
            self.x_axis_props.as_ref()
        }
    }
}

/// Series and categories of an execution result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub series: Vec<Series>,
    #[serde(default, deserialize_with = "deserialize_categories")]
    pub categories: Vec<Vec<String>>,
}

impl ChartData {
    #[must_use]
    pub fn new(series: Vec<Series>, categories: Vec<Vec<String>>) -> Self {
        Self { series, categories }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoriesInput {
    Nested(Vec<Vec<String>>),
    Flat(Vec<String>),
}

// A flat category list describes a single view-by axis.
fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match CategoriesInput::deserialize(deserializer)? {
        CategoriesInput::Nested(nested) => nested,
        CategoriesInput::Flat(flat) if flat.is_empty() => Vec::new(),
        CategoriesInput::Flat(flat) => vec![flat],
    })
}

/// Axis descriptor; an absent axis is modelled as `None` in the axis list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub opposite: Option<bool>,
}

impl Axis {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            format: None,
            opposite: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_opposite(mut self, opposite: bool) -> Self {
        self.opposite = Some(opposite);
        self
    }

    #[must_use]
    pub fn is_percent(&self) -> bool {
        self.format.as_deref().is_some_and(|format| format.contains('%'))
    }
}

/// User-facing axis settings as entered in the visualization properties.
///
/// Bounds are kept as the raw strings the user typed; the axis configurator
/// decides what counts as a usable number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisProps {
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub labels_enabled: Option<bool>,
}

impl AxisProps {
    #[must_use]
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn with_labels_enabled(mut self, enabled: bool) -> Self {
        self.labels_enabled = Some(enabled);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(default = "default_grid_enabled")]
    pub enabled: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            enabled: default_grid_enabled(),
        }
    }
}

fn default_grid_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub position: Option<LegendPosition>,
}

/// Colors and fonts applied to axis labels and titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisTheme {
    pub label_color: String,
    pub label_font: String,
    pub title_color: String,
    pub title_font: String,
    pub grid_line_color: String,
    pub axis_line_color: String,
}

impl Default for AxisTheme {
    fn default() -> Self {
        Self {
            label_color: "#94a1ad".to_owned(),
            label_font: "12px Avenir, \"Helvetica Neue\", Arial, sans-serif".to_owned(),
            title_color: "#6d7680".to_owned(),
            title_font: "14px Avenir, \"Helvetica Neue\", Arial, sans-serif".to_owned(),
            grid_line_color: "#ebebeb".to_owned(),
            axis_line_color: "#d5d5d5".to_owned(),
        }
    }
}

/// One engine series as produced by the execution-result mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_drillable: bool,
    #[serde(default)]
    pub data: Vec<Option<DataPoint>>,
    #[serde(default)]
    pub y_data: Vec<Option<f64>>,
    #[serde(default, rename = "type")]
    pub series_type: Option<String>,
    #[serde(default)]
    pub legend_index: Option<usize>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.data = points.into_iter().map(Some).collect();
        self
    }

    /// Sets the stacked values and mirrors them as plain `y` points.
    #[must_use]
    pub fn with_values(mut self, values: &[Option<f64>]) -> Self {
        self.y_data = values.to_vec();
        self.data = values
            .iter()
            .map(|value| {
                Some(DataPoint {
                    y: *value,
                    ..DataPoint::default()
                })
            })
            .collect();
        self
    }

    #[must_use]
    pub fn with_drillable(mut self, is_drillable: bool) -> Self {
        self.is_drillable = is_drillable;
        self
    }

    #[must_use]
    pub fn with_type(mut self, series_type: impl Into<String>) -> Self {
        self.series_type = Some(series_type.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// One data point of a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub negative: bool,
    #[serde(default)]
    pub drilldown: bool,
    #[serde(default)]
    pub legend_index: Option<usize>,
    #[serde(default)]
    pub shape_args: Option<ShapeArgs>,
    #[serde(default)]
    pub tooltip_pos: Option<[f64; 3]>,
}

impl DataPoint {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_drilldown(mut self, drilldown: bool) -> Self {
        self.drilldown = drilldown;
        self
    }
}

/// Rendered shape box the engine attaches to rectangle-like points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeArgs {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// Point under the pointer, as handed to the tooltip formatter and callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoveredPoint {
    pub plot_x: f64,
    pub plot_y: f64,
    pub color: Option<String>,
    pub negative: bool,
    /// `[x, y, height]` anchor computed by the engine for shape-based points.
    pub tooltip_pos: Option<[f64; 3]>,
    pub shape_args: Option<ShapeArgs>,
    pub series_name: Option<String>,
    pub point: DataPoint,
}

/// Caller-supplied tooltip content renderer.
///
/// The returned string is embedded as opaque markup.
#[derive(Clone)]
pub struct TooltipCallback(Arc<dyn Fn(&HoveredPoint) -> String + Send + Sync>);

impl TooltipCallback {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&HoveredPoint) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    #[must_use]
    pub fn call(&self, point: &HoveredPoint) -> String {
        (self.0)(point)
    }
}

impl fmt::Debug for TooltipCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TooltipCallback(..)")
    }
}

impl PartialEq for TooltipCallback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartActions {
    pub tooltip: Option<TooltipCallback>,
}

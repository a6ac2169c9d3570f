use crate::core::{Series, escape_angle_brackets, format_number, format_percent, strip_colors};

/// Formats a label value with a number mask.
///
/// A missing value yields no label at all, which is distinct from a label
/// reading `0`.
#[must_use]
pub fn format_label(value: Option<f64>, format: Option<&str>) -> Option<String> {
    let value = value?;
    let mask = strip_colors(format.unwrap_or_default());
    Some(escape_angle_brackets(&format_number(value, &mask)))
}

/// Axis tick label formatter installed by the percent configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLabelFormatter {
    /// Renders ratios as percentages (`0.25` -> `25%`).
    Percent,
}

impl AxisLabelFormatter {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Percent => format_percent(value),
        }
    }
}

/// Stack being labelled, as seen by the stack-total formatter.
#[derive(Debug, Clone, Copy)]
pub struct StackLabelContext<'a> {
    pub total: f64,
    /// Whether this is the negative stack of the column.
    pub is_negative: bool,
    /// Category index of the column.
    pub x: usize,
    /// Series plotted against the axis.
    pub axis_series: &'a [Series],
    /// `defaultFormat` of the axis.
    pub default_format: Option<&'a str>,
}

/// Stack-total label formatter installed by the stacking configurator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackLabelFormatter;

impl StackLabelFormatter {
    /// Negative stacks are always labelled. A non-negative stack is labelled
    /// when every value in its column is non-negative or its total is
    /// non-zero, so a column whose values cancel out does not print `0`.
    #[must_use]
    pub fn format(self, context: &StackLabelContext<'_>) -> Option<String> {
        let show = context.is_negative
            || has_only_positive_values(context.axis_series, context.x)
            || context.total != 0.0;
        if !show {
            return None;
        }
        format_label(Some(context.total), context.default_format)
    }
}

/// Nulls count as "not positive".
#[must_use]
pub fn has_only_positive_values(series: &[Series], x: usize) -> bool {
    series.iter().all(|item| {
        item.y_data
            .get(x)
            .copied()
            .flatten()
            .is_some_and(|value| value >= 0.0)
    })
}

/// Point being labelled, as seen by the data-label formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataLabelContext<'a> {
    pub y: Option<f64>,
    /// Cell value of heat-map points.
    pub value: Option<f64>,
    /// Format carried by the point itself.
    pub point_format: Option<&'a str>,
    /// Format carried by the data-label options the engine attaches to the
    /// heat-map cell being labelled.
    pub options_format: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLabelFormatter {
    /// Bar and column labels: the point's `y` in the point's own format.
    Value,
    /// Heat-map cells: the cell `value` in the data-label options format.
    HeatMap,
}

impl DataLabelFormatter {
    #[must_use]
    pub fn format(self, context: &DataLabelContext<'_>) -> Option<String> {
        match self {
            Self::Value => format_label(context.y, context.point_format),
            Self::HeatMap => format_label(context.value, context.options_format),
        }
    }
}

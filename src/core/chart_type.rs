use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed set of chart variants the configuration pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChartType {
    Line,
    Area,
    Scatter,
    Bubble,
    Dual,
    Bar,
    Column,
    Funnel,
    Heatmap,
    Combo,
    Pie,
    Donut,
    Treemap,
}

/// Hover-style family a chart type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverFamily {
    /// Marker-based series (line, scatter, area, bubble, dual axis).
    Line,
    /// Rectangle-based series (bar, column, funnel, heatmap).
    Bar,
    /// Mixed series resolved by each series' own type.
    Combo,
    /// Per-point slices (pie, donut, treemap).
    Slice,
}

impl ChartType {
    pub const ALL: [Self; 13] = [
        Self::Line,
        Self::Area,
        Self::Scatter,
        Self::Bubble,
        Self::Dual,
        Self::Bar,
        Self::Column,
        Self::Funnel,
        Self::Heatmap,
        Self::Combo,
        Self::Pie,
        Self::Donut,
        Self::Treemap,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::Dual => "dual",
            Self::Bar => "bar",
            Self::Column => "column",
            Self::Funnel => "funnel",
            Self::Heatmap => "heatmap",
            Self::Combo => "combo",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Treemap => "treemap",
        }
    }

    /// Horizontal bars swap the meaning of x/y axis properties.
    #[must_use]
    pub const fn is_bar(self) -> bool {
        matches!(self, Self::Bar)
    }

    #[must_use]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column)
    }

    #[must_use]
    pub const fn is_area(self) -> bool {
        matches!(self, Self::Area)
    }

    #[must_use]
    pub const fn is_scatter(self) -> bool {
        matches!(self, Self::Scatter)
    }

    /// Charts whose tooltip anchors on the point coordinate rather than a shape.
    #[must_use]
    pub const fn is_point_based(self) -> bool {
        matches!(
            self,
            Self::Line | Self::Area | Self::Treemap | Self::Dual | Self::Scatter
        )
    }

    /// Charts that keep drilldown state per data point.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        matches!(self, Self::Pie | Self::Donut | Self::Treemap)
    }

    #[must_use]
    pub const fn hover_family(self) -> HoverFamily {
        match self {
            Self::Dual | Self::Line | Self::Scatter | Self::Area | Self::Bubble => {
                HoverFamily::Line
            }
            Self::Bar | Self::Column | Self::Funnel | Self::Heatmap => HoverFamily::Bar,
            Self::Combo => HoverFamily::Combo,
            Self::Pie | Self::Donut | Self::Treemap => HoverFamily::Slice,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|chart_type| chart_type.as_str() == input)
            .ok_or_else(|| ChartError::UnknownChartType(input.to_owned()))
    }
}

impl TryFrom<String> for ChartType {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        value.parse()
    }
}

impl From<ChartType> for String {
    fn from(value: ChartType) -> Self {
        value.as_str().to_owned()
    }
}

/// Stacking mode forwarded to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackingMode {
    Normal,
    Percent,
}

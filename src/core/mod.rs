pub mod chart_type;
pub mod color;
pub mod escape;
pub mod number_format;
pub mod options;

pub use chart_type::{ChartType, HoverFamily, StackingMode};
pub use color::{RgbColor, lighter_color};
pub use escape::{escape_angle_brackets, escape_optional};
pub use number_format::{format_number, format_percent, plain_number, strip_colors};
pub use options::{
    Axis, AxisProps, AxisTheme, ChartActions, ChartData, ChartOptions, DataPoint, GridOptions,
    HoveredPoint, LegendOptions, LegendPosition, Series, ShapeArgs, TooltipCallback,
};

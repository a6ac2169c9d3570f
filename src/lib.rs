//! chart-config: derives engine-ready chart configuration from chart options.
//!
//! A [`ChartOptions`] descriptor is run through an ordered list of
//! configurators (axes, titles, stacking, percent labels, data labels, data,
//! tooltip, hover states, grid). Their fragments are deep-merged into one
//! [`RenderConfiguration`] that a rendering engine consumes as JSON plus
//! typed formatter callbacks.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LegendConfig, RenderConfiguration, build_legend, get_customized_configuration};
pub use crate::core::{ChartOptions, ChartType};
pub use error::{ChartError, ChartResult};

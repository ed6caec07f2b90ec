//! linechart-core: coordinate transforms, repaint scheduling and scale math
//! for large, frequently updated time-series line charts.
//!
//! A [`core::Coordinator`] owns the data-space view box and surface size,
//! [`core::DataDrawable`] turns raw series into cached pixel-space geometry
//! and paints only when needed, and drawing is delegated to any
//! [`render::Renderer`] backend.

pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::core::{Coordinator, DataDrawable, LogScale, Scale};
pub use error::{ChartError, ChartResult};

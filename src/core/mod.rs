pub mod coordinator;
pub mod drawable;
pub mod line_view;
pub mod linear_scale;
pub mod log_scale;
pub mod metadata;
pub mod scale;
pub mod ticks;
pub mod types;

pub use coordinator::{Coordinator, OrthographicProjection};
pub use drawable::{DataDrawable, DrawableView, RedrawContext};
pub use line_view::LineView;
pub use linear_scale::LinearScale;
pub use log_scale::{LogScale, MIN_POSITIVE_VALUE};
pub use metadata::{SeriesMetadata, SeriesMetadataMap, metadata_map};
pub use scale::{Domain, Scale, ScaleConfig, ScaleType, create_scale};
pub use ticks::{DEFAULT_TICK_COUNT, Ticks};
pub use types::{DataInternalSeries, DataSeries, Dimension, Paths, Point, Rect};

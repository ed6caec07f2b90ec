mod null_renderer;
mod paths;
mod primitives;

pub use null_renderer::{NullRenderer, RecordedLine};
pub use paths::path_runs;
pub use primitives::{Color, LineSpec};

use crate::core::Dimension;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive geometry that is already in pixel space, so drawing code
/// stays isolated from data-space mapping and repaint scheduling. Failures are
/// reported through `ChartResult`.
pub trait Renderer {
    /// Adjusts the backend surface or projection to new pixel dimensions.
    fn on_resize(&mut self, dimension: Dimension);

    /// Draws or updates the line identified by `cache_id`.
    ///
    /// `paths` is a flat `[x0, y0, x1, y1, ...]` buffer; non-finite points
    /// must be omitted (see [`path_runs`]). Backends may diff against the
    /// previous call with the same `cache_id`.
    fn draw_line(&mut self, cache_id: &str, paths: &[f32], spec: &LineSpec) -> ChartResult<()>;

    /// Commits all queued draw operations.
    fn flush(&mut self) -> ChartResult<()>;

    /// Runs `block` while attributing its draw calls to the group `group_name`.
    ///
    /// Groups may nest; implementations must restore their group state even
    /// when `block` fails.
    fn render_group(
        &mut self,
        group_name: &str,
        block: &mut dyn FnMut(&mut dyn Renderer) -> ChartResult<()>,
    ) -> ChartResult<()>;
}

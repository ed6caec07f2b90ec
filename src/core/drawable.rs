use tracing::{debug, trace, warn};

use crate::core::coordinator::Coordinator;
use crate::core::metadata::SeriesMetadataMap;
use crate::core::types::{DataInternalSeries, DataSeries, Rect};
use crate::error::ChartResult;
use crate::render::Renderer;

/// Inputs handed to a [`DrawableView`] for one paint.
#[derive(Debug, Clone, Copy)]
pub struct RedrawContext<'a> {
    /// Pixel-space series, in the order they were passed to `set_data`.
    pub series: &'a [DataInternalSeries],
    pub metadata_map: &'a SeriesMetadataMap,
    pub layout: Rect,
}

/// Concrete chart-view drawing step plugged into a [`DataDrawable`].
///
/// Implementations read the cached pixel-space series and issue draw calls;
/// they never transform coordinates themselves.
pub trait DrawableView {
    /// Render group the view's draw calls are attributed to.
    fn group_name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    fn redraw(
        &mut self,
        context: &RedrawContext<'_>,
        renderer: &mut dyn Renderer,
    ) -> ChartResult<()>;
}

/// Orchestrates one rectangular view of data series.
///
/// Raw series are transformed into pixel space lazily: only when the
/// coordinator's update identifier differs from the one the cache was built
/// against, or after `set_data` cleared it. Painting is skipped unless the
/// drawable is paint-dirty.
#[derive(Debug)]
pub struct DataDrawable<V: DrawableView> {
    view: V,
    raw_series: Vec<DataSeries>,
    series: Vec<DataInternalSeries>,
    metadata_map: SeriesMetadataMap,
    paint_dirty: bool,
    coordinate_identifier: Option<u64>,
    layout: Rect,
}

impl<V: DrawableView> DataDrawable<V> {
    #[must_use]
    pub fn new(view: V) -> Self {
        Self {
            view,
            raw_series: Vec::new(),
            series: Vec::new(),
            metadata_map: SeriesMetadataMap::new(),
            paint_dirty: true,
            coordinate_identifier: None,
            layout: Rect::new(0.0, 0.0, 1.0, 1.0),
        }
    }

    #[must_use]
    pub fn with_metadata_map(mut self, metadata_map: SeriesMetadataMap) -> Self {
        self.metadata_map = metadata_map;
        self
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn metadata_map(&self) -> &SeriesMetadataMap {
        &self.metadata_map
    }

    /// Replaces styling; geometry is untouched but the next pass repaints.
    pub fn set_metadata_map(&mut self, metadata_map: SeriesMetadataMap) {
        self.metadata_map = metadata_map;
        self.paint_dirty = true;
    }

    /// Records the sub-rectangle this drawable occupies. Any change in
    /// position or size marks the drawable paint-dirty.
    pub fn set_layout_rect(&mut self, layout: Rect) {
        if self.layout.x != layout.x
            || self.layout.width != layout.width
            || self.layout.y != layout.y
            || self.layout.height != layout.height
        {
            self.paint_dirty = true;
        }
        self.layout = layout;
    }

    #[must_use]
    pub fn layout_rect(&self) -> Rect {
        self.layout
    }

    pub fn mark_as_paint_dirty(&mut self) {
        self.paint_dirty = true;
    }

    #[must_use]
    pub fn is_paint_dirty(&self) -> bool {
        self.paint_dirty
    }

    /// Replaces the raw series and invalidates the cached coordinates so the
    /// next pass recomputes regardless of the coordinator.
    pub fn set_data(&mut self, data: Vec<DataSeries>) {
        debug!(
            series_count = data.len(),
            point_count = data.iter().map(|series| series.points.len()).sum::<usize>(),
            "set drawable data"
        );
        self.clear_coordinate_identifier();
        self.raw_series = data;
    }

    #[must_use]
    pub fn raw_series(&self) -> &[DataSeries] {
        &self.raw_series
    }

    /// Pixel-space series from the last recompute.
    #[must_use]
    pub fn series(&self) -> &[DataInternalSeries] {
        &self.series
    }

    /// Update identifier the cached series were built against.
    #[must_use]
    pub fn coordinate_identifier(&self) -> Option<u64> {
        self.coordinate_identifier
    }

    pub fn clear_coordinate_identifier(&mut self) {
        self.coordinate_identifier = None;
    }

    #[must_use]
    pub fn is_coordinate_updated(&self, coordinator: &Coordinator) -> bool {
        self.coordinate_identifier != Some(coordinator.update_identifier())
    }

    /// Runs one redraw pass: recompute if stale, then paint if dirty.
    ///
    /// On a renderer failure the drawable stays paint-dirty so the next pass
    /// retries.
    pub fn redraw(
        &mut self,
        coordinator: &Coordinator,
        renderer: &mut dyn Renderer,
    ) -> ChartResult<()> {
        self.transform_coordinates_if_stale(coordinator);

        if !self.paint_dirty {
            trace!(group = self.view.group_name(), "skip redraw: paint clean");
            return Ok(());
        }

        let Self {
            view,
            series,
            metadata_map,
            layout,
            ..
        } = self;
        let group_name = view.group_name().to_owned();
        let context = RedrawContext {
            series: series.as_slice(),
            metadata_map,
            layout: *layout,
        };

        if let Err(err) =
            renderer.render_group(&group_name, &mut |target| view.redraw(&context, target))
        {
            warn!(group = %group_name, error = %err, "redraw failed; keeping paint dirty");
            return Err(err);
        }

        self.paint_dirty = false;
        Ok(())
    }

    /// Rebuilds every pixel-space series when the cache is stale.
    pub fn transform_coordinates_if_stale(&mut self, coordinator: &Coordinator) {
        if !self.is_coordinate_updated(coordinator) {
            return;
        }

        let layout = self.layout;
        self.series = self
            .raw_series
            .iter()
            .map(|datum| {
                let mut paths = Vec::with_capacity(datum.points.len() * 2);
                for point in &datum.points {
                    let [x, y] = coordinator.view_coordinate(layout, *point);
                    paths.push(x as f32);
                    paths.push(y as f32);
                }
                DataInternalSeries {
                    id: datum.id.clone(),
                    paths,
                }
            })
            .collect();

        self.coordinate_identifier = Some(coordinator.update_identifier());
        debug!(
            update_identifier = coordinator.update_identifier(),
            series_count = self.series.len(),
            "recomputed drawable coordinates"
        );
        self.mark_as_paint_dirty();
    }
}

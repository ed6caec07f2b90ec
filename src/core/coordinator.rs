use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{Dimension, Point, Rect};

/// Orthographic projection kept in sync with the drawing surface.
///
/// GPU backends read it to size their camera; `top` is 0 so pixel y grows
/// downward like every other backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthographicProjection {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for OrthographicProjection {
    fn default() -> Self {
        Self {
            left: 0.0,
            right: 1000.0,
            top: 0.0,
            bottom: 1000.0,
        }
    }
}

/// Single source of truth for the data-space to pixel-space mapping.
///
/// Every mutating setter bumps the update identifier so drawables can detect
/// a stale cache with one integer comparison. Reads never mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinator {
    view_box: Rect,
    container: Dimension,
    projection: OrthographicProjection,
    update_identifier: u64,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_box: Rect::new(0.0, 0.0, 1.0, 1.0),
            container: Dimension::new(1.0, 1.0),
            projection: OrthographicProjection::default(),
            update_identifier: 0,
        }
    }

    /// Sets the data-space window currently visible.
    pub fn set_view_box_rect(&mut self, rect: Rect) {
        self.view_box = rect;
        self.bump_update_identifier();
    }

    /// Sets the pixel size of the full drawing surface.
    pub fn set_dom_container_dimension(&mut self, dimension: Dimension) {
        self.container = dimension;
        self.projection = OrthographicProjection {
            left: 0.0,
            right: dimension.width,
            top: 0.0,
            bottom: dimension.height,
        };
        self.bump_update_identifier();
    }

    #[must_use]
    pub fn current_view_box_rect(&self) -> Rect {
        self.view_box
    }

    #[must_use]
    pub fn dom_container_dimension(&self) -> Dimension {
        self.container
    }

    #[must_use]
    pub fn projection(&self) -> OrthographicProjection {
        self.projection
    }

    #[must_use]
    pub fn update_identifier(&self) -> u64 {
        self.update_identifier
    }

    /// Maps a data-space point into `layout_rect`, returning `[px, py]`.
    ///
    /// The view box x-span lands on `[rect.x, rect.x + rect.width]` and its
    /// y-span on `[rect.y + rect.height, rect.y]`.
    #[must_use]
    pub fn view_coordinate(&self, layout_rect: Rect, point: Point) -> [f64; 2] {
        let view = self.view_box;
        let x = interpolate(
            (view.x, view.x + view.width),
            (layout_rect.x, layout_rect.x + layout_rect.width),
            point.x,
        );
        let y = interpolate(
            (view.y, view.y + view.height),
            (layout_rect.y + layout_rect.height, layout_rect.y),
            point.y,
        );
        [x, y]
    }

    fn bump_update_identifier(&mut self) {
        self.update_identifier = self.update_identifier.wrapping_add(1);
        debug!(
            update_identifier = self.update_identifier,
            "coordinator mapping changed"
        );
    }
}

fn interpolate(domain: (f64, f64), range: (f64, f64), value: f64) -> f64 {
    let span = domain.1 - domain.0;
    if span == 0.0 {
        return (range.0 + range.1) / 2.0;
    }
    let normalized = (value - domain.0) / span;
    range.0 + normalized * (range.1 - range.0)
}

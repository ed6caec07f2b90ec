use crate::core::drawable::{DrawableView, RedrawContext};
use crate::error::ChartResult;
use crate::render::{LineSpec, Renderer};

/// Stock line-chart view: one `draw_line` per cached series.
///
/// Series without metadata are drawn with `fallback_spec`. Hidden series are
/// still submitted so backends can hide their cached line instead of
/// dropping it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub fallback_spec: LineSpec,
}

impl Default for LineView {
    fn default() -> Self {
        Self {
            fallback_spec: LineSpec::default(),
        }
    }
}

impl LineView {
    #[must_use]
    pub fn with_fallback_spec(fallback_spec: LineSpec) -> Self {
        Self { fallback_spec }
    }
}

impl DrawableView for LineView {
    fn group_name(&self) -> &str {
        "LineView"
    }

    fn redraw(
        &mut self,
        context: &RedrawContext<'_>,
        renderer: &mut dyn Renderer,
    ) -> ChartResult<()> {
        for series in context.series {
            let spec = context
                .metadata_map
                .get(&series.id)
                .map(|metadata| metadata.line_spec())
                .unwrap_or(self.fallback_spec);
            renderer.draw_line(&series.id, &series.paths, &spec)?;
        }
        Ok(())
    }
}

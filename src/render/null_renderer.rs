use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::Dimension;
use crate::error::{ChartError, ChartResult};
use crate::render::{LineSpec, Renderer, path_runs};

/// Last state submitted for one line cache id.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLine {
    pub paths: Vec<f32>,
    pub spec: LineSpec,
    /// Number of finite polyline runs the buffer splits into.
    pub run_count: usize,
    /// Qualified group (`outer/inner`) active when the line was drawn.
    pub group: String,
    pub draw_count: usize,
}

/// No-op renderer used by tests and headless usage.
///
/// It still validates draw input and records every call so tests can assert
/// repaint counts and group nesting without a real drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_dimension: Option<Dimension>,
    pub lines: IndexMap<String, RecordedLine>,
    pub draw_line_calls: usize,
    pub flush_count: usize,
    /// Qualified names of every group entered, in call order.
    pub group_log: Vec<String>,
    pub max_group_depth: usize,
    group_stack: SmallVec<[String; 4]>,
}

impl NullRenderer {
    /// Number of times a group called `group_name` was entered at any depth.
    #[must_use]
    pub fn group_count(&self, group_name: &str) -> usize {
        self.group_log
            .iter()
            .filter(|qualified| qualified.rsplit('/').next() == Some(group_name))
            .count()
    }

    #[must_use]
    pub fn group_depth(&self) -> usize {
        self.group_stack.len()
    }

    fn qualified_group(&self) -> String {
        self.group_stack.join("/")
    }
}

impl Renderer for NullRenderer {
    fn on_resize(&mut self, dimension: Dimension) {
        self.last_dimension = Some(dimension);
    }

    fn draw_line(&mut self, cache_id: &str, paths: &[f32], spec: &LineSpec) -> ChartResult<()> {
        if paths.len() % 2 != 0 {
            return Err(ChartError::InvalidData(format!(
                "line `{cache_id}` paths must hold x/y pairs, got {} values",
                paths.len()
            )));
        }
        spec.validate()?;

        self.draw_line_calls += 1;
        let group = self.qualified_group();
        let run_count = path_runs(paths).len();
        let entry = self
            .lines
            .entry(cache_id.to_owned())
            .or_insert_with(|| RecordedLine {
                paths: Vec::new(),
                spec: *spec,
                run_count: 0,
                group: String::new(),
                draw_count: 0,
            });
        entry.paths.clear();
        entry.paths.extend_from_slice(paths);
        entry.spec = *spec;
        entry.run_count = run_count;
        entry.group = group;
        entry.draw_count += 1;
        Ok(())
    }

    fn flush(&mut self) -> ChartResult<()> {
        if !self.group_stack.is_empty() {
            return Err(ChartError::Render(format!(
                "flush called inside open group `{}`",
                self.qualified_group()
            )));
        }
        self.flush_count += 1;
        Ok(())
    }

    fn render_group(
        &mut self,
        group_name: &str,
        block: &mut dyn FnMut(&mut dyn Renderer) -> ChartResult<()>,
    ) -> ChartResult<()> {
        self.group_stack.push(group_name.to_owned());
        self.max_group_depth = self.max_group_depth.max(self.group_stack.len());
        self.group_log.push(self.qualified_group());

        let result = block(self);

        self.group_stack.pop();
        result
    }
}

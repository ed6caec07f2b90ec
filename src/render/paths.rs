/// Splits a flat `[x0, y0, x1, y1, ...]` buffer into maximal runs of points
/// whose coordinates are both finite.
///
/// NaN coordinates come from scales that cannot represent a value (log of a
/// non-positive number); backends draw each run as its own polyline so those
/// points are omitted instead of being joined across the gap. A trailing odd
/// value is ignored.
#[must_use]
pub fn path_runs(paths: &[f32]) -> Vec<&[f32]> {
    let mut runs = Vec::new();
    let mut run_start: Option<usize> = None;
    let point_count = paths.len() / 2;

    for index in 0..point_count {
        let x = paths[index * 2];
        let y = paths[index * 2 + 1];
        let finite = x.is_finite() && y.is_finite();
        match (finite, run_start) {
            (true, None) => run_start = Some(index),
            (false, Some(start)) => {
                runs.push(&paths[start * 2..index * 2]);
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        runs.push(&paths[start * 2..point_count * 2]);
    }

    runs
}

//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed samples: `o`
//! - fitted curve: `-` line

use crate::data::Dataset;
use crate::domain::FitResult;
use crate::models::predict;

/// Largest grid the renderer will allocate.
pub const MAX_PLOT_WIDTH: usize = 500;
pub const MAX_PLOT_HEIGHT: usize = 200;

/// Render observed samples and the fitted curve.
///
/// `width` and `height` are clamped to `10..=MAX_PLOT_WIDTH` and
/// `5..=MAX_PLOT_HEIGHT`.
pub fn render_ascii_plot(dataset: &Dataset, fit: &FitResult, width: usize, height: usize) -> String {
    let width = width.clamp(10, MAX_PLOT_WIDTH);
    let height = height.clamp(5, MAX_PLOT_HEIGHT);

    let (x_min, x_max) = x_range(dataset);
    let curve = sample_curve(fit, x_min, x_max, width);

    let (y_min, y_max) = y_range(dataset, &curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    draw_curve(&mut grid, &curve, x_min, x_max, y_min, y_max);

    for s in dataset {
        if !(s.x.is_finite() && s.y.is_finite()) {
            continue;
        }
        let col = map_x(s.x, x_min, x_max, width);
        let row = map_y(s.y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {} | x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n",
        fit.model.display_name()
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(dataset: &Dataset) -> (f64, f64) {
    let Some(stats) = dataset.stats() else {
        return (0.0, 1.0);
    };
    if stats.x_max > stats.x_min {
        (stats.x_min, stats.x_max)
    } else {
        // All samples share one x; widen around it.
        (stats.x_min - 1.0, stats.x_max + 1.0)
    }
}

/// Evaluate the fit on `n` evenly spaced x values; non-finite predictions are
/// kept as `NaN` so the curve is broken there.
fn sample_curve(fit: &FitResult, x_min: f64, x_max: f64, n: usize) -> Vec<(f64, f64)> {
    let n = n.max(2);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x_min + u * (x_max - x_min);
        let y = predict(fit.model, x, &fit.coefficients);
        out.push((x, if y.is_finite() { y } else { f64::NAN }));
    }
    out
}

fn y_range(dataset: &Dataset, curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    let observed = dataset.iter().map(|s| s.y);
    let fitted = curve.iter().map(|&(_, y)| y);
    for y in observed.chain(fitted).filter(|y| y.is_finite()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else if min_y.is_finite() {
        Some((min_y - 1.0, min_y + 1.0))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        if !y.is_finite() {
            prev = None;
            continue;
        }
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '-');
        } else if grid[row][col] == ' ' {
            grid[row][col] = '-';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;

    fn flat_fit(level: f64) -> FitResult {
        FitResult {
            model: ModelKind::Linear,
            coefficients: vec![level, 0.0],
            r2: 0.0,
            trace: Vec::new(),
        }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let ds = Dataset::from_pairs([(1.0, 100.0), (10.0, 110.0)]).unwrap();
        let txt = render_ascii_plot(&ds, &flat_fit(100.0), 10, 5);
        let expected = concat!(
            "Plot: Linear | x=[1.000, 10.000] | y=[99.50, 110.50]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn degenerate_ranges_still_render() {
        let ds = Dataset::from_pairs([(2.0, 3.0), (2.0, 3.0)]).unwrap();
        let txt = render_ascii_plot(&ds, &flat_fit(3.0), 12, 6);
        assert_eq!(txt.lines().count(), 7);
        assert!(txt.contains('o'));
        assert!(txt.contains('-'));
    }

    #[test]
    fn oversized_grid_is_clamped() {
        let ds = Dataset::from_pairs([(1.0, 1.0), (2.0, 2.0)]).unwrap();
        let txt = render_ascii_plot(&ds, &flat_fit(1.5), 1_000_000_000_000, usize::MAX);
        let rows: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(rows.len(), MAX_PLOT_HEIGHT);
        assert!(rows.iter().all(|r| r.chars().count() == MAX_PLOT_WIDTH));
    }
}

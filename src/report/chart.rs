//! Bar charts and scatter plots rendered as terminal text

/// Default bar width in characters
pub const DEFAULT_BAR_WIDTH: usize = 40;

const FILLED: char = '█';
const NEGATIVE: char = '▒';

/// Render labelled values as horizontal bars scaled to the largest magnitude.
///
/// Negative values are drawn with a lighter block so they stand out.
pub fn render_bar_chart(bars: &[(String, f64)], width: usize, precision: usize) -> String {
    let label_width = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max_magnitude = bars
        .iter()
        .map(|(_, v)| v.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (label, value) in bars {
        let length = bar_length(*value, max_magnitude, width);
        let block = if *value < 0.0 { NEGATIVE } else { FILLED };
        out.push_str(&format!(
            "{:<label_width$} │{:<width$}│ {:.precision$}\n",
            label,
            block.to_string().repeat(length),
            value,
        ));
    }
    out
}

/// Scatter grid size in characters
pub const DEFAULT_SCATTER_SIZE: (usize, usize) = (48, 12);

const SERIES_MARKERS: &[char] = &['●', '▲', '■', '◆', '○', '△', '□', '◇'];
const OVERLAP: char = '✱';

/// One labelled group of `(x, y)` points
#[derive(Debug, Clone)]
pub struct ScatterSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Render point series on a character grid with y on the left axis.
///
/// Each series gets its own marker; cells hit by more than one series show
/// an overlap marker. A legend follows the x-axis line.
pub fn render_scatter(
    series: &[ScatterSeries],
    (width, height): (usize, usize),
    x_label: &str,
    y_label: &str,
) -> String {
    let bounds = series
        .iter()
        .flat_map(|s| s.points.iter().filter(|p| is_finite_point(p)))
        .fold(None::<(f64, f64, f64, f64)>, |acc, &(x, y)| match acc {
            None => Some((x, x, y, y)),
            Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
        });
    let Some((x_min, x_max, y_min, y_max)) = bounds else {
        return String::new();
    };
    let (width, height) = (width.max(2), height.max(2));

    let mut grid = vec![vec![' '; width]; height];
    for (index, s) in series.iter().enumerate() {
        let marker = SERIES_MARKERS[index % SERIES_MARKERS.len()];
        for &(x, y) in s.points.iter().filter(|p| is_finite_point(p)) {
            let col = grid_position(x, x_min, x_max, width);
            let row = height - 1 - grid_position(y, y_min, y_max, height);
            let cell = &mut grid[row][col];
            *cell = if *cell == ' ' || *cell == marker { marker } else { OVERLAP };
        }
    }

    let y_width = format!("{:.1}", y_max).len().max(format!("{:.1}", y_min).len());
    let mut out = format!("{:>y_width$}\n", y_label);
    for (row, cells) in grid.iter().enumerate() {
        let tick = match row {
            0 => format!("{:.1}", y_max),
            r if r == height - 1 => format!("{:.1}", y_min),
            _ => String::new(),
        };
        let line: String = cells.iter().collect();
        out.push_str(&format!("{:>y_width$} │{}\n", tick, line.trim_end()));
    }
    out.push_str(&format!("{:>y_width$} └{}\n", "", "─".repeat(width)));

    let low = format!("{:.1}", x_min);
    let high = format!("{:.1}", x_max);
    let gap = (width + 1).saturating_sub(low.len() + high.len());
    out.push_str(&format!("{:>y_width$}  {}{}{}\n", "", low, " ".repeat(gap), high));
    out.push_str(&format!("{:>y_width$}  {}\n", "", x_label));

    for (index, s) in series.iter().enumerate() {
        out.push_str(&format!(
            "{:>y_width$}  {} {}\n",
            "",
            SERIES_MARKERS[index % SERIES_MARKERS.len()],
            s.label
        ));
    }
    out
}

fn is_finite_point(&(x, y): &(f64, f64)) -> bool {
    x.is_finite() && y.is_finite()
}

fn grid_position(value: f64, min: f64, max: f64, cells: usize) -> usize {
    if max <= min {
        return cells / 2;
    }
    (((value - min) / (max - min)) * (cells - 1) as f64).round() as usize
}

fn bar_length(value: f64, max_magnitude: f64, width: usize) -> usize {
    if max_magnitude <= 0.0 || !value.is_finite() {
        return 0;
    }
    ((value.abs() / max_magnitude) * width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_value_fills_width() {
        let chart = render_bar_chart(
            &[("a".to_string(), 10.0), ("bb".to_string(), 5.0)],
            10,
            1,
        );
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches(FILLED).count(), 10);
        assert_eq!(lines[1].matches(FILLED).count(), 5);
        assert!(lines[0].ends_with("10.0"));
    }

    #[test]
    fn negative_values_use_distinct_block() {
        let chart = render_bar_chart(&[("loss".to_string(), -4.0), ("gain".to_string(), 8.0)], 8, 0);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0].matches(NEGATIVE).count(), 4);
        assert_eq!(lines[1].matches(FILLED).count(), 8);
    }

    #[test]
    fn scatter_places_extremes_in_corners() {
        let series = vec![ScatterSeries {
            label: "IT".to_string(),
            points: vec![(0.0, 1.0), (10.0, 5.0)],
        }];
        let chart = render_scatter(&series, (10, 4), "hours", "rating");
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0].trim(), "rating");
        // Top row holds the highest rating at the right edge
        assert!(lines[1].starts_with("5.0 │"));
        assert!(lines[1].ends_with('●'));
        // Bottom row holds the lowest rating at the left edge
        assert!(lines[4].starts_with("1.0 │●"));
        assert!(chart.contains("● IT"));
        assert!(chart.contains("0.0"));
        assert!(chart.contains("10.0"));
    }

    #[test]
    fn scatter_marks_shared_cells_from_different_series() {
        let series = vec![
            ScatterSeries {
                label: "HR".to_string(),
                points: vec![(1.0, 1.0), (2.0, 2.0)],
            },
            ScatterSeries {
                label: "Sales".to_string(),
                points: vec![(2.0, 2.0)],
            },
        ];
        let chart = render_scatter(&series, (8, 4), "x", "y");
        assert_eq!(chart.matches(OVERLAP).count(), 1);
        assert!(chart.contains("▲ Sales"));
    }

    #[test]
    fn scatter_without_points_is_empty() {
        let series = vec![ScatterSeries {
            label: "IT".to_string(),
            points: vec![(f64::NAN, 1.0)],
        }];
        assert!(render_scatter(&series, DEFAULT_SCATTER_SIZE, "x", "y").is_empty());
    }

    #[test]
    fn all_zero_values_render_empty_bars() {
        let chart = render_bar_chart(&[("zero".to_string(), 0.0)], 8, 2);
        assert_eq!(chart.matches(FILLED).count(), 0);
        assert!(chart.contains("0.00"));
    }
}

//! Line chart of the month's daily visit counts, rendered as plain SVG.
//!
//! The dashboard hands the full [`DailyCount`] series in; the chart scales
//! it into a fixed viewBox and stretches to the container width. Counts of
//! zero sit on the baseline, the busiest day touches the top margin.

use dioxus::prelude::*;
use domain::DailyCount;

const VIEW_W: f64 = 300.0;
const VIEW_H: f64 = 60.0;
const MARGIN: f64 = 5.0;

#[component]
pub fn VisitsChart(series: Vec<DailyCount>) -> Element {
    let points = polyline_points(&series);
    let total: usize = series.iter().map(|d| d.count).sum();

    rsx! {
        svg {
            class: "visits-chart",
            view_box: "0 0 {VIEW_W} {VIEW_H}",
            preserve_aspect_ratio: "none",
            width: "100%",
            height: "60",
            role: "img",
            title { "{total} visitas este mes" }
            polyline {
                points: "{points}",
                fill: "none",
                stroke: "#4ade80",
                stroke_width: "2",
                stroke_linejoin: "round",
                stroke_linecap: "round",
            }
        }
    }
}

/// Scale the series into `x,y` pairs for an SVG polyline.
fn polyline_points(series: &[DailyCount]) -> String {
    if series.is_empty() {
        return String::new();
    }
    let max = series.iter().map(|d| d.count).max().unwrap_or(0).max(1) as f64;
    let span = (series.len().saturating_sub(1)).max(1) as f64;

    series
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let x = MARGIN + (i as f64 / span) * (VIEW_W - 2.0 * MARGIN);
            let y = (VIEW_H - MARGIN) - (d.count as f64 / max) * (VIEW_H - 2.0 * MARGIN);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: usize) -> DailyCount {
        DailyCount {
            date: date.to_string(),
            count,
        }
    }

    #[test]
    fn one_point_per_day() {
        let series = vec![day("2024-06-01", 0), day("2024-06-02", 2), day("2024-06-03", 1)];
        let points = polyline_points(&series);
        assert_eq!(points.split_whitespace().count(), 3);
    }

    #[test]
    fn zero_counts_sit_on_the_baseline() {
        let series = vec![day("2024-06-01", 0), day("2024-06-02", 3)];
        let points = polyline_points(&series);
        let first = points.split_whitespace().next().unwrap();
        assert!(first.ends_with(",55.0"));
    }

    #[test]
    fn max_count_touches_the_top_margin() {
        let series = vec![day("2024-06-01", 1), day("2024-06-02", 4)];
        let points = polyline_points(&series);
        let last = points.split_whitespace().last().unwrap();
        assert!(last.ends_with(",5.0"));
    }

    #[test]
    fn empty_series_draws_nothing() {
        assert!(polyline_points(&[]).is_empty());
    }
}

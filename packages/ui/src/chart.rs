//! Minimal SVG line chart (census and environmental series).

use api::models::{CensusRecord, EnvironmentalRecord};
use dioxus::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PAD: f64 = 36.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: &str, color: &'static str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            color,
            values,
        }
    }
}

/// Upper bound of the y axis: the largest value, or 1 for empty/all-zero data.
pub fn y_max(series: &[Series]) -> f64 {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// SVG `points` for one series, spread evenly across the plot area.
pub fn points(values: &[f64], max: f64) -> String {
    let inner_w = WIDTH - 2.0 * PAD;
    let inner_h = HEIGHT - 2.0 * PAD;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PAD + step * i as f64;
            let y = HEIGHT - PAD - (v.max(0.0) / max) * inner_h;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Year labels and the population and literacy series, oldest year first.
pub fn census_series(records: &[CensusRecord]) -> (Vec<String>, Vec<Series>) {
    let rows = CensusRecord::chronological(records);
    let labels = rows.iter().map(|r| r.year.to_string()).collect();
    let column = |f: fn(&CensusRecord) -> f64| rows.iter().map(f).collect::<Vec<_>>();
    let series = vec![
        Series::new("Total Population", "#8884d8", column(|r| r.total as f64)),
        Series::new("Male Population", "#82ca9d", column(|r| r.male as f64)),
        Series::new("Female Population", "#ff7300", column(|r| r.female as f64)),
        Series::new("Literacy Rate (%)", "#ff0000", column(|r| r.literacy)),
    ];
    (labels, series)
}

pub fn environment_series(records: &[EnvironmentalRecord]) -> (Vec<String>, Vec<Series>) {
    let mut rows = records.to_vec();
    rows.sort_by_key(|r| r.year);
    let labels = rows.iter().map(|r| r.year.to_string()).collect();
    let column = |f: fn(&EnvironmentalRecord) -> f64| rows.iter().map(f).collect::<Vec<_>>();
    let series = vec![
        Series::new("AQI", "#ff4d4d", column(|r| r.aqi)),
        Series::new("Forest cover (%)", "#2e8b57", column(|r| r.forest_cover)),
        Series::new("Water quality", "#1e90ff", column(|r| r.water_quality)),
    ];
    (labels, series)
}

#[component]
pub fn LineChart(#[props(into)] title: String, labels: Vec<String>, series: Vec<Series>) -> Element {
    let max = y_max(&series);
    let inner_w = WIDTH - 2.0 * PAD;
    let step = if labels.len() > 1 {
        inner_w / (labels.len() - 1) as f64
    } else {
        0.0
    };

    rsx! {
        figure {
            class: "chart",
            figcaption { class: "chart-title", "{title}" }
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                width: "100%",
                line { x1: PAD, y1: HEIGHT - PAD, x2: WIDTH - PAD, y2: HEIGHT - PAD, stroke: "#999" }
                line { x1: PAD, y1: PAD, x2: PAD, y2: HEIGHT - PAD, stroke: "#999" }
                text { x: 4.0, y: PAD, font_size: "10", "{max:.0}" }
                for (i, label) in labels.iter().enumerate() {
                    text {
                        key: "{label}",
                        x: PAD + step * i as f64,
                        y: HEIGHT - PAD + 16.0,
                        font_size: "10",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
                for s in series.iter() {
                    polyline {
                        key: "{s.name}",
                        fill: "none",
                        stroke: s.color,
                        stroke_width: "2",
                        points: points(&s.values, max),
                    }
                }
            }
            ul {
                class: "chart-legend",
                for s in series.iter() {
                    li {
                        key: "{s.name}",
                        span { class: "chart-swatch", style: "background: {s.color}" }
                        "{s.name}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_max_defaults_to_one() {
        assert_eq!(y_max(&[]), 1.0);
        assert_eq!(y_max(&[Series::new("zero", "red", vec![0.0, 0.0])]), 1.0);
        assert_eq!(
            y_max(&[
                Series::new("a", "red", vec![10.0, 40.0]),
                Series::new("b", "blue", vec![25.0])
            ]),
            40.0
        );
    }

    #[test]
    fn test_points_span_plot_area() {
        let pts = points(&[0.0, 50.0, 100.0], 100.0);
        assert_eq!(pts, "36.0,224.0 300.0,130.0 564.0,36.0");
    }

    #[test]
    fn test_census_series_oldest_first() {
        let records = vec![
            CensusRecord { year: 2020, total: 80, male: 41, female: 39, literacy: 74.5 },
            CensusRecord { year: 2010, total: 60, male: 31, female: 29, literacy: 66.0 },
        ];
        let (labels, series) = census_series(&records);
        assert_eq!(labels, vec!["2010", "2020"]);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].values, vec![60.0, 80.0]);
        assert_eq!(series[3].values, vec![66.0, 74.5]);
    }

    #[test]
    fn test_single_point_sits_on_left_axis() {
        assert_eq!(points(&[100.0], 100.0), "36.0,36.0");
        assert_eq!(points(&[], 1.0), "");
    }
}

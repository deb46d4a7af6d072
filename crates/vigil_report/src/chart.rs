use serde::{Deserialize, Serialize};
use vigil_core::VitalsReading;

/// Pixel geometry and title for [`vitals_chart_svg`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            width: 640,
            height: 420,
            title: "Patient Vitals Trend".to_string(),
        }
    }
}

/// Display names and stroke colors for the four plotted series, in legend order.
const SERIES: [(&str, &str); 4] = [
    ("Glucose", "#1f77b4"),
    ("BP Systolic", "#ff7f0e"),
    ("BP Diastolic", "#2ca02c"),
    ("Heart Rate", "#d62728"),
];

const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 34.0;
const MARGIN_BOTTOM: f64 = 58.0;
const MARKER_RADIUS: f64 = 3.0;

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn series_values(readings: &[VitalsReading]) -> [Vec<f64>; 4] {
    [
        readings.iter().map(|r| r.glucose).collect(),
        readings.iter().map(|r| r.bp_systolic).collect(),
        readings.iter().map(|r| r.bp_diastolic).collect(),
        readings.iter().map(|r| r.hr).collect(),
    ]
}

/// Render the vitals series as a standalone SVG line chart: one colored
/// polyline with circle markers per series, dated x labels rotated thirty
/// degrees, a legend, and a centered title. All four series share one value
/// axis. Returns an empty string when there is nothing to draw.
pub fn vitals_chart_svg(readings: &[VitalsReading], options: &ChartOptions) -> String {
    if readings.is_empty() || options.width == 0 || options.height == 0 {
        return String::new();
    }

    let w = options.width as f64;
    let h = options.height as f64;
    let plot_w = (w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_h = (h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

    let all = series_values(readings);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for values in &all {
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }
    }
    // A flat chart still needs a vertical scale.
    if max - min == 0.0 {
        min -= 1.0;
        max += 1.0;
    }
    let range = max - min;

    let x_at = |i: usize| -> f64 {
        if readings.len() == 1 {
            MARGIN_LEFT + plot_w / 2.0
        } else {
            MARGIN_LEFT + (i as f64) * (plot_w / ((readings.len() - 1) as f64))
        }
    };
    let y_at = |v: f64| -> f64 { MARGIN_TOP + plot_h - ((v - min) / range) * plot_h };

    let x_axis_y = MARGIN_TOP + plot_h;
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        options.width, options.height
    ));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"white\" />",
        options.width, options.height
    ));

    if !options.title.is_empty() {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"20\" text-anchor=\"middle\" font-size=\"14\" fill=\"#333\">{}</text>",
            w / 2.0,
            xml_escape(&options.title)
        ));
    }

    svg.push_str(&format!(
        "<line x1=\"{MARGIN_LEFT:.1}\" y1=\"{MARGIN_TOP:.1}\" x2=\"{MARGIN_LEFT:.1}\" y2=\"{x_axis_y:.1}\" stroke=\"#333\" stroke-width=\"1\" />"
    ));
    svg.push_str(&format!(
        "<line x1=\"{MARGIN_LEFT:.1}\" y1=\"{x_axis_y:.1}\" x2=\"{:.1}\" y2=\"{x_axis_y:.1}\" stroke=\"#333\" stroke-width=\"1\" />",
        MARGIN_LEFT + plot_w
    ));
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" fill=\"#333\">{max:.0}</text>",
        MARGIN_LEFT - 6.0,
        MARGIN_TOP + 4.0
    ));
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" fill=\"#333\">{min:.0}</text>",
        MARGIN_LEFT - 6.0,
        x_axis_y + 4.0
    ));

    // Rotated date labels keep neighbouring ticks from overlapping.
    for (i, reading) in readings.iter().enumerate() {
        let x = x_at(i);
        let y = x_axis_y + 14.0;
        svg.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"end\" font-size=\"10\" fill=\"#333\" transform=\"rotate(-30 {x:.1} {y:.1})\">{}</text>",
            reading.date
        ));
    }

    for (values, (_, color)) in all.iter().zip(SERIES.iter()) {
        let mut points = String::new();
        for (i, &v) in values.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            points.push_str(&format!("{:.3},{:.3}", x_at(i), y_at(v)));
        }
        svg.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"1.5\" points=\"{points}\" />"
        ));
        for (i, &v) in values.iter().enumerate() {
            svg.push_str(&format!(
                "<circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{MARKER_RADIUS}\" fill=\"{color}\" />",
                x_at(i),
                y_at(v)
            ));
        }
    }

    // Legend in the top-right corner of the plot area.
    for (row, (label, color)) in SERIES.iter().enumerate() {
        let lx = MARGIN_LEFT + plot_w - 112.0;
        let ly = MARGIN_TOP + 8.0 + (row as f64) * 14.0;
        svg.push_str(&format!(
            "<line x1=\"{lx:.1}\" y1=\"{ly:.1}\" x2=\"{:.1}\" y2=\"{ly:.1}\" stroke=\"{color}\" stroke-width=\"2\" />",
            lx + 18.0
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"#333\">{label}</text>",
            lx + 24.0,
            ly + 3.5
        ));
    }

    svg.push_str("</svg>");
    svg
}

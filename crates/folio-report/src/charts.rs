//! Inline SVG charts for the HTML report.
//!
//! Sized to roughly match the Matplotlib tearsheet figures (~576x288).

use chrono::NaiveDate;

const WIDTH: f64 = 576.0;
const HEIGHT: f64 = 288.0;
const PADDING: f64 = 36.0;
const LINE_COLOR: &str = "#348dc1";
const POSITIVE_COLOR: &str = "#1a7f37";
const NEGATIVE_COLOR: &str = "#dc3545";
const GUIDE_COLOR: &str = "#8c8c8c";
const AXIS_COLOR: &str = "#333";
const EMPTY_COLOR: &str = "#999";

fn svg_open() -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" font-size="10">"#
    )
}

fn scale_y(value: f64, min_v: f64, max_v: f64) -> f64 {
    if (max_v - min_v).abs() < f64::EPSILON {
        return HEIGHT / 2.0;
    }
    let inner = HEIGHT - 2.0 * PADDING;
    let norm = (value - min_v) / (max_v - min_v);
    PADDING + (1.0 - norm) * inner
}

/// Line chart of an equity curve over time.
///
/// Draws the level series with a dashed guide at 1.0 (the initial
/// investment) and first/last date labels on the x axis.
pub fn line_chart(points: &[(NaiveDate, f64)]) -> String {
    let mut svg = svg_open();

    if points.is_empty() {
        svg.push_str(&format!(
            r#"<text x="288" y="144" text-anchor="middle" fill="{EMPTY_COLOR}">no data</text>"#
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let mut min_v = 1.0_f64;
    let mut max_v = 1.0_f64;
    for (_, v) in points {
        min_v = min_v.min(*v);
        max_v = max_v.max(*v);
    }
    if min_v == max_v {
        min_v -= 0.1;
        max_v += 0.1;
    }

    let inner_width = WIDTH - 2.0 * PADDING;
    let step = if points.len() > 1 {
        inner_width / (points.len() - 1) as f64
    } else {
        0.0
    };

    // Baseline guide at the initial investment level.
    let guide_y = scale_y(1.0, min_v, max_v);
    svg.push_str(&format!(
        r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{GUIDE_COLOR}" stroke-width="1" stroke-dasharray="4 3" />"#,
        x1 = PADDING,
        x2 = WIDTH - PADDING,
        y = guide_y,
    ));

    let coords: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| {
            format!("{:.2},{:.2}", PADDING + i as f64 * step, scale_y(*v, min_v, max_v))
        })
        .collect();
    svg.push_str(&format!(
        r#"<polyline fill="none" stroke="{LINE_COLOR}" stroke-width="1.5" points="{}" />"#,
        coords.join(" ")
    ));

    // Axis labels
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="start" fill="{AXIS_COLOR}">{v:.2}</text>"#,
        x = 4.0,
        y = scale_y(max_v, min_v, max_v) + 4.0,
        v = max_v,
    ));
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="start" fill="{AXIS_COLOR}">{v:.2}</text>"#,
        x = 4.0,
        y = scale_y(min_v, min_v, max_v) + 4.0,
        v = min_v,
    ));
    if let (Some((first, _)), Some((last, _))) = (points.first(), points.last()) {
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="start" fill="{AXIS_COLOR}">{first}</text>"#,
            x = PADDING,
            y = HEIGHT - 8.0,
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end" fill="{AXIS_COLOR}">{last}</text>"#,
            x = WIDTH - PADDING,
            y = HEIGHT - 8.0,
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Bar chart of annual returns, one bar per calendar year.
pub fn bar_chart(bars: &[(i32, f64)]) -> String {
    let mut svg = svg_open();

    if bars.is_empty() {
        svg.push_str(&format!(
            r#"<text x="288" y="144" text-anchor="middle" fill="{EMPTY_COLOR}">no data</text>"#
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let mut min_v = 0.0_f64;
    let mut max_v = 0.0_f64;
    for (_, v) in bars {
        min_v = min_v.min(*v);
        max_v = max_v.max(*v);
    }
    if min_v == max_v {
        min_v -= 0.1;
        max_v += 0.1;
    }

    let inner_width = WIDTH - 2.0 * PADDING;
    let slot = inner_width / bars.len() as f64;
    let bar_width = (slot * 0.6).max(2.0);
    let zero_y = scale_y(0.0, min_v, max_v);

    svg.push_str(&format!(
        r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{GUIDE_COLOR}" stroke-width="1" />"#,
        x1 = PADDING,
        x2 = WIDTH - PADDING,
        y = zero_y,
    ));

    for (i, (year, value)) in bars.iter().enumerate() {
        let x = PADDING + i as f64 * slot + (slot - bar_width) / 2.0;
        let value_y = scale_y(*value, min_v, max_v);
        let (top, height) = if *value >= 0.0 {
            (value_y, zero_y - value_y)
        } else {
            (zero_y, value_y - zero_y)
        };
        let color = if *value >= 0.0 { POSITIVE_COLOR } else { NEGATIVE_COLOR };

        svg.push_str(&format!(
            r#"<rect x="{x:.2}" y="{top:.2}" width="{bar_width:.2}" height="{height:.2}" fill="{color}" />"#,
        ));
        svg.push_str(&format!(
            r#"<text x="{cx:.2}" y="{y:.2}" text-anchor="middle" fill="{AXIS_COLOR}">{year}</text>"#,
            cx = x + bar_width / 2.0,
            y = HEIGHT - 8.0,
        ));
        svg.push_str(&format!(
            r#"<text x="{cx:.2}" y="{ly:.2}" text-anchor="middle" fill="{AXIS_COLOR}">{pct:.1}%</text>"#,
            cx = x + bar_width / 2.0,
            ly = if *value >= 0.0 { top - 4.0 } else { top + height + 12.0 },
            pct = value * 100.0,
        ));
    }

    svg.push_str("</svg>");
    svg
}

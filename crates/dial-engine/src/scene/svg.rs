use std::fmt::Write;

use crate::coords::ViewBox;
use crate::paint::{Color, Stroke};

use super::shapes::{CircleCmd, CircleStyle, LineCmd, TextCmd};
use super::{DrawCmd, Scene};

impl Scene {
    /// Serializes the visible elements, back-to-front, into a standalone SVG document.
    ///
    /// Hidden elements are skipped entirely; the output is a snapshot of what is on
    /// screen right now.
    pub fn to_svg(&mut self, view_box: ViewBox) -> String {
        let mut svg = String::new();

        // Writing into a `String` cannot fail.
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="{} {} {} {}">"#,
            num(view_box.origin.x),
            num(view_box.origin.y),
            num(view_box.width()),
            num(view_box.height()),
        );

        for item in self.visible_in_paint_order() {
            match &item.cmd {
                DrawCmd::Line(line) => write_line(&mut svg, line),
                DrawCmd::Circle(circle) => write_circle(&mut svg, circle),
                DrawCmd::Text(text) => write_text(&mut svg, text),
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn write_line(svg: &mut String, line: &LineCmd) {
    let _ = writeln!(
        svg,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
        num(line.from.x),
        num(line.from.y),
        num(line.to.x),
        num(line.to.y),
        stroke_attrs(Some(line.stroke)),
    );
}

fn write_circle(svg: &mut String, circle: &CircleCmd) {
    let CircleStyle { fill, stroke } = circle.style;
    let _ = writeln!(
        svg,
        r#"  <circle cx="{}" cy="{}" r="{}" {} {}/>"#,
        num(circle.center.x),
        num(circle.center.y),
        num(circle.radius),
        fill_attrs(fill),
        stroke_attrs(stroke),
    );
}

fn write_text(svg: &mut String, text: &TextCmd) {
    let family = text
        .style
        .family
        .as_deref()
        .map(|f| format!(r#" font-family="{}""#, escape(f)))
        .unwrap_or_default();

    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="{}" font-size="{}"{} text-anchor="middle" dominant-baseline="central" {}>{}</text>"#,
        num(text.center.x),
        num(text.center.y),
        num(text.style.size),
        family,
        fill_attrs(Some(text.style.color)),
        escape(&text.text),
    );
}

fn fill_attrs(fill: Option<Color>) -> String {
    match fill {
        None => r#"fill="none""#.to_owned(),
        Some(c) if c.is_opaque() => format!(r#"fill="{}""#, c.to_hex()),
        Some(c) => format!(r#"fill="{}" fill-opacity="{}""#, c.to_hex(), num(c.opacity())),
    }
}

fn stroke_attrs(stroke: Option<Stroke>) -> String {
    match stroke {
        None => r#"stroke="none""#.to_owned(),
        Some(s) if s.color.is_opaque() => {
            format!(r#"stroke="{}" stroke-width="{}""#, s.color.to_hex(), num(s.width))
        }
        Some(s) => format!(
            r#"stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
            s.color.to_hex(),
            num(s.color.opacity()),
            num(s.width)
        ),
    }
}

/// Compact number formatting: at most three decimals, no trailing zeros, no `-0`.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

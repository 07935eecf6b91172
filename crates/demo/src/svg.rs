// File: crates/demo/src/svg.rs
// Summary: Minimal SVG drawing backend for the demo (fixed palette, no fonts).

use std::fmt::Write as _;

use vitals_chart_core::{DrawBackend, RectF, Role, ScreenPoint, Size};

const PALETTE: [&str; 6] = ["#40a0ff", "#28c878", "#ffb347", "#dc5050", "#a070e0", "#40c8c8"];

pub struct SvgBackend {
    size: Size,
    body: String,
}

impl SvgBackend {
    pub fn new(size: Size) -> Self {
        Self { size, body: String::new() }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"#121214\"/>\n{body}</svg>\n",
            w = self.size.width,
            h = self.size.height,
            body = self.body,
        )
    }
}

fn color(role: Role) -> &'static str {
    match role {
        Role::Grid => "#28282d",
        Role::Axis => "#b4b4be",
        Role::TickLabel | Role::CategoryLabel => "#96969f",
        Role::ValueLabel => "#ebebf5",
        Role::Series | Role::Fill => PALETTE[0],
        Role::Segment(i) => PALETTE[i % PALETTE.len()],
    }
}

fn points_attr(points: &[ScreenPoint]) -> String {
    points.iter().map(|p| format!("{:.2},{:.2}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}

fn polar(center: ScreenPoint, r: f32, deg: f64) -> (f32, f32) {
    let rad = deg.to_radians();
    (center.x + r * rad.cos() as f32, center.y + r * rad.sin() as f32)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl DrawBackend for SvgBackend {
    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, role: Role) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\"/>",
            from.x, from.y, to.x, to.y, color(role)
        );
    }

    fn polyline(&mut self, points: &[ScreenPoint], role: Role) {
        let _ = writeln!(
            self.body,
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
            points_attr(points),
            color(role)
        );
    }

    fn polygon(&mut self, points: &[ScreenPoint], role: Role) {
        let _ = writeln!(
            self.body,
            "<polygon points=\"{}\" fill=\"{}\" fill-opacity=\"0.35\"/>",
            points_attr(points),
            color(role)
        );
    }

    fn rect(&mut self, rect: RectF, role: Role) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            rect.left,
            rect.top,
            rect.width(),
            rect.height(),
            color(role)
        );
    }

    fn arc(&mut self, center: ScreenPoint, radius: f32, inner_radius: f32, start_deg: f64, sweep_deg: f64, role: Role) {
        // SVG cannot draw a single 360 degree arc; split just short of the full turn.
        let sweep = sweep_deg.min(359.99);
        let end = start_deg + sweep;
        let large = if sweep > 180.0 { 1 } else { 0 };
        let (x0, y0) = polar(center, radius, start_deg);
        let (x1, y1) = polar(center, radius, end);
        let mut d = format!("M {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large} 1 {x1:.2} {y1:.2} ");
        if inner_radius > 0.0 {
            let (x2, y2) = polar(center, inner_radius, end);
            let (x3, y3) = polar(center, inner_radius, start_deg);
            let _ = write!(d, "L {x2:.2} {y2:.2} A {inner_radius:.2} {inner_radius:.2} 0 {large} 0 {x3:.2} {y3:.2} Z");
        } else {
            let _ = write!(d, "L {:.2} {:.2} Z", center.x, center.y);
        }
        let _ = writeln!(self.body, "<path d=\"{d}\" fill=\"{}\"/>", color(role));
    }

    fn circle(&mut self, center: ScreenPoint, radius: f32, role: Role) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
            center.x, center.y, radius, color(role)
        );
    }

    fn text(&mut self, anchor: ScreenPoint, text: &str, role: Role) {
        let align = match role {
            Role::TickLabel => "end",
            _ => "middle",
        };
        let _ = writeln!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-size=\"11\" text-anchor=\"{}\">{}</text>",
            anchor.x,
            anchor.y,
            color(role),
            align,
            escape(text)
        );
    }
}

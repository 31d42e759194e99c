//! SVG output for sampled and projected curves.
//!
//! The canvas only draws what it is given: points are expected in canvas space
//! already, see `polyline()` and `CoordinateMapper`.

use core::fmt;
use std::io;

use log::debug;
use svg::node::element::{Circle, Line, Polyline, Title};
use svg::node::Text;
use svg::{Document, Node};

use crate::bezier::Bezier;
use crate::config::RenderConfig;
use crate::error::CurveError;
use crate::point2::Point2;
use crate::polyline::polyline;
use crate::NativeFloat;

/// An SVG document of fixed pixel size that curves are appended to
pub struct SvgCanvas {
    document: Document,
    width: u32,
    height: u32,
    elements: usize,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32, title: &str) -> Self {
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .add(Title::new().add(Text::new(title)));
        SvgCanvas {
            document,
            width,
            height,
            elements: 0,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of shapes drawn so far
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Draws one `<line>` between each pair of consecutive points and, if
    /// `marker_radius` is positive, a `<circle>` on every point
    pub fn draw_polyline(
        &mut self,
        points: &[Point2<NativeFloat>],
        line_style: &str,
        marker_style: &str,
        marker_radius: NativeFloat,
    ) {
        if marker_radius > 0.0 {
            for p in points {
                self.push(
                    Circle::new()
                        .set("cx", p.x())
                        .set("cy", p.y())
                        .set("r", marker_radius)
                        .set("style", marker_style),
                );
            }
        }
        for segment in points.windows(2) {
            self.push(
                Line::new()
                    .set("x1", segment[0].x())
                    .set("y1", segment[0].y())
                    .set("x2", segment[1].x())
                    .set("y2", segment[1].y())
                    .set("style", line_style),
            );
        }
    }

    /// Draws the points as a single unfilled `<polyline>`
    pub fn draw_path(&mut self, points: &[Point2<NativeFloat>], style: &str) {
        let coordinates = points
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");
        self.push(
            Polyline::new()
                .set("points", coordinates)
                .set("fill", "none")
                .set("style", style),
        );
    }

    /// Writes the document to `target`
    pub fn write_to<W: io::Write>(&self, target: W) -> io::Result<()> {
        svg::write(target, &self.document)
    }

    fn push<N: Node>(&mut self, node: N) {
        self.document.append(node);
        self.elements += 1;
    }
}

impl fmt::Display for SvgCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.document, f)
    }
}

/// Samples every curve, maps it from the unit square onto the canvas described by
/// `config` and draws it with line segments and sample markers.
/// Returns the SVG document as text.
pub fn render_scene(
    curves: &[Bezier<Point2<NativeFloat>>],
    config: &RenderConfig,
) -> Result<String, CurveError> {
    let mapper = config.mapper()?;
    let mut canvas = SvgCanvas::new(config.width, config.height, &config.title);
    for curve in curves {
        let points = polyline(curve.control_points(), config.steps, &mapper)?;
        canvas.draw_polyline(
            &points,
            &config.line_style,
            &config.marker_style,
            config.marker_radius,
        );
    }
    debug!(
        "rendered {} curves as {} svg elements",
        curves.len(),
        canvas.element_count()
    );
    Ok(canvas.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::random_curves;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draw_polyline_counts() {
        let mut canvas = SvgCanvas::new(100, 50, "test");
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(20.0, 0.0),
        ];
        canvas.draw_polyline(&points, "stroke:black", "fill:red", 1.0);
        assert_eq!(canvas.element_count(), 5);

        let text = canvas.to_string();
        assert_eq!(text.matches("<line").count(), 2);
        assert_eq!(text.matches("<circle").count(), 3);
        assert!(text.contains("<title>"));
        assert!(text.contains("test"));
        assert_eq!(canvas.size(), (100, 50));
    }

    #[test]
    fn markers_are_optional() {
        let mut canvas = SvgCanvas::new(100, 50, "no markers");
        let points = [Point2::new(0.0, 0.0), Point2::new(10.0, 5.0)];
        canvas.draw_polyline(&points, "stroke:black", "fill:red", 0.0);
        assert_eq!(canvas.element_count(), 1);
        assert_eq!(canvas.to_string().matches("<circle").count(), 0);
    }

    #[test]
    fn draw_path_is_one_element() {
        let mut canvas = SvgCanvas::new(10, 10, "path");
        canvas.draw_path(&[Point2::new(0.0, 0.0), Point2::new(2.5, 4.0)], "stroke:blue");
        let text = canvas.to_string();
        assert_eq!(text.matches("<polyline").count(), 1);
        assert!(text.contains("0,0 2.5,4"));
    }

    #[test]
    fn render_scene_draws_every_segment() {
        let config = RenderConfig::default().with_steps(10);
        let mut rng = StdRng::seed_from_u64(42);
        let curves = random_curves(&mut rng, 5, 3).unwrap();
        let text = render_scene(&curves, &config).unwrap();

        assert_eq!(text.matches("<line").count(), 5 * 10);
        assert_eq!(text.matches("<circle").count(), 5 * 11);
        assert!(text.contains("Bezier Curve"));
    }

    #[test]
    fn render_scene_rejects_zero_steps() {
        let config = RenderConfig::default().with_steps(0);
        let mut rng = StdRng::seed_from_u64(42);
        let curves = random_curves(&mut rng, 1, 3).unwrap();
        assert_eq!(
            render_scene(&curves, &config).unwrap_err(),
            CurveError::InvalidSampleCount { steps: 0 }
        );
    }

    #[test]
    fn write_to_matches_display() {
        let canvas = SvgCanvas::new(10, 10, "io");
        let mut buffer = Vec::new();
        canvas.write_to(&mut buffer).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert!(written.contains(&canvas.to_string()));
    }
}

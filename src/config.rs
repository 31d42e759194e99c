use crate::error::CurveError;
use crate::mapping::{CoordinateMapper, Rect};
use crate::point2::Point2;
use crate::{NativeFloat, DEFAULT_STEPS};

/// Settings for rendering a scene of curves onto a canvas.
/// The defaults draw 400 random cubics on a 1920 x 1080 canvas, flattened into 120 segments each.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Segments per curve
    pub steps: usize,
    /// Border added around the unit square so curves do not touch the canvas edge
    pub margin: NativeFloat,
    /// Number of curves a generated scene contains
    pub curve_count: usize,
    /// Degree of generated curves
    pub degree: usize,
    pub title: String,
    /// Inline style of the segments between samples
    pub line_style: String,
    /// Inline style of the sample markers
    pub marker_style: String,
    /// Radius of the sample markers, no markers are drawn if this is 0
    pub marker_radius: NativeFloat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1920,
            height: 1080,
            steps: DEFAULT_STEPS,
            margin: 0.01,
            curve_count: 400,
            degree: 3,
            title: "Bezier Curve".to_string(),
            line_style: "stroke:rgb(0,0,0)".to_string(),
            marker_style: "fill:rgb(0,255,0);stroke:rgb(255,0,0)".to_string(),
            marker_radius: 1.0,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_curves(mut self, curve_count: usize, degree: usize) -> Self {
        self.curve_count = curve_count;
        self.degree = degree;
        self
    }

    /// The curve space: the unit square grown by `margin`
    pub fn source_rect(&self) -> Rect<NativeFloat> {
        Rect::unit().expand(self.margin)
    }

    /// The canvas space: (0, 0) to (width, height)
    pub fn target_rect(&self) -> Rect<NativeFloat> {
        Rect::new(
            Point2::origin(),
            Point2::new(self.width as NativeFloat, self.height as NativeFloat),
        )
    }

    /// The mapping from curve space onto the canvas.
    /// Fails if a negative margin collapses the source rectangle.
    pub fn mapper(&self) -> Result<CoordinateMapper<NativeFloat>, CurveError> {
        CoordinateMapper::new(self.source_rect(), self.target_rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn default_maps_unit_square_inside_canvas() {
        let config = RenderConfig::default();
        let mapper = config.mapper().unwrap();

        let origin = mapper.apply(Point2::origin());
        let corner = mapper.apply(Point2::new(1.0, 1.0));
        assert!(origin.x() > 0.0 && origin.y() > 0.0);
        assert!(corner.x() < 1920.0 && corner.y() < 1080.0);

        let center = mapper.apply(Point2::new(0.5, 0.5));
        assert!(center.approx_eq(Point2::new(960.0, 540.0), EPSILON));
    }

    #[test]
    fn builders_override_defaults() {
        let config = RenderConfig::default()
            .with_size(800, 600)
            .with_steps(16)
            .with_curves(3, 5);
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.steps, 16);
        assert_eq!((config.curve_count, config.degree), (3, 5));
        assert_eq!(config.target_rect().upper_right(), Point2::new(800.0, 600.0));
    }

    #[test]
    fn collapsing_margin_is_degenerate() {
        let config = RenderConfig {
            margin: -0.5,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.mapper(),
            Err(CurveError::DegenerateMapping { .. })
        ));
    }
}

extern crate plotters;
use plotters::prelude::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use bezplot::scene::chained_curves;
use bezplot::{Bezier, Point2, DEFAULT_STEPS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // control points for a degree 5 curve
    let cpoints = vec![
        (0f64, 1.77f64),
        (1.1f64, -1f64),
        (4.3f64, 3f64),
        (3.2f64, -4f64),
        (7.3f64, 2.7f64),
        (8.9f64, 1.7f64),
    ];

    let bezier = Bezier::new(cpoints.iter().map(|&p| Point2::from(p)))?;

    // render the curve to the default accuracy
    let bezier_graph: Vec<(f64, f64)> = bezier
        .sample(DEFAULT_STEPS)?
        .into_iter()
        .map(|p| p.into())
        .collect();

    // a tangent continuous chain of cubics, scaled up into the same chart
    let mut rng = StdRng::seed_from_u64(7);
    let chain = chained_curves(&mut rng, 6, 3)?;

    let root = BitMapBackend::new("bezier_curves.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bezier Curves", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-1f64..10f64, -5f64..5f64)?;

    chart.configure_mesh().draw()?;

    // draw the control points of B(t)
    chart
        .draw_series(PointSeries::of_element(
            cpoints.clone(),
            5,
            &BLUE,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style)
                    + Text::new(
                        format!("{:?}", coord),
                        (0, 15),
                        ("sans-serif", 15).into_font(),
                    )
            },
        ))?
        .label("Control Points of B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // draw the control polygon
    chart
        .draw_series(LineSeries::new(cpoints, BLUE.mix(0.4)))?
        .label("Control Polygon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.mix(0.4)));

    // draw the actual bezier curve
    chart
        .draw_series(LineSeries::new(bezier_graph, &RED))?
        .label("B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    for curve in &chain {
        let points: Vec<(f64, f64)> = curve
            .sample(DEFAULT_STEPS)?
            .into_iter()
            .map(|p| (p.x() * 4.0 + 4.0, p.y() * 4.0 - 4.5))
            .collect();
        chart.draw_series(LineSeries::new(points, &GREEN))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

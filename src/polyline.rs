//! Sampling and projection composed into one call: control points in, canvas points out.

use core::fmt::Debug;

use log::debug;
use num_traits::Float;

use crate::bezier::Bezier;
use crate::error::CurveError;
use crate::mapping::CoordinateMapper;
use crate::point2::Point2;

/// Samples the curve defined by `control_points` in `steps` segments and maps
/// every sample through `mapper`. The result has `steps + 1` points, ready to be
/// drawn as one connected polyline.
pub fn polyline<T>(
    control_points: &[Point2<T>],
    steps: usize,
    mapper: &CoordinateMapper<T>,
) -> Result<Vec<Point2<T>>, CurveError>
where
    T: Float + Default + Debug,
{
    let curve = Bezier::new(control_points.iter().copied())?;
    Ok(curve.samples(steps)?.map(|p| mapper.apply(p)).collect())
}

/// Runs `polyline()` for every curve, in order.
/// Fails on the first curve with invalid input.
pub fn polylines<'a, T, I>(
    curves: I,
    steps: usize,
    mapper: &CoordinateMapper<T>,
) -> Result<Vec<Vec<Point2<T>>>, CurveError>
where
    T: Float + Default + Debug + 'a,
    I: IntoIterator<Item = &'a Bezier<Point2<T>>>,
{
    let result: Vec<Vec<Point2<T>>> = curves
        .into_iter()
        .map(|curve| polyline(curve.control_points(), steps, mapper))
        .collect::<Result<_, _>>()?;
    debug!("projected {} curves in {} steps each", result.len(), steps);
    Ok(result)
}

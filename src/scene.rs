//! Random scenes of curves in the unit square.
//!
//! The randomness source is always passed in, so the same seed produces the same scene.

use log::debug;
use rand::Rng;

use crate::bezier::Bezier;
use crate::error::CurveError;
use crate::point2::Point2;
use crate::NativeFloat;

/// A point uniformly distributed in the unit square [0, 1) x [0, 1)
pub fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Point2<NativeFloat> {
    Point2::new(rng.gen(), rng.gen())
}

/// A curve of `degree` with all degree + 1 control points random
pub fn random_curve<R: Rng + ?Sized>(
    rng: &mut R,
    degree: usize,
) -> Result<Bezier<Point2<NativeFloat>>, CurveError> {
    Bezier::new((0..=degree).map(|_| random_point(rng)))
}

/// `count` independent random curves of `degree`
pub fn random_curves<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    degree: usize,
) -> Result<Vec<Bezier<Point2<NativeFloat>>>, CurveError> {
    debug!("generating {} random curves of degree {}", count, degree);
    (0..count).map(|_| random_curve(rng, degree)).collect()
}

/// `count` random curves of `degree` joined end to end.
/// Every curve starts where the previous one ends and its second control point is the
/// previous curve's second to last control point reflected through that shared end point,
/// so the tangent is continuous across the joint.
/// Degree 0 curves have no tangent, the whole chain sits on the first random point.
pub fn chained_curves<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    degree: usize,
) -> Result<Vec<Bezier<Point2<NativeFloat>>>, CurveError> {
    debug!("generating a chain of {} curves of degree {}", count, degree);
    let mut curves: Vec<Bezier<Point2<NativeFloat>>> = Vec::with_capacity(count);
    for _ in 0..count {
        let curve = match curves.last() {
            None => random_curve(rng, degree)?,
            Some(previous) if degree == 0 => previous.clone(),
            Some(previous) => {
                let points = previous.control_points();
                let end = points[points.len() - 1];
                let before_end = points[points.len() - 2];
                let reflected = end + (end - before_end);

                let mut next = Vec::with_capacity(degree + 1);
                next.push(end);
                next.push(reflected);
                next.extend((2..=degree).map(|_| random_point(rng)));
                Bezier::new(next)?
            }
        };
        curves.push(curve);
    }
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn points_stay_in_unit_square() {
        let mut rng = StdRng::seed_from_u64(4040);
        for _ in 0..1000 {
            let p = random_point(&mut rng);
            assert!((0.0..1.0).contains(&p.x()));
            assert!((0.0..1.0).contains(&p.y()));
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let a = random_curves(&mut StdRng::seed_from_u64(7), 400, 3).unwrap();
        let b = random_curves(&mut StdRng::seed_from_u64(7), 400, 3).unwrap();
        let c = random_curves(&mut StdRng::seed_from_u64(8), 400, 3).unwrap();
        assert_eq!(a.len(), 400);
        assert!(a.iter().all(|curve| curve.degree() == 3));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn arbitrary_counts_and_degrees() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_curves(&mut rng, 0, 3).unwrap().is_empty());
        let curves = random_curves(&mut rng, 3, 9).unwrap();
        assert!(curves.iter().all(|curve| curve.control_points().len() == 10));
        assert_eq!(random_curve(&mut rng, 0).unwrap().degree(), 0);
    }

    #[test]
    fn chain_is_tangent_continuous() {
        let mut rng = StdRng::seed_from_u64(99);
        let chain = chained_curves(&mut rng, 12, 3).unwrap();
        assert_eq!(chain.len(), 12);

        for pair in chain.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            assert_eq!(previous.end(), next.start());

            let outgoing = previous.derivative().eval(1.0);
            let incoming = next.derivative().eval(0.0);
            assert!(outgoing.approx_eq(incoming, EPSILON));
        }
    }

    #[test]
    fn chain_of_lines_continues_straight() {
        let mut rng = StdRng::seed_from_u64(3);
        let chain = chained_curves(&mut rng, 4, 1).unwrap();
        let direction = chain[0].end() - chain[0].start();
        for curve in &chain[1..] {
            let d = curve.end() - curve.start();
            assert!(d.approx_eq(direction, EPSILON));
        }
    }

    #[test]
    fn chain_of_points_repeats_first() {
        let mut rng = StdRng::seed_from_u64(5);
        let chain = chained_curves(&mut rng, 3, 0).unwrap();
        assert!(chain.iter().all(|curve| curve.start() == chain[0].start()));
    }
}

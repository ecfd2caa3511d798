//! Random translation offsets.
//!
//! Every point gets an independent pair of uniform offsets in
//! `[0, MAX_OFFSET)`. Offsets are never negative, so a translated point
//! always sits up and to the right of its original position.

use crate::data::Point;
use rand::Rng;

/// Exclusive upper bound of a random offset.
pub const MAX_OFFSET: f64 = 0.1;

/// Draw one uniform random offset in `[0, MAX_OFFSET)`.
pub fn random_offset(rng: &mut impl Rng) -> f64 {
    rng.random::<f64>() * MAX_OFFSET
}

/// Translate every point in place by its own pair of random offsets.
///
/// Two draws per point: dx and dy are independent of each other and of every
/// other point's offsets. Order and length of the slice are unchanged.
pub fn translate_points(points: &mut [Point], rng: &mut impl Rng) {
    for point in points.iter_mut() {
        let dx = random_offset(rng);
        let dy = random_offset(rng);
        point.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn offsets_stay_in_half_open_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let offset = random_offset(&mut rng);
            assert!((0.0..MAX_OFFSET).contains(&offset));
        }
    }

    #[test]
    fn origin_point_lands_inside_offset_box() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut points = vec![Point::new(0.0, 0.0)];
        translate_points(&mut points, &mut rng);

        assert!((0.0..MAX_OFFSET).contains(&points[0].x()));
        assert!((0.0..MAX_OFFSET).contains(&points[0].y()));
    }

    #[test]
    fn order_and_length_are_preserved() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut points: Vec<Point> = (0..50)
            .map(|i| Point::new(i as f64, -(i as f64)))
            .collect();
        translate_points(&mut points, &mut rng);

        assert_eq!(points.len(), 50);
        for (i, point) in points.iter().enumerate() {
            // Point i derives only from its own pre-state plus offsets < 0.1.
            let x0 = i as f64;
            let y0 = -(i as f64);
            assert!(point.x() >= x0 && point.x() < x0 + MAX_OFFSET);
            assert!(point.y() >= y0 && point.y() < y0 + MAX_OFFSET);
        }
    }
}

use gridstar_core::Point;

/// Scale applied to step costs: 10 per orthogonal step, 14 per diagonal.
pub const STEP_SCALE: i32 = 10;

/// Euclidean distance between two points, scaled by `scale` and truncated
/// toward zero.
///
/// With the default scale of 10 this is not admissible against
/// [`step_cost`] on long diagonals: `(0,0)→(10,10)` estimates 141 while ten
/// diagonal steps cost 140.
#[inline]
pub fn heuristic(a: Point, b: Point, scale: i32) -> i32 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (f64::from(scale) * (dx * dx + dy * dy).sqrt()) as i32
}

/// Cost of moving between two adjacent cells.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    heuristic(from, to, STEP_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_costs() {
        let o = Point::new(4, 4);
        assert_eq!(step_cost(o, Point::new(5, 4)), 10);
        assert_eq!(step_cost(o, Point::new(4, 3)), 10);
        assert_eq!(step_cost(o, Point::new(5, 5)), 14);
        assert_eq!(step_cost(o, Point::new(3, 5)), 14);
        assert_eq!(step_cost(o, o), 0);
    }

    #[test]
    fn heuristic_truncates() {
        assert_eq!(heuristic(Point::new(0, 0), Point::new(3, 4), 10), 50);
        assert_eq!(heuristic(Point::new(0, 0), Point::new(1, 2), 10), 22);
        assert_eq!(heuristic(Point::new(0, 0), Point::new(1, 2), 0), 0);
    }

    #[test]
    fn heuristic_overestimates_long_diagonals() {
        // Known approximation: the estimate exceeds the real cost of a
        // straight diagonal run once the truncation error of 14 vs 14.14
        // per step accumulates past one unit.
        let a = Point::new(0, 0);
        let b = Point::new(10, 10);
        let walked: i32 = (0..10)
            .map(|i| step_cost(Point::new(i, i), Point::new(i + 1, i + 1)))
            .sum();
        assert_eq!(walked, 140);
        assert_eq!(heuristic(a, b, STEP_SCALE), 141);
        assert!(heuristic(a, b, STEP_SCALE) > walked);
    }
}

//! Ear-clipping triangulation for simple polygons.

use ashlar_kernel_math::Point2;

const EPS: f64 = 1e-12;

/// Triangulate a simple counter-clockwise polygon.
///
/// Returns index triples into `points`. Handles the concave profiles
/// used for moulding cross-sections; holes are not supported.
pub fn ear_clip(points: &[Point2]) -> Vec<[usize; 3]> {
    let n = points.len();
    let mut idx: Vec<usize> = (0..n).collect();
    let mut tris = Vec::with_capacity(n.saturating_sub(2));

    while idx.len() > 3 {
        let m = idx.len();
        let mut clipped = false;
        for i in 0..m {
            let prev = idx[(i + m - 1) % m];
            let cur = idx[i];
            let next = idx[(i + 1) % m];
            if cross(&points[prev], &points[cur], &points[next]) <= EPS {
                continue; // reflex or collinear corner
            }
            let blocked = idx.iter().any(|&j| {
                j != prev
                    && j != cur
                    && j != next
                    && in_triangle(&points[j], &points[prev], &points[cur], &points[next])
            });
            if blocked {
                continue;
            }
            tris.push([prev, cur, next]);
            idx.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            // Numerical dead end (collinear runs); clip the first corner
            // to guarantee termination. Degenerate triangles contribute
            // zero area downstream.
            tris.push([idx[m - 1], idx[0], idx[1]]);
            idx.remove(0);
        }
    }
    tris.push([idx[0], idx[1], idx[2]]);
    tris
}

fn cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

// Closed containment: a vertex exactly on an ear edge or diagonal
// still blocks the ear, or a reflex corner on the diagonal would let
// the clipped triangle spill outside the polygon.
fn in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    cross(a, b, p) >= -EPS && cross(b, c, p) >= -EPS && cross(c, a, p) >= -EPS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri_area(points: &[Point2], t: &[usize; 3]) -> f64 {
        cross(&points[t[0]], &points[t[1]], &points[t[2]]).abs() / 2.0
    }

    #[test]
    fn test_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let tris = ear_clip(&pts);
        assert_eq!(tris.len(), 2);
        let area: f64 = tris.iter().map(|t| tri_area(&pts, t)).sum();
        assert!((area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_on_triangle_edge_counts_as_inside() {
        // A reflex corner sitting exactly on a candidate diagonal must
        // block the ear.
        let a = Point2::new(0.0, 2.0);
        let b = Point2::new(2.0, 0.0);
        let c = Point2::new(2.0, 1.0);
        assert!(in_triangle(&Point2::new(1.0, 1.0), &a, &b, &c));
    }

    #[test]
    fn test_concave_l_shape() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let tris = ear_clip(&pts);
        assert_eq!(tris.len(), 4);
        let area: f64 = tris.iter().map(|t| tri_area(&pts, t)).sum();
        assert!((area - 3.0).abs() < 1e-12);
    }
}

use super::types::{Point, Polygon};

/// Squared Euclidean distance; every radius predicate compares against `r²`.
#[inline]
pub fn dist2(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}

/// Shoelace area with sign: positive for counterclockwise rings in math
/// orientation. Degenerate rings return 0.
pub fn signed_area(poly: &Polygon) -> f64 {
    if poly.is_degenerate() {
        return 0.0;
    }
    let mut a = 0.0;
    for (p, q) in poly.edges() {
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// Absolute shoelace area in squared pixels.
#[inline]
pub fn polygon_area(poly: &Polygon) -> f64 {
    signed_area(poly).abs()
}

/// Area centroid of a ring with non-zero area.
pub fn area_centroid(poly: &Polygon) -> Option<Point> {
    let a = signed_area(poly);
    if a.abs() < 1e-18 {
        return None;
    }
    let (mut cx, mut cy) = (0.0, 0.0);
    for (p, q) in poly.edges() {
        let cross = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    Some(Point::new(cx / (6.0 * a), cy / (6.0 * a)))
}

/// Ray casting towards +x. Half-open edge rule `(yi > y) != (yj > y)` keeps
/// vertex hits from being counted twice.
pub fn point_in_polygon(p: Point, poly: &Polygon) -> bool {
    if poly.is_degenerate() {
        return false;
    }
    let mut inside = false;
    for (a, b) in poly.edges() {
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Winding number of the ring around `p` (Sunday's crossing formulation).
pub fn winding_number(p: Point, poly: &Polygon) -> i32 {
    if poly.is_degenerate() {
        return 0;
    }
    let mut wn = 0;
    for (a, b) in poly.edges() {
        let side = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            wn -= 1;
        }
    }
    wn
}

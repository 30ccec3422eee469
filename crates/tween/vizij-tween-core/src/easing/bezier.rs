//! Cubic-bezier timing curves (CSS `cubic-bezier(x1, y1, x2, y2)`).

/// One coordinate of a cubic with control values `p0..p3` at parameter `t`.
#[inline]
fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Eased progress of a `cubic-bezier(x1, y1, x2, y2)` timing curve. The ends are pinned at
/// (0, 0) and (1, 1); `t` is the x coordinate and the result is y at the same curve parameter.
pub fn bezier_ease(t: f64, ctrl: [f64; 4]) -> f64 {
    let [x1, y1, x2, y2] = ctrl;
    let t = t.clamp(0.0, 1.0);
    // identity curve
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // x1 and x2 in [0, 1] keep x(s) increasing, so bisection on s finds x(s) = t
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    let mut mid = t;
    for _ in 0..48 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-9 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

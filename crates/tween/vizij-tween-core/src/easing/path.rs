//! SVG path curves.
//!
//! The path lives in a 100x100 box with y pointing down, so `M0,100 L100,0` is linear.
//! Supported commands: M L H V C S Q T Z, absolute and relative. Curves are flattened into a
//! polyline once at compile time; evaluation is a scan over that polyline.

use crate::error::CurveError;

const BOX: f64 = 100.0;
const CURVE_STEPS: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Cmd(char),
    Num(f64),
}

fn invalid(path: &str, reason: impl Into<String>) -> CurveError {
    CurveError::InvalidPath {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn tokenize(path: &str) -> Result<Vec<Token>, CurveError> {
    let bytes = path.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() || c == ',' {
            i += 1;
        } else if "MmLlHhVvCcSsQqTtZz".contains(c) {
            tokens.push(Token::Cmd(c));
            i += 1;
        } else if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() {
            let start = i;
            i += 1;
            let mut seen_dot = c == '.';
            while i < bytes.len() {
                let d = bytes[i] as char;
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !seen_dot {
                    seen_dot = true;
                    i += 1;
                } else if (d == 'e' || d == 'E') && i + 1 < bytes.len() {
                    i += 1;
                    if bytes[i] == b'-' || bytes[i] == b'+' {
                        i += 1;
                    }
                } else {
                    break;
                }
            }
            let text = &path[start..i];
            let n = text
                .parse::<f64>()
                .map_err(|_| invalid(path, format!("bad number `{text}`")))?;
            tokens.push(Token::Num(n));
        } else {
            return Err(invalid(path, format!("unexpected character `{c}`")));
        }
    }
    Ok(tokens)
}

/// Pull `N` numbers following the current command.
fn take<const N: usize>(
    path: &str,
    tokens: &[Token],
    pos: &mut usize,
    cmd: char,
) -> Result<[f64; N], CurveError> {
    let mut out = [0.0; N];
    for slot in out.iter_mut() {
        match tokens.get(*pos) {
            Some(Token::Num(n)) => *slot = *n,
            _ => return Err(invalid(path, format!("`{cmd}` expects {N} numbers"))),
        }
        *pos += 1;
    }
    Ok(out)
}

fn cubic(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64), p3: (f64, f64), t: f64) -> (f64, f64) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

fn quadratic(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64), t: f64) -> (f64, f64) {
    let u = 1.0 - t;
    (
        u * u * p0.0 + 2.0 * u * t * p1.0 + t * t * p2.0,
        u * u * p0.1 + 2.0 * u * t * p1.1 + t * t * p2.1,
    )
}

fn push_cubic(
    points: &mut Vec<(f64, f64)>,
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
) {
    for step in 1..=CURVE_STEPS {
        points.push(cubic(p0, p1, p2, p3, step as f64 / CURVE_STEPS as f64));
    }
}

fn push_quadratic(points: &mut Vec<(f64, f64)>, p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) {
    for step in 1..=CURVE_STEPS {
        points.push(quadratic(p0, p1, p2, step as f64 / CURVE_STEPS as f64));
    }
}

/// Mirror of control point `cp` around `cur`; `cur` itself when there is none.
fn reflect(cp: Option<(f64, f64)>, cur: (f64, f64)) -> (f64, f64) {
    match cp {
        Some(cp) => (2.0 * cur.0 - cp.0, 2.0 * cur.1 - cp.1),
        None => cur,
    }
}

/// Flatten path data into a polyline of (x, y) points.
fn flatten(path: &str) -> Result<Vec<(f64, f64)>, CurveError> {
    let tokens = tokenize(path)?;
    let mut points: Vec<(f64, f64)> = Vec::new();
    let mut cur = (0.0, 0.0);
    let mut start = (0.0, 0.0);
    let mut pos = 0;
    let mut cmd: Option<char> = None;
    // second control point of the previous C/S, control point of the previous Q/T
    let mut last_cubic: Option<(f64, f64)> = None;
    let mut last_quad: Option<(f64, f64)> = None;

    while pos < tokens.len() {
        match tokens[pos] {
            Token::Cmd(c) => {
                cmd = Some(c);
                pos += 1;
                if c == 'Z' || c == 'z' {
                    cur = start;
                    points.push(cur);
                    cmd = None;
                    last_cubic = None;
                    last_quad = None;
                }
                continue;
            }
            // numbers repeat the previous command
            Token::Num(_) => {}
        }
        let c = cmd.ok_or_else(|| invalid(path, "path must start with a command"))?;
        let rel = c.is_ascii_lowercase();
        let base = if rel { cur } else { (0.0, 0.0) };
        let upper = c.to_ascii_uppercase();
        match upper {
            'M' => {
                let [x, y] = take::<2>(path, &tokens, &mut pos, c)?;
                cur = (base.0 + x, base.1 + y);
                start = cur;
                points.push(cur);
                // subsequent pairs are line-tos
                cmd = Some(if rel { 'l' } else { 'L' });
            }
            'L' => {
                let [x, y] = take::<2>(path, &tokens, &mut pos, c)?;
                cur = (base.0 + x, base.1 + y);
                points.push(cur);
            }
            'H' => {
                let [x] = take::<1>(path, &tokens, &mut pos, c)?;
                cur = (base.0 + x, cur.1);
                points.push(cur);
            }
            'V' => {
                let [y] = take::<1>(path, &tokens, &mut pos, c)?;
                cur = (cur.0, base.1 + y);
                points.push(cur);
            }
            'C' => {
                let [x1, y1, x2, y2, x, y] = take::<6>(path, &tokens, &mut pos, c)?;
                let p0 = cur;
                let p1 = (base.0 + x1, base.1 + y1);
                let p2 = (base.0 + x2, base.1 + y2);
                let p3 = (base.0 + x, base.1 + y);
                push_cubic(&mut points, p0, p1, p2, p3);
                last_cubic = Some(p2);
                cur = p3;
            }
            'S' => {
                let [x2, y2, x, y] = take::<4>(path, &tokens, &mut pos, c)?;
                let p0 = cur;
                let p1 = reflect(last_cubic, cur);
                let p2 = (base.0 + x2, base.1 + y2);
                let p3 = (base.0 + x, base.1 + y);
                push_cubic(&mut points, p0, p1, p2, p3);
                last_cubic = Some(p2);
                cur = p3;
            }
            'Q' => {
                let [x1, y1, x, y] = take::<4>(path, &tokens, &mut pos, c)?;
                let p0 = cur;
                let p1 = (base.0 + x1, base.1 + y1);
                let p2 = (base.0 + x, base.1 + y);
                push_quadratic(&mut points, p0, p1, p2);
                last_quad = Some(p1);
                cur = p2;
            }
            'T' => {
                let [x, y] = take::<2>(path, &tokens, &mut pos, c)?;
                let p0 = cur;
                let p1 = reflect(last_quad, cur);
                let p2 = (base.0 + x, base.1 + y);
                push_quadratic(&mut points, p0, p1, p2);
                last_quad = Some(p1);
                cur = p2;
            }
            other => return Err(invalid(path, format!("unsupported command `{other}`"))),
        }
        // smooth variants only reflect a control point of the same curve family
        if upper != 'C' && upper != 'S' {
            last_cubic = None;
        }
        if upper != 'Q' && upper != 'T' {
            last_quad = None;
        }
    }

    if points.len() < 2 {
        return Err(invalid(path, "path needs at least two points"));
    }
    Ok(points)
}

/// Compiled path curve: progress -> eased progress.
#[derive(Debug, Clone)]
pub struct PathCurve {
    points: Vec<(f64, f64)>,
    min_x: f64,
    max_x: f64,
}

impl PathCurve {
    pub fn parse(path: &str) -> Result<Self, CurveError> {
        let points = flatten(path)?;
        let min_x = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            points,
            min_x,
            max_x,
        })
    }

    /// `1 - y(x) / 100` where `x = progress * 100`, clamped to the path's x range.
    /// NaN progress yields NaN.
    pub fn sample(&self, progress: f64) -> f64 {
        if progress.is_nan() {
            return f64::NAN;
        }
        let x = (progress * BOX).clamp(self.min_x, self.max_x);
        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            let (lo, hi) = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
            if x < lo || x > hi {
                continue;
            }
            let span = b.0 - a.0;
            let y = if span.abs() < f64::EPSILON {
                b.1
            } else {
                a.1 + (b.1 - a.1) * (x - a.0) / span
            };
            return 1.0 - y / BOX;
        }
        // the windows span [min_x, max_x], so a clamped x always lands in one of them
        1.0 - self.points[self.points.len() - 1].1 / BOX
    }
}

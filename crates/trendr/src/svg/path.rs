use crate::geom::{Point, check_for_collinear_points, get_distance_between, move_to};
use crate::svg::util::fmt_coord_into;
use crate::{Error, Result, SmoothPathOptions};

fn emit_pair(out: &mut String, p: Point) {
    fmt_coord_into(out, p.x);
    out.push(',');
    fmt_coord_into(out, p.y);
}

fn emit_cmd_pair(out: &mut String, cmd: char, p: Point) {
    out.push(cmd);
    out.push(' ');
    emit_pair(out, p);
}

fn emit_cmd_smooth(out: &mut String, control: Point, end: Point) {
    emit_cmd_pair(out, 'S', control);
    out.push(' ');
    emit_pair(out, end);
}

fn validate_points(points: &[Point]) -> Result<(Point, &[Point])> {
    let Some((first, rest)) = points.split_first() else {
        return Err(Error::EmptySequence);
    };
    for (index, p) in points.iter().enumerate() {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(Error::InvalidCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }
    }
    Ok((*first, rest))
}

/// Ported from `react-trend` `buildLinearPath` (`react-trend@1.2.5`).
///
/// The very first instruction is a move; every later point is a line.
pub fn build_linear_path(points: &[Point]) -> Result<String> {
    let (first, rest) = validate_points(points)?;

    let mut out = String::with_capacity(points.len().saturating_mul(16));
    emit_cmd_pair(&mut out, 'M', first);
    for p in rest {
        out.push('\n');
        emit_cmd_pair(&mut out, 'L', *p);
    }

    Ok(out)
}

/// Ported from `react-trend` `buildSmoothPath` (`react-trend@1.2.5`).
///
/// Interior vertices get a rounded corner unless they are exactly collinear
/// with their neighbors. The corner radius is clamped at each vertex to half
/// the smaller neighbor distance, and the clamp is sticky for the rest of
/// the sequence (upstream threads one shared radius variable through its
/// reduce; here that is explicit loop state, never re-widened).
pub fn build_smooth_path(points: &[Point], options: &SmoothPathOptions) -> Result<String> {
    let (first, rest) = validate_points(points)?;

    let mut out = String::with_capacity(points.len().saturating_mul(32));
    emit_cmd_pair(&mut out, 'M', first);

    let mut radius = options.radius;

    for (index, p) in rest.iter().enumerate() {
        let prev = if index == 0 { first } else { rest[index - 1] };

        // The last point, and collinear interior points, stay sharp.
        let next = match rest.get(index + 1) {
            Some(next) if !check_for_collinear_points(prev, *p, *next) => *next,
            _ => {
                out.push('\n');
                emit_cmd_pair(&mut out, 'L', *p);
                continue;
            }
        };

        let distance_from_prev = get_distance_between(prev, *p);
        let distance_from_next = get_distance_between(next, *p);
        let threshold = distance_from_prev.min(distance_from_next);
        if threshold / 2.0 < radius {
            radius = threshold / 2.0;
        }

        let before = move_to(prev, *p, radius);
        let after = move_to(next, *p, radius);

        out.push('\n');
        emit_cmd_pair(&mut out, 'L', before);
        out.push('\n');
        emit_cmd_smooth(&mut out, *p, after);
    }

    Ok(out)
}

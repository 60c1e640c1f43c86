// JS-parity number formatting (split from path emission).

/// Writes a coordinate the way V8 stringifies a JS number.
///
/// Upstream interpolates raw JS numbers into path data; matching its output
/// byte-for-byte needs V8's number-to-string, not Rust's default shortest
/// round-trippable formatting (the two can disagree on tie-breaking).
pub(crate) fn fmt_coord_into(out: &mut String, mut v: f64) {
    if !v.is_finite() {
        out.push_str("0");
        return;
    }
    if v == -0.0 {
        v = 0.0;
    }
    let mut buf = ryu_js::Buffer::new();
    out.push_str(buf.format_finite(v));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt_coord(v: f64) -> String {
        let mut out = String::new();
        fmt_coord_into(&mut out, v);
        out
    }

    #[test]
    fn fmt_coord_matches_js_number_to_string() {
        assert_eq!(fmt_coord(8.0), "8");
        assert_eq!(fmt_coord(0.0), "0");
        assert_eq!(fmt_coord(-0.0), "0");
        assert_eq!(fmt_coord(2.5), "2.5");
        assert_eq!(fmt_coord(-3.25), "-3.25");
        assert_eq!(fmt_coord(95.5), "95.5");
        assert_eq!(fmt_coord(0.000001), "0.000001");
        assert_eq!(fmt_coord(1e-7), "1e-7");
        assert_eq!(fmt_coord(1e21), "1e+21");
    }

    #[test]
    fn fmt_coord_guards_non_finite_values() {
        assert_eq!(fmt_coord(f64::NAN), "0");
        assert_eq!(fmt_coord(f64::INFINITY), "0");
        assert_eq!(fmt_coord(f64::NEG_INFINITY), "0");
    }
}

use std::fmt::{self, Display};

/// Significant digits printed by `Compact`.
const PRECISION: usize = 6;

/// Prints an `f32` the way a default-configured C++ output stream does (`%g`, six significant
/// digits): `2` rather than `2.0`, `-0.71` rather than `-0.71000004`, `1.23457e+06` for large
/// magnitudes.
#[derive(Debug, Clone, Copy)]
pub struct Compact(pub f32);

/// Drops trailing zeros of a fractional part, and the decimal point if nothing is left after it.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }

        // the exponent must be the one left after rounding to PRECISION digits
        let sci = format!("{:.*e}", PRECISION - 1, v);
        let Some((mantissa, exp)) = sci.split_once('e') else {
            return write!(f, "{v}");
        };
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

        if (-4..PRECISION as i32).contains(&exp) {
            let decimals = (PRECISION as i32 - 1 - exp) as usize;
            let fixed = format!("{v:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        } else {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
        }
    }
}

/// Prints a pair as `{a,b}`.
#[derive(Debug, Clone, Copy)]
pub struct Pair<'a>(pub &'a [f32]);

impl Display for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", Compact(*v))?;
        }
        f.write_str("}")
    }
}

// File: crates/chronology-core/src/formatter.rs
// Summary: Tick label formatters (order-of-magnitude, %g-style, engineering prefixes).

#[derive(Clone, Debug, PartialEq)]
pub enum Formatter {
    /// Empty labels (typical for minor ticks).
    Null,
    /// Signed order-of-magnitude notation in `base`: `10^3`, `-10^2`, `2×10^3`.
    LogSciNotation { base: u32 },
    /// `%g` with the given number of significant digits.
    General { precision: usize },
    /// SI-prefixed engineering notation: `2 k`, `-5 M`.
    Engineering { places: usize },
}

impl Default for Formatter {
    fn default() -> Self { Formatter::General { precision: 3 } }
}

impl Formatter {
    pub fn format(&self, x: f64) -> String {
        match *self {
            Formatter::Null => String::new(),
            Formatter::LogSciNotation { base } => format_log_sci(x, base),
            Formatter::General { precision } => format_general(x, precision),
            Formatter::Engineering { places } => format_engineering(x, places),
        }
    }

    pub fn format_ticks(&self, ticks: &[f64]) -> Vec<String> {
        ticks.iter().map(|&t| self.format(t)).collect()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}

/// C-style `%.{precision}g`.
pub fn format_general(x: f64, precision: usize) -> String {
    if x == 0.0 { return "0".to_string(); }
    if !x.is_finite() { return format!("{x}"); }
    let p = precision.max(1);
    // let the formatter do the rounding, then read the exponent back
    let sci = format!("{:.*e}", p - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn format_log_sci(x: f64, base: u32) -> String {
    if x == 0.0 { return "0".to_string(); }
    if !x.is_finite() || base < 2 { return format_general(x, 3); }
    let sign = if x < 0.0 { "-" } else { "" };
    let b = base as f64;
    let exact = x.abs().ln() / b.ln();
    let nearest = exact.round();
    if (exact - nearest).abs() < 1e-9 {
        return format!("{sign}{base}^{}", nearest as i64);
    }
    let exponent = (exact + 1e-10).floor();
    let coeff = x.abs() / b.powf(exponent);
    format!("{sign}{}×{base}^{}", format_general(coeff, 3), exponent as i64)
}

const SI_PREFIXES: [(i32, &str); 17] = [
    (-24, "y"), (-21, "z"), (-18, "a"), (-15, "f"), (-12, "p"), (-9, "n"),
    (-6, "µ"), (-3, "m"), (0, ""), (3, "k"), (6, "M"), (9, "G"),
    (12, "T"), (15, "P"), (18, "E"), (21, "Z"), (24, "Y"),
];

fn si_prefix(pow10: i32) -> &'static str {
    SI_PREFIXES.iter().find(|(p, _)| *p == pow10).map_or("", |(_, s)| *s)
}

fn format_engineering(x: f64, places: usize) -> String {
    if x == 0.0 { return "0".to_string(); }
    if !x.is_finite() { return format!("{x}"); }
    let mut pow10 = ((x.abs().log10() / 3.0).floor() as i32 * 3).clamp(-24, 24);
    let mut mant = x / 10f64.powi(pow10);
    let scale = 10f64.powi(places as i32);
    if ((mant.abs() * scale).round() / scale) >= 1000.0 && pow10 < 24 {
        mant /= 1000.0;
        pow10 += 3;
    }
    let prefix = si_prefix(pow10);
    if prefix.is_empty() {
        format!("{:.*}", places, mant)
    } else {
        format!("{:.*} {}", places, mant, prefix)
    }
}

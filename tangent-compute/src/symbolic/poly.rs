//! Dense coefficient arithmetic for the polynomial normal form.
//!
//! These helpers operate on raw coefficient vectors (index = power of `x`) and leave the
//! invariant enforcement to [`Expr::poly`](super::Expr::poly), which trims trailing zeros and
//! collapses degenerate results.

/// Removes trailing zero coefficients.
pub(crate) fn trim(coeffs: &mut Vec<f64>) {
    while matches!(coeffs.last(), Some(&c) if c == 0.0) {
        coeffs.pop();
    }
}

/// Adds two coefficient vectors elementwise.
pub(crate) fn add(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
    let (longer, shorter) = if lhs.len() >= rhs.len() { (lhs, rhs) } else { (rhs, lhs) };
    let mut out = longer.to_vec();
    for (acc, c) in out.iter_mut().zip(shorter) {
        *acc += c;
    }
    out
}

/// Scales every coefficient by a constant.
pub(crate) fn scale(coeffs: &[f64], factor: f64) -> Vec<f64> {
    coeffs.iter().map(|c| c * factor).collect()
}

/// Multiplies by `x`, shifting every coefficient up one power.
pub(crate) fn shift_up(coeffs: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(coeffs.len() + 1);
    out.push(0.0);
    out.extend_from_slice(coeffs);
    out
}

/// Multiplies two coefficient vectors (discrete convolution).
pub(crate) fn mul(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; lhs.len() + rhs.len() - 1];
    for (i, a) in lhs.iter().enumerate() {
        for (j, b) in rhs.iter().enumerate() {
            out[i + j] += a * b;
        }
    }
    out
}

//! inference::normal — standard normal CDF approximation.
//!
//! Purpose
//! -------
//! Evaluate Φ(x), the standard normal CDF, via the Abramowitz–Stegun
//! 7.1.26 rational approximation of the error function. The p-value of
//! a Wald z-test is `2·(1 − Φ(|z|))`, and a closed-form approximation
//! keeps the whole inference layer dependency-free and branch-simple.
//!
//! Key behaviors
//! -------------
//! - Fixed coefficients a₁..a₅ and p = 0.3275911; absolute error is
//!   bounded by ≈1.5e-7 over the real line.
//! - Negative arguments go through the sign reflection
//!   Φ(−x) = 1 − Φ(x).
//!
//! Invariants & assumptions
//! ------------------------
//! - Output lies in [0, 1] and is monotone in x up to the approximation
//!   error; the error bound is asserted against a reference
//!   implementation (`statrs`) in the test suite.
//!
//! Downstream usage
//! ----------------
//! - `inference::wald` computes two-sided p-values with it.
//!
//! Testing notes
//! -------------
//! - Unit tests pin Φ(0), compare a grid of arguments against `statrs`
//!   within 1.5e-7, and check the reflection identity.

/// Abramowitz–Stegun 7.1.26 coefficients.
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Standard normal CDF Φ(x), accurate to ≈1.5e-7 in absolute error.
///
/// Parameters
/// ----------
/// - `x`: `f64` — any real argument; the tails saturate to 0 and 1.
///
/// Returns
/// -------
/// `f64`
///   The approximate probability `P(Z ≤ x)` for `Z ~ N(0, 1)`.
pub fn standard_normal_cdf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{ContinuousCDF, Normal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The pinned value at zero (the approximation is not exactly 0.5
    //   there; the small offset is part of the contract).
    // - The stated ≈1.5e-7 error bound against the statrs reference CDF
    //   on a grid spanning both tails.
    // - The sign-reflection identity Φ(−x) + Φ(x) = 1.
    //
    // They intentionally DO NOT cover:
    // - Inverse-CDF behavior; the inference layer never inverts Φ (the
    //   critical value is a pinned constant there).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the value at zero, including the approximation's tiny offset
    // from exactly one half.
    //
    // Given
    // -----
    // - x = 0.
    //
    // Expect
    // ------
    // - Φ(0) = 0.5000000005 within 1e-12.
    fn standard_normal_cdf_at_zero_matches_reference_offset() {
        // Act
        let phi = standard_normal_cdf(0.0);

        // Assert
        assert!((phi - 0.500_000_000_5).abs() < 1e-12, "got {phi}");
    }

    #[test]
    // Purpose
    // -------
    // Verify the stated error bound against a reference normal CDF on a
    // grid covering both tails and the center.
    //
    // Given
    // -----
    // - statrs Normal(0, 1) as the oracle and x ∈ {−6, …, 6} in steps
    //   of 0.25.
    //
    // Expect
    // ------
    // - |Φ_approx(x) − Φ_ref(x)| ≤ 1.5e-7 everywhere on the grid.
    fn standard_normal_cdf_grid_within_stated_error_bound() {
        // Arrange
        let reference = Normal::new(0.0, 1.0).expect("unit normal");

        // Act & Assert
        let mut k = -24;
        while k <= 24 {
            let x = f64::from(k) * 0.25;
            let approx = standard_normal_cdf(x);
            let exact = reference.cdf(x);
            assert!(
                (approx - exact).abs() <= 1.5e-7,
                "error {} at x = {x}",
                (approx - exact).abs()
            );
            k += 1;
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the reflection identity the sign branch is built on.
    //
    // Given
    // -----
    // - A handful of positive arguments.
    //
    // Expect
    // ------
    // - Φ(−x) + Φ(x) = 1 within 1e-12 for each.
    fn standard_normal_cdf_reflection_identity_holds() {
        // Act & Assert
        for &x in &[0.1_f64, 0.5, 1.0, 1.96, 2.5, 4.0] {
            let sum = standard_normal_cdf(-x) + standard_normal_cdf(x);
            assert!((sum - 1.0).abs() < 1e-12, "Φ(−{x}) + Φ({x}) = {sum}");
        }
    }
}

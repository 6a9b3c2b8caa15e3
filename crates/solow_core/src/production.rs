//! Cobb-Douglas production in intensive (per-worker) form.

use crate::traits::Scalar;

/// Output per worker, `y = k^alpha`.
///
/// Works on any [`Scalar`], so the same formula feeds the plotted curves
/// (`f64`) and the linearisation of the accumulation law (`Dual`). No range
/// checks: a negative `k` or an `alpha` outside `(0, 1)` yields whatever the
/// floating-point power produces.
pub fn produce<T: Scalar>(k: T, alpha: T) -> T {
    k.powf(alpha)
}

/// Element-wise [`produce`] over a capital grid, preserving order.
pub fn produce_all(k_vals: &[f64], alpha: f64) -> Vec<f64> {
    k_vals.iter().map(|&k| produce(k, alpha)).collect()
}

/// Return to capital, `f'(k) = alpha * k^(alpha - 1)`.
pub fn marginal_product_of_capital<T: Scalar>(k: T, alpha: T) -> T {
    alpha * k.powf(alpha - T::one())
}

/// Wage, `f(k) - k f'(k) = (1 - alpha) * k^alpha`.
pub fn marginal_product_of_labor<T: Scalar>(k: T, alpha: T) -> T {
    (T::one() - alpha) * produce(k, alpha)
}

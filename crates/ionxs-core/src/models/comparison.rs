//! Sampled cross-section curves for side-by-side model comparison.

use super::CrossSectionModel;
use super::error::CrossSectionError;
use crate::core::shell::Subshell;
use tracing::debug;

/// Evenly spaced overvoltages in `[start, stop)`.
///
/// Points are computed as `start + i * step` so rounding does not accumulate. A
/// non-positive `step` or an empty range yields no points.
pub fn overvoltage_grid(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(stop > start) {
        return Vec::new();
    }
    let count = ((stop - start) / step).ceil() as usize;
    (0..count)
        .map(|i| start + i as f64 * step)
        .filter(|u| *u < stop)
        .collect()
}

/// Evaluates `model` at each overvoltage, returning `(U, σ in nm²)` pairs.
///
/// # Errors
///
/// Stops at the first point the model rejects and returns its error.
pub fn sample_curve<M: CrossSectionModel + ?Sized>(
    model: &M,
    atomic_number: u32,
    ionization_energy_ev: f64,
    shell: Subshell,
    overvoltages: &[f64],
) -> Result<Vec<(f64, f64)>, CrossSectionError> {
    let curve = overvoltages
        .iter()
        .map(|&u| {
            let energy_ev = u * ionization_energy_ev;
            model
                .cross_section_nm2(atomic_number, ionization_energy_ev, energy_ev, shell)
                .map(|sigma| (u, sigma))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        model = model.name(),
        atomic_number,
        %shell,
        points = curve.len(),
        "Sampled cross-section curve"
    );
    Ok(curve)
}

//! Energy and area unit conversions.
//!
//! Cross sections are reported in cm² by the Bote–Salvat model and in nm² by the
//! closed-form models; these helpers move values between the two and to m² or barn.

const EV_PER_KEV: f64 = 1.0e3;
const NM2_PER_CM2: f64 = 1.0e14;
const M2_PER_NM2: f64 = 1.0e-18;
const M2_PER_BARN: f64 = 1.0e-28;

#[inline]
pub fn ev_to_kev(value_ev: f64) -> f64 {
    value_ev / EV_PER_KEV
}

#[inline]
pub fn kev_to_ev(value_kev: f64) -> f64 {
    value_kev * EV_PER_KEV
}

#[inline]
pub fn cm2_to_nm2(value_cm2: f64) -> f64 {
    value_cm2 * NM2_PER_CM2
}

#[inline]
pub fn nm2_to_cm2(value_nm2: f64) -> f64 {
    value_nm2 / NM2_PER_CM2
}

#[inline]
pub fn nm2_to_m2(value_nm2: f64) -> f64 {
    value_nm2 * M2_PER_NM2
}

#[inline]
pub fn m2_to_nm2(value_m2: f64) -> f64 {
    value_m2 / M2_PER_NM2
}

#[inline]
pub fn barn_to_m2(value_barn: f64) -> f64 {
    value_barn * M2_PER_BARN
}

#[inline]
pub fn m2_to_barn(value_m2: f64) -> f64 {
    value_m2 / M2_PER_BARN
}

#[inline]
pub fn barn_to_nm2(value_barn: f64) -> f64 {
    m2_to_nm2(barn_to_m2(value_barn))
}

#[inline]
pub fn nm2_to_barn(value_nm2: f64) -> f64 {
    m2_to_barn(nm2_to_m2(value_nm2))
}

#[inline]
pub fn cm2_to_barn(value_cm2: f64) -> f64 {
    nm2_to_barn(cm2_to_nm2(value_cm2))
}

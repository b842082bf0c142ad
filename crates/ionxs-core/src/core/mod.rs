//! # Core Module
//!
//! Stateless building blocks shared by every cross-section model.
//!
//! - **Physical constants** ([`constants`]) - Bohr radius and electron rest energy
//! - **Unit conversions** ([`units`]) - energy and area unit helpers
//! - **Identifiers** ([`shell`]) - atomic subshells and incident particles
//! - **Kinematics** ([`kinematics`]) - relativistic velocity ratio and momentum parameter
//! - **Parameter tables** ([`params`]) - Bote–Salvat coefficients and their file formats

pub mod constants;
pub mod kinematics;
pub mod params;
pub mod shell;
pub mod units;

//! # ionxs
//!
//! Electron and positron inner-shell ionization cross sections computed from published
//! empirical and semi-empirical models.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a one-way data flow:
//!
//! - **[`core`]: The Foundation.** Physical constants, unit conversions, shell and particle
//!   identifiers, relativistic kinematics, and the Bote–Salvat parameter tables together
//!   with the readers and writers for their file formats.
//!
//! - **[`models`]: The Public API.** The cross-section models themselves. Every model
//!   implements [`models::CrossSectionModel`], so callers can swap one for another.
//!   [`models::BoteSalvat2009`] is table driven; [`models::Casnati1982`],
//!   [`models::Brown1974`] and [`models::Jakoby1987`] are closed-form expressions.
//!
//! [`config`] describes where a parameter table lives and how strictly it is validated,
//! and can be loaded from TOML.
//!
//! ```ignore
//! use ionxs::core::shell::{Particle, Subshell};
//! use ionxs::models::BoteSalvat2009;
//!
//! let model = BoteSalvat2009::from_tabulated_path("bote2009_Parameters.csv")?;
//! let sigma_cm2 = model.cross_section_cm2(1.0e6, 79, Subshell::K, Particle::Electron)?;
//! ```

pub mod config;
pub mod core;
pub mod models;

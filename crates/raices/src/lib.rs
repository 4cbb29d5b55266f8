//! Core library for the Raíces investor platform: financing calculators and
//! the application intake workflow behind the public sign-up wizard.

pub mod calculators;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;

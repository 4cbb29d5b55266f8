//! Stateless quote engines backing the financing widgets on the public site.

pub mod financing;
pub mod fractional;

pub use financing::{FinancingQuote, FinancingRequest, RateKind};
pub use fractional::FractionalQuote;

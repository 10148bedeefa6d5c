//! Numeric domains the search can run over

mod band;
mod scalar;

pub use band::MagnitudeBand;
pub use scalar::{NumericDomain, Scalar};

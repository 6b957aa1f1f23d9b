//! Pure derivations over the stores and the current selection.

pub mod filter;
pub mod set;
pub mod status;
pub mod zones;

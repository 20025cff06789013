//! Command implementations for the sflash binary.

pub mod check;
pub mod drill;

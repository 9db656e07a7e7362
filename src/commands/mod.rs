//! Command implementations for the FPL stats CLI

pub mod extract;
pub mod plot;

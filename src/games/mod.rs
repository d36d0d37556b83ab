//! Game implementations.

pub mod neutrino;

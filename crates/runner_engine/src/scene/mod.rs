//! Scenery drawn behind the avatar
//!
//! Scenery never takes part in collision tests.

pub mod horizon;

pub use horizon::HorizonLine;

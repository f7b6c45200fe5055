//! Chain middleware.

pub mod size_gate;

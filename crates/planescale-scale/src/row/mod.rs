//! Row kernels
//!
//! Allocation-free transforms of one or a few source rows into one
//! destination row. Plane scalers pick a kernel once per call and run it
//! over every row.

pub mod boxsum;
pub mod cols;
pub mod down;
pub mod packed;
pub mod up2;

//! Shared plumbing for the launch angle command-line front ends.

pub mod logging;
pub mod plot;

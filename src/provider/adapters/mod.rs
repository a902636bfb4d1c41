//! Adapter implementations of the provider ports.

pub mod memory;
pub mod tracing;

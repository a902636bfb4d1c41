//! Provider registration and endpoint mounting for Switchboard.
//!
//! This module implements the resolution→registration→mounting pipeline:
//! normalizing heterogeneous provider specifications, resolving effective
//! names and versions, populating the name-keyed registry, fanning out
//! provider setup hooks, and validating and mounting declared endpoints on
//! per-provider routing sub-surfaces. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

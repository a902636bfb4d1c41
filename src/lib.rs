//! Switchboard: provider registration and endpoint mounting.
//!
//! This crate wires independently-developed capability modules ("providers")
//! behind a single routing surface. It resolves provider specifications,
//! deduplicates providers by name, runs their asynchronous setup hooks
//! concurrently, and mounts the HTTP endpoints they declare under a
//! per-provider namespace with failure containment and an optional
//! security-guard policy.
//!
//! # Architecture
//!
//! Switchboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value objects and the provider registry, with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for provider loading, routing,
//!   security guarding, and diagnostics
//! - **Adapters**: Concrete implementations of ports (static provider
//!   tables, in-memory routers, tracing diagnostics)
//!
//! # Modules
//!
//! - [`provider`]: Specification resolution, setup orchestration, and
//!   endpoint registration

pub mod provider;

//! Unit test suites for the provider registration pipeline.

mod domain_tests;
mod support;

//! Common test utilities for API integration tests
//!
//! This module provides shared test infrastructure for integration tests,
//! including in-memory stores, test fixtures, and helper functions.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;
pub mod stores;

pub use fixtures::*;
pub use helpers::*;
pub use stores::*;

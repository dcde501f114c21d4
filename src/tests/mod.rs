//! Test modules for the word dictionary.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests over the dictionary using proptest
//! - Shared fixtures and strategies

pub mod error_tests;

pub use test_utils::{vocabulary_strategy, word_strategy, TestFixture};

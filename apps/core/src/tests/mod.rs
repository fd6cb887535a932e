//! Test Module
//!
//! Cross-module test suite for the intent detection node.
//!
//! ## Test Categories
//! - `brain_tests`: Keyword classification, precedence and determinism
//! - `dialogue_tests`: Greeting, name gating and reply selection
//! - `harness_tests`: Built-in scenarios, transcript and report output

pub mod brain_tests;

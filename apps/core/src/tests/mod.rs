//! Test Module
//!
//! Suite-level tests for the CalmCircle backend.
//!
//! ## Test Categories
//! - `brain_tests`: Mood classification and response-set behavior
//! - `puzzle_tests`: Grid generation and selection-matching round trips
//! - `storage_tests`: Key-value store operations against a temp database
//! - `integration_tests`: Full journal/companion workflows over the store

pub mod integration_tests;

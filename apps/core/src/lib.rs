//! CalmCircle Backend
//!
//! Core services for the wellness app shell: the keyword mood brain, the
//! calming-words puzzle, journal and companion workflows, and the SQLite
//! key-value store with its HTTP surface.

pub mod audio;
pub mod brain;
pub mod companion;
pub mod error;
pub mod journal;
pub mod models;
pub mod paths;
pub mod puzzle;
pub mod storage;

#[cfg(test)]
mod tests;

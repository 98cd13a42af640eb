//! # Storage Module
//!
//! The generic key-value persistence service: a SQLite-backed store of JSON
//! documents, an HTTP surface exposing it, and the client wrapper the UI
//! shell talks through. The brain and puzzle components never call this
//! directly; surrounding code persists transcripts, journal entries, and
//! completion flags here.

pub mod client;
pub mod kv;
pub mod server;

pub use client::KvClient;
pub use server::{serve, KvServerConfig};

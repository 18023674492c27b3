//! PlayMate mock backend.
//!
//! Serves canned JSON for the PlayMate frontend so it can be integrated and
//! tested before the real backend exists.

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod routes;
pub mod seed;

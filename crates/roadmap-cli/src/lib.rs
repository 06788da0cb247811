//! Road map CLI library.
//!
//! This crate provides the rendering and terminal helpers used by the
//! `roadmap-cli` binary.

pub mod output;
pub mod terminal;

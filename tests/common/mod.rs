//! Shared test utilities for orgit-export
//!
//! Integration tests run against real git repositories created in temporary
//! directories, configured through the `git` command.

pub mod assertions;
pub mod repository;

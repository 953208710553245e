//! Core types for the recipeshare service.
//!
//! Holds the `Post` domain type and the storage seam the handlers depend on.
//! This crate has no AWS dependency; concrete backends live in the service
//! crate.

pub mod post;
pub mod storage;

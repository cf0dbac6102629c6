//! # gnc-core
//!
//! Core types, ID generation and validation for the Game Night Central
//! project plan repository.
//!
//! This crate provides the foundational types shared across all `gnc` crates:
//! - Entity structs and create DTOs for every documented plan object
//!   (tech stack, file structure, learning strategy, knowledge practices, ...)
//! - Category and status enums
//! - Per-repository ID generation
//! - Field-level validation errors
//! - Filter / stable sort / pagination primitives used by every repository

pub mod entities;
pub mod enums;
pub mod ids;
pub mod search;
pub mod validation;

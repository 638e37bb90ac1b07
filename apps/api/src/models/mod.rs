//! Database models for the cats API
//!
//! This module contains SQLx models for:
//! - Cats and their locations
//! - The local mirror of user accounts and the authenticated identity

pub mod cat;
pub mod user;

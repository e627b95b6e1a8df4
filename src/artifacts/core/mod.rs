//! Core utilities and shared types
//!
//! This module contains the user-facing error taxonomy shared by every command.

pub mod user_error;

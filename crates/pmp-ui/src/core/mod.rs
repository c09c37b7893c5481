//! Core, DOM-free primitives and helpers for the console.
pub mod config;
pub mod error;
pub mod guard;
pub mod logic;
pub mod store;
pub mod validation;

//! "Generate API Key" feature wiring.
//!
//! # Design
//! - Keep the whole form in one feature slice: intents, pure logic, page state, transport, view.
//! - Restrict API calls to this feature layer to honor UI boundaries.
//! - Everything except `api` and `view` is DOM-free and tested natively.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

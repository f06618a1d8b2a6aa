//! Core of the Inkwell client: everything that does not touch the DOM.
//!
//! The wasm frontend drives these types from Yew components; they are kept
//! here so the authentication protocol, the route guard and the form rules
//! can be exercised on the host.

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod flows;
pub mod forms;
pub mod gateway;
pub mod guard;
pub mod models;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

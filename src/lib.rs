//! Warehouse management client library
//!
//! Typed client for the warehouse REST backend: warehouse receipts (WR),
//! purchase orders (PO) and material receipts (MR). The backend speaks a
//! positional-array wire format; the `wire` module owns the index-to-field
//! mapping in both directions. All state is transient and reconstructed from
//! the server per operation; this crate holds no business logic of its own.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod client;
pub mod config;
pub mod documents;
pub mod errors;
pub mod flows;
pub mod forms;
pub mod models;
pub mod nav;
pub mod notify;
pub mod session;
pub mod wire;

pub use client::{Gateway, RestGateway};
pub use errors::ClientError;
pub use notify::{NotificationKind, Notifier};

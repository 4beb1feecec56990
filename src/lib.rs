//! Stay Engine for hotel room availability and pricing
//!
//! This crate decides whether a room is free for a stay, given the bookings
//! already held against it, and computes the price of a stay from nightly
//! rates, weekday surcharges and extra-guest charges. Every price comes with
//! an audit trail of the rules that produced it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

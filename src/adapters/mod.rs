//! Adapters - connect the domain to the outside world.
//!
//! - `http` - REST API over the assessment domain

pub mod http;

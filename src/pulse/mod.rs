//! Client and wire types for the Pulse football API.

pub mod http;
pub mod types;

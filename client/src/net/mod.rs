//! Network layer: REST helpers for the directory API.

pub mod api;

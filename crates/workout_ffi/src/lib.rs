//! Flutter-facing bindings for the workout log core.

pub mod api;

//! Operations over a segment network.
//!
//! Each operation is a small struct configured through its constructor and
//! `with_*` builders, then run with `execute` against a [`crate::network::NetworkStore`].

pub mod trace;

pub use trace::{
    FlowDirection, Reach, TraceReach, TraceReachWithBarriers, DEFAULT_BARRIER_RADIUS,
    DEFAULT_TOLERANCE,
};

//! MBTA subway explorer.
//!
//! Answers three questions about the subway network: which routes exist,
//! which routes have the most and fewest stops (and where you can transfer
//! between routes), and how to get from one stop to another.

pub mod catalog;
pub mod domain;
pub mod index;
pub mod mbta;
pub mod planner;
pub mod source;
pub mod stats;

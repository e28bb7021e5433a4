//! # Core Types
//!
//! Identifier types shared by the page ordering crates.
//!
//! ## Key Types
//!
//! - [`PageId`]: Identity of a page held by a page collection
//! - [`NodeId`]: Handle to a renderable node attached under a view root

pub mod ids;

pub use ids::{NodeId, PageId};

//! Publish module: the one-shot publisher and its data types.
//!
//! This module provides:
//! - Topology descriptors and message/routing types
//! - The deadline-bounded [`Publisher`]
//! - The [`Error`] taxonomy surfaced to callers

pub mod error;
pub mod publisher;
pub mod types;

pub use error::{Error, Result, Stage};
pub use publisher::Publisher;
pub use types::{DeliveryMode, ExchangeKind, Message, RoutingTarget, Topology};

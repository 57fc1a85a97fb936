//! Postbox - minimal reliable publish client for RabbitMQ.
//!
//! This library provides the shared publisher behind the four example
//! binaries:
//! - `postbox-send`: point-to-point delivery to the `hello` queue
//! - `postbox-new-task`: persistent work items on the `task_queue` queue
//! - `postbox-emit-log`: fanout broadcast through the `logs` exchange
//! - `postbox-emit-log-topic`: topic routing through the `logs_topic` exchange
//!
//! Each publish call is one-shot: connect, open a channel in confirm mode,
//! declare the topology, publish under a deadline, release everything. The
//! publisher returns typed errors and never terminates the process; the
//! binaries escalate failures by returning the error from `main`.

pub mod cli;
pub mod config;
pub mod publish;

// Re-export commonly used types
pub use config::Config;
pub use publish::{
    DeliveryMode, Error, ExchangeKind, Message, Publisher, Result, RoutingTarget, Stage, Topology,
};

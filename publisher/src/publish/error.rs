//! Typed errors surfaced by the publisher.
//!
//! The publisher never recovers from any of these internally and never
//! terminates the process; callers decide whether to log, retry, or abort.

use std::time::Duration;

use thiserror::Error;

/// AMQP reply code for a declaration that conflicts with an existing entity.
const PRECONDITION_FAILED: u16 = 406;

/// Errors that can occur during a single publish call.
#[derive(Debug, Error)]
pub enum Error {
    /// Broker unreachable, credentials rejected, or protocol handshake failed.
    #[error("broker connection failed: {0}")]
    Connection(#[source] lapin::Error),

    /// Channel could not be opened or configured on the live connection.
    #[error("channel setup failed: {0}")]
    Channel(#[source] lapin::Error),

    /// A same-named queue or exchange already exists with different
    /// parameters. The existing entity is left untouched.
    #[error("topology conflict declaring {name:?}: {source}")]
    TopologyConflict {
        name: String,
        #[source]
        source: lapin::Error,
    },

    /// The deadline elapsed before the broker answered.
    ///
    /// When `stage` is [`Stage::Publish`] the message's delivery status is
    /// unknown: the frame may have been accepted after the caller gave up,
    /// or dropped. The publisher does not wait to find out.
    #[error("{stage} timed out after {timeout:?}")]
    Timeout { stage: Stage, timeout: Duration },

    /// The broker rejected or negatively acknowledged the publish frame.
    #[error("publish rejected by broker: {reason}")]
    Publish {
        reason: String,
        #[source]
        source: Option<lapin::Error>,
    },
}

/// Result type alias for publish operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The broker round-trip that failed or timed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    OpenChannel,
    Declare,
    Publish,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Connect => "connect",
            Stage::OpenChannel => "channel open",
            Stage::Declare => "topology declare",
            Stage::Publish => "publish",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Classify a declare failure: a PRECONDITION_FAILED reply means the
    /// entity exists with mismatched parameters, anything else is a channel
    /// fault.
    pub(crate) fn from_declare(name: &str, source: lapin::Error) -> Self {
        if is_precondition_failed(&source) {
            Error::TopologyConflict {
                name: name.to_string(),
                source,
            }
        } else {
            Error::Channel(source)
        }
    }

    pub(crate) fn from_publish(source: lapin::Error) -> Self {
        Error::Publish {
            reason: source.to_string(),
            source: Some(source),
        }
    }

    pub(crate) fn nacked() -> Self {
        Error::Publish {
            reason: "broker returned basic.nack".to_string(),
            source: None,
        }
    }
}

fn is_precondition_failed(error: &lapin::Error) -> bool {
    matches!(error, lapin::Error::ProtocolError(e) if e.get_id() == PRECONDITION_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapin::protocol::AMQPError;

    #[test]
    fn test_precondition_failed_maps_to_conflict() {
        let amqp = AMQPError::from_id(406, "PRECONDITION_FAILED - inequivalent arg 'durable'".into())
            .expect("406 is a known reply code");
        let error = Error::from_declare("task_queue", lapin::Error::ProtocolError(amqp));
        assert!(matches!(error, Error::TopologyConflict { ref name, .. } if name == "task_queue"));
    }

    #[test]
    fn test_other_declare_failures_map_to_channel() {
        let amqp = AMQPError::from_id(504, "CHANNEL_ERROR - expected 'channel.open'".into())
            .expect("504 is a known reply code");
        let error = Error::from_declare("hello", lapin::Error::ProtocolError(amqp));
        assert!(matches!(error, Error::Channel(_)));
    }

    #[test]
    fn test_timeout_display_names_the_stage() {
        let error = Error::Timeout {
            stage: Stage::Publish,
            timeout: Duration::from_secs(5),
        };
        assert_eq!(error.to_string(), "publish timed out after 5s");
    }

    #[test]
    fn test_nack_is_a_publish_error() {
        let error = Error::nacked();
        assert!(error.to_string().contains("basic.nack"));
    }
}

//! Topology descriptors, routing targets, and message values.
//!
//! These are plain data carried into [`Publisher::publish`]; nothing here
//! talks to the broker except the option mapping used at declare time.
//!
//! [`Publisher::publish`]: super::Publisher::publish

use lapin::{
    options::{ExchangeDeclareOptions, QueueDeclareOptions},
    BasicProperties,
};

/// Exchange routing discipline.
///
/// `Headers` and custom exchange types are out of scope for this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeKind {
    /// Route to queues whose binding key equals the routing key.
    Direct,
    /// Broadcast to every bound queue; the routing key is ignored.
    Fanout,
    /// Match the dot-separated routing key against binding patterns
    /// (`*` = exactly one word, `#` = zero or more words). Matching happens
    /// on the broker; this client only carries the key.
    Topic,
}

impl From<ExchangeKind> for lapin::ExchangeKind {
    fn from(kind: ExchangeKind) -> Self {
        match kind {
            ExchangeKind::Direct => lapin::ExchangeKind::Direct,
            ExchangeKind::Fanout => lapin::ExchangeKind::Fanout,
            ExchangeKind::Topic => lapin::ExchangeKind::Topic,
        }
    }
}

/// A broker-side routing entity the publisher must ensure exists.
///
/// Declaration is idempotent on the broker as long as every parameter
/// matches the existing entity; a mismatched redeclaration is refused with
/// a PRECONDITION_FAILED channel error, surfaced as
/// [`Error::TopologyConflict`](super::Error::TopologyConflict).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology {
    Queue {
        name: String,
        /// Queue survives a broker restart. Independent of per-message
        /// [`DeliveryMode`].
        durable: bool,
        auto_delete: bool,
        exclusive: bool,
    },
    Exchange {
        name: String,
        kind: ExchangeKind,
        durable: bool,
        auto_delete: bool,
        /// Internal exchanges cannot be published to by clients.
        internal: bool,
    },
}

impl Topology {
    /// Queue with the tutorial defaults: not auto-deleted, not exclusive.
    pub fn queue(name: impl Into<String>, durable: bool) -> Self {
        Topology::Queue {
            name: name.into(),
            durable,
            auto_delete: false,
            exclusive: false,
        }
    }

    /// Exchange with the tutorial defaults: not auto-deleted, not internal.
    pub fn exchange(name: impl Into<String>, kind: ExchangeKind, durable: bool) -> Self {
        Topology::Exchange {
            name: name.into(),
            kind,
            durable,
            auto_delete: false,
            internal: false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Topology::Queue { name, .. } | Topology::Exchange { name, .. } => name,
        }
    }

    pub(crate) fn queue_options(durable: bool, auto_delete: bool, exclusive: bool) -> QueueDeclareOptions {
        QueueDeclareOptions {
            durable,
            auto_delete,
            exclusive,
            ..Default::default()
        }
    }

    pub(crate) fn exchange_options(durable: bool, auto_delete: bool, internal: bool) -> ExchangeDeclareOptions {
        ExchangeDeclareOptions {
            durable,
            auto_delete,
            internal,
            ..Default::default()
        }
    }
}

/// Where a publish goes: an exchange name plus a routing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTarget {
    /// Empty string selects the broker's default exchange, which routes
    /// directly to the queue named by `routing_key`.
    pub exchange: String,
    pub routing_key: String,
}

impl RoutingTarget {
    /// Direct-to-queue delivery through the default exchange.
    pub fn queue(name: impl Into<String>) -> Self {
        RoutingTarget {
            exchange: String::new(),
            routing_key: name.into(),
        }
    }

    /// Delivery through a named exchange. Fanout exchanges ignore the key.
    pub fn exchange(name: impl Into<String>, routing_key: impl Into<String>) -> Self {
        RoutingTarget {
            exchange: name.into(),
            routing_key: routing_key.into(),
        }
    }
}

/// Per-message persistence flag, mapped to the AMQP `delivery_mode` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Held in memory only; lost on broker restart.
    Transient,
    /// Written to stable storage, provided the queue itself is durable.
    Persistent,
}

impl DeliveryMode {
    pub(crate) fn amqp_value(self) -> u8 {
        match self {
            DeliveryMode::Transient => 1,
            DeliveryMode::Persistent => 2,
        }
    }
}

/// An immutable message: content type, body bytes, delivery mode.
///
/// Not retained by the publisher after `publish` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub content_type: String,
    pub body: Vec<u8>,
    pub delivery_mode: DeliveryMode,
}

impl Message {
    /// A transient `text/plain` message, the shape every tutorial sends.
    pub fn text(body: impl Into<String>) -> Self {
        Message {
            content_type: "text/plain".to_string(),
            body: body.into().into_bytes(),
            delivery_mode: DeliveryMode::Transient,
        }
    }

    /// Upgrade to persistent delivery.
    pub fn persistent(mut self) -> Self {
        self.delivery_mode = DeliveryMode::Persistent;
        self
    }

    pub(crate) fn properties(&self) -> BasicProperties {
        BasicProperties::default()
            .with_content_type(self.content_type.clone().into())
            .with_delivery_mode(self.delivery_mode.amqp_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_target_uses_default_exchange() {
        let target = RoutingTarget::queue("hello");
        assert_eq!(target.exchange, "");
        assert_eq!(target.routing_key, "hello");
    }

    #[test]
    fn test_exchange_target_carries_key_unchanged() {
        let target = RoutingTarget::exchange("logs_topic", "orange.rabbit");
        assert_eq!(target.exchange, "logs_topic");
        assert_eq!(target.routing_key, "orange.rabbit");
    }

    #[test]
    fn test_delivery_mode_amqp_values() {
        assert_eq!(DeliveryMode::Transient.amqp_value(), 1);
        assert_eq!(DeliveryMode::Persistent.amqp_value(), 2);
    }

    #[test]
    fn test_text_message_defaults() {
        let message = Message::text("Hello World!");
        assert_eq!(message.content_type, "text/plain");
        assert_eq!(message.body, b"Hello World!");
        assert_eq!(message.delivery_mode, DeliveryMode::Transient);
    }

    #[test]
    fn test_persistent_upgrade() {
        let message = Message::text("task").persistent();
        assert_eq!(message.delivery_mode, DeliveryMode::Persistent);
        assert_eq!(message.properties().delivery_mode(), &Some(2));
    }

    #[test]
    fn test_queue_constructor_defaults() {
        let topology = Topology::queue("task_queue", true);
        assert_eq!(topology.name(), "task_queue");
        assert_eq!(
            topology,
            Topology::Queue {
                name: "task_queue".to_string(),
                durable: true,
                auto_delete: false,
                exclusive: false,
            }
        );
    }

    #[test]
    fn test_exchange_constructor_defaults() {
        let topology = Topology::exchange("logs", ExchangeKind::Fanout, true);
        assert_eq!(
            topology,
            Topology::Exchange {
                name: "logs".to_string(),
                kind: ExchangeKind::Fanout,
                durable: true,
                auto_delete: false,
                internal: false,
            }
        );
    }

    #[test]
    fn test_declare_option_mapping() {
        let queue_opts = Topology::queue_options(true, false, false);
        assert!(queue_opts.durable);
        assert!(!queue_opts.auto_delete);
        assert!(!queue_opts.exclusive);
        assert!(!queue_opts.passive);

        let exchange_opts = Topology::exchange_options(true, false, false);
        assert!(exchange_opts.durable);
        assert!(!exchange_opts.auto_delete);
        assert!(!exchange_opts.internal);
    }
}

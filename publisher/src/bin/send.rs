//! Postbox Send - point-to-point "Hello World" publisher.
//!
//! Declares the non-durable `hello` queue and publishes a single transient
//! message to it through the default exchange.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use postbox::{Config, Message, Publisher, RoutingTarget, Topology};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    let config = Config::from_env();
    let publisher = Publisher::new(config.amqp_url.clone());

    let body = "Hello World!";
    publisher
        .publish(
            &Topology::queue("hello", false),
            &RoutingTarget::queue("hello"),
            &Message::text(body),
            config.publish_timeout,
        )
        .await?;

    info!(body = body, "sent");
    Ok(())
}

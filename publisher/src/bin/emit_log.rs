//! Postbox Emit Log - fanout broadcast publisher.
//!
//! Declares the durable fanout exchange `logs` and publishes one message with
//! an empty routing key; every queue bound to the exchange receives it.

use std::env;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use postbox::{cli, Config, ExchangeKind, Message, Publisher, RoutingTarget, Topology};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let body = cli::body_or_default(&args);

    let config = Config::from_env();
    let publisher = Publisher::new(config.amqp_url.clone());

    publisher
        .publish(
            &Topology::exchange("logs", ExchangeKind::Fanout, true),
            &RoutingTarget::exchange("logs", ""),
            &Message::text(body.clone()),
            config.publish_timeout,
        )
        .await?;

    info!(body = %body, "sent");
    Ok(())
}

//! Postbox Emit Log Topic - topic-routed publisher.
//!
//! Declares the durable topic exchange `logs_topic`. The first positional
//! argument is the routing key (default `"info"`); the remaining arguments
//! form the body (default `"hello....."`). Pattern matching against binding
//! keys like `*.orange.*` or `lazy.#` happens on the broker.

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
    let routing_key = cli::severity_or_default(&args);
    let body = cli::body_or_default(args.get(1..).unwrap_or(&[]));

    let config = Config::from_env();
    let publisher = Publisher::new(config.amqp_url.clone());

    publisher
        .publish(
            &Topology::exchange("logs_topic", ExchangeKind::Topic, true),
            &RoutingTarget::exchange("logs_topic", routing_key.clone()),
            &Message::text(body.clone()),
            config.publish_timeout,
        )
        .await?;

    info!(routing_key = %routing_key, body = %body, "sent");
    Ok(())
}

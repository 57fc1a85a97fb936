//! Postbox New Task - work-queue publisher.
//!
//! Declares the durable `task_queue` queue and publishes one persistent task.
//! The body comes from the positional arguments, defaulting to `"hello....."`.

use std::env;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use postbox::{cli, Config, Message, Publisher, RoutingTarget, Topology};

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
            &Topology::queue("task_queue", true),
            &RoutingTarget::queue("task_queue"),
            &Message::text(body.clone()).persistent(),
            config.publish_timeout,
        )
        .await?;

    info!(body = %body, "sent");
    Ok(())
}

use chromachip::{
    app::{config, reducer, stream},
    core::{
        chat::StdoutOutbox, listener::ChipListener, phrases::RandomPhrasePicker,
        reply::ReplyComposer,
    },
};
use eyre::Context;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eyre::Report> {
    // Setup file-based logging
    let file_appender = tracing_appender::rolling::never(".", "chromachip.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking)
        .init();

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    runtime.block_on(run())
}

async fn run() -> Result<(), eyre::Report> {
    let config = config::load().await?;
    let bot_id = config.require_bot_id()?;

    let picker = RandomPhrasePicker::new(config.replies.clone())?;
    let composer =
        ReplyComposer::new(picker).with_phrases(config.long_phrase, config.short_phrase);
    let mut listener = ChipListener::new(bot_id, composer);
    let outbox = StdoutOutbox;

    let (event_tx, mut event_rx) = mpsc::channel(32);
    let idle_timeout = Duration::from_secs(config.idle_timeout_secs);
    tokio::spawn(stream::read_statuses(
        BufReader::new(tokio::io::stdin()),
        event_tx,
        idle_timeout,
    ));

    tracing::info!("Listening for statuses addressed to {}", bot_id);
    while let Some(event) = event_rx.recv().await {
        reducer::reduce(&mut listener, event, &outbox).await;
    }

    tracing::info!("Status stream closed");
    Ok(())
}

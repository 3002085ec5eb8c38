use crate::{
    core::{chat::Outbox, listener::ChipListener, phrases::PhrasePicker},
    events::app_event::AppEvent,
    models::message::Status,
};

/// Handles one event from the stream. Failures are logged; the stream keeps going.
pub async fn reduce<P: PhrasePicker>(
    listener: &mut ChipListener<P>,
    event: AppEvent,
    outbox: &dyn Outbox,
) {
    match event {
        AppEvent::Status(status) => {
            handle_status(listener, &status, outbox).await;
        }
        AppEvent::StreamError(e) => {
            tracing::error!("Got an error from the stream: {}", e);
        }
        AppEvent::Timeout => {
            tracing::warn!("Timed out waiting for statuses");
        }
    }
}

async fn handle_status<P: PhrasePicker>(
    listener: &mut ChipListener<P>,
    status: &Status,
    outbox: &dyn Outbox,
) {
    let reply = match listener.on_status(status) {
        Ok(Some(reply)) => reply,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!("Could not compose a reply to status {}: {}", status.id, e);
            return;
        }
    };

    if let Err(e) = outbox.send_reply(&reply).await {
        tracing::error!("Failed to send reply to status {}: {:?}", status.id, e);
    }
}

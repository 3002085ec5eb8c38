use crate::models::message::Status;

/// Events fed from the inbound stream to the reducer.
#[derive(Debug)]
pub enum AppEvent {
    Status(Box<Status>),
    /// A line on the stream that could not be decoded, or a read failure.
    StreamError(String),
    /// Nothing arrived within the configured idle window.
    Timeout,
}

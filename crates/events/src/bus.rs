//! Event publishing/subscription abstraction (mechanics only).
//!
//! A bus fans every published message out to all live subscribers
//! (broadcast semantics). It stores nothing: a subscriber only sees messages
//! published after it subscribed.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// A subscription to an event stream.
///
/// Subscriptions are meant for a single consumer. Messages arrive in publish
/// order.
///
/// ```ignore
/// let changes = bus.subscribe();
/// book.add_patient(patient)?;
/// for change in changes.drain() {
///     tracing::debug!(event = change.event_type(), "book changed");
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Collect every message that is already waiting, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// Publishers call [`publish`](EventBus::publish) after a change has been
/// committed; consumers (persistence, presentation) obtain a
/// [`Subscription`] and react to what they receive. Publishing must never be
/// able to undo or block the change it reports.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}

//! In-memory event bus.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryBusError {
    /// Publish failed due to internal lock poisoning.
    #[error("event bus lock poisoned")]
    Poisoned,
}

/// In-memory pub/sub bus backed by `std::sync::mpsc` channels.
///
/// - No IO / no async
/// - Subscribers whose receiving end was dropped are pruned on publish
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscribers (as of the last publish).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(message.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        match self.subscribers.lock() {
            Ok(mut subs) => subs.push(tx),
            Err(_) => tracing::warn!("event bus lock poisoned; subscription will stay silent"),
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_receives_each_message() {
        let bus = InMemoryEventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(1u32).unwrap();
        bus.publish(2u32).unwrap();

        assert_eq!(first.drain(), vec![1, 2]);
        assert_eq!(second.drain(), vec![1, 2]);
    }

    #[test]
    fn late_subscriber_misses_earlier_messages() {
        let bus = InMemoryEventBus::new();
        bus.publish("early").unwrap();
        let late = bus.subscribe();
        bus.publish("late").unwrap();

        assert_eq!(late.drain(), vec!["late"]);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let bus = InMemoryEventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());

        bus.publish(7u8).unwrap();

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.drain(), vec![7]);
    }
}

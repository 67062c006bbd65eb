//! # Observable State
//!
//! Both core owners (the recipe store and the navigation controller) publish
//! their state through a `tokio::sync::watch` channel. This module turns a
//! watch receiver into a `Stream` with replay-latest semantics:
//!
//! ```text
//! subscribe ──► current value ──► value after change #1 ──► ...
//! ```
//!
//! The first item is always the value current at subscription time. Later
//! items arrive once per observed change. A subscriber that falls behind sees
//! the newest value, never an intermediate or half-written one.

use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::sync::watch;

/// Wrap a receiver into a stream that yields the current value first.
///
/// The stream is boxed so callers can use `StreamExt::next` without pinning.
/// It ends when the sending side (the owner) is dropped.
pub fn replay_latest<T>(mut receiver: watch::Receiver<T>) -> BoxStream<'static, T>
where
    T: Clone + Send + Sync + 'static,
{
    receiver.mark_changed();
    futures::stream::unfold(receiver, |mut receiver| async move {
        receiver.changed().await.ok()?;
        let value = receiver.borrow_and_update().clone();
        Some((value, receiver))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replay_latest_yields_current_then_changes() {
        let (tx, rx) = watch::channel(1u32);
        let mut stream = replay_latest(rx);

        assert_eq!(stream.next().await, Some(1));
        tx.send_replace(2);
        assert_eq!(stream.next().await, Some(2));
    }

    #[tokio::test]
    async fn test_replay_latest_ends_when_owner_dropped() {
        let (tx, rx) = watch::channel("a");
        let mut stream = replay_latest(rx);

        assert_eq!(stream.next().await, Some("a"));
        drop(tx);
        assert_eq!(stream.next().await, None);
    }
}

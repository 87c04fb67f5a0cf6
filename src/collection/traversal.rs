//! Traversal surfaces for [`Set`].
//!
//! - [`Set::each`]: synchronous callback, may stop early.
//! - [`Set::iterator`]: lazy pull-style [`SetIterator`] fed by a background
//!   producer thread, abandonable at any point with [`SetIterator::stop`].
//! - [`Set::iter_channel`]: a plain receive channel for consumers that always
//!   drain to completion.
//! - [`Set::stream`] (feature `async`): a [`futures::Stream`] fed by a tokio
//!   task.
//!
//! Every background surface works on a snapshot taken when it is created, so
//! later mutation of the set is not observed by a running traversal.
//!
//! # Examples
//!
//! ```rust
//! use setwise::Set;
//!
//! let set = Set::from_elements([1, 2, 3]);
//!
//! let mut total = 0;
//! set.each(|element| {
//!     total += element;
//!     false
//! });
//! assert_eq!(total, 6);
//!
//! let mut collected: Vec<i32> = set.iterator().collect();
//! collected.sort_unstable();
//! assert_eq!(collected, vec![1, 2, 3]);
//! ```

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, select};

use super::Set;

/// Rendezvous: the producer hands over one element per consumer pull.
const ITERATOR_BUFFER: usize = 0;

impl<T> Set<T> {
    /// Calls `visit` once per element, in unspecified order.
    ///
    /// Iteration stops as soon as `visit` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let set: Set<i32> = (0..100).collect();
    /// let mut visited = 0;
    /// set.each(|_| {
    ///     visited += 1;
    ///     visited == 10
    /// });
    /// assert_eq!(visited, 10);
    /// ```
    pub fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        for element in self {
            if visit(element) {
                break;
            }
        }
    }
}

impl<T: Clone + Send + 'static> Set<T> {
    /// Returns a lazy iterator driven by a background producer thread.
    ///
    /// The producer hands elements over a rendezvous channel, one per call to
    /// [`Iterator::next`]. Call [`SetIterator::stop`] (or drop the iterator)
    /// to abandon the traversal; the producer then exits instead of blocking.
    ///
    /// The iterator is one-shot: calling `iterator` again starts a fresh
    /// traversal.
    #[must_use]
    pub fn iterator(&self) -> SetIterator<T> {
        self.iterator_with_buffer(ITERATOR_BUFFER)
    }

    /// Like [`Set::iterator`], with up to `buffer` elements produced ahead of
    /// the consumer.
    #[must_use]
    pub fn iterator_with_buffer(&self, buffer: usize) -> SetIterator<T> {
        SetIterator::spawn(self.iter().cloned().collect(), buffer)
    }

    /// Returns a channel that yields every element and then disconnects.
    ///
    /// There is no stop signal: the producer exits after the last element or
    /// as soon as the receiver is dropped. A receiver that is kept alive but
    /// never drained keeps the producer thread parked, so use
    /// [`Set::iterator`] when early abandonment is possible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let set = Set::from_elements(["a", "b"]);
    /// let mut received: Vec<&str> = set.iter_channel().iter().collect();
    /// received.sort_unstable();
    /// assert_eq!(received, vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn iter_channel(&self) -> Receiver<T> {
        let snapshot: Vec<T> = self.iter().cloned().collect();
        let (sender, receiver) = crossbeam_channel::bounded(ITERATOR_BUFFER);
        thread::spawn(move || {
            for element in snapshot {
                // the receiver was dropped
                if sender.send(element).is_err() {
                    break;
                }
            }
        });
        receiver
    }
}

// =============================================================================
// SetIterator
// =============================================================================

/// A lazy, pull-style iterator over a snapshot of a [`Set`].
///
/// Created by [`Set::iterator`]. Elements are pushed by a dedicated producer
/// thread; the producer waits on both the element channel and a stop channel,
/// so [`SetIterator::stop`] and [`Drop`] always release it.
///
/// # Examples
///
/// ```rust
/// use setwise::Set;
///
/// let set: Set<u32> = (0..1_000).collect();
/// let mut iterator = set.iterator();
///
/// let first = iterator.next();
/// assert!(first.is_some());
///
/// iterator.stop();
/// assert_eq!(iterator.next(), None);
/// assert!(!iterator.is_producer_running());
/// ```
pub struct SetIterator<T> {
    receiver: Receiver<T>,
    stop: Option<Sender<()>>,
    producer: Option<JoinHandle<()>>,
    stopped: bool,
}

impl<T: Send + 'static> SetIterator<T> {
    fn spawn(snapshot: Vec<T>, buffer: usize) -> Self {
        let (sender, receiver) = crossbeam_channel::bounded(buffer);
        let (stop_sender, stop_receiver) = crossbeam_channel::bounded(1);
        let producer = thread::spawn(move || produce(snapshot, sender, stop_receiver));

        Self {
            receiver,
            stop: Some(stop_sender),
            producer: Some(producer),
            stopped: false,
        }
    }
}

impl<T> SetIterator<T> {
    /// Abandons the traversal and waits for the producer thread to exit.
    ///
    /// Subsequent calls to `next` return `None`. Calling `stop` more than once
    /// is a no-op.
    pub fn stop(&mut self) {
        self.stopped = true;
        if let Some(stop) = self.stop.take() {
            // An error means the producer already finished and hung up.
            let _ = stop.try_send(());
        }
        if let Some(producer) = self.producer.take()
            && producer.join().is_err()
        {
            tracing::warn!("set iterator producer panicked");
        }
    }

    /// Returns `true` while the producer thread is alive.
    #[must_use]
    pub fn is_producer_running(&self) -> bool {
        self.producer
            .as_ref()
            .is_some_and(|producer| !producer.is_finished())
    }
}

impl<T> Iterator for SetIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        self.receiver.recv().ok()
    }
}

impl<T> Drop for SetIterator<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[allow(clippy::needless_pass_by_value)]
fn produce<T>(snapshot: Vec<T>, sender: Sender<T>, stop: Receiver<()>) {
    let total = snapshot.len();
    let mut delivered = 0_usize;
    let mut stopped_early = false;
    tracing::trace!(total, "set iterator producer started");

    for element in snapshot {
        select! {
            send(sender, element) -> result => {
                if result.is_err() {
                    stopped_early = true;
                    break;
                }
                delivered += 1;
            }
            // a stop message or a dropped stop sender
            recv(stop) -> _ => {
                stopped_early = true;
                break;
            }
        }
    }

    tracing::trace!(total, delivered, stopped_early, "set iterator producer exited");
}

// =============================================================================
// SetStream
// =============================================================================

#[cfg(feature = "async")]
pub use self::stream::SetStream;

#[cfg(feature = "async")]
mod stream {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tokio::sync::mpsc;

    use super::Set;

    /// Elements produced ahead of the consumer; tokio channels cannot be
    /// unbuffered.
    const STREAM_BUFFER: usize = 1;

    impl<T: Clone + Send + 'static> Set<T> {
        /// Returns an asynchronous stream over a snapshot of the set.
        ///
        /// A tokio task feeds the stream through a bounded channel and exits
        /// once every element is delivered, the stream is
        /// [closed](SetStream::close), or the stream is dropped.
        ///
        /// # Panics
        ///
        /// Panics when called outside a tokio runtime.
        #[must_use]
        pub fn stream(&self) -> SetStream<T> {
            let snapshot: Vec<T> = self.iter().cloned().collect();
            let (sender, receiver) = mpsc::channel(STREAM_BUFFER);
            tokio::spawn(async move {
                for element in snapshot {
                    if sender.send(element).await.is_err() {
                        break;
                    }
                }
            });
            SetStream { receiver }
        }
    }

    /// An asynchronous stream over a snapshot of a [`Set`].
    ///
    /// Created by [`Set::stream`].
    pub struct SetStream<T> {
        receiver: mpsc::Receiver<T>,
    }

    impl<T> SetStream<T> {
        /// Stops the producing task; elements already buffered can still be
        /// received.
        pub fn close(&mut self) {
            self.receiver.close();
        }
    }

    impl<T> futures::Stream for SetStream<T> {
        type Item = T;

        fn poll_next(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Option<T>> {
            self.get_mut().receiver.poll_recv(context)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::time::Duration;

    #[rstest]
    fn test_each_visits_every_element() {
        let set: Set<i32> = (1..=10).collect();
        let mut sum = 0;
        set.each(|element| {
            sum += element;
            false
        });
        assert_eq!(sum, 55);
    }

    #[rstest]
    fn test_each_stops_when_visitor_returns_true() {
        let set: Set<i32> = (0..50).collect();
        let mut calls = 0;
        set.each(|_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn test_iterator_delivers_each_element_once() {
        let set: Set<i32> = (0..200).collect();
        let mut received: Vec<i32> = set.iterator().collect();
        received.sort_unstable();
        assert_eq!(received, (0..200).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_iterator_is_one_shot_and_restartable() {
        let set = Set::from_elements([1, 2, 3]);
        let mut first = set.iterator();
        assert_eq!(first.by_ref().count(), 3);
        assert_eq!(first.next(), None);
        assert_eq!(set.iterator().count(), 3);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(1_000)]
    fn test_iterator_with_buffer(#[case] buffer: usize) {
        let set: Set<u16> = (0..100).collect();
        assert_eq!(set.iterator_with_buffer(buffer).count(), 100);
    }

    #[rstest]
    fn test_iterator_sees_snapshot() {
        let mut set = Set::from_elements([1, 2]);
        let iterator = set.iterator();
        set.add(3);
        assert_eq!(iterator.count(), 2);
    }

    #[rstest]
    fn test_stop_immediately_does_not_deadlock() {
        let elements: Vec<Arc<u32>> = (0..10_000).map(Arc::new).collect();
        let set: Set<Arc<u32>> = elements.iter().cloned().collect();

        let (done_sender, done_receiver) = crossbeam_channel::bounded(1);
        thread::spawn(move || {
            let mut iterator = set.iterator();
            iterator.stop();
            let after_stop = iterator.next();
            drop(set);
            let _ = done_sender.send(after_stop.is_none());
        });

        let exhausted = done_receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("stopping the iterator deadlocked");
        assert!(exhausted);
        // The producer has exited and dropped its snapshot.
        assert!(elements.iter().all(|element| Arc::strong_count(element) == 1));
    }

    #[rstest]
    fn test_drop_after_partial_read_releases_snapshot() {
        let elements: Vec<Arc<u32>> = (0..100).map(Arc::new).collect();
        let set: Set<Arc<u32>> = elements.iter().cloned().collect();
        drop(set);

        let snapshot_set: Set<Arc<u32>> = elements.iter().cloned().collect();
        let mut iterator = snapshot_set.iterator();
        drop(snapshot_set);
        let _ = iterator.next();
        drop(iterator);

        // Every clone held by the producer has been released.
        assert!(elements.iter().all(|element| Arc::strong_count(element) == 1));
    }

    #[rstest]
    fn test_iter_channel_drains() {
        let set: Set<i32> = (0..20).collect();
        let mut received: Vec<i32> = set.iter_channel().iter().collect();
        received.sort_unstable();
        assert_eq!(received, (0..20).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_iter_channel_empty_set_disconnects() {
        let set: Set<i32> = Set::new();
        let receiver = set.iter_channel();
        assert!(receiver.recv_timeout(Duration::from_secs(5)).is_err());
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_stream_yields_every_element() {
        use futures::StreamExt;

        let set: Set<i32> = (0..30).collect();
        let mut received: Vec<i32> = set.stream().collect().await;
        received.sort_unstable();
        assert_eq!(received, (0..30).collect::<Vec<_>>());
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_stream_close_ends_stream() {
        use futures::StreamExt;

        let set: Set<i32> = (0..1_000).collect();
        let mut stream = set.stream();
        assert!(stream.next().await.is_some());
        stream.close();
        let remaining = stream.count().await;
        assert!(remaining <= 1);
    }
}

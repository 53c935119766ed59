use crate::{Error, Result};
use std::{
    collections::VecDeque,
    future::Future,
    pin::Pin,
    sync::{Mutex as StdMutex, MutexGuard, PoisonError},
    task::{Context, Poll},
    time::Duration,
};
use tokio::sync::oneshot;

/// Single-permit asynchronous mutex with strict FIFO handoff.
///
/// Acquiring an uncontended mutex is a synchronous fast path with no
/// suspension. Under contention callers queue and are resumed strictly in
/// arrival order; releasing transfers holdership directly to the queue head
/// instead of transiting through the free state. A cancelled or timed-out
/// waiter is unlinked from the queue without disturbing the order of the
/// rest, and a permit that was already transferred to it is passed on.
pub struct AsyncMutex {
    state: StdMutex<State>,
}

struct State {
    held: bool,
    next_id: u64,
    queue: VecDeque<Waiter>,
}

struct Waiter {
    id: u64,
    tx: oneshot::Sender<()>,
}

impl AsyncMutex {
    pub fn new() -> Self {
        Self {
            state: StdMutex::new(State {
                held: false,
                next_id: 0,
                queue: VecDeque::new(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        // The inner lock is only held for queue bookkeeping, a poisoning
        // panic cannot leave the state half written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the permit if it is free, without waiting.
    pub fn try_acquire(&self) -> Option<Releaser<'_>> {
        let mut state = self.state();
        if state.held {
            None
        } else {
            state.held = true;
            Some(Releaser::new(self))
        }
    }

    /// Wait for the permit. Resolves immediately when the mutex is free.
    pub async fn acquire(&self) -> Releaser<'_> {
        let (id, rx) = {
            let mut state = self.state();
            if !state.held {
                state.held = true;
                return Releaser::new(self);
            }
            let (tx, rx) = oneshot::channel();
            let id = state.next_id;
            state.next_id += 1;
            state.queue.push_back(Waiter { id, tx });
            (id, rx)
        };
        Pending {
            mutex: self,
            id,
            rx,
            granted: false,
        }
        .await;
        Releaser::new(self)
    }

    /// Wait for the permit, racing an independent timer. On expiry the
    /// waiter is removed from the queue and `Error::Timeout` is raised; the
    /// mutex never keeps a phantom waiter.
    pub async fn acquire_timeout(&self, timeout: Duration) -> Result<Releaser<'_>> {
        tokio::time::timeout(timeout, self.acquire())
            .await
            .map_err(|_| Error::Timeout(timeout))
    }

    fn release(&self) {
        let mut state = self.state();
        release_locked(&mut state);
    }
}

impl Default for AsyncMutex {
    fn default() -> Self {
        Self::new()
    }
}

fn release_locked(state: &mut State) {
    while let Some(waiter) = state.queue.pop_front() {
        // Holdership transfers to the first waiter still listening; one
        // whose receiver is already gone was cancelled concurrently.
        if waiter.tx.send(()).is_ok() {
            return;
        }
    }
    state.held = false;
}

/// A queued acquisition; unlinks itself from the queue when dropped before
/// being granted.
struct Pending<'a> {
    mutex: &'a AsyncMutex,
    id: u64,
    rx: oneshot::Receiver<()>,
    granted: bool,
}

impl Future for Pending<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.as_mut().get_mut();
        loop {
            match Pin::new(&mut this.rx).poll(cx) {
                Poll::Ready(Ok(())) => {
                    this.granted = true;
                    return Poll::Ready(());
                }
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(_)) => {
                    // The sender lives in the queue and the mutex outlives
                    // this future, so the channel should never close without
                    // a handoff. Re-enqueue on a fresh channel rather than
                    // abort.
                    debug_assert!(false, "mutex waiter lost its wakeup channel");
                    let (tx, rx) = oneshot::channel();
                    let mut state = this.mutex.state();
                    if !state.held {
                        state.held = true;
                        this.granted = true;
                        return Poll::Ready(());
                    }
                    state.queue.push_back(Waiter { id: this.id, tx });
                    drop(state);
                    this.rx = rx;
                }
            }
        }
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if self.granted {
            return;
        }
        let mut state = self.mutex.state();
        if let Some(position) = state.queue.iter().position(|w| w.id == self.id) {
            // Still queued: abandon the wait, FIFO order of the rest stays.
            state.queue.remove(position);
        } else if self.rx.try_recv().is_ok() {
            // The permit raced our cancellation and was already handed to
            // us; pass it on so it is not leaked.
            release_locked(&mut state);
        }
    }
}

/// One-shot handle whose drop releases the acquired permit exactly once.
pub struct Releaser<'a> {
    mutex: &'a AsyncMutex,
    released: bool,
}

impl<'a> Releaser<'a> {
    fn new(mutex: &'a AsyncMutex) -> Self {
        Self {
            mutex,
            released: false,
        }
    }

    /// Release explicitly; equivalent to dropping the handle.
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.mutex.release();
        }
    }
}

impl Drop for Releaser<'_> {
    fn drop(&mut self) {
        self.release_once();
    }
}

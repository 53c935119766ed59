use crate::{Error, Result};
use log::warn;
use std::{fmt::Display, future::Future, time::Duration};

/// Retry schedule for [`run_with_retry`].
///
/// `max_retries` counts the re-invocations after the first attempt, so a
/// value of 3 allows four invocations in total. An optional classifier
/// restricts which errors are worth retrying; without one every error is.
pub struct RetryPolicy<E> {
    max_retries: u32,
    interval: Duration,
    should_retry: Option<Box<dyn Fn(&E) -> bool + Send + Sync>>,
}

impl<E> RetryPolicy<E> {
    pub fn new(max_retries: u32, interval: Duration) -> Self {
        Self {
            max_retries,
            interval,
            should_retry: None,
        }
    }

    /// Retry only the errors the classifier accepts.
    pub fn retry_if(mut self, classifier: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        self.should_retry = Some(Box::new(classifier));
        self
    }

    fn retryable(&self, error: &E) -> bool {
        self.should_retry.as_ref().is_none_or(|f| f(error))
    }
}

/// Run a fallible operation, re-invoking it on retryable errors until the
/// policy is exhausted. The error that ends the loop is returned unchanged.
pub async fn run_with_retry<T, E, F, Fut>(
    mut operation: F,
    policy: &RetryPolicy<E>,
) -> std::result::Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                attempt += 1;
                if attempt > policy.max_retries || !policy.retryable(&error) {
                    return Err(error);
                }
                warn!(
                    "attempt {}/{} failed, retrying in {:?}: {}",
                    attempt,
                    policy.max_retries + 1,
                    policy.interval,
                    error,
                );
                tokio::time::sleep(policy.interval).await;
            }
        }
    }
}

/// Race an operation against a time budget and a cancellation signal.
///
/// The operation is spawned, not polled inline: once started it runs to
/// completion on the runtime even when the budget expires first, only the
/// caller stops waiting for it.
pub async fn run_with_timeout<F>(
    operation: F,
    duration: Duration,
    cancellation: impl Future<Output = ()>,
) -> Result<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    if duration.is_zero() {
        return Err(Error::validation("timeout must be greater than zero"));
    }
    let mut operation = tokio::spawn(operation);
    let timer = tokio::time::sleep(duration);
    tokio::pin!(timer);
    tokio::pin!(cancellation);
    tokio::select! {
        result = &mut operation => match result {
            Ok(value) => Ok(value),
            // A panic inside the operation is the caller's panic, not a
            // cancellation.
            Err(error) if error.is_panic() => {
                std::panic::resume_unwind(error.into_panic())
            }
            Err(_) => Err(Error::Cancelled),
        },
        () = &mut timer => Err(Error::Timeout(duration)),
        () = &mut cancellation => Err(Error::Cancelled),
    }
}

/// Run an operation whose failure is tolerable, routing the error to a
/// handler instead of the caller.
pub async fn run_ignoring_errors<T, E, F>(operation: F, mut on_error: impl FnMut(E)) -> Option<T>
where
    F: Future<Output = std::result::Result<T, E>>,
{
    match operation.await {
        Ok(value) => Some(value),
        Err(error) => {
            on_error(error);
            None
        }
    }
}

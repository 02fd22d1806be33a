//! Background execution of one transform instance
//!
//! A [`TransformSession`] owns its transform behind an async mutex and runs
//! every call on tokio's blocking pool. Calls against one session are
//! serialized; separate sessions are fully independent.

use crate::error::{Result, TransformError};
use crate::options::{TransformOptions, ValidationReport};
use crate::transform::{Direction, KeyMaterial, Transform, TransformOutput};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::{oneshot, Mutex};

/// Pending result of a session call
///
/// Resolves to [`TransformError::Internal`] if the worker was lost before
/// it reported back.
#[must_use = "an execution task does nothing unless awaited"]
pub struct ExecutionTask<T> {
    receiver: oneshot::Receiver<Result<T>>,
}

impl<T> ExecutionTask<T> {
    fn new(receiver: oneshot::Receiver<Result<T>>) -> Self {
        Self { receiver }
    }

    /// Task that is already complete
    pub fn ready(result: Result<T>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self::new(rx)
    }
}

impl<T> Future for ExecutionTask<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(TransformError::Internal(
                "transform task dropped".to_string(),
            ))),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// A transform driven from async code
///
/// Must be used from within a tokio runtime. Clones share the same
/// transform instance.
#[derive(Debug, Clone)]
pub struct TransformSession {
    name: &'static str,
    transform: Arc<Mutex<Transform>>,
}

impl TransformSession {
    /// Take ownership of `transform`
    #[must_use]
    pub fn new(transform: Transform) -> Self {
        Self {
            name: transform.name(),
            transform: Arc::new(Mutex::new(transform)),
        }
    }

    /// Session over a fresh transform from the registry
    ///
    /// # Errors
    ///
    /// [`TransformError::NotFound`] on a registry miss.
    pub fn resolve(category: &str, name: &str) -> Result<Self> {
        crate::registry::resolve(category, name).map(Self::new)
    }

    /// Display name of the owned transform
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run `input` through the transform in `direction`
    pub fn execute(
        &self,
        direction: Direction,
        input: impl Into<Vec<u8>>,
    ) -> ExecutionTask<Option<TransformOutput>> {
        let input = input.into();
        self.spawn(move |transform| transform.execute(direction, &input))
    }

    /// Apply `options`; the report is delivered once they are in effect
    pub fn configure(&self, options: TransformOptions) -> ExecutionTask<ValidationReport> {
        self.spawn(move |transform| Ok(transform.configure(&options)))
    }

    /// Generate and install fresh key material
    pub fn generate_key_material(&self) -> ExecutionTask<Option<KeyMaterial>> {
        self.spawn(Transform::generate_key_material)
    }

    fn spawn<T, F>(&self, work: F) -> ExecutionTask<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Transform) -> Result<T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let transform = Arc::clone(&self.transform);
        tokio::task::spawn_blocking(move || {
            let mut guard = transform.blocking_lock();
            let _ = tx.send(work(&mut guard));
        });
        ExecutionTask::new(rx)
    }
}

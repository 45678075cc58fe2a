//! Designated delivery context.
//!
//! All state mutation for a screen happens on one thread: the thread that
//! owns the [`MainContext`] and drains it. Asynchronous work runs on the
//! tokio runtime and crosses back by posting a job.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Queue of jobs executed by whoever owns the context (the UI loop).
pub struct MainContext {
    sender: mpsc::UnboundedSender<Job>,
    receiver: mpsc::UnboundedReceiver<Job>,
    runtime: Handle,
}

impl MainContext {
    pub fn new(runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            runtime,
        }
    }

    pub fn handle(&self) -> MainHandle {
        MainHandle {
            sender: self.sender.clone(),
            runtime: self.runtime.clone(),
        }
    }

    /// Run every job already queued without waiting. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Wait for the next job and run it. Returns `false` once the channel is
    /// closed.
    pub async fn run_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }
}

/// Cloneable, thread-safe handle for posting work onto a [`MainContext`].
#[derive(Clone)]
pub struct MainHandle {
    sender: mpsc::UnboundedSender<Job>,
    runtime: Handle,
}

impl MainHandle {
    /// Queue `job` for the owning thread. Returns `false` if the context is
    /// gone.
    pub fn post<F>(&self, job: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender.send(Box::new(job)).is_ok()
    }

    /// Run `future` on the runtime, then deliver its output to
    /// `on_complete` on the owning thread.
    pub fn spawn_then<Fut, F>(&self, future: Fut, on_complete: F)
    where
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
        F: FnOnce(Fut::Output) + Send + 'static,
    {
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let output = future.await;
            if sender.send(Box::new(move || on_complete(output))).is_err() {
                tracing::debug!("completion dropped: delivery context closed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[tokio::test]
    async fn posted_jobs_run_only_when_drained() {
        let mut context = MainContext::new(Handle::current());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = context.handle();
        for n in 0..3 {
            let sink = Arc::clone(&seen);
            assert!(handle.post(move || sink.lock().push(n)));
        }
        assert!(seen.lock().is_empty());

        assert_eq!(context.run_pending(), 3);
        assert_eq!(*seen.lock(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn spawn_then_delivers_on_context() {
        let mut context = MainContext::new(Handle::current());
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);

        context
            .handle()
            .spawn_then(async { 40 + 2 }, move |value| *sink.lock() = Some(value));

        assert!(context.run_next().await);
        assert_eq!(*seen.lock(), Some(42));
    }

    #[tokio::test]
    async fn post_after_context_dropped_reports_failure() {
        let context = MainContext::new(Handle::current());
        let handle = context.handle();
        drop(context);
        assert!(!handle.post(|| {}));
    }
}

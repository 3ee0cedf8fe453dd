//! Background delivery worker
//!
//! The detached-task primitive behind file appends and remote sends: a
//! dedicated thread drains submitted jobs in order, so `emit` returns as
//! soon as the work is enqueued. Failures inside a job are the job's own
//! responsibility to report.

use crate::core::error::{Result, TransportError};
use crossbeam_channel::{unbounded, Sender};
use std::thread;
use std::time::Duration;

/// Bound on how long a dropped worker waits for in-flight jobs to drain.
pub(crate) const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

type Job = Box<dyn FnOnce() + Send + 'static>;

pub(crate) struct DeliveryWorker {
    transport: &'static str,
    sender: Option<Sender<Job>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl DeliveryWorker {
    pub(crate) fn spawn(transport: &'static str) -> Self {
        let (sender, receiver) = unbounded::<Job>();

        let handle = thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                job();
            }
        });

        Self {
            transport,
            sender: Some(sender),
            handle: Some(handle),
        }
    }

    /// Enqueue a job without blocking. Jobs run in submission order.
    pub(crate) fn submit(&self, job: impl FnOnce() + Send + 'static) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or(TransportError::WorkerUnavailable {
                transport: self.transport,
            })?;
        sender
            .send(Box::new(job))
            .map_err(|_| TransportError::WorkerUnavailable {
                transport: self.transport,
            })
    }
}

impl Drop for DeliveryWorker {
    fn drop(&mut self) {
        // Disconnect the channel so the worker exits once drained
        drop(self.sender.take());

        if let Some(handle) = self.handle.take() {
            let start = std::time::Instant::now();

            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!(
                            "[LOGGER ERROR] delivery worker for '{}' panicked during shutdown: {:?}",
                            self.transport, e
                        );
                    }
                    break;
                }

                if start.elapsed() >= SHUTDOWN_TIMEOUT {
                    eprintln!(
                        "[LOGGER WARNING] delivery worker for '{}' did not finish within {:?}. \
                         Some log deliveries may be lost.",
                        self.transport, SHUTDOWN_TIMEOUT
                    );
                    break;
                }

                thread::sleep(Duration::from_millis(10));
            }
        }
    }
}

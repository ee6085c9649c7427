use crate::{DeviceError, DeviceResult};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

static NEXT_STREAM_ID: AtomicUsize = AtomicUsize::new(0);

type Launch = Box<dyn FnOnce() -> DeviceResult<()> + Send + 'static>;

struct Job {
    name: &'static str,
    launch: Launch,
}

#[derive(Default)]
struct StreamState {
    pending: Mutex<usize>,
    drained: Condvar,
    failure: Mutex<Option<DeviceError>>,
}

impl StreamState {
    fn finish_one(&self) {
        // a poisoned counter can only come from a panic while holding it,
        // which never happens below
        if let Ok(mut pending) = self.pending.lock() {
            *pending = pending.saturating_sub(1);
            if *pending == 0 {
                self.drained.notify_all();
            }
        }
    }

    fn record(&self, err: DeviceError) {
        if let Ok(mut failure) = self.failure.lock() {
            if failure.is_none() {
                *failure = Some(err);
            }
        }
    }
}

/// In-order execution queue.
///
/// Every launch enqueued on a stream runs after all launches enqueued
/// before it. `launch` returns as soon as the work is queued; there is no
/// way to cancel queued work.
pub struct Stream {
    id: usize,
    queue: Option<Sender<Job>>,
    state: Arc<StreamState>,
    worker: Option<JoinHandle<()>>,
}

impl Stream {
    pub fn new() -> DeviceResult<Self> {
        let (queue, jobs) = mpsc::channel::<Job>();
        let state = Arc::new(StreamState::default());
        let id = NEXT_STREAM_ID.fetch_add(1, Ordering::Relaxed);

        let worker_state = Arc::clone(&state);
        let worker = thread::Builder::new()
            .name(format!("xc-stream-{}", id))
            .spawn(move || run_queue(jobs, worker_state))
            .map_err(|e| DeviceError::Spawn(e.to_string()))?;

        log::debug!("stream {} created", id);

        Ok(Stream {
            id,
            queue: Some(queue),
            state,
            worker: Some(worker),
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Enqueues `work`. A failure returned by `work` is kept on the stream
    /// and reported by the next [`Stream::synchronize`].
    pub fn launch<F>(&self, name: &'static str, work: F) -> DeviceResult<()>
    where
        F: FnOnce() -> DeviceResult<()> + Send + 'static,
    {
        let queue = self.queue.as_ref().ok_or(DeviceError::StreamClosed)?;

        {
            let mut pending = self.state.pending.lock().map_err(|_| DeviceError::Poisoned)?;
            *pending += 1;
        }

        let job = Job {
            name,
            launch: Box::new(work),
        };

        if queue.send(job).is_err() {
            self.state.finish_one();
            return Err(DeviceError::StreamClosed);
        }

        Ok(())
    }

    /// Blocks until every launch enqueued so far has completed, then
    /// reports the first failure among them, if any.
    pub fn synchronize(&self) -> DeviceResult<()> {
        let mut pending = self.state.pending.lock().map_err(|_| DeviceError::Poisoned)?;

        while *pending > 0 {
            pending = self
                .state
                .drained
                .wait(pending)
                .map_err(|_| DeviceError::Poisoned)?;
        }

        drop(pending);

        let failure = self
            .state
            .failure
            .lock()
            .map_err(|_| DeviceError::Poisoned)?
            .take();

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Number of launches queued or running.
    pub fn pending(&self) -> usize {
        self.state.pending.lock().map(|p| *p).unwrap_or(0)
    }
}

impl Drop for Stream {
    fn drop(&mut self) {
        // closing the channel lets the worker drain what is left and exit
        self.queue.take();

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("stream {} worker terminated abnormally", self.id);
            }
        }
    }
}

fn run_queue(jobs: Receiver<Job>, state: Arc<StreamState>) {
    for job in jobs {
        let name = job.name;

        let outcome = match panic::catch_unwind(AssertUnwindSafe(job.launch)) {
            Ok(outcome) => outcome,
            Err(_) => Err(DeviceError::Launch {
                name,
                reason: "launch panicked".to_string(),
            }),
        };

        if let Err(err) = outcome {
            log::error!("launch '{}' failed: {}", name, err);
            state.record(err);
        }

        state.finish_one();
    }
}

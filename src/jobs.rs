use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// A request running on its own worker thread. The UI thread polls once
/// per frame; dropping the job abandons the result, since in-flight
/// requests are never cancelled.
pub struct Job<T> {
    rx: Receiver<T>,
}

impl<T: Send + 'static> Job<T> {
    pub fn spawn<F>(work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone when the user already navigated away.
            let _ = tx.send(work());
        });
        Job { rx }
    }

    pub fn poll(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn delivers_the_result_exactly_once() {
        let job = Job::spawn(|| 42);

        let mut seen = None;
        for _ in 0..200 {
            if let Some(value) = job.poll() {
                seen = Some(value);
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(seen, Some(42));
        assert_eq!(job.poll(), None);
    }

    #[test]
    fn pending_job_polls_as_none() {
        let job = Job::spawn(|| {
            thread::sleep(Duration::from_millis(200));
            1
        });
        assert_eq!(job.poll(), None);
    }
}

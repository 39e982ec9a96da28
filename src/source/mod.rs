use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Result;
use parking_lot::Mutex;
use zmotion_engine::{source::SourceStatus, Engine};

use crate::util::thread::ThreadHandle;

pub mod replay;
pub mod synthetic;

const T: &'static str = "source";

/// Runs a source's driver loop on its own thread and tracks how it ended.
pub struct Runner {
    inner: Mutex<Inner>,
}

enum Inner {
    Uninit,
    Failed(String),
    Init {
        handle: ThreadHandle<()>,
        status: Arc<Mutex<SourceStatus>>,
    },
}

impl Runner {
    pub fn new() -> Self {
        Runner {
            inner: Mutex::new(Inner::Uninit),
        }
    }

    /// Stops a driver that is already running before starting the new one.
    /// The driver should return once the flag it is given is set.
    pub fn start<F>(&self, name: &'static str, engine: Arc<Engine>, driver: F)
    where
        F: FnOnce(Arc<Engine>, &AtomicBool) -> Result<()> + Send + 'static,
    {
        self.stop();

        let status = Arc::new(Mutex::new(SourceStatus::Running));
        let thread_status = status.clone();
        let spawned = ThreadHandle::spawn(name, move |stop: Arc<AtomicBool>| {
            log::info!(target: T, "{} started", name);

            match driver(engine, &*stop) {
                Ok(()) => {
                    log::info!(target: T, "{} stopped", name);
                    *thread_status.lock() = SourceStatus::Stopped;
                }
                Err(err) => {
                    log::error!(target: T, "{} crashed: {:#}", name, err);
                    *thread_status.lock() = SourceStatus::Error(format!("crashed: {:#}", err));
                }
            }
        });

        match spawned {
            Ok(handle) => *self.inner.lock() = Inner::Init { handle, status },
            Err(err) => {
                log::error!(target: T, "failed to spawn {}: {}", name, err);
                *self.inner.lock() = Inner::Failed(format!("failed to spawn thread: {}", err));
            }
        }
    }

    /// A crash reported by the driver stays visible until the next start.
    pub fn stop(&self) {
        let inner = std::mem::replace(&mut *self.inner.lock(), Inner::Uninit);

        let Inner::Init { handle, status } = inner
        else { return; };

        if handle.stop().is_err() {
            log::error!(target: T, "driver panicked");
            *status.lock() = SourceStatus::Error("driver panicked".to_owned());
        }

        let mut status = status.lock();
        if *status == SourceStatus::Running {
            *status = SourceStatus::Stopped;
        } else if let SourceStatus::Error(err) = &*status {
            *self.inner.lock() = Inner::Failed(err.clone());
        }
    }

    pub fn status(&self) -> SourceStatus {
        match &*self.inner.lock() {
            Inner::Uninit => SourceStatus::Stopped,
            Inner::Failed(err) => SourceStatus::Error(err.clone()),
            Inner::Init { status, .. } => status.lock().clone(),
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sleeps for `duration` in short steps, returning early once `stop` is set.
/// Returns whether the source should keep going.
fn sleep_unless_stopped(stop: &AtomicBool, duration: std::time::Duration) -> bool {
    const STEP: std::time::Duration = std::time::Duration::from_millis(20);

    let mut left = duration;
    while !left.is_zero() {
        if stop.load(Ordering::Acquire) {
            return false;
        }

        let step = left.min(STEP);
        std::thread::sleep(step);
        left -= step;
    }

    !stop.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        time::{Duration, Instant},
    };

    use anyhow::bail;
    use zmotion_engine::{orientation::NoOrientation, source::SourceStatus, Engine};

    use super::{sleep_unless_stopped, Runner};

    fn engine() -> Arc<Engine> {
        let (engine, _receiver) = Engine::new(Arc::new(NoOrientation));
        Arc::new(engine)
    }

    fn wait_for(runner: &Runner, expected: SourceStatus) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while runner.status() != expected {
            assert!(Instant::now() < deadline, "status stayed {}", runner.status());
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn stopped_until_started() {
        let runner = Runner::new();
        assert_eq!(runner.status(), SourceStatus::Stopped);
        runner.stop();
        assert_eq!(runner.status(), SourceStatus::Stopped);
    }

    #[test]
    fn running_until_stopped() {
        let runner = Runner::new();
        runner.start("test", engine(), |_, stop| {
            while !stop.load(Ordering::Acquire) {
                std::thread::sleep(Duration::from_millis(1));
            }
            Ok(())
        });

        assert_eq!(runner.status(), SourceStatus::Running);
        runner.stop();
        assert_eq!(runner.status(), SourceStatus::Stopped);
    }

    #[test]
    fn crash_is_reported_with_context() {
        let runner = Runner::new();
        runner.start("test", engine(), |_, _| bail!("no sensor"));

        wait_for(&runner, SourceStatus::Error("crashed: no sensor".to_owned()));
    }

    #[test]
    fn crash_survives_stop() {
        let runner = Runner::new();
        runner.start("test", engine(), |_, _| bail!("no sensor"));
        wait_for(&runner, SourceStatus::Error("crashed: no sensor".to_owned()));

        runner.stop();
        assert_eq!(runner.status(), SourceStatus::Error("crashed: no sensor".to_owned()));

        runner.start("test", engine(), |_, _| Ok(()));
        wait_for(&runner, SourceStatus::Stopped);
    }

    #[test]
    fn driver_returning_early_is_stopped() {
        let runner = Runner::new();
        runner.start("test", engine(), |_, _| Ok(()));

        wait_for(&runner, SourceStatus::Stopped);
    }

    #[test]
    fn sleep_ends_early_when_stopped() {
        let stop = AtomicBool::new(true);
        let started = Instant::now();

        assert!(!sleep_unless_stopped(&stop, Duration::from_secs(10)));
        assert!(started.elapsed() < Duration::from_secs(1));

        let stop = AtomicBool::new(false);
        assert!(sleep_unless_stopped(&stop, Duration::from_millis(1)));
    }
}

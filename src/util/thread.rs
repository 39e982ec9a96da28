use std::{
    any::Any,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::JoinHandle,
};

/// A named thread that is asked to stop through a shared flag.
pub struct ThreadHandle<T> {
    handle: JoinHandle<T>,
    stop: Arc<AtomicBool>,
}

impl<T> ThreadHandle<T>
where
    T: Send + 'static,
{
    /// The closure receives the stop flag and should return soon after it is set.
    pub fn spawn<F>(name: &str, thread: F) -> std::io::Result<Self>
    where
        F: FnOnce(Arc<AtomicBool>) -> T + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = stop.clone();
        let handle = std::thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || thread(thread_stop))?;

        Ok(ThreadHandle { handle, stop })
    }

    pub fn stop(self) -> Result<T, Box<dyn Any + Send>> {
        self.stop.store(true, Ordering::Release);

        self.handle.join()
    }
}

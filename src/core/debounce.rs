//! Cancellable debounce timer.
//!
//! Semantics: `submit` replaces any pending value and restarts the quiet
//! period; the callback fires once the input has been stable for the whole
//! period. Dropping the `Debouncer` cancels a pending fire, so no stale
//! callback runs after teardown.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

enum Msg {
    Input(String),
    Shutdown,
}

pub struct Debouncer {
    tx: Sender<Msg>,
    handle: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Spawn the timer thread. `on_fire` runs on that thread with the most
    /// recent value once the channel has been quiet for `quiet`.
    pub fn new<F>(quiet: Duration, mut on_fire: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Msg>();

        let handle = thread::spawn(move || {
            let mut pending: Option<String> = None;
            loop {
                let msg = if pending.is_some() {
                    match rx.recv_timeout(quiet) {
                        Ok(m) => m,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(value) = pending.take() {
                                on_fire(value);
                            }
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                } else {
                    match rx.recv() {
                        Ok(m) => m,
                        Err(_) => break,
                    }
                };

                match msg {
                    // new input cancels the pending fire and restarts the timer
                    Msg::Input(value) => pending = Some(value),
                    Msg::Shutdown => break,
                }
            }
        });

        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Record a new input value, restarting the quiet period.
    pub fn submit<S: Into<String>>(&self, value: S) {
        let _ = self.tx.send(Msg::Input(value.into()));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        let _ = self.tx.send(Msg::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn collector() -> (Arc<Mutex<Vec<String>>>, Box<dyn FnMut(String) + Send>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        (fired, Box::new(move |v: String| sink.lock().unwrap().push(v)))
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let (fired, sink) = collector();
        let d = Debouncer::new(Duration::from_millis(40), sink);
        d.submit("rea");
        thread::sleep(Duration::from_millis(150));
        assert_eq!(*fired.lock().unwrap(), vec!["rea"]);
    }

    #[test]
    fn new_input_restarts_the_timer() {
        let (fired, sink) = collector();
        let d = Debouncer::new(Duration::from_millis(80), sink);
        d.submit("r");
        thread::sleep(Duration::from_millis(20));
        d.submit("re");
        thread::sleep(Duration::from_millis(20));
        d.submit("react");
        // only the last value fires, once
        thread::sleep(Duration::from_millis(250));
        assert_eq!(*fired.lock().unwrap(), vec!["react"]);
    }

    #[test]
    fn drop_cancels_pending_fire() {
        let (fired, sink) = collector();
        {
            let d = Debouncer::new(Duration::from_millis(200), sink);
            d.submit("doomed");
            // dropped well inside the quiet period
        }
        thread::sleep(Duration::from_millis(300));
        assert!(fired.lock().unwrap().is_empty());
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Cancellable repeating tick source.
//!
//! A `Ticker` owns a background thread that emits one tick per period
//! over a channel. Dropping the ticker stops and joins the thread, so at
//! most one tick stream exists per live ticker.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

pub struct Ticker {
    /// Dropping this sender disconnects the thread's stop channel
    stop: Option<Sender<()>>,
    ticks: Receiver<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking every `period`. `on_tick` runs on the ticker thread
    /// after each tick is queued (used to wake the UI).
    pub fn spawn<F>(period: Duration, on_tick: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (stop_tx, stop_rx) = channel::<()>();
        let (tick_tx, tick_rx) = channel();

        let handle = std::thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if tick_tx.send(()).is_err() {
                        break;
                    }
                    on_tick();
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            stop: Some(stop_tx),
            ticks: tick_rx,
            handle: Some(handle),
        }
    }

    /// Number of ticks elapsed since the last call.
    pub fn drain(&self) -> usize {
        self.ticks.try_iter().count()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Ticker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn test_ticks_are_delivered() {
        let ticker = Ticker::spawn(Duration::from_millis(5), || {});
        std::thread::sleep(Duration::from_millis(100));
        assert!(ticker.drain() >= 2);
    }

    #[test]
    fn test_drop_stops_ticking() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::spawn(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        std::thread::sleep(Duration::from_millis(50));
        drop(ticker);

        let after_drop = count.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn test_drop_does_not_wait_for_period() {
        let ticker = Ticker::spawn(Duration::from_secs(60), || {});
        let started = Instant::now();
        drop(ticker);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}

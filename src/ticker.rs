/*
ticker.rs

Copyright 2025 Hervé Quatremain

This file is part of Kidcomputer.

Kidcomputer is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Kidcomputer is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Kidcomputer. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Periodic timer for the clock display.
//!
//! A [`Ticker`] calls a function at a fixed period from a background thread until it is
//! cancelled, dropped, or the function asks to stop.
//! The function usually forwards the tick to the front-end event loop through an
//! [`async_channel::Sender`]; see [`Ticker::forward`].

use log::{debug, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Handle on a periodic timer.
#[derive(Debug)]
pub struct Ticker {
    /// Set to stop the timer thread.
    cancelled: Arc<AtomicBool>,

    /// Timer thread. Used to wake it up and join it when the timer is cancelled.
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start a timer that calls `on_tick` every `period` with the tick number (starting at 1).
    ///
    /// The timer stops when `on_tick` returns `false`.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) -> bool + Send + 'static,
    {
        let cancelled: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let flag: Arc<AtomicBool> = Arc::clone(&cancelled);

        let handle: JoinHandle<()> = thread::spawn(move || {
            let mut tick: u64 = 0;
            let mut next: Instant = Instant::now() + period;
            loop {
                let now: Instant = Instant::now();
                if now < next {
                    // Woken up early by cancel() or spuriously
                    thread::park_timeout(next - now);
                }
                if flag.load(Ordering::Acquire) {
                    break;
                }
                if Instant::now() < next {
                    continue;
                }
                tick += 1;
                next += period;
                if !on_tick(tick) {
                    break;
                }
            }
            debug!("Ticker stopped after {tick} tick(s)");
        });

        Self {
            cancelled,
            handle: Some(handle),
        }
    }

    /// Start a timer that sends the tick number, mapped by `event`, to the given channel.
    ///
    /// The timer stops when the channel is closed. [`Ticker::cancel`] waits for a pending send,
    /// so use an unbounded channel when the receiving thread is also the one that cancels.
    pub fn forward<T, F>(period: Duration, sender: async_channel::Sender<T>, event: F) -> Self
    where
        T: Send + 'static,
        F: Fn(u64) -> T + Send + 'static,
    {
        Self::start(period, move |tick| sender.send_blocking(event(tick)).is_ok())
    }

    /// Stop the timer and wait for its thread to exit.
    ///
    /// Once this method returns, the tick function is not called anymore. Calling this method
    /// several times is harmless.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            // The tick function itself may drop the last handle
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                warn!("The timer thread panicked");
            }
        }
    }

    /// Whether the timer was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Whether the timer thread exited, because it was cancelled or because the tick function
    /// asked to stop.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_forward_ticks() {
        let (sender, receiver) = async_channel::unbounded::<u64>();
        let ticker = Ticker::forward(Duration::from_millis(5), sender, |t| t);
        assert_eq!(receiver.recv_blocking().unwrap(), 1);
        assert_eq!(receiver.recv_blocking().unwrap(), 2);
        drop(ticker);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let (sender, receiver) = async_channel::unbounded::<u64>();
        let mut ticker = Ticker::forward(Duration::from_millis(5), sender, |t| t);
        receiver.recv_blocking().unwrap();
        ticker.cancel();
        ticker.cancel();
        assert!(ticker.is_cancelled());

        // The thread drops the sender when it exits, which closes the channel
        while receiver.recv_blocking().is_ok() {}
        assert!(receiver.is_closed());
    }

    #[test]
    fn test_stops_when_receiver_is_gone() {
        let (sender, receiver) = async_channel::bounded::<u64>(1);
        drop(receiver);
        let ticker = Ticker::forward(Duration::from_millis(1), sender, |t| t);
        let deadline = Instant::now() + Duration::from_secs(5);
        while !ticker.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(ticker.is_finished());
        assert!(!ticker.is_cancelled());
    }

    #[test]
    fn test_no_tick_after_cancel() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let mut ticker = Ticker::start(Duration::from_millis(1), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(2));
            true
        });
        thread::sleep(Duration::from_millis(20));
        ticker.cancel();
        assert!(ticker.is_finished());
        let seen = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), seen);
    }
}

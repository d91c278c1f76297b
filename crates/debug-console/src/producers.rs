//! Demo producer threads
//!
//! Stand-ins for an instrumentation pipeline: each producer runs on its own
//! thread and reports fake capture events to the debug console through a
//! [`ConsoleHandle`], alternating plain appends, formatted appends and
//! `log` records that reach the console through the console logger.

use crate::console_log;
use crate::handle::ConsoleHandle;
use crate::sink::LogSink;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Granularity at which sleeping producers notice a stop request
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Running producer threads
pub struct ProducerPool {
    stop: Arc<AtomicBool>,
    handles: Vec<thread::JoinHandle<()>>,
}

/// Spawn `count` producers, each emitting one event per `interval`
pub fn spawn_producers(count: usize, interval: Duration, console: ConsoleHandle) -> ProducerPool {
    let stop = Arc::new(AtomicBool::new(false));

    let handles = (0..count)
        .map(|id| {
            let stop = Arc::clone(&stop);
            let console = console.clone();
            thread::Builder::new()
                .name(format!("producer-{}", id))
                .spawn(move || producer_loop(id, interval, console, stop))
        })
        .filter_map(|spawned| match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("Failed to spawn producer thread: {}", e);
                None
            }
        })
        .collect::<Vec<_>>();

    log::info!("Started {} producer thread(s)", handles.len());
    ProducerPool { stop, handles }
}

impl ProducerPool {
    /// Number of running producers
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Ask all producers to stop after their current event
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Stop and wait for all producers
    ///
    /// Drop the store first: a producer blocked on a synchronous append is
    /// only released once the owner applies its action or goes away.
    pub fn join(self) {
        self.signal_stop();
        for handle in self.handles {
            if handle.join().is_err() {
                log::warn!("Producer thread panicked");
            }
        }
        log::info!("Producers stopped");
    }
}

/// Fake payload size for an event, stable per producer and sequence
fn payload_len(id: usize, seq: u64) -> u64 {
    (seq * 37 + id as u64 * 101) % 1500 + 40
}

fn producer_loop(id: usize, interval: Duration, console: ConsoleHandle, stop: Arc<AtomicBool>) {
    let mut seq: u64 = 0;

    while !stop.load(Ordering::Acquire) {
        seq += 1;
        let len = payload_len(id, seq);

        match seq % 4 {
            0 => log::info!("producer {} flushed {} events", id, seq),
            1 => console_log!(
                console,
                "producer {}: captured packet #{} ({} bytes)",
                id,
                seq,
                len
            ),
            2 => console.append_message(&format!("producer {}: recv() returned {}", id, len)),
            _ if len > 1200 => log::warn!("producer {} saw oversized payload ({} bytes)", id, len),
            _ => console_log!(console, "producer {}: send() of {} bytes", id, len),
        }

        let started = Instant::now();
        while started.elapsed() < interval {
            if stop.load(Ordering::Acquire) {
                return;
            }
            thread::sleep(STOP_POLL_INTERVAL.min(interval));
        }
    }
}

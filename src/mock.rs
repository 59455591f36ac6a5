//! Scripted transport and scheduler doubles for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::vec::Vec;

use core::time::Duration;

use crate::scheduler::Scheduler;
use crate::transport::{Transport, UpBufferMode};

#[derive(Default)]
struct State {
    incoming: VecDeque<u8>,
    read_quota: VecDeque<usize>,
    keys: VecDeque<Option<u8>>,
    write_quota: VecDeque<usize>,
    written: Vec<u8>,
    over_report: bool,
    read_calls: usize,
    key_calls: usize,
    write_calls: usize,
    modes: Vec<UpBufferMode>,
}

/// Transport whose per-call behaviour is scripted up front.
///
/// Reads hand out at most the next queued quota (unlimited once the queue is empty),
/// bounded by the bytes primed with [`MockTransport::prime`]. Writes accept the next
/// queued quota (everything once the queue is empty).
#[derive(Default)]
pub(crate) struct MockTransport {
    state: Mutex<State>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn prime(&self, bytes: &[u8]) {
        self.state.lock().unwrap().incoming.extend(bytes.iter().copied());
    }

    pub(crate) fn read_quotas(&self, quotas: &[usize]) {
        self.state.lock().unwrap().read_quota.extend(quotas.iter().copied());
    }

    /// Make every read claim one byte more than it copied.
    pub(crate) fn over_report(&self) {
        self.state.lock().unwrap().over_report = true;
    }

    pub(crate) fn keys(&self, keys: &[Option<u8>]) {
        self.state.lock().unwrap().keys.extend(keys.iter().copied());
    }

    pub(crate) fn write_quotas(&self, quotas: &[usize]) {
        self.state.lock().unwrap().write_quota.extend(quotas.iter().copied());
    }

    pub(crate) fn written(&self) -> Vec<u8> {
        self.state.lock().unwrap().written.clone()
    }

    pub(crate) fn read_calls(&self) -> usize {
        self.state.lock().unwrap().read_calls
    }

    pub(crate) fn key_calls(&self) -> usize {
        self.state.lock().unwrap().key_calls
    }

    pub(crate) fn write_calls(&self) -> usize {
        self.state.lock().unwrap().write_calls
    }

    pub(crate) fn modes(&self) -> Vec<UpBufferMode> {
        self.state.lock().unwrap().modes.clone()
    }
}

impl Transport for MockTransport {
    fn write(&self, buf: &[u8]) -> usize {
        let mut state = self.state.lock().unwrap();
        state.write_calls += 1;
        let quota = state.write_quota.pop_front().unwrap_or(usize::MAX);
        let n = buf.len().min(quota);
        state.written.extend_from_slice(&buf[..n]);
        n
    }

    fn read(&self, buf: &mut [u8]) -> usize {
        let mut state = self.state.lock().unwrap();
        state.read_calls += 1;
        let quota = state.read_quota.pop_front().unwrap_or(usize::MAX);
        let n = buf.len().min(quota).min(state.incoming.len());
        for slot in buf[..n].iter_mut() {
            *slot = state.incoming.pop_front().unwrap();
        }
        if state.over_report { n + 1 } else { n }
    }

    fn read_key(&self) -> Option<u8> {
        let mut state = self.state.lock().unwrap();
        state.key_calls += 1;
        state.keys.pop_front().flatten()
    }

    fn configure(&self, mode: UpBufferMode) {
        self.state.lock().unwrap().modes.push(mode);
    }
}

/// Scheduler that returns immediately and records each requested sleep.
#[derive(Default)]
pub(crate) struct RecordingScheduler {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingScheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Scheduler for RecordingScheduler {
    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

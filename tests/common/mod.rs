//! Shared fixtures for integration tests: a scriptable mock system and a
//! recording log sink.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use runvisor::{LogSink, System, SystemError};

/// Operation counters shared between a test and its mock system.
#[derive(Default)]
pub struct SystemProbe {
    starts: AtomicUsize,
    stops: AtomicUsize,
    restarts: AtomicUsize,
}

impl SystemProbe {
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    pub fn restarts(&self) -> usize {
        self.restarts.load(Ordering::SeqCst)
    }
}

/// Component graph stub whose outcomes are scripted per operation.
pub struct MockSystem {
    probe: Arc<SystemProbe>,
    fail_start: Option<String>,
    fail_stop: Option<String>,
    fail_restart: Option<String>,
}

impl MockSystem {
    pub fn healthy() -> (Self, Arc<SystemProbe>) {
        Self::scripted(None, None, None)
    }

    pub fn failing_start(msg: &str) -> (Self, Arc<SystemProbe>) {
        Self::scripted(Some(msg.to_string()), None, None)
    }

    pub fn failing_stop(msg: &str) -> (Self, Arc<SystemProbe>) {
        Self::scripted(None, Some(msg.to_string()), None)
    }

    pub fn failing_restart(msg: &str) -> (Self, Arc<SystemProbe>) {
        Self::scripted(None, None, Some(msg.to_string()))
    }

    fn scripted(
        fail_start: Option<String>,
        fail_stop: Option<String>,
        fail_restart: Option<String>,
    ) -> (Self, Arc<SystemProbe>) {
        let probe = Arc::new(SystemProbe::default());
        let system = Self {
            probe: Arc::clone(&probe),
            fail_start,
            fail_stop,
            fail_restart,
        };
        (system, probe)
    }
}

#[async_trait]
impl System for MockSystem {
    type Components = u64;

    async fn start(&self) -> Result<u64, SystemError> {
        let serial = self.probe.starts.fetch_add(1, Ordering::SeqCst) as u64 + 1;
        match &self.fail_start {
            Some(msg) => Err(SystemError::new(msg.clone())),
            None => Ok(serial),
        }
    }

    async fn stop(&self) -> Result<(), SystemError> {
        self.probe.stops.fetch_add(1, Ordering::SeqCst);
        match &self.fail_stop {
            Some(msg) => Err(SystemError::new(msg.clone())),
            None => Ok(()),
        }
    }

    async fn restart(&self) -> Result<u64, SystemError> {
        let serial = self.probe.restarts.fetch_add(1, Ordering::SeqCst) as u64 + 1;
        match &self.fail_restart {
            Some(msg) => Err(SystemError::new(msg.clone())),
            None => Ok(serial),
        }
    }
}

/// Sink that records every line for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn handle() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn has_info(&self, needle: &str) -> bool {
        self.infos().iter().any(|line| line.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.errors().iter().any(|line| line.contains(needle))
    }
}

impl LogSink for RecordingSink {
    fn info(&self, msg: &str) {
        self.infos.lock().unwrap().push(msg.to_string());
    }

    fn error(&self, msg: &str) {
        self.errors.lock().unwrap().push(msg.to_string());
    }
}

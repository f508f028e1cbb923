//! Resolution observer that keeps every checkpoint in memory

use std::sync::Mutex;

use crate::interfaces::{ResolutionEvent, ResolutionObserver};

#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ResolutionEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far, in order
    pub fn events(&self) -> Vec<ResolutionEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ResolutionObserver for RecordingObserver {
    fn on_event(&self, event: &ResolutionEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

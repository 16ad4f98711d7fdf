use bom_resolver::prelude::*;
use std::sync::{Arc, Mutex};

/// One call made on the reporter
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum ProgressEvent {
    Info(String),
    Progress {
        current: usize,
        total: usize,
        barcode: Option<String>,
    },
    Error(String),
    Completed(String),
}

/// Mock ProgressReporter recording every event in order
///
/// Clones share the same event log, so a test can keep one handle and give
/// the other to the use case.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

#[allow(dead_code)]
impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// `(current, total, barcode)` of every progress tick.
    pub fn progress_ticks(&self) -> Vec<(usize, usize, Option<String>)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Progress {
                    current,
                    total,
                    barcode,
                } => Some((current, total, barcode)),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ProgressEvent::Info(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(ProgressEvent::Progress {
            current,
            total,
            barcode: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ProgressEvent::Completed(message.to_string()));
    }
}

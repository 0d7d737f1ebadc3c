use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Message shown while a session's previous submission is still being saved.
pub const MSG_IN_FLIGHT: &str = "Procesando tu solicitud, por favor espera…";

/// Advisory per-session submission guard. The presentation layer passes its
/// session token with each submission; while a save for that token is in
/// flight, a second submission is refused. This is not a distributed lock:
/// different sessions racing on the same email are resolved by the storage
/// engine's atomic upsert.
#[derive(Clone, Debug, Default)]
pub struct SubmissionGuard {
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `session` as in flight. Returns `None` if it already is. The
    /// returned permit releases the mark when dropped, on every exit path,
    /// so a failed save never locks a session out of resubmitting.
    pub fn try_acquire(&self, session: &str) -> Option<InFlightPermit> {
        let mut in_flight = self.in_flight.lock().expect("in-flight mutex poisoned");
        if !in_flight.insert(session.to_string()) {
            return None;
        }
        Some(InFlightPermit {
            guard: self.clone(),
            session: session.to_string(),
        })
    }

    fn release(&self, session: &str) {
        let mut in_flight = self.in_flight.lock().expect("in-flight mutex poisoned");
        in_flight.remove(session);
    }
}

#[derive(Debug)]
pub struct InFlightPermit {
    guard: SubmissionGuard,
    session: String,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.guard.release(&self.session);
    }
}

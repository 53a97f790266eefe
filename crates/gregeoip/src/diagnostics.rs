use gregeoip_types::Endpoint;
use parking_lot::Mutex;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Connection, TLS, timeout or body read failure.
    Transport,
    /// Server answered with something other than 200.
    Status(u16),
    /// JSON body could not be decoded.
    Decode,
}

/// Why a call ended in `RequestFailed`. Carries no URL or credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub endpoint: Endpoint,
    pub kind: DiagnosticKind,
    pub detail: String,
}

pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, event: &Diagnostic);
}

/// Default sink: one `warn!` per failed request.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, event: &Diagnostic) {
        warn!(
            endpoint = %event.endpoint,
            kind = ?event.kind,
            "GeoIP request failed: {}",
            event.detail
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&self, event: &Diagnostic) {
        self.events.lock().push(event.clone());
    }
}

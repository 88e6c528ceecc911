//! Per-run recovery state and the fault-tolerance protocol.

use veld_source::SourceLocation;

/// A caller-supplied handler for routed diagnostics.
///
/// Invoked synchronously whenever the engine routes an error instead of (or
/// in addition to) terminating. Invocation alone signals "handled, continue";
/// no return value is inspected. Any `FnMut(Option<SourceLocation>, &str)`
/// closure implements this trait, so a parser can capture its own recovery
/// state directly.
pub trait RecoverySink {
    /// Called once per routed diagnostic with the location (if any) and the
    /// rendered message text, hints included.
    fn on_error(&mut self, location: Option<SourceLocation>, message: &str);
}

impl<F> RecoverySink for F
where
    F: FnMut(Option<SourceLocation>, &str),
{
    fn on_error(&mut self, location: Option<SourceLocation>, message: &str) {
        self(location, message)
    }
}

/// How the engine resolves a fatal diagnostic, derived from the configured
/// [`RecoveryContext`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RecoveryMode {
    /// No fault tolerance: fatal diagnostics terminate the process.
    Strict,
    /// Fault tolerance requested but no sink registered: fatal diagnostics
    /// still terminate, because there is nowhere to route recovery.
    TolerantNoSink,
    /// Fault tolerant with a sink: fatal diagnostics are routed to the sink
    /// and control returns to the caller.
    TolerantSunk,
}

/// Per-run recovery state: the fault-tolerance flag, the registered sink,
/// and the running diagnostic tallies.
///
/// Created when a parse/analysis run begins and configured once before
/// analysis starts; the mode does not change mid-run.
#[derive(Default)]
pub struct RecoveryContext {
    fault_tolerant: bool,
    sink: Option<Box<dyn RecoverySink>>,
    warning_count: u32,
    error_count: u32,
}

impl RecoveryContext {
    /// Creates a strict context with no sink and zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether fatal diagnostics may be downgraded to routed events.
    pub fn set_fault_tolerant(&mut self, enabled: bool) {
        self.fault_tolerant = enabled;
    }

    /// Registers the recovery sink that routed diagnostics are forwarded to.
    pub fn set_sink(&mut self, sink: impl RecoverySink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Returns `true` if a sink is registered.
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Classifies the configured state for the fatal path.
    pub fn mode(&self) -> RecoveryMode {
        match (self.fault_tolerant, self.sink.is_some()) {
            (false, _) => RecoveryMode::Strict,
            (true, false) => RecoveryMode::TolerantNoSink,
            (true, true) => RecoveryMode::TolerantSunk,
        }
    }

    /// Forwards a routed diagnostic to the sink, if one is registered.
    pub fn route(&mut self, location: Option<SourceLocation>, message: &str) {
        if let Some(sink) = self.sink.as_mut() {
            sink.on_error(location, message);
        }
    }

    /// The number of warnings reported so far (quiet-suppressed warnings are
    /// not counted).
    pub fn warning_count(&self) -> u32 {
        self.warning_count
    }

    /// The number of recoverable errors reported so far.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    pub(crate) fn note_warning(&mut self) {
        self.warning_count += 1;
    }

    pub(crate) fn note_error(&mut self) {
        self.error_count += 1;
    }
}

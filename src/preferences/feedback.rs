use std::io::Write;

use thiserror::Error;

/// Perceptual cue emitted after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    /// A single cuisine was toggled.
    Click,
    /// A bulk selection or the balanced preset was applied.
    Select,
    /// A slot was cleared.
    Clear,
}

#[derive(Debug, Error)]
#[error("Feedback channel unavailable: {0}")]
pub struct FeedbackError(pub String);

/// Sink for selection feedback (sound, haptics, terminal bell).
///
/// Emitting must not block. Callers ignore failures.
pub trait FeedbackSink {
    fn emit(&self, cue: FeedbackCue) -> Result<(), FeedbackError>;
}

/// Sink that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {
    fn emit(&self, _cue: FeedbackCue) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Rings the terminal bell on stderr for bulk changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl FeedbackSink for TerminalBell {
    fn emit(&self, cue: FeedbackCue) -> Result<(), FeedbackError> {
        if cue == FeedbackCue::Click {
            return Ok(());
        }

        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|_| stderr.flush())
            .map_err(|e| FeedbackError(e.to_string()))
    }
}

/// Emit a cue, logging and dropping any failure.
pub fn emit_quietly(sink: &dyn FeedbackSink, cue: FeedbackCue) {
    if let Err(e) = sink.emit(cue) {
        tracing::debug!(?cue, error = %e, "feedback dropped");
    }
}

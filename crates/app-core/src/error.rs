use thiserror::Error;

/// An external capability the front ends rely on could not be used.
///
/// Camera and detector failures are surfaced to the user and allow a retry.
/// Audio failures are logged and otherwise ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    #[error("face detector unavailable: {0}")]
    DetectorUnavailable(String),
    #[error("audio unavailable: {0}")]
    AudioUnavailable(String),
}

impl CapabilityError {
    /// Status line shown to the user when this error ends a tracking attempt.
    pub fn status_line(&self) -> String {
        let reason = match self {
            Self::CameraUnavailable(r) | Self::DetectorUnavailable(r) | Self::AudioUnavailable(r) => r,
        };
        format!("ERROR :: {}", reason)
    }

    /// Whether the failure should be shown to the user or swallowed.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::AudioUnavailable(_))
    }
}

/// Result of a best-effort capability call such as playing a tone.
pub type CapabilityResult = Result<(), CapabilityError>;

/// Run a best-effort capability call, logging and discarding any failure.
/// Failures the user would normally be told about are logged as errors.
pub fn best_effort(label: &str, result: CapabilityResult) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_user_facing() => log::error!("[{}] ignored: {}", label, e),
        Err(e) => log::warn!("[{}] ignored: {}", label, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_uses_reason_only() {
        let e = CapabilityError::CameraUnavailable("Permission denied".into());
        assert_eq!(e.status_line(), "ERROR :: Permission denied");
    }

    #[test]
    fn best_effort_swallows_failures() {
        best_effort("audio", Ok(()));
        best_effort("audio", Err(CapabilityError::AudioUnavailable("suspended".into())));
        best_effort("camera", Err(CapabilityError::CameraUnavailable("denied".into())));
    }

    #[test]
    fn audio_errors_are_not_user_facing() {
        assert!(!CapabilityError::AudioUnavailable("no ctx".into()).is_user_facing());
        assert!(CapabilityError::DetectorUnavailable("cdn".into()).is_user_facing());
    }
}

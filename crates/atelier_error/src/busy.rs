//! Re-entry rejection for the single-flight engine.

/// Returned when `generate` is invoked while another call is in flight.
///
/// The engine never queues or interleaves calls against its session; a
/// second caller is rejected immediately rather than blocked.
#[derive(Debug, Clone)]
pub struct BusyError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BusyError {
    /// Create a new BusyError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_error::BusyError;
    ///
    /// let err = BusyError::new("a generation is already in flight");
    /// assert!(err.message.contains("in flight"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for BusyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Busy Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for BusyError {}

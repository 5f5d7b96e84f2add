use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Scan completed, whether or not TODOs were found and even
///   if individual files could not be read or attributed
/// - `Error` (2): Scan could not run (unreadable root, invalid arguments)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed.
    Success,
    /// Scan failed due to a fatal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

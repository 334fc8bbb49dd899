//! Exit codes for the vh-server binary.
//!
//! Stable ranges:
//! - 0-9: operational outcomes
//! - 10-19: user/environment errors
//! - 20-29: internal errors

use std::fmt;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Clean success.
    Ok = 0,
    /// `check` loaded the catalog but skipped malformed records.
    CheckWarnings = 1,
    /// Bad command-line usage.
    ArgsError = 10,
    /// Data file missing or unreadable where that is fatal (`check`).
    DataError = 11,
    /// HTTP listener could not bind.
    BindError = 12,
    /// Unexpected internal failure.
    InternalError = 20,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Ok | ExitCode::CheckWarnings)
    }

    pub fn is_user_error(self) -> bool {
        (10..20).contains(&self.as_i32())
    }

    pub fn is_internal_error(self) -> bool {
        self.as_i32() >= 20
    }

    pub fn code_name(self) -> &'static str {
        match self {
            ExitCode::Ok => "OK",
            ExitCode::CheckWarnings => "CHECK_WARNINGS",
            ExitCode::ArgsError => "ARGS_ERROR",
            ExitCode::DataError => "DATA_ERROR",
            ExitCode::BindError => "BIND_ERROR",
            ExitCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

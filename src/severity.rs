//! Severity levels for stderr mirroring and their wire names

use std::fmt;

/// Ordered severity of a log line. Lines at or above the process-wide
/// stderr threshold are mirrored to the standard error stream. On the wire
/// a severity only ever travels as its lowercase name, through
/// [`Severity::as_str`] and [`Severity::from_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Info = 0,
    Warning = 1,
    Error = 2,
    Fatal = 3,
}

/// Canonical lowercase names, indexed by the enum discriminant.
const SEVERITY_NAMES: [&str; 4] = ["info", "warning", "error", "fatal"];

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Canonical lowercase wire name.
    pub fn as_str(self) -> &'static str {
        SEVERITY_NAMES[self as usize]
    }

    /// Inverse of [`Severity::as_str`]. Lookup is case-sensitive; an
    /// unrecognized name yields `None`, never a default severity.
    pub fn from_name(name: &str) -> Option<Severity> {
        match name {
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            "fatal" => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Raw discriminant, used for atomic storage.
    pub(crate) fn to_bits(self) -> u8 {
        self as u8
    }

    /// Recover a severity from a discriminant previously produced by
    /// [`Severity::to_bits`]. Other values yield `None`.
    pub(crate) fn from_bits(bits: u8) -> Option<Severity> {
        match bits {
            0 => Some(Severity::Info),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            3 => Some(Severity::Fatal),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

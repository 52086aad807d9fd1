/*!
 * Error Types
 * Outcome propagation with thiserror, miette, and serde support
 *
 * Every fallible operation in the crate reports through [`Outcome`]: a result
 * code from a closed taxonomy, a static message, and the source location where
 * the outcome was constructed. Outcomes are plain `Copy` values; building one
 * never allocates and never touches allocator statistics.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// Result type for fallible operations
///
/// The error side is always a non-success [`Outcome`], so `?` gives the same
/// short-circuit discipline as [`check!`](crate::check).
pub type DsResult<T = ()> = std::result::Result<T, Outcome>;

/// Fallback text for codes outside the taxonomy
pub const UNKNOWN_ERROR_TEXT: &str = "Unknown error.";

/// Result codes
///
/// Discriminants are stable and match the order of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ResultCode {
    Success = 0,
    InvalidArgument = 1,
    MemoryAllocation = 2,
    IndexOutOfBounds = 3,
    EmptyContainer = 4,
    FullContainer = 5,
    NotFound = 6,
    Duplicate = 7,
    Overflow = 8,
    Underflow = 9,
    NullPointer = 10,
    CorruptedData = 11,
    NotImplemented = 12,
    Unknown = 13,
}

impl ResultCode {
    /// Every code, in discriminant order
    pub const ALL: [ResultCode; 14] = [
        ResultCode::Success,
        ResultCode::InvalidArgument,
        ResultCode::MemoryAllocation,
        ResultCode::IndexOutOfBounds,
        ResultCode::EmptyContainer,
        ResultCode::FullContainer,
        ResultCode::NotFound,
        ResultCode::Duplicate,
        ResultCode::Overflow,
        ResultCode::Underflow,
        ResultCode::NullPointer,
        ResultCode::CorruptedData,
        ResultCode::NotImplemented,
        ResultCode::Unknown,
    ];

    /// Canonical human-readable description
    pub const fn description(self) -> &'static str {
        match self {
            ResultCode::Success => "Success.",
            ResultCode::InvalidArgument => "Invalid argument.",
            ResultCode::MemoryAllocation => "Memory allocation failed.",
            ResultCode::IndexOutOfBounds => "Index out of bounds.",
            ResultCode::EmptyContainer => "Container is empty.",
            ResultCode::FullContainer => "Container is full.",
            ResultCode::NotFound => "Element not found.",
            ResultCode::Duplicate => "Duplicate element.",
            ResultCode::Overflow => "Overflow occurred.",
            ResultCode::Underflow => "Underflow occurred.",
            ResultCode::NullPointer => "Null pointer.",
            ResultCode::CorruptedData => "Data corrupted.",
            ResultCode::NotImplemented => "Not implemented.",
            ResultCode::Unknown => UNKNOWN_ERROR_TEXT,
        }
    }

    /// Raw discriminant
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Look up a code by raw discriminant
    pub const fn from_raw(raw: i32) -> Option<Self> {
        if raw >= 0 && (raw as usize) < Self::ALL.len() {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, ResultCode::Success)
    }

    /// Stable snake_case identifier, also used as the diagnostic code suffix
    pub const fn name(self) -> &'static str {
        match self {
            ResultCode::Success => "success",
            ResultCode::InvalidArgument => "invalid_argument",
            ResultCode::MemoryAllocation => "memory_allocation",
            ResultCode::IndexOutOfBounds => "index_out_of_bounds",
            ResultCode::EmptyContainer => "empty_container",
            ResultCode::FullContainer => "full_container",
            ResultCode::NotFound => "not_found",
            ResultCode::Duplicate => "duplicate",
            ResultCode::Overflow => "overflow",
            ResultCode::Underflow => "underflow",
            ResultCode::NullPointer => "null_pointer",
            ResultCode::CorruptedData => "corrupted_data",
            ResultCode::NotImplemented => "not_implemented",
            ResultCode::Unknown => "unknown",
        }
    }

    fn help(self) -> Option<&'static str> {
        match self {
            ResultCode::Success => None,
            ResultCode::InvalidArgument => Some("Check the arguments passed to the failing call."),
            ResultCode::MemoryAllocation => {
                Some("System may be low on memory. Consider freeing resources.")
            }
            ResultCode::IndexOutOfBounds => Some("Index must be smaller than the container length."),
            ResultCode::EmptyContainer => Some("Check is_empty() before removing elements."),
            ResultCode::FullContainer => Some("Reserve capacity or remove elements first."),
            ResultCode::NotFound => None,
            ResultCode::Duplicate => Some("The container does not accept duplicate keys."),
            ResultCode::Overflow | ResultCode::Underflow => {
                Some("A size or counter computation left the representable range.")
            }
            ResultCode::NullPointer => Some("A required handle was missing."),
            ResultCode::CorruptedData => {
                Some("A structural invariant no longer holds. Please report this issue.")
            }
            ResultCode::NotImplemented => None,
            ResultCode::Unknown => Some("An unexpected error occurred. Please report this issue."),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Describe a raw code value; total over all inputs
pub fn describe_raw(raw: i32) -> &'static str {
    ResultCode::from_raw(raw).map_or(UNKNOWN_ERROR_TEXT, ResultCode::description)
}

/// Source location captured when an outcome is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Origin {
    pub file: &'static str,
    pub line: u32,
}

impl Origin {
    /// Location of the caller (propagates through `#[track_caller]` frames)
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Tagged outcome of an operation
///
/// Constructed at the exact point where success or failure is decided and
/// returned by value. Fields are read-only.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[error("{message} [{code}] at {origin}")]
pub struct Outcome {
    code: ResultCode,
    message: &'static str,
    origin: Origin,
}

impl Outcome {
    /// Successful outcome at the caller's location
    #[track_caller]
    #[inline]
    pub fn success() -> Self {
        Self {
            code: ResultCode::Success,
            message: ResultCode::Success.description(),
            origin: Origin::caller(),
        }
    }

    /// Outcome with an explicit code and message at the caller's location
    #[track_caller]
    #[inline]
    pub fn error(code: ResultCode, message: &'static str) -> Self {
        Self {
            code,
            message,
            origin: Origin::caller(),
        }
    }

    /// Outcome with an explicit origin (used by the propagation macros)
    #[inline]
    pub const fn with_origin(code: ResultCode, message: &'static str, origin: Origin) -> Self {
        Self {
            code,
            message,
            origin,
        }
    }

    #[inline]
    pub const fn code(&self) -> ResultCode {
        self.code
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    #[inline]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Canonical text for this outcome's code
    #[inline]
    pub const fn description(&self) -> &'static str {
        self.code.description()
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        self.code.is_success()
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.code.is_success()
    }

    /// Convert into a `Result` so `?` can propagate it
    #[inline]
    pub fn into_result(self) -> DsResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Diagnostic for Outcome {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("ds::{}", self.code.name())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.code
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }
}

impl From<DsResult<()>> for Outcome {
    #[track_caller]
    fn from(result: DsResult<()>) -> Self {
        match result {
            Ok(()) => Outcome::success(),
            Err(outcome) => outcome,
        }
    }
}

// Lets `ensure!` and `check!` return from functions typed `DsResult<T>`.
impl<T> From<Outcome> for DsResult<T> {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        Err(outcome)
    }
}

/// Check-and-propagate
///
/// Evaluates an expression producing an [`Outcome`]; if it is not a success,
/// returns that same outcome unmodified from the enclosing function. Works in
/// functions returning `Outcome` or `DsResult<T>`.
///
/// ```
/// use ds_foundation::{check, Outcome, ResultCode};
///
/// fn inner() -> Outcome {
///     Outcome::error(ResultCode::NotFound, "missing key")
/// }
///
/// fn outer() -> Outcome {
///     check!(inner());
///     Outcome::success()
/// }
///
/// assert_eq!(outer().code(), ResultCode::NotFound);
/// ```
#[macro_export]
macro_rules! check {
    ($expr:expr) => {{
        let outcome: $crate::core::errors::Outcome = $expr;
        if outcome.is_error() {
            return ::core::convert::From::from(outcome);
        }
    }};
}

/// Precondition assertion
///
/// If the condition is false, returns an invalid-argument [`Outcome`] carrying
/// the message and the call site. Never aborts.
///
/// ```
/// use ds_foundation::{ensure, DsResult, ResultCode};
///
/// fn half(n: usize) -> DsResult<usize> {
///     ensure!(n % 2 == 0, "value must be even");
///     Ok(n / 2)
/// }
///
/// assert_eq!(half(3).unwrap_err().code(), ResultCode::InvalidArgument);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $message:expr) => {
        if !($cond) {
            return ::core::convert::From::from($crate::core::errors::Outcome::with_origin(
                $crate::core::errors::ResultCode::InvalidArgument,
                $message,
                $crate::core::errors::Origin {
                    file: ::core::file!(),
                    line: ::core::line!(),
                },
            ));
        }
    };
}

/// Build an error outcome at the call site and return it
#[macro_export]
macro_rules! bail {
    ($code:expr, $message:expr) => {
        return ::core::convert::From::from($crate::core::errors::Outcome::with_origin(
            $code,
            $message,
            $crate::core::errors::Origin {
                file: ::core::file!(),
                line: ::core::line!(),
            },
        ))
    };
}

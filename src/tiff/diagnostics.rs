//! Structured parse diagnostics
//!
//! Recoverable problems are never returned as errors. They are recorded as
//! `Diagnostic` values on the header, directory or entry that produced them
//! and streamed to a caller-owned `DiagnosticSink`.

use std::fmt;

use log::{info, warn};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("ERROR"),
            Severity::Warning => f.write_str("WARNING"),
        }
    }
}

/// Every condition the parser knows how to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    InvalidByteOrderMark,
    InvalidMagicNumber,
    ZeroIFDEntries,
    ByteOffsetNotWordAligned,
    ValueOffsetOutOfRange,
    ValueExtendsPastEOF,
    TagSortOrderError,
    TypeMismatchError,
    InvalidCountValueWarning,
    InvalidDateTimeFormat,
    InvalidDateTime,
    TileDimensionNotMultipleOf16,
    UnknownTagWarning,
    UnknownTypeWarning,
    IFDOffsetOutOfRange,
    IFDChainCycle,
    TooManyIFDs,
}

impl DiagnosticCode {
    /// Code name as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::InvalidByteOrderMark => "InvalidByteOrderMark",
            DiagnosticCode::InvalidMagicNumber => "InvalidMagicNumber",
            DiagnosticCode::ZeroIFDEntries => "ZeroIFDEntries",
            DiagnosticCode::ByteOffsetNotWordAligned => "ByteOffsetNotWordAligned",
            DiagnosticCode::ValueOffsetOutOfRange => "ValueOffsetOutOfRange",
            DiagnosticCode::ValueExtendsPastEOF => "ValueExtendsPastEOF",
            DiagnosticCode::TagSortOrderError => "TagSortOrderError",
            DiagnosticCode::TypeMismatchError => "TypeMismatchError",
            DiagnosticCode::InvalidCountValueWarning => "InvalidCountValueWarning",
            DiagnosticCode::InvalidDateTimeFormat => "InvalidDateTimeFormat",
            DiagnosticCode::InvalidDateTime => "InvalidDateTime",
            DiagnosticCode::TileDimensionNotMultipleOf16 => "TileDimensionNotMultipleOf16",
            DiagnosticCode::UnknownTagWarning => "UnknownTagWarning",
            DiagnosticCode::UnknownTypeWarning => "UnknownTypeWarning",
            DiagnosticCode::IFDOffsetOutOfRange => "IFDOffsetOutOfRange",
            DiagnosticCode::IFDChainCycle => "IFDChainCycle",
            DiagnosticCode::TooManyIFDs => "TooManyIFDs",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticCode::InvalidCountValueWarning
            | DiagnosticCode::TileDimensionNotMultipleOf16
            | DiagnosticCode::UnknownTagWarning
            | DiagnosticCode::UnknownTypeWarning
            | DiagnosticCode::TooManyIFDs => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether reporting this code marks its owner invalid
    ///
    /// All errors do. Among warnings only a cardinality shortfall does.
    pub fn invalidates(&self) -> bool {
        match self.severity() {
            Severity::Error => true,
            Severity::Warning => *self == DiagnosticCode::InvalidCountValueWarning,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported condition with its arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub args: Vec<String>,
}

impl Diagnostic {
    /// Builds a diagnostic with the code's fixed severity
    pub fn new(code: DiagnosticCode, args: Vec<String>) -> Self {
        Diagnostic {
            severity: code.severity(),
            code,
            args,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity, self.code)?;
        if !self.args.is_empty() {
            write!(f, " [{}]", self.args.join(", "))?;
        }
        Ok(())
    }
}

/// Receiver for diagnostics as they are produced
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

/// Sink that forwards every diagnostic to the `log` facade
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => warn!("{}", diagnostic),
            Severity::Warning => info!("{}", diagnostic),
        }
    }
}

/// Tri-state validity of a header, entry, directory or file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Undetermined,
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        *self == Validity::Valid
    }

    /// Resolves `Undetermined` to `Valid`; `Invalid` stays sticky
    pub fn settle(self) -> Self {
        match self {
            Validity::Undetermined => Validity::Valid,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Validity::Undetermined => "undetermined",
            Validity::Valid => "valid",
            Validity::Invalid => "invalid",
        }
    }
}

impl Default for Validity {
    fn default() -> Self {
        Validity::Undetermined
    }
}

/// Diagnostics and validity owned by one parsed element
///
/// Recording a diagnostic keeps a copy locally, streams it to the sink and
/// downgrades validity when the code demands it.
#[derive(Debug, Clone, Default)]
pub struct Findings {
    pub validity: Validity,
    pub diagnostics: Vec<Diagnostic>,
}

impl Findings {
    pub fn record(
        &mut self,
        sink: &mut dyn DiagnosticSink,
        code: DiagnosticCode,
        args: Vec<String>,
    ) {
        let diagnostic = Diagnostic::new(code, args);
        sink.report(&diagnostic);
        if code.invalidates() {
            self.validity = Validity::Invalid;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn invalidate(&mut self) {
        self.validity = Validity::Invalid;
    }

    pub fn settle(&mut self) {
        self.validity = self.validity.settle();
    }

    pub fn has(&self, code: DiagnosticCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }
}

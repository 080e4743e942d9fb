//! crates/invariants/src/violation.rs
//! The report assembled when a check fails.

use std::backtrace::Backtrace;
use std::fmt;

/// Where a check was written and what it checked.
///
/// The check macros build this from `stringify!`, [`function_name!`],
/// `file!`, `line!` and `column!`.
///
/// [`function_name!`]: crate::function_name
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Site {
    expression: &'static str,
    function: &'static str,
    file: &'static str,
    line: u32,
    column: u32,
}

impl Site {
    /// Creates a site description.
    #[must_use]
    pub const fn new(
        expression: &'static str,
        function: &'static str,
        file: &'static str,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            expression,
            function,
            file,
            line,
            column,
        }
    }

    /// Source text of the failing expression.
    #[must_use]
    pub const fn expression(&self) -> &'static str {
        self.expression
    }

    /// Path of the function containing the check.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Source file of the check.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the check.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Source column of the check.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// One side of a failed equality check: its source text and `Debug` value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operand {
    text: &'static str,
    value: String,
}

impl Operand {
    /// Captures `value` through its `Debug` implementation.
    #[must_use]
    pub fn new<T: fmt::Debug + ?Sized>(text: &'static str, value: &T) -> Self {
        Self {
            text,
            value: format!("{value:?}"),
        }
    }

    /// Source text of the operand.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// `Debug` rendering of the operand's value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A failed invariant, ready to be rendered.
///
/// The rendering lists, in order: the expression with its function and
/// location, the operands of an equality check, the caller's message (or
/// `<no message>`), and the backtrace.
///
/// ```
/// use invariants::{Operand, Site, Violation};
///
/// let site = Site::new("a == b", "app::merge", "src/merge.rs", 40, 5);
/// let violation = Violation::new(site)
///     .with_operands(Operand::new("a", &1), Operand::new("b", &2));
/// let report = violation.to_string();
///
/// assert!(report.starts_with("invariant violated: `a == b`"));
/// assert!(report.contains("left:  `a` = 1"));
/// assert!(report.contains("message: <no message>"));
/// ```
#[derive(Debug)]
pub struct Violation<'a> {
    site: Site,
    operands: Option<(Operand, Operand)>,
    message: Option<fmt::Arguments<'a>>,
    backtrace: Option<Backtrace>,
}

impl<'a> Violation<'a> {
    /// Starts a report for `site` with no operands, message or backtrace.
    #[must_use]
    pub const fn new(site: Site) -> Self {
        Self {
            site,
            operands: None,
            message: None,
            backtrace: None,
        }
    }

    /// Attaches both sides of a failed equality check.
    #[must_use]
    pub fn with_operands(mut self, left: Operand, right: Operand) -> Self {
        self.operands = Some((left, right));
        self
    }

    /// Attaches the caller's formatted message.
    #[must_use]
    pub fn with_message(mut self, message: Option<fmt::Arguments<'a>>) -> Self {
        self.message = message;
        self
    }

    /// Attaches a captured backtrace.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    /// The check that failed.
    #[must_use]
    pub const fn site(&self) -> &Site {
        &self.site
    }

    /// Operands of a failed equality check.
    #[must_use]
    pub const fn operands(&self) -> Option<&(Operand, Operand)> {
        self.operands.as_ref()
    }
}

impl fmt::Display for Violation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let site = &self.site;
        writeln!(f, "invariant violated: `{}`", site.expression)?;
        writeln!(f, "  function: {}", site.function)?;
        writeln!(f, "  location: {}:{}:{}", site.file, site.line, site.column)?;
        if let Some((left, right)) = &self.operands {
            writeln!(f, "  left:  `{}` = {}", left.text, left.value)?;
            writeln!(f, "  right: `{}` = {}", right.text, right.value)?;
        }
        match self.message {
            Some(message) => writeln!(f, "  message: {message}")?,
            None => writeln!(f, "  message: <no message>")?,
        }
        match &self.backtrace {
            Some(backtrace) => write!(f, "backtrace:\n{backtrace}"),
            None => f.write_str("backtrace: <not captured>"),
        }
    }
}

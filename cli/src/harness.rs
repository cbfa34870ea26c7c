//! Check recorder.
//!
//! Every check prints its source location followed by `OK` or by a `FAIL`
//! block showing what was computed and what was expected:
//!
//! ```text
//! suite.rs:41 FAIL
//!   ReverseT<tlist![i32, bool]>
//! Is:
//!   [bool, i32]
//! Expected:
//!   [i32, bool]
//! ```
//!
//! [`Harness::report`] closes the run with the totals.

use std::fmt::Display;
use std::io::{self, Write};

use typeseq::{Describe, same};

use crate::config::HarnessConfig;
use crate::output;

/// Where a check was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    fn file_name(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }
}

/// Totals of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub total: usize,
    pub failed: usize,
}

impl Report {
    pub const fn passed(&self) -> usize {
        self.total - self.failed
    }

    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Records checks and writes their outcome to `W`.
pub struct Harness<W> {
    out: W,
    config: HarnessConfig,
    report: Report,
}

impl<W: Write> Harness<W> {
    pub fn new(out: W, config: HarnessConfig) -> Self {
        Self {
            out,
            config,
            report: Report::default(),
        }
    }

    /// The totals so far.
    pub fn tally(&self) -> Report {
        self.report
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Checks that `Expr` and `Expected` are the same type.
    ///
    /// Prefer the [`expect_same!`](crate::expect_same) macro, which fills in
    /// the location and the expression text.
    pub fn expect_same<Expr, Expected>(&mut self, at: Location, expr: &str) -> io::Result<bool>
    where
        Expr: Describe + 'static,
        Expected: Describe + 'static,
    {
        let ok = same::<Expr, Expected>();
        tracing::debug!(file = at.file, line = at.line, ok, "expect_same");
        if ok {
            self.pass(at, expr)?;
        } else {
            self.fail(at, expr, &Expr::describe(), &Expected::describe())?;
        }
        Ok(ok)
    }

    /// Checks that `actual == expected`.
    ///
    /// Prefer the [`expect_eq!`](crate::expect_eq) macro.
    pub fn expect_eq<T>(
        &mut self,
        at: Location,
        expr: &str,
        expected_expr: &str,
        actual: T,
        expected: T,
    ) -> io::Result<bool>
    where
        T: PartialEq + Display,
    {
        let ok = actual == expected;
        tracing::debug!(file = at.file, line = at.line, ok, "expect_eq");
        if ok {
            self.pass(at, expr)?;
        } else {
            let expected = format!("{expected_expr}  Which is {expected}");
            self.fail(at, expr, &actual.to_string(), &expected)?;
        }
        Ok(ok)
    }

    /// Writes the totals and returns them.
    pub fn report(&mut self) -> io::Result<Report> {
        let report = self.report;
        writeln!(self.out, "------")?;
        writeln!(self.out, "Total   {} tests", report.total)?;
        writeln!(self.out, "{}  {} tests", output::passed_label(), report.passed())?;
        if !report.is_success() {
            writeln!(self.out, "{}  {} tests", output::failed_label(), report.failed)?;
        }
        self.out.flush()?;
        tracing::info!(total = report.total, failed = report.failed, "conformance run finished");
        Ok(report)
    }

    fn location(&self, at: Location) -> String {
        let file = if self.config.full_path {
            at.file
        } else {
            at.file_name()
        };
        format!("{file}:{}", at.line)
    }

    fn pass(&mut self, at: Location, expr: &str) -> io::Result<()> {
        self.report.total += 1;
        if !self.config.print_ok {
            return Ok(());
        }
        let location = self.location(at);
        if self.config.print_expression {
            writeln!(self.out, "{location} {}    {expr}", output::status_ok())
        } else {
            writeln!(self.out, "{location} {}", output::status_ok())
        }
    }

    fn fail(&mut self, at: Location, expr: &str, is: &str, expected: &str) -> io::Result<()> {
        self.report.total += 1;
        self.report.failed += 1;
        let location = self.location(at);
        writeln!(self.out, "{location} {}", output::status_fail())?;
        writeln!(self.out, "  {expr}")?;
        writeln!(self.out, "Is:\n  {is}")?;
        writeln!(self.out, "Expected:\n  {expected}\n")
    }
}

/// Records a type identity check: `expect_same!(harness, Expr, Expected)?`.
#[macro_export]
macro_rules! expect_same {
    ($harness:expr, $expr:ty, $expected:ty $(,)?) => {
        $harness.expect_same::<$expr, $expected>(
            $crate::harness::Location::new(file!(), line!()),
            stringify!($expr),
        )
    };
}

/// Records a value check: `expect_eq!(harness, actual, expected)?`.
#[macro_export]
macro_rules! expect_eq {
    ($harness:expr, $expr:expr, $expected:expr $(,)?) => {
        $harness.expect_eq(
            $crate::harness::Location::new(file!(), line!()),
            stringify!($expr),
            stringify!($expected),
            $expr,
            $expected,
        )
    };
}

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::Path,
    time::Instant,
};

use rayon::prelude::*;

use crate::{
    compiler::emit::write_program,
    error::{DriverError, ParseError},
    recompile_line,
};

/// What to do with a line that fails to compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failing line and return its error.
    #[default]
    Abort,
    /// Report the failing line, leave it out of the output, and continue.
    Skip,
}

/// Settings for compiling a whole source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// How failing lines are handled.
    pub error_policy: ErrorPolicy,
    /// Compile lines on the rayon thread pool instead of one after another.
    pub parallel:     bool,
}

/// The outcome of compiling a whole source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileReport {
    /// Recompiled expressions, in input line order.
    pub expressions: Vec<String>,
    /// Errors of the lines that were skipped, in input line order.
    pub diagnostics: Vec<ParseError>,
}

/// Compiles every line of `source` independently.
///
/// Lines are numbered from 1. Output order always follows input order, also
/// when `options.parallel` is set.
///
/// # Errors
/// With [`ErrorPolicy::Abort`], returns the error of the first failing line.
///
/// # Examples
/// ```
/// use arithc::driver::{CompileOptions, ErrorPolicy, compile_source};
///
/// let report = compile_source("1 + 2\n(3 + 4) * 2\n", &CompileOptions::default()).unwrap();
/// assert_eq!(report.expressions, vec!["1 + 2", "(3 + 4) * 2"]);
///
/// let options = CompileOptions { error_policy: ErrorPolicy::Skip,
///                                parallel:     false, };
/// let report = compile_source("1 +\n2", &options).unwrap();
/// assert_eq!(report.expressions, vec!["2"]);
/// assert_eq!(report.diagnostics[0].line(), 1);
/// ```
pub fn compile_source(source: &str, options: &CompileOptions) -> Result<CompileReport, ParseError> {
    let lines: Vec<&str> = source.lines().collect();

    if options.parallel {
        let results: Vec<_> = lines.par_iter()
                                   .enumerate()
                                   .map(|(index, text)| recompile_line(text, index + 1))
                                   .collect();
        collect_report(results, options.error_policy)
    } else {
        let results = lines.iter()
                           .enumerate()
                           .map(|(index, text)| recompile_line(text, index + 1));
        collect_report(results, options.error_policy)
    }
}

/// Folds per-line results into a report according to `policy`.
fn collect_report<I>(results: I, policy: ErrorPolicy) -> Result<CompileReport, ParseError>
    where I: IntoIterator<Item = Result<String, ParseError>>
{
    let mut report = CompileReport::default();

    for result in results {
        match result {
            Ok(expression) => report.expressions.push(expression),
            Err(err) if policy == ErrorPolicy::Skip => {
                tracing::warn!(line = err.line(), position = err.position(), "skipping line: {err}");
                report.diagnostics.push(err);
            },
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}

/// Compiles the file at `input` and writes the generated program to
/// `output`.
///
/// An `output` of `-` writes the program to standard output.
///
/// # Errors
/// - `DriverError::Io` if the input cannot be read or the output cannot be
///   written.
/// - `DriverError::Compile` if a line fails under [`ErrorPolicy::Abort`].
pub fn compile_file(input: &Path,
                    output: &Path,
                    options: &CompileOptions)
                    -> Result<CompileReport, DriverError> {
    let started = Instant::now();
    let source = fs::read_to_string(input).map_err(|e| DriverError::io(input, e))?;
    let report = compile_source(&source, options)?;

    if output == Path::new("-") {
        write_program(&mut io::stdout().lock(), &report.expressions).map_err(|e| {
                                                                         DriverError::io(output, e)
                                                                     })?;
    } else {
        let file = File::create(output).map_err(|e| DriverError::io(output, e))?;
        write_program(&mut BufWriter::new(file), &report.expressions).map_err(|e| {
                                                                          DriverError::io(output, e)
                                                                      })?;
    }

    tracing::info!(input = %input.display(),
                   output = %output.display(),
                   compiled = report.expressions.len(),
                   skipped = report.diagnostics.len(),
                   elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                   "compilation finished");

    Ok(report)
}

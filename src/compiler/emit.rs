use std::io;

/// First line of every generated program.
pub const PROGRAM_HEADER: &str = "# Compiled arithmetic expressions";

/// Writes the Python program that evaluates `expressions` in order.
///
/// The program appends every expression to a list and prints the list once
/// all of them have been evaluated.
///
/// # Errors
/// Returns any error raised by `out`.
pub fn write_program<W: io::Write>(out: &mut W, expressions: &[String]) -> io::Result<()> {
    writeln!(out, "{PROGRAM_HEADER}")?;
    writeln!(out, "if __name__ == '__main__':")?;
    writeln!(out, "    result = []")?;
    for expression in expressions {
        writeln!(out, "    result.append({expression})")?;
    }
    writeln!(out, "    print(result)")?;
    out.flush()
}

/// Renders the generated program into a string.
///
/// # Example
/// ```
/// use arithc::compiler::emit::render_program;
///
/// let program = render_program(&["3 + 4".to_string()]);
/// assert!(program.contains("    result.append(3 + 4)\n"));
/// assert!(program.ends_with("    print(result)\n"));
/// ```
#[must_use]
pub fn render_program(expressions: &[String]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_program(&mut buffer, expressions);
    String::from_utf8_lossy(&buffer).into_owned()
}

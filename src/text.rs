use std::io::{self, Write};

pub(crate) const WIDE: usize = 70;
pub(crate) const NARROW: usize = 50;

pub(crate) fn rule(out: &mut dyn Write, ch: char, width: usize) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(width))
}

/// `=` rule, title, `=` rule; preceded by `gap` blank lines.
pub(crate) fn heading(out: &mut dyn Write, gap: usize, title: &str) -> io::Result<()> {
    for _ in 0..gap {
        writeln!(out)?;
    }
    rule(out, '=', WIDE)?;
    writeln!(out, "{title}")?;
    rule(out, '=', WIDE)
}

/// Marker line and a `-` rule, preceded by `gap` blank lines.
pub(crate) fn subheading(out: &mut dyn Write, gap: usize, title: &str) -> io::Result<()> {
    for _ in 0..gap {
        writeln!(out)?;
    }
    writeln!(out, "{title}")?;
    rule(out, '-', WIDE)
}

pub(crate) fn bullets(out: &mut dyn Write, marker: &str, items: &[&str]) -> io::Result<()> {
    for item in items {
        writeln!(out, "   {marker} {item}")?;
    }
    Ok(())
}

/// Lines of the form `<key padded to width> → <value>`, each preceded by a blank line.
pub(crate) fn arrow_table(
    out: &mut dyn Write,
    indent: &str,
    width: usize,
    rows: &[(&str, &str)],
) -> io::Result<()> {
    for (key, value) in rows {
        writeln!(out, "\n{indent}{key:<width$} → {value}")?;
    }
    Ok(())
}

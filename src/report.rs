//! Terminal rendering for findings and the suggestion panel.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use unicode_display_width::width as display_width_impl;

use workbench::{Finding, SelectionContext};

fn display_width(text: &str) -> usize {
    display_width_impl(text) as usize
}

/// Pads `text` with spaces to `width` terminal columns.
pub fn pad(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(display_width(text))));
    padded
}

/// Writes text in an optional color.
pub struct Painter<'w, W: Write> {
    out: &'w mut W,
    color: bool,
}

impl<'w, W: Write> Painter<'w, W> {
    pub fn new(out: &'w mut W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn paint(&mut self, text: &str, color: Color) -> std::io::Result<()> {
        if self.color {
            queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            queue!(self.out, Print(text))
        }
    }

    pub fn plain(&mut self, text: &str) -> std::io::Result<()> {
        queue!(self.out, Print(text))
    }

    pub fn newline(&mut self) -> std::io::Result<()> {
        self.plain("\n")
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

/// One aligned row per finding, then the `IDENTIFIED: n` footer.
pub fn write_findings<W: Write>(
    painter: &mut Painter<'_, W>,
    findings: &[Finding<'_>],
) -> std::io::Result<()> {
    let selector_width = findings
        .iter()
        .map(|f| display_width(f.selector))
        .max()
        .unwrap_or(0);
    let declaration_width = findings
        .iter()
        .map(|f| display_width(f.property) + display_width(f.value) + 2)
        .max()
        .unwrap_or(0);

    for finding in findings {
        painter.paint(&pad(&finding.position.to_string(), 8), Color::DarkGrey)?;
        painter.paint(&pad(finding.selector, selector_width + 2), Color::Cyan)?;
        let declaration = format!("{}: {}", finding.property, finding.value);
        painter.plain(&pad(&declaration, declaration_width + 2))?;
        match finding.suggestion {
            Some(var) => painter.paint(&format!("-> {var}"), Color::Green)?,
            None => painter.paint("-> (no suggestion)", Color::DarkGrey)?,
        }
        painter.newline()?;
    }
    painter.paint(&format!("IDENTIFIED: {}", findings.len()), Color::Yellow)?;
    painter.newline()
}

/// The suggestion panel: header line, then one variable name per line.
pub fn write_context<W: Write>(
    painter: &mut Painter<'_, W>,
    context: Option<&SelectionContext>,
) -> std::io::Result<()> {
    let Some(context) = context else {
        painter.paint("CONTEXT: none", Color::DarkGrey)?;
        return painter.newline();
    };
    painter.paint(&context.kind.label(), Color::Yellow)?;
    painter.newline()?;
    for label in context.button_labels() {
        painter.plain("  ")?;
        painter.paint(label, Color::Green)?;
        painter.newline()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }

    #[test]
    fn uncolored_context_panel() {
        let context = SelectionContext::new("#000", "  box-shadow: 0 0 #000;").unwrap();
        let mut out = Vec::new();
        let mut painter = Painter::new(&mut out, false);
        write_context(&mut painter, Some(&context)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "CONTEXT: SHADOW\n  shadow-drop\n  shadow-inset\n  shadow-hover\n"
        );
    }
}

//! Text emission for generated Rust source.

use std::fmt;

/// An opaque unit of emitted code.
///
/// Fragments are immutable once produced and may be empty. Customizations
/// hand fragments to the generator, which concatenates them in contribution
/// order at the section they were produced for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeFragment(String);

impl CodeFragment {
    /// The empty fragment, a customization's way of contributing nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if the fragment contributes no code.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The fragment's source text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CodeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CodeFragment {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for CodeFragment {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

/// Line-oriented writer for generated Rust source.
///
/// Tracks the current block depth and indents each written line by four
/// spaces per level. Fragments spliced in with [`Self::write_fragment`] are
/// re-indented line by line, so a fragment renders correctly at any nesting
/// depth regardless of where it was produced.
#[derive(Debug, Default)]
pub struct RustWriter {
    buf: String,
    indent: usize,
}

impl RustWriter {
    const INDENT: &'static str = "    ";

    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes one line at the current indentation.
    pub fn write_line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.is_empty() {
            self.buf.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.buf.push_str(Self::INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    /// Increases the indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decreases the indentation level.
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Writes `header` followed by ` {` and indents.
    pub fn open_block(&mut self, header: impl AsRef<str>) {
        self.write_line(format!("{} {{", header.as_ref()));
        self.indent();
    }

    /// Dedents and closes the innermost block.
    pub fn close_block(&mut self) {
        self.dedent();
        self.write_line("}");
    }

    /// Dedents and closes the innermost block with `suffix` appended to the
    /// closing brace, e.g. `close_block_with(")?;")` renders `})?;`.
    pub fn close_block_with(&mut self, suffix: &str) {
        self.dedent();
        self.write_line(format!("}}{suffix}"));
    }

    /// Splices `fragment`, re-indenting each of its lines.
    ///
    /// The fragment's own relative indentation is preserved; blank lines
    /// stay blank instead of picking up trailing whitespace.
    pub fn write_fragment(&mut self, fragment: &CodeFragment) {
        for line in fragment.as_str().lines() {
            self.write_line(line);
        }
    }

    /// Finishes writing and returns the rendered source.
    pub fn finish(self) -> String {
        self.buf
    }

    /// Finishes writing and returns the rendered source as a fragment.
    pub fn into_fragment(self) -> CodeFragment {
        CodeFragment(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn blocks_nest_with_four_space_indent() {
        let mut w = RustWriter::new();
        w.open_block("pub fn answer() -> u32");
        w.open_block("if true");
        w.write_line("42");
        w.close_block();
        w.write_line("unreachable!()");
        w.close_block();

        assert_eq!(
            w.finish(),
            "pub fn answer() -> u32 {\n    if true {\n        42\n    }\n    unreachable!()\n}\n"
        );
    }

    #[test]
    fn close_block_with_appends_the_suffix() {
        let mut w = RustWriter::new();
        w.open_block("request.augment(|req|");
        w.write_line("Ok(req)");
        w.close_block_with(")?;");

        assert_eq!(w.finish(), "request.augment(|req| {\n    Ok(req)\n})?;\n");
    }

    #[test]
    fn fragments_are_reindented_where_spliced() {
        let fragment = CodeFragment::from("match x {\n    0 => a(),\n    _ => b(),\n}");

        let mut w = RustWriter::new();
        w.open_block("fn dispatch()");
        w.write_fragment(&fragment);
        w.close_block();

        assert_eq!(
            w.finish(),
            "fn dispatch() {\n    match x {\n        0 => a(),\n        _ => b(),\n    }\n}\n"
        );
    }

    #[test]
    fn empty_fragment_writes_nothing() {
        let mut w = RustWriter::new();
        w.write_fragment(&CodeFragment::empty());
        assert!(w.is_empty());
        assert!(CodeFragment::empty().is_empty());
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let mut w = RustWriter::new();
        w.indent();
        w.write_line("a");
        w.blank_line();
        w.write_line("b");
        assert_eq!(w.finish(), "    a\n\n    b\n");
    }
}

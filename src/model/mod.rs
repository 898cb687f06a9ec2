use std::path::{Path, PathBuf};

/// Substring identifying the line that opens the generated region.
pub const START_MARKER: &str = "START OF README CONTENTS";

/// Substring identifying the line that closes the generated region.
pub const END_MARKER: &str = "END OF README CONTENTS";

/// Prefix prepended to every generated documentation-comment line.
pub const DOC_PREFIX: &str = "/// ";

/// The README as an ordered list of lines. Built once per run and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Splits raw README text into lines. Both `\n` and `\r\n` terminate a
    /// line and a trailing line break does not yield an extra empty line.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Documentation-comment lines derived one-to-one from a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentBlock {
    lines: Vec<String>,
}

impl CommentBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Reads a block back from its text form. The leading line feed that
    /// [`CommentBlock::render`] emits is consumed rather than producing an
    /// empty first line.
    pub fn from_text(text: &str) -> Self {
        let body = text.strip_prefix('\n').unwrap_or(text);
        if body.is_empty() {
            return Self::default();
        }
        Self {
            lines: body.split('\n').map(str::to_string).collect(),
        }
    }

    /// Text form of the block: every line preceded by a single line feed.
    pub fn render(&self) -> String {
        self.lines.iter().fold(String::new(), |mut out, line| {
            out.push('\n');
            out.push_str(line);
            out
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The pair of substrings delimiting the generated region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: START_MARKER.to_string(),
            end: END_MARKER.to_string(),
        }
    }
}

/// Zero-based line indices of the start and end marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Number of lines strictly between the two markers.
    pub fn inner_len(&self) -> usize {
        self.end.saturating_sub(self.start + 1)
    }
}

/// Contents of the destination source file, split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    /// Location the contents were read from and will be written back to.
    pub path: PathBuf,
    /// File lines without their terminators.
    pub lines: Vec<String>,
    /// Whether the file ended with a line break.
    pub trailing_newline: bool,
}

impl TargetFile {
    pub fn parse(path: impl AsRef<Path>, text: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lines: text.lines().map(str::to_string).collect(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Joins the lines with `\n`, restoring the final line break if the
    /// original file had one.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}

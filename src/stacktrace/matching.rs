//! Frame Matcher
//!
//! Scans the whole source with one line-anchored regex and yields every frame-shaped
//! line in order. Anything that is not a frame line (exception headers, `Stack trace:`
//! banners, `thrown in` footers, `Next ...` separators, profiler dumps) simply does
//! not match, so there is no line classification pass.
//!
//! ## Grammar
//!
//! ```text
//! #<n> [internal function]: [<class>(::|->)]<function>(<args>)
//! #<n> <file>(<line>): [<class>(::|->)]<function>(<args>)
//! #<n> {main}<anything>
//! ```
//!
//! `<file>` is the shortest run of characters that lets the rest of the line match,
//! so `/a.php(12) : eval()'d code(3): f()` captures `/a.php(12) : eval()'d code`
//! with line 3. Arguments are never captured. The `{main}` alternative has no
//! function or line capture; it exists so the terminator is visible to the
//! section stage and can then be filtered out.
//!
//! The regex engine matches in linear time, so no input can trigger catastrophic
//! backtracking.

use super::error::{Result, StacktraceError};
use once_cell::sync::OnceCell;
use regex::{Captures, Regex, RegexBuilder};
use std::ops::Range;

/// `m`: anchors are per line. `R`: `\r\n` line endings are accepted.
///
/// Digits are ASCII only, and a line number has at most nine of them so it always
/// fits a `u32`. Lines outside that shape are noise, not frames.
const FRAME_PATTERN: &str = concat!(
    r"(?mR)^#(?P<ORDINAL>[0-9]+)[ \t]+",
    r"(?:",
    r"(?:\[internal function\]|(?P<FILE>[^\r\n]+?)\((?P<LINE>[0-9]{1,9})\))",
    r":[ \t]+",
    r"(?:(?P<CLASS>[\w\\]+)(?P<TYPE>::|->))?",
    r"(?P<FUNCTION>\w+)",
    r"\([^\r\n]*?\)",
    r"|",
    r"\{main\}[^\r\n]*",
    r")$",
);

/// Upper bound on the compiled program size
const FRAME_PATTERN_SIZE_LIMIT: usize = 16 * (1 << 20);

static SHARED: OnceCell<FrameMatcher> = OnceCell::new();

/// One frame-shaped line, straight from the regex.
///
/// Each capture is independently present or absent. A terminator line (`#N {main}`)
/// has neither `function` nor `line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame<'t> {
    /// The `N` of `#N`
    pub ordinal: &'t str,
    /// Byte range of the whole line in the source
    pub span: Range<usize>,
    pub file: Option<&'t str>,
    pub line: Option<&'t str>,
    pub class: Option<&'t str>,
    pub call_type: Option<&'t str>,
    pub function: Option<&'t str>,
}

impl<'t> RawFrame<'t> {
    fn from_captures(caps: Captures<'t>) -> Self {
        let text = |name: &str| caps.name(name).map(|m| m.as_str());
        RawFrame {
            ordinal: text("ORDINAL").unwrap_or_default(),
            span: caps.get(0).map(|m| m.range()).unwrap_or_default(),
            file: text("FILE"),
            line: text("LINE"),
            class: text("CLASS"),
            call_type: text("TYPE"),
            function: text("FUNCTION"),
        }
    }

    /// True for the `#N {main}` line closing a trace section.
    pub fn is_terminator(&self) -> bool {
        self.function.is_none() && self.line.is_none()
    }
}

/// Compiled frame grammar
///
/// Build once and reuse; cloning shares the compiled program.
#[derive(Debug, Clone)]
pub struct FrameMatcher {
    regex: Regex,
}

impl FrameMatcher {
    pub fn new() -> Result<Self> {
        let regex = RegexBuilder::new(FRAME_PATTERN)
            .size_limit(FRAME_PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| StacktraceError::PatternExecution(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Process-wide matcher, compiled on first use.
    pub fn shared() -> Result<&'static FrameMatcher> {
        SHARED.get_or_try_init(FrameMatcher::new)
    }

    /// Lazily yield every frame-shaped line of `text`, in source order.
    pub fn matches<'t>(&'t self, text: &'t str) -> impl Iterator<Item = RawFrame<'t>> + 't {
        self.regex.captures_iter(text).map(RawFrame::from_captures)
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

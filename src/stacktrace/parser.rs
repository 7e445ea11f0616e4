//! Parse entry points
//!
//! [parse] runs the whole pipeline with the default options. [StacktraceParser]
//! carries [ParseOptions] for callers that need a different section policy or an
//! input size limit.

use super::error::{Result, StacktraceError};
use super::filtering::retain_frames;
use super::frame::Frame;
use super::mapping::map_frame;
use super::matching::FrameMatcher;
use super::sections::{select_sections, SectionPolicy};
use log::{debug, warn};

/// Knobs for a [StacktraceParser]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub section_policy: SectionPolicy,
    /// Larger input fails with `PatternExecution` before matching starts
    pub max_input_bytes: Option<usize>,
}

impl ParseOptions {
    pub fn with_section_policy(mut self, policy: SectionPolicy) -> Self {
        self.section_policy = policy;
        self
    }

    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }
}

/// Reusable parser; cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct StacktraceParser {
    matcher: FrameMatcher,
    options: ParseOptions,
}

impl StacktraceParser {
    pub fn new() -> Result<Self> {
        Self::with_options(ParseOptions::default())
    }

    pub fn with_options(options: ParseOptions) -> Result<Self> {
        Ok(Self {
            matcher: FrameMatcher::shared()?.clone(),
            options,
        })
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Extract the frames of `source`, in source order.
    pub fn parse(&self, source: &str) -> Result<Vec<Frame>> {
        run(&self.matcher, &self.options, source)
    }
}

/// Extract the frames of `source` using the first trace section only.
///
/// Text without frames gives an empty list, not an error.
pub fn parse(source: &str) -> Result<Vec<Frame>> {
    run(FrameMatcher::shared()?, &ParseOptions::default(), source)
}

fn run(matcher: &FrameMatcher, options: &ParseOptions, source: &str) -> Result<Vec<Frame>> {
    if let Some(limit) = options.max_input_bytes {
        if source.len() > limit {
            warn!("refusing {} bytes of trace text, limit is {}", source.len(), limit);
            return Err(StacktraceError::PatternExecution(format!(
                "input of {} bytes exceeds the {} byte limit",
                source.len(),
                limit
            )));
        }
    }

    let selected = select_sections(matcher.matches(source), options.section_policy);
    let frames = retain_frames(selected)
        .map(|raw| map_frame(&raw))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "parsed {} frames from {} bytes ({:?} section policy)",
        frames.len(),
        source.len(),
        options.section_policy
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stacktrace::frame::CallType;

    const USUAL: &str = "\
Stack trace:
#0 /in/hVvRE(11): A->__g()
#1 {main}
  thrown in /in/hVvRE on line 5
";

    #[test]
    fn test_parse_usual_trace() {
        let frames = parse(USUAL).unwrap();
        assert_eq!(frames, vec![Frame::new("__g").at("/in/hVvRE", 11).instance_call("A")]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_only_noise() {
        assert!(parse("Stack trace:\n#0 {main}\n").unwrap().is_empty());
    }

    #[test]
    fn test_parser_agrees_with_parse() {
        let parser = StacktraceParser::new().unwrap();
        let frames = parser.parse(USUAL).unwrap();
        assert_eq!(frames, parse(USUAL).unwrap());
    }

    #[test]
    fn test_internal_frame() {
        let frames = parse("#0 [internal function]: Foo::bar()\n#1 {main}").unwrap();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].file.is_none());
        assert!(frames[0].line.is_none());
        assert_eq!(frames[0].class.as_deref(), Some("Foo"));
        assert_eq!(frames[0].call_type, CallType::StaticCall);
        assert_eq!(frames[0].function, "bar");
    }

    #[test]
    fn test_options_builder() {
        let options = ParseOptions::default()
            .with_section_policy(SectionPolicy::All)
            .with_max_input_bytes(64);
        assert_eq!(options.section_policy, SectionPolicy::All);
        assert_eq!(options.max_input_bytes, Some(64));
    }

    #[test]
    fn test_input_limit() {
        let options = ParseOptions::default().with_max_input_bytes(8);
        let parser = StacktraceParser::with_options(options).unwrap();
        match parser.parse(USUAL) {
            Err(StacktraceError::PatternExecution(msg)) => {
                assert!(msg.contains("exceeds the 8 byte limit"));
            }
            other => panic!("Expected PatternExecution, got {:?}", other),
        }
    }

    #[test]
    fn test_input_at_limit_is_accepted() {
        let options = ParseOptions::default().with_max_input_bytes(USUAL.len());
        let parser = StacktraceParser::with_options(options).unwrap();
        assert_eq!(parser.parse(USUAL).unwrap().len(), 1);
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StacktraceParser>();
    }
}

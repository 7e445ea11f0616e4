//! Frame Filter
//!
//! Drops matches with neither a function nor a line number. In practice that is the
//! `#N {main}` terminator; internal function frames keep their function and pass.

use super::matching::RawFrame;
use log::trace;

pub fn is_frame(raw: &RawFrame<'_>) -> bool {
    raw.function.is_some() || raw.line.is_some()
}

/// Keep only real frames, preserving order.
pub fn retain_frames<'t>(
    matches: impl IntoIterator<Item = RawFrame<'t>>,
) -> impl Iterator<Item = RawFrame<'t>> {
    matches.into_iter().filter(|raw| {
        let keep = is_frame(raw);
        if !keep {
            trace!("skipping #{} at byte {}", raw.ordinal, raw.span.start);
        }
        keep
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(function: Option<&'static str>, line: Option<&'static str>) -> RawFrame<'static> {
        RawFrame {
            ordinal: "0",
            span: 0..0,
            file: line.map(|_| "/in/x"),
            line,
            class: None,
            call_type: None,
            function,
        }
    }

    #[test]
    fn test_terminator_is_dropped() {
        assert!(!is_frame(&raw(None, None)));
    }

    #[test]
    fn test_internal_function_is_kept() {
        assert!(is_frame(&raw(Some("bar"), None)));
    }

    #[test]
    fn test_file_frame_is_kept() {
        assert!(is_frame(&raw(Some("g"), Some("11"))));
    }

    #[test]
    fn test_line_without_function_is_kept() {
        // Left for the mapper to reject
        assert!(is_frame(&raw(None, Some("11"))));
    }

    #[test]
    fn test_retain_preserves_order() {
        let kept: Vec<_> = retain_frames(vec![
            raw(Some("a"), Some("1")),
            raw(None, None),
            raw(Some("b"), None),
            raw(None, None),
        ])
        .map(|r| r.function)
        .collect();
        assert_eq!(kept, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn test_retain_nothing() {
        assert_eq!(retain_frames(vec![raw(None, None)]).count(), 0);
        assert_eq!(retain_frames(Vec::new()).count(), 0);
    }
}

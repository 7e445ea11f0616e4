//! Frame Mapper
//!
//! Turns a filtered [RawFrame] into a [Frame]. The grammar already guarantees the
//! shape of every capture, so each error here means the matcher and filter disagree
//! about what a frame is; it is reported instead of panicking.

use super::error::{Result, StacktraceError};
use super::frame::{CallType, Frame};
use super::matching::RawFrame;

pub fn map_frame(raw: &RawFrame<'_>) -> Result<Frame> {
    let offset = raw.span.start;

    let function = raw
        .function
        .ok_or_else(|| StacktraceError::malformed(offset, "missing function name"))?;

    let line = raw
        .line
        .map(|line| {
            line.parse::<u32>().map_err(|e| {
                let reason = format!("invalid line number {:?}: {}", line, e);
                StacktraceError::malformed(offset, reason)
            })
        })
        .transpose()?;

    if raw.file.is_some() != line.is_some() {
        return Err(StacktraceError::malformed(offset, "file and line must appear together"));
    }

    let call_type = match raw.call_type {
        Some(op) => CallType::from_operator(op).ok_or_else(|| {
            StacktraceError::malformed(offset, format!("unknown call operator {:?}", op))
        })?,
        None => CallType::None,
    };

    if raw.class.is_some() == call_type.is_none() {
        return Err(StacktraceError::malformed(
            offset,
            "class and call operator must appear together",
        ));
    }

    Ok(Frame {
        file: raw.file.map(str::to_string),
        line,
        class: raw.class.map(str::to_string),
        call_type,
        function: function.to_string(),
    })
}

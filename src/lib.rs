//! # stacktrace-parser
//!
//! Turns the textual rendering of a runtime call stack into structured frames.
//!
//! Input is whatever an exception reporter printed: headers, `Stack trace:` banners,
//! `#N file(line): Class->method(args)` lines, `{main}` terminators, `thrown in`
//! footers and chained `Next ...` sections. Output is an ordered `Vec<Frame>`.
//!
//! ```text
//! Stack trace:
//! #0 /in/x(11): A->g()
//! #1 {main}
//!   thrown in /in/x on line 5
//! ```
//!
//! yields a single frame `/in/x:11 A->g`.
//!
//! The pipeline lives in [stacktrace]: matching, section selection, filtering and
//! mapping are separate stages so each can be tested on its own. [config] loads
//! parser options from TOML.

pub mod config;
pub mod stacktrace;

pub use stacktrace::{
    parse, CallType, Frame, ParseOptions, Result, SectionPolicy, StacktraceError,
    StacktraceParser,
};

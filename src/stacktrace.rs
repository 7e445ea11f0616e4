//! Stack trace parsing pipeline
//!
//! text -> [matching] -> [sections] -> [filtering] -> [mapping] -> `Vec<Frame>`
//!
//! Every stage is stateless. The only shared value is the compiled frame pattern,
//! built once and reused across calls and threads.

pub mod error;
pub mod filtering;
pub mod frame;
pub mod mapping;
pub mod matching;
pub mod parser;
pub mod sections;

pub use error::{Result, StacktraceError};
pub use frame::{CallType, Frame};
pub use matching::{FrameMatcher, RawFrame};
pub use parser::{parse, ParseOptions, StacktraceParser};
pub use sections::SectionPolicy;

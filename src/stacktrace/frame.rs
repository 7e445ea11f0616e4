//! Frame records
//!
//! A [Frame] is one recognized line of a stack trace. Optional parts are always
//! `None` when missing, never empty strings: a free function has no class and
//! `CallType::None`, an internal (native) call has no file and no line.
//!
//! Serialized, a frame uses the same keys the runtime uses for its own trace
//! arrays: `file`, `line`, `class`, `type`, `function`.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How the frame's function was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallType {
    /// `Class::method`
    StaticCall,
    /// `Class->method`
    InstanceCall,
    /// Free function, no enclosing class
    #[default]
    None,
}

impl CallType {
    /// Map a call operator (`::` or `->`) to its call type.
    pub fn from_operator(op: &str) -> Option<Self> {
        match op {
            "::" => Some(CallType::StaticCall),
            "->" => Some(CallType::InstanceCall),
            _ => None,
        }
    }

    /// The operator as it appears in a trace line, if any.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            CallType::StaticCall => Some("::"),
            CallType::InstanceCall => Some("->"),
            CallType::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, CallType::None)
    }
}

impl Serialize for CallType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(op) => serializer.serialize_str(op),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for CallType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(CallType::None),
            Some(op) => CallType::from_operator(&op).ok_or_else(|| {
                de::Error::invalid_value(Unexpected::Str(&op), &"\"::\", \"->\" or null")
            }),
        }
    }
}

/// One structured stack entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    /// Source file; `None` for internal function frames
    pub file: Option<String>,
    /// 1-based line inside `file`; present exactly when `file` is
    pub line: Option<u32>,
    /// Enclosing type for method calls, possibly namespaced (`Foo\Bar`)
    pub class: Option<String>,
    #[serde(rename = "type", default)]
    pub call_type: CallType,
    pub function: String,
}

impl Frame {
    /// An internal free-function frame; chain [Frame::at] and
    /// [Frame::static_call] / [Frame::instance_call] to fill in the rest.
    pub fn new(function: impl Into<String>) -> Self {
        Frame {
            file: None,
            line: None,
            class: None,
            call_type: CallType::None,
            function: function.into(),
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    pub fn static_call(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self.call_type = CallType::StaticCall;
        self
    }

    pub fn instance_call(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self.call_type = CallType::InstanceCall;
        self
    }

    /// True for calls into native code, which carry no source location.
    pub fn is_internal(&self) -> bool {
        self.file.is_none()
    }

    /// `Class::function`, `Class->function` or plain `function`.
    pub fn qualified_name(&self) -> String {
        match (&self.class, self.call_type.as_str()) {
            (Some(class), Some(op)) => format!("{}{}{}", class, op, self.function),
            _ => self.function.clone(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{}({})", file, line)?,
            (Some(file), None) => write!(f, "{}", file)?,
            _ => write!(f, "[internal function]")?,
        }
        write!(f, ": {}()", self.qualified_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_type_from_operator() {
        assert_eq!(CallType::from_operator("::"), Some(CallType::StaticCall));
        assert_eq!(CallType::from_operator("->"), Some(CallType::InstanceCall));
        assert_eq!(CallType::from_operator("."), None);
        assert_eq!(CallType::from_operator(""), None);
    }

    #[test]
    fn test_call_type_as_str() {
        assert_eq!(CallType::StaticCall.as_str(), Some("::"));
        assert_eq!(CallType::InstanceCall.as_str(), Some("->"));
        assert_eq!(CallType::None.as_str(), None);
        assert!(CallType::default().is_none());
    }

    #[test]
    fn test_builder_keeps_class_and_call_type_together() {
        let frame = Frame::new("bar").static_call("Foo");
        assert_eq!(frame.class.as_deref(), Some("Foo"));
        assert_eq!(frame.call_type, CallType::StaticCall);

        let frame = Frame::new("bar");
        assert!(frame.class.is_none());
        assert!(frame.call_type.is_none());
    }

    #[test]
    fn test_is_internal() {
        assert!(Frame::new("bar").static_call("Foo").is_internal());
        assert!(!Frame::new("bar").at("/in/x", 3).is_internal());
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(Frame::new("g").instance_call("A").qualified_name(), "A->g");
        assert_eq!(
            Frame::new("run").static_call("\\App\\Kernel").qualified_name(),
            "\\App\\Kernel::run"
        );
        assert_eq!(Frame::new("function_one").qualified_name(), "function_one");
    }

    #[test]
    fn test_display() {
        let frame = Frame::new("g").at("/in/x", 11).instance_call("A");
        assert_eq!(frame.to_string(), "/in/x(11): A->g()");

        let frame = Frame::new("bar").static_call("Foo");
        assert_eq!(frame.to_string(), "[internal function]: Foo::bar()");
    }
}

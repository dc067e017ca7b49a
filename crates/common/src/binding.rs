use std::fmt;

use serde_json::Value;

/// Declared type of a command parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    /// One of a closed set of service constants
    Enum(&'static [&'static str]),
    StringList,
    IntegerList,
    /// Repeated `Key=Value` pairs
    TagList,
    /// Repeated `Key=v1,v2` pairs
    FilterList,
    /// Repeated `Key=ASC|DESC` pairs
    SortList,
}

impl ParamKind {
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            ParamKind::StringList
                | ParamKind::IntegerList
                | ParamKind::TagList
                | ParamKind::FilterList
                | ParamKind::SortList
        )
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::String => write!(f, "String"),
            ParamKind::Integer => write!(f, "Int32"),
            ParamKind::Boolean => write!(f, "Boolean"),
            ParamKind::Enum(values) => write!(f, "{{{}}}", values.join("|")),
            ParamKind::StringList => write!(f, "String[]"),
            ParamKind::IntegerList => write!(f, "Int32[]"),
            ParamKind::TagList => write!(f, "Tag[]"),
            ParamKind::FilterList => write!(f, "Filter[]"),
            ParamKind::SortList => write!(f, "SortCriterion[]"),
        }
    }
}

/// A named, typed input of a command and the request member it feeds.
///
/// `name` is the local parameter name; it is also the key the parameter
/// record serializes under, which is what pass-through selection and the
/// required check read. `remote` is the request member the value lands in
/// when the two differ (`Tag` -> `Tags`, flattened nested members, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterBinding {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: ParamKind,
    pub required: bool,
    pub remote: &'static str,
}

impl ParameterBinding {
    pub const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            aliases: &[],
            kind,
            required: false,
            remote: name,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub const fn remote(mut self, remote: &'static str) -> Self {
        self.remote = remote;
        self
    }

    /// Case-insensitive match against the name or any alias.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Whether the serialized parameter record carries no value for this binding.
    ///
    /// Null and missing keys are unset; for list kinds an empty list is too,
    /// since the command line cannot distinguish "not given" from "given zero times".
    pub fn is_unset_in(&self, params: &Value) -> bool {
        match params.get(self.name) {
            None | Some(Value::Null) => true,
            Some(Value::Array(items)) if self.kind.is_list() => items.is_empty(),
            Some(_) => false,
        }
    }
}

/// Collapses a nested request member assembled from flattened parameters.
///
/// Returns `None` when none of the member's fields were set, so the member is
/// left off the wire instead of being sent as an empty object.
pub fn present_if_any<T: Default + PartialEq>(member: T) -> Option<T> {
    if member == T::default() {
        None
    } else {
        Some(member)
    }
}

/// Maps an empty collected list to an absent request member.
pub fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

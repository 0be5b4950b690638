//! Option definitions

use serde_json::Value;

/// Value shape of a single command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
}

/// What an option accepts on the command line and how its value is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    String,
    Integer,
    Float,
    /// One or more values (`--integers 1 2 3`); the last occurrence wins.
    List(ScalarKind),
    /// Boolean switch, `true` when present.
    Flag,
    /// Switch that stores the given constant when present.
    Const(Value),
}

impl OptionKind {
    pub(crate) fn scalar(&self) -> Option<ScalarKind> {
        match self {
            OptionKind::String => Some(ScalarKind::String),
            OptionKind::Integer => Some(ScalarKind::Integer),
            OptionKind::Float => Some(ScalarKind::Float),
            OptionKind::List(kind) => Some(*kind),
            OptionKind::Flag | OptionKind::Const(_) => None,
        }
    }
}

/// A named option with its default value.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub(crate) name: String,
    pub(crate) long: Option<String>,
    pub(crate) short: Option<char>,
    pub(crate) dash_alias: Option<String>,
    pub(crate) help: Option<String>,
    pub(crate) value_name: Option<String>,
    pub(crate) kind: OptionKind,
    pub(crate) default: Value,
    pub(crate) optional_value: bool,
    pub(crate) missing_value: Option<String>,
}

impl OptionSpec {
    /// Create an option named `name`, which is also its `--name` long flag
    /// unless [`OptionSpec::long`] overrides it.
    ///
    /// Flags default to `false`; every other kind defaults to `null` until
    /// [`OptionSpec::default_value`] is called.
    pub fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        let default = match kind {
            OptionKind::Flag => Value::Bool(false),
            _ => Value::Null,
        };
        Self {
            name: name.into(),
            long: None,
            short: None,
            dash_alias: None,
            help: None,
            value_name: None,
            kind,
            default,
            optional_value: false,
            missing_value: None,
        }
    }

    /// Spell the long flag differently from the key the value is stored under,
    /// e.g. `--sum` for an option named `accumulate`.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Accept a multi-letter single-dash spelling such as `-wc`.
    pub fn dash_alias(mut self, alias: impl Into<String>) -> Self {
        self.dash_alias = Some(alias.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn value_name(mut self, value_name: impl Into<String>) -> Self {
        self.value_name = Some(value_name.into());
        self
    }

    pub fn default_value(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    /// Allow the flag without a value. A bare flag stores `missing`, or the
    /// default when `missing` is `None`.
    pub fn optional_value(mut self, missing: Option<&str>) -> Self {
        self.optional_value = true;
        self.missing_value = missing.map(str::to_string);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `--long` spelling, without the dashes.
    pub fn long_name(&self) -> &str {
        self.long.as_deref().unwrap_or(&self.name)
    }

    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn short_flag(&self) -> Option<char> {
        self.short
    }
}

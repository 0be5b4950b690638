//! Option schema and the clap-backed parser behind it
//!
//! A [`Schema`] is the ordered list of options a program accepts. Parsing any
//! argument vector yields a flat [`OptionMap`] holding every option: the value
//! given on the command line, or the declared default.

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;

mod option;
mod parser;

pub use option::{OptionKind, OptionSpec, ScalarKind};

/// Option name to value. Sorted by key so dumps are deterministic.
pub type OptionMap = BTreeMap<String, Value>;

#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    about: Option<String>,
    version: Option<String>,
    options: Vec<OptionSpec>,
}

impl Schema {
    /// Create an empty schema; `name` is the program name shown in usage text.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), about: None, version: None, options: Vec::new() }
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Enable `--version` with the given version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub(crate) fn push(&mut self, spec: OptionSpec) {
        self.options.push(spec);
    }

    /// The clap command this schema parses with, e.g. for rendering help.
    pub fn command(&self) -> clap::Command {
        parser::build_command(self)
    }

    /// Parse `args` (without the program name) into a full option mapping.
    ///
    /// Options missing from `args` take their declared default, so an empty
    /// `args` yields exactly the defaults.
    pub fn parse_from<I, T>(&self, args: I) -> Result<OptionMap>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = std::iter::once(OsString::from(&self.name))
            .chain(self.expand_dash_aliases(args.into_iter().map(Into::into)));
        let matches = self.command().try_get_matches_from(argv)?;
        Ok(parser::extract(self, &matches))
    }

    /// Rewrite `-wc` style spellings to their `--long` form.
    fn expand_dash_aliases(&self, args: impl Iterator<Item = OsString>) -> Vec<OsString> {
        let aliases: Vec<(String, &str)> = self
            .options
            .iter()
            .filter_map(|spec| {
                spec.dash_alias.as_ref().map(|a| (format!("-{a}"), spec.long_name()))
            })
            .collect();

        let mut expanded = Vec::new();
        let mut literal = false;
        for arg in args {
            if literal {
                expanded.push(arg);
                continue;
            }
            let rewritten = arg.to_str().and_then(|token| {
                if token == "--" {
                    return None;
                }
                aliases.iter().find_map(|(alias, long)| {
                    if token == alias {
                        Some(format!("--{long}"))
                    } else {
                        token
                            .strip_prefix(alias.as_str())
                            .and_then(|rest| rest.strip_prefix('='))
                            .map(|value| format!("--{long}={value}"))
                    }
                })
            });
            if arg == "--" {
                literal = true;
            }
            expanded.push(rewritten.map(OsString::from).unwrap_or(arg));
        }
        expanded
    }

    /// Reject schemas clap would refuse or that would parse ambiguously.
    pub(crate) fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut longs = HashSet::new();
        let mut shorts = HashSet::new();
        let mut aliases = HashSet::new();

        for spec in &self.options {
            let name = spec.name();
            if name.is_empty() || name.starts_with('-') {
                return Err(Error::Schema(format!("invalid option name '{name}'")));
            }
            if name == "help" || (self.version.is_some() && name == "version") {
                return Err(Error::Schema(format!("option name '{name}' is taken by clap")));
            }
            if !names.insert(name) {
                return Err(Error::Schema(format!("option '{name}' is defined more than once")));
            }
            let long = spec.long_name();
            if long.is_empty() || long.starts_with('-') {
                return Err(Error::Schema(format!(
                    "option '{name}': invalid long flag '{long}'"
                )));
            }
            if long == "help" || (self.version.is_some() && long == "version") {
                return Err(Error::Schema(format!("long flag --{long} is taken by clap")));
            }
            if !longs.insert(long) {
                return Err(Error::Schema(format!(
                    "long flag --{long} is used by more than one option"
                )));
            }
            if let Some(short) = spec.short {
                if short == 'h' || (self.version.is_some() && short == 'V') || short == '-' {
                    return Err(Error::Schema(format!("short flag -{short} is not available")));
                }
                if !shorts.insert(short) {
                    return Err(Error::Schema(format!(
                        "short flag -{short} is used by more than one option"
                    )));
                }
            }
            if let Some(alias) = &spec.dash_alias {
                if alias.chars().count() < 2 || alias.starts_with('-') {
                    return Err(Error::Schema(format!("invalid dash alias '-{alias}'")));
                }
                if !aliases.insert(alias.as_str()) {
                    return Err(Error::Schema(format!(
                        "dash alias -{alias} is used by more than one option"
                    )));
                }
            }
            if spec.optional_value && !matches!(spec.kind, OptionKind::String) {
                return Err(Error::Schema(format!(
                    "option '{name}': only string options may take an optional value"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn demo_schema() -> Schema {
        Schema::new("demo")
            .option(
                OptionSpec::new("integers", OptionKind::List(ScalarKind::Integer))
                    .default_value(json!([1, 2, 3])),
            )
            .option(
                OptionSpec::new("accumulate", OptionKind::Const(json!("sum")))
                    .default_value(json!("max")),
            )
            .option(OptionSpec::new("ratio", OptionKind::Float).default_value(json!(0.5)))
            .option(
                OptionSpec::new("out", OptionKind::String)
                    .dash_alias("wo")
                    .optional_value(Some("stdout")),
            )
    }

    #[test]
    fn empty_input_yields_defaults() {
        let parsed = demo_schema().parse_from(Vec::<String>::new()).expect("parse");
        assert_eq!(parsed["integers"], json!([1, 2, 3]));
        assert_eq!(parsed["accumulate"], json!("max"));
        assert_eq!(parsed["ratio"], json!(0.5));
        assert_eq!(parsed["out"], Value::Null);
    }

    #[test]
    fn parses_typed_values() {
        let parsed = demo_schema()
            .parse_from(["--integers", "4", "5", "--accumulate", "--ratio", "2.5"])
            .expect("parse");
        assert_eq!(parsed["integers"], json!([4, 5]));
        assert_eq!(parsed["accumulate"], json!("sum"));
        assert_eq!(parsed["ratio"], json!(2.5));
    }

    #[test]
    fn last_occurrence_wins() {
        let parsed = demo_schema()
            .parse_from(["--ratio", "1.0", "--ratio", "3.0"])
            .expect("parse");
        assert_eq!(parsed["ratio"], json!(3.0));
    }

    #[test]
    fn bare_optional_value_uses_missing_constant() {
        let parsed = demo_schema().parse_from(["--out"]).expect("parse");
        assert_eq!(parsed["out"], json!("stdout"));
    }

    #[test]
    fn dash_alias_is_rewritten() {
        let schema = demo_schema();
        assert_eq!(schema.parse_from(["-wo"]).expect("parse")["out"], json!("stdout"));
        assert_eq!(schema.parse_from(["-wo", "a.json"]).expect("parse")["out"], json!("a.json"));
        assert_eq!(schema.parse_from(["-wo=b.json"]).expect("parse")["out"], json!("b.json"));
    }

    #[test]
    fn bad_integer_is_a_parse_error() {
        let err = demo_schema().parse_from(["--integers", "x"]).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn unknown_flag_is_a_parse_error() {
        let err = demo_schema().parse_from(["--nope"]).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let schema = Schema::new("demo")
            .option(OptionSpec::new("a", OptionKind::String).short('a'))
            .option(OptionSpec::new("b", OptionKind::String).short('a'));
        assert!(matches!(schema.validate(), Err(Error::Schema(_))));

        let schema = Schema::new("demo")
            .option(OptionSpec::new("a", OptionKind::String))
            .option(OptionSpec::new("a", OptionKind::Integer));
        assert!(matches!(schema.validate(), Err(Error::Schema(_))));
    }

    #[test]
    fn long_override_stores_under_the_option_name() {
        let schema = Schema::new("demo").option(
            OptionSpec::new("accumulate", OptionKind::Const(json!("sum")))
                .long("sum")
                .default_value(json!("max")),
        );
        let parsed = schema.parse_from(["--sum"]).expect("parse");
        assert_eq!(parsed["accumulate"], json!("sum"));
        assert!(!parsed.contains_key("sum"));

        let err = schema.parse_from(["--accumulate"]).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn dash_alias_targets_the_long_override() {
        let schema = Schema::new("demo").option(
            OptionSpec::new("destination", OptionKind::String).long("out").dash_alias("wo"),
        );
        let parsed = schema.parse_from(["-wo=a.json"]).expect("parse");
        assert_eq!(parsed["destination"], json!("a.json"));
    }

    #[test]
    fn validate_rejects_clashing_long_flags() {
        let schema = Schema::new("demo")
            .option(OptionSpec::new("sum", OptionKind::Flag))
            .option(OptionSpec::new("accumulate", OptionKind::Flag).long("sum"));
        assert!(matches!(schema.validate(), Err(Error::Schema(_))));
    }

    #[test]
    fn validate_rejects_optional_value_on_lists() {
        let schema = Schema::new("demo").option(
            OptionSpec::new("xs", OptionKind::List(ScalarKind::String)).optional_value(None),
        );
        assert!(matches!(schema.validate(), Err(Error::Schema(_))));
    }
}

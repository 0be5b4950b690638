//! The demo program's options and what it does with them

use anyhow::{bail, Context, Result};
use argconfig::{
    Defaults, EnvSource, FileFormat, FileSource, OptionKind, OptionMap, OptionSpec, PassedArgs,
    Pipeline, ScalarKind, Schema,
};
use serde_json::{json, Value};

use super::utils::integer_list;

/// Environment variables with this prefix override config file values.
pub const ENV_PREFIX: &str = "ARGCONFIG_";

pub fn schema() -> Schema {
    Schema::new("argconfig")
        .about("Process some integers, with options layered from defaults, config file, environment and arguments")
        .version(env!("CARGO_PKG_VERSION"))
        .option(
            OptionSpec::new("integers", OptionKind::List(ScalarKind::Integer))
                .value_name("N")
                .default_value(json!([1, 2, 3]))
                .help("An integer for the accumulator"),
        )
        .option(
            OptionSpec::new("accumulate", OptionKind::Const(json!("sum")))
                .long("sum")
                .default_value(json!("max"))
                .help("Sum the integers (default: find the max)"),
        )
}

pub fn pipeline() -> Pipeline {
    Pipeline::new()
        .with(Defaults)
        .with(FileSource::passed(FileFormat::Auto))
        .with(EnvSource::new(ENV_PREFIX))
        .with(PassedArgs)
}

/// Apply the resolved accumulator to the resolved integers.
pub fn accumulate(options: &OptionMap) -> Result<i64> {
    let integers = integer_list(options.get("integers").context("Missing option: integers")?)?;
    let accumulator = match options.get("accumulate") {
        None => "max",
        Some(Value::String(accumulator)) => accumulator.as_str(),
        Some(other) => bail!("Invalid accumulator {other} (expected 'sum' or 'max')"),
    };

    match accumulator {
        "sum" => Ok(integers.iter().sum()),
        "max" => integers.iter().copied().max().context("No integers to take the max of"),
        other => bail!("Unknown accumulator '{other}' (expected 'sum' or 'max')"),
    }
}

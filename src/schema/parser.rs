//! Translation between a [`Schema`] and clap

use super::{OptionKind, OptionMap, OptionSpec, ScalarKind, Schema};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde_json::{Number, Value};

pub(super) fn build_command(schema: &Schema) -> Command {
    // argparse semantics: repeating an option replaces the earlier value
    let mut command = Command::new(schema.name.clone()).args_override_self(true);
    if let Some(about) = &schema.about {
        command = command.about(about.clone());
    }
    if let Some(version) = &schema.version {
        command = command.version(version.clone());
    }
    for spec in &schema.options {
        command = command.arg(build_arg(spec));
    }
    command
}

fn build_arg(spec: &OptionSpec) -> Arg {
    let mut arg = Arg::new(spec.name.clone()).long(spec.long_name().to_string());
    if let Some(short) = spec.short {
        arg = arg.short(short);
    }
    if let Some(help) = &spec.help {
        arg = arg.help(help.clone());
    }

    let Some(scalar) = spec.kind.scalar() else {
        return arg.action(ArgAction::SetTrue);
    };

    if let Some(value_name) = &spec.value_name {
        arg = arg.value_name(value_name.clone());
    }
    arg = match scalar {
        ScalarKind::String => arg.value_parser(value_parser!(String)),
        ScalarKind::Integer => arg.value_parser(value_parser!(i64)).allow_negative_numbers(true),
        ScalarKind::Float => arg.value_parser(value_parser!(f64)).allow_negative_numbers(true),
    }
    .action(ArgAction::Set);

    if matches!(spec.kind, OptionKind::List(_)) {
        arg.num_args(1..)
    } else if spec.optional_value {
        let arg = arg.num_args(0..=1);
        match &spec.missing_value {
            Some(missing) => arg.default_missing_value(missing.clone()),
            None => arg,
        }
    } else {
        arg
    }
}

/// Flatten clap matches into one value per schema option, filling in defaults.
pub(super) fn extract(schema: &Schema, matches: &ArgMatches) -> OptionMap {
    schema
        .options
        .iter()
        .map(|spec| {
            let given = match &spec.kind {
                OptionKind::Flag => matches.get_flag(&spec.name).then_some(Value::Bool(true)),
                OptionKind::Const(value) => matches.get_flag(&spec.name).then(|| value.clone()),
                OptionKind::List(scalar) => values(matches, &spec.name, *scalar).map(Value::Array),
                kind => kind
                    .scalar()
                    .and_then(|scalar| values(matches, &spec.name, scalar))
                    .and_then(|mut values| values.pop()),
            };
            (spec.name.clone(), given.unwrap_or_else(|| spec.default.clone()))
        })
        .collect()
}

fn values(matches: &ArgMatches, id: &str, scalar: ScalarKind) -> Option<Vec<Value>> {
    let values = match scalar {
        ScalarKind::String => {
            matches.get_many::<String>(id)?.map(|v| Value::String(v.clone())).collect()
        }
        ScalarKind::Integer => matches.get_many::<i64>(id)?.map(|v| Value::from(*v)).collect(),
        ScalarKind::Float => matches
            .get_many::<f64>(id)?
            .map(|v| Number::from_f64(*v).map(Value::Number).unwrap_or(Value::Null))
            .collect(),
    };
    Some(values)
}

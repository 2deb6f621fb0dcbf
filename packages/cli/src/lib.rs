//! i18lite command line
//!
//! `i18lite t` translates a key; `i18lite trans` renders a tagged
//! translation with indexed tags mapped to HTML elements and prints the
//! result as markup.

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use i18lite::resource::resource_from_str;
use i18lite::{I18n, InitOptions, TArg, TOptions};
use i18lite_trans::markup::decode_html_entities;
use i18lite_trans::{
    default_parser, nodes_from_markup, Trans, TransComponent, TransProps, ViewElement, ViewNode,
};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Output of one command: the text for stdout plus non-fatal warnings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    pub warnings: Vec<String>,
}

pub fn build_command() -> Command {
    Command::new("i18lite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate keys from JSON resource bundles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            with_instance_args(Command::new("t").about("Translate a key"))
                .arg(
                    Arg::new("ns")
                        .long("ns")
                        .value_name("NS")
                        .help("Namespace to look the key up in"),
                )
                .arg(
                    Arg::new("default")
                        .long("default")
                        .value_name("TEXT")
                        .help("Text returned when the key is missing"),
                ),
        )
        .subcommand(
            with_instance_args(
                Command::new("trans").about("Render a tagged translation as markup"),
            )
            .arg(
                Arg::new("component")
                    .long("component")
                    .value_name("N=TAG")
                    .action(ArgAction::Append)
                    .help("Render tag <N> as a <TAG> element"),
            ),
        )
}

fn with_instance_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("resources")
                .short('r')
                .long("resources")
                .value_name("FILE")
                .help("JSON file of the form { lng: { ns: { key: value } } }"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON init options"),
        )
        .arg(
            Arg::new("lng")
                .short('l')
                .long("lng")
                .value_name("LNG")
                .help("Language to translate into"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("NAME=VALUE")
                .action(ArgAction::Append)
                .help("Interpolation value; JSON literals are parsed, anything else is a string"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log lookups at debug level"),
        )
        .arg(Arg::new("key").value_name("KEY").required(true))
}

pub fn run(matches: &ArgMatches) -> Result<Output> {
    match matches.subcommand() {
        Some(("t", sub)) => run_translate(sub),
        Some(("trans", sub)) => run_trans(sub),
        Some((name, _)) => bail!("unknown command {:?}", name),
        None => bail!("no command given"),
    }
}

fn run_translate(matches: &ArgMatches) -> Result<Output> {
    let i18n = load_instance(matches)?;
    let key = required(matches, "key")?;

    let mut options = interpolation_values(matches)?;
    if let Some(ns) = matches.get_one::<String>("ns") {
        options = options.with_ns(ns);
    }
    let arg = match matches.get_one::<String>("default") {
        Some(text) => TArg::Default(text.clone()),
        None => TArg::None,
    };

    Ok(Output {
        text: i18n.t(key, arg, Some(&options)),
        warnings: Vec::new(),
    })
}

fn run_trans(matches: &ArgMatches) -> Result<Output> {
    let i18n = load_instance(matches)?;
    let key = required(matches, "key")?;

    let mut props = TransProps::new(key).with_options(interpolation_values(matches)?);
    for raw in matches.get_many::<String>("component").into_iter().flatten() {
        let (index, tag) = split_assignment(raw)?;
        let tag = tag.to_string();
        props = props.with_component(
            index,
            TransComponent::render(move |inner| {
                ViewNode::from(ViewElement::new(tag.clone()).with_children(inner_nodes(&inner)))
            }),
        );
    }
    let result = Trans::new(&i18n).render(&props);
    let mut warnings: Vec<String> = result.errors.iter().map(ToString::to_string).collect();
    if result.nodes.is_empty() && !i18n.exists(key, props.options.as_ref()) {
        warnings.push(format!("no translation for key {:?}", key));
    }
    Ok(Output {
        text: result.to_markup(),
        warnings,
    })
}

/// Inner markup of a mapped tag as view nodes, so nested tags stay elements
/// and entities are decoded once
fn inner_nodes(inner: &str) -> Vec<ViewNode> {
    match default_parser() {
        Some(parser) => nodes_from_markup(&parser.parse(inner).root_nodes),
        None => vec![ViewNode::Text(decode_html_entities(inner))],
    }
}

/// Builds an initialized instance from `--config`, `--resources`, `--lng`
/// and `--debug`
pub fn load_instance(matches: &ArgMatches) -> Result<I18n> {
    let mut options = match matches.get_one::<String>("config") {
        Some(path) => InitOptions::load(Path::new(path))?,
        None => InitOptions::new(),
    };
    if let Some(lng) = matches.get_one::<String>("lng") {
        options = options.with_lng(lng);
    }
    if matches.get_flag("debug") {
        options = options.with_debug(true);
    }

    let mut i18n = I18n::new();
    i18n.init(options);

    if let Some(path) = matches.get_one::<String>("resources") {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read resources file {}", path))?;
        let resources = resource_from_str(&content)
            .with_context(|| format!("invalid resources in {}", path))?;
        for (lng, namespaces) in resources {
            for (ns, bundle) in namespaces {
                let Some(bundle) = bundle.as_nested() else {
                    bail!("namespace {}/{} in {} is not an object", lng, ns, path);
                };
                i18n.add_resource_bundle(&lng, &ns, bundle.clone(), true, true);
            }
        }
    }

    if i18n.language().is_empty() {
        bail!("no language given; pass --lng or set \"lng\" in the config file");
    }
    Ok(i18n)
}

fn interpolation_values(matches: &ArgMatches) -> Result<TOptions> {
    let mut options = TOptions::new();
    for raw in matches.get_many::<String>("set").into_iter().flatten() {
        let (name, value) = split_assignment(raw)?;
        options = options.with(name, parse_value(value));
    }
    Ok(options)
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn split_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("expected NAME=VALUE, got {:?}", raw),
    }
}

fn required<'m>(matches: &'m ArgMatches, name: &str) -> Result<&'m str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing argument {}", name))
}

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use combo_core::Argument;
use combo_core::ComboError;
use combo_core::ComboResult;
use combo_core::GenerationMode;
use serde::Deserialize;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Render a multi-document yaml template once for every combination of parameter values.",
	long_about = "combo expands a parameterized yaml template into every combination of a set of \
	              named value lists and prints the distinct documents it produces.\n\nParameters \
	              are replaced only where they appear as whole tokens, and identical documents \
	              are emitted once.\n\nQuick start:\n  combo eval manifests.yaml -r \
	              NAMESPACE=foo,bar -r NAME=baz"
)]
pub struct ComboCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory searched for `combo.toml`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Explicit config file. Skips discovery.
	#[arg(long, global = true)]
	pub config: Option<PathBuf>,

	/// Enable debug logging on stderr.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Evaluate a template against every combination of its parameters.
	///
	/// Parameters come from `-r KEY=VALUE1,VALUE2` flags and from the
	/// `[[arguments]]` of `combo.toml`. Flags win when both name the same
	/// key.
	Eval {
		/// The yaml template to expand.
		file: PathBuf,

		/// A parameter and its comma separated values. May be repeated.
		#[arg(long = "replacement", short = 'r', value_name = "KEY=VALUES", value_parser = parse_replacement)]
		replacements: Vec<Argument>,

		/// How combinations are generated. Overrides the config file.
		#[arg(long, value_enum)]
		mode: Option<ModeArg>,

		/// Output format.
		#[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
		format: OutputFormat,

		/// Skip yaml validation of the template and the output.
		#[arg(long, default_value_t = false)]
		no_validate: bool,
	},
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
	/// Materialize every combination up front.
	Eager,
	/// Produce combinations on demand.
	Lazy,
}

impl From<ModeArg> for GenerationMode {
	fn from(mode: ModeArg) -> Self {
		match mode {
			ModeArg::Eager => GenerationMode::Eager,
			ModeArg::Lazy => GenerationMode::Lazy,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// A single yaml stream with `---` separators.
	#[default]
	Yaml,
	/// A json array of document strings.
	Json,
}

/// Parse a `KEY=VALUE1,VALUE2` flag. An empty value list yields a single
/// empty value.
pub fn parse_replacement(raw: &str) -> ComboResult<Argument> {
	let Some((key, values)) = raw.split_once('=') else {
		return Err(ComboError::InvalidReplacement(raw.to_string()));
	};

	if key.is_empty() {
		return Err(ComboError::InvalidReplacement(raw.to_string()));
	}

	Ok(Argument::new(key, values.split(',')))
}

/// Overlay `overrides` onto `base`. A key already in `base` keeps its
/// position and takes the override's values; new keys are appended in the
/// order given.
#[must_use]
pub fn merge_arguments(base: Vec<Argument>, overrides: Vec<Argument>) -> Vec<Argument> {
	let mut merged = base;

	for argument in overrides {
		match merged.iter_mut().find(|existing| existing.key == argument.key) {
			Some(existing) => existing.values = argument.values,
			None => merged.push(argument),
		}
	}

	merged
}

/// Check that `content` parses as a yaml stream. `stage` names the input in
/// the error.
pub fn validate_yaml(content: &str, stage: &str) -> ComboResult<()> {
	for document in serde_yaml_ng::Deserializer::from_str(content) {
		serde_yaml_ng::Value::deserialize(document).map_err(|e| {
			ComboError::InvalidYaml {
				stage: stage.to_string(),
				reason: e.to_string(),
			}
		})?;
	}

	Ok(())
}

/// Render evaluated documents in the requested format.
pub fn format_documents(documents: &[String], format: OutputFormat) -> ComboResult<String> {
	match format {
		OutputFormat::Yaml => Ok(combo_core::join_documents(documents)),
		OutputFormat::Json => {
			serde_json::to_string_pretty(documents).map_err(|e| serialize_error("json", &e))
		}
	}
}

pub(crate) fn serialize_error(format: &str, error: &dyn std::fmt::Display) -> ComboError {
	ComboError::SerializeOutput {
		format: format.to_string(),
		reason: error.to_string(),
	}
}

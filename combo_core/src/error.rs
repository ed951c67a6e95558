use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ComboError {
	#[error(transparent)]
	#[diagnostic(code(combo::io_error))]
	Io(#[from] std::io::Error),

	#[error("no parameter domain configured")]
	#[diagnostic(
		code(combo::enumeration::no_parameters),
		help("provide at least one argument, e.g. `-r NAMESPACE=foo,bar`")
	)]
	NoParameters,

	#[error("parameter `{0}` has no candidate values")]
	#[diagnostic(
		code(combo::domain::empty_values),
		help("every parameter needs at least one value to combine")
	)]
	EmptyParameterValues(String),

	#[error("parameter `{0}` is declared more than once")]
	#[diagnostic(
		code(combo::domain::duplicate_parameter),
		help("merge the values into a single declaration of `{0}`")
	)]
	DuplicateParameter(String),

	#[error("invalid parameter name: `{0}`")]
	#[diagnostic(
		code(combo::domain::invalid_name),
		help("parameter names must be non-empty and use only ASCII letters, digits and `_`")
	)]
	InvalidParameterName(String),

	#[error("evaluation canceled after {processed} combination(s)")]
	#[diagnostic(code(combo::evaluation::canceled))]
	Canceled {
		/// Number of combinations fully applied before cancellation was
		/// observed.
		processed: usize,
		/// Number of distinct documents rendered up to that point.
		rendered: usize,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(combo::config::parse),
		help("check that combo.toml is valid TOML with `mode` and `[[arguments]]` entries")
	)]
	ConfigParse(String),

	#[error("invalid replacement `{0}`")]
	#[diagnostic(
		code(combo::input::invalid_replacement),
		help("replacements take the form `KEY=VALUE1,VALUE2`")
	)]
	InvalidReplacement(String),

	#[error("template file is empty: `{0}`")]
	#[diagnostic(code(combo::input::empty_template))]
	EmptyTemplate(String),

	#[error("{stage} is not valid yaml: {reason}")]
	#[diagnostic(code(combo::input::invalid_yaml))]
	InvalidYaml { stage: String, reason: String },

	#[error("failed to write output as {format}: {reason}")]
	#[diagnostic(code(combo::output::serialize))]
	SerializeOutput { format: String, reason: String },
}

pub type ComboResult<T> = Result<T, ComboError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;

use std::collections::BTreeMap;
use std::collections::HashSet;

use derive_more::Deref;
use serde::Deserialize;
use serde::Serialize;

use crate::ComboError;
use crate::ComboResult;

/// A parameter name together with the values it can take.
///
/// This is the shape used by configuration files and by any layer that
/// stores parameter sets as a list of key + values pairs:
///
/// ```toml
/// [[arguments]]
/// key = "NAMESPACE"
/// values = ["foo", "bar"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
	/// The token replaced in the template.
	pub key: String,
	/// The candidate replacements for `key`.
	pub values: Vec<String>,
}

impl Argument {
	pub fn new<K, V, S>(key: K, values: V) -> Self
	where
		K: Into<String>,
		V: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			key: key.into(),
			values: values.into_iter().map(Into::into).collect(),
		}
	}
}

/// One named parameter and its ordered, non-empty list of candidate values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
	name: String,
	values: Vec<String>,
}

impl Parameter {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn values(&self) -> &[String] {
		&self.values
	}
}

/// The full set of parameters for one evaluation.
///
/// Parameters keep their declaration order, which is also the order the
/// combination stream walks them in (the last parameter varies fastest).
/// The domain is immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterDomain {
	parameters: Vec<Parameter>,
}

impl ParameterDomain {
	/// Build a domain from `(name, values)` pairs.
	///
	/// Fails when a name is not a valid identifier, is declared twice, or has
	/// no values. An empty iterator produces an empty domain.
	pub fn new<I, K, V, S>(parameters: I) -> ComboResult<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut seen = HashSet::new();
		let mut validated = Vec::new();

		for (name, values) in parameters {
			let name = name.into();
			let values: Vec<String> = values.into_iter().map(Into::into).collect();

			if !is_valid_parameter_name(&name) {
				return Err(ComboError::InvalidParameterName(name));
			}

			if values.is_empty() {
				return Err(ComboError::EmptyParameterValues(name));
			}

			if !seen.insert(name.clone()) {
				return Err(ComboError::DuplicateParameter(name));
			}

			validated.push(Parameter { name, values });
		}

		Ok(Self {
			parameters: validated,
		})
	}

	/// Build a domain from a list of key + values arguments.
	pub fn from_arguments(arguments: impl IntoIterator<Item = Argument>) -> ComboResult<Self> {
		Self::new(
			arguments
				.into_iter()
				.map(|argument| (argument.key, argument.values)),
		)
	}

	pub fn parameters(&self) -> &[Parameter] {
		&self.parameters
	}

	pub fn len(&self) -> usize {
		self.parameters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parameters.is_empty()
	}

	/// The product of every parameter's value count, i.e. the number of
	/// assignments the domain produces. Returns `None` on overflow and
	/// `Some(0)` for an empty domain.
	pub fn total_combinations(&self) -> Option<usize> {
		if self.parameters.is_empty() {
			return Some(0);
		}

		self.parameters
			.iter()
			.try_fold(1usize, |total, parameter| {
				total.checked_mul(parameter.values.len())
			})
	}

	/// The size of each parameter's value list, in traversal order.
	pub(crate) fn radices(&self) -> Vec<usize> {
		self.parameters.iter().map(|p| p.values.len()).collect()
	}

	/// Build the assignment selected by one position per parameter.
	pub(crate) fn assignment_at(&self, positions: &[usize]) -> Assignment {
		Assignment(
			self.parameters
				.iter()
				.zip(positions)
				.map(|(parameter, &position)| {
					(parameter.name.clone(), parameter.values[position].clone())
				})
				.collect(),
		)
	}
}

/// One total mapping from every parameter name to one of its values.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct Assignment(BTreeMap<String, String>);

impl<K, V> FromIterator<(K, V)> for Assignment
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

impl From<Assignment> for BTreeMap<String, String> {
	fn from(value: Assignment) -> Self {
		value.0
	}
}

/// Parameter names must match a whole identifier run in the template, so
/// they are restricted to the same character class the template lexer
/// treats as identifier characters.
pub fn is_valid_parameter_name(name: &str) -> bool {
	!name.is_empty()
		&& name
			.bytes()
			.all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
}

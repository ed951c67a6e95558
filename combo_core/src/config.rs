use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::Argument;
use crate::ComboError;
use crate::ComboResult;
use crate::GenerationMode;
use crate::ParameterDomain;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["combo.toml", ".combo.toml", ".config/combo.toml"];

/// Configuration loaded from a `combo.toml` file.
///
/// ```toml
/// mode = "lazy"
///
/// [[arguments]]
/// key = "NAMESPACE"
/// values = ["foo", "bar"]
///
/// [[arguments]]
/// key = "NAME"
/// values = ["baz"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ComboConfig {
	/// How combinations are generated. Defaults to `eager`.
	#[serde(default)]
	pub mode: GenerationMode,
	/// Parameters and their candidate values, in traversal order.
	#[serde(default)]
	pub arguments: Vec<Argument>,
}

impl ComboConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ComboResult<Option<ComboConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_file(&config_path).map(Some)
	}

	/// Load the config from an explicit path.
	pub fn load_file(path: &Path) -> ComboResult<ComboConfig> {
		let content = std::fs::read_to_string(path)?;
		let config: ComboConfig =
			toml::from_str(&content).map_err(|e| ComboError::ConfigParse(e.to_string()))?;

		tracing::debug!(
			path = %path.display(),
			arguments = config.arguments.len(),
			mode = ?config.mode,
			"loaded config"
		);

		Ok(config)
	}

	/// Build the parameter domain described by `arguments`.
	pub fn domain(&self) -> ComboResult<ParameterDomain> {
		ParameterDomain::from_arguments(self.arguments.iter().cloned())
	}
}

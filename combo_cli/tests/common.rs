use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const NAMES_TEMPLATE: &str = "FIRSTNAME: LASTNAME\n";

pub const MANIFESTS_TEMPLATE: &str = "---
kind: Namespace
name: NAMESPACE
---
kind: ServiceAccount
name: NAME
namespace: NAMESPACE
";

/// A `combo` command running inside `root` with color disabled.
pub fn combo_cmd(root: &Path) -> Command {
	let mut cmd = Command::new(get_cargo_bin("combo"));
	cmd.env("NO_COLOR", "1")
		.env_remove("COMBO_LOG")
		.current_dir(root);
	cmd
}

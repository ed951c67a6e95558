use crate::Assignment;
use crate::ParameterDomain;

pub(crate) const MANIFESTS_TEMPLATE: &str = "---
kind: Namespace
name: NAMESPACE
---
kind: ServiceAccount
name: NAME
namespace: NAMESPACE
";

pub(crate) fn domain<const N: usize>(parameters: [(&str, &[&str]); N]) -> ParameterDomain {
	ParameterDomain::new(
		parameters
			.into_iter()
			.map(|(name, values)| (name, values.iter().copied())),
	)
	.unwrap_or_else(|e| panic!("invalid fixture domain: {e}"))
}

/// A domain named `P0..Pn` where parameter `i` has `radices[i]` values.
pub(crate) fn domain_with_radices(radices: &[usize]) -> ParameterDomain {
	ParameterDomain::new(radices.iter().enumerate().map(|(index, &radix)| {
		(
			format!("P{index}"),
			(0..radix).map(move |value| format!("p{index}v{value}")),
		)
	}))
	.unwrap_or_else(|e| panic!("invalid fixture domain: {e}"))
}

pub(crate) fn names_domain() -> ParameterDomain {
	domain([
		("FIRSTNAME", &["John", "Luke"]),
		("LASTNAME", &["Snow", "Skywalker"]),
	])
}

pub(crate) fn manifests_domain() -> ParameterDomain {
	domain([("NAMESPACE", &["foo", "bar"]), ("NAME", &["baz"])])
}

/// Several single-valued parameters, some of them adjacent.
pub(crate) fn long_domain() -> ParameterDomain {
	domain([
		("TEST1", &["foo", "bar"]),
		("TEST2", &["zip"]),
		("TEST3", &["bip", "bap"]),
		("TEST4", &["pip"]),
		("TEST5", &["mip"]),
		("TEST6", &["zip", "zap", "zop"]),
	])
}

pub(crate) fn assignment<const N: usize>(pairs: [(&str, &str); N]) -> Assignment {
	pairs.into_iter().collect()
}

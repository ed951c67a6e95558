use std::sync::OnceLock;

use serde::Deserialize;
use serde::Serialize;

use crate::Assignment;
use crate::ComboError;
use crate::ComboResult;
use crate::ParameterDomain;
use crate::odometer::Odometer;

/// How a [`CombinationStream`] produces its assignments.
///
/// Both modes walk the same counter, so they yield the same assignments in
/// the same order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
	/// Materialize every assignment on first access and hand out clones of
	/// the cached list.
	#[default]
	Eager,
	/// Compute each assignment on demand from the current counter reading.
	Lazy,
}

/// Anything the evaluation driver can pull assignments from.
pub trait AssignmentSource {
	/// Returns the next assignment, `Ok(None)` at the end of the stream, or
	/// an error when no assignment can be produced.
	fn next_assignment(&mut self) -> ComboResult<Option<Assignment>>;
}

/// A pull-based cursor over the cartesian product of a [`ParameterDomain`].
///
/// A stream is driven to exhaustion once and is not reusable. An empty
/// domain reports [`ComboError::NoParameters`] on the first pull and ends
/// the stream without producing anything.
#[derive(Debug)]
pub struct CombinationStream {
	domain: ParameterDomain,
	mode: GenerationMode,
	/// Counter for lazy mode.
	odometer: Odometer,
	/// Materialized assignments for eager mode, computed at most once.
	solved: OnceLock<Vec<Assignment>>,
	/// Next index into `solved`.
	cursor: usize,
	exhausted: bool,
}

impl CombinationStream {
	pub fn new(domain: ParameterDomain, mode: GenerationMode) -> Self {
		tracing::debug!(
			parameters = domain.len(),
			combinations = ?domain.total_combinations(),
			?mode,
			"created combination stream"
		);

		Self {
			odometer: Odometer::new(domain.radices()),
			domain,
			mode,
			solved: OnceLock::new(),
			cursor: 0,
			exhausted: false,
		}
	}

	pub fn domain(&self) -> &ParameterDomain {
		&self.domain
	}

	pub fn mode(&self) -> GenerationMode {
		self.mode
	}

	/// Returns true once the stream has produced its last assignment (or
	/// reported that it has none).
	pub fn is_exhausted(&self) -> bool {
		self.exhausted
	}

	/// Every assignment of the domain.
	///
	/// The list is computed on the first call and cached for the lifetime of
	/// the stream. Concurrent first callers block on a single computation and
	/// all observe the finished list. This does not move the cursor used by
	/// [`CombinationStream::next_assignment`].
	pub fn combinations(&self) -> ComboResult<&[Assignment]> {
		if self.domain.is_empty() {
			return Err(ComboError::NoParameters);
		}

		Ok(self.solved.get_or_init(|| solve(&self.domain)))
	}

	pub fn next_assignment(&mut self) -> ComboResult<Option<Assignment>> {
		if self.exhausted {
			return Ok(None);
		}

		if self.domain.is_empty() {
			self.exhausted = true;
			return Err(ComboError::NoParameters);
		}

		let next = match self.mode {
			GenerationMode::Eager => {
				let next = self.combinations()?.get(self.cursor).cloned();
				self.cursor += 1;
				next
			}
			GenerationMode::Lazy => {
				let next = self
					.odometer
					.positions()
					.map(|positions| self.domain.assignment_at(positions));
				self.odometer.advance();
				next
			}
		};

		if next.is_none() {
			self.exhausted = true;
		}

		Ok(next)
	}
}

impl AssignmentSource for CombinationStream {
	fn next_assignment(&mut self) -> ComboResult<Option<Assignment>> {
		CombinationStream::next_assignment(self)
	}
}

impl Iterator for CombinationStream {
	type Item = ComboResult<Assignment>;

	fn next(&mut self) -> Option<Self::Item> {
		CombinationStream::next_assignment(self).transpose()
	}
}

/// Drain a fresh counter over `domain` into a list.
fn solve(domain: &ParameterDomain) -> Vec<Assignment> {
	let mut odometer = Odometer::new(domain.radices());
	let mut combinations = Vec::new();

	while let Some(positions) = odometer.positions() {
		combinations.push(domain.assignment_at(positions));
		odometer.advance();
	}

	tracing::debug!(
		combinations = combinations.len(),
		"materialized combinations"
	);

	combinations
}

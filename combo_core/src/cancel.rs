use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// A cooperative cancellation flag shared between an evaluation and whoever
/// wants to stop it.
///
/// Clones share the same flag. The evaluation driver checks it between
/// assignments, never in the middle of one.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
	cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Release);
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Acquire)
	}
}

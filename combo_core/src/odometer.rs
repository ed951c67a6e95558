/// A mixed-radix counter with one digit per parameter.
///
/// Digit `i` counts from `0` to `radices[i] - 1`. Advancing increments the
/// last digit and carries leftward on overflow, so the last parameter varies
/// fastest. A radix-1 digit overflows on every increment and simply passes
/// the carry on. The counter is exhausted once a carry runs off the left
/// end, or immediately when there are no digits or a digit has radix zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Odometer {
	radices: Vec<usize>,
	positions: Vec<usize>,
	exhausted: bool,
}

impl Odometer {
	pub(crate) fn new(radices: Vec<usize>) -> Self {
		let exhausted = radices.is_empty() || radices.contains(&0);
		let positions = vec![0; radices.len()];

		Self {
			radices,
			positions,
			exhausted,
		}
	}

	/// The current reading, or `None` once every reading has been produced.
	pub(crate) fn positions(&self) -> Option<&[usize]> {
		(!self.exhausted).then_some(self.positions.as_slice())
	}

	/// Move to the next reading.
	pub(crate) fn advance(&mut self) {
		if self.exhausted {
			return;
		}

		for (position, &radix) in self.positions.iter_mut().zip(&self.radices).rev() {
			*position += 1;
			if *position < radix {
				return;
			}
			*position = 0;
		}

		self.exhausted = true;
	}
}

//! Staged animation sequencer: an ordered list of stages, one active at a
//! time, advanced manually (`advance_one`) or as a timed run (`run_all`).
//! Settle times are counted down by `tick(dt)` from the render loop, so the
//! machine has no timer dependencies and its ordering and reentrancy rules
//! are directly testable.

/// Stage transitions surfaced by [`Sequencer::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqEvent {
	/// A run auto-advanced into this stage; the owner applies its mutation.
	Entered(usize),
	/// The terminal stage's settle time elapsed.
	Finished,
}

/// Fixed-stage state machine: `Idle(0) -> 1 -> ... -> N -> Idle` (via reset).
#[derive(Clone, Debug)]
pub struct Sequencer {
	settles: Vec<f64>,
	stage: usize,
	advancing: bool,
	running_all: bool,
	settle_left: f64,
}

impl Sequencer {
	/// One settle time (seconds) per stage; `settles.len()` is the terminal
	/// stage index.
	pub fn new(settles: Vec<f64>) -> Self {
		Self {
			settles,
			stage: 0,
			advancing: false,
			running_all: false,
			settle_left: 0.0,
		}
	}

	pub fn stage(&self) -> usize {
		self.stage
	}

	pub fn total(&self) -> usize {
		self.settles.len()
	}

	/// True while a stage's settle time is still counting down. Further
	/// advance calls are dropped until it clears.
	pub fn is_advancing(&self) -> bool {
		self.advancing
	}

	pub fn is_terminal(&self) -> bool {
		self.stage == self.settles.len()
	}

	/// Cancels any in-flight advance or run and returns to stage 0. Always
	/// succeeds.
	pub fn reset(&mut self) {
		self.stage = 0;
		self.advancing = false;
		self.running_all = false;
		self.settle_left = 0.0;
	}

	/// Enter the next stage. Returns the newly entered stage index for the
	/// caller to apply, or `None` when an advance is already in flight or the
	/// terminal stage has been reached.
	pub fn advance_one(&mut self) -> Option<usize> {
		if self.advancing || self.is_terminal() {
			return None;
		}
		self.stage += 1;
		self.advancing = true;
		self.settle_left = self.settles[self.stage - 1];
		Some(self.stage)
	}

	/// Start an unattended run to the terminal stage. Returns the first stage
	/// entered, or `None` when already advancing or already terminal.
	pub fn run_all(&mut self) -> Option<usize> {
		if self.advancing || self.is_terminal() {
			return None;
		}
		self.running_all = true;
		self.advance_one()
	}

	/// Count down the active settle time. During a run, emits
	/// [`SeqEvent::Entered`] for each stage entered; emits
	/// [`SeqEvent::Finished`] when the terminal stage settles.
	pub fn tick(&mut self, dt: f64) -> Option<SeqEvent> {
		if !self.advancing {
			return None;
		}
		self.settle_left -= dt;
		if self.settle_left > 0.0 {
			return None;
		}
		self.advancing = false;
		if self.is_terminal() {
			self.running_all = false;
			return Some(SeqEvent::Finished);
		}
		if self.running_all {
			return self.advance_one().map(SeqEvent::Entered);
		}
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn four_stage() -> Sequencer {
		Sequencer::new(vec![1.0, 1.0, 1.0, 1.0])
	}

	#[test]
	fn advance_while_advancing_is_dropped() {
		let mut seq = four_stage();
		assert_eq!(seq.advance_one(), Some(1));
		assert!(seq.is_advancing());
		assert_eq!(seq.advance_one(), None);
		assert_eq!(seq.stage(), 1);
		assert_eq!(seq.run_all(), None);
		assert_eq!(seq.stage(), 1);
	}

	#[test]
	fn manual_stepping_saturates_at_terminal() {
		let mut seq = four_stage();
		for expected in 1..=4 {
			assert_eq!(seq.advance_one(), Some(expected));
			while seq.is_advancing() {
				seq.tick(0.25);
			}
		}
		assert!(seq.is_terminal());
		assert_eq!(seq.advance_one(), None);
		assert_eq!(seq.stage(), 4);
	}

	#[test]
	fn run_all_visits_every_stage_in_order() {
		let mut seq = four_stage();
		let mut visited = vec![seq.run_all().unwrap()];
		let mut finished = false;
		for _ in 0..200 {
			match seq.tick(0.1) {
				Some(SeqEvent::Entered(s)) => visited.push(s),
				Some(SeqEvent::Finished) => {
					finished = true;
					break;
				}
				None => {}
			}
		}
		assert!(finished);
		assert_eq!(visited, vec![1, 2, 3, 4]);
		assert_eq!(seq.stage(), 4);
		assert!(!seq.is_advancing());
	}

	#[test]
	fn reset_cancels_in_flight_run() {
		let mut seq = four_stage();
		seq.run_all();
		seq.tick(1.5); // into stage 2
		assert!(seq.stage() > 0);
		seq.reset();
		assert_eq!(seq.stage(), 0);
		assert!(!seq.is_advancing());
		// A cancelled run emits nothing further.
		for _ in 0..20 {
			assert_eq!(seq.tick(1.0), None);
		}
	}

	#[test]
	fn finished_fires_for_manually_entered_terminal_stage() {
		let mut seq = Sequencer::new(vec![0.5]);
		seq.advance_one();
		assert_eq!(seq.tick(0.6), Some(SeqEvent::Finished));
		assert_eq!(seq.tick(0.6), None);
	}
}

//! Seedable pseudo-random source for cosmetic animation choices (marker
//! counts, speeds, dash patterns). Tests pass a fixed seed; production seeds
//! from the clock.

#[derive(Clone, Debug)]
pub struct VizRng(u64);

impl VizRng {
	pub fn seeded(seed: u64) -> Self {
		// xorshift needs a non-zero state
		Self(seed | 1)
	}

	pub fn from_clock() -> Self {
		#[cfg(target_arch = "wasm32")]
		let millis = js_sys::Date::now() as u64;
		#[cfg(not(target_arch = "wasm32"))]
		let millis = std::time::SystemTime::now()
			.duration_since(std::time::UNIX_EPOCH)
			.map(|d| d.as_millis() as u64)
			.unwrap_or(0x9e37_79b9);
		Self::seeded(millis)
	}

	fn next_u64(&mut self) -> u64 {
		// xorshift64*
		let mut x = self.0;
		x ^= x >> 12;
		x ^= x << 25;
		x ^= x >> 27;
		self.0 = x;
		x.wrapping_mul(0x2545_f491_4f6c_dd1d)
	}

	/// Uniform in [0, 1).
	pub fn next_f64(&mut self) -> f64 {
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}

	pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}

	/// Uniform integer in [lo, hi], inclusive on both ends.
	pub fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
		debug_assert!(lo <= hi);
		lo + (self.next_f64() * (hi - lo + 1) as f64) as usize
	}

	pub fn chance(&mut self, p: f64) -> bool {
		self.next_f64() < p
	}

	pub fn shuffle<T>(&mut self, items: &mut [T]) {
		for i in (1..items.len()).rev() {
			let j = self.range_usize(0, i);
			items.swap(i, j);
		}
	}
}

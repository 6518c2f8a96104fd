/// A point in world or screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn lerp(a: Point, b: Point, t: f64) -> Point {
		Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
	}

	pub fn dist(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Geographic coordinate, degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
	pub lat: f64,
	pub lng: f64,
}

impl LatLng {
	pub const fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// Equirectangular projection around `center`: one degree maps to `scale`
	/// world units, north is up (screen y grows downward).
	pub fn project(self, center: LatLng, scale: f64) -> Point {
		Point::new(
			(self.lng - center.lng) * scale,
			-(self.lat - center.lat) * scale,
		)
	}
}

/// Axis-aligned bounding box over a point set.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
		let mut bounds: Option<Bounds> = None;
		for p in points {
			let b = bounds.get_or_insert(Bounds {
				min_x: p.x,
				min_y: p.y,
				max_x: p.x,
				max_y: p.y,
			});
			b.min_x = b.min_x.min(p.x);
			b.min_y = b.min_y.min(p.y);
			b.max_x = b.max_x.max(p.x);
			b.max_y = b.max_y.max(p.y);
		}
		bounds
	}

	pub fn padded(self, pad: f64) -> Self {
		Bounds {
			min_x: self.min_x - pad,
			min_y: self.min_y - pad,
			max_x: self.max_x + pad,
			max_y: self.max_y + pad,
		}
	}

	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	pub fn center(&self) -> Point {
		Point::new(
			(self.min_x + self.max_x) / 2.0,
			(self.min_y + self.max_y) / 2.0,
		)
	}
}

/// Pan/zoom transform from world space into screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	pub fn centered(width: f64, height: f64) -> Self {
		Self {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		}
	}

	pub fn to_screen(&self, p: Point) -> Point {
		Point::new(self.x + p.x * self.k, self.y + p.y * self.k)
	}

	pub fn to_world(&self, sx: f64, sy: f64) -> Point {
		Point::new((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zoom by `factor` keeping the screen point (sx, sy) fixed.
	pub fn zoom_about(&mut self, sx: f64, sy: f64, factor: f64, min_k: f64, max_k: f64) {
		let new_k = (self.k * factor).clamp(min_k, max_k);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}
}

/// Transform that fits `bounds` into 80% of the viewport, centered, with the
/// scale capped at `max_k`.
pub fn fit_transform(bounds: Bounds, width: f64, height: f64, max_k: f64) -> ViewTransform {
	let (bw, bh) = (bounds.width().max(1.0), bounds.height().max(1.0));
	let k = ((width * 0.8) / bw).min((height * 0.8) / bh).min(max_k);
	let c = bounds.center();
	ViewTransform {
		x: width / 2.0 - c.x * k,
		y: height / 2.0 - c.y * k,
		k,
	}
}

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Fixed-duration animated transition between two view transforms.
#[derive(Clone, Copy, Debug)]
pub struct FitAnim {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
	duration: f64,
}

impl FitAnim {
	pub fn new(from: ViewTransform, to: ViewTransform, duration: f64) -> Self {
		Self {
			from,
			to,
			elapsed: 0.0,
			duration: duration.max(0.001),
		}
	}

	/// Advance and sample; returns `None` once the animation has finished
	/// (the caller should land on `target()`).
	pub fn tick(&mut self, dt: f64) -> Option<ViewTransform> {
		self.elapsed += dt;
		if self.elapsed >= self.duration {
			return None;
		}
		let t = ease_out_cubic(self.elapsed / self.duration);
		Some(ViewTransform {
			x: self.from.x + (self.to.x - self.from.x) * t,
			y: self.from.y + (self.to.y - self.from.y) * t,
			k: self.from.k + (self.to.k - self.from.k) * t,
		})
	}

	pub fn target(&self) -> ViewTransform {
		self.to
	}
}

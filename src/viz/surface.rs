//! Minimal drawable-surface capability so scene rendering is expressible
//! without a live canvas. The web component hands renderers a
//! [`CanvasSurface`]; tests use the recording double.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::geo::ViewTransform;

pub trait Surface {
	fn clear(&mut self, width: f64, height: f64, color: &str);
	/// Apply a pan/zoom transform to subsequent drawing.
	fn push_view(&mut self, view: &ViewTransform);
	fn pop_view(&mut self);
	fn circle(&mut self, x: f64, y: f64, r: f64, fill: &str);
	fn ring(&mut self, x: f64, y: f64, r: f64, stroke: &str, width: f64);
	#[allow(clippy::too_many_arguments)]
	fn line(
		&mut self,
		x1: f64,
		y1: f64,
		x2: f64,
		y2: f64,
		stroke: &str,
		width: f64,
		dash: Option<(f64, f64)>,
		dash_offset: f64,
	);
	fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: Option<(&str, f64)>);
	fn text(&mut self, s: &str, x: f64, y: f64, size: f64, color: &str);
}

/// Canvas 2D backend.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface<'_> {
	fn clear(&mut self, width: f64, height: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn push_view(&mut self, view: &ViewTransform) {
		self.ctx.save();
		let _ = self.ctx.translate(view.x, view.y);
		let _ = self.ctx.scale(view.k, view.k);
	}

	fn pop_view(&mut self) {
		self.ctx.restore();
	}

	fn circle(&mut self, x: f64, y: f64, r: f64, fill: &str) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, r, 0.0, 2.0 * std::f64::consts::PI);
		self.ctx.set_fill_style_str(fill);
		self.ctx.fill();
	}

	fn ring(&mut self, x: f64, y: f64, r: f64, stroke: &str, width: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, r, 0.0, 2.0 * std::f64::consts::PI);
		self.ctx.set_stroke_style_str(stroke);
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}

	fn line(
		&mut self,
		x1: f64,
		y1: f64,
		x2: f64,
		y2: f64,
		stroke: &str,
		width: f64,
		dash: Option<(f64, f64)>,
		dash_offset: f64,
	) {
		self.ctx.set_stroke_style_str(stroke);
		self.ctx.set_line_width(width);
		if let Some((on, off)) = dash {
			let _ = self.ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(on),
				&JsValue::from_f64(off),
			));
			self.ctx.set_line_dash_offset(dash_offset);
		}
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
		if dash.is_some() {
			let _ = self.ctx.set_line_dash(&js_sys::Array::new());
			self.ctx.set_line_dash_offset(0.0);
		}
	}

	fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: Option<(&str, f64)>) {
		self.ctx.set_fill_style_str(fill);
		self.ctx.fill_rect(x, y, w, h);
		if let Some((color, width)) = stroke {
			self.ctx.set_stroke_style_str(color);
			self.ctx.set_line_width(width);
			self.ctx.stroke_rect(x, y, w, h);
		}
	}

	fn text(&mut self, s: &str, x: f64, y: f64, size: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.set_font(&format!("{}px sans-serif", size));
		let _ = self.ctx.fill_text(s, x, y);
	}
}

#[cfg(test)]
pub mod testing {
	//! Recording surface for render assertions; coordinates are stored with
	//! the active view transform already applied.

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Clear {
			color: String,
		},
		Circle {
			x: f64,
			y: f64,
			r: f64,
			fill: String,
		},
		Ring {
			x: f64,
			y: f64,
			r: f64,
		},
		Line {
			x1: f64,
			y1: f64,
			x2: f64,
			y2: f64,
			dashed: bool,
		},
		Rect {
			x: f64,
			y: f64,
			w: f64,
			h: f64,
		},
		Text {
			s: String,
			x: f64,
			y: f64,
		},
	}

	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: Vec<Op>,
		views: Vec<ViewTransform>,
	}

	impl RecordingSurface {
		pub fn new() -> Self {
			Self::default()
		}

		fn map(&self, x: f64, y: f64) -> (f64, f64) {
			match self.views.last() {
				Some(v) => (v.x + x * v.k, v.y + y * v.k),
				None => (x, y),
			}
		}

		pub fn circles(&self) -> impl Iterator<Item = &Op> {
			self.ops
				.iter()
				.filter(|op| matches!(op, Op::Circle { .. }))
		}

		pub fn visible_circle_count(&self) -> usize {
			self.circles()
				.filter(|op| matches!(op, Op::Circle { r, .. } if *r > 0.0))
				.count()
		}

		pub fn line_count(&self) -> usize {
			self.ops
				.iter()
				.filter(|op| matches!(op, Op::Line { .. }))
				.count()
		}

		pub fn texts(&self) -> Vec<&str> {
			self.ops
				.iter()
				.filter_map(|op| match op {
					Op::Text { s, .. } => Some(s.as_str()),
					_ => None,
				})
				.collect()
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, _width: f64, _height: f64, color: &str) {
			self.ops.push(Op::Clear {
				color: color.into(),
			});
		}

		fn push_view(&mut self, view: &ViewTransform) {
			self.views.push(*view);
		}

		fn pop_view(&mut self) {
			self.views.pop();
		}

		fn circle(&mut self, x: f64, y: f64, r: f64, fill: &str) {
			let (x, y) = self.map(x, y);
			self.ops.push(Op::Circle {
				x,
				y,
				r,
				fill: fill.into(),
			});
		}

		fn ring(&mut self, x: f64, y: f64, r: f64, _stroke: &str, _width: f64) {
			let (x, y) = self.map(x, y);
			self.ops.push(Op::Ring { x, y, r });
		}

		fn line(
			&mut self,
			x1: f64,
			y1: f64,
			x2: f64,
			y2: f64,
			_stroke: &str,
			_width: f64,
			dash: Option<(f64, f64)>,
			_dash_offset: f64,
		) {
			let (x1, y1) = self.map(x1, y1);
			let (x2, y2) = self.map(x2, y2);
			self.ops.push(Op::Line {
				x1,
				y1,
				x2,
				y2,
				dashed: dash.is_some(),
			});
		}

		fn rect(
			&mut self,
			x: f64,
			y: f64,
			w: f64,
			h: f64,
			_fill: &str,
			_stroke: Option<(&str, f64)>,
		) {
			let (x, y) = self.map(x, y);
			self.ops.push(Op::Rect { x, y, w, h });
		}

		fn text(&mut self, s: &str, x: f64, y: f64, _size: f64, _color: &str) {
			let (x, y) = self.map(x, y);
			self.ops.push(Op::Text { s: s.into(), x, y });
		}
	}
}

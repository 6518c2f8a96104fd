//! Shared canvas plumbing for the widget components.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, Error)]
pub enum CanvasError {
	#[error("2d canvas context unavailable")]
	ContextUnavailable,
	#[error("canvas context handle has the wrong type")]
	WrongContextType,
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.ok_or(CanvasError::ContextUnavailable)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| CanvasError::WrongContextType)
}

/// Parent element's client size, with a fallback for detached canvases.
pub fn parent_size(canvas: &HtmlCanvasElement, default_w: f64, default_h: f64) -> (f64, f64) {
	match canvas.parent_element() {
		Some(p) => (p.client_width() as f64, p.client_height() as f64),
		None => (default_w, default_h),
	}
}

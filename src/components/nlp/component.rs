use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::render;
use super::state::NlpState;
use crate::components::canvas::{context_2d, parent_size};
use crate::viz::{CanvasSurface, VizRng};

/// Staged conversation-clustering animation with auto-run and manual
/// stepping controls.
#[component]
pub fn NlpViz(#[prop(into)] open: Signal<bool>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NlpState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let status = RwSignal::new(String::new());
	let failed = RwSignal::new(false);

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = parent_size(&canvas, 700.0, 400.0);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("nlp: {err}, not initializing");
				failed.set(true);
				return;
			}
		};
		let initial = NlpState::new(VizRng::from_clock());
		status.set(initial.indicator_text().to_string());
		*state_init.borrow_mut() = Some(initial);

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				status.set(s.indicator_text().to_string());
				let mut surface = CanvasSurface::new(&ctx);
				render::render(s, canvas.width() as f64, canvas.height() as f64, &mut surface);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_open = state.clone();
	Effect::new(move |_| {
		let is_open = open.get();
		if let Some(ref mut s) = *state_open.borrow_mut() {
			s.active = is_open;
		}
	});

	let state_start = state.clone();
	let on_start = move |_| {
		if let Some(ref mut s) = *state_start.borrow_mut() {
			s.start_analysis();
			status.set(s.indicator_text().to_string());
		}
	};
	let state_next = state.clone();
	let on_next = move |_| {
		if let Some(ref mut s) = *state_next.borrow_mut() {
			s.next_step();
			status.set(s.indicator_text().to_string());
		}
	};
	let state_reset = state.clone();
	let on_reset = move |_| {
		if let Some(ref mut s) = *state_reset.borrow_mut() {
			s.reset();
			status.set(s.indicator_text().to_string());
		}
	};

	view! {
		<div class="nlp-viz">
			<div class="viz-controls">
				<button on:click=on_start>"Start Analysis"</button>
				<button on:click=on_next>"Next Step"</button>
				<button on:click=on_reset>"Reset"</button>
			</div>
			<div class="viz-status">{move || status.get()}</div>
			<Show when=move || failed.get()>
				<p class="viz-error">"Visualization not initialized: canvas unavailable."</p>
			</Show>
			<canvas node_ref=canvas_ref class="nlp-canvas" style="display: block;" />
		</div>
	}
}

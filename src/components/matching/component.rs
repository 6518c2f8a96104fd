use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::render;
use super::state::MatchingState;
use crate::components::canvas::{context_2d, parent_size};
use crate::viz::{CanvasSurface, VizRng};

/// Client-salesperson assignment run with live scoring and random events.
#[component]
pub fn MatchingViz(#[prop(into)] open: Signal<bool>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<MatchingState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
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

		let (w, h) = parent_size(&canvas, 760.0, 420.0);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("matching: {err}, not initializing");
				failed.set(true);
				return;
			}
		};
		*state_init.borrow_mut() = Some(MatchingState::new(VizRng::from_clock()));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
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
			s.start_optimization();
		}
	};
	let state_reset = state.clone();
	let on_reset = move |_| {
		if let Some(ref mut s) = *state_reset.borrow_mut() {
			s.reset();
		}
	};
	let state_event = state.clone();
	let on_event = move |_| {
		if let Some(ref mut s) = *state_event.borrow_mut() {
			s.trigger_event();
		}
	};

	view! {
		<div class="matching-viz">
			<div class="viz-controls">
				<button on:click=on_start>"Start Optimization"</button>
				<button on:click=on_reset>"Reset"</button>
				<button on:click=on_event>"Trigger Event"</button>
			</div>
			<Show when=move || failed.get()>
				<p class="viz-error">"Visualization not initialized: canvas unavailable."</p>
			</Show>
			<canvas node_ref=canvas_ref class="matching-canvas" style="display: block;" />
		</div>
	}
}

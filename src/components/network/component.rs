use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::NetworkState;
use super::types::ViewMode;
use crate::components::canvas::{context_2d, parent_size};
use crate::viz::{CanvasSurface, VizRng};

/// Chilean-cities network widget with interchangeable map and force-graph
/// presentation modes.
#[component]
pub fn NetworkViz(#[prop(into)] open: Signal<bool>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mode = RwSignal::new(ViewMode::Map);
	let hover = RwSignal::new(None::<(&'static str, &'static str)>);
	let failed = RwSignal::new(false);

	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());
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

		let (w, h) = parent_size(&canvas, 800.0, 600.0);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Fail fast when the rendering surface is unavailable; no retry.
		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("network: {err}, not initializing");
				failed.set(true);
				return;
			}
		};
		*state_init.borrow_mut() = Some(NetworkState::new(w, h, VizRng::from_clock()));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize, 800.0, 600.0);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				let mut surface = CanvasSurface::new(&ctx);
				render::render(s, &mut surface);
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

	// Opening resumes the paused animator in place; closing pauses all
	// background work without tearing the scene down.
	let state_open = state.clone();
	Effect::new(move |_| {
		let is_open = open.get();
		if let Some(ref mut s) = *state_open.borrow_mut() {
			s.active = is_open;
		}
	});

	let local_point = move |client_x: f64, client_y: f64| {
		let canvas: Option<HtmlCanvasElement> = canvas_ref.get_untracked().map(Into::into);
		canvas.map(|c| {
			let rect = c.get_bounding_client_rect();
			(client_x - rect.left(), client_y - rect.top())
		})
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some((x, y)) = local_point(ev.client_x() as f64, ev.client_y() as f64) {
			if let Some(ref mut s) = *state_md.borrow_mut() {
				s.pointer_down(x, y);
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some((x, y)) = local_point(ev.client_x() as f64, ev.client_y() as f64) {
			if let Some(ref mut s) = *state_mm.borrow_mut() {
				s.pointer_move(x, y);
				hover.set(s.hover_info());
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
		hover.set(None);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some((x, y)) = local_point(ev.client_x() as f64, ev.client_y() as f64) {
			if let Some(ref mut s) = *state_wh.borrow_mut() {
				s.zoom(x, y, ev.delta_y());
			}
		}
	};

	let state_map = state.clone();
	let on_map = move |_| {
		if let Some(ref mut s) = *state_map.borrow_mut() {
			s.switch_mode(ViewMode::Map);
		}
		mode.set(ViewMode::Map);
	};
	let state_graph = state.clone();
	let on_graph = move |_| {
		if let Some(ref mut s) = *state_graph.borrow_mut() {
			s.switch_mode(ViewMode::Graph);
		}
		mode.set(ViewMode::Graph);
	};

	view! {
		<div class="network-viz">
			<div class="viz-controls">
				<button class:active=move || mode.get() == ViewMode::Map on:click=on_map>
					"Map View"
				</button>
				<button class:active=move || mode.get() == ViewMode::Graph on:click=on_graph>
					"Graph View"
				</button>
			</div>
			<div class="viz-info">
				{move || match hover.get() {
					Some((name, population)) => {
						format!("{}: {} inhabitants", name, population)
					}
					None => "Hover over a city for details".to_string(),
				}}
			</div>
			<Show when=move || failed.get()>
				<p class="viz-error">"Visualization not initialized: canvas unavailable."</p>
			</Show>
			<canvas
				node_ref=canvas_ref
				class="network-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
		</div>
	}
}

use leptos::prelude::*;

use crate::components::matching::MatchingViz;
use crate::components::network::NetworkViz;
use crate::components::nlp::NlpViz;

/// A project card that opens its demo in a modal overlay.
#[component]
fn ProjectCard(
	title: &'static str,
	description: &'static str,
	open: RwSignal<bool>,
) -> impl IntoView {
	view! {
		<div class="project-card">
			<h3>{title}</h3>
			<p>{description}</p>
			<button class="project-demo-btn" on:click=move |_| open.set(true)>
				"View Demo"
			</button>
		</div>
	}
}

/// Modal shell. The hosted widget stays mounted while closed so its state
/// survives; the `open` signal pauses its background work instead.
#[component]
fn VizModal(title: &'static str, open: RwSignal<bool>, children: Children) -> impl IntoView {
	view! {
		<div
			class="viz-modal"
			style:display=move || if open.get() { "flex" } else { "none" }
		>
			<div class="viz-modal-content">
				<div class="viz-modal-header">
					<h2>{title}</h2>
					<button class="viz-modal-close" on:click=move |_| open.set(false)>
						"×"
					</button>
				</div>
				<div class="viz-modal-body">{children()}</div>
			</div>
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let network_open = RwSignal::new(false);
	let nlp_open = RwSignal::new(false);
	let matching_open = RwSignal::new(false);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="home">
				<header class="home-header">
					<h1>"Interactive Visualizations"</h1>
					<p class="subtitle">
						"Three animated data-viz demos: a distribution network, a "
						"conversation-clustering pipeline and a workforce matcher."
					</p>
				</header>

				<div class="project-grid">
					<ProjectCard
						title="Distribution Network"
						description="Chilean cities on a pannable map or force-directed graph, with animated traffic flowing along real routes."
						open=network_open
					/>
					<ProjectCard
						title="Conversation Clustering"
						description="A staged NLP pipeline that clusters 120 support conversations into FAQ themes."
						open=nlp_open
					/>
					<ProjectCard
						title="Workforce Assignment"
						description="Multi-objective client-salesperson matching that adapts to random roster events."
						open=matching_open
					/>
				</div>

				<VizModal title="Distribution Network" open=network_open>
					<NetworkViz open=network_open />
				</VizModal>
				<VizModal title="Conversation Clustering" open=nlp_open>
					<NlpViz open=nlp_open />
				</VizModal>
				<VizModal title="Workforce Assignment" open=matching_open>
					<MatchingViz open=matching_open />
				</VizModal>
			</div>
		</ErrorBoundary>
	}
}

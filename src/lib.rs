//! particle-backdrop: animated constellation backdrop for a portfolio page.
//!
//! This crate provides a WASM-based canvas component that renders a drifting
//! particle field with proximity links, plus a small composition root that
//! mounts it behind a hero overlay.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod theme;

pub use components::animated_background::AnimatedBackground;
pub use theme::{Color, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Hero copy rendered over the backdrop.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteInfo {
	/// Document title.
	#[serde(default = "default_title")]
	pub title: String,
	/// Headline shown in the hero overlay.
	#[serde(default = "default_headline")]
	pub headline: String,
	/// Subtitle under the headline.
	#[serde(default = "default_tagline")]
	pub tagline: String,
}

fn default_title() -> String {
	"Data Science Portfolio".into()
}

fn default_headline() -> String {
	"Data Scientist & Analyst".into()
}

fn default_tagline() -> String {
	"Turning raw data into decisions.".into()
}

impl Default for SiteInfo {
	fn default() -> Self {
		Self {
			title: default_title(),
			headline: default_headline(),
			tagline: default_tagline(),
		}
	}
}

/// Load hero copy from a script element with id="site-data".
/// Expected format: JSON with { title, headline, tagline }.
fn load_site_info() -> Option<SiteInfo> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteInfo>(&json_text) {
		Ok(info) => {
			info!("particle-backdrop: loaded site data for {:?}", info.headline);
			Some(info)
		}
		Err(e) => {
			warn!("particle-backdrop: failed to parse site data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts one animated backdrop behind the hero overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let site = load_site_info().unwrap_or_default();
	let theme = Theme::default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=site.title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero" style=format!("background-color: {};", theme.background.css())>
			<AnimatedBackground />
			<div class="hero-overlay">
				<h1 style=format!("color: {};", theme.text.css())>{site.headline}</h1>
				<p class="subtitle" style=format!("color: {};", theme.secondary.css())>
					{site.tagline}
				</p>
				<a
					class="hero-cta"
					href="#projects"
					style=format!(
						"background-color: {}; border: 1px solid {}; color: {};",
						theme.card.css(),
						theme.primary.css(),
						theme.highlight.css(),
					)
				>
					"View my work"
				</a>
			</div>
		</section>
	}
}

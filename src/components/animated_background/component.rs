//! Leptos component driving the animated particle backdrop.
//!
//! The component owns an HTML canvas stretched over its parent container and
//! runs one update+render pass per display frame via `requestAnimationFrame`,
//! with exactly one pass queued at a time. A window resize listener
//! re-measures the canvas and rebuilds the field. Teardown cancels the
//! pending frame and detaches the listener; the shared [`CancelToken`]
//! guarantees no pass runs after cleanup even if a callback was already
//! queued.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::field::{FieldConfig, ParticleField};
use super::render;
use crate::theme::{Color, Theme};

/// Idempotent stop handle shared between the frame loop and teardown.
#[derive(Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	/// Marks the loop as stopped. Safe to call repeatedly.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// True once [`CancelToken::cancel`] has been called.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// Bundles the state the frame and resize callbacks share.
struct Backdrop {
	field: ParticleField,
	rng: SmallRng,
	color: Color,
}

/// Animated constellation backdrop.
///
/// Renders into a transparently-overlaid canvas that fills the parent
/// container, sits behind foreground content, and never intercepts pointer
/// input. The effect is purely decorative: a negative `particle_count`
/// degrades to an empty field, and a missing 2D context disables the
/// component without touching the rest of the page.
#[component]
pub fn AnimatedBackground(
	/// Number of particles in the field. Negative values clamp to zero.
	#[prop(default = 70)]
	particle_count: i32,
	/// Particle and link color. Defaults to the theme highlight.
	#[prop(default = None)]
	color: Option<Color>,
	/// CSS opacity applied to the whole canvas, clamped to `[0, 1]`.
	#[prop(default = 0.3)]
	opacity: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let token = CancelToken::default();

	let backdrop: Rc<RefCell<Option<Backdrop>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (backdrop_init, animate_init, resize_cb_init, raf_init, token_init) = (
		backdrop.clone(),
		animate.clone(),
		resize_cb.clone(),
		raf_id.clone(),
		token.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		// No drawing surface means no effect; the page stays functional.
		let Some(ctx) = context_2d(&canvas) else {
			warn!("particle-backdrop: 2d canvas context unavailable, backdrop disabled");
			return;
		};

		let (w, h) = measure(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let config = FieldConfig::with_count(particle_count);
		let color = color.unwrap_or_else(|| Theme::default().highlight);
		let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);

		*backdrop_init.borrow_mut() = Some(Backdrop {
			field: ParticleField::new(config, w, h, &mut rng),
			rng,
			color,
		});

		let (backdrop_resize, canvas_resize) = (backdrop_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = measure(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut b) = *backdrop_resize.borrow_mut() {
				b.field.resize(nw, nh, &mut b.rng);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (backdrop_anim, animate_inner, raf_anim, token_anim) = (
			backdrop_init.clone(),
			animate_init.clone(),
			raf_init.clone(),
			token_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if token_anim.is_cancelled() {
				return;
			}
			if let Some(ref mut b) = *backdrop_anim.borrow_mut() {
				b.field.step();
				render::draw(&ctx, &b.field, b.color);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
						raf_anim.set(Some(id));
					}
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.set(Some(id));
			}
		}
	});

	// `on_cleanup` requires a `Send + Sync` closure, but these handles are
	// `Rc`-based (`!Send`). In the single-threaded CSR/WASM target they are
	// only ever touched on the owning thread, so wrapping them in a
	// `SendWrapper` satisfies the bound without changing behavior.
	let cleanup_state = SendWrapper::new((
		token.clone(),
		raf_id.clone(),
		resize_cb.clone(),
		animate.clone(),
	));
	on_cleanup(move || {
		let (token_cleanup, raf_cleanup, resize_cleanup, animate_cleanup) = &*cleanup_state;
		token_cleanup.cancel();
		if let Some(window) = web_sys::window() {
			if let Some(id) = raf_cleanup.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *resize_cleanup.borrow() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		// The pending frame is cancelled above, so the closures can drop.
		resize_cleanup.borrow_mut().take();
		animate_cleanup.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="animated-background"
			style=format!(
				"position: absolute; inset: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none; opacity: {};",
				opacity.clamp(0.0, 1.0),
			)
		/>
	}
}

/// Acquires the 2D context, or `None` when the host denies it.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|obj| obj.dyn_into().ok())
}

/// Current CSS size of the canvas element.
fn measure(canvas: &HtmlCanvasElement) -> (f64, f64) {
	(canvas.client_width() as f64, canvas.client_height() as f64)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cancel_token_starts_live() {
		let token = CancelToken::default();
		assert!(!token.is_cancelled());
	}

	#[test]
	fn cancel_is_idempotent() {
		let token = CancelToken::default();
		token.cancel();
		token.cancel();
		assert!(token.is_cancelled());
	}

	#[test]
	fn cancel_is_visible_through_clones() {
		let token = CancelToken::default();
		let shared = token.clone();
		token.cancel();
		assert!(shared.is_cancelled());
	}
}

//! Canvas rendering for the particle backdrop.
//!
//! One frame: clear the surface, draw every particle as a filled circle,
//! then stroke the proximity links. The canvas itself stays transparent;
//! all color composition happens through `rgba()` fill/stroke styles.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use crate::theme::Color;

/// Stroke width for link lines, in pixels.
const LINK_WIDTH: f64 = 0.5;

/// Draws the current field state onto `ctx`.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, color: Color) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in field.particles() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&color.css_with_alpha(p.alpha));
		ctx.fill();
	}

	let particles = field.particles();
	ctx.set_line_width(LINK_WIDTH);
	for link in field.links() {
		let (a, b) = (&particles[link.a], &particles[link.b]);
		ctx.set_stroke_style_str(&color.css_with_alpha(link.alpha()));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

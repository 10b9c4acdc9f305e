//! Animated particle-constellation backdrop.
//!
//! A decorative canvas layer that drifts a fixed set of particles around the
//! viewport and joins nearby pairs with faint lines:
//! - Per-frame integration with elastic reflection at the viewport edges
//! - Pairwise proximity links whose opacity fades with distance
//! - Full particle regeneration on viewport resize
//! - An owned frame loop with an idempotent cancellation handle
//!
//! Purely visual: the canvas sits behind the page content, ignores pointer
//! input, and silently disables itself when no 2D context is available.
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::AnimatedBackground;
//!
//! view! {
//!     <section class="hero">
//!         <AnimatedBackground particle_count=70 opacity=0.3 />
//!         <div class="hero-overlay">"foreground content"</div>
//!     </section>
//! }
//! ```

mod component;
mod field;
mod render;

pub use component::{AnimatedBackground, CancelToken};
pub use field::{FieldConfig, Link, Particle, ParticleField};

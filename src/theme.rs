//! Site-wide visual theming.
//!
//! Holds the warm earth-tone palette the page is built around. The
//! `highlight` color doubles as the default particle color for the
//! animated backdrop.

/// RGB color with helpers for CSS string output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Creates a color from 8-bit RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Hex notation (`#rrggbb`).
	pub fn css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// `rgba()` functional notation with the given alpha.
	pub fn css_with_alpha(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

/// Complete site palette.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Page background (deep charcoal).
	pub background: Color,
	/// Card background, slightly lifted from the page.
	pub card: Color,
	/// Primary accent (saddle brown).
	pub primary: Color,
	/// Secondary accent (olive drab).
	pub secondary: Color,
	/// Body text (beige).
	pub text: Color,
	/// Highlight accent (peru); default particle color.
	pub highlight: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(0x16, 0x12, 0x0f),
			card: Color::rgb(0x23, 0x20, 0x1d),
			primary: Color::rgb(0x8b, 0x45, 0x13),
			secondary: Color::rgb(0x6b, 0x8e, 0x23),
			text: Color::rgb(0xf5, 0xf5, 0xdc),
			highlight: Color::rgb(0xcd, 0x85, 0x3f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formats_hex() {
		assert_eq!(Color::rgb(0xcd, 0x85, 0x3f).css(), "#cd853f");
	}

	#[test]
	fn css_with_alpha_formats_rgba() {
		assert_eq!(
			Color::rgb(205, 133, 63).css_with_alpha(0.15),
			"rgba(205, 133, 63, 0.15)"
		);
	}

	#[test]
	fn default_particle_color_is_highlight() {
		assert_eq!(Theme::default().highlight, Color::rgb(0xcd, 0x85, 0x3f));
	}
}

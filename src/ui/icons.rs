// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are compiled in with `include_bytes!` and their handles cached in a
//! `OnceLock`, so the bytes are parsed once. Sources are single-color and
//! are tinted at render time with [`tinted`].

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $source:ident, $filename:literal, $doc:literal) => {
        const $source: &[u8] =
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));

        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(play, PLAY_SVG, "play.svg", "Play icon: triangle pointing right.");
define_icon!(
    check_circle,
    CHECK_CIRCLE_SVG,
    "check_circle.svg",
    "Check mark inside a circle."
);

/// Sizes `icon` to a `size` square and paints it in the color `color`
/// picks for the active theme.
pub fn tinted<'a>(
    icon: Svg<'a>,
    size: f32,
    color: impl Fn(&Theme) -> Color + 'a,
) -> Svg<'a> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |theme: &Theme, _status| svg::Style {
            color: Some(color(theme)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_sources_are_svg_documents() {
        for source in [PLAY_SVG, CHECK_CIRCLE_SVG] {
            let markup = std::str::from_utf8(source).expect("icons are utf-8");
            assert!(markup.trim_start().starts_with("<svg"));
            assert!(markup.contains("viewBox"));
        }
    }
}

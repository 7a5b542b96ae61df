// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card holding the whole form.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface)),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Frame around a file preview.
pub fn preview_frame(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal. `alpha` scales the scrim so it can follow
/// the dialog's own fade.
pub fn scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha.clamp(0.0, 1.0),
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.surface)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrim_alpha_is_scaled_and_clamped() {
        let full = scrim(1.0)(&Theme::Light);
        let none = scrim(-2.0)(&Theme::Light);

        assert_eq!(
            full.background,
            Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            }))
        );
        assert_eq!(
            none.background,
            Some(Background::Color(Color {
                a: 0.0,
                ..palette::BLACK
            }))
        );
    }
}

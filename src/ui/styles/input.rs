// SPDX-License-Identifier: MPL-2.0
//! Input styles reflecting the validation mark of a field.

use crate::form::ValidationMark;
use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::{pick_list, text_input};
use iced::{Border, Color, Theme};

fn mark_border(mark: ValidationMark, fallback: Border) -> Border {
    let color = match mark {
        ValidationMark::Untouched => return fallback,
        ValidationMark::Valid => palette::SUCCESS_500,
        ValidationMark::Invalid => palette::ERROR_500,
    };

    Border {
        color,
        width: border::WIDTH_MD,
        radius: radius::SM.into(),
    }
}

/// Text input bordered according to `mark`.
pub fn text_field(
    mark: ValidationMark,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let base = text_input::default(theme, status);
        text_input::Style {
            border: mark_border(mark, base.border),
            ..base
        }
    }
}

/// Select bordered according to `mark`.
pub fn select_field(
    mark: ValidationMark,
) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    move |theme: &Theme, status: pick_list::Status| {
        let base = pick_list::default(theme, status);
        pick_list::Style {
            border: mark_border(mark, base.border),
            ..base
        }
    }
}

/// Color of the hint line under an invalid field.
#[must_use]
pub fn hint_color() -> Color {
    palette::ERROR_500
}

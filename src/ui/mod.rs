// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! # Screens
//!
//! - [`registration_form`] - The form, its previews and the submit control
//! - [`success_dialog`] - Modal shown after a completed submission
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Time-sampled entrance, exit and shake effects
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`icons`] - Embedded SVG icons
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod animation;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod registration_form;
pub mod styles;
pub mod success_dialog;
pub mod theming;
pub mod widgets;

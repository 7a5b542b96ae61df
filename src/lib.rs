// SPDX-License-Identifier: MPL-2.0
//! `rollcall` is a student registration form built with the Iced GUI framework.
//!
//! It validates the entered details, previews an introduction video and a
//! selfie, simulates the submission round trip and acknowledges it with a
//! modal dialog. Text is localized with Fluent and preferences are kept in a
//! small TOML file.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod media;
pub mod ui;

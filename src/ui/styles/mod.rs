// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the form's widgets.

pub mod button;
pub mod container;
pub mod input;

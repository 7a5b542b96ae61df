// SPDX-License-Identifier: MPL-2.0
//! Saving user preferences to disk.

use crate::config;
use crate::error::Result;
use crate::i18n::I18n;
use crate::ui::notifications::{self, Notification};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// What happened to the settings file after a preference change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved,
    /// The existing file could not be parsed and was left as it is.
    SkippedDamagedFile,
}

/// Applies the newly selected locale and persists it to config.
///
/// Save failures are reported with a warning toast; the locale switch itself
/// still takes effect for this session.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    notifications: &mut notifications::Manager,
) {
    if !i18n.set_locale(locale.clone()) {
        tracing::warn!(%locale, "no translations for selected locale");
        return;
    }
    tracing::info!(%locale, "locale changed");

    // Unit tests drive the handlers directly and must not touch the real
    // settings file.
    if cfg!(test) {
        return;
    }

    match persist_language(&locale, None) {
        Ok(PersistOutcome::Saved) => {}
        Ok(PersistOutcome::SkippedDamagedFile) => {
            notifications.push(Notification::warning("notification-config-save-skipped"));
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save config");
            notifications.push(Notification::warning("notification-config-save-error"));
        }
    }
}

/// Writes `locale` to the settings file in `base_dir` (or the resolved
/// config directory), keeping every other stored preference.
///
/// A settings file that fails to parse is never overwritten, so a typo in
/// it does not cost the user their other preferences.
pub fn persist_language(
    locale: &LanguageIdentifier,
    base_dir: Option<PathBuf>,
) -> Result<PersistOutcome> {
    let (mut cfg, warning) = config::load_with_override(base_dir.clone());
    if warning.is_some() {
        tracing::warn!(%locale, "settings file is damaged, leaving it untouched");
        return Ok(PersistOutcome::SkippedDamagedFile);
    }

    cfg.general.language = Some(locale.to_string());
    config::save_with_override(&cfg, base_dir)?;
    Ok(PersistOutcome::Saved)
}

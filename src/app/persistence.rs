// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves the language selection to `settings.toml` so it survives restarts.

use crate::config;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to config.
///
/// `base_dir` overrides the config directory (tests pass a temp dir).
/// Returns `Ok(false)` without touching disk if the locale is not available.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    base_dir: Option<PathBuf>,
) -> Result<bool> {
    if !i18n.set_locale(locale.clone()) {
        tracing::warn!(%locale, "requested locale has no translations");
        return Ok(false);
    }

    let (mut cfg, _) = config::load_with_override(base_dir.clone());
    cfg.general.language = Some(locale.to_string());
    config::save_with_override(&cfg, base_dir)?;

    tracing::info!(%locale, "language changed");
    Ok(true)
}

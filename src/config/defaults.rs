// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: toast lifetime bounds
//! - **Localization**: fallback locale

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default toast lifetime before auto-removal (in milliseconds).
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 4000;

/// Shortest configurable default toast lifetime (in milliseconds).
pub const MIN_NOTIFICATION_TTL_MS: u64 = 1000;

/// Longest configurable default toast lifetime (in milliseconds).
pub const MAX_NOTIFICATION_TTL_MS: u64 = 60_000;

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS name an available one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_TTL_MS > 0);
    assert!(MAX_NOTIFICATION_TTL_MS >= MIN_NOTIFICATION_TTL_MS);
    assert!(DEFAULT_NOTIFICATION_TTL_MS >= MIN_NOTIFICATION_TTL_MS);
    assert!(DEFAULT_NOTIFICATION_TTL_MS <= MAX_NOTIFICATION_TTL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::DEFAULT_TTL;

    #[test]
    fn notification_ttl_default_matches_queue_default() {
        assert_eq!(DEFAULT_NOTIFICATION_TTL_MS, DEFAULT_TTL.as_millis() as u64);
    }

    #[test]
    fn default_locale_parses() {
        assert!(DEFAULT_LOCALE.parse::<unic_langid::LanguageIdentifier>().is_ok());
    }
}

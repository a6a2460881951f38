//! Shared Constants
//!
//! Centralized constants for locale resolution, persistence and the demo shell.

/// Key under which the chosen locale code is persisted
pub const LOCALE_STORAGE_KEY: &str = "locale";

/// Default URL query parameter carrying the locale code
pub const LOCALE_QUERY_PARAM: &str = "locale";

/// Fallback IANA timezone when the environment does not provide a usable one
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

/// Meta tag name updated with the translated description
pub const META_DESCRIPTION: &str = "description";

/// Project directory identifiers (qualifier, organization, application)
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORGANIZATION: &str = "cyenx";
pub const PROJECT_APPLICATION: &str = "locale-switcher";

/// File names inside the config directory
pub const PREFERENCES_FILE: &str = "preferences.toml";
pub const CONFIG_FILE: &str = "config.toml";

/// Default page address used by the demo shell
pub const DEFAULT_PAGE_URL: &str = "http://localhost:3000/";

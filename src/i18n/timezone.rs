//! Timezone resolution

use chrono_tz::Tz;
use tracing::debug;

use crate::constants::DEFAULT_TIMEZONE;

/// Parse an IANA timezone name, falling back to `fallback`, then to [`DEFAULT_TIMEZONE`]
///
/// The POSIX `:` prefix (`TZ=:Europe/Paris`) is accepted.
pub fn resolve_timezone(candidate: Option<&str>, fallback: &str) -> Tz {
    candidate
        .map(|name| name.trim().trim_start_matches(':'))
        .filter(|name| !name.is_empty())
        .and_then(|name| {
            name.parse::<Tz>()
                .inspect_err(|_| debug!(timezone = name, "Ignoring unknown timezone"))
                .ok()
        })
        .or_else(|| fallback.parse::<Tz>().ok())
        .unwrap_or(chrono_tz::Europe::Berlin)
}

/// Timezone reported by the environment (`TZ`), if any
pub fn system_timezone_name() -> Option<String> {
    std::env::var("TZ").ok().filter(|tz| !tz.trim().is_empty())
}

/// The effective timezone for this process
pub fn current_timezone(fallback: &str) -> Tz {
    resolve_timezone(system_timezone_name().as_deref(), fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_are_used() {
        assert_eq!(
            resolve_timezone(Some("America/New_York"), DEFAULT_TIMEZONE),
            chrono_tz::America::New_York
        );
        assert_eq!(
            resolve_timezone(Some(":Asia/Tokyo"), DEFAULT_TIMEZONE),
            chrono_tz::Asia::Tokyo
        );
    }

    #[test]
    fn unknown_or_missing_names_fall_back() {
        assert_eq!(
            resolve_timezone(Some("Mars/Olympus"), DEFAULT_TIMEZONE),
            chrono_tz::Europe::Berlin
        );
        assert_eq!(resolve_timezone(None, "UTC"), chrono_tz::UTC);
        assert_eq!(
            resolve_timezone(Some(""), "not-a-zone"),
            chrono_tz::Europe::Berlin
        );
    }
}

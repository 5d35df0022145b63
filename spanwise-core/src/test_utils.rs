//! Shared test utilities for `spanwise-core`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding the number of proptest cases per property.
const PBT_CASES_ENV_KEY: &str = "SPANWISE_PBT_CASES";
/// Environment variable toggling forked proptest execution.
const PBT_FORK_ENV_KEY: &str = "SPANWISE_PBT_FORK";

/// Builds the proptest configuration shared by every property suite.
///
/// `SPANWISE_PBT_CASES` overrides `default_cases` and `SPANWISE_PBT_FORK`
/// enables forked execution. Unparseable overrides are reported through
/// `tracing` and ignored.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = env_override(PBT_CASES_ENV_KEY, default_cases, |raw| {
        raw.parse::<u32>().ok().filter(|cases| *cases > 0)
    });
    let fork = env_override(PBT_FORK_ENV_KEY, false, |raw| {
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    });
    ProptestConfig {
        cases,
        fork,
        ..ProptestConfig::default()
    }
}

fn env_override<T, F>(key: &'static str, default: T, parse: F) -> T
where
    F: Fn(&str) -> Option<T>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|| {
        tracing::warn!(env = key, raw = %raw, "ignoring invalid property-test override");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cases_apply_without_overrides() {
        if env::var(PBT_CASES_ENV_KEY).is_ok() {
            return;
        }
        assert_eq!(suite_proptest_config(48).cases, 48);
    }
}

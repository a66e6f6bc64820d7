//! Proptest run profile read from the environment.
//!
//! CI raises the case count for nightly runs and may fork each case into a
//! subprocess; local runs keep whatever defaults the suite asks for. Invalid
//! overrides are logged and ignored rather than failing the suite.

use std::env;
use std::fmt;

/// Overrides the number of cases each property runs.
pub const CASES_ENV_KEY: &str = "SPANNING_PBT_CASES";
/// Enables or disables running each case in a forked subprocess.
pub const FORK_ENV_KEY: &str = "SPANNING_PBT_FORK";

/// Resolved settings for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Resolves the profile, falling back to the given defaults for absent or
    /// malformed variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanning_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: resolve(CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

#[derive(Debug, PartialEq, Eq)]
enum OverrideError {
    NotANumber,
    Zero,
    NotAFlag,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotANumber => "expected a positive integer",
            Self::Zero => "case count must be greater than zero",
            Self::NotAFlag => "expected one of 1/0, true/false, yes/no, on/off",
        })
    }
}

fn resolve<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(env = key, raw = %raw, %reason, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::Zero),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    let raw = raw.trim();
    if ["1", "true", "yes", "on"].iter().any(|v| raw.eq_ignore_ascii_case(v)) {
        Ok(true)
    } else if ["0", "false", "no", "off"].iter().any(|v| raw.eq_ignore_ascii_case(v)) {
        Ok(false)
    } else {
        Err(OverrideError::NotAFlag)
    }
}

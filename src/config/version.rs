//! Storefront API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Storefront API version.
///
/// Shopify releases API versions quarterly. The known stable versions are
/// listed as variants; `Unstable` targets the development version and
/// `Custom` carries any other `YYYY-MM` string.
///
/// ```rust
/// use shopify_storefront::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_10);
/// assert_eq!(version.to_string(), "2024-10");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2024-07
    V2024_07,
    /// API version 2024-10
    V2024_10,
    /// API version 2025-01
    V2025_01,
    /// API version 2025-04
    V2025_04,
    /// API version 2025-07
    V2025_07,
    /// API version 2025-10
    V2025_10,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

const KNOWN: [(ApiVersion, &str); 6] = [
    (ApiVersion::V2024_07, "2024-07"),
    (ApiVersion::V2024_10, "2024-10"),
    (ApiVersion::V2025_01, "2025-01"),
    (ApiVersion::V2025_04, "2025-04"),
    (ApiVersion::V2025_07, "2025-07"),
    (ApiVersion::V2025_10, "2025-10"),
];

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && month
                .parse::<u8>()
                .is_ok_and(|m| month.len() == 2 && (1..=12).contains(&m))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstable => f.write_str("unstable"),
            Self::Custom(s) => f.write_str(s),
            known => {
                let name = KNOWN
                    .iter()
                    .find(|(v, _)| v == known)
                    .map_or("", |(_, name)| name);
                f.write_str(name)
            }
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }
        if let Some((version, _)) = KNOWN.iter().find(|(_, name)| *name == s) {
            return Ok(version.clone());
        }
        if Self::is_valid_version_format(&s) {
            Ok(Self::Custom(s))
        } else {
            Err(ConfigError::InvalidApiVersion { version: s })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_and_unstable_versions() {
        assert_eq!("2025-01".parse::<ApiVersion>().unwrap(), ApiVersion::V2025_01);
        assert_eq!(" UNSTABLE ".parse::<ApiVersion>().unwrap(), ApiVersion::Unstable);
    }

    #[test]
    fn test_unknown_well_formed_version_is_custom() {
        let version: ApiVersion = "2026-04".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert!(!version.is_stable());
        assert_eq!(version.to_string(), "2026-04");
    }

    #[test]
    fn test_rejects_malformed_versions() {
        assert!("2024-13".parse::<ApiVersion>().is_err());
        assert!("2024-1".parse::<ApiVersion>().is_err());
        assert!("latest".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_latest_is_stable_and_displays() {
        assert!(ApiVersion::latest().is_stable());
        assert_eq!(ApiVersion::latest().to_string(), "2025-10");
    }
}

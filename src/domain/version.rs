use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation (`MAJOR.MINOR.PATCH`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string such as "1.2.3".
    ///
    /// Exactly three dot-separated components are required, each made of
    /// ASCII digits only. Signs, whitespace, prefixes and pre-release or
    /// build suffixes are rejected.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidVersion(input.to_string());

        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse::<u64>().map_err(|_| invalid())?;
        }

        Ok(Version::new(numbers[0], numbers[1], numbers[2]))
    }

    /// Apply a bump in place.
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// Every call increments; bumping twice accumulates. A component already
    /// at `u64::MAX` cannot be incremented and leaves `self` unchanged.
    pub fn bump(&mut self, bump_type: VersionBump) -> Result<(), ParseError> {
        let current = *self;
        let overflow = || ParseError::Overflow(current.to_string(), bump_type);

        *self = match bump_type {
            VersionBump::Major => {
                Version::new(current.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            VersionBump::Minor => Version::new(
                current.major,
                current.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            VersionBump::Patch => Version::new(
                current.major,
                current.minor,
                current.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(())
    }

    /// Return a bumped copy, leaving `self` untouched
    pub fn bumped(&self, bump_type: VersionBump) -> Result<Self, ParseError> {
        let mut next = *self;
        next.bump(bump_type)?;
        Ok(next)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

/// Which component of a version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    pub const ALL: [VersionBump; 3] = [VersionBump::Major, VersionBump::Minor, VersionBump::Patch];

    /// Canonical name as shown to the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "Major",
            VersionBump::Minor => "Minor",
            VersionBump::Patch => "Patch",
        }
    }

    /// One-line description used by the selection prompt
    pub fn description(&self) -> &'static str {
        match self {
            VersionBump::Major => "Major version bump",
            VersionBump::Minor => "Minor version bump",
            VersionBump::Patch => "Patch version bump",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionBump {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionBump::ALL
            .into_iter()
            .find(|bump| bump.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownBump(s.to_string()))
    }
}

impl<'de> serde::Deserialize<'de> for VersionBump {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for VersionBump {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

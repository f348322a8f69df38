use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Name of the SDKMAN link that points at the global version. It can never be
/// a version identifier.
pub const CURRENT_LINK: &str = "current";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("Identifier must not be empty")]
    Empty,
    #[error("Identifier contains whitespace: {input:?}")]
    Whitespace { input: String },
    #[error("Identifier is not a plain directory name: {input:?}")]
    NotAPathComponent { input: String },
    #[error("Identifier is reserved: {input}")]
    Reserved { input: String },
    #[error("Identifier contains {found:?}, only letters, digits and . _ + - are allowed: {input:?}")]
    InvalidCharacter { input: String, found: char },
}

/// Key naming one installable version, for example `21.0.2-tem`.
///
/// Identifiers double as directory names under the candidate folder and as
/// arguments to the `sdk` shell function, so they are restricted to a single
/// path component made of SDKMAN's version alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// # Errors
    /// Returns an error if `value` is empty, contains whitespace or path
    /// separators, is `.`/`..`, is the reserved `current` link name, or
    /// contains anything outside `[A-Za-z0-9._+-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(IdentifierError::Whitespace { input: value });
        }
        if value.contains(['/', '\\']) || value == "." || value == ".." {
            return Err(IdentifierError::NotAPathComponent { input: value });
        }
        if value == CURRENT_LINK {
            return Err(IdentifierError::Reserved { input: value });
        }
        if let Some(found) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')))
        {
            return Err(IdentifierError::InvalidCharacter { input: value, found });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Snapshot of one catalog entry as the backend saw it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRecord {
    pub identifier: Identifier,
    pub vendor: String,
    pub version: String,
    pub dist: String,
    pub installed: bool,
    pub available: bool,
}

impl VersionRecord {
    /// Record for a catalog entry that only has a version (non-Java
    /// candidates), where the identifier is the version itself.
    #[must_use]
    pub fn plain(identifier: Identifier, installed: bool, available: bool) -> Self {
        Self {
            version: identifier.to_string(),
            identifier,
            vendor: String::new(),
            dist: String::new(),
            installed,
            available,
        }
    }

    /// Installed locally but unknown to the remote catalog.
    #[must_use]
    pub fn is_local_only(&self) -> bool {
        self.installed && !self.available
    }
}

impl PartialEq for VersionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for VersionRecord {}

impl Hash for VersionRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn id(value: &str) -> Identifier {
        Identifier::new(value).expect("valid identifier in test")
    }

    #[test]
    fn identifier_accepts_vendor_version_dist() {
        let identifier: Identifier = " 21.0.2-tem ".parse().unwrap();
        assert_eq!(identifier.as_str(), "21.0.2-tem");
        assert_eq!(identifier.to_string(), "21.0.2-tem");
    }

    #[test]
    fn identifier_rejects_empty_and_whitespace() {
        assert_eq!(Identifier::new(""), Err(IdentifierError::Empty));
        assert!(matches!(
            Identifier::new("21 tem"),
            Err(IdentifierError::Whitespace { .. })
        ));
    }

    #[test]
    fn identifier_rejects_path_traversal() {
        for input in ["..", ".", "../21-tem", "a/b", "a\\b"] {
            assert!(
                matches!(
                    Identifier::new(input),
                    Err(IdentifierError::NotAPathComponent { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn identifier_rejects_current_link_name() {
        assert!(matches!(
            Identifier::new("current"),
            Err(IdentifierError::Reserved { .. })
        ));
    }

    #[test]
    fn identifier_rejects_shell_metacharacters() {
        for (input, found) in [
            ("1;touch${IFS}pwned", ';'),
            ("21-tem$(id)", '$'),
            ("21-`id`", '`'),
            ("21|tem", '|'),
            ("21&tem", '&'),
            ("21'tem", '\''),
        ] {
            assert_eq!(
                Identifier::new(input),
                Err(IdentifierError::InvalidCharacter {
                    input: input.to_string(),
                    found
                }),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn identifier_accepts_sdkman_alphabet() {
        for input in ["22.1.0.1.r17-gln", "3.9.6", "1.9.0_RC1", "21.0.2+13-tem"] {
            assert!(Identifier::new(input).is_ok(), "{input} should be accepted");
        }
    }

    #[test]
    fn identifier_try_from_string_validates() {
        let ok = Identifier::try_from("17.0.9-amzn".to_string()).unwrap();
        assert_eq!(ok, id("17.0.9-amzn"));
        assert!(Identifier::try_from("current".to_string()).is_err());
        assert_eq!(String::from(ok), "17.0.9-amzn");
    }

    #[test]
    fn records_compare_by_identifier_only() {
        let installed = VersionRecord {
            identifier: id("21.0.2-tem"),
            vendor: "Temurin".to_string(),
            version: "21.0.2".to_string(),
            dist: "tem".to_string(),
            installed: true,
            available: true,
        };
        let stale = VersionRecord {
            installed: false,
            vendor: String::new(),
            ..installed.clone()
        };

        assert_eq!(installed, stale);
        let set: HashSet<_> = [installed, stale].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn plain_record_uses_identifier_as_version() {
        let record = VersionRecord::plain(id("3.9.6"), true, false);

        assert_eq!(record.version, "3.9.6");
        assert!(record.vendor.is_empty());
        assert!(record.is_local_only());
    }
}

//! Configuration gate for ACL-aware behavior.

/// Controls whether ACL-aware propagation is attempted at all.
///
/// When disabled, no ACL status read is ever issued and only basic
/// permission bits and group ownership are propagated. This mirrors the
/// usual deployment gate for ACL support: a single boolean setting whose
/// absence, or any value other than the string `"true"`, disables ACL
/// handling entirely.
///
/// # Examples
///
/// ```rust
/// use acl_inherit::InheritConfig;
///
/// assert!(InheritConfig::from_setting(Some("true")).acl_enabled());
/// assert!(!InheritConfig::from_setting(Some("TRUE")).acl_enabled());
/// assert!(!InheritConfig::from_setting(None).acl_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InheritConfig {
    acl_enabled: bool,
}

impl InheritConfig {
    /// Create a config with ACL handling explicitly enabled or disabled.
    #[inline]
    pub const fn new(acl_enabled: bool) -> Self {
        Self { acl_enabled }
    }

    /// Build from a raw configuration value.
    ///
    /// Only the exact string `"true"` enables ACL handling.
    pub fn from_setting(value: Option<&str>) -> Self {
        Self {
            acl_enabled: value == Some("true"),
        }
    }

    /// Whether ACL-aware behavior is attempted.
    #[inline]
    pub const fn acl_enabled(&self) -> bool {
        self.acl_enabled
    }
}

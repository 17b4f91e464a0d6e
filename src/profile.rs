//! Serializable avatar settings.
//!
//! An [`AvatarProfile`] captures the rendering settings shared by many
//! avatars (everything except the text) in a JSON-friendly format, so a
//! consistent look can be kept in a file and reused.
//!
//! # Example
//!
//! ```
//! use identicon::AvatarProfile;
//!
//! let profile = AvatarProfile::from_json(r#"{"size": 64, "background": "ffffff"}"#).unwrap();
//! let spec = profile.to_spec("alice").unwrap();
//! assert_eq!(spec.size, 64);
//! assert_eq!(spec.padding, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::avatar::{AvatarSpec, DEFAULT_PADDING, DEFAULT_SIZE};
use crate::color::{parse_hex_color, to_hex};
use crate::error::Result;

/// Serializable rendering settings.
///
/// # JSON Format
///
/// ```json
/// {
///   "size": 320,
///   "padding": 10,
///   "background": "ededed",
///   "foreground": null
/// }
/// ```
///
/// Missing fields take the library defaults. Colors are six hex digits and
/// a missing color means "derive it".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarProfile {
    #[serde(default = "default_size")]
    pub size: i32,

    #[serde(default = "default_padding")]
    pub padding: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

fn default_size() -> i32 {
    DEFAULT_SIZE
}

fn default_padding() -> i32 {
    DEFAULT_PADDING
}

impl Default for AvatarProfile {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            padding: DEFAULT_PADDING,
            background: None,
            foreground: None,
        }
    }
}

impl AvatarProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the settings of an existing spec.
    pub fn from_spec(spec: &AvatarSpec) -> Self {
        Self {
            size: spec.size,
            padding: spec.padding,
            background: spec.background.as_ref().map(to_hex),
            foreground: spec.foreground.as_ref().map(to_hex),
        }
    }

    /// Builds a spec for `text`, validating the color strings.
    pub fn to_spec(&self, text: impl Into<String>) -> Result<AvatarSpec> {
        let mut spec = AvatarSpec::new(text, self.size, self.padding);
        if let Some(ref bg) = self.background {
            spec.background = Some(parse_hex_color(bg)?);
        }
        if let Some(ref fg) = self.foreground {
            spec.foreground = Some(parse_hex_color(fg)?);
        }
        Ok(spec)
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdenticonError;

    #[test]
    fn json_roundtrip() {
        let profile = AvatarProfile {
            size: 128,
            padding: 4,
            background: Some("ffffff".into()),
            foreground: None,
        };

        let json = profile.to_json().unwrap();
        assert!(!json.contains("foreground"));
        assert_eq!(AvatarProfile::from_json(&json).unwrap(), profile);
    }

    #[test]
    fn empty_profile_uses_defaults() {
        let profile = AvatarProfile::from_json("{}").unwrap();
        assert_eq!(profile, AvatarProfile::new());
        assert_eq!(profile.size, 320);
        assert_eq!(profile.padding, 10);
    }

    #[test]
    fn spec_roundtrip() {
        let spec = AvatarProfile::from_json(r#"{"size": 50, "padding": 0, "foreground": "00FF00"}"#)
            .unwrap()
            .to_spec("bob")
            .unwrap();
        assert_eq!(spec.text, "bob");
        assert!(spec.background.is_none());

        let exported = AvatarProfile::from_spec(&spec);
        assert_eq!(exported.foreground.as_deref(), Some("00ff00"));
        assert_eq!(exported.size, 50);
    }

    #[test]
    fn bad_color_is_rejected() {
        let profile = AvatarProfile {
            background: Some("#fff".into()),
            ..AvatarProfile::default()
        };
        assert!(matches!(
            profile.to_spec("x"),
            Err(IdenticonError::ColorParse { .. })
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            AvatarProfile::from_json("{\"size\": \"big\"}"),
            Err(IdenticonError::Profile(_))
        ));
    }
}

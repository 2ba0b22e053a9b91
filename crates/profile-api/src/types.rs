//! Member profile record types.
//!
//! Every field is optional from the API's point of view; missing means
//! unknown. Counts default to zero so totals are always computable.

use serde::Deserialize;

/// Response envelope for a single profile lookup.
///
/// The server answers `{ "data": <record> }` with `data` null or absent
/// when no record exists for the identifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub data: Option<MemberProfile>,
}

/// Uploaded photo reference. The URL is relative to the API host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub url: Option<String>,
}

/// A member/guest record as returned by the registration API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MemberProfile {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Company_ID", default)]
    pub company_id: Option<String>,

    #[serde(rename = "Adult_Count", default)]
    pub adult_count: u32,

    #[serde(rename = "Children_Count", default)]
    pub children_count: u32,

    #[serde(rename = "Veg_Count", default)]
    pub veg_count: u32,

    #[serde(rename = "Non_Veg_Count", default)]
    pub non_veg_count: u32,

    #[serde(rename = "Age", default)]
    pub age: Option<u32>,

    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,

    #[serde(rename = "Phone_Number", default)]
    pub phone_number: Option<String>,

    #[serde(rename = "WhatsApp_Number", default)]
    pub whatsapp_number: Option<String>,

    #[serde(rename = "Email", default)]
    pub email: Option<String>,

    #[serde(rename = "Address", default)]
    pub address: Option<String>,

    #[serde(rename = "Photo", default)]
    pub photo: Option<Photo>,
}

impl MemberProfile {
    /// Total party size: adults plus children, absent counts as zero.
    pub fn total_members(&self) -> u32 {
        self.adult_count + self.children_count
    }

    /// Resolves the photo URL against the API host. Absolute URLs pass
    /// through unchanged; absent or empty URLs yield `None`.
    pub fn photo_url(&self, api_base: &str) -> Option<String> {
        let url = self.photo.as_ref()?.url.as_deref()?;
        if url.is_empty() {
            return None;
        }
        if url.starts_with("http://") || url.starts_with("https://") {
            Some(url.to_string())
        } else {
            Some(format!("{}{}", api_base.trim_end_matches('/'), url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "Name": "Jane Doe",
            "Company_ID": "ACME-42",
            "Adult_Count": 2,
            "Children_Count": 1,
            "Veg_Count": 2,
            "Non_Veg_Count": 1,
            "Age": 34,
            "Gender": "Female",
            "Phone_Number": "555-0100",
            "WhatsApp_Number": "+1 (555) 123-4567",
            "Email": "jane@example.com",
            "Address": "12 Main St",
            "Photo": { "url": "/uploads/jane.jpg" }
        }"#;
        let profile: MemberProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.adult_count, 2);
        assert_eq!(profile.children_count, 1);
        assert_eq!(profile.total_members(), 3);
        assert_eq!(profile.photo.unwrap().url.as_deref(), Some("/uploads/jane.jpg"));
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let profile: MemberProfile = serde_json::from_str(r#"{"Name":"A"}"#).unwrap();
        assert_eq!(profile.adult_count, 0);
        assert_eq!(profile.children_count, 0);
        assert_eq!(profile.total_members(), 0);
    }

    #[test]
    fn test_total_members_with_partial_counts() {
        let profile: MemberProfile =
            serde_json::from_str(r#"{"Adult_Count":4}"#).unwrap();
        assert_eq!(profile.total_members(), 4);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let profile: MemberProfile =
            serde_json::from_str(r#"{"Name":"A","Future_Field":true}"#).unwrap();
        assert_eq!(profile.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_envelope_with_null_data() {
        let envelope: ProfileEnvelope = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_with_absent_data() {
        let envelope: ProfileEnvelope = serde_json::from_str(r#"{}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_photo_url_resolves_against_host() {
        let profile = MemberProfile {
            photo: Some(Photo {
                url: Some("/uploads/jane.jpg".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(
            profile.photo_url("https://api.regeve.in"),
            Some("https://api.regeve.in/uploads/jane.jpg".to_string())
        );
        // Trailing slash on the base collapses
        assert_eq!(
            profile.photo_url("https://api.regeve.in/"),
            Some("https://api.regeve.in/uploads/jane.jpg".to_string())
        );
    }

    #[test]
    fn test_photo_url_passes_through_absolute() {
        let profile = MemberProfile {
            photo: Some(Photo {
                url: Some("https://cdn.example.com/p.png".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(
            profile.photo_url("https://api.regeve.in"),
            Some("https://cdn.example.com/p.png".to_string())
        );
    }

    #[test]
    fn test_photo_url_absent_or_empty() {
        let no_photo = MemberProfile::default();
        assert!(no_photo.photo_url("https://api.regeve.in").is_none());

        let empty_url = MemberProfile {
            photo: Some(Photo {
                url: Some(String::new()),
            }),
            ..Default::default()
        };
        assert!(empty_url.photo_url("https://api.regeve.in").is_none());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    pub id: i64,
    pub name: String,
}

/// Authenticated user's profile as returned by `Users/currentUser`.
///
/// Owned by the session once fetched; refreshed only through the
/// profile-refresh path, never patched locally.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub is_activated: bool,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modification_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub group: Option<UserGroup>,
}

impl UserProfile {
    pub fn role(&self) -> Role {
        Role::from_group_name(self.group.as_ref().map(|g| g.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_from_wire_format() {
        let json = r#"{
            "id": 42,
            "userName": "nour_pm",
            "email": "nour@example.com",
            "country": "Egypt",
            "phoneNumber": "01012345678",
            "isActivated": true,
            "creationDate": "2024-03-15T10:30:00Z",
            "modificationDate": "2024-06-01T08:00:00Z",
            "imagePath": "files/avatars/42.png",
            "group": { "id": 1, "name": "Manager" }
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_name, "nour_pm");
        assert!(profile.is_activated);
        assert_eq!(profile.role(), Role::Manager);
    }

    #[test]
    fn test_profile_tolerates_missing_optional_fields() {
        let json = r#"{"id": 7, "userName": "emp", "email": "e@x.com", "isActivated": false}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.phone_number.is_none());
        assert!(profile.group.is_none());
        assert_eq!(profile.role(), Role::Employee);
    }
}

//! Object to profile mapping
//!
//! The node returns Move struct fields as a loose JSON bag. Every field is
//! read defensively: absent or mistyped values fall back to empty.

use serde_json::Value;

use super::error::{ProfileError, ProfileResult};
use super::types::{Link, Profile, Theme};
use crate::ledger::{ObjectResponse, ParsedContent};

/// Map a `get_object` response into a profile
pub fn parse_profile(requested_id: &str, response: &ObjectResponse) -> ProfileResult<Profile> {
    let data = response.data.as_ref().ok_or(ProfileError::NotFound)?;

    let fields = match &data.content {
        Some(ParsedContent::MoveObject { fields, .. }) => fields,
        _ => return Err(ProfileError::InvalidObject),
    };

    let id = if data.object_id.is_empty() {
        requested_id.to_string()
    } else {
        data.object_id.clone()
    };

    Ok(Profile {
        id,
        name: string_field(fields, "name"),
        avatar_cid: string_field(fields, "avatar_cid"),
        bio: string_field(fields, "bio"),
        theme: Theme::from(string_field(fields, "theme")),
        updated_at: timestamp_field(fields, "updated_at"),
        links: parse_links(fields.get("links")),
    })
}

fn string_field(fields: &Value, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// u64 fields arrive as strings; accept plain numbers too
fn timestamp_field(fields: &Value, key: &str) -> i64 {
    match fields.get(key) {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        _ => 0,
    }
}

fn parse_links(value: Option<&Value>) -> Vec<Link> {
    match value.and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .map(|entry| Link {
                label: link_field(entry, "label"),
                url: link_field(entry, "url"),
            })
            .collect(),
        None => Vec::new(),
    }
}

/// Vector elements come either flat or wrapped as `{ type, fields }`
fn link_field(entry: &Value, key: &str) -> String {
    let direct = entry.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());
    let nested = || {
        entry
            .get("fields")
            .and_then(|f| f.get(key))
            .and_then(Value::as_str)
    };

    direct.or_else(nested).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::mock::move_object;
    use serde_json::json;

    #[test]
    fn test_parse_well_formed() {
        let response = move_object(
            "0xprofile",
            json!({
                "id": { "id": "0xprofile" },
                "name": "alice",
                "avatar_cid": "QmAvatar",
                "bio": "builder",
                "theme": "light",
                "updated_at": "1700000000000",
                "links": [
                    { "type": "0x2::linktree_profile::Link", "fields": { "label": "GitHub", "url": "https://github.com/a" } },
                    { "label": "Blog", "url": "https://a.dev" }
                ]
            }),
        );

        let profile = parse_profile("0xprofile", &response).unwrap();
        assert_eq!(profile.name, "alice");
        assert_eq!(profile.avatar_cid, "QmAvatar");
        assert_eq!(profile.bio, "builder");
        assert_eq!(profile.theme, Theme::Light);
        assert_eq!(profile.updated_at, 1_700_000_000_000);
        assert_eq!(
            profile.links,
            vec![
                Link::new("GitHub", "https://github.com/a"),
                Link::new("Blog", "https://a.dev"),
            ]
        );
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let response = move_object(
            "0xprofile",
            json!({
                "name": "bob",
                "updated_at": 42,
                "links": { "not": "an array" }
            }),
        );

        let profile = parse_profile("0xprofile", &response).unwrap();
        assert_eq!(profile.name, "bob");
        assert_eq!(profile.bio, "");
        assert_eq!(profile.theme, Theme::Other(String::new()));
        assert_eq!(profile.updated_at, 42);
        assert!(profile.links.is_empty());
    }

    #[test]
    fn test_malformed_links_and_timestamp() {
        let response = move_object(
            "0xprofile",
            json!({
                "name": "carol",
                "updated_at": "soon",
                "links": [ 7, { "fields": { "label": "Only label" } } ]
            }),
        );

        let profile = parse_profile("0xprofile", &response).unwrap();
        assert_eq!(profile.updated_at, 0);
        assert_eq!(profile.links, vec![Link::new("", ""), Link::new("Only label", "")]);
    }

    #[test]
    fn test_absent_object_is_not_found() {
        let response = ObjectResponse {
            data: None,
            error: Some(json!({ "code": "notExists" })),
        };

        let err = parse_profile("0x9", &response).unwrap_err();
        assert!(matches!(err, ProfileError::NotFound));
        assert_eq!(err.to_string(), "Profile not found");
    }

    #[test]
    fn test_package_is_invalid_object() {
        let response: ObjectResponse = serde_json::from_value(json!({
            "data": {
                "objectId": "0x2",
                "content": { "dataType": "package", "disassembled": {} }
            }
        }))
        .unwrap();

        let err = parse_profile("0x2", &response).unwrap_err();
        assert_eq!(err.to_string(), "Invalid object type");
    }

    #[test]
    fn test_object_without_content_is_invalid() {
        let response: ObjectResponse = serde_json::from_value(json!({
            "data": { "objectId": "0x3" }
        }))
        .unwrap();

        assert!(matches!(
            parse_profile("0x3", &response),
            Err(ProfileError::InvalidObject)
        ));
    }
}

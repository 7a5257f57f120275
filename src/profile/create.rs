//! Create flow building blocks
//!
//! Move calls for `create_profile` / `add_link` and the outcome reported
//! back to the user.

use serde::Serialize;

use super::types::{Link, ProfileDraft};
use crate::config::ContractConfig;
use crate::ledger::{CallArg, MoveCall, ObjectChange};

/// `create_profile(name, avatar_cid, bio, theme, registry)`
pub fn create_profile_call(
    contract: &ContractConfig,
    package_id: &str,
    registry_id: &str,
    draft: &ProfileDraft,
) -> MoveCall {
    MoveCall::new(package_id, &contract.module, "create_profile")
        .arg(CallArg::pure(draft.name.trim()))
        .arg(CallArg::pure(draft.avatar_cid.trim()))
        .arg(CallArg::pure(draft.bio.trim()))
        .arg(CallArg::pure(draft.theme.as_str()))
        .arg(CallArg::object(registry_id))
}

/// `add_link(profile, label, url)`
pub fn add_link_call(
    contract: &ContractConfig,
    package_id: &str,
    profile_id: &str,
    link: &Link,
) -> MoveCall {
    MoveCall::new(package_id, &contract.module, "add_link")
        .arg(CallArg::object(profile_id))
        .arg(CallArg::pure(&link.label))
        .arg(CallArg::pure(&link.url))
}

/// Id of the first created object whose type contains `type_marker`
pub fn find_created_object<'a>(changes: &'a [ObjectChange], type_marker: &str) -> Option<&'a str> {
    changes
        .iter()
        .filter_map(ObjectChange::as_created)
        .find(|(_, object_type)| object_type.contains(type_marker))
        .map(|(object_id, _)| object_id)
}

/// A link that could not be attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkFailure {
    pub link: Link,
    pub error: String,
}

/// Result of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOutcome {
    /// Digest of the `create_profile` transaction
    pub digest: String,
    /// Id of the new profile, when it could be found in the object changes
    pub profile_id: Option<String>,
    pub links_added: usize,
    pub link_failures: Vec<LinkFailure>,
}

impl CreateOutcome {
    /// Success text shown to the user
    pub fn message(&self) -> String {
        let mut message = match &self.profile_id {
            Some(id) => format!(
                "Profile created successfully!\n\nProfile ID:\n{}\n\nYou can now view your profile!",
                id
            ),
            None => "Profile created successfully!".to_string(),
        };

        if !self.link_failures.is_empty() {
            message.push_str(&format!(
                "\n\n{} of {} links could not be added.",
                self.link_failures.len(),
                self.links_added + self.link_failures.len()
            ));
        }

        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Theme;
    use serde_json::json;

    fn created(id: &str, object_type: &str) -> ObjectChange {
        ObjectChange::Created {
            sender: "0x1".into(),
            owner: json!(null),
            object_type: object_type.into(),
            object_id: id.into(),
            version: "1".into(),
            digest: "d".into(),
        }
    }

    #[test]
    fn test_create_call_arguments() {
        let contract = ContractConfig::default();
        let draft = ProfileDraft::new("alice", "hello").theme(Theme::Light);

        let call = create_profile_call(&contract, "0xpkg", "0xreg", &draft);

        assert_eq!(call.target(), "0xpkg::linktree_profile::create_profile");
        assert_eq!(
            call.arguments,
            vec![
                CallArg::pure("alice"),
                CallArg::pure(""),
                CallArg::pure("hello"),
                CallArg::pure("light"),
                CallArg::object("0xreg"),
            ]
        );
    }

    #[test]
    fn test_add_link_call_arguments() {
        let contract = ContractConfig::default();
        let link = Link::new("GitHub", "https://github.com/a");

        let call = add_link_call(&contract, "0xpkg", "0xprofile", &link);

        assert_eq!(call.target(), "0xpkg::linktree_profile::add_link");
        assert_eq!(call.arguments[0], CallArg::object("0xprofile"));
        assert_eq!(call.arguments[2], CallArg::pure("https://github.com/a"));
    }

    #[test]
    fn test_find_created_object() {
        let changes = vec![
            ObjectChange::Mutated {
                sender: "0x1".into(),
                owner: json!(null),
                object_type: "0xpkg::linktree_profile::LinkTreeProfile".into(),
                object_id: "0xmutated".into(),
                version: "2".into(),
            },
            created("0xcoin", "0x2::coin::Coin<0x2::sui::SUI>"),
            created("0xfirst", "0xpkg::linktree_profile::LinkTreeProfile"),
            created("0xsecond", "0xpkg::linktree_profile::LinkTreeProfile"),
        ];

        assert_eq!(find_created_object(&changes, "LinkTreeProfile"), Some("0xfirst"));
        assert_eq!(find_created_object(&changes, "Registry"), None);
        assert_eq!(find_created_object(&[], "LinkTreeProfile"), None);
    }

    #[test]
    fn test_outcome_message() {
        let mut outcome = CreateOutcome {
            digest: "D".into(),
            profile_id: Some("0xabc".into()),
            links_added: 1,
            link_failures: Vec::new(),
        };
        assert!(outcome.message().contains("Profile ID:\n0xabc"));

        outcome.link_failures.push(LinkFailure {
            link: Link::new("x", "y"),
            error: "boom".into(),
        });
        assert!(outcome.message().ends_with("1 of 2 links could not be added."));

        outcome.profile_id = None;
        assert!(outcome.message().starts_with("Profile created successfully!"));
        assert!(!outcome.message().contains("Profile ID"));
    }
}

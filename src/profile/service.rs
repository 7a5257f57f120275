//! Profile Service
//!
//! Orchestrates the create and view flows against a [`LedgerClient`].

use std::sync::Arc;

use super::create::{add_link_call, create_profile_call, find_created_object, CreateOutcome, LinkFailure};
use super::error::{ProfileError, ProfileResult};
use super::types::{parse_object_id, Link, Profile, ProfileDraft};
use super::view::parse_profile;
use crate::config::ContractConfig;
use crate::ledger::LedgerClient;
use crate::wallet::TransactionSigner;

/// Create and view profiles held by the ledger
pub struct ProfileService {
    ledger: Arc<dyn LedgerClient>,
    contract: ContractConfig,
}

impl ProfileService {
    pub fn new(ledger: Arc<dyn LedgerClient>, contract: ContractConfig) -> Self {
        Self { ledger, contract }
    }

    pub fn contract(&self) -> &ContractConfig {
        &self.contract
    }

    pub fn ledger(&self) -> &Arc<dyn LedgerClient> {
        &self.ledger
    }

    /// Create a profile, then attach its links one by one
    ///
    /// Links are attached strictly in order, each awaited before the next.
    /// A failed link is recorded and skipped; links already attached stay.
    pub async fn create(
        &self,
        signer: Option<&dyn TransactionSigner>,
        draft: &ProfileDraft,
    ) -> ProfileResult<CreateOutcome> {
        let signer = signer.ok_or(ProfileError::WalletNotConnected)?;
        draft.validate()?;
        let (package_id, registry_id) = self.contract.require()?;

        tracing::info!(
            sender = %signer.address(),
            name = %draft.name,
            links = draft.links.len(),
            "Creating profile"
        );

        let call = create_profile_call(&self.contract, package_id, registry_id, draft);
        let executed = self
            .ledger
            .sign_and_execute(signer, &call)
            .await
            .map_err(ProfileError::Create)?;

        let block = self
            .ledger
            .wait_for_transaction(&executed.digest)
            .await
            .map_err(ProfileError::Create)?;

        let profile_id =
            find_created_object(block.object_changes(), &self.contract.profile_type_marker)
                .map(str::to_string);

        let mut outcome = CreateOutcome {
            digest: executed.digest,
            profile_id,
            links_added: 0,
            link_failures: Vec::new(),
        };

        match &outcome.profile_id {
            Some(profile_id) => {
                tracing::info!(profile_id = %profile_id, digest = %outcome.digest, "Profile created");
                if !draft.links.is_empty() {
                    let (added, failures) = self
                        .add_links(signer, package_id, profile_id, &draft.links)
                        .await;
                    outcome.links_added = added;
                    outcome.link_failures = failures;
                }
            }
            None => {
                tracing::warn!(
                    digest = %outcome.digest,
                    marker = %self.contract.profile_type_marker,
                    "Profile object not found in object changes"
                );
            }
        }

        Ok(outcome)
    }

    async fn add_links(
        &self,
        signer: &dyn TransactionSigner,
        package_id: &str,
        profile_id: &str,
        links: &[Link],
    ) -> (usize, Vec<LinkFailure>) {
        let mut added = 0;
        let mut failures = Vec::new();

        for link in links {
            let call = add_link_call(&self.contract, package_id, profile_id, link);
            match self.ledger.sign_and_execute(signer, &call).await {
                Ok(executed) => {
                    tracing::debug!(label = %link.label, digest = %executed.digest, "Link added");
                    added += 1;
                }
                Err(e) => {
                    tracing::warn!(label = %link.label, url = %link.url, error = %e, "Failed to add link");
                    failures.push(LinkFailure {
                        link: link.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        (added, failures)
    }

    /// Read a profile by object id
    pub async fn fetch(&self, object_id: &str) -> ProfileResult<Profile> {
        let object_id = parse_object_id(object_id)?;
        tracing::debug!(object_id = %object_id, "Fetching profile");

        let response = self
            .ledger
            .get_object(&object_id)
            .await
            .map_err(ProfileError::Fetch)?;

        parse_profile(&object_id, &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::mock::{move_object, MockLedger};
    use crate::ledger::CallArg;
    use crate::profile::Theme;
    use crate::wallet::Wallet;
    use serde_json::json;

    const PROFILE_TYPE: &str = "0xpkg::linktree_profile::LinkTreeProfile";

    fn contract() -> ContractConfig {
        ContractConfig {
            package_id: Some("0xpkg".to_string()),
            registry_id: Some("0xreg".to_string()),
            ..Default::default()
        }
    }

    fn service(ledger: Arc<MockLedger>) -> ProfileService {
        ProfileService::new(ledger, contract())
    }

    fn draft_with_links() -> ProfileDraft {
        ProfileDraft::new("alice", "builder")
            .link(Link::new("Twitter", "https://x.com/a"))
            .link(Link::new("GitHub", "https://github.com/a"))
            .link(Link::new("Blog", "https://a.dev"))
    }

    #[tokio::test]
    async fn test_create_then_links_in_order() {
        let ledger = Arc::new(MockLedger::new().with_created("0xprofile", PROFILE_TYPE));
        let wallet = Wallet::from_secret([1u8; 32]);

        let outcome = service(ledger.clone())
            .create(Some(&wallet), &draft_with_links())
            .await
            .unwrap();

        assert_eq!(outcome.profile_id.as_deref(), Some("0xprofile"));
        assert_eq!(outcome.digest, "digest-1");
        assert_eq!(outcome.links_added, 3);
        assert!(outcome.link_failures.is_empty());

        let calls = ledger.recorded_calls();
        let functions: Vec<&str> = calls.iter().map(|c| c.function.as_str()).collect();
        assert_eq!(functions, vec!["create_profile", "add_link", "add_link", "add_link"]);

        let labels: Vec<&str> = calls[1..].iter().map(|c| c.arguments[1].as_str()).collect();
        assert_eq!(labels, vec!["Twitter", "GitHub", "Blog"]);
        assert!(calls[1..]
            .iter()
            .all(|c| c.arguments[0] == CallArg::object("0xprofile")));

        let signers = ledger.signers.lock().unwrap().clone();
        assert!(signers.iter().all(|s| s == wallet.address()));
    }

    #[tokio::test]
    async fn test_failed_link_is_skipped() {
        let ledger = Arc::new(
            MockLedger::new()
                .with_created("0xprofile", PROFILE_TYPE)
                .with_failing_link("GitHub"),
        );
        let wallet = Wallet::from_secret([1u8; 32]);

        let outcome = service(ledger.clone())
            .create(Some(&wallet), &draft_with_links())
            .await
            .unwrap();

        assert_eq!(outcome.links_added, 2);
        assert_eq!(outcome.link_failures.len(), 1);
        assert_eq!(outcome.link_failures[0].link.label, "GitHub");

        // The link after the failure is still attempted
        let calls = ledger.recorded_calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[3].arguments[1].as_str(), "Blog");
    }

    #[tokio::test]
    async fn test_no_profile_object_skips_links() {
        let ledger = Arc::new(
            MockLedger::new().with_created("0xcoin", "0x2::coin::Coin<0x2::sui::SUI>"),
        );
        let wallet = Wallet::from_secret([1u8; 32]);

        let outcome = service(ledger.clone())
            .create(Some(&wallet), &draft_with_links())
            .await
            .unwrap();

        assert_eq!(outcome.profile_id, None);
        assert_eq!(outcome.links_added, 0);
        assert_eq!(ledger.recorded_calls().len(), 1);
        assert_eq!(outcome.message(), "Profile created successfully!");
    }

    #[tokio::test]
    async fn test_validation_blocks_submission() {
        let ledger = Arc::new(MockLedger::new());
        let wallet = Wallet::from_secret([1u8; 32]);

        let err = service(ledger.clone())
            .create(Some(&wallet), &ProfileDraft::new("alice", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ProfileError::MissingRequiredFields));

        let neon = ProfileDraft::new("alice", "builder").theme(Theme::from("neon"));
        let err = service(ledger.clone())
            .create(Some(&wallet), &neon)
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::UnknownTheme(ref t) if t == "neon"));

        assert!(ledger.recorded_calls().is_empty());
    }

    #[tokio::test]
    async fn test_wallet_required() {
        let ledger = Arc::new(MockLedger::new());

        let err = service(ledger.clone())
            .create(None, &draft_with_links())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Please connect your wallet first");
        assert!(ledger.recorded_calls().is_empty());
    }

    #[tokio::test]
    async fn test_contract_required() {
        let ledger = Arc::new(MockLedger::new());
        let wallet = Wallet::from_secret([1u8; 32]);
        let service = ProfileService::new(ledger.clone(), ContractConfig::default());

        let err = service
            .create(Some(&wallet), &draft_with_links())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Contract not configured. Check config file");
        assert!(ledger.recorded_calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_message() {
        let ledger = Arc::new(MockLedger::new().with_failing_create());
        let wallet = Wallet::from_secret([1u8; 32]);

        let err = service(ledger.clone())
            .create(Some(&wallet), &draft_with_links())
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to create profile: "));
        assert_eq!(ledger.recorded_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_profile() {
        let ledger = Arc::new(MockLedger::new().with_object(
            "0xabc",
            move_object(
                "0xabc",
                json!({ "name": "alice", "bio": "hi", "theme": "dark", "updated_at": "5", "links": [] }),
            ),
        ));

        let profile = service(ledger).fetch(" 0xabc ").await.unwrap();
        assert_eq!(profile.id, "0xabc");
        assert_eq!(profile.name, "alice");
        assert_eq!(profile.updated_at, 5);
    }

    #[tokio::test]
    async fn test_fetch_missing_and_invalid_id() {
        let service = service(Arc::new(MockLedger::new()));

        let err = service.fetch("0xdead").await.unwrap_err();
        assert!(matches!(err, ProfileError::NotFound));

        let err = service.fetch("not-an-id").await.unwrap_err();
        assert!(matches!(err, ProfileError::InvalidObjectId(_)));
    }
}

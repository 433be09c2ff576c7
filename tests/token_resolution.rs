// tests/token_resolution.rs

use goreleaser_step::config::SecretSection;
use goreleaser_step::errors::StepError;
use goreleaser_step::secrets::{first_token, SecretRecord, TokenResolver};
use goreleaser_step_test_utils::builders::{secret_without_token, token_secret};
use goreleaser_step_test_utils::fake_store::FakeSecretStore;
use goreleaser_step_test_utils::init_tracing;

const ACME_SELECTOR: &str = "jenkins.io/githubapp-owner=acme";
const FALLBACK_SELECTOR: &str = "jenkins.io/kind=git,jenkins.io/service-kind=github";

fn resolver(store: &FakeSecretStore) -> TokenResolver<FakeSecretStore> {
    TokenResolver::new(store.clone(), &SecretSection::default())
}

#[tokio::test]
async fn organisation_token_wins_without_fallback_query() {
    init_tracing();
    let store = FakeSecretStore::new()
        .with_secrets(ACME_SELECTOR, vec![token_secret("acme-app", "abc123")])
        .with_secrets(FALLBACK_SELECTOR, vec![token_secret("generic", "zzz")]);

    let token = resolver(&store).resolve("acme").await.unwrap();

    assert_eq!(token, "abc123");
    assert_eq!(store.queries(), vec![ACME_SELECTOR.to_string()]);
}

#[tokio::test]
async fn first_non_empty_token_in_listing_order_is_used() {
    let store = FakeSecretStore::new().with_secrets(
        ACME_SELECTOR,
        vec![
            secret_without_token("no-field"),
            token_secret("empty", ""),
            token_secret("first", "first-token"),
            token_secret("second", "second-token"),
        ],
    );

    let token = resolver(&store).resolve("acme").await.unwrap();
    assert_eq!(token, "first-token");
}

#[tokio::test]
async fn empty_organisation_tokens_fall_back_to_generic_selector() {
    let store = FakeSecretStore::new()
        .with_secrets(
            ACME_SELECTOR,
            vec![token_secret("empty", ""), secret_without_token("missing")],
        )
        .with_secrets(FALLBACK_SELECTOR, vec![token_secret("git-github", "fallback-token")]);

    let token = resolver(&store).resolve("acme").await.unwrap();

    assert_eq!(token, "fallback-token");
    assert_eq!(
        store.queries(),
        vec![ACME_SELECTOR.to_string(), FALLBACK_SELECTOR.to_string()]
    );
}

#[tokio::test]
async fn not_found_is_treated_as_empty_for_both_selectors() {
    let store = FakeSecretStore::new()
        .with_not_found(ACME_SELECTOR)
        .with_secrets(FALLBACK_SELECTOR, vec![token_secret("git-github", "tok")]);
    assert_eq!(resolver(&store).resolve("acme").await.unwrap(), "tok");

    let store = FakeSecretStore::new()
        .with_not_found(ACME_SELECTOR)
        .with_not_found(FALLBACK_SELECTOR);
    let err = resolver(&store).resolve("acme").await.unwrap_err();
    assert!(matches!(err, StepError::NoSecretFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn exhausted_lookup_names_both_selectors() {
    let store = FakeSecretStore::new();

    let err = resolver(&store).resolve("acme").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("could not find a secret for selector {ACME_SELECTOR} or {FALLBACK_SELECTOR}")
    );
    match err {
        StepError::NoSecretFound { primary, fallback } => {
            assert_eq!(primary, ACME_SELECTOR);
            assert_eq!(fallback, FALLBACK_SELECTOR);
        }
        other => panic!("Expected NoSecretFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn store_failure_is_fatal_and_names_the_selector() {
    let store = FakeSecretStore::new()
        .with_failure(ACME_SELECTOR, "forbidden: secrets is forbidden")
        .with_secrets(FALLBACK_SELECTOR, vec![token_secret("git-github", "tok")]);

    let err = resolver(&store).resolve("acme").await.unwrap_err();

    match &err {
        StepError::SecretList { selector, source } => {
            assert_eq!(selector, ACME_SELECTOR);
            assert!(source.to_string().contains("forbidden"));
        }
        other => panic!("Expected SecretList, got: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        format!("failed to get secrets for selector: {ACME_SELECTOR}")
    );
    assert_eq!(store.queries(), vec![ACME_SELECTOR.to_string()]);
}

#[tokio::test]
async fn fallback_store_failure_is_fatal() {
    let store = FakeSecretStore::new().with_failure(FALLBACK_SELECTOR, "connection refused");

    let err = resolver(&store).resolve("acme").await.unwrap_err();

    assert!(
        matches!(&err, StepError::SecretList { selector, .. } if selector == FALLBACK_SELECTOR),
        "got {err:?}"
    );
}

#[tokio::test]
async fn invalid_organisation_is_rejected_before_any_query() {
    let store = FakeSecretStore::new();

    for org in ["acme,jenkins.io/kind=git", "acme corp", "-acme", "acme!", ""] {
        let err = resolver(&store).resolve(org).await.unwrap_err();
        assert!(
            matches!(&err, StepError::InvalidOrganisation(o) if o == org),
            "org {org:?} gave {err:?}"
        );
    }
    assert!(store.queries().is_empty());
}

#[tokio::test]
async fn custom_secret_section_changes_selectors_and_field() {
    let section = SecretSection {
        owner_label: "example.com/owner".to_string(),
        fallback_selector: "example.com/kind=github".to_string(),
        token_field: "token".to_string(),
    };
    let store = FakeSecretStore::new().with_secrets(
        "example.com/owner=acme",
        vec![
            token_secret("wrong-field", "ignored"),
            SecretRecord::new("right-field").with_field("token", "custom"),
        ],
    );

    let token = TokenResolver::new(store.clone(), &section)
        .resolve("acme")
        .await
        .unwrap();

    assert_eq!(token, "custom");
}

#[test]
fn non_utf8_tokens_are_skipped() {
    let secrets = vec![
        SecretRecord::new("binary").with_field("password", vec![0xff, 0xfe, 0x00]),
        token_secret("text", "ok"),
    ];

    assert_eq!(first_token(&secrets, "password").as_deref(), Some("ok"));
    assert_eq!(first_token(&secrets[..1], "password"), None);
}

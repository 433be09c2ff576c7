// tests/properties.rs

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::PathBuf;

use proptest::prelude::*;
use goreleaser_step::errors::StepError;
use goreleaser_step::exec::{ExecutionRequest, RealProcessLauncher};
use goreleaser_step::secrets::{organisation_selector, validate_organisation};

fn env_key() -> impl Strategy<Value = String> {
    "[A-Z_][A-Z0-9_]{0,8}"
}

proptest! {
    #[cfg(unix)]
    #[test]
    fn child_env_changes_are_exactly_the_overrides_plus_path(
        overrides in proptest::collection::btree_map(env_key(), "[ -~]{0,12}", 0..8),
    ) {
        prop_assume!(!overrides.contains_key("PATH"));

        let request = overrides
            .iter()
            .fold(ExecutionRequest::new("goreleaser"), |req, (k, v)| req.with_env(k.as_str(), v.as_str()));
        let launcher = RealProcessLauncher::new(Some(PathBuf::from("/opt/jx/bin")));
        let cmd = launcher.command_for(&request, Some(OsStr::new("/usr/bin"))).unwrap();

        let envs: BTreeMap<String, Option<String>> = cmd
            .as_std()
            .get_envs()
            .map(|(k, v)| (k.to_string_lossy().into_owned(), v.map(|v| v.to_string_lossy().into_owned())))
            .collect();

        let mut expected: BTreeMap<String, Option<String>> = overrides
            .iter()
            .map(|(k, v)| (k.clone(), Some(v.clone())))
            .collect();
        expected.insert("PATH".to_string(), Some("/usr/bin:/opt/jx/bin".to_string()));

        prop_assert_eq!(envs, expected);
    }

    #[test]
    fn valid_organisations_are_interpolated_verbatim(
        org in "[a-z0-9]([-a-z0-9_.]{0,40}[a-z0-9])?",
    ) {
        let selector = organisation_selector("jenkins.io/githubapp-owner", &org).unwrap();
        prop_assert_eq!(selector, format!("jenkins.io/githubapp-owner={org}"));
    }

    #[test]
    fn selector_operators_are_rejected(
        prefix in "[a-z]{1,5}",
        op in prop::sample::select(vec![",", "=", "!", " ", "(", ")"]),
        suffix in "[a-z]{1,5}",
    ) {
        let org = format!("{prefix}{op}{suffix}");
        let rejected = matches!(validate_organisation(&org), Err(StepError::InvalidOrganisation(_)));
        prop_assert!(rejected);
    }
}

#[test]
fn overlong_organisation_is_rejected() {
    let org = "a".repeat(64);
    assert!(validate_organisation(&org).is_err());
    assert!(validate_organisation(&"a".repeat(63)).is_ok());
}

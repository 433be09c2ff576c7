// tests/logging_filter.rs

use goreleaser_step::cli::LogLevel;
use goreleaser_step::logging::build_filter;

#[test]
fn cli_level_takes_priority_over_env() {
    let filter = build_filter(Some(LogLevel::Debug), Some("error")).unwrap();
    let rendered = filter.to_string();

    assert!(rendered.contains("debug"), "{rendered}");
    assert!(rendered.contains("kube_client=warn"), "{rendered}");
}

#[test]
fn plain_env_level_is_accepted() {
    let rendered = build_filter(None, Some(" Warning ")).unwrap().to_string();
    assert!(rendered.contains("warn"), "{rendered}");
}

#[test]
fn env_directive_string_is_used_verbatim() {
    let rendered = build_filter(None, Some("goreleaser_step=trace,kube_client=info"))
        .unwrap()
        .to_string();

    assert!(rendered.contains("goreleaser_step=trace"), "{rendered}");
    assert!(rendered.contains("kube_client=info"), "{rendered}");
}

#[test]
fn defaults_to_info() {
    let rendered = build_filter(None, None).unwrap().to_string();
    assert!(rendered.contains("info"), "{rendered}");

    let rendered = build_filter(None, Some("   ")).unwrap().to_string();
    assert!(rendered.contains("info"), "{rendered}");
}

#[test]
fn garbage_env_value_is_rejected() {
    assert!(build_filter(None, Some("goreleaser_step=[")).is_err());
}

//! Unit tests for provider domain value objects.

use rstest::rstest;
use serde_json::json;

use crate::provider::domain::{
    EndpointDecl, EndpointMethod, ProviderDomainError, ProviderName, ProviderVersion, RoutePath,
    SecurityPolicy, StateHandle,
};
use crate::provider::tests::support::ok_handler;

// ── ProviderName validation ────────────────────────────────────────

#[rstest]
#[case("alpha")]
#[case("Alpha.Beta-2")]
#[case("with_underscore")]
#[case("v1.2.3")]
#[case("UPPER")]
#[case("a")]
fn valid_provider_names_are_accepted(#[case] input: &str) {
    let name = ProviderName::new(input);
    assert!(name.is_ok(), "expected '{input}' to be valid");
    assert_eq!(name.expect("valid name").as_str(), input);
}

#[rstest]
fn empty_provider_name_is_rejected() {
    let result = ProviderName::new("");
    assert!(matches!(result, Err(ProviderDomainError::EmptyProviderName)));
}

#[rstest]
#[case("with space")]
#[case("slash/name")]
#[case("qu?ery")]
#[case("emoji\u{1f980}")]
#[case("tab\tname")]
fn invalid_characters_in_provider_name_rejected(#[case] input: &str) {
    let result = ProviderName::new(input);
    assert!(matches!(
        result,
        Err(ProviderDomainError::InvalidProviderName(_))
    ));
}

#[rstest]
fn provider_name_preserves_case() {
    let name = ProviderName::new("MixedCase").expect("valid name");
    assert_eq!(name.as_str(), "MixedCase");
}

// ── ProviderVersion ────────────────────────────────────────────────

#[rstest]
fn declared_version_is_trimmed_and_kept_verbatim() {
    let version = ProviderVersion::new("  1.4.0-rc.1  ").expect("valid version");
    assert_eq!(version.as_str(), "1.4.0-rc.1");
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_version_is_rejected(#[case] input: &str) {
    let result = ProviderVersion::new(input);
    assert!(matches!(result, Err(ProviderDomainError::EmptyVersion)));
}

#[rstest]
fn fallback_version_is_all_zeroes() {
    assert_eq!(ProviderVersion::fallback().as_str(), "0.0.0");
    assert_eq!(ProviderVersion::default().as_str(), "0.0.0");
}

// ── RoutePath shape ────────────────────────────────────────────────

#[rstest]
#[case("")]
#[case("/items")]
#[case("/items/:id")]
#[case("/a/b/c")]
#[case("/v1/widgets/{id}")]
fn valid_routes_are_accepted(#[case] input: &str) {
    let route = RoutePath::new(input);
    assert!(route.is_ok(), "expected '{input}' to be valid");
    assert_eq!(route.expect("valid route").as_str(), input);
}

#[rstest]
#[case("/")]
#[case("items")]
#[case("/a//b")]
#[case("/trailing/")]
#[case("/has space")]
fn malformed_routes_are_rejected(#[case] input: &str) {
    let result = RoutePath::new(input);
    assert!(matches!(result, Err(ProviderDomainError::InvalidRoute(_))));
}

#[rstest]
fn empty_route_reports_empty() {
    let route = RoutePath::new("").expect("empty route is valid");
    assert!(route.is_empty());
}

// ── EndpointMethod parsing ─────────────────────────────────────────

#[rstest]
#[case("get", EndpointMethod::Get)]
#[case("GET", EndpointMethod::Get)]
#[case("Post", EndpointMethod::Post)]
#[case("DELETE", EndpointMethod::Delete)]
#[case("options", EndpointMethod::Options)]
#[case("patch", EndpointMethod::Patch)]
#[case("WS", EndpointMethod::Ws)]
fn methods_parse_case_insensitively(#[case] input: &str, #[case] expected: EndpointMethod) {
    let method = input.parse::<EndpointMethod>().expect("recognized method");
    assert_eq!(method, expected);
}

#[rstest]
#[case("FETCH")]
#[case("")]
#[case("getx")]
fn unrecognized_methods_are_rejected(#[case] input: &str) {
    assert!(input.parse::<EndpointMethod>().is_err());
}

#[rstest]
fn only_ws_is_streaming() {
    assert!(EndpointMethod::Ws.is_streaming());
    assert!(!EndpointMethod::Get.is_streaming());
    assert!(!EndpointMethod::Post.is_streaming());
}

// ── EndpointDecl builder ───────────────────────────────────────────

#[rstest]
fn endpoint_decl_carries_declared_fields() {
    let endpoint = EndpointDecl::new("get", "/items", ok_handler(json!([])))
        .with_openapi(json!({"summary": "list items"}))
        .with_security(SecurityPolicy::Disabled);

    assert_eq!(endpoint.method(), "get");
    assert_eq!(endpoint.route(), "/items");
    assert!(endpoint.openapi().is_some());
    assert!(matches!(endpoint.security(), SecurityPolicy::Disabled));
}

#[rstest]
fn endpoint_decl_defaults_to_inherited_security() {
    let endpoint = EndpointDecl::new("get", "/items", ok_handler(json!(null)));
    assert!(matches!(endpoint.security(), SecurityPolicy::Inherit));
    assert!(endpoint.openapi().is_none());
}

// ── StateHandle isolation ──────────────────────────────────────────

#[rstest]
fn state_handle_round_trips_values() {
    let state = StateHandle::new();
    assert!(state.is_empty());

    state.put("key", json!({"n": 1}));
    assert_eq!(state.get("key"), Some(json!({"n": 1})));
    assert_eq!(state.get("missing"), None);
}

#[rstest]
fn cloned_state_handles_share_storage() {
    let state = StateHandle::new();
    let alias = state.clone();

    alias.put("shared", json!(true));
    assert_eq!(state.get("shared"), Some(json!(true)));
}

#[rstest]
fn independent_state_handles_are_isolated() {
    let first = StateHandle::new();
    let second = StateHandle::new();

    first.put("only_here", json!(1));
    assert_eq!(second.get("only_here"), None);
}

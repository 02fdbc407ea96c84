//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_non_export_lines_in_mod_files, path_exists, read_relative,
};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn cli_does_not_construct_outbound_adapters() {
    let hits = find_lines_containing("src/adapter/inbound/cli", &["crate::adapter::outbound"]);

    assert!(
        hits.is_empty(),
        "CLI should obtain classifiers through the operator port: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_depends_on_ports_not_adapters() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "reqwest::"],
    );

    assert!(
        hits.is_empty(),
        "application layer should only reach providers through ports: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn cli_operator_bridge_uses_operator_name() {
    let source = read_relative("src/adapter/inbound/cli/operator.rs");
    assert!(
        source.contains("pub fn operator() -> Result<&'static dyn OperatorPort>"),
        "operator bridge should expose `operator()` capability accessor"
    );
}

#[test]
fn llm_contract_lives_in_outbound_port() {
    assert!(
        path_exists("src/port/outbound/llm.rs"),
        "LLM trait contract should live under port/outbound"
    );

    let classifier = read_relative("src/adapter/outbound/classifier/llm.rs");
    assert!(
        !classifier.contains("crate::adapter::outbound::llm::anthropic")
            && !classifier.contains("crate::adapter::outbound::llm::openai"),
        "classifier adapter should not depend on concrete llm adapters"
    );
    assert!(
        classifier.contains("crate::port::outbound::llm::Llm"),
        "classifier adapter should depend on outbound llm port contract"
    );
}

#[test]
fn operator_ports_are_transport_agnostic() {
    let hits = find_lines_containing("src/port/inbound/operator", &["std::path::Path", "PathBuf"]);

    assert!(
        hits.is_empty(),
        "operator ports should not depend on filesystem path types: {hits:#?}"
    );
}

//! End-to-end deploy command tests.

mod common;

use common::{linked_bytecode, TestEnv, LIBRARY_BYTECODE, LIBRARY_BYTECODE_ALT};

fn four_contract_project() -> TestEnv {
    let env = TestEnv::new();
    // Declaration order deliberately puts dependents first; the plan must
    // reorder them.
    env.write_manifest(&["Registry", "TaskMarket", "CDTLibrary", "AuthorityLibrary"]);
    env.write_artifact("CDTLibrary", LIBRARY_BYTECODE);
    env.write_artifact("AuthorityLibrary", LIBRARY_BYTECODE_ALT);
    env.write_artifact(
        "Registry",
        &linked_bytecode(&["CDTLibrary", "AuthorityLibrary"]),
    );
    env.write_artifact(
        "TaskMarket",
        &linked_bytecode(&["CDTLibrary", "AuthorityLibrary"]),
    );
    env
}

#[test]
fn deploys_libraries_before_dependents() {
    let env = four_contract_project();

    let result = env.run(&["deploy"]);
    assert_eq!(result.exit_code, 0, "{}", result.combined_output());

    let out = result.stdout;
    let pos = |name: &str| {
        out.find(&format!("{name} deployed"))
            .unwrap_or_else(|| panic!("{name} not deployed in output:\n{out}"))
    };
    assert!(pos("CDTLibrary") < pos("Registry"));
    assert!(pos("AuthorityLibrary") < pos("Registry"));
    assert!(pos("CDTLibrary") < pos("TaskMarket"));
    assert!(pos("AuthorityLibrary") < pos("TaskMarket"));
}

#[test]
fn records_all_contracts_in_the_ledger() {
    let env = four_contract_project();

    let result = env.run(&["deploy"]);
    assert_eq!(result.exit_code, 0, "{}", result.combined_output());

    let ledger = env.read_ledger();
    for name in ["CDTLibrary", "AuthorityLibrary", "Registry", "TaskMarket"] {
        assert!(ledger.contains(name), "ledger missing {name}:\n{ledger}");
    }
    assert!(ledger.contains("1337:"), "entries keyed by network:\n{ledger}");
}

#[test]
fn second_run_is_idempotent() {
    let env = four_contract_project();

    let first = env.run(&["deploy"]);
    assert_eq!(first.exit_code, 0, "{}", first.combined_output());
    let ledger_after_first = env.read_ledger();

    let second = env.run(&["deploy"]);
    assert_eq!(second.exit_code, 0, "{}", second.combined_output());

    assert!(second.stdout.contains("already deployed"));
    assert!(!second.stdout.contains("submitted"));
    assert!(second.stdout.contains("Nothing to deploy"));
    assert!(!first.stdout.contains("Nothing to deploy"));
    assert_eq!(env.read_ledger(), ledger_after_first);
}

#[test]
fn dry_run_writes_nothing() {
    let env = four_contract_project();

    let result = env.run(&["deploy", "--dry-run"]);
    assert_eq!(result.exit_code, 0, "{}", result.combined_output());

    assert!(result.stdout.contains("Would deploy, in order:"));
    assert!(!env.ledger_exists());
}

#[test]
fn cycle_is_rejected_before_any_deployment() {
    let env = TestEnv::new();
    env.write_manifest(&["A", "B"]);
    env.write_artifact("A", &linked_bytecode(&["B"]));
    env.write_artifact("B", &linked_bytecode(&["A"]));

    let result = env.run(&["deploy"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("dependency cycle detected"));
    assert!(!env.ledger_exists());
}

#[test]
fn unknown_reference_is_rejected() {
    let env = TestEnv::new();
    env.write_manifest(&["Registry"]);
    env.write_artifact("Registry", &linked_bytecode(&["CDTLibrary"]));

    let result = env.run(&["deploy"]);
    assert_eq!(result.exit_code, 1);
    assert!(result
        .stderr
        .contains("references unknown contract 'CDTLibrary'"));
    assert!(!env.ledger_exists());
}

#[test]
fn missing_manifest_is_an_error() {
    let env = TestEnv::new();

    let result = env.run(&["deploy"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid manifest"));
}

#[test]
fn json_mode_emits_ndjson_events() {
    let env = four_contract_project();

    let result = env.run(&["deploy", "--json"]);
    assert_eq!(result.exit_code, 0, "{}", result.combined_output());

    let mut events = Vec::new();
    for line in result.stdout.lines().filter(|l| !l.trim().is_empty()) {
        let value: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|e| panic!("bad NDJSON line {line}: {e}"));
        events.push(value["event"].as_str().unwrap_or_default().to_string());
    }

    assert_eq!(events.first().map(String::as_str), Some("started"));
    assert_eq!(events.last().map(String::as_str), Some("completed"));
    assert_eq!(events.iter().filter(|e| *e == "deployed").count(), 4);
}

#[test]
fn explicit_network_separates_ledger_entries() {
    let env = four_contract_project();

    let dev = env.run(&["deploy"]);
    assert_eq!(dev.exit_code, 0, "{}", dev.combined_output());

    let kovan = env.run(&["deploy", "--network", "42"]);
    assert_eq!(kovan.exit_code, 0, "{}", kovan.combined_output());
    // Nothing skipped: the dev entries do not satisfy network 42
    assert!(!kovan.stdout.contains("already deployed"));

    let ledger = env.read_ledger();
    assert!(ledger.contains("1337:CDTLibrary"));
    assert!(ledger.contains("42:CDTLibrary"));
}

//! Property tests for deployment planning.

use proptest::prelude::*;

use stevedore::{Bytecode, ContractSpec, LinkGraph};

/// Build a random acyclic dependency set: contract `i` may only depend on
/// contracts with a smaller index, so the input is a DAG by construction.
fn acyclic_specs() -> impl Strategy<Value = Vec<ContractSpec>> {
    (2usize..12).prop_flat_map(|n| {
        let edges = proptest::collection::vec(proptest::bool::ANY, n * (n - 1) / 2);
        edges.prop_map(move |edges| {
            let mut specs = Vec::with_capacity(n);
            let mut edge_iter = edges.into_iter();
            for i in 0..n {
                let mut deps = Vec::new();
                for j in 0..i {
                    if edge_iter.next().unwrap_or(false) {
                        deps.push(format!("C{j}"));
                    }
                }
                let mut code = String::from("6080");
                for dep in &deps {
                    code.push_str(&Bytecode::placeholder(dep));
                }
                code.push_str("55");
                specs.push(ContractSpec::new(
                    format!("C{i}"),
                    serde_json::json!([]),
                    Bytecode::new(code),
                ));
            }
            specs
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: For any acyclic manifest, planning succeeds and every
    /// dependency precedes its dependent.
    #[test]
    fn property_plan_respects_all_dependencies(specs in acyclic_specs()) {
        let graph = LinkGraph::build(&specs).expect("acyclic input must plan");
        let plan = graph.plan();

        prop_assert_eq!(plan.len(), specs.len());

        for spec in &specs {
            let own = plan.position(spec.name()).expect("contract in plan");
            for dep in spec.library_refs() {
                let dep_pos = plan.position(dep).expect("dependency in plan");
                prop_assert!(
                    dep_pos < own,
                    "{} planned at {} before its dependency {} at {}",
                    spec.name(), own, dep, dep_pos
                );
            }
        }
    }

    /// PROPERTY: Planning is deterministic.
    #[test]
    fn property_plan_is_deterministic(specs in acyclic_specs()) {
        let first = LinkGraph::build(&specs).unwrap().plan();
        let second = LinkGraph::build(&specs).unwrap().plan();
        prop_assert_eq!(first.order(), second.order());
    }

    /// PROPERTY: Linking a placeholder never changes bytecode length.
    #[test]
    fn property_linking_preserves_length(name in "[A-Za-z][A-Za-z0-9]{0,40}") {
        let code = Bytecode::new(format!("73{}55", Bytecode::placeholder(&name)));
        let linked = code.link(&name, alloy_primitives::Address::ZERO);
        prop_assert_eq!(code.as_str().len(), linked.as_str().len());
        prop_assert!(linked.is_fully_linked());
    }
}

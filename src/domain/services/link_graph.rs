//! Link graph and deployment planning.
//!
//! Pure domain logic: builds the "must deploy before" graph from contract
//! specs and produces a deterministic topological ordering. No I/O and no
//! chain calls happen here.

use std::collections::BTreeMap;

use crate::domain::entities::ContractSpec;
use crate::error::{StevedoreError, StevedoreResult};

/// Directed acyclic graph of deployment dependencies.
///
/// An edge from a contract to a library means the library must be deployed
/// and its address recorded before the contract can be linked.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    /// Contract names in declaration order
    names: Vec<String>,
    /// deps[i] holds the indices that must deploy before node i
    deps: Vec<Vec<usize>>,
}

impl LinkGraph {
    /// Build the graph from a declaration-ordered set of specs.
    ///
    /// Fails with `UnknownReference` if a library ref names a contract not
    /// in the set, and with `CyclicDependency` if the refs form a cycle.
    pub fn build(specs: &[ContractSpec]) -> StevedoreResult<Self> {
        let mut index = BTreeMap::new();
        for (i, spec) in specs.iter().enumerate() {
            index.insert(spec.name().to_string(), i);
        }

        let mut deps = vec![Vec::new(); specs.len()];
        for (i, spec) in specs.iter().enumerate() {
            for library in spec.library_refs() {
                let Some(&target) = index.get(library.as_str()) else {
                    return Err(StevedoreError::UnknownReference {
                        from: spec.name().to_string(),
                        to: library.clone(),
                    });
                };
                deps[i].push(target);
            }
        }

        let graph = Self {
            names: specs.iter().map(|s| s.name().to_string()).collect(),
            deps,
        };

        if let Some(cycle) = graph.find_cycle() {
            return Err(StevedoreError::CyclicDependency { cycle });
        }

        Ok(graph)
    }

    /// Depth-first search with a recursion-stack check. Returns the cycle
    /// path (first node repeated at the end) if one exists.
    fn find_cycle(&self) -> Option<Vec<String>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let n = self.names.len();
        let mut marks = vec![Mark::Unvisited; n];
        let mut path: Vec<usize> = Vec::new();

        // Iterative DFS; a stack frame is (node, next dep position).
        for start in 0..n {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            let mut stack = vec![(start, 0usize)];
            marks[start] = Mark::InProgress;
            path.push(start);

            while !stack.is_empty() {
                let (node, pos) = {
                    let frame = stack.last_mut().expect("stack is non-empty");
                    let current = *frame;
                    frame.1 += 1;
                    current
                };
                if pos < self.deps[node].len() {
                    let next = self.deps[node][pos];
                    match marks[next] {
                        Mark::Unvisited => {
                            marks[next] = Mark::InProgress;
                            path.push(next);
                            stack.push((next, 0));
                        }
                        Mark::InProgress => {
                            // Trim the path back to the first occurrence of `next`
                            let from = path.iter().position(|&p| p == next).unwrap_or(0);
                            let mut cycle: Vec<String> = path[from..]
                                .iter()
                                .map(|&p| self.names[p].clone())
                                .collect();
                            cycle.push(self.names[next].clone());
                            return Some(cycle);
                        }
                        Mark::Done => {}
                    }
                } else {
                    marks[node] = Mark::Done;
                    path.pop();
                    stack.pop();
                }
            }
        }

        None
    }

    /// Produce the deployment plan: a topological order with a
    /// declaration-order tie-break between ready nodes.
    pub fn plan(&self) -> DeploymentPlan {
        let n = self.names.len();
        let mut remaining: Vec<usize> = self.deps.iter().map(|d| d.len()).collect();
        let mut dependents = vec![Vec::new(); n];
        for (node, deps) in self.deps.iter().enumerate() {
            for &dep in deps {
                dependents[dep].push(node);
            }
        }

        let mut placed = vec![false; n];
        let mut order = Vec::with_capacity(n);
        // Kahn's algorithm; n is small, so scan for the lowest-index ready
        // node instead of keeping a priority queue.
        while order.len() < n {
            let next = (0..n)
                .find(|&i| !placed[i] && remaining[i] == 0)
                .expect("acyclic graph always has a ready node");
            placed[next] = true;
            order.push(self.names[next].clone());
            for &dependent in &dependents[next] {
                remaining[dependent] -= 1;
            }
        }

        DeploymentPlan { order }
    }
}

/// Ordered sequence of contract names to deploy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentPlan {
    order: Vec<String>,
}

impl DeploymentPlan {
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of a contract in the plan
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }
}

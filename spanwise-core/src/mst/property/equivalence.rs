//! Property 1: strategy equivalence.
//!
//! Kruskal's builder and Prim's forest mode must agree on total weight,
//! edge count, tree count, and connectivity for every input. When the input
//! is connected, single-component Prim runs from any start vertex must agree
//! as well. On small graphs both are also checked against the exhaustive
//! oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{KruskalBuilder, MstBuilder, MstResult, PrimBuilder, PrimMode, WeightedGraph};

use super::oracle::exhaustive_minimum_forest;
use super::types::MstFixture;

/// Runs the Kruskal/Prim equivalence property for the given fixture.
pub(super) fn run_strategy_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let kruskal = build(&KruskalBuilder::new(), &graph, fixture)?;
    let forest = build(&PrimBuilder::new().with_mode(PrimMode::Forest), &graph, fixture)?;

    compare("prim-forest", &kruskal, &forest, fixture)?;
    if forest.tree_count() != kruskal.tree_count() {
        return Err(TestCaseError::fail(format!(
            "tree count mismatch: kruskal={}, prim-forest={} ({})",
            kruskal.tree_count(),
            forest.tree_count(),
            fixture.describe(),
        )));
    }

    if kruskal.is_connected() {
        let last = fixture.vertex_count - 1;
        for start in [0, last / 2, last] {
            let single = build(&PrimBuilder::new().with_start(start), &graph, fixture)?;
            compare("prim", &kruskal, &single, fixture)?;
        }
    }

    Ok(())
}

/// Runs the exhaustive oracle property for a small fixture.
pub(super) fn run_oracle_property(fixture: &MstFixture) -> TestCaseResult {
    let Some(oracle) = exhaustive_minimum_forest(fixture.vertex_count, &fixture.edges) else {
        return Err(TestCaseError::reject("fixture too large for the oracle"));
    };
    let graph = fixture.graph();

    let strategies: [&dyn MstBuilder; 2] = [
        &KruskalBuilder::new(),
        &PrimBuilder::new().with_mode(PrimMode::Forest),
    ];
    for builder in strategies {
        let result = build(builder, &graph, fixture)?;
        if (result.total_weight() - oracle.total_weight).abs() > f64::EPSILON {
            return Err(TestCaseError::fail(format!(
                "{} weight {} differs from exhaustive minimum {} ({})",
                builder.strategy_name(),
                result.total_weight(),
                oracle.total_weight,
                fixture.describe(),
            )));
        }
        if result.edges().len() != oracle.edge_count
            || result.tree_count() != oracle.component_count
        {
            return Err(TestCaseError::fail(format!(
                "{} selected {} edges in {} trees, oracle expects {} edges in {} components ({})",
                builder.strategy_name(),
                result.edges().len(),
                result.tree_count(),
                oracle.edge_count,
                oracle.component_count,
                fixture.describe(),
            )));
        }
    }

    Ok(())
}

fn build(
    builder: &dyn MstBuilder,
    graph: &WeightedGraph,
    fixture: &MstFixture,
) -> Result<MstResult, TestCaseError> {
    builder.build(graph).map_err(|err| {
        TestCaseError::fail(format!(
            "{} failed: {err} ({})",
            builder.strategy_name(),
            fixture.describe()
        ))
    })
}

fn compare(
    label: &str,
    expected: &MstResult,
    actual: &MstResult,
    fixture: &MstFixture,
) -> TestCaseResult {
    if (expected.total_weight() - actual.total_weight()).abs() > f64::EPSILON {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, {label}={} ({})",
            expected.total_weight(),
            actual.total_weight(),
            fixture.describe(),
        )));
    }
    if expected.edges().len() != actual.edges().len() {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, {label}={} ({})",
            expected.edges().len(),
            actual.edges().len(),
            fixture.describe(),
        )));
    }
    if expected.is_connected() != actual.is_connected() {
        return Err(TestCaseError::fail(format!(
            "connectivity mismatch: kruskal={}, {label}={} ({})",
            expected.is_connected(),
            actual.is_connected(),
            fixture.describe(),
        )));
    }
    Ok(())
}

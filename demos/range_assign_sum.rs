//! Range assignment over a range-sum tree, with logging enabled.
//!
//! Run with `RUST_LOG=lazy_segment_tree=trace` to see every update and query.

use lazy_segment_tree::contract::{Assign, SumNode};
use lazy_segment_tree::{LazySegmentTree, TreeConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = TreeConfig::default().with_profiling(true);
    let mut tree = LazySegmentTree::<SumNode, Assign>::with_config(vec![1, 2, 3, 4, 5], config)?;
    println!("sum [0, 4] = {}", tree.query(0..=4)?.sum);

    tree.update(1..=3, 10)?;
    println!("assign 10 over [1, 3]");
    println!("sum [1, 3] = {}", tree.query(1..=3)?.sum);
    println!("sum [0, 4] = {}", tree.query(0..=4)?.sum);

    tree.update(0..=0, 100)?;
    println!("assign 100 at [0]");
    println!("sum [0, 1] = {}", tree.query(0..=1)?.sum);
    println!("value at 2 = {}", tree.get(2)?.sum);

    if let Err(err) = tree.query(3..=1) {
        println!("rejected [3, 1]: {err}");
    }

    if let Some(stats) = tree.stats() {
        println!(
            "{} updates, {} queries, {:.1} slot visits per operation",
            stats.updates,
            stats.queries,
            stats.visits_per_operation()
        );
    }
    println!("sequence = {:?}", tree.materialize());

    Ok(())
}

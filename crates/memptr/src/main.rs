//! Run the member-reference driver and print the accumulated value.

use memptr::{run, RunContext};

fn main() -> anyhow::Result<()> {
    let report = run(&RunContext::new())?;
    println!("{}", report.result);
    Ok(())
}

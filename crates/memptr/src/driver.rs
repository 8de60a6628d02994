//! The driver script
//!
//! One fixed path: build an `A`, bind and rebind member references,
//! call through them, then fold in a free function and `B::s`.

use std::fmt;

use crate::class::{A, B};
use crate::context::RunContext;
use crate::error::Result;
use crate::member::{FieldRef, MethodRef, MethodSlot};

/// One recorded step of a traced run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A member reference was (re)bound
    Bind {
        /// Variable name
        name: &'static str,
        /// Rendering of the new binding
        target: String,
    },

    /// An expression was evaluated into the accumulator
    Eval {
        /// Source form of the expression
        expr: &'static str,
        /// Accumulator after the step
        value: i32,
    },
}

/// Outcome of a driver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Final accumulated value
    pub result: i32,

    /// `a.j` at the end of the run
    pub j: i32,

    /// `a.jj` at the end of the run
    pub jj: i32,

    /// Recorded steps; empty unless the context asked for tracing
    pub steps: Vec<Step>,
}

impl RunReport {
    fn bind(&mut self, ctx: &RunContext, name: &'static str, target: &dyn fmt::Display) {
        if ctx.trace {
            self.steps.push(Step::Bind {
                name,
                target: target.to_string(),
            });
        }
    }

    fn eval(&mut self, ctx: &RunContext, expr: &'static str, value: i32) {
        if ctx.trace {
            self.steps.push(Step::Eval { expr, value });
        }
    }
}

/// Free helper: `2 + 13 * x`.
pub fn fum(x: i32) -> i32 {
    2i32.wrapping_add(x.wrapping_mul(13))
}

/// Run the driver script.
///
/// The accumulator `k` is overwritten by each call through a reference
/// and by the direct `a.bar(2)`; `fum(4)` and `B::s` are then added.
///
/// # Errors
///
/// Returns `InvalidReference` if a reference is used while null. The
/// script never does this, so an error here means the script is wrong.
pub fn run(ctx: &RunContext) -> Result<RunReport> {
    let mut report = RunReport::default();

    let mut a = A::new();
    a.j = 121;
    a.jj = 1331;

    let mut pmi = FieldRef::bind(&A::J);
    report.bind(ctx, "pmi", &pmi);
    pmi = FieldRef::null();
    report.bind(ctx, "pmi", &pmi);

    let pmf = MethodSlot::new(MethodRef::bind(&A::BAR));
    let pmf_p = pmf.pointer();
    report.bind(ctx, "pmf", &pmf.get());

    let mut k = pmf.invoke(&mut a, 3)?;
    report.eval(ctx, "(a.*pmf)(3)", k);

    pmi = FieldRef::bind(&A::JJ);
    report.bind(ctx, "pmi", &pmi);
    pmf.set(MethodRef::bind(&A::FOO));
    report.bind(ctx, "pmf", &pmf.get());

    k = pmf.invoke(&mut a, 4)?;
    report.eval(ctx, "(a.*pmf)(4)", k);

    k = pmf_p.invoke(&mut a, 5)?;
    report.eval(ctx, "(a.**pmf_p)(5)", k);

    k = pmi.project(&a)?;
    report.eval(ctx, "a.*pmi", k);

    k = a.bar(2);
    report.eval(ctx, "a.bar(2)", k);

    k = k.wrapping_add(fum(4));
    report.eval(ctx, "k += fum(4)", k);

    let _b = B::new();
    k = k.wrapping_add(B::s());
    report.eval(ctx, "k += B::s", k);

    report.result = k;
    report.j = a.j;
    report.jj = a.jj;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fum() {
        assert_eq!(fum(4), 54);
        assert_eq!(fum(0), 2);
    }

    #[test]
    fn test_untraced_run_records_nothing() {
        let report = run(&RunContext::new()).unwrap();
        assert!(report.steps.is_empty());
        assert_eq!(report.result, 411);
    }
}

//! Fixed-width console reporting for sweeps and steps.
//!
//! Output is a side effect gated by `params.output`; it never affects
//! control flow or convergence. Each row shows, per quantity, the residual
//! followed by the value, in 3-significant-digit scientific notation.

use crate::sweep::SweepReport;
use sndr_core::Real;

const COLUMNS: [&str; 5] = ["sweeps", "sup", "cupric", "theta", "eta"];
const WIDTH: usize = 20;
const SEP: &str = "   ";

/// Format a float as `d.dddE+dd` (two-digit signed exponent).
pub fn sci(value: Real) -> String {
    let s = format!("{value:.3E}");
    match s.split_once('E') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exponent),
            };
            format!("{mantissa}E{sign}{digits:0>2}")
        }
        None => s,
    }
}

pub fn format_header() -> String {
    let names = COLUMNS
        .iter()
        .map(|c| format!("{c:<WIDTH$}"))
        .collect::<Vec<_>>()
        .join(SEP);
    let rule = vec!["-".repeat(WIDTH); COLUMNS.len()].join(SEP);
    format!("{names}\n{rule}")
}

pub fn format_sweep_row(report: &SweepReport) -> String {
    let half = WIDTH / 2;
    let sweeps_cell = format!("{:<half$}{:half$}", report.sweep, "");
    let pair = |residual: Real, value: Real| format!("{:<11}{}", sci(residual), sci(value));
    [
        sweeps_cell,
        pair(report.sup_residual, report.sup_value),
        pair(report.cupric_residual, report.cupric_value),
        pair(report.theta_residual, report.theta_value),
        pair(0.0, report.eta),
    ]
    .join(SEP)
}

/// Print one sweep row, re-printing the header at the start of each step.
pub fn print_sweep_row(report: &SweepReport) {
    if report.sweep == 1 {
        println!("{}", format_header());
    }
    println!("{}", format_sweep_row(report));
}

pub fn print_step_banner(step: usize) {
    println!();
    println!("step: {step}");
    println!();
}

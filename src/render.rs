//! Human-readable program listings
//!
//! Lanes are listed highest first, matching how register constants are
//! written. A pair is shown once, at its higher lane, as `[lo,hi]`;
//! self-partnered lanes show as `[i,i]`.

use std::fmt::Write;

use crate::config::{KernelConfig, LoadMode, OptimizationPreference};
use crate::program::{CompiledProgram, RoundPlan};

/// `Pairs: (...)` annotation for one round
pub fn render_pairs(plan: &RoundPlan) -> String {
    let partner = &plan.partner;
    let pairs: Vec<String> = (0..partner.lanes())
        .rev()
        .filter(|&lane| partner.partner(lane) <= lane)
        .map(|lane| format!("[{},{}]", partner.partner(lane), lane))
        .collect();
    format!("Pairs: ({})", pairs.join(", "))
}

/// `Perm: (...)` annotation for one round, register order
pub fn render_perm(plan: &RoundPlan) -> String {
    let lanes: Vec<String> = plan
        .partner
        .to_register_order()
        .iter()
        .map(|p| format!("{:>2}", p))
        .collect();
    format!("Perm:  ({})", lanes.join(", "))
}

/// All annotations for one round
pub fn render_round(index: usize, plan: &RoundPlan) -> String {
    format!(
        "/* Round {} */\n/* {} */\n/* {} */\n/* Mask:  {:#x} */\n",
        index,
        render_pairs(plan),
        render_perm(plan),
        plan.mask.bits()
    )
}

/// Information header followed by every round
pub fn render_program(program: &CompiledProgram, config: &KernelConfig) -> String {
    let mut out = String::new();
    let preference = match config.preference {
        OptimizationPreference::Space => "space",
        OptimizationPreference::Uop => "uop",
    };
    let full = matches!(config.load_mode, LoadMode::Full);

    // Writing to a String cannot fail
    let _ = writeln!(out, "/*\n\nSorting Network Information:");
    let _ = writeln!(out, "\tSort Size                        : {}", program.size);
    let _ = writeln!(out, "\tUnderlying Sort Type             : {}", config.element);
    let _ = writeln!(out, "\tNetwork Generation Algorithm     : {}", program.family);
    let _ = writeln!(out, "\tNetwork Depth                    : {}", program.depth());
    let _ = writeln!(out, "\tComparators                      : {}", program.comparators());
    let _ = writeln!(out, "\tLanes                            : {}", program.lanes);
    let _ = writeln!(out, "\tOptimization Preference          : {}", preference);
    let _ = writeln!(out, "\tSIMD Instruction Set             : {}", config.instruction_set);
    let full = if full { "True" } else { "False" };
    let _ = writeln!(out, "\tFull Load & Store                : {}", full);
    let _ = writeln!(out, "\n */\n");

    for (index, plan) in program.rounds.iter().enumerate() {
        out.push_str(&render_round(index, plan));
        out.push('\n');
    }
    out
}

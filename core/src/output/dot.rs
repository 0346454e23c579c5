//! Render a synthesized program as a GraphViz `digraph`.
//!
//! Purely presentational: one box node per instruction, chained edges in
//! execution order, and the working string after each step as a second
//! label line. Carries no semantic contract back to the compiler.

use crate::script::Step;
use std::fmt::Write;

pub fn instructions_to_dot(source: &str, steps: &[Step]) -> String {
    let mut out = String::new();
    out.push_str("digraph tailscript {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    node [shape=box];\n");
    let _ = writeln!(
        out,
        "    start [label=\"start\\n\\\"{}\\\"\", style=rounded];",
        escape(source)
    );

    for (idx, step) in steps.iter().enumerate() {
        let _ = writeln!(
            out,
            "    s{idx} [label=\"{}\\n\\\"{}\\\"\"];",
            escape(&step.instruction.to_string()),
            escape(&step.after)
        );
    }

    if !steps.is_empty() {
        out.push_str("    start -> s0;\n");
    }
    for idx in 1..steps.len() {
        let _ = writeln!(out, "    s{} -> s{idx};", idx - 1);
    }

    out.push_str("}\n");
    out
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

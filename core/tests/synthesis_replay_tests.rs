mod common;

use common::REALIZABLE_PAIRS;
use tailscript::{
    align, compile, executor, synthesize, CompileConfig, CompileError, Instruction,
    SynthesisError,
};

#[test]
fn executor_replay_of_synthesized_programs_reaches_the_target() {
    for (source, target) in REALIZABLE_PAIRS {
        let alignment = align(source, target);
        let synthesis =
            synthesize(source, target, &alignment.ops).expect("pair is realizable");
        let instructions: Vec<Instruction> =
            synthesis.steps.iter().map(|s| s.instruction).collect();

        assert_eq!(
            executor::run(source, &instructions),
            *target,
            "replay for {source:?} -> {target:?}"
        );
        assert_eq!(synthesis.final_string, *target);
    }
}

#[test]
fn recorded_intermediates_match_an_independent_replay() {
    for (source, target) in REALIZABLE_PAIRS {
        let alignment = align(source, target);
        let synthesis =
            synthesize(source, target, &alignment.ops).expect("pair is realizable");
        let instructions: Vec<Instruction> =
            synthesis.steps.iter().map(|s| s.instruction).collect();

        let trace = executor::run_trace(source, &instructions);
        let recorded: Vec<&str> = synthesis.steps.iter().map(|s| s.after.as_str()).collect();
        assert_eq!(trace, recorded, "trace for {source:?} -> {target:?}");
    }
}

#[test]
fn instruction_length_law_holds_along_every_program() {
    for (source, target) in REALIZABLE_PAIRS {
        let alignment = align(source, target);
        let synthesis =
            synthesize(source, target, &alignment.ops).expect("pair is realizable");

        let mut len = source.chars().count() as i64;
        for step in &synthesis.steps {
            len += match step.instruction {
                Instruction::Append { .. } => 1,
                Instruction::DeleteTail => -1,
                Instruction::Rotate | Instruction::SubstituteTail { .. } => 0,
            };
            assert_eq!(step.after.chars().count() as i64, len);
        }
    }
}

#[test]
fn repair_pass_rotation_counts_are_reproducible() {
    let cases = [
        ("Haus", "Maus", 0u32),
        ("Haustier", "Mausstier", 8),
        ("Katzenfutter", "Hundemutter", 1),
        ("abcd", "ad", 1),
        ("kitten", "sitting", 6),
    ];
    for (source, target, expected) in cases {
        let alignment = align(source, target);
        let synthesis =
            synthesize(source, target, &alignment.ops).expect("pair is realizable");
        assert_eq!(
            synthesis.corrective_rotations, expected,
            "corrective rotations for {source:?} -> {target:?}"
        );
    }
}

#[test]
fn insert_heavy_scripts_from_empty_source_are_reported_unreachable() {
    // Each interior insert leaves the frame one rotation off; from an empty
    // source the drift compounds until the residue is not a pure rotation.
    let alignment = align("", "abc");
    let err = synthesize("", "abc", &alignment.ops).expect_err("not realizable");
    assert!(matches!(err, SynthesisError::Unreachable { .. }));

    let err = compile("", "abc", &CompileConfig::default()).expect_err("not realizable");
    assert!(matches!(
        err,
        CompileError::Synthesis(SynthesisError::Unreachable { .. })
    ));
}

#[test]
fn delete_insert_mix_can_exhaust_the_repair_bound() {
    let alignment = align("flaw", "lawn");
    let err = synthesize("flaw", "lawn", &alignment.ops).expect_err("not realizable");
    match err {
        SynthesisError::Unreachable { attempts, .. } => assert_eq!(attempts, 4),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_report_steps_replay_to_the_target() {
    let report = compile("Haustierl", "Mausstier", &CompileConfig::default())
        .expect("compile succeeds");
    let instructions: Vec<Instruction> = report.instructions().copied().collect();
    assert_eq!(executor::run("Haustierl", &instructions), "Mausstier");
    assert_eq!(report.final_string(), "Mausstier");
    assert_eq!(report.distance, 3);
    assert!(report.complete);
}

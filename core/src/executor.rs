//! The tail-only string machine.
//!
//! Four primitives over a `Vec<char>` working buffer, each total and
//! identity on the empty string where the contract says so, plus helpers to
//! run a whole instruction list and expose the string after each step.

use crate::script::Instruction;

/// `s -> s[1..] + s[0..1]`; identity on the empty string.
pub fn rotate_left_one(chars: &mut Vec<char>) {
    if !chars.is_empty() {
        chars.rotate_left(1);
    }
}

/// `s -> s + c`.
pub fn append(chars: &mut Vec<char>, ch: char) {
    chars.push(ch);
}

/// `s -> s[..len-1]`; identity on the empty string.
pub fn delete_tail(chars: &mut Vec<char>) {
    chars.pop();
}

/// `s -> s[..len-1] + c`; identity on the empty string.
pub fn substitute_tail(chars: &mut Vec<char>, ch: char) {
    if let Some(last) = chars.last_mut() {
        *last = ch;
    }
}

/// Apply a single instruction to the working buffer.
pub fn apply(instruction: &Instruction, chars: &mut Vec<char>) {
    match instruction {
        Instruction::Rotate => rotate_left_one(chars),
        Instruction::Append { ch } => append(chars, *ch),
        Instruction::DeleteTail => delete_tail(chars),
        Instruction::SubstituteTail { ch } => substitute_tail(chars, *ch),
    }
}

/// Apply `instructions` in order to `source` and return the final string.
pub fn run(source: &str, instructions: &[Instruction]) -> String {
    let mut chars: Vec<char> = source.chars().collect();
    for instruction in instructions {
        apply(instruction, &mut chars);
    }
    chars.into_iter().collect()
}

/// Apply `instructions` in order and return the string after every step.
pub fn run_trace(source: &str, instructions: &[Instruction]) -> Vec<String> {
    let mut chars: Vec<char> = source.chars().collect();
    let mut trace = Vec::with_capacity(instructions.len());
    for instruction in instructions {
        apply(instruction, &mut chars);
        trace.push(chars.iter().collect());
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_of(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn string_of(chars: &[char]) -> String {
        chars.iter().collect()
    }

    #[test]
    fn rotate_moves_head_to_tail() {
        let mut s = chars_of("Haus");
        rotate_left_one(&mut s);
        assert_eq!(string_of(&s), "ausH");
    }

    #[test]
    fn rotation_closure_restores_any_string() {
        for input in ["Haus", "a", "ab", "Mausstier", "äöü"] {
            let mut s = chars_of(input);
            for _ in 0..s.len() {
                rotate_left_one(&mut s);
            }
            assert_eq!(string_of(&s), input);
        }
    }

    #[test]
    fn primitives_are_identity_on_empty() {
        let mut s = Vec::new();
        rotate_left_one(&mut s);
        assert!(s.is_empty());
        delete_tail(&mut s);
        assert!(s.is_empty());
        substitute_tail(&mut s, 'x');
        assert!(s.is_empty());
    }

    #[test]
    fn append_grows_and_delete_shrinks() {
        let mut s = chars_of("au");
        append(&mut s, 's');
        assert_eq!(string_of(&s), "aus");
        delete_tail(&mut s);
        assert_eq!(string_of(&s), "au");
    }

    #[test]
    fn substitute_replaces_only_the_tail() {
        let mut s = chars_of("ausH");
        substitute_tail(&mut s, 'M');
        assert_eq!(string_of(&s), "ausM");
    }

    #[test]
    fn run_chains_instructions_in_order() {
        let program = [
            Instruction::Rotate,
            Instruction::SubstituteTail { ch: 'M' },
            Instruction::Rotate,
            Instruction::Rotate,
            Instruction::Rotate,
        ];
        assert_eq!(run("Haus", &program), "Maus");
    }

    #[test]
    fn run_trace_exposes_every_intermediate() {
        let program = [
            Instruction::Rotate,
            Instruction::SubstituteTail { ch: 'M' },
        ];
        assert_eq!(run_trace("Haus", &program), vec!["ausH", "ausM"]);
    }
}

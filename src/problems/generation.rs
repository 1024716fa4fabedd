//! Arithmetic problem generation.
//!
//! The operation is picked from the level (every 3 levels unlock the next one)
//! and operand ranges grow with the level.

use super::types::{Operation, Problem};
use crate::core::constants::*;
use rand::Rng;

/// Operation used at a given level: 0-2 add, 3-5 subtract, 6-8 multiply, 9+ divide.
pub fn operation_for_level(level: u32) -> Operation {
    let index = ((level / LEVELS_PER_OPERATION) as usize).min(Operation::ALL.len() - 1);
    Operation::ALL[index]
}

pub fn generate_problem(level: u32, rng: &mut impl Rng) -> Problem {
    let operation = operation_for_level(level);
    // Level 0 is a valid difficulty but would give empty operand ranges
    let scale = level.max(1) as i64;

    let (left, right, answer) = match operation {
        Operation::Addition => {
            let a = rng.gen_range(1..=ADDITION_RANGE_PER_LEVEL * scale);
            let b = rng.gen_range(1..=ADDITION_RANGE_PER_LEVEL * scale);
            (a, b, a + b)
        }
        Operation::Subtraction => {
            let a = rng.gen_range(1..=SUBTRACTION_RANGE_PER_LEVEL * scale);
            let b = rng.gen_range(1..=a);
            (a, b, a - b)
        }
        Operation::Multiplication => {
            let a = rng.gen_range(1..=MULTIPLICAND_RANGE_PER_LEVEL * scale);
            let b = rng.gen_range(1..=MULTIPLIER_MAX);
            (a, b, a * b)
        }
        Operation::Division => {
            // Built backwards from the quotient so there is never a remainder
            let divisor = rng.gen_range(1..=DIVISOR_MAX);
            let quotient = rng.gen_range(1..=QUOTIENT_MAX);
            (divisor * quotient, divisor, quotient)
        }
    };

    Problem {
        question: format!("{} {} {} = ?", left, operation.glyph(), right),
        answer,
        difficulty: level,
        operation,
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }
}

/// An arithmetic challenge with exactly one correct integer answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub question: String,
    pub answer: i64,
    pub difficulty: u32,
    pub operation: Operation,
}

impl Problem {
    pub fn is_correct(&self, answer: i64) -> bool {
        self.answer == answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        let glyphs: Vec<&str> = Operation::ALL.iter().map(|op| op.glyph()).collect();
        assert_eq!(glyphs, vec!["+", "-", "×", "÷"]);
    }

    #[test]
    fn test_is_correct() {
        let problem = Problem {
            question: "2 + 3 = ?".to_string(),
            answer: 5,
            difficulty: 1,
            operation: Operation::Addition,
        };
        assert!(problem.is_correct(5));
        assert!(!problem.is_correct(6));
    }
}

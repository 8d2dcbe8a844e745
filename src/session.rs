use log::debug;

use crate::interpreter::{EvalError, Evaluator, DEFAULT_BINDINGS};
use crate::parser::{parse_with_diagnostics, token_listing, tokenize, ParseError, ParseNode, Token};
use crate::Error;

/// Holds the raw text entered for each variable. Every evaluation starts from
/// a fresh [`Evaluator`], so one bad entry never leaks into the next run.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: Vec<(char, String)>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            inputs: DEFAULT_BINDINGS
                .iter()
                .map(|(name, value)| (*name, value.to_string()))
                .collect(),
        }
    }

    pub fn inputs(&self) -> &[(char, String)] {
        &self.inputs
    }

    pub fn set_input(&mut self, name: char, text: &str) {
        match self.inputs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, current)) => *current = text.to_string(),
            None => self.inputs.push((name, text.to_string())),
        }
    }

    /// Tokenizes and parses `input`, and evaluates it too when `evaluate` is
    /// set and the parse was clean. Lexing failures and empty input are
    /// returned as errors; everything later ends up in the report.
    pub fn process(&self, input: &str, evaluate: bool) -> Result<Report, Error> {
        let source = input.trim();
        if source.is_empty() {
            return Err(Error::EmptyInput);
        }
        debug!("Processing expression: {}", source);
        let tokens = tokenize(source)?;
        let outcome = parse_with_diagnostics(&tokens);
        let mut report = Report {
            source: source.to_string(),
            tokens,
            tree: outcome.tree,
            diagnostics: outcome.diagnostics,
            notes: vec![],
            result: None,
        };
        if !evaluate {
            return Ok(report);
        }
        match &report.tree {
            Some(tree) if report.diagnostics.is_empty() => {
                let evaluator = self.evaluator(&mut report.notes);
                report.result = Some(evaluator.evaluate(tree));
            }
            _ => report
                .notes
                .push("Evaluation skipped: the expression has syntax errors.".to_string()),
        }
        Ok(report)
    }

    fn evaluator(&self, notes: &mut Vec<String>) -> Evaluator {
        let mut evaluator = Evaluator::new();
        for (name, text) in &self.inputs {
            match text.trim().parse::<f64>() {
                Ok(value) => evaluator.define_variable(*name, value),
                Err(_) => {
                    let note = format!("Invalid value for variable {name}. Using default value.");
                    debug!("{}", note);
                    notes.push(note);
                }
            }
        }
        evaluator
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub source: String,
    pub tokens: Vec<Token>,
    pub tree: Option<ParseNode>,
    pub diagnostics: Vec<ParseError>,
    pub notes: Vec<String>,
    /// `None` unless evaluation was requested and attempted.
    pub result: Option<Result<f64, EvalError>>,
}

impl Report {
    pub fn value(&self) -> Option<f64> {
        match self.result {
            Some(Ok(value)) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Processing expression: {}\n", self.source)?;
        writeln!(f, "Tokens:\n{}", token_listing(&self.tokens))?;
        for error in &self.diagnostics {
            writeln!(f, "Error: {error}")?;
        }
        if self.diagnostics.is_empty() {
            writeln!(f, "Parsing completed successfully.\n")?;
        } else {
            writeln!(f, "Parsing completed with {} error(s).\n", self.diagnostics.len())?;
        }
        if let Some(tree) = &self.tree {
            writeln!(f, "Parse Tree:\n{tree}\n")?;
        }
        for note in &self.notes {
            writeln!(f, "{note}")?;
        }
        match &self.result {
            Some(Ok(value)) => writeln!(f, "\nResult: {value:?}"),
            Some(Err(err)) => writeln!(f, "\nError during evaluation: {err}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(Session::new().process("   ", true), Err(Error::EmptyInput));
        assert_eq!(Error::EmptyInput.to_string(), "Please enter an expression.");
    }

    #[test]
    fn test_parse_only() {
        let report = Session::new().process(" x + y * z ", false).unwrap();
        assert_eq!(report.source, "x + y * z");
        assert_eq!(report.tokens.len(), 6);
        assert!(report.result.is_none());
        assert_eq!(report.tree.unwrap().to_string(), "(+ x (* y z))");
    }

    #[test]
    fn test_evaluate_with_defaults() {
        let report = Session::new().process("x + y * z", true).unwrap();
        assert_eq!(report.value(), Some(31.0));
        assert!(report.notes.is_empty());
    }

    #[test]
    fn test_inputs_override_defaults() {
        let mut session = Session::new();
        session.set_input('x', "100");
        session.set_input('a', " 2.5 ");
        let report = session.process("x + a", true).unwrap();
        assert_eq!(report.value(), Some(102.5));
    }

    #[test]
    fn test_invalid_input_falls_back_to_default() {
        let mut session = Session::new();
        session.set_input('y', "seven");
        let report = session.process("y", true).unwrap();
        assert_eq!(report.value(), Some(7.0));
        assert_eq!(
            report.notes,
            vec!["Invalid value for variable y. Using default value.".to_string()]
        );
    }

    #[test]
    fn test_syntax_errors_skip_evaluation() {
        let report = Session::new().process("(x + y", true).unwrap();
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.result.is_none());
        assert!(report.to_string().contains("Error: expected ')'"));
    }

    #[test]
    fn test_evaluation_failure_is_reported() {
        let report = Session::new().process("x / (z - z)", true).unwrap();
        assert!(matches!(report.result, Some(Err(EvalError::DivisionByZero { .. }))));
        assert!(report.to_string().contains("Error during evaluation: cannot divide by zero"));
    }

    #[test]
    fn test_lex_error_is_returned() {
        assert!(matches!(
            Session::new().process("x ^ 2", true),
            Err(Error::Lex(_))
        ));
    }

    #[test]
    fn test_report_log() {
        let log = Session::new().process("(x + y) * z", true).unwrap().to_string();
        assert!(log.starts_with("Processing expression: (x + y) * z\n\nTokens:\n"));
        assert!(log.contains("*          STAR"));
        assert!(log.contains("Parsing completed successfully."));
        assert!(log.contains("Parse Tree:\n(* (+ x y) z)\n"));
        assert!(log.ends_with("\nResult: 51.0\n"));
    }
}

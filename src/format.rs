//! The plain text clause format understood by the command line front end.
//!
//! Each non blank line which does not start with `#` holds one or more clauses separated by
//! whitespace. A clause is a comma separated list of literals, and a literal is a variable name,
//! optionally prefixed with `~` to negate it:
//!
//! ```text
//! # (a v b) ^ (~a v c) ^ (~b v ~c)
//! a,b ~a,c
//! ~b,~c
//! ```

use std::io::BufRead;

use indexmap::IndexSet;
use thiserror::Error;

use crate::cnf::*;
use crate::solving::Trail;

/// What can go wrong while reading clauses. Line numbers start at 1; command line tokens are
/// numbered the same way.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("could not read the input")]
    Io(#[from] std::io::Error),

    #[error("line {line}: empty literal in `{token}`")]
    EmptyLiteral { line: usize, token: String },

    #[error("line {line}: invalid clause `{token}`")]
    Clause { line: usize, token: String, #[source] source: ClauseError },

    #[error("line {line}: no variable id left for `{name}`")]
    TooManyVariables { line: usize, name: String },
}

/// The variable standing for the `index`-th interned name (if it is within range)
fn variable_at(index: usize) -> Option<Variable> {
    uint::try_from(index + 1).ok().and_then(Variable::try_from_uint)
}

// -----------------------------------------------------------------------------------------------
/// # Names
/// Interns the textual variable names and maps them onto solver variables. The first name
/// encountered becomes `x1`, the second one `x2` and so on.
// -----------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct Names {
    names: IndexSet<String>
}

impl Names {
    pub fn new() -> Names {
        Names::default()
    }

    /// Returns the variable named `name`, creating it if needed. None when every variable id
    /// is already taken.
    pub fn intern(&mut self, name: &str) -> Option<Variable> {
        if let Some(index) = self.names.get_index_of(name) {
            return variable_at(index);
        }
        let v = variable_at(self.names.len())?;
        self.names.insert(name.to_string());
        Some(v)
    }

    /// Returns the variable named `name` if it was ever interned
    pub fn get(&self, name: &str) -> Option<Variable> {
        self.names.get_index_of(name).and_then(variable_at)
    }

    /// Returns the name of `v`
    pub fn name(&self, v: Variable) -> Option<&str> {
        self.names.get_index(v.to_usize() - 1).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    // ~~~ # Parsing ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    /// Parses one literal token (`name` or `~name`)
    pub fn parse_literal(&mut self, token: &str, line: usize) -> Result<Literal, FormatError> {
        let token = token.trim();
        let (polarity, name) = match token.strip_prefix('~') {
            Some(rest) => (Polarity::Negated, rest.trim()),
            None       => (Polarity::Asserted, token)
        };

        if name.is_empty() {
            return Err(FormatError::EmptyLiteral { line, token: token.to_string() });
        }
        match self.intern(name) {
            Some(v) => Ok(Literal::from_var(v, polarity)),
            None    => Err(FormatError::TooManyVariables { line, name: name.to_string() })
        }
    }

    /// Parses one clause token (comma separated literals)
    pub fn parse_clause(&mut self, token: &str, line: usize) -> Result<Clause, FormatError> {
        let mut literals = vec![];
        for l in token.split(',') {
            literals.push(self.parse_literal(l, line)?);
        }
        Clause::new(literals)
            .map_err(|source| FormatError::Clause { line, token: token.to_string(), source })
    }

    /// Parses one line of text and adds the clauses it holds to `formula`
    pub fn parse_line(&mut self, text: &str, line: usize, formula: &mut Formula) -> Result<(), FormatError> {
        let text = text.trim();

        // blank or comment
        if text.is_empty() || text.starts_with('#') { return Ok(()); }

        for token in text.split_whitespace() {
            formula.add(self.parse_clause(token, line)?);
        }
        Ok(())
    }

    /// Turns command line tokens (one clause per token) into a formula
    pub fn parse_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<Formula, FormatError> {
        let mut formula = Formula::new();
        for (i, token) in tokens.iter().enumerate() {
            formula.add(self.parse_clause(token.as_ref(), i + 1)?);
        }
        Ok(formula)
    }

    /// Reads every clause of `input`
    pub fn load<R: BufRead>(&mut self, input: R) -> Result<Formula, FormatError> {
        let mut formula = Formula::new();
        for (i, text) in input.lines().enumerate() {
            self.parse_line(&text?, i + 1, &mut formula)?;
        }
        Ok(formula)
    }

    // ~~~ # Rendering ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    pub fn render_literal(&self, l: Literal) -> String {
        let name = match self.name(l.var()) {
            Some(name) => name.to_string(),
            None       => l.var().to_string()
        };
        match l.polarity() {
            Polarity::Asserted => name,
            Polarity::Negated  => format!("~{}", name)
        }
    }

    pub fn render_clause(&self, c: &Clause) -> String {
        if c.is_empty() {
            return "<empty>".to_string();
        }
        c.literals()
            .map(|l| self.render_literal(l))
            .collect::<Vec<String>>()
            .join(" v ")
    }

    /// Renders a model as the space separated list of its literals, in assignment order
    pub fn render_model(&self, model: &Trail) -> String {
        model.iter()
            .map(|entry| self.render_literal(entry.literal()))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

//! Spreadsheet cell store and formula evaluation.
//!
//! Cells hold raw user input keyed by their `A1` label. Input starting with `=` is a formula:
//! terms joined by `+` or `-`, where a term is a number, a cell reference, or `SUM(...)` /
//! `AVERAGE(...)` over references, ranges (`A1:B3`), and numbers. Blank cells count as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column count (`A` through `J`).
pub const COLUMNS: u8 = 10;
/// Row count (`1` through `20`).
pub const ROWS: u16 = 20;
/// Text shown in a cell whose formula cannot be evaluated.
pub const ERROR_DISPLAY: &str = "#ERROR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Grid coordinate, zero-based column and one-based row.
pub struct CellRef {
    /// Column index, `0` is `A`.
    pub column: u8,
    /// Row number, starting at `1`.
    pub row: u16,
}

impl CellRef {
    /// Creates a reference if it lies inside the grid.
    pub fn new(column: u8, row: u16) -> Option<Self> {
        (column < COLUMNS && (1..=ROWS).contains(&row)).then_some(Self { column, row })
    }

    /// Parses `A1`-style labels, ignoring case.
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.trim().chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row = digits.parse().ok()?;
        Self::new(letter as u8 - b'A', row)
    }

    /// Column letter.
    pub fn column_letter(self) -> char {
        char::from(b'A' + self.column)
    }

    /// `A1`-style label.
    pub fn label(self) -> String {
        format!("{}{}", self.column_letter(), self.row)
    }
}

/// Column letters in display order.
pub fn column_letters() -> impl Iterator<Item = char> {
    (0..COLUMNS).map(|column| char::from(b'A' + column))
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Formula evaluation failures. All render as [`ERROR_DISPLAY`].
pub enum FormulaError {
    /// The formula text does not parse.
    #[error("syntax error at `{0}`")]
    Syntax(String),
    /// A reference points outside the grid.
    #[error("unknown reference `{0}`")]
    UnknownReference(String),
    /// A referenced cell holds text that is not a number.
    #[error("cell {0} is not a number")]
    NotANumber(String),
    /// A formula depends on itself.
    #[error("circular reference through {0}")]
    Circular(String),
    /// `AVERAGE` over no numeric cells.
    #[error("average of an empty range")]
    EmptyAverage,
    /// Unsupported function name.
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Function {
    Sum,
    Average,
}

#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Number(f64),
    Cell(CellRef),
    Range(CellRef, CellRef),
}

#[derive(Debug, Clone, PartialEq)]
enum Term {
    Number(f64),
    Cell(CellRef),
    Call(Function, Vec<Arg>),
}

#[derive(Debug, Clone, PartialEq)]
struct Formula {
    // The first term is always added.
    terms: Vec<(f64, Term)>,
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    fn error(&self) -> FormulaError {
        FormulaError::Syntax(self.rest().chars().take(12).collect())
    }

    fn eat(&mut self, ch: char) -> bool {
        self.skip_ws();
        if self.rest().starts_with(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        self.skip_ws();
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn formula(mut self) -> Result<Formula, FormulaError> {
        let mut terms = vec![(1.0, self.term()?)];
        loop {
            let sign = if self.eat('+') {
                1.0
            } else if self.eat('-') {
                -1.0
            } else {
                break;
            };
            terms.push((sign, self.term()?));
        }
        self.skip_ws();
        if self.rest().is_empty() {
            Ok(Formula { terms })
        } else {
            Err(self.error())
        }
    }

    fn number(&mut self) -> Result<Option<f64>, FormulaError> {
        let text = self.take_while(|c| c.is_ascii_digit() || c == '.');
        if text.is_empty() {
            return Ok(None);
        }
        text.parse().map(Some).map_err(|_| FormulaError::Syntax(text.to_string()))
    }

    fn cell(word: &str) -> Result<CellRef, FormulaError> {
        CellRef::parse(word).ok_or_else(|| FormulaError::UnknownReference(word.to_string()))
    }

    fn word(&mut self) -> &'a str {
        self.take_while(|c| c.is_ascii_alphanumeric())
    }

    fn term(&mut self) -> Result<Term, FormulaError> {
        if let Some(value) = self.number()? {
            return Ok(Term::Number(value));
        }
        let word = self.word();
        if word.is_empty() {
            return Err(self.error());
        }
        if !self.eat('(') {
            return Self::cell(word).map(Term::Cell);
        }

        let function = match word.to_ascii_uppercase().as_str() {
            "SUM" => Function::Sum,
            "AVERAGE" => Function::Average,
            _ => return Err(FormulaError::UnknownFunction(word.to_string())),
        };
        let mut args = Vec::new();
        if !self.eat(')') {
            loop {
                args.push(self.arg()?);
                if self.eat(')') {
                    break;
                }
                if !self.eat(',') {
                    return Err(self.error());
                }
            }
        }
        Ok(Term::Call(function, args))
    }

    fn arg(&mut self) -> Result<Arg, FormulaError> {
        if let Some(value) = self.number()? {
            return Ok(Arg::Number(value));
        }
        let word = self.word();
        if word.is_empty() {
            return Err(self.error());
        }
        let start = Self::cell(word)?;
        if !self.eat(':') {
            return Ok(Arg::Cell(start));
        }
        let end_word = self.word();
        let end = Self::cell(end_word)?;
        Ok(Arg::Range(start, end))
    }
}

fn range_cells(a: CellRef, b: CellRef) -> impl Iterator<Item = CellRef> {
    let (c0, c1) = (a.column.min(b.column), a.column.max(b.column));
    let (r0, r1) = (a.row.min(b.row), a.row.max(b.row));
    (r0..=r1).flat_map(move |row| (c0..=c1).map(move |column| CellRef { column, row }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Raw cell inputs keyed by `A1` label. Blank cells are not stored.
pub struct Sheet {
    cells: BTreeMap<String, String>,
}

impl Sheet {
    /// Raw input of a cell, empty when blank.
    pub fn raw(&self, cell: CellRef) -> &str {
        self.cells.get(&cell.label()).map_or("", String::as_str)
    }

    /// Replaces a cell's input. Blank input clears the cell.
    pub fn set(&mut self, cell: CellRef, input: &str) {
        if input.trim().is_empty() {
            self.cells.remove(&cell.label());
        } else {
            self.cells.insert(cell.label(), input.to_string());
        }
    }

    /// Number of non-blank cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether every cell is blank.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Text shown in the grid: evaluated formulas, or the raw input.
    pub fn display(&self, cell: CellRef) -> String {
        let raw = self.raw(cell);
        if !raw.starts_with('=') {
            return raw.to_string();
        }
        match self.evaluate(cell) {
            Ok(value) => format_number(value),
            Err(_) => ERROR_DISPLAY.to_string(),
        }
    }

    /// Numeric value of a cell.
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] for unparsable formulas, out-of-grid references, text in a
    /// numeric position, cycles, and empty averages.
    pub fn evaluate(&self, cell: CellRef) -> Result<f64, FormulaError> {
        self.value_of(cell, &mut Vec::new())
    }

    fn value_of(&self, cell: CellRef, visiting: &mut Vec<CellRef>) -> Result<f64, FormulaError> {
        let raw = self.raw(cell).trim();
        if raw.is_empty() {
            return Ok(0.0);
        }
        let Some(body) = raw.strip_prefix('=') else {
            return raw
                .parse::<f64>()
                .map_err(|_| FormulaError::NotANumber(cell.label()));
        };

        if visiting.contains(&cell) {
            return Err(FormulaError::Circular(cell.label()));
        }
        visiting.push(cell);
        let result = Parser::new(body)
            .formula()
            .and_then(|formula| self.eval_formula(&formula, visiting));
        visiting.pop();
        result
    }

    fn eval_formula(
        &self,
        formula: &Formula,
        visiting: &mut Vec<CellRef>,
    ) -> Result<f64, FormulaError> {
        let mut total = 0.0;
        for (sign, term) in &formula.terms {
            let value = match term {
                Term::Number(value) => *value,
                Term::Cell(cell) => self.value_of(*cell, visiting)?,
                Term::Call(function, args) => self.eval_call(*function, args, visiting)?,
            };
            total += sign * value;
        }
        Ok(total)
    }

    fn eval_call(
        &self,
        function: Function,
        args: &[Arg],
        visiting: &mut Vec<CellRef>,
    ) -> Result<f64, FormulaError> {
        let mut values = Vec::new();
        for arg in args {
            match arg {
                Arg::Number(value) => values.push(*value),
                Arg::Cell(cell) => values.push(self.value_of(*cell, visiting)?),
                Arg::Range(start, end) => {
                    for cell in range_cells(*start, *end) {
                        // Ranges skip blanks and text, like a desktop spreadsheet.
                        let raw = self.raw(cell).trim();
                        if raw.is_empty() || (!raw.starts_with('=') && raw.parse::<f64>().is_err()) {
                            continue;
                        }
                        values.push(self.value_of(cell, visiting)?);
                    }
                }
            }
        }

        let sum: f64 = values.iter().sum();
        match function {
            Function::Sum => Ok(sum),
            Function::Average if values.is_empty() => Err(FormulaError::EmptyAverage),
            Function::Average => Ok(sum / values.len() as f64),
        }
    }
}

/// Renders a value without trailing zeros.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }

    let mut text = format!("{value:.10}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cell(label: &str) -> CellRef {
        CellRef::parse(label).expect("valid label")
    }

    fn sheet(entries: &[(&str, &str)]) -> Sheet {
        let mut sheet = Sheet::default();
        for (label, input) in entries {
            sheet.set(cell(label), input);
        }
        sheet
    }

    #[test]
    fn labels_parse_inside_grid_only() {
        assert_eq!(cell("a1"), CellRef { column: 0, row: 1 });
        assert_eq!(cell("J20").label(), "J20");
        assert_eq!(CellRef::parse("K1"), None);
        assert_eq!(CellRef::parse("A21"), None);
        assert_eq!(CellRef::parse("A0"), None);
        assert_eq!(CellRef::parse("AA1"), None);
        assert_eq!(column_letters().collect::<String>(), "ABCDEFGHIJ");
    }

    #[test]
    fn sum_over_rectangular_range() {
        let sheet = sheet(&[
            ("A1", "1"),
            ("B1", "2"),
            ("A2", "3"),
            ("B2", "4"),
            ("A3", "5"),
            ("B3", "6"),
            ("C1", "=SUM(A1:B3)"),
        ]);
        assert_eq!(sheet.display(cell("C1")), "21");
    }

    #[test]
    fn average_and_reference_sums() {
        let sheet = sheet(&[
            ("A1", "2"),
            ("A2", "4"),
            ("A3", "hello"),
            ("B1", "=average(A1:A3)"),
            ("B2", "=A1 + A2 - 1"),
            ("B3", "=B1+B2+0.5"),
        ]);
        assert_eq!(sheet.display(cell("B1")), "3");
        assert_eq!(sheet.display(cell("B2")), "5");
        assert_eq!(sheet.display(cell("B3")), "8.5");
    }

    #[test]
    fn invalid_formulas_show_error() {
        let sheet = sheet(&[
            ("A1", "text"),
            ("B1", "=A1+1"),
            ("B2", "=SUM(A1:"),
            ("B3", "=MAX(A1)"),
            ("B4", "=Z9"),
            ("B5", "=AVERAGE(C1:C5)"),
            ("B6", "=1 +"),
        ]);
        for label in ["B1", "B2", "B3", "B4", "B5", "B6"] {
            assert_eq!(sheet.display(cell(label)), ERROR_DISPLAY, "{label}");
        }
        assert_eq!(
            sheet.evaluate(cell("B1")),
            Err(FormulaError::NotANumber("A1".to_string()))
        );
    }

    #[test]
    fn cycles_are_errors_not_overflows() {
        let sheet = sheet(&[("A1", "=B1"), ("B1", "=A1+1"), ("C1", "=SUM(C1:C2)")]);
        assert!(matches!(sheet.evaluate(cell("A1")), Err(FormulaError::Circular(_))));
        assert_eq!(sheet.display(cell("C1")), ERROR_DISPLAY);
    }

    #[test]
    fn blank_input_clears_cell_and_plain_text_displays_raw() {
        let mut sheet = sheet(&[("A1", "Revenue")]);
        assert_eq!(sheet.display(cell("A1")), "Revenue");
        sheet.set(cell("A1"), "  ");
        assert!(sheet.is_empty());
        assert_eq!(sheet.display(cell("A1")), "");
    }

    #[test]
    fn persisted_shape_is_a_flat_label_map() {
        let sheet = sheet(&[("A1", "1"), ("B2", "=A1")]);
        let json = serde_json::to_string(&sheet).expect("serialize");
        assert_eq!(json, r#"{"A1":"1","B2":"=A1"}"#);
    }
}

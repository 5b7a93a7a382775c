#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static LITERAL: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
static OPS: &[char] = &['+', '-', '*', '/', '^', '(', ')'];

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // drop leading whitespace so the next scan starts on a token
    pub fn ignore_ws(&mut self) {
        self.skip_all(WHITE);
        self.ignore();
    }

    // A literal run is any stretch of digits and decimal points; the
    // tokenizer decides whether the run makes a well formed number.
    pub fn scan_literal_run(&mut self) -> Option<String> {
        if self.skip_all(LITERAL) {
            Some(self.extract_string())
        } else {
            None
        }
    }

    // single char operators and parens only
    pub fn scan_expr_op(&mut self) -> Option<String> {
        self.accept_any(OPS)?;
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;

    #[test]
    fn literal_runs() {
        let tests = vec!["987", "41.98", "0.5", ".5", "3.", "3..4", "1.2.3"];
        for t in tests.iter() {
            let run = Scanner::new(t.chars()).scan_literal_run();
            assert_eq!(Some(t.to_string()), run);
        }
        assert_eq!(Scanner::new("x12".chars()).scan_literal_run(), None);
    }

    #[test]
    fn literal_run_stops_at_op() {
        let mut s = Scanner::new("12.5+8".chars());
        assert_eq!(s.scan_literal_run(), Some("12.5".to_string()));
        assert_eq!(s.scan_expr_op(), Some("+".to_string()));
        assert_eq!(s.scan_literal_run(), Some("8".to_string()));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn expr_ops() {
        let tests = vec!["+", "-", "*", "/", "^", "(", ")"];
        for t in tests.iter() {
            let op = Scanner::new(t.chars()).scan_expr_op();
            assert_eq!(Some(t.to_string()), op);
        }
        assert_eq!(Scanner::new("%".chars()).scan_expr_op(), None);
        assert_eq!(Scanner::new("!".chars()).scan_expr_op(), None);
    }

    #[test]
    fn whitespace() {
        let mut s = Scanner::new("  \t 42".chars());
        s.ignore_ws();
        assert_eq!(s.scan_literal_run(), Some("42".to_string()));
    }
}

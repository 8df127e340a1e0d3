//! Body token utilities.
//!
//! Element bodies are opaque token sequences produced by an external
//! tokenizer. The core never looks at token payloads; the only capability
//! it needs is telling blank tokens apart from meaningful ones when
//! compacting a body onto a single line for inlining.

/// An opaque lexical token of an element body.
pub trait Term: Clone {
    /// True for a pure-whitespace token with no line break.
    fn is_whitespace(&self) -> bool;

    /// True for a token carrying a line break.
    fn is_newline(&self) -> bool;

    /// A single space token, used when collapsing blank runs.
    fn space() -> Self;
}

/// Compacts a body token sequence to a single logical line.
///
/// Leading and trailing whitespace/newline tokens are dropped and interior
/// blank runs collapse to one space token. Every other token passes through
/// untouched, string- and character-literal contents included.
pub fn one_liner<T: Term>(code: &[T]) -> Vec<T> {
    let mut line = Vec::with_capacity(code.len());
    let mut gap = false;
    for term in code {
        if term.is_whitespace() || term.is_newline() {
            // Blank run: remember it unless we are still before the first
            // meaningful token.
            gap = !line.is_empty();
        } else {
            if gap {
                line.push(T::space());
                gap = false;
            }
            line.push(term.clone());
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tok(&'static str);

    impl Term for Tok {
        fn is_whitespace(&self) -> bool {
            !self.0.is_empty() && self.0.chars().all(|c| c == ' ' || c == '\t')
        }

        fn is_newline(&self) -> bool {
            self.0.contains('\n')
        }

        fn space() -> Self {
            Tok(" ")
        }
    }

    #[test]
    fn test_trims_leading_and_trailing_blanks() {
        let code = [Tok("\n"), Tok("  "), Tok("return"), Tok(" "), Tok("this;"), Tok("\n")];
        assert_eq!(
            one_liner(&code),
            vec![Tok("return"), Tok(" "), Tok("this;")]
        );
    }

    #[test]
    fn test_collapses_interior_runs_to_one_space() {
        let code = [Tok("a"), Tok("  "), Tok("\n"), Tok("\t"), Tok("b")];
        assert_eq!(one_liner(&code), vec![Tok("a"), Tok(" "), Tok("b")]);
    }

    #[test]
    fn test_all_blank_body_compacts_to_nothing() {
        let code = [Tok(" "), Tok("\n"), Tok("\t")];
        assert_eq!(one_liner(&code), Vec::<Tok>::new());
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(one_liner(&[] as &[Tok]), Vec::<Tok>::new());
    }

    #[test]
    fn test_literal_tokens_pass_through_exactly() {
        // A string literal containing spaces is one token and must not be
        // touched by the collapse.
        let code = [Tok("\"a  b\""), Tok(" "), Tok("+"), Tok(" "), Tok("\"\\n\"")];
        assert_eq!(
            one_liner(&code),
            vec![Tok("\"a  b\""), Tok(" "), Tok("+"), Tok(" "), Tok("\"\\n\"")]
        );
    }
}

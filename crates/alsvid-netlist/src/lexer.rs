//! Lexer for the netlist text format.

use logos::Logos;

/// Tokens of the netlist format.
///
/// Newlines are significant: the format is line-oriented, so the lexer
/// keeps them as tokens instead of skipping them.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    // Gate kinds
    #[token("and")]
    And,

    #[token("or")]
    Or,

    #[token("xor")]
    Xor,

    #[token("nand")]
    Nand,

    #[token("not")]
    Not,

    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    Int(u32),

    // Any other word; the parser reports these as unknown gate kinds.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),

    #[token("\n")]
    Newline,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Xor => write!(f, "xor"),
            Token::Nand => write!(f, "nand"),
            Token::Not => write!(f, "not"),
            Token::Int(v) => write!(f, "{v}"),
            Token::Word(s) => write!(f, "{s}"),
            Token::Newline => write!(f, "\\n"),
        }
    }
}

/// A token with the 1-based line it appeared on.
#[derive(Debug, Clone)]
pub struct LinedToken {
    pub token: Token,
    pub line: usize,
}

/// Tokenize a netlist source string, tracking line numbers.
pub fn tokenize(source: &str) -> Vec<Result<LinedToken, (usize, String)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    let mut line = 1;

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                let is_newline = token == Token::Newline;
                tokens.push(Ok(LinedToken { token, line }));
                if is_newline {
                    line += 1;
                }
            }
            Err(()) => {
                let slice = lexer.slice().to_string();
                tokens.push(Err((line, slice)));
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_tokens(source: &str) -> Vec<LinedToken> {
        tokenize(source).into_iter().filter_map(Result::ok).collect()
    }

    #[test]
    fn test_gate_line_tokens() {
        let tokens = ok_tokens("2 and 0 1\n");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].token, Token::Int(2));
        assert_eq!(tokens[1].token, Token::And);
        assert_eq!(tokens[2].token, Token::Int(0));
        assert_eq!(tokens[3].token, Token::Int(1));
        assert_eq!(tokens[4].token, Token::Newline);
    }

    #[test]
    fn test_line_tracking() {
        let tokens = ok_tokens("1\n2\n\n3");
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        // tokens: 1, \n, 2, \n, \n, 3
        assert_eq!(lines, vec![1, 1, 2, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_word() {
        let tokens = ok_tokens("5 frob 0 1\n");
        assert!(matches!(tokens[1].token, Token::Word(ref s) if s == "frob"));
    }

    #[test]
    fn test_invalid_character() {
        let results = tokenize("2 and 0 -1\n");
        let err = results.iter().find(|r| r.is_err());
        assert!(matches!(err, Some(Err((1, text))) if text == "-"));
    }

    #[test]
    fn test_crlf_is_tolerated() {
        let tokens = ok_tokens("2\r\n3\r\n");
        assert_eq!(tokens[0].token, Token::Int(2));
        assert_eq!(tokens[1].token, Token::Newline);
        assert_eq!(tokens[2].token, Token::Int(3));
        assert_eq!(tokens[2].line, 2);
    }
}

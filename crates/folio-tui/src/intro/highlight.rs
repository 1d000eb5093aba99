//! Tiny highlighter for the intro's JavaScript-flavoured snippet

use std::sync::OnceLock;

use regex::Regex;

const KEYWORDS: [&str; 7] = ["const", "new", "await", "return", "function", "if", "else"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Str,
    Bracket,
    /// Word directly followed by `(`
    Function,
    Identifier,
    /// Whitespace and punctuation between matches
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r#"\b({})\b|(['"].*?['"])|([{{}}()])|(\w+)"#, KEYWORDS.join("|"));
        Regex::new(&pattern).expect("static highlight pattern is valid")
    })
}

/// Split `code` into styled tokens
///
/// Concatenating the token texts yields `code` unchanged, which lets the
/// typewriter highlight any typed prefix of a line.
pub fn highlight(code: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last_end = 0;

    for caps in token_regex().captures_iter(code) {
        let Some(whole) = caps.get(0) else { continue };

        if whole.start() > last_end {
            tokens.push(Token::new(TokenKind::Plain, &code[last_end..whole.start()]));
        }

        let kind = if caps.get(1).is_some() {
            TokenKind::Keyword
        } else if caps.get(2).is_some() {
            TokenKind::Str
        } else if caps.get(3).is_some() {
            TokenKind::Bracket
        } else if code[whole.end()..].starts_with('(') {
            TokenKind::Function
        } else {
            TokenKind::Identifier
        };
        tokens.push(Token::new(kind, whole.as_str()));

        last_end = whole.end();
    }

    if last_end < code.len() {
        tokens.push(Token::new(TokenKind::Plain, &code[last_end..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(code: &str) -> Vec<(TokenKind, &str)> {
        highlight(code).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_constructor_line() {
        use TokenKind::*;
        assert_eq!(
            kinds("const developer = new Engineer();"),
            vec![
                (Keyword, "const"),
                (Plain, " "),
                (Identifier, "developer"),
                (Plain, " = "),
                (Keyword, "new"),
                (Plain, " "),
                (Function, "Engineer"),
                (Bracket, "("),
                (Bracket, ")"),
                (Plain, ";"),
            ]
        );
    }

    #[test]
    fn test_strings_and_braces() {
        use TokenKind::*;
        assert_eq!(
            kinds("init({ mode: 'creative' })"),
            vec![
                (Function, "init"),
                (Bracket, "("),
                (Bracket, "{"),
                (Plain, " "),
                (Identifier, "mode"),
                (Plain, ": "),
                (Str, "'creative'"),
                (Plain, " "),
                (Bracket, "}"),
                (Bracket, ")"),
            ]
        );
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        let tokens = highlight("constant newer");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Keyword));
    }

    #[test]
    fn test_unterminated_string_is_not_a_string() {
        let tokens = highlight("say('hi");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Str));
    }

    #[test]
    fn test_tokens_reassemble_input() {
        for code in [
            "await developer.loadPortfolio();",
            "// Ready to build something amazing",
            "",
            "  ünïcode → ok(\"x\")",
            "const dev",
        ] {
            let joined: String = highlight(code).iter().map(|t| t.text).collect();
            assert_eq!(joined, code);
        }
    }
}

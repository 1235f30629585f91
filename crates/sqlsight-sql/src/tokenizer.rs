//! SQL tokenizer
//!
//! Converts a SQL string into a sequence of position-annotated tokens. The
//! scanner is single-pass and left-to-right with one character of pushback;
//! whitespace and comments are emitted as tokens so that every source
//! character is covered by exactly one token range.

use crate::dialects::Dialect;
use crate::error::{Error, Result};
use crate::tokens::{Pos, SQLComment, SQLWord, Token, TokenKind};
use log::{debug, trace};
use std::iter::Peekable;
use std::str::Chars;

/// Tracks the source position as characters are consumed.
///
/// Tabs advance the column by a fixed four rather than aligning to true tab
/// stops; editor clients expect this increment and position tests depend on
/// it. Carriage returns never reach the cursor: the whitespace production
/// normalizes `\r` and `\r\n` to `\n` before advancing.
struct PositionCursor {
    pos: Pos,
}

impl PositionCursor {
    fn new() -> Self {
        Self { pos: Pos::start() }
    }

    fn current(&self) -> Pos {
        self.pos
    }

    fn advance(&mut self, ch: char) {
        match ch {
            '\n' => {
                self.pos.line += 1;
                self.pos.col = 1;
            }
            '\t' => self.pos.col += 4,
            _ => self.pos.col += 1,
        }
    }
}

/// Character reader with a single slot of pushback.
struct CharSource<'a> {
    chars: Peekable<Chars<'a>>,
    pushback: Option<char>,
}

impl<'a> CharSource<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            pushback: None,
        }
    }

    fn peek(&mut self) -> Option<char> {
        match self.pushback {
            Some(ch) => Some(ch),
            None => self.chars.peek().copied(),
        }
    }

    fn next(&mut self) -> Option<char> {
        match self.pushback.take() {
            Some(ch) => Some(ch),
            None => self.chars.next(),
        }
    }

    fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(ch);
    }
}

/// SQL Tokenizer
///
/// Owns the character source and position cursor for one input. A tokenizer
/// is not meant to be reused across inputs: [`Tokenizer::tokenize`] drains
/// the source, and the cursor position persists afterwards so that
/// [`Tokenizer::pos`] reports where scanning stopped.
///
/// # Example
///
/// ```
/// use sqlsight_sql::dialects::GenericDialect;
/// use sqlsight_sql::tokenizer::Tokenizer;
/// use sqlsight_sql::tokens::TokenKind;
///
/// let mut tokenizer = Tokenizer::new("SELECT 1", &GenericDialect);
/// let tokens = tokenizer.tokenize().unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::SQLKeyword);
/// assert_eq!(tokens[2].kind, TokenKind::Number);
/// ```
pub struct Tokenizer<'a> {
    dialect: &'a dyn Dialect,
    chars: CharSource<'a>,
    cursor: PositionCursor,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `sql` using the given dialect for keyword
    /// classification and identifier rules.
    pub fn new(sql: &'a str, dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            chars: CharSource::new(sql),
            cursor: PositionCursor::new(),
        }
    }

    /// The current cursor position: one past the last consumed character.
    ///
    /// After a successful [`Tokenizer::tokenize`] this equals the last
    /// token's `to`; after a failed one it is the position where scanning
    /// stopped.
    pub fn pos(&self) -> Pos {
        self.cursor.current()
    }

    /// Tokenize the whole input and return the ordered token vector.
    ///
    /// The contract is all-or-nothing: the first lexical fault discards any
    /// tokens already produced and returns the error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => break,
                Err(err) => {
                    debug!("tokenization failed: {err}");
                    return Err(err);
                }
            }
        }
        trace!(
            "tokenized {} tokens, final position {}",
            tokens.len(),
            self.cursor.current()
        );
        Ok(tokens)
    }

    /// Scan one token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>> {
        let from = self.cursor.current();
        let ch = match self.chars.peek() {
            Some(ch) => ch,
            None => return Ok(None),
        };

        let token = match ch {
            ' ' | '\t' | '\n' | '\r' => self.scan_whitespace(from),
            'N' => self.scan_national_or_word(from)?,
            ch if self.dialect.is_identifier_start(ch) => {
                self.consume();
                self.scan_word(ch, from)
            }
            '\'' => {
                let value = self.scan_single_quoted_string()?;
                self.token(TokenKind::SingleQuotedString, value, from)
            }
            quote @ ('"' | '`') => {
                self.consume();
                self.scan_quoted_word(quote, from)?
            }
            '[' => {
                self.consume();
                match self.chars.peek() {
                    Some(ch) if self.dialect.is_identifier_part(ch) => {
                        self.scan_quoted_word('[', from)?
                    }
                    _ => self.token(TokenKind::LBracket, "[", from),
                }
            }
            '0'..='9' | '.' => self.scan_number_or_period(from),
            '-' => {
                self.consume();
                if self.chars.peek() == Some('-') {
                    self.consume();
                    self.scan_line_comment(from)
                } else {
                    self.token(TokenKind::Minus, "-", from)
                }
            }
            '/' => {
                self.consume();
                if self.chars.peek() == Some('*') {
                    self.consume();
                    self.scan_block_comment(from)?
                } else {
                    self.token(TokenKind::Div, "/", from)
                }
            }
            '<' => {
                self.consume();
                match self.chars.peek() {
                    Some('=') => {
                        self.consume();
                        self.token(TokenKind::LtEq, "<=", from)
                    }
                    Some('>') => {
                        self.consume();
                        self.token(TokenKind::Neq, "<>", from)
                    }
                    _ => self.token(TokenKind::Lt, "<", from),
                }
            }
            '>' => {
                self.consume();
                if self.chars.peek() == Some('=') {
                    self.consume();
                    self.token(TokenKind::GtEq, ">=", from)
                } else {
                    self.token(TokenKind::Gt, ">", from)
                }
            }
            '!' => {
                self.consume();
                if self.chars.peek() == Some('=') {
                    self.consume();
                    self.token(TokenKind::Neq, "!=", from)
                } else {
                    self.token(TokenKind::ExclamationMark, "!", from)
                }
            }
            ':' => {
                self.consume();
                if self.chars.peek() == Some(':') {
                    self.consume();
                    self.token(TokenKind::DoubleColon, "::", from)
                } else {
                    self.token(TokenKind::Colon, ":", from)
                }
            }
            ',' => self.single_char_token(TokenKind::Comma, from),
            ';' => self.single_char_token(TokenKind::Semicolon, from),
            '(' => self.single_char_token(TokenKind::LParen, from),
            ')' => self.single_char_token(TokenKind::RParen, from),
            ']' => self.single_char_token(TokenKind::RBracket, from),
            '{' => self.single_char_token(TokenKind::LBrace, from),
            '}' => self.single_char_token(TokenKind::RBrace, from),
            '+' => self.single_char_token(TokenKind::Plus, from),
            '*' => self.single_char_token(TokenKind::Mult, from),
            '%' => self.single_char_token(TokenKind::Mod, from),
            '=' => self.single_char_token(TokenKind::Eq, from),
            '\\' => self.single_char_token(TokenKind::Backslash, from),
            '&' => self.single_char_token(TokenKind::Ampersand, from),
            '|' => self.single_char_token(TokenKind::Pipe, from),
            '^' => self.single_char_token(TokenKind::Caret, from),
            '~' => self.single_char_token(TokenKind::Tilde, from),
            '@' => self.single_char_token(TokenKind::AtSign, from),
            '?' => self.single_char_token(TokenKind::Placeholder, from),
            other => {
                self.consume();
                self.token(TokenKind::Char, other.to_string(), from)
            }
        };

        Ok(Some(token))
    }

    /// Consume one character, advancing the cursor.
    fn consume(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if let Some(ch) = ch {
            self.cursor.advance(ch);
        }
        ch
    }

    fn token(&self, kind: TokenKind, value: impl Into<String>, from: Pos) -> Token {
        Token::new(kind, value, from, self.cursor.current())
    }

    fn single_char_token(&mut self, kind: TokenKind, from: Pos) -> Token {
        let ch = self.consume().unwrap_or_default();
        self.token(kind, ch.to_string(), from)
    }

    /// One token per whitespace character; `\r\n` (and a lone `\r`) becomes
    /// a single token valued `"\n"` spanning the consumed input.
    fn scan_whitespace(&mut self, from: Pos) -> Token {
        let value = match self.chars.next() {
            Some('\r') => {
                if self.chars.peek() == Some('\n') {
                    self.chars.next();
                }
                self.cursor.advance('\n');
                "\n"
            }
            Some('\n') => {
                self.cursor.advance('\n');
                "\n"
            }
            Some('\t') => {
                self.cursor.advance('\t');
                "\t"
            }
            _ => {
                self.cursor.advance(' ');
                " "
            }
        };
        self.token(TokenKind::Whitespace, value, from)
    }

    /// `N'...'` is a national string literal; any other `N` starts a word.
    fn scan_national_or_word(&mut self, from: Pos) -> Result<Token> {
        self.consume();
        if self.chars.peek() == Some('\'') {
            let value = self.scan_single_quoted_string()?;
            return Ok(self.token(TokenKind::NationalStringLiteral, value, from));
        }
        Ok(self.scan_word('N', from))
    }

    /// Collect an unquoted word; `first` has already been consumed.
    fn scan_word(&mut self, first: char, from: Pos) -> Token {
        let mut value = String::from(first);
        while let Some(ch) = self.chars.peek() {
            if !self.dialect.is_identifier_part(ch) {
                break;
            }
            value.push(ch);
            self.consume();
        }
        Token::word(self.make_word(value, None), from, self.cursor.current())
    }

    /// Collect a quoted word; the opening delimiter has already been
    /// consumed. Reaching end of input before the closing delimiter is
    /// fatal, including for the `[...]` form.
    fn scan_quoted_word(&mut self, quote_style: char, from: Pos) -> Result<Token> {
        let quote_end = SQLWord::matching_end_quote(quote_style);
        let mut value = String::new();
        loop {
            match self.consume() {
                Some(ch) if ch == quote_end => break,
                Some(ch) => value.push(ch),
                None => {
                    return Err(Error::unterminated_quoted_identifier(
                        quote_end,
                        self.cursor.current(),
                    ))
                }
            }
        }
        Ok(Token::word(
            self.make_word(value, Some(quote_style)),
            from,
            self.cursor.current(),
        ))
    }

    fn make_word(&self, value: String, quote_style: Option<char>) -> SQLWord {
        let keyword = value.to_ascii_uppercase();
        let kind = self.dialect.classify(&keyword);
        SQLWord {
            value,
            keyword,
            quote_style,
            kind,
        }
    }

    /// Scan the body of a `'...'` literal, consuming both delimiters. No
    /// escape sequences are recognized; the body is the raw character run.
    fn scan_single_quoted_string(&mut self) -> Result<String> {
        self.consume();
        let mut value = String::new();
        loop {
            match self.consume() {
                Some('\'') => return Ok(value),
                Some(ch) => value.push(ch),
                None => return Err(Error::unterminated_string(self.cursor.current())),
            }
        }
    }

    /// A maximal run of `digit+ ('.' digit+)?`, or a leading `.` directly
    /// followed by a digit. A dot not followed by a digit is a lone Period.
    fn scan_number_or_period(&mut self, from: Pos) -> Token {
        let mut value = String::new();
        self.take_digits(&mut value);

        if self.chars.peek() == Some('.') {
            // Look one character past the dot; the dot is only part of the
            // number when a digit follows, otherwise it is pushed back
            // untouched by the cursor.
            self.chars.next();
            if matches!(self.chars.peek(), Some(ch) if ch.is_ascii_digit()) {
                self.cursor.advance('.');
                value.push('.');
                self.take_digits(&mut value);
            } else {
                self.chars.unread('.');
            }
        }

        if value.is_empty() {
            self.consume();
            return self.token(TokenKind::Period, ".", from);
        }
        self.token(TokenKind::Number, value, from)
    }

    fn take_digits(&mut self, value: &mut String) {
        while let Some(ch) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            value.push(ch);
            self.consume();
        }
    }

    /// `--` to end of line; the `--` has already been consumed and the
    /// terminating newline is left for the next whitespace token.
    fn scan_line_comment(&mut self, from: Pos) -> Token {
        let mut value = String::new();
        while let Some(ch) = self.chars.peek() {
            if ch == '\n' {
                break;
            }
            value.push(ch);
            self.consume();
        }
        Token::comment(SQLComment::Line(value), from, self.cursor.current())
    }

    /// `/* ... */`; the `/*` has already been consumed. Nesting is not
    /// supported: the first `*/` closes the comment.
    fn scan_block_comment(&mut self, from: Pos) -> Result<Token> {
        let mut value = String::new();
        loop {
            match self.consume() {
                Some('*') if self.chars.peek() == Some('/') => {
                    self.consume();
                    return Ok(Token::comment(
                        SQLComment::Block(value),
                        from,
                        self.cursor.current(),
                    ));
                }
                Some(ch) => value.push(ch),
                None => return Err(Error::unterminated_block_comment(self.cursor.current())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects::{GenericDialect, KeywordKind};
    use crate::tokens::TokenValue;

    fn tokenize(sql: &str) -> Vec<Token> {
        Tokenizer::new(sql, &GenericDialect)
            .tokenize()
            .unwrap_or_else(|err| panic!("tokenize failed for {sql:?}: {err}"))
    }

    fn final_pos(sql: &str) -> Pos {
        let mut tokenizer = Tokenizer::new(sql, &GenericDialect);
        tokenizer.tokenize().unwrap();
        tokenizer.pos()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn text(token: &Token) -> &str {
        match &token.value {
            TokenValue::Text(text) => text,
            other => panic!("expected text value, got {other:?}"),
        }
    }

    fn comment(token: &Token) -> &SQLComment {
        match &token.value {
            TokenValue::Comment(comment) => comment,
            other => panic!("expected comment value, got {other:?}"),
        }
    }

    #[track_caller]
    fn assert_span(token: &Token, from: (usize, usize), to: (usize, usize)) {
        assert_eq!(token.from, Pos::new(from.0, from.1));
        assert_eq!(token.to, Pos::new(to.0, to.1));
    }

    #[test]
    fn test_single_whitespace() {
        let tokens = tokenize(" ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(text(&tokens[0]), " ");
        assert_span(&tokens[0], (1, 1), (1, 2));
    }

    #[test]
    fn test_newline_and_space() {
        let tokens = tokenize("\n ");
        assert_eq!(kinds(&tokens), vec![TokenKind::Whitespace; 2]);
        assert_eq!(text(&tokens[0]), "\n");
        assert_span(&tokens[0], (1, 1), (2, 1));
        assert_eq!(text(&tokens[1]), " ");
        assert_span(&tokens[1], (2, 1), (2, 2));
    }

    #[test]
    fn test_crlf_and_tab() {
        let tokens = tokenize("\r\n\t");
        assert_eq!(tokens.len(), 2);
        assert_eq!(text(&tokens[0]), "\n");
        assert_span(&tokens[0], (1, 1), (2, 1));
        assert_eq!(text(&tokens[1]), "\t");
        assert_span(&tokens[1], (2, 1), (2, 5));
    }

    #[test]
    fn test_lone_carriage_return_normalizes() {
        let tokens = tokenize("\r");
        assert_eq!(tokens.len(), 1);
        assert_eq!(text(&tokens[0]), "\n");
        assert_span(&tokens[0], (1, 1), (2, 1));
    }

    #[test]
    fn test_national_string() {
        let tokens = tokenize("N'string'");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::NationalStringLiteral);
        assert_eq!(text(&tokens[0]), "string");
        assert_span(&tokens[0], (1, 1), (1, 10));
    }

    #[test]
    fn test_national_string_then_keyword() {
        let tokens = tokenize("N'string' NOT");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::NationalStringLiteral,
                TokenKind::Whitespace,
                TokenKind::SQLKeyword,
            ]
        );
        let word = tokens[2].as_word().unwrap();
        assert_eq!(word.value, "NOT");
        assert_eq!(word.keyword, "NOT");
        assert_eq!(word.quote_style, None);
        assert_eq!(word.kind, KeywordKind::Matched);
        assert_span(&tokens[2], (1, 11), (1, 14));
    }

    #[test]
    fn test_word_starting_with_n() {
        let tokens = tokenize("Name");
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.value, "Name");
        assert_eq!(word.keyword, "NAME");
        assert_eq!(word.kind, KeywordKind::Unmatched);
    }

    #[test]
    fn test_keyword_preserves_surface_case() {
        let tokens = tokenize("select");
        assert_eq!(tokens.len(), 1);
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.value, "select");
        assert_eq!(word.keyword, "SELECT");
        assert_eq!(word.kind, KeywordKind::DML);
        assert_span(&tokens[0], (1, 1), (1, 7));
    }

    #[test]
    fn test_double_quoted_word() {
        let tokens = tokenize("\"SELECT\"");
        assert_eq!(tokens.len(), 1);
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.value, "SELECT");
        assert_eq!(word.keyword, "SELECT");
        assert_eq!(word.quote_style, Some('"'));
        assert_eq!(word.kind, KeywordKind::DML);
        assert_span(&tokens[0], (1, 1), (1, 9));
    }

    #[test]
    fn test_plain_identifier() {
        let tokens = tokenize("string");
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.value, "string");
        assert_eq!(word.keyword, "STRING");
        assert_eq!(word.quote_style, None);
        assert_eq!(word.kind, KeywordKind::Unmatched);
        assert_span(&tokens[0], (1, 1), (1, 7));
    }

    #[test]
    fn test_back_quoted_word() {
        let tokens = tokenize("`string`");
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.value, "string");
        assert_eq!(word.keyword, "STRING");
        assert_eq!(word.quote_style, Some('`'));
        assert_eq!(word.kind, KeywordKind::Unmatched);
        assert_span(&tokens[0], (1, 1), (1, 9));
    }

    #[test]
    fn test_bracket_quoted_word() {
        let tokens = tokenize("[order]");
        assert_eq!(tokens.len(), 1);
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.value, "order");
        assert_eq!(word.keyword, "ORDER");
        assert_eq!(word.quote_style, Some('['));
        assert_eq!(word.kind, KeywordKind::Matched);
        assert_span(&tokens[0], (1, 1), (1, 8));
    }

    #[test]
    fn test_quoted_keyword_is_classified() {
        // Quoting does not suppress classification; the uppercased content
        // still goes through the dialect.
        let tokens = tokenize("`select`");
        assert_eq!(tokens[0].as_word().unwrap().kind, KeywordKind::DML);
    }

    #[test]
    fn test_parens_with_number() {
        let tokens = tokenize("(123),");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::LParen,
                TokenKind::Number,
                TokenKind::RParen,
                TokenKind::Comma,
            ]
        );
        assert_span(&tokens[0], (1, 1), (1, 2));
        assert_eq!(text(&tokens[1]), "123");
        assert_span(&tokens[1], (1, 2), (1, 5));
        assert_span(&tokens[2], (1, 5), (1, 6));
        assert_span(&tokens[3], (1, 6), (1, 7));
    }

    #[test]
    fn test_line_comment() {
        let tokens = tokenize("-- test");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(comment(&tokens[0]), &SQLComment::Line(" test".to_string()));
        assert_span(&tokens[0], (1, 1), (1, 8));
    }

    #[test]
    fn test_line_comment_leaves_newline() {
        let tokens = tokenize("--x\ny");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Comment,
                TokenKind::Whitespace,
                TokenKind::SQLKeyword,
            ]
        );
        assert_span(&tokens[0], (1, 1), (1, 4));
        assert_span(&tokens[1], (1, 4), (2, 1));
    }

    #[test]
    fn test_minus_is_not_a_comment() {
        let tokens = tokenize("1-3");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Number, TokenKind::Minus, TokenKind::Number]
        );
        assert_span(&tokens[1], (1, 2), (1, 3));
    }

    #[test]
    fn test_multiline_block_comment() {
        let tokens = tokenize("/* test\nmultiline\ncomment */");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(
            comment(&tokens[0]),
            &SQLComment::Block(" test\nmultiline\ncomment ".to_string())
        );
        assert_span(&tokens[0], (1, 1), (3, 11));
    }

    #[test]
    fn test_block_comment_stray_star() {
        let tokens = tokenize("/* a ** b */");
        assert_eq!(tokens.len(), 1);
        assert_eq!(comment(&tokens[0]), &SQLComment::Block(" a ** b ".to_string()));
    }

    #[test]
    fn test_line_comment_may_contain_block_terminator() {
        let tokens = tokenize("-- a */ b");
        assert_eq!(tokens.len(), 1);
        assert_eq!(comment(&tokens[0]), &SQLComment::Line(" a */ b".to_string()));
        assert_eq!(tokens[0].text(), "-- a */ b");
    }

    #[test]
    fn test_operator_run() {
        let tokens = tokenize("1/1*1+1%1=1.1-.");
        let expected = [
            (TokenKind::Number, "1"),
            (TokenKind::Div, "/"),
            (TokenKind::Number, "1"),
            (TokenKind::Mult, "*"),
            (TokenKind::Number, "1"),
            (TokenKind::Plus, "+"),
            (TokenKind::Number, "1"),
            (TokenKind::Mod, "%"),
            (TokenKind::Number, "1"),
            (TokenKind::Eq, "="),
            (TokenKind::Number, "1.1"),
            (TokenKind::Minus, "-"),
            (TokenKind::Period, "."),
        ];
        assert_eq!(tokens.len(), expected.len());
        let mut col = 1;
        for (token, (kind, value)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(text(token), value);
            assert_span(token, (1, col), (1, col + value.len()));
            col += value.len();
        }
    }

    #[test]
    fn test_number_with_trailing_dot() {
        let tokens = tokenize("1.");
        assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Period]);
        assert_eq!(text(&tokens[0]), "1");
        assert_span(&tokens[1], (1, 2), (1, 3));
    }

    #[test]
    fn test_number_with_leading_dot() {
        let tokens = tokenize(".5");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(text(&tokens[0]), ".5");
        assert_span(&tokens[0], (1, 1), (1, 3));
    }

    #[test]
    fn test_double_dot_splits_at_first_period() {
        // The first dot is not followed by a digit, so it is a lone Period;
        // the second dot is, so it starts a fractional number.
        let tokens = tokenize("1..2");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Number, TokenKind::Period, TokenKind::Number]
        );
        assert_eq!(text(&tokens[0]), "1");
        assert_eq!(text(&tokens[2]), ".2");
    }

    #[test]
    fn test_not_equal() {
        let tokens = tokenize("1!=2");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Number, TokenKind::Neq, TokenKind::Number]
        );
        assert_eq!(text(&tokens[1]), "!=");
        assert_span(&tokens[1], (1, 2), (1, 4));
    }

    #[test]
    fn test_exclamation_mark_alone() {
        let tokens = tokenize("!");
        assert_eq!(tokens[0].kind, TokenKind::ExclamationMark);
    }

    #[test]
    fn test_lt_family() {
        let tokens = tokenize("<<=<>");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Lt, TokenKind::LtEq, TokenKind::Neq]
        );
        assert_span(&tokens[0], (1, 1), (1, 2));
        assert_span(&tokens[1], (1, 2), (1, 4));
        assert_span(&tokens[2], (1, 4), (1, 6));
    }

    #[test]
    fn test_gt_family() {
        let tokens = tokenize(">>=");
        assert_eq!(kinds(&tokens), vec![TokenKind::Gt, TokenKind::GtEq]);
        assert_span(&tokens[0], (1, 1), (1, 2));
        assert_span(&tokens[1], (1, 2), (1, 4));
    }

    #[test]
    fn test_colons() {
        let tokens = tokenize(":1::1;");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Colon,
                TokenKind::Number,
                TokenKind::DoubleColon,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
        assert_span(&tokens[2], (1, 3), (1, 5));
        assert_span(&tokens[4], (1, 6), (1, 7));
    }

    #[test]
    fn test_misc_punctuation() {
        let tokens = tokenize("\\[{&}]");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Backslash,
                TokenKind::LBracket,
                TokenKind::LBrace,
                TokenKind::Ampersand,
                TokenKind::RBrace,
                TokenKind::RBracket,
            ]
        );
        for (i, token) in tokens.iter().enumerate() {
            assert_span(token, (1, i + 1), (1, i + 2));
        }
    }

    #[test]
    fn test_remaining_operators() {
        let tokens = tokenize("| ^ ~ @ ?");
        let non_ws: Vec<TokenKind> = tokens
            .iter()
            .filter(|t| !t.is_whitespace())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            non_ws,
            vec![
                TokenKind::Pipe,
                TokenKind::Caret,
                TokenKind::Tilde,
                TokenKind::AtSign,
                TokenKind::Placeholder,
            ]
        );
    }

    #[test]
    fn test_unrecognized_character_is_char_token() {
        let tokens = tokenize("#");
        assert_eq!(tokens[0].kind, TokenKind::Char);
        assert_eq!(text(&tokens[0]), "#");

        let tokens = tokenize("é");
        assert_eq!(tokens[0].kind, TokenKind::Char);
        assert_eq!(text(&tokens[0]), "é");
    }

    #[test]
    fn test_string_body_is_raw() {
        // No escape interpretation: the backslash stays in the body and the
        // string ends at the first quote.
        let tokens = tokenize(r"'a\n'");
        assert_eq!(tokens[0].kind, TokenKind::SingleQuotedString);
        assert_eq!(text(&tokens[0]), r"a\n");
    }

    #[test]
    fn test_multiline_string_positions() {
        let tokens = tokenize("'a\nb'");
        assert_eq!(tokens.len(), 1);
        assert_eq!(text(&tokens[0]), "a\nb");
        assert_span(&tokens[0], (1, 1), (2, 3));
    }

    #[test]
    fn test_pos_after_operators() {
        // "1 <op> 1" always ends at column 6, plus one for two-char forms.
        for (operator, add) in [
            ("+", 0),
            ("-", 0),
            ("%", 0),
            ("*", 0),
            ("/", 0),
            (">", 0),
            ("=", 0),
            ("<", 0),
            ("<=", 1),
            ("<>", 1),
            (">=", 1),
        ] {
            let sql = format!("1 {operator} 1");
            assert_eq!(final_pos(&sql), Pos::new(1, 6 + add), "operator {operator}");
        }
    }

    #[test]
    fn test_pos_multiline() {
        assert_eq!(final_pos("1+1\nasdf"), Pos::new(2, 5));
    }

    #[test]
    fn test_pos_line_comment() {
        assert_eq!(final_pos("-- comments"), Pos::new(1, 12));
    }

    #[test]
    fn test_pos_statement() {
        assert_eq!(
            final_pos("select count(id) from account"),
            Pos::new(1, 30)
        );
    }

    #[test]
    fn test_pos_multiline_statement() {
        let sql = "select count(id)\nfrom account \nwhere name like '%test%'";
        assert_eq!(final_pos(sql), Pos::new(3, 25));
    }

    #[test]
    fn test_pos_multiline_comment() {
        assert_eq!(
            final_pos("/*\ntest comment\ntest comment\n*/"),
            Pos::new(4, 3)
        );
        assert_eq!(final_pos("/* asdf */"), Pos::new(1, 11));
    }

    #[test]
    fn test_pos_comment_inside_statement() {
        let sql = "select * from /* test table */ test_table where id != 123";
        assert_eq!(final_pos(sql), Pos::new(1, 58));
    }

    #[test]
    fn test_unterminated_string() {
        let mut tokenizer = Tokenizer::new("'test", &GenericDialect);
        let err = tokenizer.tokenize().unwrap_err();
        assert_eq!(
            err,
            Error::UnterminatedStringLiteral { line: 1, column: 6 }
        );
        assert_eq!(err.pos(), Pos::new(1, 6));
        assert_eq!(tokenizer.pos(), Pos::new(1, 6));
    }

    #[test]
    fn test_unterminated_national_string() {
        let err = Tokenizer::new("N'test", &GenericDialect)
            .tokenize()
            .unwrap_err();
        assert!(matches!(err, Error::UnterminatedStringLiteral { .. }));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Tokenizer::new("\n/* test\ntest\n", &GenericDialect)
            .tokenize()
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnterminatedBlockComment { line: 4, column: 1 }
        );
    }

    #[test]
    fn test_unterminated_quoted_identifier() {
        let err = Tokenizer::new("\"abc", &GenericDialect)
            .tokenize()
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnterminatedQuotedIdentifier {
                delimiter: '"',
                line: 1,
                column: 5,
            }
        );

        let err = Tokenizer::new("[abc", &GenericDialect)
            .tokenize()
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnterminatedQuotedIdentifier {
                delimiter: ']',
                line: 1,
                column: 5,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = Tokenizer::new("", &GenericDialect);
        assert_eq!(tokenizer.tokenize().unwrap(), Vec::new());
        assert_eq!(tokenizer.pos(), Pos::start());
    }
}

use lox_lexical::{
    base::{PrintHandler, Storage},
    lexical::{
        scanner::Scanner,
        token::{Token, TokenKind},
        token_stream::TokenStream,
        Error,
    },
};

fn scan(source: &str) -> (Vec<Token>, Vec<Error>) {
    let storage = Storage::new();
    let tokens = Scanner::new(source, &storage).scan_tokens();
    (tokens, storage.into_vec())
}

fn punctuation(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme, 1)
}

#[test]
fn empty_source_yields_eof() {
    let (tokens, errors) = scan("");

    assert_eq!(tokens, vec![Token::eof(1)]);
    assert_eq!(tokens[0].line(), 1);
    assert!(errors.is_empty());
}

#[test]
fn whitespace_only_advances_lines() {
    let (tokens, errors) = scan(" \t\r\n\n  \n");

    assert_eq!(tokens, vec![Token::eof(1)]);
    assert_eq!(tokens[0].line(), 4);
    assert!(errors.is_empty());
}

#[test]
fn parentheses_and_braces() {
    assert_eq!(
        scan("(){}").0,
        vec![
            punctuation(TokenKind::LeftParen, "("),
            punctuation(TokenKind::RightParen, ")"),
            punctuation(TokenKind::LeftBrace, "{"),
            punctuation(TokenKind::RightBrace, "}"),
            Token::eof(1),
        ]
    );
}

#[test]
fn other_single_character_lexemes() {
    assert_eq!(
        scan(".,+-;*").0,
        vec![
            punctuation(TokenKind::Dot, "."),
            punctuation(TokenKind::Comma, ","),
            punctuation(TokenKind::Plus, "+"),
            punctuation(TokenKind::Minus, "-"),
            punctuation(TokenKind::Semicolon, ";"),
            punctuation(TokenKind::Star, "*"),
            Token::eof(1),
        ]
    );
}

#[test]
fn compound_operators_take_longest_match() {
    assert_eq!(
        scan("!==").0,
        vec![
            punctuation(TokenKind::BangEqual, "!="),
            punctuation(TokenKind::Equal, "="),
            Token::eof(1),
        ]
    );
    assert_eq!(
        scan("!+===").0,
        vec![
            punctuation(TokenKind::Bang, "!"),
            punctuation(TokenKind::Plus, "+"),
            punctuation(TokenKind::EqualEqual, "=="),
            punctuation(TokenKind::Equal, "="),
            Token::eof(1),
        ]
    );
    assert_eq!(
        scan("<<==").0,
        vec![
            punctuation(TokenKind::Less, "<"),
            punctuation(TokenKind::LessEqual, "<="),
            punctuation(TokenKind::Equal, "="),
            Token::eof(1),
        ]
    );
    assert_eq!(
        scan(">>==").0,
        vec![
            punctuation(TokenKind::Greater, ">"),
            punctuation(TokenKind::GreaterEqual, ">="),
            punctuation(TokenKind::Equal, "="),
            Token::eof(1),
        ]
    );
}

#[test]
fn strings() {
    assert_eq!(
        scan("\"\"").0,
        vec![Token::string("\"\"", "", 1), Token::eof(1)]
    );

    let (tokens, errors) = scan("\"str\"");
    assert_eq!(tokens, vec![Token::string("\"str\"", "str", 1), Token::eof(1)]);
    assert_eq!(
        tokens[0].literal().as_ref().and_then(|l| l.as_string()),
        Some(&"str".to_string())
    );
    assert!(errors.is_empty());
}

#[test]
fn unterminated_string_reports_once() {
    let (tokens, errors) = scan("\"str");

    assert_eq!(tokens, vec![Token::eof(1)]);
    assert_eq!(errors, vec![Error::UnterminatedString { line: 1 }]);
}

#[test]
fn numbers() {
    assert_eq!(
        scan("100").0,
        vec![Token::number("100", 100.0, 1), Token::eof(1)]
    );
    assert_eq!(
        scan("100.000").0,
        vec![Token::number("100.000", 100.0, 1), Token::eof(1)]
    );
}

#[test]
fn trailing_dot_is_not_part_of_number() {
    assert_eq!(
        scan("100.").0,
        vec![
            Token::number("100", 100.0, 1),
            punctuation(TokenKind::Dot, "."),
            Token::eof(1),
        ]
    );
}

#[test]
fn reserved_words() {
    let words = [
        "and", "or", "class", "else", "false", "fun", "for", "if", "nil", "or", "print", "return",
        "super", "this", "true", "var", "while",
    ];
    let (tokens, errors) = scan(&words.join(" "));

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), words.len() + 1);
    assert!(tokens
        .iter()
        .all(|token| token.kind() != TokenKind::Identifier));
    for (token, word) in tokens.iter().zip(words) {
        assert_eq!(Some(token.kind()), TokenKind::keyword(word));
        assert_eq!(token.lexeme(), word);
    }
}

#[test]
fn block_comments_are_ignored() {
    assert_eq!(scan("/* This is a Commment */").0, vec![Token::eof(1)]);

    let (tokens, errors) = scan("/*MultiLIne\nComment*/");
    assert_eq!(tokens.len(), 1);
    assert!(errors.is_empty());

    let (tokens, _) = scan("/*MultiLIne\nComment*/ x");
    assert_eq!(tokens[0].lexeme(), "x");
    assert_eq!(tokens[0].line(), 2);
}

#[test]
fn unterminated_block_comment_reports_once() {
    let (tokens, errors) = scan("/* This is incorrect");

    assert_eq!(tokens, vec![Token::eof(1)]);
    assert_eq!(errors, vec![Error::UnterminatedComment { line: 1 }]);
}

#[test]
fn scanning_a_program() {
    let source = include_str!("./program.lox");
    let (tokens, errors) = scan(source);

    assert!(errors.is_empty(), "{errors:?}");

    let greet = tokens
        .iter()
        .find(|token| token.lexeme() == "\"Hello, \"")
        .expect("string literal is scanned");
    assert_eq!(greet.line(), 4);

    let var = tokens
        .iter()
        .find(|token| token.kind() == TokenKind::Var)
        .expect("var keyword is scanned");
    assert_eq!(var.line(), 10);

    let fraction = tokens
        .iter()
        .find(|token| token.lexeme() == "1.5")
        .expect("number is scanned");
    assert_eq!(
        fraction.literal().as_ref().and_then(|l| l.as_number()),
        Some(&1.5)
    );

    let eof = tokens.last().expect("stream is never empty");
    assert!(eof.is_eof());
    assert_eq!(eof.line(), 15);
}

#[test]
fn checked_tokenize_rejects_errors() {
    let handler = PrintHandler::new();
    let result = lox_lexical::tokenize("var a = \"unterminated;", &handler);

    assert!(result.is_err());
    assert!(handler.has_printed());

    let storage = Storage::new();
    let stream = lox_lexical::tokenize("var a = 1;", &storage).expect("source is well formed");
    assert_eq!(stream, TokenStream::tokenize("var a = 1;", &storage));
}

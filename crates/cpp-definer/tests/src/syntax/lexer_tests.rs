use super::*;

fn lex(input: &str) -> Vec<(TokenKind, String)> {
    Tokenizer::new(input).map(|token| (token.kind, token.text)).collect()
}

fn significant(input: &str) -> Vec<(TokenKind, String)> {
    lex(input).into_iter().filter(|(kind, _)| !kind.is_trivia()).collect()
}

fn tokens(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    expected.iter().map(|(kind, text)| (*kind, text.to_string())).collect()
}

#[test]
fn test_class_head() {
    assert_eq!(
        lex("class Foo : public Bar {"),
        tokens(&[
            (TokenKind::ClassKeyword, "class"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Ident, "Foo"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Colon, ":"),
            (TokenKind::Whitespace, " "),
            (TokenKind::AccessKeyword, "public"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Ident, "Bar"),
            (TokenKind::Whitespace, " "),
            (TokenKind::LBrace, "{"),
        ])
    );
}

#[test]
fn test_keywords_need_whole_words() {
    assert_eq!(
        significant("classic structure publicity interface"),
        tokens(&[
            (TokenKind::Ident, "classic"),
            (TokenKind::Ident, "structure"),
            (TokenKind::Ident, "publicity"),
            (TokenKind::ClassKeyword, "interface"),
        ])
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        lex("ns::~A<>[](){};,*&=:"),
        tokens(&[
            (TokenKind::Ident, "ns"),
            (TokenKind::DoubleColon, "::"),
            (TokenKind::Tilde, "~"),
            (TokenKind::Ident, "A"),
            (TokenKind::Less, "<"),
            (TokenKind::Greater, ">"),
            (TokenKind::LBracket, "["),
            (TokenKind::RBracket, "]"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Comma, ","),
            (TokenKind::Star, "*"),
            (TokenKind::Amp, "&"),
            (TokenKind::Equal, "="),
            (TokenKind::Colon, ":"),
        ])
    );
}

#[test]
fn test_line_comment_keeps_newline() {
    assert_eq!(
        lex("int//*/*/*\n*/*/\nstuff"),
        tokens(&[
            (TokenKind::Ident, "int"),
            (TokenKind::Comment, "//*/*/*\n"),
            (TokenKind::Star, "*"),
            (TokenKind::Comment, "/*/\nstuff"),
        ])
    );
}

#[test]
fn test_block_comments_nest() {
    assert_eq!(
        lex("int*/*/**/*/"),
        tokens(&[(TokenKind::Ident, "int"), (TokenKind::Star, "*"), (TokenKind::Comment, "/*/**/*/")])
    );
    assert_eq!(
        lex("/* /* */ */x"),
        tokens(&[(TokenKind::Comment, "/* /* */ */"), (TokenKind::Ident, "x")])
    );
}

#[test]
fn test_directive_is_one_comment() {
    assert_eq!(lex("#ssss*/*/**/*/\n"), tokens(&[(TokenKind::Comment, "#ssss*/*/**/*/\n")]));
    assert_eq!(
        lex("#define X class Y {\nclass"),
        tokens(&[(TokenKind::Comment, "#define X class Y {\n"), (TokenKind::ClassKeyword, "class")])
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(lex("a // tail"), tokens(&[
        (TokenKind::Ident, "a"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Comment, "// tail"),
    ]));
}

#[test]
fn test_string_literals() {
    assert_eq!(
        significant(r#"'a\'b' "x\"y" "{""#),
        tokens(&[
            (TokenKind::StringLiteral, r"'a\'b'"),
            (TokenKind::StringLiteral, r#""x\"y""#),
            (TokenKind::StringLiteral, r#""{""#),
        ])
    );
}

#[test]
fn test_unterminated_string_runs_to_end() {
    assert_eq!(significant("f(\"abc)"), tokens(&[
        (TokenKind::Ident, "f"),
        (TokenKind::LParen, "("),
        (TokenKind::StringLiteral, "\"abc)"),
    ]));
}

#[test]
fn test_unknown_characters() {
    assert_eq!(
        lex("a@/é"),
        tokens(&[
            (TokenKind::Ident, "a"),
            (TokenKind::Unknown, "@"),
            (TokenKind::Unknown, "/"),
            (TokenKind::Unknown, "é"),
        ])
    );
}

#[test]
fn test_tokens_reassemble_input() {
    let input = "class A : B<C> { // x\n  void f(int a = 1) const; /* y */ };\n";
    let joined: String = lex(input).into_iter().map(|(_, text)| text).collect();
    assert_eq!(joined, input);
}

#[test]
fn test_prepend_pushes_back() {
    let mut tokenizer = Tokenizer::new("b c");
    let token = tokenizer.next().unwrap();
    assert_eq!(token.text, "b");
    tokenizer.prepend(&token.text);
    assert_eq!(tokenizer.remaining(), "b c");

    tokenizer.prepend("a ");
    assert_eq!(tokenizer.remaining(), "a b c");
    assert_eq!(tokenizer.next().unwrap().text, "a");
}

#[test]
fn test_restore_rewinds_to_snapshot() {
    let mut tokenizer = Tokenizer::new("a b c");
    tokenizer.next();
    tokenizer.save();
    tokenizer.next();
    tokenizer.next();
    tokenizer.prepend("zzz");
    assert_eq!(tokenizer.checkpoint_depth(), 1);
    tokenizer.restore();
    assert_eq!(tokenizer.remaining(), " b c");
    assert_eq!(tokenizer.checkpoint_depth(), 0);
}

#[test]
fn test_nested_checkpoints_are_independent() {
    let mut tokenizer = Tokenizer::new("a b c");
    tokenizer.save();
    tokenizer.next();
    tokenizer.save();
    tokenizer.next();
    tokenizer.next();
    tokenizer.discard();
    assert_eq!(tokenizer.remaining(), " c");
    tokenizer.restore();
    assert_eq!(tokenizer.remaining(), "a b c");
    assert_eq!(tokenizer.checkpoint_depth(), 0);
}

#[test]
fn test_end_of_input() {
    let mut tokenizer = Tokenizer::new("");
    assert!(tokenizer.is_empty());
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn test_closing_brackets() {
    assert_eq!(TokenKind::LParen.closing(), Some(TokenKind::RParen));
    assert_eq!(TokenKind::LBracket.closing(), Some(TokenKind::RBracket));
    assert_eq!(TokenKind::Less.closing(), Some(TokenKind::Greater));
    assert_eq!(TokenKind::LBrace.closing(), None);
}

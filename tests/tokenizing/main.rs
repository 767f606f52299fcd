use globlex::{
    base::{SilentHandler, VoidHandler},
    lexical::{
        token::{
            CharacterListToken, LetterRangeToken, LiteralToken, NumberRangeToken,
            PathSeparatorToken, SingleCharacterToken, Token, WildcardToken,
        },
        token_stream::{TokenStream, Tokenizer},
    },
};

fn tokens(pattern: &str) -> Vec<Token> {
    globlex::tokenize(pattern).dissolve()
}

fn literal(text: &str) -> Token {
    LiteralToken {
        text: text.to_owned(),
    }
    .into()
}

fn wildcard() -> Token {
    WildcardToken.into()
}

fn single_character() -> Token {
    SingleCharacterToken.into()
}

fn path_separator() -> Token {
    PathSeparatorToken.into()
}

fn character_list(characters: &str) -> Token {
    CharacterListToken {
        characters: characters.chars().collect(),
    }
    .into()
}

fn letter_range(start: char, end: char, is_negated: bool) -> Token {
    LetterRangeToken {
        start,
        end,
        is_negated,
    }
    .into()
}

fn number_range(start: char, end: char, is_negated: bool) -> Token {
    NumberRangeToken {
        start,
        end,
        is_negated,
    }
    .into()
}

#[test]
fn empty_pattern_yields_no_tokens() {
    assert!(tokens("").is_empty());
}

#[test]
fn literal_run_is_a_single_token() {
    assert_eq!(tokens("readme.md"), vec![literal("readme.md")]);
}

#[test]
fn wildcard_splits_literal_runs() {
    assert_eq!(
        tokens("a*b"),
        vec![literal("a"), wildcard(), literal("b")]
    );
}

#[test]
fn adjacent_wildcards_stay_separate() {
    assert_eq!(tokens("**"), vec![wildcard(), wildcard()]);
    assert_eq!(
        tokens("**/*"),
        vec![wildcard(), wildcard(), path_separator(), wildcard()]
    );
}

#[test]
fn single_character_wildcard() {
    assert_eq!(
        tokens("file?.txt"),
        vec![literal("file"), single_character(), literal(".txt")]
    );
}

#[test]
fn path_separators_delimit_literals() {
    assert_eq!(
        tokens("src/lib.rs"),
        vec![literal("src"), path_separator(), literal("lib.rs")]
    );
}

#[test]
fn bracket_chars_become_a_character_list() {
    assert_eq!(tokens("[abc]"), vec![character_list("abc")]);
}

#[test]
fn character_list_keeps_order_and_duplicates() {
    assert_eq!(tokens("[aba]"), vec![character_list("aba")]);
}

#[test]
fn special_characters_are_plain_members_inside_brackets() {
    assert_eq!(tokens("[*?]"), vec![character_list("*?")]);
    assert_eq!(tokens("[/]"), vec![character_list("/")]);
}

#[test]
fn leading_dash_makes_a_character_list() {
    assert_eq!(tokens("[-ab]"), vec![character_list("-ab")]);
}

#[test]
fn letter_and_number_ranges() {
    assert_eq!(tokens("[a-z]"), vec![letter_range('a', 'z', false)]);
    assert_eq!(tokens("[0-9]"), vec![number_range('0', '9', false)]);
}

#[test]
fn negated_ranges_record_the_negation() {
    assert_eq!(tokens("[!a-z]"), vec![letter_range('a', 'z', true)]);
    assert_eq!(tokens("[!0-9]"), vec![number_range('0', '9', true)]);
}

#[test]
fn negation_on_a_character_list_is_dropped() {
    assert_eq!(tokens("[!ab]"), tokens("[ab]"));
}

#[test]
fn range_kind_follows_the_start_character() {
    assert_eq!(tokens("[a-9]"), vec![letter_range('a', '9', false)]);
    assert_eq!(tokens("[1-z]"), vec![number_range('1', 'z', false)]);
}

#[test]
fn doubled_close_bracket_is_a_list_member() {
    assert_eq!(tokens("[]]"), vec![character_list("]")]);
    assert_eq!(
        tokens("[a]]b]"),
        vec![character_list("a]"), literal("b")]
    );
}

#[test]
fn empty_brackets_consume_the_closer() {
    // The first `]` always lexes as a list member, leaving the expression
    // unterminated.
    let handler = SilentHandler::new();
    let stream = TokenStream::tokenize("[]", &handler);

    assert_eq!(stream.dissolve(), vec![character_list("]")]);
    assert!(handler.has_received());
}

#[test]
fn unterminated_bracket_scans_to_the_end() {
    assert_eq!(tokens("[ab"), vec![character_list("ab")]);
    assert_eq!(tokens("[a-z"), vec![letter_range('a', 'z', false)]);
    assert_eq!(tokens("["), vec![character_list("")]);
}

#[test]
fn missing_range_end_is_the_nul_character() {
    assert_eq!(tokens("[a-]"), vec![letter_range('a', '\0', false)]);
    assert_eq!(tokens("[0-]"), vec![number_range('0', '\0', false)]);
}

#[test]
fn extra_range_characters_are_ignored() {
    assert_eq!(tokens("[a-zz]"), vec![letter_range('a', 'z', false)]);
}

#[test]
fn stray_close_bracket_is_dropped() {
    assert!(tokens("]").is_empty());
    assert_eq!(tokens("a]b"), vec![literal("a"), literal("b")]);
}

#[test]
fn exclamation_and_dash_are_literals_outside_brackets() {
    assert_eq!(tokens("a!b-c"), vec![literal("a!b-c")]);
}

#[test]
fn multibyte_characters_lex_like_ascii() {
    assert_eq!(
        tokens("héllo*wörld"),
        vec![literal("héllo"), wildcard(), literal("wörld")]
    );
    assert_eq!(tokens("[α-ω]"), vec![letter_range('α', 'ω', false)]);
}

#[test]
fn diagnostics_are_reported_to_the_handler() {
    let handler = SilentHandler::new();
    let stream = TokenStream::tokenize("[ab", &handler);

    assert_eq!(stream.dissolve(), vec![character_list("ab")]);
    assert!(handler.has_received());

    let handler = SilentHandler::new();
    TokenStream::tokenize("a*b", &handler);

    assert!(!handler.has_received());
}

#[test]
fn strict_tokenizing_rejects_recovered_patterns() {
    globlex::tokenize_strict("[ab").expect_err("unterminated bracket expression");
    globlex::tokenize_strict("[a-]").expect_err("missing range end");
    globlex::tokenize_strict("]").expect_err("stray close bracket");
    globlex::tokenize_strict("[a]]b]").expect_err("trailing close bracket");
}

#[test]
fn strict_tokenizing_accepts_well_formed_patterns() {
    let stream = globlex::tokenize_strict("src/**/[a-z]?.md")
        .expect("pattern should tokenize without recovery");

    assert_eq!(
        stream.dissolve(),
        vec![
            literal("src"),
            path_separator(),
            wildcard(),
            wildcard(),
            path_separator(),
            letter_range('a', 'z', false),
            single_character(),
            literal(".md"),
        ]
    );
}

#[test]
fn tokenizer_reuse_starts_clean() {
    let mut tokenizer = Tokenizer::new();

    assert_eq!(
        tokenizer.tokenize("abc", &VoidHandler).dissolve(),
        vec![literal("abc")]
    );
    assert_eq!(
        tokenizer.tokenize("[ab", &VoidHandler).dissolve(),
        vec![character_list("ab")]
    );
    assert_eq!(
        tokenizer.tokenize("xyz", &VoidHandler).dissolve(),
        vec![literal("xyz")]
    );
}

#[test]
fn tokens_expose_their_variants() {
    let stream = globlex::tokenize("a*");

    assert_eq!(
        stream[0].as_literal().map(|token| token.text.as_str()),
        Some("a")
    );
    assert!(stream[1].is_wildcard());
}

fn rendered(token: &Token) -> String {
    match token {
        Token::Literal(token) => token.text.clone(),
        Token::Wildcard(_) => "*".to_owned(),
        Token::SingleCharacter(_) => "?".to_owned(),
        Token::PathSeparator(_) => "/".to_owned(),
        Token::CharacterList(token) => {
            format!("[{}]", token.characters.iter().collect::<String>())
        }
        Token::LetterRange(token) => format!(
            "[{}{}-{}]",
            if token.is_negated { "!" } else { "" },
            token.start,
            token.end
        ),
        Token::NumberRange(token) => format!(
            "[{}{}-{}]",
            if token.is_negated { "!" } else { "" },
            token.start,
            token.end
        ),
    }
}

#[test]
fn tokens_reconstruct_escape_free_patterns() {
    for pattern in [
        "**/src/[a-z]?*.[!0-9]rs",
        "assets/**/*.png",
        "file[0-9].txt",
        "[a-z]/[!0-9]/?",
        "plain-literal.txt",
    ] {
        let reconstructed = globlex::tokenize(pattern)
            .iter()
            .map(rendered)
            .collect::<String>();

        assert_eq!(reconstructed, pattern);
    }
}

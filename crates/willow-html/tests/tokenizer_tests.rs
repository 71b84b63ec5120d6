//! Integration tests for the fragment tokenizer.

use willow_html::{FragmentTokenizer, Token};

/// Helper to tokenize a string and return the token stream.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = FragmentTokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Helper to collect the character tokens into a string.
fn character_data(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

#[test]
fn test_simple_start_and_end_tag() {
    let tokens = tokenize("<div>hi</div>");

    assert!(matches!(
        &tokens[0],
        Token::StartTag { name, self_closing: false, .. } if name == "div"
    ));
    assert_eq!(character_data(&tokens), "hi");
    assert!(matches!(
        &tokens[3],
        Token::EndTag { name, .. } if name == "div"
    ));
    assert!(tokens.last().is_some_and(Token::is_eof));
}

#[test]
fn test_tag_names_are_lowercased() {
    let tokens = tokenize("<DIV></DIV>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "div"));
    assert!(matches!(&tokens[1], Token::EndTag { name, .. } if name == "div"));
}

#[test]
fn test_double_quoted_attribute() {
    let tokens = tokenize("<a href=\"http://example.com/\">x</a>");

    let Token::StartTag { name, attributes, .. } = &tokens[0] else {
        panic!("expected start tag, got {:?}", tokens[0]);
    };
    assert_eq!(name, "a");
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].name, "href");
    assert_eq!(attributes[0].value, "http://example.com/");
}

#[test]
fn test_single_quoted_and_unquoted_attributes() {
    let tokens = tokenize("<input type='text' value=abc>");

    let Token::StartTag { attributes, .. } = &tokens[0] else {
        panic!("expected start tag, got {:?}", tokens[0]);
    };
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0].name, "type");
    assert_eq!(attributes[0].value, "text");
    assert_eq!(attributes[1].name, "value");
    assert_eq!(attributes[1].value, "abc");
}

#[test]
fn test_attribute_without_value() {
    let tokens = tokenize("<option selected>A</option>");

    let Token::StartTag { attributes, .. } = &tokens[0] else {
        panic!("expected start tag, got {:?}", tokens[0]);
    };
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].name, "selected");
    assert_eq!(attributes[0].value, "");
}

#[test]
fn test_duplicate_attribute_is_dropped() {
    let tokens = tokenize("<div class=\"a\" class=\"b\">");

    let Token::StartTag { attributes, .. } = &tokens[0] else {
        panic!("expected start tag, got {:?}", tokens[0]);
    };
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].value, "a");
}

#[test]
fn test_self_closing_flag() {
    let tokens = tokenize("<br/>");

    assert!(matches!(
        &tokens[0],
        Token::StartTag { name, self_closing: true, .. } if name == "br"
    ));
}

#[test]
fn test_self_closing_flag_after_attributes() {
    let tokens = tokenize("<img src=\"x.png\" />");

    let Token::StartTag {
        name,
        self_closing,
        attributes,
    } = &tokens[0]
    else {
        panic!("expected start tag, got {:?}", tokens[0]);
    };
    assert_eq!(name, "img");
    assert!(*self_closing);
    assert_eq!(attributes[0].value, "x.png");
}

#[test]
fn test_comment_token() {
    let tokens = tokenize("<!-- hello -->");

    assert!(matches!(
        &tokens[0],
        Token::Comment { data } if data == " hello "
    ));
}

#[test]
fn test_text_only_input() {
    let tokens = tokenize("just text");

    assert_eq!(character_data(&tokens), "just text");
    assert!(tokens.last().is_some_and(Token::is_eof));
}

#[test]
fn test_stray_less_than_is_character_data() {
    let tokens = tokenize("1 < 2");

    assert_eq!(character_data(&tokens), "1 < 2");
}

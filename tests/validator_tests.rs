use std::io::Write;

use wikilint::config::ValidatorConfig;
use wikilint::parser::WikiParser;
use wikilint::validation::{
    InvalidExpressionValidator, SentenceLengthValidator, SuggestExpressionValidator, Validator,
    ValidatorEngine,
};

#[test]
fn test_suggest_expression_over_parsed_document() {
    let text = "h1. Railways.\n\
                Tokyu is a good railway company. I like the like button.\n\
                \n\
                Here is some info about it.\n";
    let doc = WikiParser::default().parse(text);
    let validator =
        SuggestExpressionValidator::with_synonyms([("like", "such as"), ("info", "information")])
            .unwrap();
    let engine = ValidatorEngine::with_validators(vec![Box::new(validator)]);

    let errors = engine.validate(&doc);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].message().contains("\"like\""));
    assert!(errors[0].message().contains("such as"));
    assert!(errors[1].message().contains("\"info\""));
}

#[test]
fn test_errors_carry_sentence_positions() {
    let text = "Short one.\n\
                \n\
                This is a deliberately much longer sentence placed on the third line.\n";
    let doc = WikiParser::default().parse(text);
    let engine =
        ValidatorEngine::with_validators(vec![Box::new(SentenceLengthValidator::with_max_length(
            30,
        ))]);

    let errors = engine.validate(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line_number(), 2);
    assert!(errors[0]
        .sentence()
        .is_some_and(|s| s.content.starts_with("This is a deliberately")));
}

#[test]
fn test_sentence_validators_see_headers_and_list_items() {
    let text = "h1. An exceedingly verbose and long-winded section header sentence.\n\
                - a list item that also goes on for quite a while before stopping\n";
    let doc = WikiParser::default().parse(text);
    let engine =
        ValidatorEngine::with_validators(vec![Box::new(SentenceLengthValidator::with_max_length(
            40,
        ))]);

    let errors = engine.validate(&doc);
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_invalid_expression_list_file() {
    let mut list = tempfile::NamedTempFile::new().unwrap();
    writeln!(list, "as a matter of fact").unwrap();
    writeln!(list, "needless to say").unwrap();
    list.flush().unwrap();

    let config = ValidatorConfig::new("invalid-expression")
        .with_property("list", list.path().to_string_lossy());
    let mut validator = InvalidExpressionValidator::default();
    validator.initialize(&config).unwrap();

    let doc = WikiParser::default().parse("Needless to say, as a matter of fact it works.\n");
    let engine = ValidatorEngine::with_validators(vec![Box::new(validator)]);
    let errors = engine.validate(&doc);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message().contains("as a matter of fact"));
}

#[test]
fn test_suggest_expression_dict_file() {
    let mut dict = tempfile::NamedTempFile::new().unwrap();
    writeln!(dict, "like = \"such as\"").unwrap();
    writeln!(dict, "info = \"information\"").unwrap();
    dict.flush().unwrap();

    let config = ValidatorConfig::new("suggest-expression")
        .with_property("dict", dict.path().to_string_lossy());
    let mut validator = SuggestExpressionValidator::default();
    validator.initialize(&config).unwrap();

    let doc = WikiParser::default().parse("it like a piece of a cake.\n");
    let engine = ValidatorEngine::with_validators(vec![Box::new(validator)]);
    assert_eq!(engine.validate(&doc).len(), 1);
}

#[test]
fn test_failed_validator_is_excluded_but_reported() {
    let configs = vec![
        // no `dict` property, so this one cannot initialize
        ValidatorConfig::new("suggest-expression"),
        ValidatorConfig::new("sentence-length").with_property("max_length", "25"),
    ];
    let engine = ValidatorEngine::new(&configs).unwrap();
    assert_eq!(engine.validator_count(), 1);
    assert_eq!(engine.initialization_errors().len(), 1);
    assert!(engine.initialization_errors()[0]
        .message()
        .contains("suggest-expression"));

    let doc = WikiParser::default().parse("A sentence well past the configured length limit.\n");
    assert_eq!(engine.validate(&doc).len(), 1);
}

#[test]
fn test_section_and_document_validators_via_registry() {
    let configs = vec![
        ValidatorConfig::new("paragraph-number").with_property("max_paragraphs", "1"),
        ValidatorConfig::new("section-depth").with_property("max_depth", "1"),
    ];
    let engine = ValidatorEngine::new(&configs).unwrap();

    let text = "h1. Top.\n\
                First paragraph here.\n\
                \n\
                Second paragraph here.\n\
                h2. Nested.\n\
                Nested body.\n";
    let doc = WikiParser::default().parse(text);
    let errors = engine.validate(&doc);
    assert_eq!(errors.len(), 2);
    // section-granularity errors come before whole-document ones
    assert!(errors[0].message().contains("paragraphs"));
    assert!(errors[1].message().contains("depth"));
}

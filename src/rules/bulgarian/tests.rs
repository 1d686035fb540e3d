use crate::rules::bulgarian;
use crate::{Pipeline, Primitive, Token};

fn table() -> Pipeline {
    bulgarian::pipeline().unwrap()
}

#[test]
fn bulgarian_examples_matching() {
    // (input, tag, expected candidates in order)
    let cases: Vec<(&str, Option<&str>, Vec<&str>)> = vec![
        ("novy", Some("adj."), vec!["нов"]),
        ("Novy", Some("adj."), vec!["Нов"]),
        ("NOVY", Some("adj."), vec!["НОВ"]),
        ("novy", None, vec!["нови"]),
        ("mirny", Some("adj."), vec!["мирен", "мировен"]),
        ("pisati", Some("v. tr. ipf."), vec!["писаа", "писая", "писам", "писаам", "писаям", "писавам", "писавям"]),
        ("Hteti", Some("v. ipf."), vec!["Щеа", "Щея", "Щем", "Щеам", "Щеям", "Щевам", "Щевям"]),
        ("člověk", Some("m."), vec!["човек", "човяк", "човак"]),
        ("krv", Some("f."), vec!["кърв", "кръв"]),
        ("sȯn", Some("m."), vec!["сън", "сн"]),
        ("studente", Some("m.pl."), vec!["студенти"]),
        ("studente", Some("m."), vec!["студенте"]),
        ("znańje", Some("n."), vec!["знане", "знание"]),
        ("ščit", Some("m."), vec!["щит"]),
        ("ńebo", Some("n."), vec!["небо"]),
    ];

    let pipeline = table();

    for (input, tag, expected) in cases {
        let token = match tag {
            Some(tag) => Token::tagged(input, tag),
            None => Token::new(input),
        };
        let out = pipeline.transform(&token);
        assert_eq!(out, expected, "input {input:?} tagged {tag:?}");
    }
}

#[test]
fn table_is_framed_by_case_rules() {
    let pipeline = table();
    assert_eq!(pipeline.name(), bulgarian::NAME);
    assert_eq!(pipeline.len(), bulgarian::get().len());
    assert!(matches!(pipeline.rules().first().map(|r| r.primitive()), Some(Primitive::LowerCase)));
    assert!(matches!(pipeline.rules().last().map(|r| r.primitive()), Some(Primitive::RestoreCase)));
}

#[test]
fn every_inner_rule_has_a_section() {
    let pipeline = table();
    let rules = pipeline.rules();
    for rule in &rules[1..rules.len() - 1] {
        assert!(rule.section().is_some(), "rule {:?} has no section", rule.name());
    }
    assert_eq!(rules[1].section(), Some("Nouns"));
}

#[test]
fn output_is_fully_cyrillic_for_plain_latin_words() {
    let pipeline = table();
    for word in ["dom", "voda", "brat", "zemja", "kniga"] {
        for candidate in pipeline.transform(&Token::tagged(word, "f.")) {
            assert!(
                candidate.chars().all(|c| !c.is_ascii_alphabetic()),
                "{word:?} left Latin letters in {candidate:?}"
            );
        }
    }
}

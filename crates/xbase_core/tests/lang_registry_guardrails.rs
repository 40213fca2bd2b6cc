use std::collections::HashMap;

use xbase_core::lang::builtins;
use xbase_core::lang::keywords;
use xbase_core::lang::operators::{self, Fixity, OperatorId};
use xbase_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    // Reserved words are case-insensitive, so uniqueness is checked on the folded spelling.
    let mut seen: HashMap<String, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::from_str_ignore_case(&info.canonical.to_ascii_uppercase()),
            Some(info.id),
            "keyword upper-case spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical.to_ascii_lowercase(), info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                keywords::from_str_ignore_case(alias),
                Some(info.id),
                "keyword alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias.to_ascii_lowercase(), info.id) {
                panic!(
                    "duplicate keyword alias spelling {:?}: {:?} and {:?}",
                    alias, prev, info.id
                );
            }
        }
    }
}

#[test]
fn builtins_spellings_unique_and_resolvable() {
    let mut seen: HashMap<String, builtins::BuiltinFnId> = HashMap::new();

    for info in builtins::BUILTIN_FUNCTIONS {
        assert_eq!(
            builtins::from_str(info.canonical),
            Some(info.id),
            "builtin canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            builtins::from_str_ignore_case(&info.canonical.to_ascii_lowercase()),
            Some(info.id),
            "builtin lower-case spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            builtins::as_str(info.id),
            info.canonical,
            "builtin as_str mismatch for {:?}",
            info.id
        );
        assert!(!info.description.is_empty(), "builtin {:?} has no description", info.id);

        if let Some(prev) = seen.insert(info.canonical.to_ascii_lowercase(), info.id) {
            panic!(
                "duplicate builtin spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                builtins::from_str(alias),
                Some(info.id),
                "builtin alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias.to_ascii_lowercase(), info.id) {
                panic!(
                    "duplicate builtin alias spelling {:?}: {:?} and {:?}",
                    alias, prev, info.id
                );
            }
        }
    }
}

#[test]
fn builtins_do_not_shadow_keywords() {
    for info in builtins::BUILTIN_FUNCTIONS {
        assert_eq!(
            keywords::from_str_ignore_case(info.canonical),
            None,
            "builtin {} collides with a reserved word",
            info.canonical
        );
    }
}

#[test]
fn object_vocabulary_is_not_classic_clipper() {
    use xbase_core::lang::keywords::KeywordId;
    use xbase_core::lang::registry::Dialect;

    for id in [KeywordId::Class, KeywordId::Method, KeywordId::Data, KeywordId::EndClass, KeywordId::SelfKw] {
        assert_ne!(keywords::info_for(id).origin, Dialect::Clipper, "{:?}", id);
    }
    assert_eq!(keywords::info_for(KeywordId::Local).origin, Dialect::Clipper);
    assert_eq!(punctuation::info_for(punctuation::PunctuationId::ColonColon).origin, Dialect::Harbour);
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert!(!info.spellings.is_empty(), "operator {:?} has no spelling", info.id);
        for &sp in info.spellings {
            assert_eq!(
                operators::from_str(sp),
                Some(info.id),
                "operator spelling not resolvable: {}",
                sp
            );
            assert_eq!(
                operators::from_str_ignore_case(&sp.to_ascii_lowercase()),
                Some(info.id),
                "operator lower-case spelling not resolvable: {}",
                sp
            );
            if let Some(prev) = seen.insert(sp, info.id) {
                panic!("duplicate operator spelling {:?}: {:?} and {:?}", sp, prev, info.id);
            }
        }
    }
}

#[test]
fn operator_precedence_ladder_is_ordered() {
    let prec = |id| operators::info_for(id).precedence;

    assert!(prec(OperatorId::Assign) < prec(OperatorId::Or));
    assert!(prec(OperatorId::Or) < prec(OperatorId::And));
    assert!(prec(OperatorId::And) < prec(OperatorId::EqEq));
    assert_eq!(prec(OperatorId::EqEq), prec(OperatorId::Eq));
    assert_eq!(prec(OperatorId::EqEq), prec(OperatorId::NotEq));
    assert!(prec(OperatorId::EqEq) < prec(OperatorId::Lt));
    assert_eq!(prec(OperatorId::Lt), prec(OperatorId::Contains));
    assert!(prec(OperatorId::Lt) < prec(OperatorId::Plus));
    assert!(prec(OperatorId::Plus) < prec(OperatorId::Star));
    assert!(prec(OperatorId::Star) < prec(OperatorId::Not));
    assert_eq!(operators::info_for(OperatorId::Not).fixity, Fixity::Prefix);
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
        assert_eq!(
            operators::from_str(info.canonical),
            None,
            "punctuation {} is also an operator spelling",
            info.canonical
        );
    }
}

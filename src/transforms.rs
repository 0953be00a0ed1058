use crate::transformer::{Rule, RuleType};

/// Verbs whose て/た forms use the っ euphonic change of 行く rather than the
/// regular い change of other く-verbs.
pub const IKU_VERBS: [&str; 4] = ["いく", "行く", "逝く", "往く"];

/// う-verbs taking the classical うて/うた euphonic change.
pub const GODAN_U_SPECIAL_VERBS: [&str; 12] = [
    "こう", "とう", "請う", "乞う", "恋う", "問う", "訪う", "宣う", "曰う", "給う", "賜う",
    "揺蕩う",
];

/// ふ-verb spellings paired with the root their て-form conjugates from.
pub const FU_VERB_TE_CONJUGATIONS: [[&str; 2]; 3] = [
    ["のたまう", "のたもう"],
    ["たまう", "たもう"],
    ["たゆたう", "たゆとう"],
];

fn to_owned_conditions(conditions: &[&str]) -> Vec<String> {
    conditions.iter().map(|s| s.to_string()).collect()
}

/// Builds a suffix-replacement rule: strip `inflected_suffix` from the end of
/// a candidate and append `deinflected_suffix`.
pub fn suffix_inflection(
    inflected_suffix: &str,
    deinflected_suffix: &str,
    conditions_in: &[&str],
    conditions_out: &[&str],
) -> Rule {
    Rule {
        rule_type: RuleType::Suffix,
        is_inflected: Some(format!("{inflected_suffix}$")),
        deinflected: deinflected_suffix.to_string(),
        conditions_in: to_owned_conditions(conditions_in),
        conditions_out: to_owned_conditions(conditions_out),
    }
}

/// Builds a prefix-replacement rule, symmetric to [`suffix_inflection`].
pub fn prefix_inflection(
    inflected_prefix: &str,
    deinflected_prefix: &str,
    conditions_in: &[&str],
    conditions_out: &[&str],
) -> Rule {
    Rule {
        rule_type: RuleType::Prefix,
        is_inflected: Some(format!("^{inflected_prefix}")),
        deinflected: deinflected_prefix.to_string(),
        conditions_in: to_owned_conditions(conditions_in),
        conditions_out: to_owned_conditions(conditions_out),
    }
}

/// Builds an exact-match rule: the whole candidate is replaced.
pub fn whole_word_inflection(
    inflected_word: &str,
    deinflected_word: &str,
    conditions_in: &[&str],
    conditions_out: &[&str],
) -> Rule {
    Rule {
        rule_type: RuleType::WholeWord,
        is_inflected: Some(format!("^{inflected_word}$")),
        deinflected: deinflected_word.to_string(),
        conditions_in: to_owned_conditions(conditions_in),
        conditions_out: to_owned_conditions(conditions_out),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum IrregularVerbSuffix {
    て,
    た,
    たら,
    たり,
}

impl std::fmt::Display for IrregularVerbSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Expands the irregular て/た families: the 行く-class verbs (いって→いく),
/// the classical う-verbs (こうて→こう) and the ふ-verbs (たもうて→たまう).
pub fn irregular_verb_suffix_inflections(
    suffix: IrregularVerbSuffix,
    conditions_in: &[&str],
    conditions_out: &[&str],
) -> Vec<Rule> {
    let suffix_str = suffix.to_string();

    let iku_inflections = IKU_VERBS.iter().map(|verb| {
        let first_char = verb.chars().next().unwrap();
        let inflected = format!("{first_char}っ{suffix_str}");
        suffix_inflection(&inflected, verb, conditions_in, conditions_out)
    });

    let godan_inflections = GODAN_U_SPECIAL_VERBS.iter().map(|verb| {
        let inflected = format!("{verb}{suffix_str}");
        suffix_inflection(&inflected, verb, conditions_in, conditions_out)
    });

    let fu_inflections = FU_VERB_TE_CONJUGATIONS.iter().map(|[verb, te_root]| {
        let inflected = format!("{te_root}{suffix_str}");
        suffix_inflection(&inflected, verb, conditions_in, conditions_out)
    });

    iku_inflections
        .chain(godan_inflections)
        .chain(fu_inflections)
        .collect()
}

#[cfg(test)]
mod inflection_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn suffix() {
        let sr = suffix_inflection("ければ", "い", &["-ば"], &["adj-i"]);
        assert_eq!(sr.is_inflected.as_deref(), Some("ければ$"));
        assert_eq!(sr.deinflected, "い");
        assert_eq!(sr.conditions_in, vec!["-ば".to_string()]);
        assert_eq!(sr.conditions_out, vec!["adj-i".to_string()]);
    }

    #[test]
    fn irregular_verb_suffix() {
        let て = irregular_verb_suffix_inflections(IrregularVerbSuffix::て, &["-て"], &["v5"]);
        assert_eq!(
            て.first(),
            Some(&suffix_inflection("いって", "いく", &["-て"], &["v5"]))
        );
        assert!(て.contains(&suffix_inflection("行って", "行く", &["-て"], &["v5"])));
        assert!(て.contains(&suffix_inflection("問うて", "問う", &["-て"], &["v5"])));
        assert!(て.contains(&suffix_inflection("たもうて", "たまう", &["-て"], &["v5"])));
        assert_eq!(て.len(), IKU_VERBS.len() + GODAN_U_SPECIAL_VERBS.len() + FU_VERB_TE_CONJUGATIONS.len());

        let た = irregular_verb_suffix_inflections(IrregularVerbSuffix::た, &["-た"], &["v5"]);
        assert!(た.contains(&suffix_inflection("行った", "行く", &["-た"], &["v5"])));
    }
}

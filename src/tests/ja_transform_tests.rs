use pretty_assertions::assert_eq;

use crate::ja::transforms::{JAPANESE_TRANSFORMS, TRANSFORMS};
use crate::transformer::{LanguageTransformer, ALL_CONDITIONS};
use crate::transformer_internal::TransformedText;

fn transformer() -> LanguageTransformer {
    let mut lt = LanguageTransformer::new();
    lt.add_descriptor(&JAPANESE_TRANSFORMS).unwrap();
    lt
}

fn rule_names(candidate: &TransformedText) -> Vec<&str> {
    candidate
        .trace
        .iter()
        .map(|frame| frame.transform.as_str())
        .collect()
}

fn find_candidate<'a>(
    results: &'a [TransformedText],
    text: &str,
    expected_rules: &[&str],
) -> Option<&'a TransformedText> {
    results
        .iter()
        .find(|c| c.text == text && rule_names(c) == expected_rules)
}

/// Replays one trace frame against the descriptor it came from. Every rule
/// in the Japanese descriptor is a suffix rule.
fn apply_descriptor_rule(transform_id: &str, rule_index: u32, text: &str) -> Option<String> {
    let transform = TRANSFORMS.get(transform_id)?;
    let rule = transform.rules.get(rule_index as usize)?;
    let pattern = rule.is_inflected.as_deref()?.strip_suffix('$')?;
    if text.len() > pattern.len() && text.ends_with(pattern) {
        Some(format!(
            "{}{}",
            &text[..text.len() - pattern.len()],
            rule.deinflected
        ))
    } else {
        None
    }
}

#[test]
fn unmodified_input_is_yielded_first() {
    let lt = transformer();
    let first = lt.transform("食べさせられたくなかった").next().unwrap();
    assert_eq!(first.text, "食べさせられたくなかった");
    assert_eq!(first.conditions, ALL_CONDITIONS);
    assert_eq!(first.trace.len(), 0);
}

#[test]
fn polite_past() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("食べました").collect();
    let candidate = find_candidate(&results, "食べる", &["polite past"]).unwrap();
    assert_eq!(candidate.conditions, lt.condition_flags_of("v1").unwrap());
    // The candidate is an ichidan verb, not a godan verb.
    let v5 = lt.condition_flags_of("v5").unwrap();
    assert_eq!(candidate.conditions & v5, 0);
}

#[test]
fn causative_potential_tai_negative_past_chain() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("食べさせられたくなかった").collect();
    let candidate = find_candidate(
        &results,
        "食べる",
        &["causative", "potential or passive", "-tai", "negative", "past"],
    )
    .unwrap();
    assert!(LanguageTransformer::conditions_match(
        candidate.conditions,
        lt.condition_flags_of("v1").unwrap(),
    ));
}

#[test]
fn causative_passive() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("買わされる").collect();
    let candidate = find_candidate(&results, "買う", &["causative passive"]).unwrap();
    assert_eq!(candidate.conditions, lt.condition_flags_of("v5").unwrap());
}

#[test]
fn te_shimau() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("行ってしまう").collect();
    assert!(find_candidate(&results, "行く", &["-te", "-shimau"]).is_some());
}

#[test]
fn illegal_suru_inflection_is_unreachable() {
    // すた is not a form of する: the ichidan past rules spell out the
    // e-row/i-row stems, so no rule reconstructs a u-row stem from た.
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("すた").collect();
    assert!(results.iter().all(|c| c.text != "する"));
    assert_eq!(results.len(), 1);
}

#[test]
fn ge_expansion_hazard_is_pruned() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("かわいげ").collect();
    assert!(results.iter().all(|c| c.text != "かわいい"));
}

#[test]
fn ge_kanji_spelling_still_deinflects() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("かわい気").collect();
    assert!(find_candidate(&results, "かわいい", &["-ge"]).is_some());
}

#[test]
fn spurious_masu_stem_chain_is_condition_blocked() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("食べて").collect();
    // The direct te-form reading exists...
    assert!(find_candidate(&results, "食べる", &["-te"]).is_some());
    // ...but the chain through a reconstructed てる is not derivable: the
    // masu stem emits the dictionary-form sub-condition, which the
    // progressive-or-perfect rules do not accept.
    assert!(find_candidate(
        &results,
        "食べる",
        &["-te", "progressive or perfect", "masu stem"],
    )
    .is_none());
}

#[test]
fn progressive() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("食べている").collect();
    assert!(find_candidate(&results, "食べる", &["-te", "progressive or perfect"]).is_some());

    let results: Vec<TransformedText> = lt.transform("食べていた").collect();
    assert!(find_candidate(
        &results,
        "食べる",
        &["-te", "progressive or perfect", "past"],
    )
    .is_some());
}

#[test]
fn adjective_forms() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("かわいく").collect();
    assert!(find_candidate(&results, "かわいい", &["adv"]).is_some());

    let results: Vec<TransformedText> = lt.transform("かわいさ").collect();
    assert!(find_candidate(&results, "かわいい", &["noun"]).is_some());

    let results: Vec<TransformedText> = lt.transform("かわいくなかった").collect();
    assert!(find_candidate(&results, "かわいい", &["negative", "past"]).is_some());
}

#[test]
fn contracted_conditional() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("行きゃ").collect();
    assert!(find_candidate(&results, "行く", &["-ba", "-ya"]).is_some());
}

#[test]
fn kansai_ben_te_form() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("買うて").collect();
    assert!(find_candidate(&results, "買う", &["-te", "kansai-ben"]).is_some());
}

#[test]
fn polite_chains() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("食べましょう").collect();
    assert!(find_candidate(&results, "食べる", &["polite", "polite volitional"]).is_some());

    let results: Vec<TransformedText> = lt.transform("食べませんでした").collect();
    assert!(find_candidate(&results, "食べる", &["polite", "polite past negative"]).is_some());
}

#[test]
fn suru_forms() {
    let lt = transformer();
    let results: Vec<TransformedText> = lt.transform("勉強しました").collect();
    assert!(find_candidate(&results, "勉強する", &["polite past"]).is_some());

    let results: Vec<TransformedText> = lt.transform("すれば").collect();
    assert!(find_candidate(&results, "する", &["-ba"]).is_some());
}

const PROPERTY_SOURCES: [&str; 6] = [
    "食べさせられたくなかった",
    "買わされる",
    "行ってしまう",
    "かわいげ",
    "食べました",
    "来ませんでした",
];

#[test]
fn determinism() {
    let lt = transformer();
    for source in PROPERTY_SOURCES {
        let first: Vec<TransformedText> = lt.transform(source).collect();
        let second: Vec<TransformedText> = lt.transform(source).collect();
        assert_eq!(first, second);
    }
}

#[test]
fn trace_faithfulness() {
    // Replaying the traced rules from the surface form forward reproduces
    // every intermediate text and ends at the candidate.
    let lt = transformer();
    for source in PROPERTY_SOURCES {
        for candidate in lt.transform(source) {
            if candidate.trace.is_empty() {
                continue;
            }
            assert_eq!(candidate.trace.last().unwrap().text, source);
            let mut expected = candidate.text.as_str();
            for frame in &candidate.trace {
                let replayed =
                    apply_descriptor_rule(&frame.transform, frame.rule_index, &frame.text)
                        .unwrap_or_else(|| {
                            panic!("rule {}[{}] no longer applies", frame.transform, frame.rule_index)
                        });
                assert_eq!(replayed, expected);
                expected = &frame.text;
            }
        }
    }
}

#[test]
fn condition_closure() {
    // A candidate's conditions are exactly the conditions_out of the last
    // applied rule, or ALL for the untouched input.
    let lt = transformer();
    for source in PROPERTY_SOURCES {
        for candidate in lt.transform(source) {
            match candidate.trace.first() {
                None => assert_eq!(candidate.conditions, ALL_CONDITIONS),
                Some(frame) => {
                    let rule = &TRANSFORMS.get(frame.transform.as_str()).unwrap().rules
                        [frame.rule_index as usize];
                    let expected = lt
                        .get_condition_flags_from_condition_types(&rule.conditions_out)
                        .unwrap();
                    assert_eq!(candidate.conditions, expected);
                }
            }
        }
    }
}

#[test]
fn termination_and_depth_bound() {
    let lt = transformer();
    for source in PROPERTY_SOURCES {
        let results: Vec<TransformedText> = lt.transform(source).collect();
        assert!(!results.is_empty());
        assert!(results.iter().all(|c| c.trace.len() <= 16));
        // No (text, conditions) pair appears twice.
        let mut seen = std::collections::HashSet::new();
        for candidate in &results {
            assert!(seen.insert((candidate.text.clone(), candidate.conditions)));
        }
    }
}

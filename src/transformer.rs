use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use snafu::ResultExt;

use crate::transformer_internal::{
    InternalRule, InternalTransform, Trace, TraceFrame, TransformedText,
};

/// Initial condition set of every search: no constraint on the stem's
/// grammatical category.
pub const ALL_CONDITIONS: u32 = 0;

/// Condition flags are packed into a `u32`; a descriptor with more leaf
/// conditions than this fails to load rather than truncating.
const MAX_FLAG_LIMIT: usize = 32;

/// States whose trace has reached this depth are still yielded but are not
/// expanded further.
const MAX_TRACE_DEPTH: usize = 16;

/// Errors for [`LanguageTransformer::add_descriptor`].
#[derive(snafu::Snafu, Debug)]
pub enum LanguageTransformerError {
    #[snafu(display("Invalid conditions for transform: {transform_id}.rules[{index}]"))]
    InvalidConditions {
        source: ConditionError,
        transform_id: String,
        index: usize,
    },
    #[snafu(display("Malformed rule in transform: {transform_id}.rules[{index}]: {reason}"))]
    MalformedRule {
        transform_id: String,
        index: usize,
        reason: String,
    },
    #[snafu(display("Transform has no rules: {transform_id}"))]
    EmptyTransform { transform_id: String },
    #[snafu(display(
        "No-op rule in transform: {transform_id}.rules[{index}] (pattern, replacement and conditions are all unchanged)"
    ))]
    DegenerateRule { transform_id: String, index: usize },
    #[snafu(display("Failed to build condition flags map: {source}"))]
    ConditionsFlagMap { source: ConditionError },
}

#[derive(thiserror::Error)]
pub enum ConditionError {
    #[error("Map does not contain condition: ({condition:?})")]
    Missing { index: usize, condition: String },
    #[error("`condition_types` is empty.")]
    EmptyTypes,
    #[error("Cycle detected in sub-condition declarations. The conditions [{conditions}] form a dependency cycle. Sub-conditions cannot reference each other in a loop.")]
    SubConditionCycle { conditions: String },
    #[error("Maximum number of conditions was exceeded.")]
    MaxConditions,
}

impl std::fmt::Debug for ConditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LanguageTransformer {
    next_flag_index: usize,
    transforms: Vec<InternalTransform>,
    condition_type_to_condition_flags_map: IndexMap<String, u32>,
    part_of_speech_to_condition_flags_map: IndexMap<String, u32>,
}

impl LanguageTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the transformer to its freshly-constructed state.
    pub fn clear(&mut self) {
        self.next_flag_index = 0;
        self.transforms.clear();
        self.condition_type_to_condition_flags_map.clear();
        self.part_of_speech_to_condition_flags_map.clear();
    }

    /// Compiles `descriptor` and appends its transforms to this transformer.
    ///
    /// Condition names are resolved to bitmasks and literal patterns are
    /// derived from the anchored `is_inflected` strings here; the search
    /// performs no name lookups. On error the transformer keeps its prior
    /// state: nothing is committed until the whole descriptor has compiled.
    pub fn add_descriptor(
        &mut self,
        descriptor: &LanguageTransformDescriptor,
    ) -> Result<(), LanguageTransformerError> {
        let condition_entries = descriptor.condition_entries();
        let condition_flags_map = self
            .get_condition_flags_map(condition_entries.clone(), self.next_flag_index)
            .context(ConditionsFlagMapSnafu)?;

        let mut transforms2: Vec<InternalTransform> = Vec::with_capacity(descriptor.transforms.len());

        for (transform_id, transform) in descriptor.transforms.iter() {
            if transform.rules.is_empty() {
                return Err(LanguageTransformerError::EmptyTransform {
                    transform_id: transform_id.clone(),
                });
            }
            let mut rules2: Vec<InternalRule> = Vec::with_capacity(transform.rules.len());
            for (j, rule) in transform.rules.iter().enumerate() {
                let condition_flags_in = LanguageTransformer::get_condition_flags_strict(
                    &condition_flags_map.map,
                    &rule.conditions_in,
                )
                .context(InvalidConditionsSnafu {
                    transform_id: transform_id.clone(),
                    index: j,
                })?;

                let condition_flags_out = LanguageTransformer::get_condition_flags_strict(
                    &condition_flags_map.map,
                    &rule.conditions_out,
                )
                .context(InvalidConditionsSnafu {
                    transform_id: transform_id.clone(),
                    index: j,
                })?;

                let pattern = Self::derive_pattern(rule).map_err(|reason| {
                    LanguageTransformerError::MalformedRule {
                        transform_id: transform_id.clone(),
                        index: j,
                        reason,
                    }
                })?;

                if pattern == rule.deinflected && condition_flags_in == condition_flags_out {
                    return Err(LanguageTransformerError::DegenerateRule {
                        transform_id: transform_id.clone(),
                        index: j,
                    });
                }

                rules2.push(InternalRule {
                    rule_type: rule.rule_type,
                    pattern,
                    deinflected: rule.deinflected.clone(),
                    conditions_in: condition_flags_in,
                    conditions_out: condition_flags_out,
                });
            }
            transforms2.push(InternalTransform {
                id: transform_id.clone(),
                name: transform.name.clone(),
                description: transform.description.clone(),
                rules: rules2,
            });
        }

        self.next_flag_index = condition_flags_map.next_flag_index;
        self.transforms.extend(transforms2);
        for ConditionMapEntry(condition_type, condition) in &condition_entries {
            if let Some(flags) = condition_flags_map.map.get(condition_type.as_str()) {
                self.condition_type_to_condition_flags_map
                    .insert(condition_type.clone(), *flags);
                if condition.is_dictionary_form {
                    self.part_of_speech_to_condition_flags_map
                        .insert(condition_type.clone(), *flags);
                }
            }
        }
        Ok(())
    }

    /// Extracts the literal match pattern from a rule's anchored
    /// `is_inflected` string, validating it along the way.
    fn derive_pattern(rule: &Rule) -> Result<String, String> {
        let raw = match (&rule.is_inflected, rule.rule_type) {
            (Some(raw), _) => raw.as_str(),
            (None, RuleType::Other) => return Ok(String::new()),
            (None, _) => return Err("missing `isInflected` pattern".to_string()),
        };
        Regex::new(raw).map_err(|e| format!("invalid `isInflected` pattern: {e}"))?;
        if rule.rule_type == RuleType::Other {
            // Kept verbatim; the engine treats `other` rules as inapplicable.
            return Ok(raw.to_string());
        }
        let literal = match rule.rule_type {
            RuleType::Suffix => raw
                .strip_suffix('$')
                .ok_or_else(|| "suffix pattern must end with `$`".to_string())?,
            RuleType::Prefix => raw
                .strip_prefix('^')
                .ok_or_else(|| "prefix pattern must start with `^`".to_string())?,
            RuleType::WholeWord => raw
                .strip_prefix('^')
                .and_then(|r| r.strip_suffix('$'))
                .ok_or_else(|| "whole-word pattern must be anchored with `^` and `$`".to_string())?,
            RuleType::Other => unreachable!(),
        };
        if regex::escape(literal) != literal {
            return Err(format!("pattern `{raw}` is not a literal"));
        }
        // An empty suffix/prefix pattern matches every non-empty candidate;
        // there is no stem boundary to strip at. Whole-word is exact-match
        // and stays well-defined when empty.
        if literal.is_empty() && matches!(rule.rule_type, RuleType::Suffix | RuleType::Prefix) {
            return Err("suffix and prefix patterns must be non-empty".to_string());
        }
        Ok(literal.to_string())
    }

    pub fn get_condition_flags_from_parts_of_speech(
        &self,
        parts_of_speech: &[impl AsRef<str>],
    ) -> Option<u32> {
        Self::get_condition_flags(&self.part_of_speech_to_condition_flags_map, parts_of_speech)
    }

    pub fn get_condition_flags_from_condition_types(
        &self,
        condition_types: &[impl AsRef<str>],
    ) -> Option<u32> {
        Self::get_condition_flags(&self.condition_type_to_condition_flags_map, condition_types)
    }

    pub fn get_condition_flags_from_single_condition_type<T: AsRef<str>>(
        &self,
        condition_type: T,
    ) -> Option<u32> {
        Self::get_condition_flags(
            &self.condition_type_to_condition_flags_map,
            &[condition_type.as_ref()],
        )
    }

    /// Expanded flags for a named condition type.
    pub fn condition_flags_of(&self, name: impl AsRef<str>) -> Result<u32, ConditionError> {
        let name = name.as_ref();
        self.condition_type_to_condition_flags_map
            .get(name)
            .copied()
            .ok_or_else(|| ConditionError::Missing {
                index: 0,
                condition: name.to_string(),
            })
    }

    /// Enumerates every candidate reachable from `source_text` by repeatedly
    /// applying rules, in breadth-first order. The returned iterator is lazy:
    /// abandoning it abandons the remaining search. An empty source yields an
    /// empty sequence; the first item of a non-empty search is always the
    /// unmodified input itself.
    pub fn transform(&self, source_text: impl AsRef<str>) -> TransformIterator<'_> {
        let source_text = source_text.as_ref();
        let mut queue = VecDeque::new();
        let mut visited = HashSet::with_capacity(64);
        if !source_text.is_empty() {
            visited.insert((source_text.to_string(), ALL_CONDITIONS));
            queue.push_back(LanguageTransformer::create_transformed_text(
                source_text,
                ALL_CONDITIONS,
                Vec::new(),
            ));
        }
        TransformIterator {
            transformer: self,
            queue,
            visited,
        }
    }

    /// Prepends `new_frame`, keeping the most recent application first.
    pub fn extend_trace(trace: &Trace, new_frame: TraceFrame) -> Trace {
        let mut new_trace = Vec::with_capacity(trace.len() + 1);
        new_trace.push(new_frame);
        new_trace.extend(trace.iter().cloned());
        new_trace
    }

    pub fn get_user_facing_inflection_rules(
        &self,
        inflection_rules: &[&str],
    ) -> InflectionRuleChain {
        inflection_rules
            .iter()
            .map(|rule| {
                let full_rule = self
                    .transforms
                    .iter()
                    .find(|transform| transform.id == *rule);
                if let Some(full_rule) = full_rule {
                    return InflectionRule {
                        name: full_rule.name.clone(),
                        description: full_rule.description.clone(),
                    };
                }
                InflectionRule {
                    name: rule.to_string(),
                    description: None,
                }
            })
            .collect()
    }

    pub fn create_transformed_text(
        text: impl AsRef<str>,
        conditions: u32,
        trace: Trace,
    ) -> TransformedText {
        TransformedText {
            text: text.as_ref().to_string(),
            conditions,
            trace,
        }
    }

    /// Acceptance predicate gating every rule application.
    ///
    /// A candidate's current condition set is compatible with a rule's
    /// required set when they share at least one bit, when the rule imposes
    /// no requirement (`next_conditions == 0`), or when the candidate is
    /// still unconstrained ([`ALL_CONDITIONS`]).
    pub fn conditions_match(current_conditions: u32, next_conditions: u32) -> bool {
        current_conditions == ALL_CONDITIONS
            || next_conditions == 0
            || (current_conditions & next_conditions) != 0
    }

    /// Assigns a bit to each leaf condition in declaration order, then
    /// resolves composite conditions as the union of their sub-conditions by
    /// fixed point. A pass that makes no progress means the remaining
    /// declarations form a cycle.
    pub fn get_condition_flags_map(
        &self,
        conditions: Vec<ConditionMapEntry>,
        next_flag_index: usize,
    ) -> Result<ConditionFlagsMap, ConditionError> {
        if conditions.is_empty() {
            return Err(ConditionError::EmptyTypes);
        }
        let declared: HashSet<String> = conditions.iter().map(|entry| entry.0.clone()).collect();
        let mut next_flag_index = next_flag_index;
        let mut condition_flags_map = IndexMap::with_capacity(conditions.len());
        let mut targets = conditions;
        while !targets.is_empty() {
            let mut next_targets = Vec::with_capacity(targets.len());
            let targets_len = targets.len();
            for target in targets {
                let ConditionMapEntry(condition_type, condition) = target.clone();
                let flags = match condition.sub_conditions {
                    Some(ref sub_conditions) => {
                        for (index, sub) in sub_conditions.iter().enumerate() {
                            if !declared.contains(sub) {
                                return Err(ConditionError::Missing {
                                    index,
                                    condition: sub.clone(),
                                });
                            }
                        }
                        match LanguageTransformer::get_condition_flags_strict(
                            &condition_flags_map,
                            sub_conditions,
                        ) {
                            Ok(multi_flags) => multi_flags,
                            // Declared but not yet resolved: retry next pass.
                            Err(_) => {
                                next_targets.push(target);
                                continue;
                            }
                        }
                    }
                    None => {
                        if next_flag_index >= MAX_FLAG_LIMIT {
                            return Err(ConditionError::MaxConditions);
                        }
                        let flags = 1u32 << next_flag_index;
                        next_flag_index += 1;
                        flags
                    }
                };
                condition_flags_map.insert(condition_type, flags);
            }
            if next_targets.len() == targets_len {
                let cycle_conditions: Vec<String> =
                    next_targets.iter().map(|entry| entry.0.clone()).collect();
                return Err(ConditionError::SubConditionCycle {
                    conditions: cycle_conditions.join(" -> "),
                });
            }
            targets = next_targets;
        }
        Ok(ConditionFlagsMap {
            map: condition_flags_map,
            next_flag_index,
        })
    }

    pub fn get_condition_flags_strict(
        condition_flags_map: &IndexMap<String, u32>,
        condition_types: &[String],
    ) -> Result<u32, ConditionError> {
        let mut flags = 0;
        for (index, condition_type) in condition_types.iter().enumerate() {
            let Some(flags2) = condition_flags_map.get(condition_type.as_str()) else {
                return Err(ConditionError::Missing {
                    index,
                    condition: condition_type.to_string(),
                });
            };
            flags |= flags2;
        }
        Ok(flags)
    }

    fn get_condition_flags(
        condition_flags_map: &IndexMap<String, u32>,
        condition_types: &[impl AsRef<str>],
    ) -> Option<u32> {
        let mut flags = 0;
        for condition_type in condition_types {
            flags |= *condition_flags_map.get(condition_type.as_ref())?;
        }
        Some(flags)
    }
}

/// Breadth-first candidate stream over one source string. Holds the work
/// list and the visited set for the duration of the iteration.
pub struct TransformIterator<'a> {
    transformer: &'a LanguageTransformer,
    queue: VecDeque<TransformedText>,
    visited: HashSet<(String, u32)>,
}

impl Iterator for TransformIterator<'_> {
    type Item = TransformedText;

    fn next(&mut self) -> Option<TransformedText> {
        let entry = self.queue.pop_front()?;
        if entry.trace.len() < MAX_TRACE_DEPTH {
            for transform in &self.transformer.transforms {
                for (j, rule) in transform.rules.iter().enumerate() {
                    if !LanguageTransformer::conditions_match(entry.conditions, rule.conditions_in)
                    {
                        continue;
                    }
                    let Some(new_text) = rule.apply(&entry.text) else {
                        continue;
                    };
                    // Dedup on the (text, conditions) pair.
                    if !self.visited.insert((new_text.clone(), rule.conditions_out)) {
                        continue;
                    }
                    let new_trace = LanguageTransformer::extend_trace(
                        &entry.trace,
                        TraceFrame {
                            transform: transform.id.clone(),
                            rule_index: j as u32,
                            text: entry.text.clone(),
                        },
                    );
                    self.queue.push_back(LanguageTransformer::create_transformed_text(
                        new_text,
                        rule.conditions_out,
                        new_trace,
                    ));
                }
            }
        }
        Some(entry)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionMap(pub IndexMap<String, Condition>);

impl std::ops::Deref for ConditionMap {
    type Target = IndexMap<String, Condition>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct ConditionMapEntry(pub String, pub Condition);

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageTransformDescriptor {
    pub language: String,
    pub conditions: ConditionMap,
    pub transforms: TransformMap,
}

impl LanguageTransformDescriptor {
    pub fn condition_entries(&self) -> Vec<ConditionMapEntry> {
        self.conditions
            .iter()
            .map(|(name, cond)| ConditionMapEntry(name.to_string(), cond.to_owned()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionFlagsMap {
    pub map: IndexMap<String, u32>,
    pub next_flag_index: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub name: String,
    #[serde(default)]
    pub is_dictionary_form: bool,
    #[serde(default)]
    pub i18n: Option<Vec<RuleI18n>>,
    #[serde(default)]
    pub sub_conditions: Option<Vec<String>>,
}

type TransformMapInner = IndexMap<String, Transform>;

#[derive(Debug, Clone)]
pub struct TransformMap(pub TransformMapInner);

impl<'de> Deserialize<'de> for TransformMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = TransformMapInner::deserialize(deserializer)?;
        Ok(TransformMap(inner))
    }
}

impl std::ops::Deref for TransformMap {
    type Target = TransformMapInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transform {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub i18n: Option<Vec<TransformI18n>>,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransformI18n {
    pub language: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleI18n {
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Anchored literal pattern matching the inflected side, e.g. `ければ$`.
    #[serde(default)]
    pub is_inflected: Option<String>,
    #[serde(alias = "deinflect")]
    pub deinflected: String,
    pub conditions_in: Vec<String>,
    pub conditions_out: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Suffix,
    Prefix,
    WholeWord,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionRule {
    pub name: String,
    pub description: Option<String>,
}

pub type InflectionRuleChain = Vec<InflectionRule>;

#[cfg(test)]
mod language_transformer_tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ja::transforms::JAPANESE_TRANSFORMS;
    use crate::transforms::{prefix_inflection, suffix_inflection, whole_word_inflection};

    fn condition(name: &str, is_dictionary_form: bool, sub_conditions: Option<&[&str]>) -> Condition {
        Condition {
            name: name.to_string(),
            is_dictionary_form,
            i18n: None,
            sub_conditions: sub_conditions
                .map(|subs| subs.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn descriptor(
        conditions: Vec<(&str, Condition)>,
        transforms: Vec<(&str, Transform)>,
    ) -> LanguageTransformDescriptor {
        LanguageTransformDescriptor {
            language: "test".to_string(),
            conditions: ConditionMap(
                conditions
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
            transforms: TransformMap(
                transforms
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
        }
    }

    fn transform(name: &str, rules: Vec<Rule>) -> Transform {
        Transform {
            name: name.to_string(),
            description: None,
            i18n: None,
            rules,
        }
    }

    #[test]
    fn conditions_match_truth_table() {
        // Unconstrained candidate matches anything.
        assert!(LanguageTransformer::conditions_match(ALL_CONDITIONS, 0b0001));
        // Unconstrained requirement matches anything.
        assert!(LanguageTransformer::conditions_match(0b0100, 0));
        // Shared bit.
        assert!(LanguageTransformer::conditions_match(0b0110, 0b0010));
        // Disjoint sets.
        assert!(!LanguageTransformer::conditions_match(0b0100, 0b0011));
    }

    #[test]
    fn add_descriptor() {
        let mut language_transformer = LanguageTransformer::new();
        language_transformer
            .add_descriptor(&JAPANESE_TRANSFORMS)
            .unwrap();
    }

    #[test]
    fn get_condition_flags_map() {
        let assert_map = ConditionFlagsMap {
            map: IndexMap::from_iter([
                ("v1d".to_string(), 1),
                ("v1p".to_string(), 2),
                ("v5".to_string(), 4),
                ("vk".to_string(), 8),
                ("vs".to_string(), 16),
                ("vz".to_string(), 32),
                ("adj-i".to_string(), 64),
                ("-て".to_string(), 128),
                ("-ば".to_string(), 256),
                ("-ゃ".to_string(), 512),
                ("-ます".to_string(), 1024),
                ("v1".to_string(), 3),
                ("v".to_string(), 63),
            ]),
            next_flag_index: 11,
        };

        let lt = LanguageTransformer::new();
        let conditions = JAPANESE_TRANSFORMS.condition_entries();
        let condition_flags_map =
            lt.get_condition_flags_map(conditions, lt.next_flag_index);
        assert_eq!(condition_flags_map.unwrap(), assert_map);
    }

    #[test]
    fn condition_flags_of_expands_sub_conditions() {
        let mut lt = LanguageTransformer::new();
        lt.add_descriptor(&JAPANESE_TRANSFORMS).unwrap();
        let v1 = lt.condition_flags_of("v1").unwrap();
        let v1d = lt.condition_flags_of("v1d").unwrap();
        let v1p = lt.condition_flags_of("v1p").unwrap();
        assert_eq!(v1, v1d | v1p);
        assert!(lt.condition_flags_of("nonexistent").is_err());
    }

    #[test]
    fn parts_of_speech_map_only_holds_dictionary_forms() {
        let mut lt = LanguageTransformer::new();
        lt.add_descriptor(&JAPANESE_TRANSFORMS).unwrap();
        assert!(lt
            .get_condition_flags_from_parts_of_speech(&["v1", "v5"])
            .is_some());
        // Intermediate markers are not parts of speech.
        assert_eq!(lt.get_condition_flags_from_parts_of_speech(&["-て"]), None);
        assert_eq!(
            lt.get_condition_flags_from_condition_types(&["-て"]),
            Some(128)
        );
    }

    #[test]
    fn unknown_condition_reference_fails() {
        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![(
                "t",
                transform("t", vec![suffix_inflection("x", "y", &["a"], &["missing"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::InvalidConditions { .. })
        ));
    }

    #[test]
    fn sub_condition_cycle_fails() {
        let d = descriptor(
            vec![
                ("a", condition("A", false, Some(&["b"]))),
                ("b", condition("B", false, Some(&["a"]))),
            ],
            vec![(
                "t",
                transform("t", vec![suffix_inflection("x", "y", &["a"], &["b"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::ConditionsFlagMap {
                source: ConditionError::SubConditionCycle { .. }
            })
        ));
    }

    #[test]
    fn unknown_sub_condition_fails() {
        let d = descriptor(
            vec![("a", condition("A", false, Some(&["ghost"])))],
            vec![(
                "t",
                transform("t", vec![suffix_inflection("x", "y", &[], &["a"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::ConditionsFlagMap {
                source: ConditionError::Missing { .. }
            })
        ));
    }

    #[test]
    fn empty_transform_fails() {
        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![("t", transform("t", vec![]))],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::EmptyTransform { .. })
        ));
    }

    #[test]
    fn no_op_rule_fails() {
        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![(
                "t",
                transform("t", vec![suffix_inflection("x", "x", &["a"], &["a"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::DegenerateRule { .. })
        ));
    }

    #[test]
    fn condition_narrowing_rule_is_allowed() {
        // Same text on both sides is fine as long as the conditions change.
        let d = descriptor(
            vec![
                ("a", condition("A", true, None)),
                ("b", condition("B", true, None)),
            ],
            vec![(
                "t",
                transform("t", vec![suffix_inflection("x", "x", &["a"], &["b"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        assert!(lt.add_descriptor(&d).is_ok());
    }

    #[test]
    fn too_many_conditions_fails() {
        let conditions: Vec<(String, Condition)> = (0..33)
            .map(|i| (format!("c{i}"), condition(&format!("C{i}"), false, None)))
            .collect();
        let d = LanguageTransformDescriptor {
            language: "test".to_string(),
            conditions: ConditionMap(conditions.into_iter().collect()),
            transforms: TransformMap(IndexMap::from_iter([(
                "t".to_string(),
                transform("t", vec![suffix_inflection("x", "y", &["c0"], &["c1"])]),
            )])),
        };
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::ConditionsFlagMap {
                source: ConditionError::MaxConditions
            })
        ));
    }

    #[test]
    fn failed_add_descriptor_leaves_state_unchanged() {
        let mut lt = LanguageTransformer::new();
        lt.add_descriptor(&JAPANESE_TRANSFORMS).unwrap();
        let before = lt.clone();

        let bad = descriptor(
            vec![("a", condition("A", true, None))],
            vec![(
                "t",
                transform("t", vec![suffix_inflection("x", "y", &["a"], &["missing"])]),
            )],
        );
        assert!(lt.add_descriptor(&bad).is_err());
        assert_eq!(lt.next_flag_index, before.next_flag_index);
        assert_eq!(lt.transforms.len(), before.transforms.len());
        assert_eq!(
            lt.condition_type_to_condition_flags_map,
            before.condition_type_to_condition_flags_map
        );
        // Still functional after the failed add.
        assert!(lt.transform("食べました").any(|c| c.text == "食べる"));
    }

    #[test]
    fn malformed_pattern_fails() {
        let mut missing_anchor = suffix_inflection("x", "y", &["a"], &["a"]);
        missing_anchor.is_inflected = Some("x".to_string());
        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![("t", transform("t", vec![missing_anchor]))],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::MalformedRule { .. })
        ));

        let mut non_literal = suffix_inflection("x", "y", &["a"], &["a"]);
        non_literal.is_inflected = Some("x+$".to_string());
        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![("t", transform("t", vec![non_literal]))],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::MalformedRule { .. })
        ));
    }

    #[test]
    fn empty_suffix_or_prefix_pattern_fails() {
        // An empty suffix pattern would append to every candidate at every
        // depth; it must be rejected when the descriptor loads.
        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![(
                "t",
                transform("t", vec![suffix_inflection("", "x", &[], &["a"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::MalformedRule { .. })
        ));

        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![(
                "t",
                transform("t", vec![prefix_inflection("", "x", &[], &["a"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        assert!(matches!(
            lt.add_descriptor(&d),
            Err(LanguageTransformerError::MalformedRule { .. })
        ));

        // Whole-word stays exact-match with an empty pattern and loads fine.
        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![(
                "t",
                transform("t", vec![whole_word_inflection("", "x", &[], &["a"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        assert!(lt.add_descriptor(&d).is_ok());
    }

    #[test]
    fn empty_source_yields_nothing() {
        let mut lt = LanguageTransformer::new();
        lt.add_descriptor(&JAPANESE_TRANSFORMS).unwrap();
        assert_eq!(lt.transform("").count(), 0);
    }

    #[test]
    fn descriptor_deserializes_from_json() {
        let json = r#"{
            "language": "test",
            "conditions": {
                "adj": {"name": "Adjective", "isDictionaryForm": true},
                "stem": {"name": "Intermediate stem"}
            },
            "transforms": {
                "negative": {
                    "name": "negative",
                    "description": "Negative form",
                    "rules": [
                        {
                            "type": "suffix",
                            "isInflected": "nai$",
                            "deinflected": "i",
                            "conditionsIn": ["stem"],
                            "conditionsOut": ["adj"]
                        },
                        {
                            "type": "wholeword",
                            "isInflected": "^dame$",
                            "deinflect": "ii",
                            "conditionsIn": [],
                            "conditionsOut": ["adj"]
                        }
                    ]
                }
            }
        }"#;
        let d: LanguageTransformDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.language, "test");
        assert_eq!(d.transforms.len(), 1);
        // Legacy `deinflect` alias maps onto `deinflected`.
        let negative = d.transforms.get("negative").unwrap();
        assert_eq!(negative.rules[1].deinflected, "ii");
        assert_eq!(negative.rules[1].rule_type, RuleType::WholeWord);

        let mut lt = LanguageTransformer::new();
        lt.add_descriptor(&d).unwrap();
        let results: Vec<TransformedText> = lt.transform("yabanai").collect();
        assert!(results
            .iter()
            .any(|c| c.text == "yabai" && c.trace.len() == 1));
        let whole: Vec<TransformedText> = lt.transform("dame").collect();
        assert!(whole.iter().any(|c| c.text == "ii"));
    }

    #[test]
    fn cyclic_rules_terminate_via_visited_set() {
        let d = descriptor(
            vec![
                ("a", condition("A", true, None)),
                ("b", condition("B", true, None)),
            ],
            vec![
                (
                    "swap-ab",
                    transform("swap-ab", vec![suffix_inflection("a", "b", &[], &["b"])]),
                ),
                (
                    "swap-ba",
                    transform("swap-ba", vec![suffix_inflection("b", "a", &[], &["a"])]),
                ),
            ],
        );
        let mut lt = LanguageTransformer::new();
        lt.add_descriptor(&d).unwrap();
        // xa -> xb -> xa -> ... must converge: revisited (text, conditions)
        // pairs are dropped.
        let results: Vec<TransformedText> = lt.transform("xa").collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].text, "xa");
        assert_eq!(results[1].text, "xb");
        // The reconstructed "xa" differs from the seed in conditions.
        assert_eq!(results[2].text, "xa");
    }

    #[test]
    fn lengthening_rules_stop_at_depth_bound() {
        // Each application appends, so every state is novel and only the
        // depth bound terminates the expansion.
        let d = descriptor(
            vec![("a", condition("A", true, None))],
            vec![(
                "grow",
                transform("grow", vec![suffix_inflection("x", "xx", &[], &["a"])]),
            )],
        );
        let mut lt = LanguageTransformer::new();
        lt.add_descriptor(&d).unwrap();
        let results: Vec<TransformedText> = lt.transform("yx").collect();
        assert_eq!(results.len(), MAX_TRACE_DEPTH + 1);
        assert!(results.iter().all(|c| c.trace.len() <= MAX_TRACE_DEPTH));
    }

    #[test]
    fn user_facing_inflection_rules_resolve_names() {
        let mut lt = LanguageTransformer::new();
        lt.add_descriptor(&JAPANESE_TRANSFORMS).unwrap();
        let chain = lt.get_user_facing_inflection_rules(&["-te", "unknown-rule"]);
        assert_eq!(chain[0].name, "-te");
        assert_eq!(chain[1].name, "unknown-rule");
        assert_eq!(chain[1].description, None);
    }
}

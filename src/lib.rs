//! Data-driven morphological deinflection.
//!
//! Given an inflected surface form, [`LanguageTransformer::transform`]
//! enumerates every dictionary-form candidate reachable by reversing
//! suffix-replacement rules, together with the chain of transforms that
//! justifies each candidate. The rules themselves are data: a
//! [`LanguageTransformDescriptor`] names the grammatical conditions of a
//! language and the transforms gated by them, so the same engine serves any
//! language whose inflection can be described this way. A descriptor for
//! Japanese ships in [`ja::transforms`].
//!
//! ```
//! use deinflector::{LanguageTransformer, ja::transforms::JAPANESE_TRANSFORMS};
//!
//! let mut transformer = LanguageTransformer::new();
//! transformer.add_descriptor(&JAPANESE_TRANSFORMS).unwrap();
//!
//! let v1 = transformer.condition_flags_of("v1").unwrap();
//! let candidate = transformer
//!     .transform("食べました")
//!     .find(|c| c.text == "食べる")
//!     .unwrap();
//! assert!(LanguageTransformer::conditions_match(candidate.conditions, v1));
//! assert_eq!(candidate.trace[0].transform, "polite past");
//! ```
//!
//! Candidates are yielded lazily in breadth-first order; callers filter by
//! text and by condition flags against their dictionary and stop iterating
//! whenever they have enough.

pub mod descriptors;
pub mod ja;
pub mod multi_language_transformer;
pub mod transformer;
pub mod transformer_internal;
pub mod transforms;

#[cfg(test)]
mod tests;

pub use multi_language_transformer::MultiLanguageTransformer;
pub use transformer::{
    Condition, ConditionError, ConditionMap, InflectionRule, InflectionRuleChain,
    LanguageTransformDescriptor, LanguageTransformer, LanguageTransformerError, Rule, RuleType,
    Transform, TransformIterator, TransformMap, ALL_CONDITIONS,
};
pub use transformer_internal::{Trace, TraceFrame, TransformedText};

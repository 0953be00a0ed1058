use indexmap::IndexMap;

use crate::descriptors;
use crate::transformer::{
    InflectionRule, InflectionRuleChain, LanguageTransformDescriptor, LanguageTransformer,
    LanguageTransformerError, ALL_CONDITIONS,
};
use crate::transformer_internal::TransformedText;

/// One [`LanguageTransformer`] per language, keyed by the descriptor's
/// `language` field. Unknown languages fall back to inert defaults rather
/// than erroring, so callers can route lookups without pre-checking.
#[derive(Debug, Clone, Default)]
pub struct MultiLanguageTransformer {
    language_transformers: IndexMap<String, LanguageTransformer>,
}

impl MultiLanguageTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every built-in descriptor.
    pub fn prepare(&mut self) -> Result<(), LanguageTransformerError> {
        for descriptor in descriptors::language_transform_descriptors() {
            self.add_descriptor(descriptor)?;
        }
        Ok(())
    }

    pub fn add_descriptor(
        &mut self,
        descriptor: &LanguageTransformDescriptor,
    ) -> Result<(), LanguageTransformerError> {
        let mut language_transformer = LanguageTransformer::new();
        language_transformer.add_descriptor(descriptor)?;
        self.language_transformers
            .insert(descriptor.language.clone(), language_transformer);
        Ok(())
    }

    pub fn get_condition_flags_from_parts_of_speech(
        &self,
        language: impl AsRef<str>,
        parts_of_speech: &[impl AsRef<str>],
    ) -> u32 {
        self.language_transformers
            .get(language.as_ref())
            .and_then(|lt| lt.get_condition_flags_from_parts_of_speech(parts_of_speech))
            .unwrap_or(0)
    }

    pub fn get_condition_flags_from_condition_types(
        &self,
        language: impl AsRef<str>,
        condition_types: &[impl AsRef<str>],
    ) -> u32 {
        self.language_transformers
            .get(language.as_ref())
            .and_then(|lt| lt.get_condition_flags_from_condition_types(condition_types))
            .unwrap_or(0)
    }

    pub fn get_condition_flags_from_single_condition_type(
        &self,
        language: impl AsRef<str>,
        condition_type: impl AsRef<str>,
    ) -> u32 {
        self.language_transformers
            .get(language.as_ref())
            .and_then(|lt| lt.get_condition_flags_from_single_condition_type(condition_type))
            .unwrap_or(0)
    }

    pub fn transform(
        &self,
        language: impl AsRef<str>,
        source_text: impl AsRef<str>,
    ) -> Vec<TransformedText> {
        if let Some(language_transformer) = self.language_transformers.get(language.as_ref()) {
            return language_transformer.transform(source_text).collect();
        }
        vec![LanguageTransformer::create_transformed_text(
            source_text,
            ALL_CONDITIONS,
            Vec::new(),
        )]
    }

    pub fn get_user_facing_inflection_rules(
        &self,
        language: impl AsRef<str>,
        inflection_rules: &[&str],
    ) -> InflectionRuleChain {
        if let Some(language_transformer) = self.language_transformers.get(language.as_ref()) {
            return language_transformer.get_user_facing_inflection_rules(inflection_rules);
        }
        inflection_rules
            .iter()
            .map(|rule| InflectionRule {
                name: rule.to_string(),
                description: None,
            })
            .collect::<InflectionRuleChain>()
    }
}

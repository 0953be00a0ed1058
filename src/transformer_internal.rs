use crate::transformer::RuleType;

/// A transform compiled for the search loop: condition names resolved to
/// bitmasks, patterns reduced to literals.
#[derive(Debug, Clone)]
pub struct InternalTransform {
    pub id: String,
    pub name: String,
    pub rules: Vec<InternalRule>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalRule {
    pub rule_type: RuleType,
    /// Literal text that must appear at the matching position.
    pub pattern: String,
    /// Literal replacement producing the less-inflected candidate.
    pub deinflected: String,
    pub conditions_in: u32,
    pub conditions_out: u32,
}

impl InternalRule {
    /// Applies the rule to `text`, dispatching on the match kind.
    ///
    /// Suffix and prefix matches require the stem to be non-empty: the
    /// candidate must be strictly longer than the pattern. Returns `None`
    /// when the rule does not apply.
    pub fn apply(&self, text: &str) -> Option<String> {
        match self.rule_type {
            RuleType::Suffix => {
                if text.len() > self.pattern.len() && text.ends_with(&self.pattern) {
                    let base = &text[..text.len() - self.pattern.len()];
                    Some(format!("{base}{}", self.deinflected))
                } else {
                    None
                }
            }
            RuleType::Prefix => {
                if text.len() > self.pattern.len() && text.starts_with(&self.pattern) {
                    Some(format!("{}{}", self.deinflected, &text[self.pattern.len()..]))
                } else {
                    None
                }
            }
            RuleType::WholeWord => (text == self.pattern).then(|| self.deinflected.clone()),
            RuleType::Other => None,
        }
    }
}

/// One candidate produced by the search. Created once, never mutated, owned
/// by the caller after being yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedText {
    pub text: String,
    pub conditions: u32,
    pub trace: Trace,
}

/// Most-recent frame first: reading a trace front to back walks the
/// derivation from the lemma out to the surface form.
pub type Trace = Vec<TraceFrame>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    /// The candidate text the rule was applied to.
    pub text: String,
    /// Id of the transform that was applied.
    pub transform: String,
    /// Index of the rule within the transform.
    pub rule_index: u32,
}

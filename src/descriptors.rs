use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::ja::transforms::JAPANESE_TRANSFORMS;
use crate::transformer::LanguageTransformDescriptor;

/// Built-in descriptors, keyed by ISO language code.
pub static LANGUAGE_DESCRIPTORS_MAP: LazyLock<
    IndexMap<&'static str, &'static LanguageTransformDescriptor>,
> = LazyLock::new(|| IndexMap::from([("ja", &*JAPANESE_TRANSFORMS)]));

pub fn language_transform_descriptors(
) -> impl Iterator<Item = &'static LanguageTransformDescriptor> {
    LANGUAGE_DESCRIPTORS_MAP.values().copied()
}

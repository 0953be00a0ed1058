use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::transformer::{
    Condition, ConditionMap, LanguageTransformDescriptor, RuleI18n, Transform, TransformI18n,
    TransformMap,
};
use crate::transforms::{
    irregular_verb_suffix_inflections, suffix_inflection, IrregularVerbSuffix,
};

const SHIMAU_ENGLISH_DESCRIPTION: &str = "1. Shows a sense of regret/surprise when you did have volition in doing something, but it turned out to be bad to do.\n2. Shows perfective/punctual achievement. This shows that an action has been completed.\n3. Shows unintentional action: \"accidentally\".\n";

const PASSIVE_ENGLISH_DESCRIPTION: &str = "1. Indicates an action received from an action performer.\n2. Expresses respect for the subject of the action.\n";

pub static CONDITIONS: LazyLock<ConditionMap> = LazyLock::new(|| {
    ConditionMap(IndexMap::from([
        (
            "v".to_string(),
            Condition {
                name: "Verb".to_string(),
                is_dictionary_form: false,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "動詞".to_string(),
                }]),
                sub_conditions: Some(vec![
                    "v1".to_string(),
                    "v5".to_string(),
                    "vk".to_string(),
                    "vs".to_string(),
                    "vz".to_string(),
                ]),
            },
        ),
        (
            "v1".to_string(),
            Condition {
                name: "Ichidan verb".to_string(),
                is_dictionary_form: true,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "一段動詞".to_string(),
                }]),
                sub_conditions: Some(vec!["v1d".to_string(), "v1p".to_string()]),
            },
        ),
        (
            "v1d".to_string(),
            Condition {
                name: "Ichidan verb, dictionary form".to_string(),
                is_dictionary_form: false,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "一段動詞、辞書形".to_string(),
                }]),
                sub_conditions: None,
            },
        ),
        (
            "v1p".to_string(),
            Condition {
                name: "Ichidan verb, progressive or perfect form".to_string(),
                is_dictionary_form: false,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "一段動詞、進行形または完了形".to_string(),
                }]),
                sub_conditions: None,
            },
        ),
        (
            "v5".to_string(),
            Condition {
                name: "Godan verb".to_string(),
                is_dictionary_form: true,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "五段動詞".to_string(),
                }]),
                sub_conditions: None,
            },
        ),
        (
            "vk".to_string(),
            Condition {
                name: "Kuru verb".to_string(),
                is_dictionary_form: true,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "来る動詞".to_string(),
                }]),
                sub_conditions: None,
            },
        ),
        (
            "vs".to_string(),
            Condition {
                name: "Suru verb".to_string(),
                is_dictionary_form: true,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "する動詞".to_string(),
                }]),
                sub_conditions: None,
            },
        ),
        (
            "vz".to_string(),
            Condition {
                name: "Zuru verb".to_string(),
                is_dictionary_form: true,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "ずる動詞".to_string(),
                }]),
                sub_conditions: None,
            },
        ),
        (
            "adj-i".to_string(),
            Condition {
                name: "Adjective with i ending".to_string(),
                is_dictionary_form: true,
                i18n: Some(vec![RuleI18n {
                    language: "ja".to_string(),
                    name: "形容詞".to_string(),
                }]),
                sub_conditions: None,
            },
        ),
        (
            "-て".to_string(),
            Condition {
                name: "Intermediate -te endings for progressive or perfect tense".to_string(),
                is_dictionary_form: false,
                i18n: None,
                sub_conditions: None,
            },
        ),
        (
            "-ば".to_string(),
            Condition {
                name: "Intermediate -ba endings for conditional contraction".to_string(),
                is_dictionary_form: false,
                i18n: None,
                sub_conditions: None,
            },
        ),
        (
            "-ゃ".to_string(),
            Condition {
                name: "Intermediate -ya endings for contracted conditionals".to_string(),
                is_dictionary_form: false,
                i18n: None,
                sub_conditions: None,
            },
        ),
        (
            "-ます".to_string(),
            Condition {
                name: "Intermediate -masu endings for polite forms".to_string(),
                is_dictionary_form: false,
                i18n: None,
                sub_conditions: None,
            },
        ),
    ]))
});

pub static TRANSFORMS: LazyLock<TransformMap> = LazyLock::new(|| {
    TransformMap(IndexMap::from([
        (
            "-ba".to_string(),
            Transform {
                name: "-ba".to_string(),
                description: Some(
                    "(1) Conditional form; shows that the previous stated condition's establishment is the condition for the latter stated condition to occur. (2) Shows a trigger for a latter stated perception or judgment. Usage: Attach ば to the hypothetical form (kateikei) of verbs and i-adjectives.".into(),
                ),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "～ば".to_string(),
                    description: Some("仮定形".to_string()),
                }]),
                rules: vec![
                    suffix_inflection("ければ", "い", &["-ば"], &["adj-i"]),
                    suffix_inflection("えば", "う", &["-ば"], &["v5"]),
                    suffix_inflection("けば", "く", &["-ば"], &["v5"]),
                    suffix_inflection("げば", "ぐ", &["-ば"], &["v5"]),
                    suffix_inflection("せば", "す", &["-ば"], &["v5"]),
                    suffix_inflection("てば", "つ", &["-ば"], &["v5"]),
                    suffix_inflection("ねば", "ぬ", &["-ば"], &["v5"]),
                    suffix_inflection("べば", "ぶ", &["-ば"], &["v5"]),
                    suffix_inflection("めば", "む", &["-ば"], &["v5"]),
                    suffix_inflection("れば", "る", &["-ば"], &["v1", "v5", "vk", "vs", "vz"]),
                ],
            },
        ),
        (
            "-ya".to_string(),
            Transform {
                name: "-ya".to_string(),
                description: Some("Contraction of -ba.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "～ゃ".to_string(),
                    description: Some("仮定形の縮約系".to_string()),
                }]),
                rules: vec![
                    suffix_inflection("けりゃ", "ければ", &["-ゃ"], &["-ば"]),
                    suffix_inflection("きゃ", "ければ", &["-ゃ"], &["-ば"]),
                    suffix_inflection("や", "えば", &["-ゃ"], &["-ば"]),
                    suffix_inflection("きゃ", "けば", &["-ゃ"], &["-ば"]),
                    suffix_inflection("ぎゃ", "げば", &["-ゃ"], &["-ば"]),
                    suffix_inflection("しゃ", "せば", &["-ゃ"], &["-ば"]),
                    suffix_inflection("ちゃ", "てば", &["-ゃ"], &["-ば"]),
                    suffix_inflection("にゃ", "ねば", &["-ゃ"], &["-ば"]),
                    suffix_inflection("びゃ", "べば", &["-ゃ"], &["-ば"]),
                    suffix_inflection("みゃ", "めば", &["-ゃ"], &["-ば"]),
                    suffix_inflection("りゃ", "れば", &["-ゃ"], &["-ば"]),
                ],
            },
        ),
        (
            "-chau".to_string(),
            Transform {
                name: "-chau".to_string(),
                description: Some(format!("Contraction of -shimau.\n{SHIMAU_ENGLISH_DESCRIPTION}Usage: Attach しまう after the te-form of verbs, contract てしまう into ちゃう.")),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "～ちゃう".to_string(),
                    description: Some("「～てしまう」のややくだけた口頭語的表現".to_string()),
                }]),
                rules: vec![
                    suffix_inflection("ちゃう", "る", &["v5"], &["v1"]),
                    suffix_inflection("いじゃう", "ぐ", &["v5"], &["v5"]),
                    suffix_inflection("いちゃう", "く", &["v5"], &["v5"]),
                    suffix_inflection("しちゃう", "す", &["v5"], &["v5"]),
                    suffix_inflection("っちゃう", "う", &["v5"], &["v5"]),
                    suffix_inflection("っちゃう", "く", &["v5"], &["v5"]),
                    suffix_inflection("っちゃう", "つ", &["v5"], &["v5"]),
                    suffix_inflection("っちゃう", "る", &["v5"], &["v5"]),
                    suffix_inflection("んじゃう", "ぬ", &["v5"], &["v5"]),
                    suffix_inflection("んじゃう", "ぶ", &["v5"], &["v5"]),
                    suffix_inflection("んじゃう", "む", &["v5"], &["v5"]),
                    suffix_inflection("じちゃう", "ずる", &["v5"], &["vz"]),
                    suffix_inflection("しちゃう", "する", &["v5"], &["vs"]),
                    suffix_inflection("きちゃう", "くる", &["v5"], &["vk"]),
                    suffix_inflection("来ちゃう", "来る", &["v5"], &["vk"]),
                ],
            },
        ),
        (
            "-shimau".to_string(),
            Transform {
                name: "-shimau".to_string(),
                description: Some(format!("{SHIMAU_ENGLISH_DESCRIPTION}Usage: Attach しまう after the te-form of verbs.")),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "～てしまう".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("てしまう", "て", &["v5"], &["-て"]),
                    suffix_inflection("でしまう", "で", &["v5"], &["-て"]),
                ],
            },
        ),
        (
            "-nasai".to_string(),
            Transform {
                name: "-nasai".to_string(),
                description: Some("Polite imperative. Usage: Attach なさい after the continuative form (renyoukei) of verbs.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("なさい", "る", &[], &["v1"]),
                    suffix_inflection("いなさい", "う", &[], &["v5"]),
                    suffix_inflection("きなさい", "く", &[], &["v5"]),
                    suffix_inflection("ぎなさい", "ぐ", &[], &["v5"]),
                    suffix_inflection("しなさい", "す", &[], &["v5"]),
                    suffix_inflection("ちなさい", "つ", &[], &["v5"]),
                    suffix_inflection("になさい", "ぬ", &[], &["v5"]),
                    suffix_inflection("びなさい", "ぶ", &[], &["v5"]),
                    suffix_inflection("みなさい", "む", &[], &["v5"]),
                    suffix_inflection("りなさい", "る", &[], &["v5"]),
                    suffix_inflection("しなさい", "する", &[], &["vs"]),
                    suffix_inflection("きなさい", "くる", &[], &["vk"]),
                ],
            },
        ),
        (
            "-sou".to_string(),
            Transform {
                name: "-sou".to_string(),
                description: Some("Appearing that; looking like. Usage: Attach そう to the stem of adjectives.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("そう", "い", &[], &["adj-i"]),
                ],
            },
        ),
        (
            "-sugiru".to_string(),
            Transform {
                name: "-sugiru".to_string(),
                description: Some("Shows something \"is too...\" or someone is doing something \"too much\". Usage: Attach すぎる to the stem of adjectives or the continuative form of verbs.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("すぎる", "い", &["v1"], &["adj-i"]),
                    suffix_inflection("すぎる", "る", &["v1"], &["v1"]),
                    suffix_inflection("いすぎる", "う", &["v1"], &["v5"]),
                    suffix_inflection("きすぎる", "く", &["v1"], &["v5"]),
                    suffix_inflection("ぎすぎる", "ぐ", &["v1"], &["v5"]),
                    suffix_inflection("しすぎる", "す", &["v1"], &["v5"]),
                    suffix_inflection("ちすぎる", "つ", &["v1"], &["v5"]),
                    suffix_inflection("にすぎる", "ぬ", &["v1"], &["v5"]),
                    suffix_inflection("びすぎる", "ぶ", &["v1"], &["v5"]),
                    suffix_inflection("みすぎる", "む", &["v1"], &["v5"]),
                    suffix_inflection("りすぎる", "る", &["v1"], &["v5"]),
                    suffix_inflection("しすぎる", "する", &["v1"], &["vs"]),
                ],
            },
        ),
        (
            "-tai".to_string(),
            Transform {
                name: "-tai".to_string(),
                description: Some("1. Expresses the feeling of desire or hope.\n2. Used in a question, asks whether the other party wants something.\nUsage: Attach たい to the continuative form (renyoukei) of verbs. たい itself conjugates as an i-adjective.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "～たい".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("たい", "る", &["adj-i"], &["v1"]),
                    suffix_inflection("いたい", "う", &["adj-i"], &["v5"]),
                    suffix_inflection("きたい", "く", &["adj-i"], &["v5"]),
                    suffix_inflection("ぎたい", "ぐ", &["adj-i"], &["v5"]),
                    suffix_inflection("したい", "す", &["adj-i"], &["v5"]),
                    suffix_inflection("ちたい", "つ", &["adj-i"], &["v5"]),
                    suffix_inflection("にたい", "ぬ", &["adj-i"], &["v5"]),
                    suffix_inflection("びたい", "ぶ", &["adj-i"], &["v5"]),
                    suffix_inflection("みたい", "む", &["adj-i"], &["v5"]),
                    suffix_inflection("りたい", "る", &["adj-i"], &["v5"]),
                    suffix_inflection("したい", "する", &["adj-i"], &["vs"]),
                    suffix_inflection("きたい", "くる", &["adj-i"], &["vk"]),
                    suffix_inflection("じたい", "ずる", &["adj-i"], &["vz"]),
                ],
            },
        ),
        (
            "-tara".to_string(),
            Transform {
                name: "-tara".to_string(),
                description: Some("1. Denotes the latter stated event is a continuation of the previous stated event.\n2. Assumes that a matter has been completed or concluded.\nUsage: Attach たら to the continuative form (renyoukei) of verbs after euphonic change form.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "～たら".to_string(),
                    description: Some("仮定形".to_string()),
                }]),
                rules: {
                    let mut rules = vec![
                        suffix_inflection("たら", "る", &[], &["v1"]),
                        suffix_inflection("いたら", "く", &[], &["v5"]),
                        suffix_inflection("いだら", "ぐ", &[], &["v5"]),
                        suffix_inflection("したら", "す", &[], &["v5"]),
                        suffix_inflection("ったら", "う", &[], &["v5"]),
                        suffix_inflection("ったら", "つ", &[], &["v5"]),
                        suffix_inflection("ったら", "る", &[], &["v5"]),
                        suffix_inflection("んだら", "ぬ", &[], &["v5"]),
                        suffix_inflection("んだら", "ぶ", &[], &["v5"]),
                        suffix_inflection("んだら", "む", &[], &["v5"]),
                        suffix_inflection("かったら", "い", &[], &["adj-i"]),
                        suffix_inflection("したら", "する", &[], &["vs"]),
                        suffix_inflection("きたら", "くる", &[], &["vk"]),
                        suffix_inflection("来たら", "来る", &[], &["vk"]),
                        suffix_inflection("じたら", "ずる", &[], &["vz"]),
                    ];
                    rules.extend(irregular_verb_suffix_inflections(
                        IrregularVerbSuffix::たら,
                        &[],
                        &["v5"],
                    ));
                    rules
                },
            },
        ),
        (
            "-tari".to_string(),
            Transform {
                name: "-tari".to_string(),
                description: Some("1. Shows two actions occurring back and forth.\n2. Shows examples of actions and states.\nUsage: Attach たり to the continuative form (renyoukei) of verbs after euphonic change form.".into()),
                i18n: None,
                rules: {
                    let mut rules = vec![
                        suffix_inflection("たり", "る", &[], &["v1"]),
                        suffix_inflection("いたり", "く", &[], &["v5"]),
                        suffix_inflection("いだり", "ぐ", &[], &["v5"]),
                        suffix_inflection("したり", "す", &[], &["v5"]),
                        suffix_inflection("ったり", "う", &[], &["v5"]),
                        suffix_inflection("ったり", "つ", &[], &["v5"]),
                        suffix_inflection("ったり", "る", &[], &["v5"]),
                        suffix_inflection("んだり", "ぬ", &[], &["v5"]),
                        suffix_inflection("んだり", "ぶ", &[], &["v5"]),
                        suffix_inflection("んだり", "む", &[], &["v5"]),
                        suffix_inflection("かったり", "い", &[], &["adj-i"]),
                        suffix_inflection("したり", "する", &[], &["vs"]),
                        suffix_inflection("きたり", "くる", &[], &["vk"]),
                        suffix_inflection("じたり", "ずる", &[], &["vz"]),
                    ];
                    rules.extend(irregular_verb_suffix_inflections(
                        IrregularVerbSuffix::たり,
                        &[],
                        &["v5"],
                    ));
                    rules
                },
            },
        ),
        (
            "-te".to_string(),
            Transform {
                name: "-te".to_string(),
                description: Some("te-form. It has a myriad of meanings. Primarily, it is a conjunctive particle that connects two clauses together.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "～て".to_string(),
                    description: None,
                }]),
                rules: {
                    let mut rules = vec![
                        suffix_inflection("て", "る", &["-て"], &["v1"]),
                        suffix_inflection("いて", "く", &["-て"], &["v5"]),
                        suffix_inflection("いで", "ぐ", &["-て"], &["v5"]),
                        suffix_inflection("して", "す", &["-て"], &["v5"]),
                        suffix_inflection("って", "う", &["-て"], &["v5"]),
                        suffix_inflection("って", "つ", &["-て"], &["v5"]),
                        suffix_inflection("って", "る", &["-て"], &["v5"]),
                        suffix_inflection("んで", "ぬ", &["-て"], &["v5"]),
                        suffix_inflection("んで", "ぶ", &["-て"], &["v5"]),
                        suffix_inflection("んで", "む", &["-て"], &["v5"]),
                        suffix_inflection("くて", "い", &["-て"], &["adj-i"]),
                        suffix_inflection("して", "する", &["-て"], &["vs"]),
                        suffix_inflection("きて", "くる", &["-て"], &["vk"]),
                        suffix_inflection("来て", "来る", &["-て"], &["vk"]),
                        suffix_inflection("じて", "ずる", &["-て"], &["vz"]),
                    ];
                    rules.extend(irregular_verb_suffix_inflections(
                        IrregularVerbSuffix::て,
                        &["-て"],
                        &["v5"],
                    ));
                    rules
                },
            },
        ),
        (
            "-zu".to_string(),
            Transform {
                name: "-zu".to_string(),
                description: Some("Negative form of verbs; denies the latter stated action. Usage: Attach ず to the irrealis form (mizenkei) of verbs.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("ず", "る", &[], &["v1"]),
                    suffix_inflection("わず", "う", &[], &["v5"]),
                    suffix_inflection("かず", "く", &[], &["v5"]),
                    suffix_inflection("がず", "ぐ", &[], &["v5"]),
                    suffix_inflection("さず", "す", &[], &["v5"]),
                    suffix_inflection("たず", "つ", &[], &["v5"]),
                    suffix_inflection("なず", "ぬ", &[], &["v5"]),
                    suffix_inflection("ばず", "ぶ", &[], &["v5"]),
                    suffix_inflection("まず", "む", &[], &["v5"]),
                    suffix_inflection("らず", "る", &[], &["v5"]),
                    suffix_inflection("せず", "する", &[], &["vs"]),
                    suffix_inflection("こず", "くる", &[], &["vk"]),
                    suffix_inflection("ぜず", "ずる", &[], &["vz"]),
                ],
            },
        ),
        (
            "-ge".to_string(),
            Transform {
                name: "-ge".to_string(),
                description: Some("Describes a person's appearance or mental state. Usage: Attach 気 to the stem of i-adjectives.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("気", "い", &[], &["adj-i"]),
                ],
            },
        ),
        (
            "adv".to_string(),
            Transform {
                name: "adv".to_string(),
                description: Some("Adverbial form of i-adjectives.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("く", "い", &[], &["adj-i"]),
                ],
            },
        ),
        (
            "causative".to_string(),
            Transform {
                name: "causative".to_string(),
                description: Some("Describes the intention to make someone do something. Usage: Attach させる to the irrealis form (mizenkei) of ichidan verbs, せる to that of godan verbs. The result conjugates as an ichidan verb.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "使役形".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("させる", "る", &["v1"], &["v1"]),
                    suffix_inflection("わせる", "う", &["v1"], &["v5"]),
                    suffix_inflection("かせる", "く", &["v1"], &["v5"]),
                    suffix_inflection("がせる", "ぐ", &["v1"], &["v5"]),
                    suffix_inflection("させる", "す", &["v1"], &["v5"]),
                    suffix_inflection("たせる", "つ", &["v1"], &["v5"]),
                    suffix_inflection("なせる", "ぬ", &["v1"], &["v5"]),
                    suffix_inflection("ばせる", "ぶ", &["v1"], &["v5"]),
                    suffix_inflection("ませる", "む", &["v1"], &["v5"]),
                    suffix_inflection("らせる", "る", &["v1"], &["v5"]),
                    suffix_inflection("させる", "する", &["v1"], &["vs"]),
                    suffix_inflection("こさせる", "くる", &["v1"], &["vk"]),
                    suffix_inflection("来させる", "来る", &["v1"], &["vk"]),
                    suffix_inflection("じさせる", "ずる", &["v1"], &["vz"]),
                ],
            },
        ),
        (
            "causative passive".to_string(),
            Transform {
                name: "causative passive".to_string(),
                description: Some("Contraction of the causative passive; describes being made to do something. Usage: Attach される to the irrealis form (mizenkei) of godan verbs.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("わされる", "う", &["v1"], &["v5"]),
                    suffix_inflection("かされる", "く", &["v1"], &["v5"]),
                    suffix_inflection("がされる", "ぐ", &["v1"], &["v5"]),
                    suffix_inflection("たされる", "つ", &["v1"], &["v5"]),
                    suffix_inflection("なされる", "ぬ", &["v1"], &["v5"]),
                    suffix_inflection("ばされる", "ぶ", &["v1"], &["v5"]),
                    suffix_inflection("まされる", "む", &["v1"], &["v5"]),
                    suffix_inflection("らされる", "る", &["v1"], &["v5"]),
                ],
            },
        ),
        (
            "imperative".to_string(),
            Transform {
                name: "imperative".to_string(),
                description: Some("1. To give orders.\n2. (As あれ) Represents the fact that it will never change no matter the circumstances.\nUsage: Attach ろ/よ to the irrealis form (mizenkei) of ichidan verbs; the imperative form of godan verbs ends in the e-row kana.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "命令形".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("ろ", "る", &[], &["v1"]),
                    suffix_inflection("よ", "る", &[], &["v1"]),
                    suffix_inflection("え", "う", &[], &["v5"]),
                    suffix_inflection("け", "く", &[], &["v5"]),
                    suffix_inflection("げ", "ぐ", &[], &["v5"]),
                    suffix_inflection("せ", "す", &[], &["v5"]),
                    suffix_inflection("て", "つ", &[], &["v5"]),
                    suffix_inflection("ね", "ぬ", &[], &["v5"]),
                    suffix_inflection("べ", "ぶ", &[], &["v5"]),
                    suffix_inflection("め", "む", &[], &["v5"]),
                    suffix_inflection("れ", "る", &[], &["v5"]),
                    suffix_inflection("しろ", "する", &[], &["vs"]),
                    suffix_inflection("せよ", "する", &[], &["vs"]),
                    suffix_inflection("こい", "くる", &[], &["vk"]),
                    suffix_inflection("来い", "来る", &[], &["vk"]),
                    suffix_inflection("じろ", "ずる", &[], &["vz"]),
                    suffix_inflection("ぜよ", "ずる", &[], &["vz"]),
                ],
            },
        ),
        (
            "kansai-ben".to_string(),
            Transform {
                name: "kansai-ben".to_string(),
                description: Some("Kansai dialect u-onbin te-form: 買うて for 買って.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "関西弁".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("うて", "って", &["-て"], &["-て"]),
                    suffix_inflection("おうて", "あって", &["-て"], &["-て"]),
                ],
            },
        ),
        (
            "masu stem".to_string(),
            Transform {
                name: "masu stem".to_string(),
                description: Some("The continuative form (renyoukei) used on its own, as in noun compounds or before auxiliaries.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("え", "える", &[], &["v1d"]),
                    suffix_inflection("け", "ける", &[], &["v1d"]),
                    suffix_inflection("げ", "げる", &[], &["v1d"]),
                    suffix_inflection("せ", "せる", &[], &["v1d"]),
                    suffix_inflection("ぜ", "ぜる", &[], &["v1d"]),
                    suffix_inflection("て", "てる", &[], &["v1d"]),
                    suffix_inflection("で", "でる", &[], &["v1d"]),
                    suffix_inflection("ね", "ねる", &[], &["v1d"]),
                    suffix_inflection("へ", "へる", &[], &["v1d"]),
                    suffix_inflection("べ", "べる", &[], &["v1d"]),
                    suffix_inflection("め", "める", &[], &["v1d"]),
                    suffix_inflection("れ", "れる", &[], &["v1d"]),
                    suffix_inflection("い", "いる", &[], &["v1d"]),
                    suffix_inflection("き", "きる", &[], &["v1d"]),
                    suffix_inflection("ぎ", "ぎる", &[], &["v1d"]),
                    suffix_inflection("じ", "じる", &[], &["v1d"]),
                    suffix_inflection("ち", "ちる", &[], &["v1d"]),
                    suffix_inflection("に", "にる", &[], &["v1d"]),
                    suffix_inflection("ひ", "ひる", &[], &["v1d"]),
                    suffix_inflection("び", "びる", &[], &["v1d"]),
                    suffix_inflection("み", "みる", &[], &["v1d"]),
                    suffix_inflection("り", "りる", &[], &["v1d"]),
                    suffix_inflection("い", "う", &[], &["v5"]),
                    suffix_inflection("き", "く", &[], &["v5"]),
                    suffix_inflection("ぎ", "ぐ", &[], &["v5"]),
                    suffix_inflection("し", "す", &[], &["v5"]),
                    suffix_inflection("ち", "つ", &[], &["v5"]),
                    suffix_inflection("に", "ぬ", &[], &["v5"]),
                    suffix_inflection("び", "ぶ", &[], &["v5"]),
                    suffix_inflection("み", "む", &[], &["v5"]),
                    suffix_inflection("り", "る", &[], &["v5"]),
                    suffix_inflection("き", "くる", &[], &["vk"]),
                    suffix_inflection("し", "する", &[], &["vs"]),
                ],
            },
        ),
        (
            "negative".to_string(),
            Transform {
                name: "negative".to_string(),
                description: Some("1. Negates the stated action.\n2. (As a question) Invites the other party to do something.\nUsage: Attach ない to the irrealis form (mizenkei) of verbs; くない to the stem of i-adjectives. ない itself conjugates as an i-adjective.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "否定形".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("ない", "る", &["adj-i"], &["v1"]),
                    suffix_inflection("わない", "う", &["adj-i"], &["v5"]),
                    suffix_inflection("かない", "く", &["adj-i"], &["v5"]),
                    suffix_inflection("がない", "ぐ", &["adj-i"], &["v5"]),
                    suffix_inflection("さない", "す", &["adj-i"], &["v5"]),
                    suffix_inflection("たない", "つ", &["adj-i"], &["v5"]),
                    suffix_inflection("なない", "ぬ", &["adj-i"], &["v5"]),
                    suffix_inflection("ばない", "ぶ", &["adj-i"], &["v5"]),
                    suffix_inflection("まない", "む", &["adj-i"], &["v5"]),
                    suffix_inflection("らない", "る", &["adj-i"], &["v5"]),
                    suffix_inflection("くない", "い", &["adj-i"], &["adj-i"]),
                    suffix_inflection("しない", "する", &["adj-i"], &["vs"]),
                    suffix_inflection("こない", "くる", &["adj-i"], &["vk"]),
                    suffix_inflection("来ない", "来る", &["adj-i"], &["vk"]),
                    suffix_inflection("じない", "ずる", &["adj-i"], &["vz"]),
                ],
            },
        ),
        (
            "noun".to_string(),
            Transform {
                name: "noun".to_string(),
                description: Some("Nominal form of i-adjectives.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("さ", "い", &[], &["adj-i"]),
                ],
            },
        ),
        (
            "passive".to_string(),
            Transform {
                name: "passive".to_string(),
                description: Some(PASSIVE_ENGLISH_DESCRIPTION.to_string() + "Usage: Attach れる to the irrealis form (mizenkei) of godan verbs. The result conjugates as an ichidan verb."),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "受身形".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("われる", "う", &["v1"], &["v5"]),
                    suffix_inflection("かれる", "く", &["v1"], &["v5"]),
                    suffix_inflection("がれる", "ぐ", &["v1"], &["v5"]),
                    suffix_inflection("される", "す", &["v1"], &["v5"]),
                    suffix_inflection("たれる", "つ", &["v1"], &["v5"]),
                    suffix_inflection("なれる", "ぬ", &["v1"], &["v5"]),
                    suffix_inflection("ばれる", "ぶ", &["v1"], &["v5"]),
                    suffix_inflection("まれる", "む", &["v1"], &["v5"]),
                    suffix_inflection("られる", "る", &["v1"], &["v5"]),
                    suffix_inflection("される", "する", &["v1"], &["vs"]),
                ],
            },
        ),
        (
            "past".to_string(),
            Transform {
                name: "past".to_string(),
                description: Some("1. Indicates a completed action or past state.\n2. Indicates the realization of a situation.\nUsage: Attach た to the continuative form (renyoukei) of verbs after euphonic change form, かった to the stem of i-adjectives.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "過去形".to_string(),
                    description: None,
                }]),
                rules: {
                    let mut rules = vec![
                        suffix_inflection("えた", "える", &[], &["v1"]),
                        suffix_inflection("けた", "ける", &[], &["v1"]),
                        suffix_inflection("げた", "げる", &[], &["v1"]),
                        suffix_inflection("せた", "せる", &[], &["v1"]),
                        suffix_inflection("ぜた", "ぜる", &[], &["v1"]),
                        suffix_inflection("てた", "てる", &[], &["v1"]),
                        suffix_inflection("でた", "でる", &[], &["v1"]),
                        suffix_inflection("ねた", "ねる", &[], &["v1"]),
                        suffix_inflection("へた", "へる", &[], &["v1"]),
                        suffix_inflection("べた", "べる", &[], &["v1"]),
                        suffix_inflection("めた", "める", &[], &["v1"]),
                        suffix_inflection("れた", "れる", &[], &["v1"]),
                        suffix_inflection("いた", "いる", &[], &["v1"]),
                        suffix_inflection("きた", "きる", &[], &["v1"]),
                        suffix_inflection("ぎた", "ぎる", &[], &["v1"]),
                        suffix_inflection("じた", "じる", &[], &["v1"]),
                        suffix_inflection("ちた", "ちる", &[], &["v1"]),
                        suffix_inflection("にた", "にる", &[], &["v1"]),
                        suffix_inflection("ひた", "ひる", &[], &["v1"]),
                        suffix_inflection("びた", "びる", &[], &["v1"]),
                        suffix_inflection("みた", "みる", &[], &["v1"]),
                        suffix_inflection("りた", "りる", &[], &["v1"]),
                        suffix_inflection("いた", "く", &[], &["v5"]),
                        suffix_inflection("いだ", "ぐ", &[], &["v5"]),
                        suffix_inflection("した", "す", &[], &["v5"]),
                        suffix_inflection("った", "う", &[], &["v5"]),
                        suffix_inflection("った", "つ", &[], &["v5"]),
                        suffix_inflection("った", "る", &[], &["v5"]),
                        suffix_inflection("んだ", "ぬ", &[], &["v5"]),
                        suffix_inflection("んだ", "ぶ", &[], &["v5"]),
                        suffix_inflection("んだ", "む", &[], &["v5"]),
                        suffix_inflection("かった", "い", &[], &["adj-i"]),
                        suffix_inflection("した", "する", &[], &["vs"]),
                        suffix_inflection("為た", "為る", &[], &["vs"]),
                        suffix_inflection("きた", "くる", &[], &["vk"]),
                        suffix_inflection("来た", "来る", &[], &["vk"]),
                        suffix_inflection("じた", "ずる", &[], &["vz"]),
                    ];
                    rules.extend(irregular_verb_suffix_inflections(
                        IrregularVerbSuffix::た,
                        &[],
                        &["v5"],
                    ));
                    rules
                },
            },
        ),
        (
            "polite".to_string(),
            Transform {
                name: "polite".to_string(),
                description: Some("Polite conjugation of verbs and adjectives. Usage: Attach ます to the continuative form (renyoukei) of verbs.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "丁寧形".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("ます", "る", &["-ます"], &["v1"]),
                    suffix_inflection("います", "う", &["-ます"], &["v5"]),
                    suffix_inflection("きます", "く", &["-ます"], &["v5"]),
                    suffix_inflection("ぎます", "ぐ", &["-ます"], &["v5"]),
                    suffix_inflection("します", "す", &["-ます"], &["v5"]),
                    suffix_inflection("ちます", "つ", &["-ます"], &["v5"]),
                    suffix_inflection("にます", "ぬ", &["-ます"], &["v5"]),
                    suffix_inflection("びます", "ぶ", &["-ます"], &["v5"]),
                    suffix_inflection("みます", "む", &["-ます"], &["v5"]),
                    suffix_inflection("ります", "る", &["-ます"], &["v5"]),
                    suffix_inflection("します", "する", &["-ます"], &["vs"]),
                    suffix_inflection("きます", "くる", &["-ます"], &["vk"]),
                    suffix_inflection("来ます", "来る", &["-ます"], &["vk"]),
                    suffix_inflection("じます", "ずる", &["-ます"], &["vz"]),
                ],
            },
        ),
        (
            "polite negative".to_string(),
            Transform {
                name: "polite negative".to_string(),
                description: Some("Polite negative form of verbs.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("ません", "ます", &[], &["-ます"]),
                ],
            },
        ),
        (
            "polite past".to_string(),
            Transform {
                name: "polite past".to_string(),
                description: Some("Polite past form of verbs.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("ました", "る", &[], &["v1"]),
                    suffix_inflection("いました", "う", &[], &["v5"]),
                    suffix_inflection("きました", "く", &[], &["v5"]),
                    suffix_inflection("ぎました", "ぐ", &[], &["v5"]),
                    suffix_inflection("しました", "す", &[], &["v5"]),
                    suffix_inflection("ちました", "つ", &[], &["v5"]),
                    suffix_inflection("にました", "ぬ", &[], &["v5"]),
                    suffix_inflection("びました", "ぶ", &[], &["v5"]),
                    suffix_inflection("みました", "む", &[], &["v5"]),
                    suffix_inflection("りました", "る", &[], &["v5"]),
                    suffix_inflection("しました", "する", &[], &["vs"]),
                    suffix_inflection("きました", "くる", &[], &["vk"]),
                    suffix_inflection("来ました", "来る", &[], &["vk"]),
                    suffix_inflection("じました", "ずる", &[], &["vz"]),
                ],
            },
        ),
        (
            "polite past negative".to_string(),
            Transform {
                name: "polite past negative".to_string(),
                description: Some("Polite past negative form of verbs.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("ませんでした", "ます", &[], &["-ます"]),
                ],
            },
        ),
        (
            "polite volitional".to_string(),
            Transform {
                name: "polite volitional".to_string(),
                description: Some("Polite volitional form of verbs.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("ましょう", "ます", &[], &["-ます"]),
                ],
            },
        ),
        (
            "potential".to_string(),
            Transform {
                name: "potential".to_string(),
                description: Some("Indicates a state of being (naturally) capable of doing an action. Usage: Attach る to the izenkei of godan verbs. The result conjugates as an ichidan verb.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "可能形".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("える", "う", &["v1"], &["v5"]),
                    suffix_inflection("ける", "く", &["v1"], &["v5"]),
                    suffix_inflection("げる", "ぐ", &["v1"], &["v5"]),
                    suffix_inflection("せる", "す", &["v1"], &["v5"]),
                    suffix_inflection("てる", "つ", &["v1"], &["v5"]),
                    suffix_inflection("ねる", "ぬ", &["v1"], &["v5"]),
                    suffix_inflection("べる", "ぶ", &["v1"], &["v5"]),
                    suffix_inflection("める", "む", &["v1"], &["v5"]),
                    suffix_inflection("れる", "る", &["v1"], &["v5"]),
                    suffix_inflection("できる", "する", &["v1"], &["vs"]),
                    suffix_inflection("出来る", "する", &["v1"], &["vs"]),
                    suffix_inflection("これる", "くる", &["v1"], &["vk"]),
                    suffix_inflection("来れる", "来る", &["v1"], &["vk"]),
                ],
            },
        ),
        (
            "potential or passive".to_string(),
            Transform {
                name: "potential or passive".to_string(),
                description: Some(PASSIVE_ENGLISH_DESCRIPTION.to_string() + "3. Indicates a state of being (naturally) capable of doing an action.\nUsage: Attach られる to the irrealis form (mizenkei) of ichidan verbs. The result conjugates as an ichidan verb."),
                i18n: None,
                rules: vec![
                    suffix_inflection("られる", "る", &["v1"], &["v1"]),
                    suffix_inflection("こられる", "くる", &["v1"], &["vk"]),
                    suffix_inflection("来られる", "来る", &["v1"], &["vk"]),
                    suffix_inflection("ぜられる", "ずる", &["v1"], &["vz"]),
                    suffix_inflection("じられる", "ずる", &["v1"], &["vz"]),
                    suffix_inflection("せられる", "する", &["v1"], &["vs"]),
                ],
            },
        ),
        (
            "progressive or perfect".to_string(),
            Transform {
                name: "progressive or perfect".to_string(),
                description: Some("1. Indicates an action continuing or progressing to a state.\n2. Indicates an action already completed, or the state resulting from it.\nUsage: Attach いる to the te-form of verbs; the compound conjugates as an ichidan verb.".into()),
                i18n: None,
                rules: vec![
                    suffix_inflection("ている", "て", &["v1p"], &["-て"]),
                    suffix_inflection("でいる", "で", &["v1p"], &["-て"]),
                    suffix_inflection("てる", "て", &["v1p"], &["-て"]),
                    suffix_inflection("でる", "で", &["v1p"], &["-て"]),
                    suffix_inflection("ておる", "て", &["v5"], &["-て"]),
                    suffix_inflection("でおる", "で", &["v5"], &["-て"]),
                ],
            },
        ),
        (
            "volitional".to_string(),
            Transform {
                name: "volitional".to_string(),
                description: Some("1. Expresses one's will.\n2. Expresses an invitation to the other party.\nUsage: Attach よう to the irrealis form (mizenkei) of ichidan verbs, the o-row kana to that of godan verbs.".into()),
                i18n: Some(vec![TransformI18n {
                    language: "ja".to_string(),
                    name: "意志形".to_string(),
                    description: None,
                }]),
                rules: vec![
                    suffix_inflection("よう", "る", &[], &["v1"]),
                    suffix_inflection("おう", "う", &[], &["v5"]),
                    suffix_inflection("こう", "く", &[], &["v5"]),
                    suffix_inflection("ごう", "ぐ", &[], &["v5"]),
                    suffix_inflection("そう", "す", &[], &["v5"]),
                    suffix_inflection("とう", "つ", &[], &["v5"]),
                    suffix_inflection("のう", "ぬ", &[], &["v5"]),
                    suffix_inflection("ぼう", "ぶ", &[], &["v5"]),
                    suffix_inflection("もう", "む", &[], &["v5"]),
                    suffix_inflection("ろう", "る", &[], &["v5"]),
                    suffix_inflection("しよう", "する", &[], &["vs"]),
                    suffix_inflection("こよう", "くる", &[], &["vk"]),
                    suffix_inflection("来よう", "来る", &[], &["vk"]),
                    suffix_inflection("じよう", "ずる", &[], &["vz"]),
                ],
            },
        ),
    ]))
});

pub static JAPANESE_TRANSFORMS: LazyLock<LanguageTransformDescriptor> =
    LazyLock::new(|| LanguageTransformDescriptor {
        language: "ja".to_string(),
        conditions: CONDITIONS.clone(),
        transforms: TRANSFORMS.clone(),
    });

// The ranked content rules of the cascade (ranks 1-9).
//
// Every rule is a disjunction of keyword or phrase alternatives, matched
// against the lowercased comment. A rule matches when any alternative occurs
// anywhere in the text. Order in CONTENT_RULES is priority order:
// homemade-culture talk outranks price, price outranks taste, and so on.
//
// Alternatives come in three kinds:
// - `accented`: written without accents, each vowel also accepts its
//   accented forms ("donde" hits "dónde").
// - `literal`: matched exactly as written ("ara" never hits "tomará").
// - `whole_words`: literal, and only between non-word characters.

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::normalize::accent_insensitive;
use super::topic::Topic;

/// Static definition of one content rule before compilation.
pub struct RuleSpec {
    pub topic: Topic,
    pub accented: &'static [&'static str],
    pub literal: &'static [&'static str],
    pub whole_words: &'static [&'static str],
}

/// Content rules in cascade order. Ranks are taken from the topic.
pub static CONTENT_RULES: &[RuleSpec] = &[
    RuleSpec {
        topic: Topic::HomemadeKefir,
        accented: &[
            "bulgaros",
            "nodulos",
            "tengo bulgaros",
            "regalo.*bulgaros",
            "facil.*hacer",
            "como.*prepara",
        ],
        literal: &[
            "en casa",
            "casero",
            "artesanal",
            "preparo yo",
            "hago mi",
            "preparo mi",
            "vendo el cultivo",
            "hecho por mi",
            "hago yo",
            "mejor hacer",
            "tu mism[ao]",
        ],
        whole_words: &[],
    },
    RuleSpec {
        topic: Topic::Price,
        accented: &["economic[oa]", "mas barato", "sale mas"],
        literal: &[
            "muy caro",
            "tan caro",
            "absurdamente caro",
            "precio",
            "vale",
            "cuesta",
            "dejando pobre",
            "paladar de pobre",
        ],
        whole_words: &["caro"],
    },
    RuleSpec {
        topic: Topic::Ingredients,
        accented: &["almidon", "quimicos", "azucar", "cancer", "cero quimico"],
        literal: &[
            "conservantes",
            "colorantes",
            "saborizantes",
            "aditivos",
            "preservantes",
            "gelatina",
            "procesad[oa]",
            "industrial",
            "fructuosa",
            "natural",
            "libre de",
        ],
        whole_words: &[],
    },
    RuleSpec {
        topic: Topic::HealthBenefits,
        accented: &[
            "probiotic",
            "digestion",
            "colon",
            "cure",
            "me curo",
            "fermentacion",
        ],
        literal: &[
            "microbiota",
            "flora intestinal",
            "gastritis",
            "helicobacter",
            "pylori",
            "irritable",
            "bueno para",
            "ayuda",
            "salud",
            "intolerante.*lactosa",
            "lactosa",
            "sin lactosa",
            "bacterias",
        ],
        whole_words: &[],
    },
    RuleSpec {
        topic: Topic::Taste,
        accented: &["no me asento"],
        literal: &[
            "sabe feo",
            "sabe refeo",
            "rico",
            "delicioso",
            "no me gusta",
            "me encanta",
            "sabor",
            "paladar",
            "diarrea",
            "me dio",
            "mala experiencia",
        ],
        whole_words: &[],
    },
    RuleSpec {
        topic: Topic::Competitors,
        accented: &["san martin"],
        literal: &[
            "dejamu",
            "pomar",
            "colanta",
            "mejor el de",
            "otro",
            "marca",
            "alternativa",
            "d1",
            "ara",
            "tienda",
        ],
        whole_words: &[],
    },
    RuleSpec {
        topic: Topic::Availability,
        accented: &["donde", "dificil conseguir"],
        literal: &[
            "no ha llegado",
            "no lo encuentro",
            "yopal",
            "donde comprar",
            "consigo",
            "disponible",
            "venden",
            "no hay",
            "cliente",
        ],
        whole_words: &[],
    },
    RuleSpec {
        topic: Topic::Recipes,
        accented: &["chia", "como.*prepara"],
        literal: &[
            "receta",
            "avena",
            "granola",
            "combino con",
            "mezclo",
            "preparar",
        ],
        whole_words: &[],
    },
    RuleSpec {
        topic: Topic::Advertising,
        accented: &[],
        literal: &[
            "caitlyn jenner",
            "kardashian",
            "pilates",
            "mewing",
            "doctora",
            "pupi",
            "cata",
            "divina",
            "publicidad",
            "marketing",
            "publicit",
            "sponsor",
        ],
        whole_words: &[],
    },
];

/// A compiled content rule.
#[derive(Debug, Clone)]
pub struct Rule {
    rank: u8,
    topic: Topic,
    pattern: Regex,
    whole_words: &'static [&'static str],
    source: String,
}

impl Rule {
    /// Compile a rule from its static definition.
    pub fn compile(spec: &RuleSpec) -> Result<Self> {
        let compiled: Vec<String> = spec
            .accented
            .iter()
            .map(|alt| accent_insensitive(alt))
            .chain(spec.literal.iter().map(|alt| alt.to_string()))
            .collect();

        let pattern = Regex::new(&compiled.join("|")).with_context(|| {
            format!(
                "Invalid pattern for rank {} ({})",
                spec.topic.rank(),
                spec.topic
            )
        })?;

        let source: Vec<String> = spec
            .accented
            .iter()
            .chain(spec.literal.iter())
            .map(|alt| alt.to_string())
            .chain(spec.whole_words.iter().map(|w| format!(r"\b{w}\b")))
            .collect();

        Ok(Self {
            rank: spec.topic.rank(),
            topic: spec.topic,
            pattern,
            whole_words: spec.whole_words,
            source: source.join("|"),
        })
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// The alternatives as authored, before accent widening.
    pub fn pattern_source(&self) -> &str {
        &self.source
    }

    /// Presence test against lowercased text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
            || self
                .whole_words
                .iter()
                .any(|w| contains_whole_word(normalized, w))
    }
}

/// Compile the full content-rule table in cascade order.
pub fn compile_content_rules() -> Result<Vec<Rule>> {
    CONTENT_RULES.iter().map(Rule::compile).collect()
}

/// True if `word` occurs with no letter, digit or underscore on either side.
///
/// Unicode-aware, so "caroñas" is one word and does not contain "caro".
pub fn contains_whole_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(pos, _)| {
        let before_ok = haystack[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[pos + word.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

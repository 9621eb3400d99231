//! Built-in lexical data for the supported languages.

use crate::models::common::Language;
use crate::traits::language_profile::LanguageProfile;

const CORPUS_EN: &str = "\
the moon is a lantern over quiet streets
the river hums its silver hymn at night
in windows sleep the tender city hearts
a kind wind gathers petals into light
i carry simple rain inside my coat
and laughter grows like gardens in the spring
we learn the names of shadows by their songs
and write soft letters to the dawn we bring
";

const CORPUS_RO: &str = "\
luna plutește blând peste orașul tăcut
râul murmură încet cântarea lui de-argint
în ferestre doarme inima cetății
un vânt cumințește praful rătăcind
port o ploaie mică-n buzunarul vechi
râsul răsare ca o grădină-n mai
învățăm din umbre alfabetul serii
și scriem zorilor scrisori de rai
";

const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "in", "on", "at", "for", "with", "by", "to", "from",
    "into", "over", "under", "is", "are", "was", "were", "be", "as", "that", "this", "those",
    "these", "it", "we", "you", "i", "they", "them", "us", "our", "your", "their",
];

const STOPWORDS_RO: &[&str] = &[
    "și", "sau", "ori", "de", "din", "la", "pe", "pentru", "cu", "prin", "sub", "peste",
    "într-un", "într-o", "în", "într", "înspre", "este", "sunt", "eram", "ești", "e", "suntem",
    "sunteți", "un", "o", "niște", "ce", "că", "întru", "către", "mai", "prea", "iar", "dar",
    "să", "nu", "nici", "ci", "precum", "căci", "ai", "am", "au", "îl", "îți", "ți", "îmi", "mi",
    "ți-l", "își", "își-l", "vă", "vouă", "ne", "nouă", "lui", "ei", "el", "ea", "le", "l",
];

const DIPHTHONGS_RO: &[&str] = &[
    "ea", "oa", "ia", "ie", "io", "iu", "ua", "uo", "ui", "eu", "ei", "âi", "îi",
];

/// English lexical data
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishProfile;

impl LanguageProfile for EnglishProfile {
    fn language(&self) -> Language {
        Language::English
    }

    fn corpus(&self) -> &'static str {
        CORPUS_EN
    }

    fn stopwords(&self) -> &'static [&'static str] {
        STOPWORDS_EN
    }

    fn vowels(&self) -> &'static str {
        "aeiouy"
    }

    fn diphthongs(&self) -> &'static [&'static str] {
        &[]
    }

    fn positive_words(&self) -> &'static [&'static str] {
        &[
            "love", "light", "tender", "kind", "bright", "soft", "spring", "dawn", "smile",
            "hope", "song", "calm",
        ]
    }

    fn negative_words(&self) -> &'static [&'static str] {
        &["dark", "cold", "lonely", "broken", "empty", "tears", "storm", "fall", "fade", "ache"]
    }

    fn templates(&self) -> &'static [&'static str] {
        &[
            "the {kw} is a lantern over quiet streets",
            "the river hums of {kw} at night",
            "in windows sleep the tender {kw}",
            "a kind wind gathers {kw} into light",
            "i carry simple {kw} inside my coat",
            "and {kw} grows like gardens in the spring",
            "we learn the names of {kw} by their songs",
            "and write soft letters to the {kw} we bring",
        ]
    }

    fn fallback_keywords(&self) -> &'static [&'static str] {
        &["moon", "river", "rain", "petals", "dawn"]
    }

    fn rhyme_families(&self) -> &'static [&'static [&'static str]] {
        &[
            &["light", "night", "bright", "sight", "flight"],
            &["song", "long", "along", "belong", "strong"],
            &["heart", "apart", "start", "art", "chart"],
            &["sing", "spring", "bring", "wing", "ring"],
            &["rain", "again", "plain", "chain", "remain"],
            &["dream", "stream", "gleam", "beam", "seam"],
            &["sky", "fly", "cry", "dry", "shy"],
        ]
    }

    fn themes(&self) -> &'static [&'static str] {
        &[
            "dawn over a sleeping city",
            "letters carried by the wind",
            "a pocket full of rain",
            "memory of a summer train",
            "stars above a quiet river",
            "the color of forgiveness",
        ]
    }
}

/// Romanian lexical data
#[derive(Debug, Clone, Copy, Default)]
pub struct RomanianProfile;

impl LanguageProfile for RomanianProfile {
    fn language(&self) -> Language {
        Language::Romanian
    }

    fn corpus(&self) -> &'static str {
        CORPUS_RO
    }

    fn stopwords(&self) -> &'static [&'static str] {
        STOPWORDS_RO
    }

    // simplified: no î/â distinction beyond being vowels
    fn vowels(&self) -> &'static str {
        "aeiouăîâ"
    }

    fn diphthongs(&self) -> &'static [&'static str] {
        DIPHTHONGS_RO
    }

    fn positive_words(&self) -> &'static [&'static str] {
        &[
            "iubire", "lumină", "blând", "bun", "strălucit", "moale", "primăvară", "zori",
            "zâmbet", "speranță", "cântec", "liniște",
        ]
    }

    fn negative_words(&self) -> &'static [&'static str] {
        &[
            "întunecat", "rece", "singur", "frânt", "gol", "lacrimi", "furtună", "toamnă",
            "stinge", "durere",
        ]
    }

    fn templates(&self) -> &'static [&'static str] {
        &[
            "{kw} plutește blând peste orașul tăcut",
            "râul murmură încet cântarea lui {kw}",
            "în ferestre doarme {kw}",
            "un vânt cumințește {kw} rătăcind",
            "port {kw} în buzunarul vechi",
            "râsul răsare ca {kw} în mai",
            "învățăm din {kw} alfabetul serii",
            "și scriem zorilor despre {kw}",
        ]
    }

    fn fallback_keywords(&self) -> &'static [&'static str] {
        &["luna", "râul", "ploaia", "lumina", "zorii"]
    }

    fn rhyme_families(&self) -> &'static [&'static [&'static str]] {
        &[
            &["vânt", "cânt", "pământ", "avânt", "frământ"],
            &["ploaie", "poezie", "veșnicie", "bucurie", "melodie"],
            &["dor", "zbor", "izvor", "ușor", "nor"],
            &["lumină", "grădină", "senină", "divină", "lină"],
            &["soare", "floare", "zare", "cântare", "mare"],
            &["cer", "mister", "efemer", "stingher", "fier"],
            &["rai", "mai", "grai", "plai", "crai"],
        ]
    }

    fn themes(&self) -> &'static [&'static str] {
        &[
            "zori peste orașul adormit",
            "scrisori purtate de vânt",
            "un buzunar plin de ploaie",
            "amintirea unui tren de vară",
            "stele deasupra unui râu liniștit",
            "culoarea iertării",
        ]
    }
}

static ENGLISH: EnglishProfile = EnglishProfile;
static ROMANIAN: RomanianProfile = RomanianProfile;

/// Built-in profile for `language`
pub fn profile_for(language: Language) -> &'static dyn LanguageProfile {
    match language {
        Language::English => &ENGLISH,
        Language::Romanian => &ROMANIAN,
    }
}

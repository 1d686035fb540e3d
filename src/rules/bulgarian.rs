//! Interslavic → Bulgarian.
//!
//! Grammatical and orthographic adjustments on the Latin spelling first, then
//! transliteration into Bulgarian Cyrillic. Several rules deliberately branch
//! (yat, fleeting ȯ, syllabic r/l, verb endings) because the Interslavic form
//! does not determine the Bulgarian one.
//!
//! Order matters throughout. In particular:
//!
//! - the adjective `-nji`/`-ny` rules feed each other top to bottom;
//! - "Soft consonant pre vowel" inserts `ь`, which the "Presoftened vowels" map
//!   later folds into я/е/и/ю;
//! - within each map, multi-letter keys precede their prefixes.

use crate::tag::Predicate;
use crate::{Pipeline, Result, RuleSpec, lower_case, part_of_speech, restore_case, section};

#[cfg(test)]
mod tests;

pub const NAME: &str = "Interslavic → Bulgarian";

fn verb() -> Predicate {
    part_of_speech("v.")
}

fn adjective() -> Predicate {
    part_of_speech("adj.")
}

fn noun() -> Predicate {
    part_of_speech("noun")
}

fn nouns() -> Vec<RuleSpec> {
    vec![
        rule! {
            name: "-ne/-nie ending",
            regexp: r"ńje\b" => ["ne", "nie"],
        },
        rule! {
            name: "-ie ending",
            regexp: r"([ĺŕťďśź])je\b" => ["$1ie"],
        },
        // except grozd́je
        rule! {
            name: "ś before vowel",
            regexp: r"ś([aeiouyåėéęěųȯó])" => ["sь$1"],
        },
    ]
}

fn verbs() -> Vec<RuleSpec> {
    vec![
        // 1st, 2nd and 3rd conjugation
        rule! {
            name: "Infinitive -> 1st person",
            regexp: r"ti\b" => ["ų", "jų", "m", "am", "jam", "vam", "vjam"],
            when: verb(),
        },
    ]
}

fn adjectives() -> Vec<RuleSpec> {
    vec![
        // Feeds the four -ny rules below.
        rule! {
            name: "ADJ -nji",
            regexp: r"nji\b" => ["ny"],
            when: adjective(),
        },
        // pȯlny, mirny, vinny, vŕhny
        rule! {
            name: "ADJ -(C)ny -> -en/oven",
            regexp: r"([^aeiouyåėéęěųȯó])ny\b" => ["$1en", "$1oven"],
            when: adjective(),
        },
        rule! {
            name: "Special case: ADJ -dany -> -daden (from verb \"dati\")",
            regexp: r"dany\b" => ["daden"],
            when: adjective(),
        },
        // rany, izprodany, učarovany
        rule! {
            name: "Special case: ADJ -any -> -anen/-an",
            regexp: r"any\b" => ["an", "anen"],
            when: adjective(),
        },
        rule! {
            name: "ADJ -(V)ny -> -nen/-n",
            regexp: r"([eiouyåėęěųȯ])ny\b" => ["$1nen"],
            when: adjective(),
        },
        rule! {
            name: "ADJ Distinction -čny <-> -česky",
            regexp: r"čny\b" => ["čen", "česki"],
            when: adjective(),
        },
        // jeleńji, delfińji
        rule! {
            name: "ADJ -ńji -> -nski",
            regexp: r"(ńji|ńje)\b" => ["nski"],
            when: adjective(),
        },
        // novy -> nov
        rule! {
            name: "ADJ -y -> -",
            regexp: r"([^n])y\b" => ["$1"],
            when: adjective(),
        },
        // Soft -ji (božji, kravji) is left to the iotation map.
        rule! {
            name: "ADJ Soft: singular -i => -",
            regexp: r"([čšžjŕťďśźćđc])i\b" => ["$1"],
            when: adjective(),
        },
    ]
}

fn lost_distinctions() -> Vec<RuleSpec> {
    vec![
        rule! {
            name: "Animateness: NOUN MASC PL",
            regexp: r"e\b" => ["i"],
            when: part_of_speech("m.pl."),
        },
        rule! {
            name: "Soft Declension: NOUN FEM PL",
            regexp: r"e\b" => ["i"],
            when: part_of_speech("f.pl."),
        },
    ]
}

fn borrowings() -> Vec<RuleSpec> {
    vec![
        // Wrong for čęstota (-> čestota); misses čęstičny (-> častičny).
        rule! {
            name: "Borrowed Russian часть <- ISV čęsť -> BG част",
            regexp: r"čęst" => ["čast"],
            when: noun(),
        },
        // Noun načęlo and verb načęti (sę).
        rule! {
            name: "Borrowed Russian начало <- ISV načęlo",
            regexp: r"načęl" => ["načal"],
        },
    ]
}

fn phonetics() -> Vec<RuleSpec> {
    vec![
        rule! {
            name: "Yat Alternation",
            regexp: r"ě" => ["e", "ja", "a"],
        },
        rule! {
            name: "Word-final Ų spelling",
            regexp: r"ų\b" => ["a"],
        },
        rule! {
            name: "Fleeting Ȯ",
            regexp: r"[òȯ]" => ["ȯ", ""],
        },
        rule! {
            name: "Soft consonant pre vowel",
            regexp: r"([ĺńŕťďśź])([aeiouyåėéęěųȯó])" => ["$1ь$2"],
        },
    ]
}

fn syllabic() -> Vec<RuleSpec> {
    vec![
        rule! {
            name: "Syllabic R",
            regexp: r"([^aeiouyåėèęěųȯò])[rṙŕ]([^aeiouyåėèęěųȯò])" => ["$1ȯr$2", "$1rȯ$2"],
        },
        // črveny, črny, črv, žrtva
        rule! {
            name: "Soft syllabic R pre-vowel (e.g. ČRV/ČRNY/ŽRTV)",
            regexp: r"([^aeiouyåėèęěųȯò])[čžš][rṙŕ]" => ["$1ėr", "$1rė"],
        },
        // očrniti
        rule! {
            name: "Soft syllabic R post-vowel (e.g. OČRNI)",
            regexp: r"[čžš][rṙŕ]([^aeiouyåėèęěųȯò])" => ["$1ėr", "$1rė"],
        },
        rule! {
            name: "Syllabic L",
            regexp: r"([^aeiouyåėèęěųȯò])[lŀ]([^aeiouyåėèęěųȯò])" => ["$1ȯl$2", "$1lȯ$2"],
        },
        rule! {
            name: "Syllabic R/L - Finalization",
            map: {
                "ŕ" => "r",
                "ṙ" => "r",
                "ŀ" => "l",
            },
        },
    ]
}

fn word_specific() -> Vec<RuleSpec> {
    vec![
        rule! {
            name: "člověk and derived words",
            regexp: r"člo" => ["чо"],
        },
        rule! {
            name: "Hteti",
            regexp: r"\b(ht)|(hć)" => ["щ"],
        },
    ]
}

fn cyrillic() -> Vec<RuleSpec> {
    vec![
        // Strict etymological sound changes (e.g. Latin y -> и).
        rule! {
            name: "Cyrillic mapping - always true or unhandled",
            map: {
                "å" => "а",
                "è" => "е",
                "ė" => "е",
                "ò" => "ъ",
                "ȯ" => "ъ",
                "ù" => "в",
                "y" => "и",
                "ę" => "е",
            },
        },
        // št, šč, čt
        rule! {
            name: "Cyrillic mapping - Щ regexp",
            regexp: r"(š[čt])|(čt)" => ["щ"],
        },
        // Folds the ь inserted by "Soft consonant pre vowel".
        rule! {
            name: "Cyrillic mapping - Presoftned vowels",
            map: {
                "ьa" => "я",
                "ьe" => "е",
                "ьi" => "и",
                "ьo" => "ьо",
                "ьu" => "ю",
                "ь" => "",
            },
        },
        rule! {
            name: "Cyrillic mapping - Iotation",
            map: {
                "ja" => "я",
                "je" => "е",
                "ji" => "и",
                "jo" => "ьо",
                "ju" => "ю",
                "jų" => "я",
            },
        },
        // Only word endings and consonant clusters reach this; "ju" is gone by now.
        rule! {
            name: "Cyrillic mapping - lj, nj",
            map: {
                "lj" => "л",
                "nj" => "н",
                "ĺj" => "л",
                "ńj" => "н",
            },
        },
        rule! {
            name: "Cyrillic mapping - standard latin",
            map: {
                "a" => "а",
                "b" => "б",
                "c" => "ц",
                "č" => "ч",
                "d" => "д",
                "e" => "е",
                "f" => "ф",
                "g" => "г",
                "h" => "х",
                "i" => "и",
                "j" => "й",
                "k" => "к",
                "l" => "л",
                "m" => "м",
                "n" => "н",
                "o" => "о",
                "p" => "п",
                "r" => "р",
                "s" => "с",
                "š" => "ш",
                "t" => "т",
                "u" => "у",
                "v" => "в",
                "z" => "з",
                "ž" => "ж",
            },
        },
        rule! {
            name: "Cyrillic mapping - etymological vowels",
            map: {
                "ų" => "ъ",
            },
        },
        rule! {
            name: "Cyrillic mapping - soft/etymological consonants",
            map: {
                "ć" => "щ",
                "đ" => "жд",
                "ľ" => "л",
                "ń" => "н",
                "ť" => "т",
                "t\u{301}" => "т",
                "ď" => "д",
                "d\u{301}" => "д",
                "ś" => "с",
                "ź" => "з",
            },
        },
        rule! {
            name: "Cyrillic mapping - other",
            map: {
                "’" => "",
                "ı" => "",
                "ḓ" => "",
            },
        },
    ]
}

/// The table as an ordered list of rule descriptors.
pub fn get() -> Vec<RuleSpec> {
    let mut rules = vec![rule! { name: "Ignore case", primitive: lower_case() }];
    rules.extend(section("Nouns", nouns()));
    rules.extend(section("Verbs", verbs()));
    rules.extend(section("Adjectives", adjectives()));
    rules.extend(section("Lost distinctions", lost_distinctions()));
    rules.extend(section("Borrowings", borrowings()));
    rules.extend(section("Phonetic changes/Orthography", phonetics()));
    rules.extend(section("Syllabic", syllabic()));
    rules.extend(section("Word-specific letter combinations", word_specific()));
    rules.extend(section("Cyrillic mapping", cyrillic()));
    rules.push(rule! { name: "Restore case", primitive: restore_case() });
    rules
}

/// Build the table into a [`Pipeline`].
pub fn pipeline() -> Result<Pipeline> {
    Pipeline::from_rules(NAME, get())
}

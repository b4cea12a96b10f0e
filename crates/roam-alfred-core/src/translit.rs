//! Latin-transliterated Russian to Cyrillic

use crate::alfred::{AlfredResult, Item, Text};

/// Ordered conversion table. The first entry whose key prefixes the remaining
/// input wins, so multi-letter sequences come before single letters.
const TABLE: &[(&str, &str)] = &[
    ("tvz", "ъ"),
    ("shh", "щ"),
    ("mjz", "ь"),
    ("Shh", "Щ"),
    ("zh", "ж"),
    ("yu", "ю"),
    ("yo", "ё"),
    ("ya", "я"),
    ("sh", "ш"),
    ("ju", "ю"),
    ("jo", "ё"),
    ("je", "э"),
    ("ja", "я"),
    ("ch", "ч"),
    ("Zh", "Ж"),
    ("Sh", "Ш"),
    ("Ju", "Ю"),
    ("Jo", "Ё"),
    ("Je", "Э"),
    ("Ja", "Я"),
    ("Ch", "Ч"),
    ("''", "Ь"),
    ("##", "Ъ"),
    ("z", "з"),
    ("y", "ы"),
    ("x", "х"),
    ("w", "щ"),
    ("v", "в"),
    ("u", "у"),
    ("t", "т"),
    ("s", "с"),
    ("r", "р"),
    ("q", "я"),
    ("p", "п"),
    ("o", "о"),
    ("n", "н"),
    ("m", "м"),
    ("l", "л"),
    ("k", "к"),
    ("j", "й"),
    ("i", "и"),
    ("h", "х"),
    ("g", "г"),
    ("f", "ф"),
    ("e", "е"),
    ("d", "д"),
    ("c", "ц"),
    ("b", "б"),
    ("a", "а"),
    ("Z", "З"),
    ("Y", "Ы"),
    ("V", "В"),
    ("U", "У"),
    ("T", "Т"),
    ("S", "С"),
    ("R", "Р"),
    ("P", "П"),
    ("O", "О"),
    ("N", "Н"),
    ("M", "М"),
    ("L", "Л"),
    ("K", "К"),
    ("J", "Й"),
    ("I", "И"),
    ("H", "Х"),
    ("G", "Г"),
    ("F", "Ф"),
    ("E", "Е"),
    ("D", "Д"),
    ("C", "Ц"),
    ("B", "Б"),
    ("A", "А"),
    ("'", "ь"),
    ("#", "ъ"),
];

/// Convert one word. Characters with no table entry are copied unchanged.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    let mut rest = input;
    while !rest.is_empty() {
        match TABLE.iter().find(|(latin, _)| rest.starts_with(latin)) {
            Some((latin, cyrillic)) => {
                out.push_str(cyrillic);
                rest = &rest[latin.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }
    out
}

/// Convert each argument and concatenate the results without separators.
pub fn transliterate_words(words: &[String]) -> String {
    words.iter().map(|word| transliterate(word)).collect()
}

/// Single copyable item holding the conversion.
pub fn translit_result(words: &[String]) -> AlfredResult {
    let converted = transliterate_words(words);
    AlfredResult::new(vec![Item::new(converted.as_str())
        .with_arg(converted.as_str())
        .with_text(Text::both(converted))])
}

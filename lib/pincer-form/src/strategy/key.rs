//! Key casing strategy.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Function type for [`KeyEncoding::Custom`].
pub type KeyEncoder = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How keys are transformed before they are written.
///
/// Conversions assume camel-cased source keys, as produced by Rust field
/// renames such as `#[serde(rename_all = "camelCase")]` or by hand-written
/// map keys.
#[derive(Clone, Default)]
pub enum KeyEncoding {
    /// Keys are written verbatim.
    #[default]
    UseDefaultKeys,
    /// `oneTwoThree` becomes `one_two_three`.
    ConvertToSnakeCase,
    /// `oneTwoThree` becomes `one-two-three`.
    ConvertToKebabCase,
    /// `oneTwoThree` becomes `OneTwoThree`.
    Capitalized,
    /// `oneTwoThree` becomes `ONETWOTHREE`.
    Uppercased,
    /// `oneTwoThree` becomes `onetwothree`.
    Lowercased,
    /// Keys are passed to the given function.
    Custom(KeyEncoder),
}

impl fmt::Debug for KeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UseDefaultKeys => f.write_str("UseDefaultKeys"),
            Self::ConvertToSnakeCase => f.write_str("ConvertToSnakeCase"),
            Self::ConvertToKebabCase => f.write_str("ConvertToKebabCase"),
            Self::Capitalized => f.write_str("Capitalized"),
            Self::Uppercased => f.write_str("Uppercased"),
            Self::Lowercased => f.write_str("Lowercased"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl KeyEncoding {
    /// Create a custom key encoding.
    pub fn custom(encoder: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(encoder))
    }

    /// Apply the strategy to a key.
    #[must_use]
    pub fn encode(&self, key: &str) -> String {
        match self {
            Self::UseDefaultKeys => key.to_string(),
            Self::ConvertToSnakeCase => Self::convert(key, "_"),
            Self::ConvertToKebabCase => Self::convert(key, "-"),
            Self::Capitalized => capitalize(key),
            Self::Uppercased => key.to_uppercase(),
            Self::Lowercased => key.to_lowercase(),
            Self::Custom(encoder) => encoder(key),
        }
    }

    /// Split a camel-cased key into words and join them, lowercased, with
    /// `separator`.
    ///
    /// A single uppercase letter followed by a lowercase one starts a word
    /// (`myProperty`). In a longer uppercase run followed by a lowercase
    /// letter, only the run's last letter starts the next word
    /// (`myURLProperty`). A trailing uppercase run stays one word (`fooURL`).
    /// The first character never starts a new word, so leading and trailing
    /// separators already in the key are preserved.
    #[must_use]
    pub fn convert(key: &str, separator: &str) -> String {
        let chars: Vec<char> = key.chars().collect();
        if chars.is_empty() {
            return String::new();
        }

        let mut words: Vec<Range<usize>> = Vec::new();
        let mut word_start = 0;
        let mut search_start = 1;

        while let Some(upper) = find_from(&chars, search_start, char::is_uppercase) {
            words.push(word_start..upper);

            let Some(lower) = find_from(&chars, upper, char::is_lowercase) else {
                word_start = upper;
                break;
            };

            if lower == upper + 1 {
                word_start = upper;
            } else {
                words.push(upper..lower - 1);
                word_start = lower - 1;
            }
            search_start = lower + 1;
        }
        words.push(word_start..chars.len());

        words
            .into_iter()
            .map(|range| chars.get(range).unwrap_or_default().iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(separator)
            .to_lowercase()
    }
}

fn find_from(chars: &[char], start: usize, predicate: fn(char) -> bool) -> Option<usize> {
    chars
        .iter()
        .skip(start)
        .position(|c| predicate(*c))
        .map(|offset| start + offset)
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case() {
        let encoding = KeyEncoding::ConvertToSnakeCase;
        assert_eq!(encoding.encode("oneTwoThree"), "one_two_three");
        assert_eq!(encoding.encode("_oneTwoThree_"), "_one_two_three_");
        assert_eq!(encoding.encode("myURLProperty"), "my_url_property");
        assert_eq!(encoding.encode("fooURL"), "foo_url");
        assert_eq!(encoding.encode("single"), "single");
        assert_eq!(encoding.encode(""), "");
    }

    #[test]
    fn kebab_case() {
        let encoding = KeyEncoding::ConvertToKebabCase;
        assert_eq!(encoding.encode("myURLProperty"), "my-url-property");
        assert_eq!(encoding.encode("oneTwoThree"), "one-two-three");
        assert_eq!(encoding.encode("aB"), "a-b");
    }

    #[test]
    fn conversion_is_idempotent() {
        for encoding in [KeyEncoding::ConvertToSnakeCase, KeyEncoding::ConvertToKebabCase] {
            for key in ["oneTwoThree", "myURLProperty", "_leading", "x"] {
                let once = encoding.encode(key);
                assert_eq!(encoding.encode(&once), once, "{encoding:?} on {key}");
            }
        }
    }

    #[test]
    fn capitalized_only_touches_first_character() {
        assert_eq!(KeyEncoding::Capitalized.encode("oneTwoThree"), "OneTwoThree");
        assert_eq!(KeyEncoding::Capitalized.encode(""), "");
    }

    #[test]
    fn whole_key_casing() {
        assert_eq!(KeyEncoding::Uppercased.encode("oneTwo"), "ONETWO");
        assert_eq!(KeyEncoding::Lowercased.encode("oneTwo"), "onetwo");
        assert_eq!(KeyEncoding::UseDefaultKeys.encode("oneTwo"), "oneTwo");
    }

    #[test]
    fn custom_encoder() {
        let encoding = KeyEncoding::custom(|key| format!("x-{key}"));
        assert_eq!(encoding.encode("id"), "x-id");
        assert_eq!(format!("{encoding:?}"), "Custom(..)");
    }
}

//! Rule-based fallback transliterator.
//!
//! Two passes over a single lower-cased word:
//!
//! 1. **Rewrite**: Polish spelling is mapped to English-reader digraphs with
//!    an ordered table, longest pattern first (`szcz` before `sz` before `s`).
//!    Every rule emits phoneme tokens that are either vowels or consonants,
//!    so digraphs such as `sh` are never split across syllables.
//! 2. **Stress**: tokens are grouped into syllables around vowel nuclei and
//!    the onset and nucleus of the penultimate syllable are upper-cased.
//!
//! Total over any input: unknown characters pass through as consonants.

use once_cell::sync::Lazy;

/// Polish vowel letters (before rewriting)
const POLISH_VOWELS: &str = "aąeęioóuy";

/// Rewritten vowels all start with one of these
const TOKEN_VOWELS: &str = "aeiou";

/// Inputs with this many letters or fewer are returned as-is
const SHORT_WORD_LETTERS: usize = 3;

/// Plain spelling rules
const BASE_RULES: &[(&str, &[&str])] = &[
    ("szcz", &["shch"]),
    ("dż", &["j"]),
    ("dź", &["j"]),
    ("sz", &["sh"]),
    ("cz", &["ch"]),
    ("rz", &["zh"]),
    ("ch", &["h"]),
    ("dz", &["dz"]),
    ("ł", &["w"]),
    ("ń", &["ny"]),
    ("ś", &["sh"]),
    ("ć", &["ch"]),
    ("ż", &["zh"]),
    ("ź", &["zh"]),
    ("ą", &["o", "n"]),
    ("ę", &["e", "n"]),
    ("ó", &["oo"]),
    ("u", &["oo"]),
    ("w", &["v"]),
    ("c", &["ts"]),
    ("j", &["y"]),
    ("y", &["i"]),
];

/// Consonants softened by a following `i` + vowel ("nia" reads "nya")
const SOFTENED: &[(&str, &str)] = &[("dzi", "j"), ("ci", "ch"), ("si", "sh"), ("zi", "zh"), ("ni", "ny")];

/// Vowels that may follow a softening `i`
const GLIDE_VOWELS: &[(&str, &[&str])] = &[
    ("a", &["a"]),
    ("e", &["e"]),
    ("o", &["o"]),
    ("u", &["oo"]),
    ("ó", &["oo"]),
    ("ą", &["o", "n"]),
    ("ę", &["e", "n"]),
];

struct Rule {
    pattern: Vec<char>,
    output: Vec<&'static str>,
}

/// Full rule table, longest pattern first; equal lengths keep table order
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules: Vec<Rule> = Vec::new();
    for (soft, sound) in SOFTENED {
        for (vowel, vowel_tokens) in GLIDE_VOWELS {
            let mut output = vec![*sound];
            output.extend_from_slice(vowel_tokens);
            rules.push(Rule {
                pattern: format!("{}{}", soft, vowel).chars().collect(),
                output,
            });
        }
    }
    // Bare `i` before a vowel is a glide
    for (vowel, vowel_tokens) in GLIDE_VOWELS {
        let mut output = vec!["y"];
        output.extend_from_slice(vowel_tokens);
        rules.push(Rule {
            pattern: format!("i{}", vowel).chars().collect(),
            output,
        });
    }
    for (pattern, output) in BASE_RULES {
        rules.push(Rule {
            pattern: pattern.chars().collect(),
            output: output.to_vec(),
        });
    }
    rules.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
    rules
});

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    vowel: bool,
}

impl Token {
    fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let vowel = text.chars().next().is_some_and(|c| TOKEN_VOWELS.contains(c));
        Token { text, vowel }
    }
}

#[derive(Debug, Default)]
struct Syllable {
    onset: String,
    nucleus: String,
    coda: String,
}

impl Syllable {
    fn render(&self, stressed: bool) -> String {
        if stressed {
            format!("{}{}{}", self.onset.to_uppercase(), self.nucleus.to_uppercase(), self.coda)
        } else {
            format!("{}{}{}", self.onset, self.nucleus, self.coda)
        }
    }
}

fn rewrite(word: &str) -> Vec<Token> {
    let chars: Vec<char> = word.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let rest = &chars[i..];
        match RULES.iter().find(|rule| rest.starts_with(&rule.pattern)) {
            Some(rule) => {
                tokens.extend(rule.output.iter().map(|t| Token::new(*t)));
                i += rule.pattern.len();
            }
            None => {
                tokens.push(Token::new(chars[i]));
                i += 1;
            }
        }
    }
    tokens
}

fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Group tokens into syllables, one per maximal run of vowel tokens.
///
/// A single consonant between two nuclei opens the next syllable; in a
/// longer cluster the first consonant closes the previous one.
fn syllabify(tokens: &[Token]) -> Vec<Syllable> {
    let mut nuclei: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].vowel {
            let start = i;
            while i < tokens.len() && tokens[i].vowel {
                i += 1;
            }
            nuclei.push((start, i));
        } else {
            i += 1;
        }
    }

    let mut syllables: Vec<Syllable> = Vec::with_capacity(nuclei.len());
    let mut onset_start = 0;
    for (k, &(start, end)) in nuclei.iter().enumerate() {
        let mut syllable = Syllable {
            onset: concat(&tokens[onset_start..start]),
            nucleus: concat(&tokens[start..end]),
            coda: String::new(),
        };
        match nuclei.get(k + 1) {
            Some(&(next_start, _)) => {
                let cluster = next_start - end;
                let coda_len = if cluster >= 2 { 1 } else { 0 };
                syllable.coda = concat(&tokens[end..end + coda_len]);
                onset_start = end + coda_len;
            }
            None => syllable.coda = concat(&tokens[end..]),
        }
        syllables.push(syllable);
    }
    syllables
}

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{300}'..='\u{36f}';

/// Transliterate one word without consulting the override dictionary.
pub fn fallback(word: &str) -> String {
    // Lower-casing can split a letter into base + combining mark ("İ" -> "i\u{307}")
    let lower: String = word
        .to_lowercase()
        .chars()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect();
    let letters = lower.chars().filter(|c| c.is_alphabetic()).count();
    if letters <= SHORT_WORD_LETTERS || !lower.chars().any(|c| POLISH_VOWELS.contains(c)) {
        return lower;
    }

    let tokens = rewrite(&lower);
    let syllables = syllabify(&tokens);
    if syllables.len() < 2 {
        return concat(&tokens);
    }

    let stressed = syllables.len() - 2;
    syllables
        .iter()
        .enumerate()
        .map(|(i, s)| s.render(i == stressed))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_sorted_longest_first() {
        for pair in RULES.windows(2) {
            assert!(pair[0].pattern.len() >= pair[1].pattern.len());
        }
    }

    #[test]
    fn test_digraphs_and_diacritics() {
        assert_eq!(concat(&rewrite("szcz")), "shch");
        assert_eq!(concat(&rewrite("rzeka")), "zheka");
        assert_eq!(concat(&rewrite("łąka")), "wonka");
        assert_eq!(concat(&rewrite("dzień")), "jeny");
        assert_eq!(concat(&rewrite("góra")), "goora");
    }

    #[test]
    fn test_penultimate_stress() {
        assert_eq!(fallback("czwartego"), "chvar-TE-go");
        assert_eq!(fallback("dwudziestego"), "dvoo-jes-TE-go");
        assert_eq!(fallback("kwiatek"), "KVYA-tek");
        assert_eq!(fallback("szkoła"), "SHKO-wa");
        assert_eq!(fallback("rzeka"), "ZHE-ka");
    }

    #[test]
    fn test_short_and_vowelless_words_unchanged() {
        assert_eq!(fallback(""), "");
        assert_eq!(fallback("Kot"), "kot");
        assert_eq!(fallback("BRRR"), "brrr");
        assert_eq!(fallback("1234"), "1234");
    }

    #[test]
    fn test_monosyllable_is_not_marked() {
        assert_eq!(fallback("sześć"), "sheshch");
    }

    #[test]
    fn test_total_over_odd_input() {
        for input in ["ąąąą", "x-y-z-a", "🙂🙂🙂🙂a", "ÜBERALL", "i", "iiii", "a\u{301}bcde"] {
            let first = fallback(input);
            assert_eq!(first, fallback(input));
        }
    }

    #[test]
    fn test_combining_marks_dropped_after_lowercase() {
        let dotted = fallback("İiii");
        assert!(!dotted.chars().any(|c| COMBINING_MARKS.contains(&c)));
        assert_eq!(dotted, fallback("iiii"));
    }
}

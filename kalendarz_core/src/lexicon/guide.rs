//! Grammar guide shown on the culture screen.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideSection {
    pub heading: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrammarGuide {
    pub title: &'static str,
    pub sections: &'static [GuideSection],
}

pub static GRAMMAR_GUIDE: GrammarGuide = GrammarGuide {
    title: "Saying the Date in Polish",
    sections: &[
        GuideSection {
            heading: "The \"whose\" rule",
            content: "A Polish date is literally \"the third (day) of April\". The month answers the \
                      question \"of what?\", so it takes the genitive case: kwiecień becomes kwietnia, \
                      lipiec becomes lipca, maj becomes maja.",
        },
        GuideSection {
            heading: "Ordinal days",
            content: "The day number is an ordinal agreeing with the unspoken masculine noun \"dzień\", \
                      also in the genitive: pierwszego, drugiego, trzeciego ... trzydziestego pierwszego. \
                      Every form ends in -ego.",
        },
        GuideSection {
            heading: "Saying the year",
            content: "Only the last part of the year becomes an ordinal; everything before it stays a \
                      plain number. 2024 is \"dwa tysiące dwudziestego czwartego roku\", 1900 is \
                      \"tysiąc dziewięćsetnego roku\" and 2000 is \"dwutysięcznego roku\".",
        },
        GuideSection {
            heading: "Stress",
            content: "Polish words are stressed on the second-to-last syllable. The phonetic guide marks \
                      that syllable in capitals: loo-TEH-goh, MAR-tsah.",
        },
    ],
};

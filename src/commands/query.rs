//! Stateless dictionary queries
//!
//! Translates a query request into a dictionary or engine call and packages
//! the result for display. Free-text inputs are trimmed here, the way a form
//! handler would, before they reach the dictionary.

use crate::dictionary::Dictionary;
use crate::engine::{Scrambler, SubwordMatcher};
use rand::Rng;
use serde::Serialize;

/// One request from the query family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Scramble {
        word: String,
    },
    Exists {
        word: String,
    },
    Prefix {
        prefix: String,
    },
    Search {
        start_char: Option<char>,
        end_char: Option<char>,
        length: Option<usize>,
    },
    Palindromes,
    SubWords {
        word: String,
        min_length: Option<usize>,
    },
}

/// Result of a query, ready for display or JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QueryAnswer {
    Scramble { word: String, scramble: String },
    Exists { word: String, exists: bool },
    Words { title: String, words: Vec<String> },
}

/// Run a query against the dictionary
///
/// # Examples
/// ```
/// use jumble::commands::{Query, QueryAnswer, run_query};
/// use jumble::dictionary::Dictionary;
///
/// let dictionary = Dictionary::from_words(["deed", "level"]);
/// let answer = run_query(&dictionary, &Query::Exists { word: " Deed ".into() }, &mut rand::rng());
/// assert!(matches!(answer, QueryAnswer::Exists { exists: true, .. }));
/// ```
pub fn run_query<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    query: &Query,
    rng: &mut R,
) -> QueryAnswer {
    match query {
        Query::Scramble { word } => {
            let word = word.trim();
            QueryAnswer::Scramble {
                word: word.to_string(),
                scramble: Scrambler::default().scramble(word, rng),
            }
        }
        Query::Exists { word } => {
            let word = word.trim();
            QueryAnswer::Exists {
                word: word.to_string(),
                exists: dictionary.exists(word),
            }
        }
        Query::Prefix { prefix } => {
            let prefix = prefix.trim();
            words(
                format!("Words starting with '{prefix}'"),
                dictionary.words_with_prefix(prefix),
            )
        }
        Query::Search {
            start_char,
            end_char,
            length,
        } => words(
            search_title(*start_char, *end_char, *length),
            dictionary.search(*start_char, *end_char, *length),
        ),
        Query::Palindromes => words("Palindromes".to_string(), dictionary.palindrome_words()),
        Query::SubWords { word, min_length } => {
            let word = word.trim();
            let min_length_label =
                min_length.map_or_else(|| "default".to_string(), |m| m.to_string());
            words(
                format!("Sub-words of '{word}' (min length {min_length_label})"),
                SubwordMatcher::new(dictionary).sub_words(word, *min_length),
            )
        }
    }
}

fn words(title: String, found: Vec<&str>) -> QueryAnswer {
    QueryAnswer::Words {
        title,
        words: found.into_iter().map(str::to_string).collect(),
    }
}

fn search_title(start_char: Option<char>, end_char: Option<char>, length: Option<usize>) -> String {
    let mut filters = Vec::new();
    if let Some(c) = start_char {
        filters.push(format!("start '{c}'"));
    }
    if let Some(c) = end_char {
        filters.push(format!("end '{c}'"));
    }
    if let Some(n) = length {
        filters.push(format!("length {n}"));
    }

    if filters.is_empty() {
        "Search (no filters given)".to_string()
    } else {
        format!("Search: {}", filters.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterBag;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(query: Query) -> QueryAnswer {
        let dictionary = Dictionary::embedded();
        run_query(&dictionary, &query, &mut StdRng::seed_from_u64(17))
    }

    fn found(answer: QueryAnswer) -> Vec<String> {
        match answer {
            QueryAnswer::Words { words, .. } => words,
            other => panic!("expected a word list, got {other:?}"),
        }
    }

    #[test]
    fn scramble_query_permutes_trimmed_word() {
        let QueryAnswer::Scramble { word, scramble } = run(Query::Scramble {
            word: "  elephant ".into(),
        }) else {
            panic!("expected a scramble answer");
        };
        assert_eq!(word, "elephant");
        assert_ne!(scramble, "elephant");
        assert!(LetterBag::new("elephant").is_anagram_of(&scramble));
    }

    #[test]
    fn exists_query_trims_input() {
        assert_eq!(
            run(Query::Exists {
                word: " Yellow ".into()
            }),
            QueryAnswer::Exists {
                word: "Yellow".into(),
                exists: true
            }
        );
        assert!(matches!(
            run(Query::Exists { word: "   ".into() }),
            QueryAnswer::Exists { exists: false, .. }
        ));
    }

    #[test]
    fn prefix_query() {
        let words = found(run(Query::Prefix {
            prefix: "yel".into(),
        }));
        assert_eq!(words, vec!["yell", "yellow"]);
        assert!(found(run(Query::Prefix { prefix: "y3".into() })).is_empty());
    }

    #[test]
    fn search_query_without_filters_is_empty() {
        let answer = run(Query::Search {
            start_char: None,
            end_char: None,
            length: None,
        });
        let QueryAnswer::Words { title, words } = answer else {
            panic!("expected a word list");
        };
        assert_eq!(title, "Search (no filters given)");
        assert!(words.is_empty());
    }

    #[test]
    fn search_query_filters() {
        let words = found(run(Query::Search {
            start_char: Some('Y'),
            end_char: Some('w'),
            length: Some(6),
        }));
        assert_eq!(words, vec!["yellow"]);
    }

    #[test]
    fn palindromes_query() {
        let words = found(run(Query::Palindromes));
        assert!(words.contains(&"level".to_string()));
        assert!(words.iter().all(|w| w.len() >= 2));
    }

    #[test]
    fn sub_words_query() {
        let words = found(run(Query::SubWords {
            word: " yellow ".into(),
            min_length: Some(5),
        }));
        assert_eq!(words, vec!["lowly", "welly"]);
    }

    #[test]
    fn answer_json_is_tagged() {
        let value = serde_json::to_value(QueryAnswer::Exists {
            word: "deed".into(),
            exists: true,
        })
        .unwrap();
        assert_eq!(value["kind"], "exists");
        assert_eq!(value["exists"], true);
    }

    #[test]
    fn search_titles() {
        assert_eq!(
            search_title(Some('a'), None, Some(4)),
            "Search: start 'a', length 4"
        );
        assert_eq!(search_title(None, Some('z'), None), "Search: end 'z'");
    }
}

use serde::Serialize;
use std::cmp::Ordering;

/// The different ways of writing the same lexicographic comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortSpelling {
    /// Typed parameters, block body, explicit `return`.
    Block,
    /// Typed parameters, expression body.
    Expression,
    /// Parameter types left to inference.
    Inferred,
    /// No closure at all, the path `String::cmp`.
    MethodPath,
}

impl SortSpelling {
    pub const ALL: [SortSpelling; 4] = [
        SortSpelling::Block,
        SortSpelling::Expression,
        SortSpelling::Inferred,
        SortSpelling::MethodPath,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortSpelling::Block => "block",
            SortSpelling::Expression => "expression",
            SortSpelling::Inferred => "inferred",
            SortSpelling::MethodPath => "method_path",
        }
    }

    #[allow(clippy::needless_return)]
    pub fn sort(&self, words: &mut [String]) {
        match self {
            SortSpelling::Block => words.sort_by(|a: &String, b: &String| -> Ordering {
                return a.cmp(b);
            }),
            SortSpelling::Expression => words.sort_by(|a: &String, b: &String| a.cmp(b)),
            SortSpelling::Inferred => words.sort_by(|a, b| a.cmp(b)),
            SortSpelling::MethodPath => words.sort_by(String::cmp),
        }
    }

    /// Sorted copy of `words`.
    pub fn sorted(&self, words: &[String]) -> Vec<String> {
        let mut copy = words.to_vec();
        self.sort(&mut copy);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_banana_apple() {
        let input = strings(&["banana", "apple"]);
        for spelling in SortSpelling::ALL {
            assert_eq!(spelling.sorted(&input), strings(&["apple", "banana"]), "{spelling:?}");
        }
    }

    #[test]
    fn test_sort_is_byte_lexicographic() {
        let input = strings(&["b", "B", "a", "A", "ab", ""]);
        let expected = strings(&["", "A", "B", "a", "ab", "b"]);
        for spelling in SortSpelling::ALL {
            assert_eq!(spelling.sorted(&input), expected);
        }
    }

    #[test]
    fn test_sort_in_place_empty() {
        let mut empty: Vec<String> = Vec::new();
        SortSpelling::Inferred.sort(&mut empty);
        assert!(empty.is_empty());
    }
}

//! Problem records shared across all tools.

use serde::Serialize;

/// A single problem reported by a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// File path as emitted by the tool (usually relative to the base path).
    pub filename: String,
    /// 1-based line number.
    pub line: usize,
    /// Human-readable message.
    pub message: String,
}

impl Problem {
    pub fn new(filename: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            line,
            message: message.into(),
        }
    }
}

/// Append-only, ordered collection of problems owned by the caller.
///
/// No deduplication: every `add` is kept in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Problems {
    items: Vec<Problem>,
}

impl Problems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, problem: Problem) {
        self.items.push(problem);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Problem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Problems {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_order_and_duplicates() {
        let mut problems = Problems::new();
        problems.add(Problem::new("b.py", 3, "W291 trailing whitespace"));
        problems.add(Problem::new("a.py", 1, "E101 mixed indentation"));
        problems.add(Problem::new("b.py", 3, "W291 trailing whitespace"));

        assert_eq!(problems.len(), 3);
        let files: Vec<&str> = problems.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(files, vec!["b.py", "a.py", "b.py"]);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut problems = Problems::new();
        problems.add(Problem::new("foo.py", 10, "E501 line too long"));

        let json = serde_json::to_value(&problems).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"filename": "foo.py", "line": 10, "message": "E501 line too long"}])
        );
    }
}

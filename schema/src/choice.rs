use serde::{Deserialize, Serialize};

/// A configuration value that is either fixed or one of several alternatives.
///
/// Content files write a fixed value as a bare value and alternatives as a
/// list, e.g. `item: "Leftovers"` or `item: ["Shuca Berry", "Chople Berry"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOf<T> {
    Fixed(T),
    Alternatives(Vec<T>),
}

impl<T> OneOf<T> {
    /// Every value this field could resolve to.
    pub fn options(&self) -> &[T] {
        match self {
            OneOf::Fixed(value) => std::slice::from_ref(value),
            OneOf::Alternatives(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }
}

impl<T> From<T> for OneOf<T> {
    fn from(value: T) -> Self {
        OneOf::Fixed(value)
    }
}

impl From<&str> for OneOf<String> {
    fn from(value: &str) -> Self {
        OneOf::Fixed(value.to_string())
    }
}

impl From<Vec<&str>> for OneOf<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOf::Alternatives(values.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_and_list_both_parse() {
        let fixed: OneOf<String> = ron::from_str(r#""Life Orb""#).unwrap();
        assert_eq!(fixed, OneOf::Fixed("Life Orb".to_string()));

        let list: OneOf<String> = ron::from_str(r#"["Hex", "Shadow Ball"]"#).unwrap();
        assert_eq!(list, OneOf::from(vec!["Hex", "Shadow Ball"]));
        assert_eq!(list.options().len(), 2);
    }

    #[test]
    fn test_empty_alternatives_report_empty() {
        let empty: OneOf<String> = OneOf::Alternatives(Vec::new());
        assert!(empty.is_empty());
        assert!(!OneOf::<String>::from("Roost").is_empty());
    }
}

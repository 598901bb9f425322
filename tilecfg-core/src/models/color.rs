use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex");
}

/// `#` followed by exactly six hex digits.
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// Human readable color names mapped to color strings, kept in declaration order.
///
/// Values are not validated, any string is accepted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColorTable(IndexMap<String, String>);

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserting an existing name overwrites its color and keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.0.insert(name.into(), color.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names whose color is not a `#rrggbb` string.
    pub fn invalid_entries(&self) -> Vec<(&str, &str)> {
        self.iter().filter(|(_, c)| !is_hex_color(c)).collect()
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for ColorTable {
    fn from_iter<T: IntoIterator<Item = (N, C)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(n, c)| (n.into(), c.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#282c34"));
        assert!(is_hex_color("#BC96E6"));
        assert!(!is_hex_color("282c34"));
        assert!(!is_hex_color("#28c34"));
        assert!(!is_hex_color("#282c34ff"));
        assert!(!is_hex_color("#zzzzzz"));
    }

    #[test]
    fn table_keeps_order_and_overwrites() {
        let mut table: ColorTable = [("Black", "#282c34"), ("White", "#abb2bf")]
            .into_iter()
            .collect();
        table.insert("Black", "#000000");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Black"), Some("#000000"));
        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Black", "White"]);
    }

    #[test]
    fn invalid_values_are_accepted_but_reported() {
        let table: ColorTable = [("Oops", "red"), ("Fine", "#ffffff")].into_iter().collect();
        assert_eq!(table.get("Oops"), Some("red"));
        assert_eq!(table.invalid_entries(), vec![("Oops", "red")]);
    }
}

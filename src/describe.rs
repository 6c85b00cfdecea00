//! Debug-style descriptions: `TypeName(key=value, key="text")`.

use std::fmt;

use crate::data::Record;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Pre-rendered value, written as-is without quotes.
    Raw(String),
    Missing,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "\"{}\"", s),
            FieldValue::Int(n) => write!(f, "{}", n),
            // Debug keeps the trailing ".0" on whole floats
            FieldValue::Float(x) => write!(f, "{:?}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Raw(s) => f.write_str(s),
            FieldValue::Missing => f.write_str("None"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::Text(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Int(n.into())
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Int(n.into())
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => FieldValue::Int(n),
            Err(_) => FieldValue::Raw(n.to_string()),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Missing, Into::into)
    }
}

impl From<&Record> for FieldValue {
    fn from(value: &Record) -> Self {
        match value {
            Record::Null => FieldValue::Missing,
            Record::Bool(b) => FieldValue::Bool(*b),
            Record::String(s) => FieldValue::Text(s.clone()),
            Record::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => FieldValue::Int(i),
                (None, Some(x)) if n.is_f64() => FieldValue::Float(x),
                _ => FieldValue::Raw(n.to_string()),
            },
            Record::Array(_) | Record::Object(_) => FieldValue::Raw(value.to_string()),
        }
    }
}

/// Ordered field list rendered as `TypeName(a=1, b="x")`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Description {
    type_name: String,
    fields: Vec<(String, FieldValue)>,
}

impl Description {
    pub fn new(type_name: impl Into<String>) -> Self {
        Description {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn extend<N: Into<String>>(&mut self, fields: impl IntoIterator<Item = (N, FieldValue)>) {
        for (name, value) in fields {
            self.push(name, value);
        }
    }

    /// Describe a loaded record, keeping the key order of the source file.
    pub fn from_record(type_name: impl Into<String>, record: &Record) -> Self {
        let mut desc = Description::new(type_name);
        match record {
            Record::Object(map) => {
                for (key, value) in map {
                    desc.push(key.as_str(), FieldValue::from(value));
                }
            }
            other => desc.push("value", FieldValue::from(other)),
        }
        desc
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str(")")
    }
}

/// Types that can list their public fields for a debug description.
pub trait Describable {
    /// Field names and current values, in declaration order.
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;

    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    fn description(&self) -> Description {
        let mut desc = Description::new(self.type_name());
        desc.extend(self.fields());
        desc
    }

    fn describe(&self) -> String {
        self.description().to_string()
    }
}

/// `my_crate::module::Thing<u32>` -> `Thing`
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chest {
        label: String,
        gold: u32,
        locked: bool,
        weight: f64,
        key_id: Option<u64>,
    }

    impl Describable for Chest {
        fn fields(&self) -> Vec<(&'static str, FieldValue)> {
            vec![
                ("label", (&self.label).into()),
                ("gold", self.gold.into()),
                ("locked", self.locked.into()),
                ("weight", self.weight.into()),
                ("key_id", self.key_id.into()),
            ]
        }
    }

    #[test]
    fn test_describe_quotes_only_text() {
        let chest = Chest {
            label: "Oak chest".to_string(),
            gold: 40,
            locked: true,
            weight: 12.0,
            key_id: None,
        };

        assert_eq!(
            chest.describe(),
            r#"Chest(label="Oak chest", gold=40, locked=true, weight=12.0, key_id=None)"#
        );
    }

    #[test]
    fn test_describe_is_stable() {
        let chest = Chest {
            label: "Iron chest".to_string(),
            gold: 0,
            locked: false,
            weight: 30.5,
            key_id: Some(4),
        };
        assert_eq!(chest.describe(), chest.describe());
        assert!(chest.describe().ends_with("weight=30.5, key_id=4)"));
    }

    #[test]
    fn test_empty_description() {
        assert_eq!(Description::new("Nothing").to_string(), "Nothing()");
    }

    #[test]
    fn test_from_record_keeps_file_order() {
        let record: Record =
            serde_json::from_str(r#"{"name": "Goblin", "hp": 12, "speed": 1.5, "tags": ["small"]}"#)
                .unwrap();
        let desc = Description::from_record("Enemy", &record);
        assert_eq!(
            desc.to_string(),
            r#"Enemy(name="Goblin", hp=12, speed=1.5, tags=["small"])"#
        );
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("rpg_kit::character::Character"), "Character");
        assert_eq!(short_type_name("alloc::vec::Vec<u8>"), "Vec");
        assert_eq!(short_type_name("Plain"), "Plain");
    }
}

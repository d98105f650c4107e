//! Query-string encoding for list endpoints.

use std::fmt;

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Float(n) => write!(f, "{n}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! int_query_value {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(value: $t) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

int_query_value!(i8, i16, i32, i64, u8, u16, u32);

/// Ordered set of query parameters.
///
/// Absent values are skipped entirely (never rendered as `key=`). Parameters are emitted in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter; `None` is ignored.
    #[must_use]
    pub fn param<V: Into<QueryValue>>(mut self, key: &str, value: Option<V>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push<V: Into<QueryValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(v) = value {
            self.pairs.push((key.to_string(), v.into().to_string()));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `?k=v&…`, or an empty string when no parameter is present.
    #[must_use]
    pub fn build(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let mut out = String::from("?");
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&encode_component(k));
            out.push('=');
            out.push_str(&encode_component(v));
        }
        out
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for QueryBuilder
where
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut q = QueryBuilder::new();
        for (k, v) in iter {
            q.push(k.as_ref(), v);
        }
        q
    }
}

/// Percent-encode everything except RFC 3986 unreserved characters.
#[must_use]
pub fn encode_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0F) as usize] as char);
        }
    }
    out
}

fn is_unreserved(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~')
}

#[cfg(test)]
mod tests {
    use super::{QueryBuilder, QueryValue, encode_component};

    #[test]
    fn omits_absent_values() {
        let q = QueryBuilder::new()
            .param("results", Some(20u32))
            .param::<u32>("page", None);
        assert_eq!(q.build(), "?results=20");
    }

    #[test]
    fn empty_builder_renders_nothing() {
        assert_eq!(QueryBuilder::new().build(), "");
        let q: QueryBuilder = Vec::<(&str, Option<u32>)>::new().into_iter().collect();
        assert_eq!(q.build(), "");
        let all_absent = QueryBuilder::new()
            .param::<u32>("results", None)
            .param::<bool>("async", None);
        assert!(all_absent.is_empty());
        assert_eq!(all_absent.build(), "");
    }

    #[test]
    fn keeps_insertion_order_and_stringifies_scalars() {
        let q = QueryBuilder::new()
            .param("page", Some(2u32))
            .param("results", Some(5u32))
            .param("test", Some(true))
            .param("weight", Some(1.5f64))
            .param("order_status", Some("PAID"));
        assert_eq!(
            q.build(),
            "?page=2&results=5&test=true&weight=1.5&order_status=PAID"
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(QueryValue::from("x/y").to_string(), "x/y");
        let q = QueryBuilder::new().param("q", Some("x/y"));
        assert_eq!(q.build(), "?q=x%2Fy");
    }
}

//! Building documents through serde.
//!
//! [`Properties`] deserializes from any map of strings to strings. Entries
//! are applied one by one with [`Properties::put`], so the resulting document
//! holds one `key=value` line per entry, in the order the map yields them.
//!
//! ```rust
//! use properties_edit::Properties;
//!
//! let props: Properties = serde_json::from_str(r#"{"host":"localhost","port":"80"}"#).unwrap();
//! assert_eq!(props.to_string(), "host=localhost\nport=80");
//! ```

use crate::Properties;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

struct PropertiesVisitor;

impl<'de> Visitor<'de> for PropertiesVisitor {
    type Value = Properties;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of string keys to string values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Properties, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut props = Properties::new();
        while let Some((key, value)) = map.next_entry::<String, String>()? {
            props.put(key, value);
        }
        Ok(props)
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PropertiesVisitor)
    }
}

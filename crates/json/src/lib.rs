//! # ordered-json
//!
//! A small JSON value model whose objects keep their properties in insertion
//! order.
//!
//! [`JToken`] is the closed set of JSON values (null, boolean, number, string,
//! array, object). Every variant renders itself as JSON text through
//! `Display`. [`JObject`] is an insertion-ordered map from property names to
//! tokens: re-assigning a property keeps its position, `key_set` hands out a
//! detached snapshot of the names, and equality ignores order while the
//! rendered text follows it.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordered_json::*;
//!
//! let mut obj = JObject::new();
//! obj.put("name", "Ann");
//! obj.put("age", 30);
//! obj.put("active", true);
//! assert_eq!(obj.put("age", 31), Some(JToken::from(30)));
//!
//! assert_eq!(obj.key_set().to_vec(), ["name", "age", "active"]);
//! assert_eq!(obj.to_string(), r#"{"name":"Ann", "age":31, "active":true}"#);
//! ```
//!
//! Parsing is delegated to `serde_json`; see [`JToken::from_json_value`].

pub mod error;
pub mod jarray;
pub mod jboolean;
pub mod jcontainer;
pub mod jnumber;
pub mod jobject;
pub mod jstring;
pub mod jtoken;
pub mod key_collection;
pub mod ordered_dictionary;

pub use error::{JsonError, JsonResult};
pub use jarray::JArray;
pub use jboolean::JBoolean;
pub use jcontainer::JContainer;
pub use jnumber::{JNumber, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use jobject::JObject;
pub use jstring::JString;
pub use jtoken::{JToken, DEFAULT_MAX_NESTING};
pub use key_collection::KeyCollection;
pub use ordered_dictionary::OrderedDictionary;

//! JObject behaviour tests: ordering, snapshots, equality and text output.

use ordered_json::{JArray, JObject, JToken};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn hash_of(object: &JObject) -> u64 {
    let mut hasher = DefaultHasher::new();
    object.hash(&mut hasher);
    hasher.finish()
}

// Helper to create test objects
fn create_alice() -> JObject {
    let mut pet = JObject::new();
    pet.put("name", "Tom");
    pet.put("type", "cat");

    let mut alice = JObject::new();
    alice.put("name", "alice");
    alice.put("age", 30);
    alice.put("score", JToken::try_from(100.001).expect("finite"));
    alice.put("gender", "female");
    alice.put("isMarried", true);
    alice.put("pet", pet);
    alice
}

#[test]
fn test_end_to_end_serialization() {
    init_logger();

    let mut person = JObject::new();
    person.put("name", "Ann");
    person.put("age", 30);
    person.put("active", true);

    assert_eq!(
        person.to_string(),
        r#"{"name":"Ann", "age":30, "active":true}"#
    );
}

#[test]
fn test_empty_and_single_property() {
    assert_eq!(JObject::new().to_string(), "{}");

    let mut single = JObject::new();
    single.put("x", 5);
    assert_eq!(single.to_string(), r#"{"x":5}"#);
}

#[test]
fn test_put_new_key_grows_size() {
    let mut object = JObject::new();

    assert_eq!(object.put("a", 1), None);
    assert_eq!(object.size(), 1);
    assert_eq!(object.put("b", 2), None);
    assert_eq!(object.size(), 2);
}

#[test]
fn test_put_existing_key_returns_previous() {
    init_logger();

    let mut object = JObject::new();
    object.put("a", 1);
    object.put("b", 2);

    let previous = object.put("a", 3);

    assert_eq!(previous, Some(JToken::from(1)));
    assert_eq!(object.size(), 2);
    assert_eq!(object.get("a"), Some(&JToken::from(3)));
    assert_eq!(object.key_set().to_vec(), vec!["a", "b"]);
}

#[test]
fn test_key_set_snapshot_isolation() {
    let mut object = create_alice();
    let before = object.key_set();

    object.put("email", "alice@example.com");
    object.put("name", "alicia");

    assert_eq!(before.len(), 6);
    assert!(!before.contains("email"));
    assert_eq!(
        before.iter().collect::<Vec<_>>(),
        vec!["name", "age", "score", "gender", "isMarried", "pet"]
    );

    let after = object.key_set();
    assert_eq!(after.len(), 7);
    assert_eq!(after.get(6), Some("email"));
}

#[test]
fn test_key_set_survives_dropping_source() {
    let keys = {
        let object = create_alice();
        object.key_set()
    };
    assert!(keys.contains("pet"));
    assert_eq!(keys.len(), 6);
}

#[test]
fn test_order_insensitive_equality() {
    let mut forward = JObject::new();
    forward.put("name", "Ann");
    forward.put("age", 30);

    let mut backward = JObject::new();
    backward.put("age", 30);
    backward.put("name", "Ann");

    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
    assert_eq!(forward.to_string(), r#"{"name":"Ann", "age":30}"#);
    assert_eq!(backward.to_string(), r#"{"age":30, "name":"Ann"}"#);

    let mut set = HashSet::new();
    set.insert(forward);
    assert!(set.contains(&backward));
}

#[test]
fn test_nested_equality_ignores_order() {
    let inner_a: JObject = [("x", 1), ("y", 2)].into_iter().collect();
    let inner_b: JObject = [("y", 2), ("x", 1)].into_iter().collect();

    let mut outer_a = JObject::new();
    outer_a.put("inner", inner_a);
    let mut outer_b = JObject::new();
    outer_b.put("inner", inner_b);

    assert_eq!(outer_a, outer_b);
    assert_eq!(hash_of(&outer_a), hash_of(&outer_b));
}

#[test]
fn test_values_render_polymorphically() {
    let mut object = JObject::new();
    object.put("null", JToken::Null);
    object.put("bool", false);
    object.put("int", -7);
    object.put("float", JToken::try_from(2.5).expect("finite"));
    object.put("string", "tab\tquote\"");
    object.put("array", JArray::from_iter([1, 2, 3]));
    object.put("object", create_alice());

    assert_eq!(
        object.to_string(),
        concat!(
            r#"{"null":null, "bool":false, "int":-7, "float":2.5, "#,
            r#""string":"tab\tquote\"", "array":[1,2,3], "#,
            r#""object":{"name":"alice", "age":30, "score":100.001, "gender":"female", "#,
            r#""isMarried":true, "pet":{"name":"Tom", "type":"cat"}}}"#
        )
    );
}

#[test]
fn test_unicode_keys() {
    let mut object = JObject::new();
    object.put("ключ", "значение");
    object.put("\u{0007}bell", 1);

    assert!(object.contains_key("ключ"));
    assert_eq!(object.to_string(), r#"{"ключ":"значение", "\u0007bell":1}"#);
}

#[test]
fn test_typed_access() {
    let alice = create_alice();

    assert_eq!(alice.get("name").and_then(JToken::as_str), Some("alice"));
    assert_eq!(alice.get("age").and_then(JToken::as_f64), Some(30.0));
    assert_eq!(alice.get("isMarried").and_then(JToken::as_bool), Some(true));
    assert_eq!(
        alice
            .get("pet")
            .and_then(JToken::as_object)
            .and_then(|pet| pet.get("type"))
            .and_then(JToken::as_str),
        Some("cat")
    );
    assert!(alice.get("missing").is_none());
}

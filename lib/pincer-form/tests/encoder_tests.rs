//! Integration tests for `FormEncoder`.

#![allow(missing_docs)]

use std::collections::BTreeMap;

use assert2::{check, let_assert};
use chrono::{DateTime, TimeZone, Utc};
use pincer_form::prelude::*;
use pincer_form::{CodingPath, Component, ComponentKind, ValueEncoder};
use serde::Serialize;
use serde_json::json;

fn billennium() -> DateTime<Utc> {
    Utc.timestamp_opt(1_000_000_000, 0)
        .single()
        .expect("valid timestamp")
}

fn encoder(config: EncoderConfig) -> FormEncoder {
    FormEncoder::new(config)
}

#[test]
fn test_brackets_alphabetized() {
    let value = json!({ "foo": "bar", "baz": [1, 2] });
    let config = EncoderConfig::builder()
        .array_encoding(ArrayEncoding::Brackets)
        .alphabetize_key_value_pairs(true)
        .build();

    let query = encoder(config).encode(&value).expect("encode");
    insta::assert_snapshot!(query, @"baz[]=1&baz[]=2&foo=bar");
}

#[test]
fn test_bool_encodings() {
    let numeric = encoder(EncoderConfig::default())
        .encode(&json!({ "flag": true }))
        .expect("encode");
    assert_eq!(numeric, "flag=1");

    let literal = encoder(
        EncoderConfig::builder()
            .bool_encoding(BoolEncoding::Literal)
            .build(),
    )
    .encode(&json!({ "flag": false }))
    .expect("encode");
    assert_eq!(literal, "flag=false");
}

#[test]
fn test_space_encodings() {
    let value = json!({ "q": "a b" });

    let escaped = to_string(&value).expect("encode");
    assert_eq!(escaped, "q=a%20b");

    let plus = encoder(
        EncoderConfig::builder()
            .space_encoding(SpaceEncoding::PlusReplaced)
            .build(),
    )
    .encode(&value)
    .expect("encode");
    assert_eq!(plus, "q=a+b");
}

#[test]
fn test_non_keyed_roots_are_rejected() {
    let_assert!(Err(err) = to_string("bare"));
    check!(err.is_invalid_root());
    let_assert!(Error::InvalidRootObject(ComponentKind::Scalar) = err);

    let_assert!(Err(err) = to_string(&[1, 2, 3]));
    let_assert!(Error::InvalidRootObject(ComponentKind::Sequence) = err);
}

#[test]
fn test_null_at_any_depth_is_unsupported() {
    let value = json!({ "a": { "b": [1, null] } });

    let_assert!(Err(err) = to_string(&value));
    check!(err.is_unsupported_value());
    check!(err.to_string() == "unsupported value: cannot encode unit at 'a.b[1]'");

    let_assert!(Err(err) = to_bytes(&json!({ "top": null })));
    check!(err.is_unsupported_value());
}

#[test]
fn test_optional_fields() {
    #[derive(Serialize)]
    struct Search {
        q: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
        limit: Option<u32>,
    }

    let full = Search {
        q: "rust".to_string(),
        page: Some(2),
        limit: Some(10),
    };
    assert_eq!(to_string(&full).expect("encode"), "limit=10&page=2&q=rust");

    let skipped = Search {
        q: "rust".to_string(),
        page: None,
        limit: Some(10),
    };
    assert_eq!(to_string(&skipped).expect("encode"), "limit=10&q=rust");

    let absent = Search {
        q: "rust".to_string(),
        page: None,
        limit: None,
    };
    let_assert!(Err(err) = to_string(&absent));
    check!(err.to_string() == "unsupported value: cannot encode none at 'limit'");
}

#[test]
fn test_single_value_container_protocol() {
    let config = EncoderConfig::default();
    let mut tree = Component::default();
    let mut container = ValueEncoder::new(&mut tree, &config, CodingPath::root().appending("id"));

    container.encode(&7).expect("first encode");
    let_assert!(Err(err) = container.encode(&8));
    check!(err.is_protocol_violation());
    check!(err.to_string() == "protocol violation: value already encoded at 'id'");

    assert_eq!(tree.get("id").and_then(Component::as_scalar), Some("7"));
}

#[test]
fn test_key_encodings() {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Profile {
        display_name: String,
        home_url: String,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Account {
        user_id: u64,
        user_profile: Profile,
    }

    let account = Account {
        user_id: 42,
        user_profile: Profile {
            display_name: "Ada".to_string(),
            home_url: "https://example.com/ada".to_string(),
        },
    };

    let default_keys = to_string(&account).expect("encode");
    insta::assert_snapshot!(
        default_keys,
        @"userId=42&userProfile[displayName]=Ada&userProfile[homeUrl]=https%3A//example.com/ada"
    );

    let snake = encoder(
        EncoderConfig::builder()
            .key_encoding(KeyEncoding::ConvertToSnakeCase)
            .build(),
    )
    .encode(&account)
    .expect("encode");
    insta::assert_snapshot!(
        snake,
        @"user_id=42&user_profile[display_name]=Ada&user_profile[home_url]=https%3A//example.com/ada"
    );

    let kebab = encoder(
        EncoderConfig::builder()
            .key_encoding(KeyEncoding::ConvertToKebabCase)
            .alphabetize_key_value_pairs(false)
            .build(),
    )
    .encode(&json!({ "myURLProperty": 1 }))
    .expect("encode");
    assert_eq!(kebab, "my-url-property=1");

    let capitalized = encoder(
        EncoderConfig::builder()
            .key_encoding(KeyEncoding::Capitalized)
            .build(),
    )
    .encode(&json!({ "oneTwoThree": 3 }))
    .expect("encode");
    assert_eq!(capitalized, "OneTwoThree=3");

    let custom = encoder(
        EncoderConfig::builder()
            .key_encoding(KeyEncoding::custom(|key| format!("x_{key}")))
            .build(),
    )
    .encode(&json!({ "id": 1 }))
    .expect("encode");
    assert_eq!(custom, "x_id=1");
}

#[test]
fn test_array_encodings() {
    #[derive(Serialize)]
    struct Filter {
        tags: Vec<&'static str>,
    }

    let filter = Filter {
        tags: vec!["b", "a"],
    };
    let encode_with = |array_encoding: ArrayEncoding| {
        encoder(
            EncoderConfig::builder()
                .array_encoding(array_encoding)
                .alphabetize_key_value_pairs(false)
                .build(),
        )
        .encode(&filter)
        .expect("encode")
    };

    assert_eq!(encode_with(ArrayEncoding::Brackets), "tags[]=b&tags[]=a");
    assert_eq!(encode_with(ArrayEncoding::NoBrackets), "tags=b&tags=a");
    assert_eq!(encode_with(ArrayEncoding::IndexInBrackets), "tags[0]=b&tags[1]=a");
    assert_eq!(
        encode_with(ArrayEncoding::custom(|key, index| format!("{key}.{index}"))),
        "tags.0=b&tags.1=a"
    );
}

#[test]
fn test_nested_structure_in_insertion_order() {
    #[derive(Serialize)]
    struct Item {
        sku: &'static str,
        qty: u32,
    }

    #[derive(Serialize)]
    struct Order {
        id: u32,
        items: Vec<Item>,
        notes: BTreeMap<&'static str, Vec<&'static str>>,
    }

    let order = Order {
        id: 9,
        items: vec![Item { sku: "A-1", qty: 2 }, Item { sku: "B 2", qty: 1 }],
        notes: BTreeMap::from([("gift", vec!["wrap", "card"])]),
    };

    let query = encoder(
        EncoderConfig::builder()
            .alphabetize_key_value_pairs(false)
            .build(),
    )
    .encode(&order)
    .expect("encode");
    insta::assert_snapshot!(
        query,
        @"id=9&items[][sku]=A-1&items[][qty]=2&items[][sku]=B%202&items[][qty]=1&notes[gift][]=wrap&notes[gift][]=card"
    );
}

#[test]
fn test_timestamp_encodings() {
    #[derive(Serialize)]
    struct Event {
        at: Timestamp,
    }

    let event = Event {
        at: Timestamp(billennium()),
    };
    let encode_with = |date_encoding: DateEncoding| {
        encoder(
            EncoderConfig::builder()
                .date_encoding(date_encoding)
                .build(),
        )
        .encode(&event)
    };

    check!(encode_with(DateEncoding::DeferredToDate).expect("deferred") == "at=2001-09-09T01%3A46%3A40Z");
    check!(encode_with(DateEncoding::SecondsSince1970).expect("seconds") == "at=1000000000");
    check!(
        encode_with(DateEncoding::MillisecondsSince1970).expect("millis") == "at=1000000000000"
    );
    check!(encode_with(DateEncoding::Iso8601).expect("iso") == "at=2001-09-09T01%3A46%3A40Z");
    check!(
        encode_with(DateEncoding::Formatted("%Y-%m-%d %H:%M".to_string())).expect("formatted")
            == "at=2001-09-09%2001%3A46"
    );
    check!(
        encode_with(DateEncoding::custom(|date| Ok(date.format("%Y").to_string())))
            .expect("custom")
            == "at=2001"
    );

    let_assert!(
        Err(Error::Custom(message)) =
            encode_with(DateEncoding::custom(|_| Err(Error::custom("no dates"))))
    );
    check!(message == "no dates");
}

#[test]
fn test_timestamp_serialize_with() {
    #[derive(Serialize)]
    struct Window {
        #[serde(serialize_with = "pincer_form::timestamp::serialize")]
        from: DateTime<Utc>,
    }

    let window = Window { from: billennium() };
    let query = encoder(
        EncoderConfig::builder()
            .date_encoding(DateEncoding::SecondsSince1970)
            .build(),
    )
    .encode(&window)
    .expect("encode");
    assert_eq!(query, "from=1000000000");
}

#[test]
fn test_data_encodings() {
    #[derive(Serialize)]
    struct Upload {
        name: &'static str,
        payload: bytes::Bytes,
    }

    let upload = Upload {
        name: "blob",
        payload: bytes::Bytes::from_static(&[0xfb, 0xff]),
    };

    let base64 = to_string(&upload).expect("encode");
    assert_eq!(base64, "name=blob&payload=%2B/8%3D");

    let deferred = encoder(
        EncoderConfig::builder()
            .data_encoding(DataEncoding::DeferredToData)
            .build(),
    )
    .encode(&upload)
    .expect("encode");
    assert_eq!(deferred, "name=blob&payload[]=251&payload[]=255");

    let failing = encoder(
        EncoderConfig::builder()
            .data_encoding(DataEncoding::custom(|_| Err(Error::custom("binary refused"))))
            .build(),
    );
    let_assert!(Err(err) = failing.encode(&upload));
    check!(err.to_string() == "binary refused");
}

#[test]
fn test_decimal_is_single_scalar() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{ "price": 19.90, "qty": 3 }"#).expect("json");

    let query = to_string(&value).expect("encode");
    assert_eq!(query, "price=19.90&qty=3");
}

#[test]
fn test_encode_to_bytes() {
    let body = FormEncoder::default()
        .encode_to_bytes(&json!({ "user": "alice", "next": "/home?tab=1" }))
        .expect("encode");
    assert_eq!(body.as_ref(), b"next=/home?tab%3D1&user=alice");
}

mod harness;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use harness::init_logger;
use rocpp_codec::error::ParseErrorKind;
use rocpp_codec::soap::xml::{parse_document, write_record};
use rocpp_codec::{ocpp_enum, record, Error, Hooks, Node, OrderedSet, Payload, Placement, Record};
use serde_json::json;

ocpp_enum! {
    pub enum Colour {
        Red = "Red",
        Green = "Green",
        DeepBlue = "Deep-Blue",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Sample {
        pub name: String => req "name" [max_len 5],
        pub level: Option<i32> => opt "level" [min -1, max 3],
        pub tags: OrderedSet<String> => set "tags" [each_max_len 4],
        pub colours: Option<OrderedSet<Colour>> => opt_unique "colours",
        pub notes: Option<OrderedSet<String>> => bag "notes",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Outer {
        pub sample: Sample => req "sample",
        pub extra: Option<Sample> => opt "extra",
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_json() -> serde_json::Value {
    json!({"name": "ab", "level": 2, "tags": ["x", "y"]})
}

#[test]
fn mandatory_field_missing_names_the_field() {
    init_logger();
    let err = Sample::try_from_json(&json!({"tags": ["x"]})).unwrap_err();
    assert_eq!(err.field(), "name");
    assert_eq!(err.kind(), &ParseErrorKind::MissingField);
}

#[test]
fn optional_fields_may_be_absent() {
    init_logger();
    let sample = Sample::try_from_json(&json!({"name": "ab", "tags": ["x"]})).unwrap();
    assert_eq!(sample.level, None);
    assert_eq!(sample.colours, None);
    assert_eq!(sample.notes, None);
    assert_eq!(sample.to_json(), json!({"name": "ab", "tags": ["x"]}));
}

#[test]
fn explicit_null_is_not_absence() {
    init_logger();
    let err = Sample::try_from_json(&json!({"name": "ab", "tags": ["x"], "level": null})).unwrap_err();
    assert_eq!(err.field(), "level");
    assert!(matches!(err.kind(), ParseErrorKind::InvalidValue(_)));
}

#[test]
fn empty_string_is_distinct_from_absent() {
    init_logger();
    let sample = Sample::try_from_json(&json!({"name": "", "tags": ["x"]})).unwrap();
    assert_eq!(sample.name, "");
    assert!(Sample::try_from_json(&json!({"tags": ["x"]})).is_err());
}

#[test]
fn length_and_range_checks() {
    init_logger();
    let too_long = Sample::try_from_json(&json!({"name": "abcdef", "tags": ["x"]})).unwrap_err();
    assert_eq!(too_long.field(), "name");

    for level in [-1, 0, 3] {
        assert!(Sample::try_from_json(&json!({"name": "a", "level": level, "tags": ["x"]})).is_ok());
    }
    for level in [-2, 4] {
        let err = Sample::try_from_json(&json!({"name": "a", "level": level, "tags": ["x"]})).unwrap_err();
        assert_eq!(err.field(), "level");
    }

    let item_too_long = Sample::try_from_json(&json!({"name": "a", "tags": ["x", "toolong"]})).unwrap_err();
    assert_eq!(item_too_long.field(), "tags");
}

#[test]
fn set_rejects_empty_and_merges_duplicates() {
    init_logger();
    let err = Sample::try_from_json(&json!({"name": "a", "tags": []})).unwrap_err();
    assert_eq!(err.field(), "tags");

    let sample = Sample::try_from_json(&json!({"name": "a", "tags": ["y", "x", "y"]})).unwrap();
    assert_eq!(sample.tags.as_slice(), ["y".to_owned(), "x".to_owned()]);
    assert_eq!(sample.to_json()["tags"], json!(["y", "x"]));
}

#[test]
fn bag_accepts_empty_array() {
    init_logger();
    let sample = Sample::try_from_json(&json!({"name": "a", "tags": ["x"], "notes": []})).unwrap();
    assert_eq!(sample.notes, Some(OrderedSet::new()));
    assert_eq!(sample.to_json()["notes"], json!([]));
}

#[test]
fn unique_rejects_duplicates() {
    init_logger();
    let err = Sample::try_from_json(&json!({
        "name": "a",
        "tags": ["x"],
        "colours": ["Red", "Deep-Blue", "Red"],
    }))
    .unwrap_err();
    assert_eq!(err.field(), "colours");
    assert_eq!(err.kind(), &ParseErrorKind::Duplicate);
}

#[test]
fn collection_item_failure_carries_its_index() {
    init_logger();
    let err = Sample::try_from_json(&json!({"name": "a", "tags": ["x"], "colours": ["Red", "Blue"]})).unwrap_err();
    assert_eq!(err.field(), "colours[1]");
}

#[test]
fn enums_use_exact_wire_spellings() {
    assert_eq!("Deep-Blue".parse::<Colour>(), Ok(Colour::DeepBlue));
    assert_eq!(Colour::DeepBlue.to_string(), "Deep-Blue");
    assert!("red".parse::<Colour>().is_err());
    assert!("DeepBlue".parse::<Colour>().is_err());
    assert_eq!(Colour::ALL.len(), 3);
}

#[test]
fn nested_failures_report_the_full_path() {
    init_logger();
    let err = Outer::try_from_json(&json!({"sample": {"tags": ["x"]}})).unwrap_err();
    assert_eq!(err.path(), "sample.name");
    assert_eq!(err.leaf().kind(), &ParseErrorKind::MissingField);

    let err = Outer::try_from_json(&json!({"sample": sample_json(), "extra": "nope"})).unwrap_err();
    assert_eq!(err.path(), "extra");
}

#[test]
fn parse_and_try_parse_agree() {
    init_logger();
    let record = Record::from_json_map(json!({"name": "abcdefg", "tags": ["x"]}).as_object().unwrap());
    let strict = Sample::try_parse(&record).unwrap_err();
    let bundled = Sample::parse(&record).unwrap_err();
    assert!(matches!(bundled, Error::Parse(_)));
    assert_eq!(strict.to_string(), bundled.to_string());
}

#[test]
fn payload_must_be_an_object() {
    init_logger();
    let err = Sample::try_from_json(&json!(["name"])).unwrap_err();
    assert_eq!(err.field(), rocpp_codec::error::PAYLOAD);
    assert!(matches!(Sample::from_json_str("{not json"), Err(Error::Json(_))));
}

#[test]
fn equality_and_hash_ignore_collection_order() {
    init_logger();
    let a = Sample::try_from_json(&json!({"name": "a", "tags": ["x", "y"], "colours": ["Red", "Green"]})).unwrap();
    let b = Sample::try_from_json(&json!({"name": "a", "tags": ["y", "x"], "colours": ["Green", "Red"]})).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = Sample::try_from_json(&json!({"name": "a", "tags": ["x"]})).unwrap();
    assert_ne!(a, c);
}

#[test]
fn lexical_text_decodes_like_typed_json() {
    init_logger();
    let mut record = Record::lexical();
    record.insert("name", Node::Text("ab".into()));
    record.insert("level", Node::Text(" 2 ".into()));
    record.insert("tags", Node::Text("x".into()));
    let sample = Sample::try_parse(&record).unwrap();
    assert_eq!(sample, Sample::try_from_json(&json!({"name": "ab", "level": 2, "tags": ["x"]})).unwrap());
}

#[test]
fn parser_hook_runs_only_after_validation() {
    init_logger();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let hooks = Hooks::<Sample>::none().with_parser(move |record, mut sample| {
        seen.fetch_add(1, Ordering::SeqCst);
        if let Some(Node::String(vendor)) = record.get("vendor") {
            sample.name = vendor.clone();
        }
        sample
    });

    let bad = Record::from_json_map(json!({"vendor": "acme"}).as_object().unwrap());
    assert!(hooks.parse(&bad).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let good = Record::from_json_map(json!({"name": "a", "tags": ["x"], "vendor": "acme"}).as_object().unwrap());
    assert_eq!(hooks.parse(&good).unwrap().name, "acme");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn serializer_hook_extends_the_standard_fields() {
    init_logger();
    let hooks = Hooks::<Sample>::none().with_serializer(|sample, mut record| {
        record.insert("nameLength", Node::Number(sample.name.len().into()));
        record
    });
    let sample = Sample::try_from_json(&sample_json()).unwrap();
    let record = hooks.serialize(&sample);
    assert_eq!(record.get("nameLength"), Some(&Node::Number(2.into())));
    assert_eq!(record.get("name"), Some(&Node::String("ab".into())));
    assert_eq!(Hooks::<Sample>::none().serialize(&sample), sample.to_record());
}

#[test]
fn padded_json_enum_strings_are_rejected() {
    init_logger();
    let err = Sample::try_from_json(&json!({"name": "a", "tags": ["x"], "colours": [" Red"]})).unwrap_err();
    assert_eq!(err.path(), "colours[0]");
    assert!("Red\n".parse::<Colour>().is_err());

    let mut record = Record::lexical();
    record.insert("name", Node::Text("a".into()));
    record.insert("tags", Node::Text("x".into()));
    record.insert("colours", Node::Text("\n  Red\n".into()));
    let sample = Sample::try_parse(&record).unwrap();
    assert_eq!(sample.colours, Some([Colour::Red].into_iter().collect()));
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Tagged {
        pub version: i32 => attr "version",
        pub lang: Option<String> => opt_attr "lang",
        pub body: String => req "body",
    }
}

#[test]
fn attribute_fields_are_placed_as_xml_attributes() {
    init_logger();
    let tagged = Tagged {
        version: 2,
        lang: Some("en".into()),
        body: "hi".into(),
    };
    let record = tagged.to_record();
    assert_eq!(record.entry("version").map(|e| e.placement), Some(Placement::Attribute));
    assert_eq!(record.entry("body").map(|e| e.placement), Some(Placement::Element));
    assert_eq!(tagged.to_json(), json!({"version": 2, "lang": "en", "body": "hi"}));

    let mut xml = String::new();
    write_record(&mut xml, "tagged", &record, "");
    assert_eq!(xml, r#"<tagged version="2" lang="en"><body>hi</body></tagged>"#);
    let parsed = Tagged::try_parse(&parse_document(&xml).unwrap().to_record()).unwrap();
    assert_eq!(parsed, tagged);

    let bare = Tagged {
        lang: None,
        ..tagged
    };
    assert!(!bare.to_record().contains("lang"));
    assert_eq!(Tagged::try_from_json(&bare.to_json()).unwrap(), bare);
}

use std::collections::HashMap;

use envsetting_core::lang::errors::{self, ErrorKind};
use envsetting_core::lang::tags::{self, TagId, TagKind};

#[test]
fn tag_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, TagId> = HashMap::new();

    for info in tags::TAGS {
        let item = &info.item;
        assert_eq!(
            tags::from_str(item.canonical),
            Some(item.id),
            "tag canonical spelling not resolvable: {}",
            item.canonical
        );
        assert_eq!(
            tags::as_str(item.id),
            item.canonical,
            "tag as_str mismatch for {:?}",
            item.id
        );

        if let Some(prev) = seen.insert(item.canonical, item.id) {
            panic!(
                "duplicate tag spelling {:?}: {:?} and {:?}",
                item.canonical, prev, item.id
            );
        }

        for &alias in item.aliases {
            assert_eq!(
                tags::from_str(alias),
                Some(item.id),
                "tag alias not resolvable: {}",
                alias
            );
            assert_eq!(tags::canonicalize(alias), item.canonical);
            if let Some(prev) = seen.insert(alias, item.id) {
                panic!(
                    "duplicate tag alias spelling {:?}: {:?} and {:?}",
                    alias, prev, item.id
                );
            }
        }
    }
}

#[test]
fn error_kind_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, ErrorKind> = HashMap::new();

    for info in errors::ERROR_KINDS {
        assert_eq!(
            errors::from_str(info.canonical),
            Some(info.id),
            "error kind canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(errors::as_str(info.id), info.canonical);
        assert!(!errors::description(info.id).is_empty());

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate error kind spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
        for &alias in info.aliases {
            assert_eq!(errors::from_str(alias), Some(info.id));
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!(
                    "duplicate error kind alias spelling {:?}: {:?} and {:?}",
                    alias, prev, info.id
                );
            }
        }
    }
}

#[test]
fn every_tag_has_metadata() {
    for id in [
        TagId::StringUnlessFalsey,
        TagId::Boolean,
        TagId::Symbol,
        TagId::List,
        TagId::Map,
        TagId::Integer,
        TagId::Float,
        TagId::String,
    ] {
        let info = tags::info_for(id);
        assert!(!info.item.description.is_empty(), "missing description for {id:?}");
    }
}

#[test]
fn collections_are_seeded_coercions() {
    for id in tags::of_kind(TagKind::Coercion) {
        assert_ne!(tags::kind(id), TagKind::Primitive);
    }
    assert!(tags::of_kind(TagKind::Primitive).all(|id| !tags::is_collection(id)));
}

#[test]
fn accessor_and_presence_failures_are_distinct_kinds() {
    assert_ne!(
        errors::from_str("MethodNotFound"),
        errors::from_str("NotConfigured")
    );
    assert_ne!(ErrorKind::UnknownAccessor, ErrorKind::CastFailure);
}

#[test]
fn every_error_kind_has_metadata() {
    for kind in [
        ErrorKind::MissingRequired,
        ErrorKind::NotConfigured,
        ErrorKind::UnknownAccessor,
        ErrorKind::UnknownType,
        ErrorKind::CastFailure,
        ErrorKind::TypeMismatch,
        ErrorKind::InvalidPattern,
        ErrorKind::InvalidEntry,
        ErrorKind::NotUnicode,
    ] {
        assert_eq!(errors::from_str(errors::as_str(kind)), Some(kind));
        assert!(!errors::description(kind).is_empty(), "missing description for {kind:?}");
    }
}

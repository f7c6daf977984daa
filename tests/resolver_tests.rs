use fieldbridge::fields::{FieldDef, FieldGroup, LocationRule};
use fieldbridge::resolver::GalleryResolver;
use fieldbridge::schema::SchemaExtender;
use fieldbridge::testing_utils::{
    FailingValueStore, FixedImagePredicate, InMemoryFieldGroups, InMemorySchemaRegistry,
    InMemoryValueStore,
};
use serde_json::json;

#[test]
fn resolves_through_the_registered_binding() {
    // Registration pass.
    let mut group = FieldGroup::new("g");
    group.add_location_group(vec![LocationRule::new("post_type", "==", "post")]);
    let mut registry = InMemoryFieldGroups::new();
    registry.add_group(group, vec![FieldDef::new("heroImages", "gallery")]);

    let mut schema = InMemorySchemaRegistry::new();
    SchemaExtender::default().extend(Some(&registry), &mut schema);
    let binding = schema
        .get("Post", "hero_images_gallery")
        .unwrap()
        .binding
        .clone();

    // Query pass, using the field name fixed at registration.
    let mut store = InMemoryValueStore::new();
    store.set(10, "heroImages", json!([4, 8, 15]));
    let images = FixedImagePredicate::new([4, 15]);

    let resolver = GalleryResolver::new(&store, &images);
    assert_eq!(
        resolver.resolve(&json!({"ID": 10}), &binding.field),
        vec![4, 15]
    );
}

#[test]
fn mixed_value_list_is_normalized_in_order() {
    let mut store = InMemoryValueStore::new();
    store.set(1, "photos", json!([3, "5", 0, -1, "abc"]));
    let images = FixedImagePredicate::new([3, 5]);

    let resolver = GalleryResolver::new(&store, &images);
    assert_eq!(resolver.resolve(&json!(1), "photos"), vec![3, 5]);
}

#[test]
fn predicate_filter_preserves_order_without_dedup() {
    let mut store = InMemoryValueStore::new();
    store.set(1, "photos", json!([3, 5, 7, 3]));
    let images = FixedImagePredicate::new([3, 7]);

    let resolver = GalleryResolver::new(&store, &images);
    assert_eq!(resolver.resolve(&json!(1), "photos"), vec![3, 7, 3]);
}

#[test]
fn serialized_text_value_is_deserialized() {
    let mut store = InMemoryValueStore::new();
    store.set(1, "photos", json!("[3, 5]"));
    let images = FixedImagePredicate::new([3, 5]);

    let resolver = GalleryResolver::new(&store, &images);
    assert_eq!(resolver.resolve(&json!(1), "photos"), vec![3, 5]);
}

#[test]
fn malformed_values_resolve_to_empty() {
    let mut store = InMemoryValueStore::new();
    store.set(1, "object", json!({"not": "a list"}));
    store.set(1, "scalar", json!(42));
    store.set(1, "text", json!("not json"));
    let images = FixedImagePredicate::new([42]);

    let resolver = GalleryResolver::new(&store, &images);
    for field in ["object", "scalar", "text"] {
        assert!(resolver.resolve(&json!(1), field).is_empty());
    }
}

#[test]
fn empty_field_name_resolves_to_empty() {
    let store = InMemoryValueStore::new();
    let images = FixedImagePredicate::new([]);
    let resolver = GalleryResolver::new(&store, &images);
    assert!(resolver.resolve(&json!({"ID": 1}), "").is_empty());
}

#[test]
fn unresolvable_record_resolves_to_empty() {
    let mut store = InMemoryValueStore::new();
    store.set(1, "photos", json!([3]));
    let images = FixedImagePredicate::new([3]);

    let resolver = GalleryResolver::new(&store, &images);
    assert!(resolver.resolve(&json!({"title": "no id"}), "photos").is_empty());
    assert!(resolver.resolve(&json!(null), "photos").is_empty());
}

#[test]
fn absent_value_resolves_to_empty() {
    let store = InMemoryValueStore::new();
    let images = FixedImagePredicate::new([3]);
    let resolver = GalleryResolver::new(&store, &images);
    assert!(resolver.resolve(&json!(1), "photos").is_empty());
}

#[test]
fn store_failure_degrades_to_empty() {
    let store = FailingValueStore;
    let images = FixedImagePredicate::new([3]);
    let resolver = GalleryResolver::new(&store, &images);
    assert!(resolver.resolve(&json!(1), "photos").is_empty());
}

#[test]
fn host_id_resolver_fallback_is_used() {
    struct SlugIdResolver;
    impl fieldbridge::IdResolver for SlugIdResolver {
        fn resolve_id(&self, record: &serde_json::Value) -> Option<u64> {
            match record.get("slug").and_then(|slug| slug.as_str()) {
                Some("hello-world") => Some(12),
                _ => None,
            }
        }
    }

    let mut store = InMemoryValueStore::new();
    store.set(12, "photos", json!([3]));
    let images = FixedImagePredicate::new([3]);
    let fallback = SlugIdResolver;

    let resolver = GalleryResolver::new(&store, &images).with_id_resolver(&fallback);
    assert_eq!(
        resolver.resolve(&json!({"slug": "hello-world"}), "photos"),
        vec![3]
    );
}

#[test]
fn numeric_string_record_identifier_is_accepted() {
    let mut store = InMemoryValueStore::new();
    store.set(7, "photos", json!([3]));
    let images = FixedImagePredicate::new([3]);

    let resolver = GalleryResolver::new(&store, &images);
    assert_eq!(resolver.resolve(&json!("7"), "photos"), vec![3]);
}

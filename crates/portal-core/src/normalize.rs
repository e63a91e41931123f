//! Compound document -> view record normalization.
//!
//! Output has exactly one record per primary resource, in server order.
//! Relationship misses resolve to placeholders; they never drop a record
//! and never fail the call.

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::defaults::{FIELD_AUTHOR, FIELD_IMAGE, FIELD_TAGS, UNKNOWN_AUTHOR, UNKNOWN_TAG};
use crate::error::Result;
use crate::jsonapi::{CompoundDocument, Resource};
use crate::models::ViewRecord;
use crate::resources::IncludedIndex;

/// Placeholder counts for one normalization pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Resolution {
    unknown_authors: usize,
    missing_images: usize,
    unknown_tags: usize,
    /// References present on an article but absent from `included`.
    dangling: usize,
}

/// Flatten a compound document into view records.
///
/// `image_base_url` is prepended verbatim to each file's `uri.url`.
pub fn normalize(document: &CompoundDocument, image_base_url: &str) -> Vec<ViewRecord> {
    let index = IncludedIndex::build(&document.included);
    let mut resolution = Resolution::default();

    let records: Vec<ViewRecord> = document
        .primary
        .iter()
        .map(|article| normalize_one(article, &index, image_base_url, &mut resolution))
        .collect();

    debug!(
        article_count = records.len(),
        included_count = document.included.len(),
        included_skipped = index.skipped(),
        unknown_authors = resolution.unknown_authors,
        missing_images = resolution.missing_images,
        unknown_tags = resolution.unknown_tags,
        "Normalized articles"
    );
    if resolution.dangling > 0 {
        warn!(
            dangling = resolution.dangling,
            "Document references resources missing from included"
        );
    }

    records
}

/// Decode a raw JSON value and normalize it in one step.
///
/// Fails only when the value is not a compound document.
pub fn normalize_value(value: Value, image_base_url: &str) -> Result<Vec<ViewRecord>> {
    let document = CompoundDocument::from_value(value)?;
    Ok(normalize(&document, image_base_url))
}

fn normalize_one(
    article: &Resource,
    index: &IncludedIndex,
    image_base_url: &str,
    resolution: &mut Resolution,
) -> ViewRecord {
    let title = article.attribute_str("title").unwrap_or_default().to_string();

    let author_name = match article.to_one(FIELD_AUTHOR) {
        Some(reference) => match index.user(&reference.id) {
            Some(user) => user.name.clone(),
            None => {
                resolution.dangling += 1;
                None
            }
        },
        None => None,
    }
    .unwrap_or_else(|| {
        resolution.unknown_authors += 1;
        UNKNOWN_AUTHOR.to_string()
    });

    let image_url = match article.to_one(FIELD_IMAGE) {
        Some(reference) => match index.file(&reference.id) {
            Some(file) => file.url.as_deref().map(|url| format!("{}{}", image_base_url, url)),
            None => {
                resolution.dangling += 1;
                None
            }
        },
        None => None,
    }
    .unwrap_or_else(|| {
        resolution.missing_images += 1;
        String::new()
    });

    let tags = article
        .to_many(FIELD_TAGS)
        .iter()
        .filter_map(|reference| match index.tag(&reference.id) {
            // A resolved but nameless term carries nothing to show.
            Some(tag) => tag.name.clone().filter(|name| !name.is_empty()),
            None => {
                resolution.dangling += 1;
                resolution.unknown_tags += 1;
                Some(UNKNOWN_TAG.to_string())
            }
        })
        .collect();

    trace!(article_id = %article.id, "Normalized article");

    ViewRecord {
        id: article.id.clone(),
        title,
        author_name,
        image_url,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonapi::{RelationshipData, ResourceIdentifier};
    use serde_json::json;

    const BASE: &str = "http://localhost:8080";

    fn article(id: &str, title: &str) -> Resource {
        Resource::new("node--article", id).with_attribute("title", json!(title))
    }

    fn one(kind: &str, id: &str) -> RelationshipData {
        RelationshipData::One(ResourceIdentifier::new(kind, id))
    }

    fn many(kind: &str, ids: &[&str]) -> RelationshipData {
        RelationshipData::Many(ids.iter().map(|id| ResourceIdentifier::new(kind, *id)).collect())
    }

    fn user(id: &str, name: &str) -> Resource {
        Resource::new("user--user", id).with_attribute("name", json!(name))
    }

    fn file(id: &str, url: &str) -> Resource {
        Resource::new("file--file", id).with_attribute("uri", json!({ "url": url }))
    }

    fn tag(id: &str, name: &str) -> Resource {
        Resource::new("taxonomy_term--tags", id).with_attribute("name", json!(name))
    }

    #[test]
    fn test_end_to_end_scenario() {
        let doc = CompoundDocument::new(
            vec![article("a1", "Hello")
                .with_relationship("field_author", one("user--user", "u1"))
                .with_relationship("field_image", one("file--file", "f1"))
                .with_relationship("field_tags", many("taxonomy_term--tags", &["t1", "t2"]))],
            vec![user("u1", "Alice"), file("f1", "/img/a.jpg"), tag("t1", "News")],
        );

        let records = normalize(&doc, BASE);

        assert_eq!(
            records,
            vec![ViewRecord {
                id: "a1".to_string(),
                title: "Hello".to_string(),
                author_name: "Alice".to_string(),
                image_url: "http://localhost:8080/img/a.jpg".to_string(),
                tags: vec!["News".to_string(), "Unknown Tag".to_string()],
            }]
        );
    }

    #[test]
    fn test_preserves_length_and_order() {
        let doc = CompoundDocument::new(
            vec![article("c", "Third"), article("a", "First"), article("b", "Second")],
            vec![],
        );
        let ids: Vec<String> = normalize(&doc, BASE).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_primary_yields_empty_output() {
        let doc = CompoundDocument::new(vec![], vec![user("u1", "Alice")]);
        assert!(normalize(&doc, BASE).is_empty());
    }

    #[test]
    fn test_missing_author_relationship_is_unknown() {
        let doc = CompoundDocument::new(vec![article("a1", "Hello")], vec![user("u1", "Alice")]);
        assert_eq!(normalize(&doc, BASE)[0].author_name, "Unknown");
    }

    #[test]
    fn test_dangling_author_is_unknown() {
        let doc = CompoundDocument::new(
            vec![article("a1", "Hello").with_relationship("field_author", one("user--user", "u9"))],
            vec![user("u1", "Alice")],
        );
        assert_eq!(normalize(&doc, BASE)[0].author_name, "Unknown");
    }

    #[test]
    fn test_author_lookup_ignores_other_types_with_same_id() {
        let doc = CompoundDocument::new(
            vec![article("a1", "Hello").with_relationship("field_author", one("user--user", "x"))],
            vec![tag("x", "Not a user")],
        );
        assert_eq!(normalize(&doc, BASE)[0].author_name, "Unknown");
    }

    #[test]
    fn test_image_url_joins_base() {
        let doc = CompoundDocument::new(
            vec![article("a1", "Hello").with_relationship("field_image", one("file--file", "f1"))],
            vec![file("f1", "/files/x.png")],
        );
        assert_eq!(
            normalize(&doc, "http://localhost:8080")[0].image_url,
            "http://localhost:8080/files/x.png"
        );
    }

    #[test]
    fn test_unresolved_image_is_empty() {
        let doc = CompoundDocument::new(
            vec![
                article("a1", "No relation"),
                article("a2", "Dangling").with_relationship("field_image", one("file--file", "f9")),
                article("a3", "No uri").with_relationship("field_image", one("file--file", "f3")),
            ],
            vec![Resource::new("file--file", "f3")],
        );
        let records = normalize(&doc, BASE);
        assert!(records.iter().all(|r| r.image_url.is_empty()));
    }

    #[test]
    fn test_tags_keep_order_and_placeholders() {
        let doc = CompoundDocument::new(
            vec![article("a1", "Hello").with_relationship(
                "field_tags",
                many("taxonomy_term--tags", &["t2", "missing", "t1"]),
            )],
            vec![tag("t1", "News"), tag("t2", "Sport")],
        );
        assert_eq!(
            normalize(&doc, BASE)[0].tags,
            vec!["Sport", "Unknown Tag", "News"]
        );
    }

    #[test]
    fn test_tags_are_not_deduplicated() {
        let doc = CompoundDocument::new(
            vec![article("a1", "Hello")
                .with_relationship("field_tags", many("taxonomy_term--tags", &["t1", "t1"]))],
            vec![tag("t1", "News")],
        );
        assert_eq!(normalize(&doc, BASE)[0].tags, vec!["News", "News"]);
    }

    #[test]
    fn test_nameless_tag_is_omitted() {
        let doc = CompoundDocument::new(
            vec![article("a1", "Hello").with_relationship(
                "field_tags",
                many("taxonomy_term--tags", &["t1", "t2", "t3"]),
            )],
            vec![
                tag("t1", "News"),
                Resource::new("taxonomy_term--tags", "t2"),
                tag("t3", ""),
            ],
        );
        assert_eq!(normalize(&doc, BASE)[0].tags, vec!["News"]);
    }

    #[test]
    fn test_absent_tags_is_empty() {
        let doc = CompoundDocument::new(vec![article("a1", "Hello")], vec![]);
        assert!(normalize(&doc, BASE)[0].tags.is_empty());
    }

    #[test]
    fn test_missing_title_is_empty() {
        let doc = CompoundDocument::new(
            vec![
                Resource::new("node--article", "a1"),
                Resource::new("node--article", "a2").with_attribute("title", json!(42)),
            ],
            vec![],
        );
        let records = normalize(&doc, BASE);
        assert_eq!(records[0].title, "");
        assert_eq!(records[1].title, "");
    }

    #[test]
    fn test_normalize_value_wire_document() {
        let records = normalize_value(
            json!({
                "jsonapi": {"version": "1.0"},
                "data": [{
                    "type": "node--article",
                    "id": "a1",
                    "attributes": {"title": "Hello", "status": true},
                    "relationships": {
                        "field_author": {"data": {"type": "user--user", "id": "u1"}},
                        "field_image": {"data": null},
                        "field_tags": {"data": []}
                    }
                }],
                "included": [
                    {"type": "user--user", "id": "u1", "attributes": {"name": "Alice"}}
                ]
            }),
            BASE,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author_name, "Alice");
        assert_eq!(records[0].image_url, "");
        assert!(records[0].tags.is_empty());
    }

    #[test]
    fn test_normalize_value_missing_included() {
        let records = normalize_value(
            json!({
                "data": [{
                    "type": "node--article",
                    "id": "a1",
                    "attributes": {"title": "Hello"},
                    "relationships": {
                        "field_author": {"data": {"type": "user--user", "id": "u1"}},
                        "field_tags": {"data": [{"type": "taxonomy_term--tags", "id": "t1"}]}
                    }
                }]
            }),
            BASE,
        )
        .unwrap();
        assert_eq!(records[0].author_name, "Unknown");
        assert_eq!(records[0].tags, vec!["Unknown Tag"]);
    }

    #[test]
    fn test_normalize_value_rejects_malformed() {
        assert!(normalize_value(json!("just a string"), BASE).is_err());
        assert!(normalize_value(
            json!({"data": [{"type": "node--article", "id": "a1"}]}),
            BASE
        )
        .is_err());
    }
}

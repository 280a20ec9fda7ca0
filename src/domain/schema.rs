// src/domain/schema.rs

use crate::domain::modification::{BrandImage, Modification};
use crate::domain::value::FieldValue;

/// One tracked field: how it is called in notifications, which key it uses in
/// the JSON documents, and how to read its value from a record.
pub struct FieldSpec {
    pub name: &'static str,
    pub key: &'static str,
    pub read: fn(&Modification) -> FieldValue,
}

/// Every tracked field in declaration order. Change records follow this order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "Id",
        key: "id",
        read: |m| m.id.into(),
    },
    FieldSpec {
        name: "Namespace",
        key: "namespace",
        read: |m| text(&m.namespace),
    },
    FieldSpec {
        name: "Name",
        key: "name",
        read: |m| text(&m.name),
    },
    FieldSpec {
        name: "Featured",
        key: "featured",
        read: |m| m.featured.into(),
    },
    FieldSpec {
        name: "Verified",
        key: "verified",
        read: |m| m.verified.into(),
    },
    FieldSpec {
        name: "Organization",
        key: "organization",
        read: |m| m.organization.into(),
    },
    FieldSpec {
        name: "Author",
        key: "author",
        read: |m| text(&m.author),
    },
    FieldSpec {
        name: "Downloads",
        key: "downloads",
        read: |m| m.downloads.into(),
    },
    FieldSpec {
        name: "DownloadString",
        key: "download_string",
        read: |m| text(&m.download_string),
    },
    FieldSpec {
        name: "ShortDescription",
        key: "short_description",
        read: |m| text(&m.short_description),
    },
    FieldSpec {
        name: "Rating",
        key: "rating",
        read: |m| {
            FieldValue::Structured(vec![
                ("count", m.rating.count.into()),
                ("rating", m.rating.rating.into()),
            ])
        },
    },
    FieldSpec {
        name: "Changelog",
        key: "changelog",
        read: |m| text(&m.changelog),
    },
    FieldSpec {
        name: "RequiredLabymodBuild",
        key: "required_labymod_build",
        read: |m| m.required_labymod_build.into(),
    },
    FieldSpec {
        name: "Releases",
        key: "releases",
        read: |m| m.releases.into(),
    },
    FieldSpec {
        name: "LastUpdate",
        key: "last_update",
        read: |m| m.last_update.into(),
    },
    FieldSpec {
        name: "Licence",
        key: "licence",
        read: |m| text(&m.licence),
    },
    FieldSpec {
        name: "VersionString",
        key: "version_string",
        read: |m| text(&m.version_string),
    },
    FieldSpec {
        name: "Meta",
        key: "meta",
        read: |m| texts(&m.meta),
    },
    FieldSpec {
        name: "Dependencies",
        key: "dependencies",
        read: |m| {
            FieldValue::List(m.dependencies.iter().cloned().map(FieldValue::Json).collect())
        },
    },
    FieldSpec {
        name: "Permissions",
        key: "permissions",
        read: |m| texts(&m.permissions),
    },
    FieldSpec {
        name: "SourceUrl",
        key: "source_url",
        read: |m| text(&m.source_url),
    },
    FieldSpec {
        name: "BrandImages",
        key: "brand_images",
        read: |m| FieldValue::List(m.brand_images.iter().map(brand_image).collect()),
    },
    FieldSpec {
        name: "Tags",
        key: "tags",
        read: |m| FieldValue::List(m.tags.iter().map(|t| FieldValue::Integer(*t)).collect()),
    },
];

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

fn texts(items: &[String]) -> FieldValue {
    FieldValue::List(items.iter().map(|s| text(s)).collect())
}

fn brand_image(image: &BrandImage) -> FieldValue {
    FieldValue::Structured(vec![("type", text(&image.kind)), ("hash", text(&image.hash))])
}

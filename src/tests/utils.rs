use crate::domain::modification::{BrandImage, Modification, Rating};
use proptest::prelude::*;
use serde_json::{json, Value};

/// A store document as the client-store API returns it.
pub fn sample_json() -> Value {
    json!({
        "id": 42,
        "namespace": "worldedit",
        "name": "WorldEdit",
        "featured": false,
        "verified": true,
        "organization": 7,
        "author": "FlintMC",
        "downloads": 100,
        "download_string": "100",
        "short_description": "In-game map editor",
        "rating": { "count": 12, "rating": 4.5 },
        "changelog": "Initial release",
        "required_labymod_build": 410,
        "releases": 3,
        "last_update": 1700000000,
        "licence": "MIT",
        "version_string": "1.2.0",
        "meta": ["client"],
        "dependencies": [{ "namespace": "core", "version": "1.0.0" }],
        "permissions": ["chat"],
        "source_url": "https://github.com/example/worldedit",
        "brand_images": [{ "type": "icon", "hash": "3f2a" }],
        "tags": [3, 8]
    })
}

/// The typed form of [`sample_json`].
pub fn sample_modification() -> Modification {
    Modification {
        id: 42,
        namespace: "worldedit".to_string(),
        name: "WorldEdit".to_string(),
        featured: false,
        verified: true,
        organization: 7,
        author: "FlintMC".to_string(),
        downloads: 100,
        download_string: "100".to_string(),
        short_description: "In-game map editor".to_string(),
        rating: Rating {
            count: 12,
            rating: 4.5,
        },
        changelog: "Initial release".to_string(),
        required_labymod_build: 410,
        releases: 3,
        last_update: 1700000000,
        licence: "MIT".to_string(),
        version_string: "1.2.0".to_string(),
        meta: vec!["client".to_string()],
        dependencies: vec![json!({ "namespace": "core", "version": "1.0.0" })],
        permissions: vec!["chat".to_string()],
        source_url: "https://github.com/example/worldedit".to_string(),
        brand_images: vec![BrandImage {
            kind: "icon".to_string(),
            hash: "3f2a".to_string(),
        }],
        tags: vec![3, 8],
    }
}

prop_compose! {
    /// Records drawn from a small value space, so two draws often agree on
    /// some fields and differ on others.
    pub fn arb_modification()(
        name in prop::sample::select(vec!["WorldEdit", "VoxelSniper"]),
        flags in (any::<bool>(), any::<bool>()),
        downloads in 0i64..3,
        rating in (0i64..3, 0u8..=50),
        changelog in prop_oneof![Just(String::new()), ".{0,24}"],
        meta in prop::collection::vec("[a-z]{1,6}", 0..3),
        dependencies in prop::collection::vec(("[a-z]{1,6}", 0u8..3), 0..3),
        brand_images in prop::collection::vec(("icon|banner", "[0-9a-f]{4}"), 0..3),
        tags in prop::collection::vec(0i64..4, 0..4)
    ) -> Modification {
        let mut modification = sample_modification();
        modification.name = name.to_string();
        modification.featured = flags.0;
        modification.verified = flags.1;
        modification.downloads = downloads;
        modification.download_string = downloads.to_string();
        modification.rating = Rating {
            count: rating.0,
            // Tenths keep the value exact through a JSON round trip.
            rating: f64::from(rating.1) / 10.0,
        };
        modification.changelog = changelog;
        modification.meta = meta;
        modification.dependencies = dependencies
            .into_iter()
            .map(|(namespace, major)| {
                json!({ "namespace": namespace, "version": format!("{major}.0.0") })
            })
            .collect();
        modification.brand_images = brand_images
            .into_iter()
            .map(|(kind, hash)| BrandImage { kind, hash })
            .collect();
        modification.tags = tags;
        modification
    }
}

use serde::{Deserialize, Serialize};

use crate::api::types::ImageId;

/// Image manifest describing every image a scene renders.
/// Scenes declare it in code; the page reads the JSON form, preloads the
/// files, and indexes them so an instance's image id picks the right one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageManifest {
    /// Ordered image list; an image's position in it is its ImageId.
    pub images: Vec<ImageEntry>,
}

/// Describes a single image asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Name scenes look the image up by (e.g. "avatar_left").
    pub name: String,
    /// Relative path to the file (e.g. "images/avatar-left.png").
    pub path: String,
}

impl ImageManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image, returning its id. Registering a name twice
    /// returns the existing id.
    pub fn add(&mut self, name: &str, path: &str) -> ImageId {
        if let Some(id) = self.image_id(name) {
            return id;
        }
        self.images.push(ImageEntry {
            name: name.to_string(),
            path: path.to_string(),
        });
        ImageId(self.images.len() as u32 - 1)
    }

    /// Look up an image by name.
    pub fn image_id(&self, name: &str) -> Option<ImageId> {
        self.images
            .iter()
            .position(|e| e.name == name)
            .map(|i| ImageId(i as u32))
    }

    /// Path for an id, if it exists.
    pub fn path(&self, id: ImageId) -> Option<&str> {
        self.images.get(id.0 as usize).map(|e| e.path.as_str())
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for handing to the page.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_sequential_ids() {
        let mut manifest = ImageManifest::new();
        assert_eq!(manifest.add("bg", "images/bg.png"), ImageId(0));
        assert_eq!(manifest.add("avatar", "images/avatar.png"), ImageId(1));
        assert_eq!(manifest.image_id("avatar"), Some(ImageId(1)));
        assert_eq!(manifest.image_id("missing"), None);
    }

    #[test]
    fn re_adding_a_name_returns_the_existing_id() {
        let mut manifest = ImageManifest::new();
        let first = manifest.add("book", "images/book.png");
        let second = manifest.add("book", "images/book.png");
        assert_eq!(first, second);
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn path_lookup() {
        let mut manifest = ImageManifest::new();
        let id = manifest.add("book", "images/book.png");
        assert_eq!(manifest.path(id), Some("images/book.png"));
        assert_eq!(manifest.path(ImageId(99)), None);
    }

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "images": [
                { "name": "bg", "path": "images/background.png" },
                { "name": "avatar_left", "path": "images/avatar-left.png" }
            ]
        }"#;
        let manifest = ImageManifest::from_json(json).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.image_id("avatar_left"), Some(ImageId(1)));
        assert_eq!(manifest.images[0].path, "images/background.png");
    }

    #[test]
    fn json_round_trip() {
        let mut manifest = ImageManifest::new();
        manifest.add("bg", "images/bg.png");

        let parsed = ImageManifest::from_json(&manifest.to_json()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.image_id("bg"), Some(ImageId(0)));
    }
}

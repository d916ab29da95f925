use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use thiserror::Error;

/// Collection shipped inside the binary.
pub const BUNDLED_COLLECTION: &str = include_str!("../data/albums.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub description: String,
    pub track1: String,
    pub track2: String,
    pub comment: String,
}

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("failed to read collection {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed collection")]
    Parse(#[from] serde_json::Error),
    #[error("collection contains no albums")]
    Empty,
    #[error("album id {0:?} appears more than once")]
    DuplicateId(String),
}

/// Albums plus the directory their relative cover/track paths resolve against.
#[derive(Debug, Clone)]
pub struct Collection {
    pub albums: Vec<Album>,
    pub base_dir: PathBuf,
}

impl Collection {
    pub fn bundled() -> Result<Self, CollectionError> {
        Self::parse(BUNDLED_COLLECTION, PathBuf::from("."))
    }

    pub fn load(path: &Path) -> Result<Self, CollectionError> {
        let text = fs::read_to_string(path).map_err(|source| CollectionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&text, base_dir)
    }

    pub fn parse(text: &str, base_dir: PathBuf) -> Result<Self, CollectionError> {
        let albums: Vec<Album> = serde_json::from_str(text)?;
        if albums.is_empty() {
            return Err(CollectionError::Empty);
        }

        let mut seen = HashSet::new();
        for album in &albums {
            if !seen.insert(album.id.as_str()) {
                return Err(CollectionError::DuplicateId(album.id.clone()));
            }
        }

        Ok(Self { albums, base_dir })
    }

    /// Resolves a cover or track reference. Remote URLs are returned untouched.
    pub fn resolve(&self, reference: &str) -> PathBuf {
        if is_remote(reference) {
            return PathBuf::from(reference);
        }
        let path = Path::new(reference.trim_start_matches('/'));
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album_json(id: &str) -> String {
        format!(
            r#"{{"id":"{id}","title":"T","artist":"A","cover":"covers/{id}.jpg","description":"D","track1":"tracks/{id}-1.mp3","track2":"tracks/{id}-2.mp3","comment":"C"}}"#
        )
    }

    #[test]
    fn bundled_collection_loads() {
        let collection = Collection::bundled().unwrap();
        assert!(!collection.albums.is_empty());
    }

    #[test]
    fn keeps_file_order() {
        let text = format!("[{},{}]", album_json("b"), album_json("a"));
        let collection = Collection::parse(&text, PathBuf::new()).unwrap();
        let ids: Vec<_> = collection.albums.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let text = format!("[{},{}]", album_json("a1"), album_json("a1"));
        let err = Collection::parse(&text, PathBuf::new()).unwrap_err();
        assert!(matches!(err, CollectionError::DuplicateId(id) if id == "a1"));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(matches!(Collection::parse("[]", PathBuf::new()), Err(CollectionError::Empty)));
        assert!(matches!(Collection::parse("{", PathBuf::new()), Err(CollectionError::Parse(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Collection::load(Path::new("/nonexistent/albums.json")).unwrap_err();
        assert!(matches!(err, CollectionError::Read { .. }));
    }

    #[test]
    fn resolves_relative_to_collection_dir() {
        let collection = Collection {
            albums: Vec::new(),
            base_dir: PathBuf::from("/music"),
        };
        assert_eq!(collection.resolve("/covers/a.jpg"), PathBuf::from("/music/covers/a.jpg"));
        assert_eq!(collection.resolve("covers/a.jpg"), PathBuf::from("/music/covers/a.jpg"));
        assert_eq!(
            collection.resolve("https://example.com/a.mp3"),
            PathBuf::from("https://example.com/a.mp3")
        );
    }
}

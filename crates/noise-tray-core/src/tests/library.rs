use crate::{CoreError, NoiseLibrary};

use std::fs;

use tempfile::TempDir;

/// WHAT: Discovery pairs artwork, derives names, and sorts the result
/// WHY: The menu shows these names and rotation order must be stable
#[test]
#[allow(clippy::unwrap_used)]
fn given_sounds_directory_when_discovering_then_noises_named_and_paired() {
    // Given: Two sounds, one with sibling artwork, plus an unrelated file
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rain.ogg"), b"audio").unwrap();
    fs::write(dir.path().join("rain.png"), b"image").unwrap();
    fs::write(dir.path().join("coffee_shop.ogg"), b"audio").unwrap();
    fs::write(dir.path().join("notes.txt"), b"text").unwrap();

    // When: Discovering the library
    let library = NoiseLibrary::discover(dir.path()).unwrap();

    // Then: Two noises, sorted by display name, artwork paired where present
    assert_eq!(library.len(), 2);
    let coffee = library.get(0).unwrap();
    assert_eq!(coffee.name, "Coffee Shop");
    assert_eq!(coffee.icon, None);
    let rain = library.get(1).unwrap();
    assert_eq!(rain.name, "Rain");
    assert_eq!(rain.icon, Some(dir.path().join("rain.png")));
}

/// WHAT: A missing directory is a LibraryUnavailable error
/// WHY: Callers fall back to the built-in set on a typed error
#[test]
fn given_missing_directory_when_discovering_then_library_unavailable() {
    // Given: A path that does not exist
    let missing = std::path::PathBuf::from("/nonexistent/sounds");

    // When: Discovering the library
    let result = NoiseLibrary::discover(&missing);

    // Then: Returns LibraryUnavailable
    assert!(matches!(result, Err(CoreError::LibraryUnavailable { .. })));
}

/// WHAT: A readable directory with no sounds is a LibraryEmpty error
/// WHY: An empty rotation would leave the indicator with nothing to show
#[test]
#[allow(clippy::unwrap_used)]
fn given_directory_without_sounds_when_discovering_then_library_empty() {
    // Given: A directory containing only non-audio files
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cover.png"), b"image").unwrap();

    // When: Discovering the library
    let result = NoiseLibrary::discover(dir.path());

    // Then: Returns LibraryEmpty
    assert!(matches!(result, Err(CoreError::LibraryEmpty { .. })));
}

/// WHAT: The built-in set is non-empty and ships no artwork
/// WHY: It is the last-resort fallback and must always be usable
#[test]
#[allow(clippy::unwrap_used)]
fn given_builtin_set_when_inspecting_then_named_noises_without_artwork() {
    // Given/When: The built-in library
    let library = NoiseLibrary::builtin();

    // Then: Non-empty, every noise named, none with artwork
    assert!(!library.is_empty());
    for index in 0..library.len() {
        let noise = library.get(index).unwrap();
        assert!(!noise.name.is_empty());
        assert_eq!(noise.icon, None);
    }
}

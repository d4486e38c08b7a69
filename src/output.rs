//! Saving the returned presentation to disk.

use {
    std::{
        fs::File,
        io::prelude::*,
        path::{
            Path,
            PathBuf
        }
    },
    lazy_static::lazy_static,
    log::info,
    regex::Regex,
    crate::util::Error
};

lazy_static! {
    static ref UNSAFE_FILENAME_CHARS: Regex = Regex::new("[^A-Za-z0-9 ._-]+").expect("failed to parse filename pattern");
}

/// Derives the saved file's name from the lesson topic. The topic is
/// untrusted text, so anything outside `[A-Za-z0-9 ._-]` collapses to an
/// underscore and leading/trailing dots and whitespace are stripped,
/// keeping path separators and dotfile prefixes out of the name.
pub fn presentation_filename(lesson_topic: &str) -> String {
    let safe = UNSAFE_FILENAME_CHARS.replace_all(lesson_topic, "_");
    let safe = safe.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if safe.is_empty() {
        format!("untitled_lesson.pptx")
    } else {
        format!("{}_lesson.pptx", safe)
    }
}

/// Writes the presentation bytes into `dir`, overwriting any previous file
/// of the same name, and returns the full path.
pub fn save(dir: &Path, lesson_topic: &str, body: &[u8]) -> Result<PathBuf, Error> {
    let path = dir.join(presentation_filename(lesson_topic));
    File::create(&path)?.write_all(body)?;
    info!("saved presentation to {}", path.display());
    Ok(path)
}

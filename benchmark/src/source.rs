//! @ai:module:intent Load benchmark source text from a file or a directory tree
//! @ai:module:layer infrastructure
//! @ai:module:public_api SourceLoader, SourceLoaderTrait, SourceText
//! @ai:module:stateless true

use anyhow::{bail, Context, Result};
use lexbench_lexeme::{classify, CategorySelection, TokenSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions picked up when the source is a directory.
pub const SOURCE_EXTENSIONS: &[&str] = &["java", "rs", "c", "h", "cpp", "js", "ts", "py", "txt"];

/// @ai:intent Concatenated source text and the files it came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    pub files: Vec<PathBuf>,
    pub text: String,
}

impl SourceText {
    /// @ai:intent Classify the loaded text into a token set
    /// @ai:effects pure
    pub fn classify(
        &self,
        selection: impl Into<CategorySelection>,
    ) -> crate::error::Result<TokenSet> {
        Ok(classify(&self.text, selection)?)
    }
}

/// @ai:intent Trait for loading benchmark source text
pub trait SourceLoaderTrait {
    /// @ai:intent Load one file, or every source file below a directory
    fn load(&self, path: &Path) -> Result<SourceText>;
}

/// @ai:intent Reads source files from disk
pub struct SourceLoader;

impl SourceLoader {
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Find all source files in a directory, sorted by path
    /// @ai:effects fs:read
    fn find_source_files(dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceLoaderTrait for SourceLoader {
    /// @ai:effects fs:read
    fn load(&self, path: &Path) -> Result<SourceText> {
        if path.is_file() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read source file: {}", path.display()))?;
            return Ok(SourceText {
                files: vec![path.to_path_buf()],
                text,
            });
        }

        if !path.is_dir() {
            bail!("Source path does not exist: {}", path.display());
        }

        let mut source = SourceText::default();
        for file in Self::find_source_files(path) {
            match std::fs::read_to_string(&file) {
                Ok(text) => {
                    source.text.push_str(&text);
                    source.text.push('\n');
                    source.files.push(file);
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable source file {}: {}", file.display(), e);
                }
            }
        }

        if source.files.is_empty() {
            bail!("No source files found under {}", path.display());
        }

        tracing::debug!(
            files = source.files.len(),
            bytes = source.text.len(),
            "Loaded source directory"
        );
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexbench_lexeme::LexemeCategory;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_load_single_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Main.java");
        std::fs::write(&path, "int x = 5;").unwrap();

        let source = SourceLoader::new().load(&path).unwrap();
        assert_eq!(source.files, vec![path]);
        assert_eq!(source.text, "int x = 5;");
    }

    #[test]
    fn test_load_directory_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.java"), "while").unwrap();
        std::fs::write(dir.path().join("nested/a.rs"), "for").unwrap();
        std::fs::write(dir.path().join("image.png"), "if").unwrap();

        let source = SourceLoader::new().load(dir.path()).unwrap();
        assert_eq!(source.files.len(), 2);
        assert!(source.files[0].ends_with("b.java"));
        assert!(source.files[1].ends_with("nested/a.rs"));

        let tokens = source.classify(LexemeCategory::Keyword).unwrap();
        let keywords: Vec<_> =
            tokens.get(LexemeCategory::Keyword).unwrap().iter().cloned().collect();
        assert_eq!(keywords, vec!["while".to_string(), "for".to_string()]);
    }

    #[test]
    fn test_missing_path_fails() {
        let err = SourceLoader::new().load(Path::new("/nonexistent/source")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_directory_without_sources_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.md"), "text").unwrap();
        assert!(SourceLoader::new().load(dir.path()).is_err());
    }

    #[test]
    fn test_empty_text_is_invalid_input() {
        let source = SourceText::default();
        assert!(matches!(
            source.classify(CategorySelection::All),
            Err(crate::error::Error::Lexeme(lexbench_lexeme::Error::InvalidInput(_)))
        ));
    }
}

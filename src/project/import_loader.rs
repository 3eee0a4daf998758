//! Import resolution and model merging.
//!
//! `import Name` resolves to `Name.<ext>` in the importing file's directory,
//! then in each search path in order. Every file is parsed at most once per
//! load: the `visited` set holds canonical paths, so cycles and diamonds are
//! harmless. An import that resolves nowhere is reported and skipped.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::LoadOptions;
use super::error::LoadError;
use super::file_loader::load_and_parse;
use crate::model::{Import, OntologyModel};
use crate::parser::SyntaxError;

/// Syntax errors of one loaded file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub errors: Vec<SyntaxError>,
}

/// An `import` that matched no file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedImport {
    pub name: SmolStr,
    /// File containing the import
    pub from: PathBuf,
    pub line: u32,
}

/// What a load touched, in the order files were parsed.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub files: Vec<FileReport>,
    pub unresolved: Vec<UnresolvedImport>,
}

impl ImportReport {
    /// Total syntax errors across all files, warnings included
    pub fn error_count(&self) -> usize {
        self.files.iter().map(|file| file.errors.len()).sum()
    }

    /// True if any file has an error of severity Error
    pub fn has_syntax_errors(&self) -> bool {
        self.files
            .iter()
            .flat_map(|file| &file.errors)
            .any(|error| error.severity.is_error())
    }
}

/// A root model with its imports merged in.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model: OntologyModel,
    pub report: ImportReport,
}

/// Follows `import` declarations from a root file.
#[derive(Debug, Clone, Default)]
pub struct ImportLoader {
    options: LoadOptions,
}

impl ImportLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Parse `path` and merge every file it transitively imports.
    ///
    /// The root file's own errors come first in the report.
    pub fn load(
        &self,
        path: &Path,
        visited: &mut FxHashSet<PathBuf>,
    ) -> Result<LoadedModel, LoadError> {
        let parsed = load_and_parse(path, &self.options)?;
        visited.insert(canonical(path)?);

        let mut model = parsed.parse.model;
        let mut report = ImportReport {
            files: vec![FileReport {
                path: parsed.path,
                errors: parsed.parse.errors,
            }],
            unresolved: Vec::new(),
        };

        let imports = model.imports.clone();
        self.walk(&imports, path, &mut model, visited, &mut report)?;
        Ok(LoadedModel { model, report })
    }

    /// Merge the imports of an already parsed `model` whose file is
    /// `source_path`.
    ///
    /// The report lists only the imported files, not `source_path` itself.
    pub fn merge_imports(
        &self,
        model: &mut OntologyModel,
        source_path: &Path,
        visited: &mut FxHashSet<PathBuf>,
    ) -> Result<ImportReport, LoadError> {
        visited.insert(canonical(source_path)?);
        let mut report = ImportReport::default();
        let imports = model.imports.clone();
        self.walk(&imports, source_path, model, visited, &mut report)?;
        Ok(report)
    }

    /// Find the file an import refers to
    pub fn resolve(&self, name: &str, from: &Path) -> Option<PathBuf> {
        let file_name = format!("{name}.{}", self.options.extension);
        let local = from.parent().map(|dir| dir.join(&file_name));
        local
            .into_iter()
            .chain(self.options.search_paths.iter().map(|dir| dir.join(&file_name)))
            .find(|candidate| candidate.is_file())
    }

    fn walk(
        &self,
        imports: &[Import],
        from: &Path,
        model: &mut OntologyModel,
        visited: &mut FxHashSet<PathBuf>,
        report: &mut ImportReport,
    ) -> Result<(), LoadError> {
        for import in imports {
            let Some(path) = self.resolve(&import.name, from) else {
                tracing::warn!(
                    import = %import.name,
                    from = %from.display(),
                    line = import.line,
                    "unresolved import"
                );
                report.unresolved.push(UnresolvedImport {
                    name: import.name.clone(),
                    from: from.to_path_buf(),
                    line: import.line,
                });
                continue;
            };

            if !visited.insert(canonical(&path)?) {
                tracing::debug!(path = %path.display(), "skipping already visited import");
                continue;
            }

            let parsed = load_and_parse(&path, &self.options)?;
            let child = parsed.parse.model;
            let child_imports = child.imports.clone();
            report.files.push(FileReport {
                path: parsed.path,
                errors: parsed.parse.errors,
            });
            model.merge(child);

            self.walk(&child_imports, &path, model, visited, report)?;
        }
        Ok(())
    }
}

fn canonical(path: &Path) -> Result<PathBuf, LoadError> {
    path.canonicalize()
        .map_err(|source| LoadError::io(path, source))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_merges_imported_declarations_after_root() {
        let temp = TempDir::new().unwrap();
        let root = write(
            temp.path(),
            "Root.tonto",
            "import Base\npackage Root\nrole Student specializes Person\n",
        );
        write(temp.path(), "Base.tonto", "package Base\nkind Person\n");

        let loaded = ImportLoader::default()
            .load(&root, &mut FxHashSet::default())
            .unwrap();

        let names: Vec<_> = loaded.model.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Student", "Person"]);
        assert_eq!(loaded.model.package.as_deref(), Some("Root"));
        assert_eq!(loaded.report.files.len(), 2);
        assert!(loaded.report.unresolved.is_empty());
    }

    #[test]
    fn test_cycle_parses_each_file_once() {
        let temp = TempDir::new().unwrap();
        let a = write(temp.path(), "A.tonto", "import B\npackage A\nkind Alpha\n");
        write(temp.path(), "B.tonto", "import A\npackage B\nkind Beta\n");

        let mut visited = FxHashSet::default();
        let loaded = ImportLoader::default().load(&a, &mut visited).unwrap();

        assert_eq!(loaded.report.files.len(), 2);
        assert_eq!(loaded.model.classes.len(), 2);
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_unresolved_import_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        let root = write(temp.path(), "Root.tonto", "import Missing\npackage Root\nkind Person\n");

        let loaded = ImportLoader::default()
            .load(&root, &mut FxHashSet::default())
            .unwrap();

        assert_eq!(loaded.model.classes.len(), 1);
        assert_eq!(
            loaded.report.unresolved,
            [UnresolvedImport {
                name: "Missing".into(),
                from: root.clone(),
                line: 1,
            }]
        );
    }

    #[test]
    fn test_search_paths_are_consulted_after_local_directory() {
        let temp = TempDir::new().unwrap();
        let lib = temp.path().join("lib");
        fs::create_dir(&lib).unwrap();
        write(&lib, "Shared.tonto", "package Shared\nkind Thing\n");
        let root = write(temp.path(), "Root.tonto", "import Shared\npackage Root\n");

        let without = ImportLoader::default()
            .load(&root, &mut FxHashSet::default())
            .unwrap();
        assert_eq!(without.report.unresolved.len(), 1);

        let loader = ImportLoader::new(LoadOptions::default().with_search_path(&lib));
        let with = loader.load(&root, &mut FxHashSet::default()).unwrap();
        assert!(with.report.unresolved.is_empty());
        assert!(with.model.class("Thing").is_some());
    }

    #[test]
    fn test_merge_imports_reports_only_imported_files() {
        let temp = TempDir::new().unwrap();
        let root = write(temp.path(), "Root.tonto", "import Base\npackage Root\n");
        write(temp.path(), "Base.tonto", "package Base\nkind Person {\n");

        let mut model = crate::parser::parse(&fs::read_to_string(&root).unwrap()).model;
        let report = ImportLoader::default()
            .merge_imports(&mut model, &root, &mut FxHashSet::default())
            .unwrap();

        assert_eq!(report.files.len(), 1);
        assert!(report.files[0].path.ends_with("Base.tonto"));
        assert!(report.has_syntax_errors());
        assert!(model.class("Person").is_some());
    }

    #[test]
    fn test_missing_root_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result =
            ImportLoader::default().load(&temp.path().join("Nope.tonto"), &mut FxHashSet::default());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}

use std::path::{Path, PathBuf};

/// Name of the maintained project, as it appears inside the rewritten files.
pub const PROJECT_NAME: &str = "ChanSim";

/// Registry of the files rewritten by a version bump.
///
/// The mapping from logical target to concrete path is fixed; only the root
/// directory it is resolved against can move (see the `--root` flag).
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at the maintained project's top directory.
    pub fn new(root: &Path) -> Self {
        ProjectLayout {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the C++ source files.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// Directory holding the C++ header files.
    pub fn header_dir(&self) -> PathBuf {
        self.root.join("include")
    }

    /// Shared tools directory, contributing both source and header files.
    pub fn tools_dir(&self) -> PathBuf {
        self.root.join("tools")
    }

    /// CMake build descriptor with the `project(... VERSION ...)` declaration.
    pub fn build_descriptor(&self) -> PathBuf {
        self.root.join("CMakeLists.txt")
    }

    /// Header defining the integer version constants.
    pub fn meta_header(&self) -> PathBuf {
        self.header_dir().join("meta.h")
    }

    /// Doxygen configuration carrying `PROJECT_NUMBER`.
    pub fn doxygen_config(&self) -> PathBuf {
        self.root.join("misc").join("Doxyfile")
    }

    /// Citation metadata with `version:` and `date-released:` fields.
    pub fn citation_file(&self) -> PathBuf {
        self.root.join("CITATION.cff")
    }

    /// Readme quoting the project's console output.
    pub fn readme(&self) -> PathBuf {
        self.root.join("README.md")
    }

    /// LaTeX class file for simulation reports.
    pub fn tex_class(&self) -> PathBuf {
        self.header_dir()
            .join("chansim")
            .join("tex")
            .join("simreport.cls")
    }

    /// VS Code settings carrying the Doxygen comment-generator version tag.
    pub fn editor_settings(&self) -> PathBuf {
        self.root.join(".vscode").join("settings.json")
    }

    /// Every fixed-path rewrite target, labeled for display.
    pub fn targets(&self) -> Vec<(&'static str, PathBuf)> {
        vec![
            ("build descriptor", self.build_descriptor()),
            ("version header", self.meta_header()),
            ("doxygen config", self.doxygen_config()),
            ("citation file", self.citation_file()),
            ("readme", self.readme()),
            ("latex class", self.tex_class()),
            ("editor settings", self.editor_settings()),
        ]
    }
}

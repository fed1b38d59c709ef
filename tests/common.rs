//! Shared fixture helpers for version-bump integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Relative paths of every fixed rewrite target in the fixture tree.
pub const FIXED_TARGETS: &[&str] = &[
    "CMakeLists.txt",
    "include/meta.h",
    "misc/Doxyfile",
    "CITATION.cff",
    "README.md",
    "include/chansim/tex/simreport.cls",
    ".vscode/settings.json",
];

/// Relative paths of the comment-tagged source and header files.
pub const TAGGED_FILES: &[&str] = &[
    "src/main.cpp",
    "src/export/calc.cpp",
    "include/read.h",
    "tools/maintain/maintain.cpp",
    "tools/log/log.h",
];

/// Write a complete maintained-project tree embedding `version` in every
/// documented pattern and `date` (YYYY-MM-DD) as the embedded release date.
pub fn write_project_tree(root: &Path, version: &str, date: &str) {
    let parts: Vec<&str> = version.split('.').collect();
    assert_eq!(parts.len(), 3, "fixture version must be three-part");

    let doc = |name: &str| format!("/**\n * @file {}\n * @version {}\n */\n", name, version);

    write(&root.join("src/main.cpp"), &doc("main.cpp"));
    write(&root.join("src/export/calc.cpp"), &doc("calc.cpp"));
    write(&root.join("include/read.h"), &doc("read.h"));
    write(
        &root.join("tools/maintain/maintain.cpp"),
        &doc("maintain.cpp"),
    );
    write(&root.join("tools/log/log.h"), &doc("log.h"));

    write(
        &root.join("CMakeLists.txt"),
        &format!(
            "cmake_minimum_required(VERSION 3.16)\nproject(ChanSim VERSION {})\n",
            version
        ),
    );

    write(
        &root.join("include/meta.h"),
        &format!(
            "{}const int _CHANSIM_VER_MAJOR = {};\n\
             const int _CHANSIM_VER_MINOR = {};\n\
             const int _CHANSIM_VER_REVISION = {};\n",
            doc("meta.h"),
            parts[0],
            parts[1],
            parts[2]
        ),
    );

    write(
        &root.join("misc/Doxyfile"),
        &format!(
            "PROJECT_NAME           = \"ChanSim\"\nPROJECT_NUMBER         = {}\n",
            version
        ),
    );

    write(
        &root.join("CITATION.cff"),
        &format!(
            "cff-version: 1.2.0\ntitle: ChanSim\nversion: {}\ndate-released: {}\n",
            version, date
        ),
    );

    write(
        &root.join("README.md"),
        &format!(
            "# ChanSim\n\n```console\n$ chansim --version\nChanSim {}\n```\n",
            version
        ),
    );

    write(
        &root.join("include/chansim/tex/simreport.cls"),
        &format!(
            "% Version: {}\n\
             \\ProvidesExplClass{{simreport}}{{{}}}{{{}}}{{Simulation Report}}\n\
             \\str_const:Nn \\c__simreport_chansim_ver_str {{ {} }}\n",
            version,
            date.replace('-', "/"),
            version,
            version
        ),
    );

    write(
        &root.join(".vscode/settings.json"),
        &format!(
            "{{\n    \"doxdocgen.file.versionTag\": \"@version {}\"\n}}\n",
            version
        ),
    );
}

/// Read a file under `root` to a string.
pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

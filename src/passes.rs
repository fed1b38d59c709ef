//! Substitution passes over the maintained project's files.
//!
//! Each pass owns one target category: it reads the file(s), applies the
//! hard-coded literal or regex substitutions, and writes the content back.
//! Passes are independent of each other and run sequentially; the first
//! filesystem error aborts the remaining passes with no rollback.

use chrono::NaiveDate;
use regex::Regex;

use crate::discover::find_files;
use crate::error::Result;
use crate::layout::{ProjectLayout, PROJECT_NAME};
use crate::rewrite::{regex_replace_in_file, replace_in_file};
use crate::version::Version;

const DATE_RELEASED_PATTERN: &str = r"date-released: \d{4}-\d{2}-\d{2}";
const CLASS_DECLARATION_PATTERN: &str =
    r"ProvidesExplClass\{simreport\}\{\d{4}/\d{2}/\d{2}\}\{[0-9.]+\}\{Simulation Report\}";
const CLASS_DATE_PATTERN: &str = r"ProvidesExplClass\{simreport\}\{\d{4}/\d{2}/\d{2}\}";
const CLASS_VERSION_CONSTANT_PATTERN: &str = r"c__simreport_chansim_ver_str \{ [0-9.]+ \}";

/// Update the `* @version` comment tag in every source and header file.
///
/// Source files are the `.cpp` files under the source and tools directories;
/// header files are the `.h` files under the include and tools directories.
pub fn update_comment_version_tags(
    layout: &ProjectLayout,
    from: &Version,
    to: &Version,
) -> Result<()> {
    let mut files = find_files(&layout.source_dir(), ".cpp");
    files.extend(find_files(&layout.tools_dir(), ".cpp"));
    files.extend(find_files(&layout.header_dir(), ".h"));
    files.extend(find_files(&layout.tools_dir(), ".h"));

    let replacements = [(
        format!("* @version {}", from),
        format!("* @version {}", to),
    )];
    for file in files {
        replace_in_file(&file, &replacements)?;
    }
    Ok(())
}

/// Update the `project(... VERSION ...)` declaration in the build descriptor.
pub fn update_build_descriptor(
    layout: &ProjectLayout,
    from: &Version,
    to: &Version,
) -> Result<()> {
    replace_in_file(
        &layout.build_descriptor(),
        &[(
            format!("project({} VERSION {})", PROJECT_NAME, from),
            format!("project({} VERSION {})", PROJECT_NAME, to),
        )],
    )
}

/// Update the three integer version constants in the metadata header.
///
/// Each component is replaced independently, so a component that did not
/// change between the two versions is left as-is.
pub fn update_meta_header(layout: &ProjectLayout, from: &Version, to: &Version) -> Result<()> {
    replace_in_file(
        &layout.meta_header(),
        &[
            (
                format!("_CHANSIM_VER_MAJOR = {}", from.major),
                format!("_CHANSIM_VER_MAJOR = {}", to.major),
            ),
            (
                format!("_CHANSIM_VER_MINOR = {}", from.minor),
                format!("_CHANSIM_VER_MINOR = {}", to.minor),
            ),
            (
                format!("_CHANSIM_VER_REVISION = {}", from.revision),
                format!("_CHANSIM_VER_REVISION = {}", to.revision),
            ),
        ],
    )
}

/// Update `PROJECT_NUMBER` in the Doxygen configuration.
///
/// The column alignment is part of the literal, so the spacing must match
/// the configuration file exactly.
pub fn update_doxygen_config(layout: &ProjectLayout, from: &Version, to: &Version) -> Result<()> {
    replace_in_file(
        &layout.doxygen_config(),
        &[(
            format!("PROJECT_NUMBER         = {}", from),
            format!("PROJECT_NUMBER         = {}", to),
        )],
    )
}

/// Update the citation file's `version:` field and refresh `date-released:`.
///
/// The date rewrite matches any prior date, so it fires on every bump.
pub fn update_citation(
    layout: &ProjectLayout,
    from: &Version,
    to: &Version,
    today: NaiveDate,
) -> Result<()> {
    replace_in_file(
        &layout.citation_file(),
        &[(format!("version: {}", from), format!("version: {}", to))],
    )?;

    let date_released = Regex::new(DATE_RELEASED_PATTERN)?;
    regex_replace_in_file(
        &layout.citation_file(),
        &[(
            date_released,
            format!("date-released: {}", today.format("%Y-%m-%d")),
        )],
    )
}

/// Update the version quoted in the readme's example console output.
pub fn update_readme(layout: &ProjectLayout, from: &Version, to: &Version) -> Result<()> {
    replace_in_file(
        &layout.readme(),
        &[(
            format!("{} {}", PROJECT_NAME, from),
            format!("{} {}", PROJECT_NAME, to),
        )],
    )
}

/// Update the LaTeX class file's three version-bearing fragments.
///
/// The class declaration embeds a date next to the version, so both are
/// rewritten together; the string constant and the plain `Version:` line are
/// replaced independently.
pub fn update_tex_class(
    layout: &ProjectLayout,
    from: &Version,
    to: &Version,
    today: NaiveDate,
) -> Result<()> {
    let declaration = Regex::new(CLASS_DECLARATION_PATTERN)?;
    let version_constant = Regex::new(CLASS_VERSION_CONSTANT_PATTERN)?;
    regex_replace_in_file(
        &layout.tex_class(),
        &[
            (
                declaration,
                format!(
                    "ProvidesExplClass{{simreport}}{{{}}}{{{}}}{{Simulation Report}}",
                    today.format("%Y/%m/%d"),
                    to
                ),
            ),
            (
                version_constant,
                format!("c__simreport_chansim_ver_str {{ {} }}", to),
            ),
        ],
    )?;

    replace_in_file(
        &layout.tex_class(),
        &[(format!("Version: {}", from), format!("Version: {}", to))],
    )
}

/// Update the Doxygen comment-generator version tag in the editor settings.
pub fn update_editor_settings(layout: &ProjectLayout, from: &Version, to: &Version) -> Result<()> {
    replace_in_file(
        &layout.editor_settings(),
        &[(
            format!("\"doxdocgen.file.versionTag\": \"@version {}\"", from),
            format!("\"doxdocgen.file.versionTag\": \"@version {}\"", to),
        )],
    )
}

/// Run every version substitution pass in sequence.
pub fn run_version_bump(
    layout: &ProjectLayout,
    from: &Version,
    to: &Version,
    today: NaiveDate,
) -> Result<()> {
    update_comment_version_tags(layout, from, to)?;
    update_build_descriptor(layout, from, to)?;
    update_meta_header(layout, from, to)?;
    update_doxygen_config(layout, from, to)?;
    update_citation(layout, from, to, today)?;
    update_readme(layout, from, to)?;
    update_tex_class(layout, from, to, today)?;
    update_editor_settings(layout, from, to)?;
    Ok(())
}

/// Refresh the embedded release dates, leaving version numbers untouched.
///
/// Only the citation file's `date-released:` field and the class
/// declaration's date argument are rewritten; the version arguments sit
/// outside both patterns.
pub fn refresh_dates(layout: &ProjectLayout, today: NaiveDate) -> Result<()> {
    let date_released = Regex::new(DATE_RELEASED_PATTERN)?;
    regex_replace_in_file(
        &layout.citation_file(),
        &[(
            date_released,
            format!("date-released: {}", today.format("%Y-%m-%d")),
        )],
    )?;

    let class_date = Regex::new(CLASS_DATE_PATTERN)?;
    regex_replace_in_file(
        &layout.tex_class(),
        &[(
            class_date,
            format!(
                "ProvidesExplClass{{simreport}}{{{}}}",
                today.format("%Y/%m/%d")
            ),
        )],
    )
}

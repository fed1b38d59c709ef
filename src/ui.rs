//! Terminal output helpers.
//!
//! Pure formatting functions; no user interaction. Styling degrades to plain
//! text when stdout is not a terminal.

use console::style;

use crate::layout::ProjectLayout;

/// Format and print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the hard-coded rewrite targets of a version bump.
///
/// Lists the fixed-path files first, then the directories walked for
/// comment-tagged source and header files.
pub fn display_targets(layout: &ProjectLayout) {
    println!("{}", style("Files rewritten by a version bump:").bold());
    for (name, path) in layout.targets() {
        println!("  {:<18} {}", name, path.display());
    }
    println!("{}", style("Comment-tagged files:").bold());
    println!(
        "  {:<18} {}",
        "source files",
        layout.source_dir().join("**/*.cpp").display()
    );
    println!(
        "  {:<18} {}",
        "header files",
        layout.header_dir().join("**/*.h").display()
    );
    println!(
        "  {:<18} {}",
        "tool files",
        layout.tools_dir().join("**/*.{cpp,h}").display()
    );
}

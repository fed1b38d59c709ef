use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use version_bump::error::BumpError;
use version_bump::layout::{ProjectLayout, PROJECT_NAME};
use version_bump::version::Version;
use version_bump::{passes, ui};

#[derive(clap::Parser)]
#[command(
    name = "version_bump",
    version,
    about = "Bump the ChanSim release version across the project tree"
)]
struct Args {
    #[arg(short, long, help = "Version number to replace")]
    from: Option<String>,

    #[arg(short, long, help = "Replacement version number")]
    to: Option<String>,

    #[arg(short, long, help = "Only refresh embedded release dates")]
    date: bool,

    #[arg(
        long,
        default_value = ".",
        help = "Root directory of the maintained project"
    )]
    root: PathBuf,

    #[arg(long, help = "Show the rewrite targets and exit")]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let layout = ProjectLayout::new(&args.root);

    if args.list {
        ui::display_targets(&layout);
        return Ok(());
    }

    let today = Local::now().date_naive();

    if args.date {
        ui::display_status(&format!(
            "Refreshing {} release dates to {}",
            PROJECT_NAME,
            today.format("%Y-%m-%d")
        ));
        passes::refresh_dates(&layout, today)?;
    } else {
        // Validate before any file is touched
        let (from, to) = match bump_arguments(&args) {
            Ok(pair) => pair,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        };

        ui::display_status(&format!(
            "Bumping {} version from {} to {}",
            PROJECT_NAME, from, to
        ));
        passes::run_version_bump(&layout, &from, &to, today)?;
    }

    ui::display_success("Done.");
    Ok(())
}

/// Parse and validate the version-bump arguments.
///
/// Both `--from` and `--to` must be present, must parse as three-part
/// numeric versions, and must differ.
fn bump_arguments(args: &Args) -> version_bump::Result<(Version, Version)> {
    let from = args
        .from
        .as_deref()
        .ok_or_else(|| BumpError::arguments("Please specify --from and --to version numbers"))?;
    let to = args
        .to
        .as_deref()
        .ok_or_else(|| BumpError::arguments("Please specify --from and --to version numbers"))?;

    let from = Version::parse(from)?;
    let to = Version::parse(to)?;

    if from == to {
        return Err(BumpError::arguments(
            "From and To version numbers should be different",
        ));
    }

    Ok((from, to))
}

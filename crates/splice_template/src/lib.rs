// crates/splice_template/src/lib.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::{Builder, Env};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use splice_markers::processor::{splice_file_with_processor, FileSplicer, SpliceRequest};

/// Overrides the target file when `--file` is not given.
pub const TARGET_ENV: &str = "SPLICE_TARGET_FILE";

/// Builds the command-line interface. Every argument is optional; without
/// any the built-in edit-modal patch is applied to the default template.
pub fn build_cli() -> Command {
    Command::new("splice_template")
        .version("0.1.0")
        .about("Replaces the text between two literal markers in a template file")
        .arg(
            Arg::new("file")
                .long("file")
                .num_args(1)
                .help("Template file to edit"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .num_args(1)
                .help("Literal marker that opens the replaced span"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .num_args(1)
                .help("Literal marker that closes the replaced span (kept in the output)"),
        )
        .arg(
            Arg::new("replacement")
                .long("replacement")
                .num_args(1)
                .conflicts_with("replacement_file")
                .help("Replacement text"),
        )
        .arg(
            Arg::new("replacement_file")
                .long("replacement-file")
                .num_args(1)
                .help("Read the replacement text from a file"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print the spliced document instead of writing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

/// Runtime configuration resolved from CLI flags, the environment and the
/// built-in patch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpliceConfig {
    pub target: PathBuf,
    pub start_marker: String,
    pub end_marker: String,
    pub replacement: String,
    pub dry_run: bool,
    pub verbose: bool,
}

impl SpliceConfig {
    /// `env_target` is the value of `SPLICE_TARGET_FILE`, if set.
    pub fn from_matches(matches: &ArgMatches, env_target: Option<String>) -> Result<Self> {
        let target = matches
            .get_one::<String>("file")
            .cloned()
            .or(env_target)
            .unwrap_or_else(|| edit_modal_patch::DEFAULT_TARGET.to_string());

        let replacement = if let Some(text) = matches.get_one::<String>("replacement") {
            text.clone()
        } else if let Some(path) = matches.get_one::<String>("replacement_file") {
            fs::read_to_string(path)
                .with_context(|| format!("Error reading replacement file {}", path))?
        } else {
            edit_modal_patch::REPLACEMENT.to_string()
        };

        Ok(SpliceConfig {
            target: PathBuf::from(target),
            start_marker: string_or(matches, "start", edit_modal_patch::START_MARKER),
            end_marker: string_or(matches, "end", edit_modal_patch::END_MARKER),
            replacement,
            dry_run: matches.get_flag("dry_run"),
            verbose: matches.get_flag("verbose"),
        })
    }

    pub fn request(&self) -> SpliceRequest<'_> {
        SpliceRequest {
            start_marker: &self.start_marker,
            end_marker: &self.end_marker,
            replacement: &self.replacement,
            dry_run: self.dry_run,
        }
    }
}

fn string_or(matches: &ArgMatches, id: &str, default: &str) -> String {
    matches
        .get_one::<String>(id)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Sets up `env_logger`. `RUST_LOG` wins; otherwise warnings only, or
/// debug output with `--verbose`.
pub fn init_logging(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_log_filter(verbose)));
    // A logger may already be installed when running under tests.
    let _ = builder.try_init();
}

/// Applies the configured splice. Dry runs print the new document to `out`;
/// real runs print `done` once the file has been replaced.
pub fn run<W: Write>(config: &SpliceConfig, splicer: &dyn FileSplicer, out: &mut W) -> Result<()> {
    debug!("splice configuration: {:?}", config);
    let outcome = splice_file_with_processor(splicer, &config.target, &config.request())
        .with_context(|| format!("Failed to splice {}", config.target.display()))?;

    if let Some(preview) = outcome.preview {
        out.write_all(preview.as_bytes())?;
    } else {
        writeln!(out, "done")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use splice_markers::processor::DefaultFileSplicer;
    use splice_markers::SpliceError;
    use tempfile::tempdir;

    fn config_from(args: &[&str], env_target: Option<&str>) -> SpliceConfig {
        let matches = build_cli()
            .try_get_matches_from(std::iter::once("splice_template").chain(args.iter().copied()))
            .unwrap();
        SpliceConfig::from_matches(&matches, env_target.map(str::to_string)).unwrap()
    }

    #[test]
    fn test_verbose_only_changes_default_filter() {
        assert_eq!(default_log_filter(false), "warn");
        assert_eq!(default_log_filter(true), "debug");
    }

    #[test]
    fn test_defaults_use_builtin_patch() {
        let config = config_from(&[], None);
        assert_eq!(config.target, PathBuf::from(edit_modal_patch::DEFAULT_TARGET));
        assert_eq!(config.start_marker, edit_modal_patch::START_MARKER);
        assert_eq!(config.end_marker, edit_modal_patch::END_MARKER);
        assert_eq!(config.replacement, edit_modal_patch::REPLACEMENT);
        assert!(!config.dry_run);
        assert!(!config.verbose);
    }

    #[test]
    fn test_env_target_used_without_file_flag() {
        let config = config_from(&[], Some("other.ejs"));
        assert_eq!(config.target, PathBuf::from("other.ejs"));
    }

    #[test]
    fn test_file_flag_beats_env_target() {
        let config = config_from(&["--file", "flag.ejs"], Some("env.ejs"));
        assert_eq!(config.target, PathBuf::from("flag.ejs"));
    }

    #[test]
    fn test_replacement_file_is_read() {
        let dir = tempdir().unwrap();
        let block = dir.path().join("block.txt");
        fs::write(&block, "<<S>>from file").unwrap();

        let config = config_from(&["--replacement-file", block.to_str().unwrap()], None);
        assert_eq!(config.replacement, "<<S>>from file");
    }

    #[test]
    fn test_missing_replacement_file_is_an_error() {
        let matches = build_cli()
            .try_get_matches_from(["splice_template", "--replacement-file", "nope.txt"])
            .unwrap();
        let err = SpliceConfig::from_matches(&matches, None).unwrap_err();
        assert!(err.to_string().contains("Error reading replacement file nope.txt"));
    }

    #[test]
    fn test_replacement_flags_conflict() {
        let result = build_cli().try_get_matches_from([
            "splice_template",
            "--replacement",
            "a",
            "--replacement-file",
            "b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_writes_and_confirms() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("panel.ejs");
        fs::write(&target, "AAA<<START>>body<<END>>ZZZ").unwrap();

        let config = config_from(
            &[
                "--file",
                target.to_str().unwrap(),
                "--start",
                "<<START>>",
                "--end",
                "<<END>>",
                "--replacement",
                "<<START>>NEW",
            ],
            None,
        );
        let mut out = Vec::new();
        run(&config, &DefaultFileSplicer, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "done\n");
        assert_eq!(fs::read_to_string(&target).unwrap(), "AAA<<START>>NEW<<END>>ZZZ");
    }

    #[test]
    fn test_run_dry_run_prints_preview() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("panel.ejs");
        fs::write(&target, "AAA<<START>>body<<END>>ZZZ").unwrap();

        let config = config_from(
            &[
                "--file",
                target.to_str().unwrap(),
                "--start",
                "<<START>>",
                "--end",
                "<<END>>",
                "--replacement",
                "",
                "--dry-run",
            ],
            None,
        );
        let mut out = Vec::new();
        run(&config, &DefaultFileSplicer, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "AAA<<END>>ZZZ");
        assert_eq!(fs::read_to_string(&target).unwrap(), "AAA<<START>>body<<END>>ZZZ");
    }

    #[test]
    fn test_run_surfaces_marker_not_found() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("panel.ejs");
        fs::write(&target, "no markers here").unwrap();

        let config = config_from(&["--file", target.to_str().unwrap()], None);
        let mut out = Vec::new();
        let err = run(&config, &DefaultFileSplicer, &mut out).unwrap_err();

        assert!(err.downcast_ref::<SpliceError>().is_some());
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&target).unwrap(), "no markers here");
    }
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relkit::utils::changelog::read_changelog;
use relkit::utils::docs::{sort_glossary_file, sync_file_version};
use relkit::{
    CommandBook, CommitRange, GitOps, LicenseUpdater, ManualWriter, Packager, ReleaseGate,
    RelkitConfig, build_draft, checksum_files, extract_manifest_version, read_manifest_name,
    read_manifest_version, validate_changelog_content,
};
use std::path::{Path, PathBuf};

/// version used by `sync-docs` when the manifest declares none
const FALLBACK_DOCS_VERSION: &str = "1.0.0";

#[derive(Parser)]
#[command(name = "relkit")]
#[command(version, about = "release tooling for Rust command-line projects", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// path to the repository (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    path: PathBuf,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// print 1 if the manifest version is newer than the latest release tag, else 0
    Evalver,

    /// validate the top changelog entry for a version and print its notes
    Notes {
        /// version the release is being cut for (e.g., 1.2.0)
        #[arg(value_name = "VERSION")]
        release: String,
    },

    /// write a changelog draft from commits since the latest release tag
    Clgen {
        /// print commits being skipped (no known prefix)
        #[arg(short, long)]
        verbose: bool,

        /// draft file to write (defaults to the configured draft file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// start the draft with a "## <version> (<date>)" header
        #[arg(long)]
        title: bool,
    },

    /// print the sha256 checksum of each file
    Sum {
        /// files to checksum
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// print the glossary page sorted by term
    SortGloss {
        /// glossary file (defaults to the configured glossary file)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// add or update the license header on every rust source file
    License {
        /// directory to scan (defaults to the configured source root)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// replace the version placeholder in a documentation page
    SyncDocs {
        /// markdown file to update
        file: PathBuf,
    },

    /// write markdown manuals and rust help/manual constants from the commands file
    Mansync,

    /// stage the release binary and license under target/<name>/ and zip them
    Pack {
        /// platform name appended to the archive (e.g., x86_64-linux)
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RelkitConfig::load_or_default(&cli.path).context("failed to load configuration")?;

    match cli.command {
        Commands::Evalver => handle_evalver(&cli.path, &cli.format, &config)?,
        Commands::Notes { release } => handle_notes(&cli.path, &cli.format, &config, &release)?,
        Commands::Clgen {
            verbose,
            output,
            title,
        } => handle_clgen(&cli.path, &cli.format, &config, verbose, output, title)?,
        Commands::Sum { files } => handle_sum(&cli.format, &files)?,
        Commands::SortGloss { file } => {
            let file = file.unwrap_or_else(|| cli.path.join(&config.docs.glossary_file));
            let sorted = sort_glossary_file(&file)
                .with_context(|| format!("failed to sort glossary {}", file.display()))?;
            print!("{}", sorted);
        }
        Commands::License { root } => handle_license(&cli.path, &cli.format, &config, root)?,
        Commands::SyncDocs { file } => handle_sync_docs(&cli.path, &config, &file)?,
        Commands::Mansync => handle_mansync(&cli.path, &cli.format, &config)?,
        Commands::Pack { target } => handle_pack(&cli.path, &cli.format, &config, &target)?,
    }

    Ok(())
}

fn handle_evalver(path: &Path, format: &OutputFormat, config: &RelkitConfig) -> Result<()> {
    let manifest_path = path.join(&config.docs.manifest_file);
    let manifest_version =
        read_manifest_version(&manifest_path).context("failed to read crate version")?;

    // no repository means nothing has been released yet
    let tags = match GitOps::list_tags(path) {
        Ok(tags) => tags,
        Err(e) => {
            eprintln!("info: no release tags available ({})", e);
            Vec::new()
        }
    };
    let gate = ReleaseGate::evaluate(&manifest_version, &tags)
        .context("manifest version is not a release version")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&gate)?);
        }
        OutputFormat::Human => {
            match gate.previous {
                Some(previous) => eprintln!(
                    "info: requested {} against released {}",
                    gate.requested, previous
                ),
                None => eprintln!(
                    "info: requested {} with no prior release tag",
                    gate.requested
                ),
            }
            println!("{}", gate.as_flag());
        }
    }

    Ok(())
}

fn handle_notes(
    path: &Path,
    format: &OutputFormat,
    config: &RelkitConfig,
    version: &str,
) -> Result<()> {
    let changelog_path = path.join(&config.changelog.changelog_file_name);
    let content = read_changelog(&changelog_path).context("failed to read changelog")?;

    let notes = match validate_changelog_content(&content, version) {
        Ok(notes) => notes,
        Err(e) if e.is_validation_failure() => {
            eprintln!("error: {}", e);
            anyhow::bail!("changelog validation failed for version {}", version);
        }
        Err(e) => return Err(e).context("failed to read changelog entry"),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        OutputFormat::Human => {
            println!("{}", notes.body);
        }
    }

    Ok(())
}

fn handle_clgen(
    path: &Path,
    format: &OutputFormat,
    config: &RelkitConfig,
    verbose: bool,
    output: Option<PathBuf>,
    title: bool,
) -> Result<()> {
    let latest = GitOps::latest_release_tag(path).context("failed to list git tags")?;
    let range = CommitRange::since_tag(latest.map(|(tag, _)| tag));

    let subjects = GitOps::commit_subjects(path, &range)
        .context("no commits found in the repository")?;

    let mut draft = build_draft(&subjects, &config.changelog);

    if title {
        let manifest_path = path.join(&config.docs.manifest_file);
        let version =
            read_manifest_version(&manifest_path).context("failed to read crate version")?;
        let date = chrono::Local::now().format("%Y-%m-%d");
        draft = draft.with_title(format!("## {} ({})", version, date));
    }

    if verbose {
        for subject in &draft.skipped {
            eprintln!("warning: skipping '{}'", subject);
        }
    }

    let output = output.unwrap_or_else(|| path.join(&config.changelog.draft_file_name));
    std::fs::write(&output, draft.render())
        .with_context(|| format!("failed to write changelog draft {}", output.display()))?;

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "output": output,
                "range": range,
                "entries": draft.entry_count(),
                "skipped": draft.skipped.len(),
                "sections": draft.sections,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            println!("info: changelog written to: {}", output.display());
        }
    }

    Ok(())
}

fn handle_sum(format: &OutputFormat, files: &[PathBuf]) -> Result<()> {
    let sums = checksum_files(files).context("failed to compute checksums")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sums)?);
        }
        OutputFormat::Human => {
            for sum in sums {
                println!("{}", sum);
            }
        }
    }

    Ok(())
}

fn handle_license(
    path: &Path,
    format: &OutputFormat,
    config: &RelkitConfig,
    root: Option<PathBuf>,
) -> Result<()> {
    let header = config
        .docs
        .license_header
        .as_deref()
        .context("no license_header configured in [docs] of relkit.toml")?;
    let previous = config.docs.previous_license_header.as_deref().unwrap_or("");

    let root = root.unwrap_or_else(|| path.join(&config.docs.source_root));
    let report = LicenseUpdater::new(header, previous)
        .run(&root)
        .with_context(|| format!("failed to update license headers in {}", root.display()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("info: found {} source files", report.files);
            println!("info: kept {} with latest license header", report.latest);
            println!("info: updated {} to latest license header", report.updated);
            println!("info: fixed {} with latest license header", report.missing);
        }
    }

    Ok(())
}

fn handle_sync_docs(path: &Path, config: &RelkitConfig, file: &Path) -> Result<()> {
    let manifest_path = path.join(&config.docs.manifest_file);
    let manifest = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read manifest {}", manifest_path.display()))?;

    let version = match extract_manifest_version(manifest.lines()) {
        Some(version) => version,
        None => {
            eprintln!(
                "warning: no crate version in {}, using {}",
                manifest_path.display(),
                FALLBACK_DOCS_VERSION
            );
            FALLBACK_DOCS_VERSION.to_string()
        }
    };

    sync_file_version(file, &config.docs.version_placeholder, &version)
        .context("failed to insert version number")?;

    Ok(())
}

fn handle_mansync(path: &Path, format: &OutputFormat, config: &RelkitConfig) -> Result<()> {
    let program = match &config.mansync.program {
        Some(program) => program.clone(),
        None => read_manifest_name(path.join(&config.docs.manifest_file))
            .context("failed to read program name")?,
    };

    let commands_file = path.join(&config.mansync.commands_file);
    let book = CommandBook::load(&commands_file, &program)
        .with_context(|| format!("failed to load {}", commands_file.display()))?;

    let writer = ManualWriter::new(
        path.join(&config.mansync.markdown_dir),
        path.join(&config.mansync.manual_dir),
        path.join(&config.mansync.help_dir),
    )
    .header(config.docs.license_header.clone().unwrap_or_default());
    let report = writer.run(&book).context("failed to write command documentation")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for page in &report.written {
                println!("info: documentation written to: {}", page.display());
            }
            println!(
                "info: documentation score: {} / {}",
                report.written.len(),
                report.expected
            );
        }
    }

    Ok(())
}

fn handle_pack(
    path: &Path,
    format: &OutputFormat,
    config: &RelkitConfig,
    target: &str,
) -> Result<()> {
    let name = match &config.pack.name {
        Some(name) => name.clone(),
        None => read_manifest_name(path.join(&config.docs.manifest_file))
            .context("failed to read package name")?,
    };

    let report = Packager::new(path, name, target)
        .release_dir(path.join(&config.pack.release_dir))
        .files(config.pack.files.clone())
        .run()
        .context("failed to package release")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for entry in &report.entries {
                println!("info: packed {}", entry);
            }
            println!("info: archive written to: {}", report.archive.display());
        }
    }

    Ok(())
}

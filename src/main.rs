use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use db2asa::convert::Converter;
use db2asa::diagnostics::TracingDiagnostics;
use db2asa::options::{Options, Prefixes};
use db2asa::output::ProjectFiles;

/// Converts a DragonBones project into akashic-animation assets.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// DragonBones project file (`*.json`).
    project_file: PathBuf,

    /// Output directory.
    #[arg(short, long, default_value = "./")]
    out_dir: PathBuf,

    /// Add the standard prefixes (`pj_,bn_,sk_,an_`) to file names.
    #[arg(short = 'p', long)]
    add_prefix: bool,

    /// Add the armature name to animation names.
    #[arg(short, long)]
    long_name: bool,

    /// Output frame events as user data curves.
    #[arg(short, long)]
    user_data: bool,

    /// Output resource combination info.
    #[arg(short, long)]
    combination_info: bool,

    /// Output related file info.
    #[arg(short, long)]
    related_file_info: bool,

    /// Prefixes for project, bone set, skin and animation files.
    #[arg(short = 'P', long, value_name = "PJ,BN,SK,AN")]
    set_prefix: Option<Prefixes>,

    /// Print progress.
    #[arg(short, long)]
    verbose: bool,

    /// Read options from a RON file. Flags given on the command line are
    /// added on top.
    #[arg(long, value_name = "RON")]
    config: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> anyhow::Result<Options> {
        let mut options = match &self.config {
            Some(path) => db2asa::io::read_options(path)?,
            None => Options::default(),
        };
        options.asaan_long_name |= self.long_name;
        options.output_user_data |= self.user_data;
        options.output_combo_info |= self.combination_info;
        options.output_related_file_info |= self.related_file_info;
        options.verbose |= self.verbose;
        if let Some(prefixes) = &self.set_prefix {
            options.prefixes = prefixes.clone();
        } else if self.add_prefix {
            options.prefixes = Prefixes::standard();
        }
        Ok(options)
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "db2asa=debug" } else { "db2asa=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = cli.options()?;
    init_tracing(options.verbose);

    let input = db2asa::io::load_input(&cli.project_file)?;
    let converter = Converter::with_diagnostics(options, TracingDiagnostics);
    let project = converter
        .convert(&input)
        .with_context(|| format!("failed to convert {}", cli.project_file.display()))?;

    let options = converter.options();
    let files = ProjectFiles::build(&project, &options.prefixes, options.output_related_file_info)
        .context("failed to render output files")?;
    db2asa::io::write_files(&cli.out_dir, &files)?;
    Ok(())
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jobspeed",
    version,
    about = "Resume text parsing and job-application form auto-fill tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse extracted resume text into a structured record.
    Parse(ParseArgs),
    /// Map detected page form fields onto the cached resume record.
    Fill(FillArgs),
    /// Report on the cached record and run manifests.
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Raw resume text produced by the upstream file-format extractor.
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, default_value = ".cache/jobspeed")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub record_path: Option<PathBuf>,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FillArgs {
    /// Form-field descriptors exported by the page-side detector.
    #[arg(long)]
    pub fields: PathBuf,

    #[arg(long, default_value = ".cache/jobspeed")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub record_path: Option<PathBuf>,

    #[arg(long)]
    pub output_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = ".cache/jobspeed")]
    pub cache_root: PathBuf,
}

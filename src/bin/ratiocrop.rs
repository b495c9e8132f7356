use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use ratiocrop::{
    ArtifactSink as _, CropConfig, DirectorySink, FocalPoint, RasterSource, RatioCatalog,
    SheetRenderer,
};

#[derive(Parser, Debug)]
#[command(name = "ratiocrop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crop one image to a single aspect ratio.
    Crop(CropArgs),
    /// Render a labeled contact sheet comparing several ratios.
    Sheet(SheetArgs),
    /// List the built-in preset ratios.
    Presets,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Input image (JPEG, PNG or WebP).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Horizontal focal point, percent from the left edge.
    #[arg(long, default_value_t = 50.0)]
    focal_x: f64,

    /// Vertical focal point, percent from the top edge.
    #[arg(long, default_value_t = 50.0)]
    focal_y: f64,

    /// Directory the PNG is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Optional JSON config overriding tolerances and sheet styling.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CropArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Target ratio as `W:H`.
    #[arg(long)]
    ratio: String,
}

#[derive(Args, Debug)]
struct SheetArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Ratio to include as `W:H`; repeatable.
    #[arg(long)]
    ratio: Vec<String>,

    /// Preset to include, by its `W:H` (e.g. `4:5`); repeatable. With no ratios and no
    /// presets every preset is used.
    #[arg(long)]
    preset: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Crop(args) => cmd_crop(args).await,
        Command::Sheet(args) => cmd_sheet(args).await,
        Command::Presets => cmd_presets(),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<CropConfig> {
    match path {
        Some(p) => Ok(CropConfig::from_path(p)?),
        None => {
            let cfg = CropConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}

fn original_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("input path '{}' has no file name", path.display()))
}

async fn open_source(
    args: &SourceArgs,
    cfg: &CropConfig,
) -> anyhow::Result<(Arc<dyn RasterSource>, FocalPoint, String)> {
    let focal = FocalPoint::new(args.focal_x, args.focal_y)?;
    let name = original_name(&args.in_path)?;
    let img = ratiocrop::load_image(&args.in_path, cfg.max_source_bytes).await?;
    Ok((Arc::new(img), focal, name))
}

async fn cmd_crop(args: CropArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.source.config.as_deref())?;
    let catalog = RatioCatalog::with_tolerance(cfg.ratio_tolerance, cfg.max_denominator);
    let ratio = ratiocrop::parse_ratio(&args.ratio)?;
    let label = catalog.label_for(ratio.value());

    let (source, focal, name) = open_source(&args.source, &cfg).await?;
    let artifact = ratiocrop::export_crop(source, &ratio, &label, focal, &name).await?;

    let path = DirectorySink::new(&args.source.out_dir).put(artifact)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

async fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.source.config.as_deref())?;
    let catalog = build_selection(&cfg, &args.preset, &args.ratio)?;
    let requests = catalog.selected_requests()?;

    let renderer = Arc::new(SheetRenderer::new(cfg.sheet.clone())?);
    let (source, focal, name) = open_source(&args.source, &cfg).await?;
    let artifact = ratiocrop::export_sheet(source, requests, focal, &name, renderer).await?;

    let path = DirectorySink::new(&args.source.out_dir).put(artifact)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

/// Presets first, then explicit ratios; a ratio equal to a preset selects that preset.
fn build_selection(
    cfg: &CropConfig,
    presets: &[String],
    ratios: &[String],
) -> anyhow::Result<RatioCatalog> {
    let mut catalog = RatioCatalog::with_tolerance(cfg.ratio_tolerance, cfg.max_denominator);
    let tol = cfg.ratio_tolerance;

    for p in presets {
        let value = ratiocrop::parse_ratio(p)?.value();
        let known = catalog
            .presets()
            .iter()
            .any(|r| ratiocrop::ratios_equal(r.value(), value, tol));
        if !known {
            anyhow::bail!("'{p}' is not a preset ratio (see `ratiocrop presets`)");
        }
        if !catalog.is_selected(value) {
            catalog.toggle(value)?;
        }
    }

    for r in ratios {
        let value = ratiocrop::parse_ratio(r)?.value();
        if catalog.is_selected(value) {
            continue;
        }
        let is_preset = catalog
            .presets()
            .iter()
            .any(|p| ratiocrop::ratios_equal(p.value(), value, tol));
        if is_preset {
            catalog.toggle(value)?;
        } else {
            catalog.add_custom(r)?;
        }
    }

    if catalog.selected().is_empty() {
        let all: Vec<f64> = catalog.presets().iter().map(|r| r.value()).collect();
        for value in all {
            catalog.toggle(value)?;
        }
    }
    Ok(catalog)
}

fn cmd_presets() -> anyhow::Result<()> {
    for &(label, value) in ratiocrop::PRESET_RATIOS {
        println!("{label}\t{}", ratiocrop::format_ratio(value));
    }
    Ok(())
}

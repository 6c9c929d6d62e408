use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

use colorcurve::{
    ChannelRows, CurveSpec, RasterSettings, ShapeFamily, collab::service::name_options,
};

#[derive(Parser, Debug)]
#[command(name = "colorcurve", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a random record.
    Random(RandomArgs),
    /// Assemble a record from a request JSON.
    Spec(SpecArgs),
    /// Rasterize a record (or bare `curve_json`) to a PNG.
    Preview(PreviewArgs),
    /// Compute the grayscale row integral, or an integral image from sampled rows.
    Integral(IntegralArgs),
    /// Reshape a record's `curve_json` into the engine import layout.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct RandomArgs {
    /// Output record JSON.
    #[arg(long)]
    out: PathBuf,

    /// Seed for reproducible curves.
    #[arg(long)]
    seed: Option<u64>,

    /// Use one shape family for all channels.
    #[arg(long)]
    family: Option<ShapeFamily>,

    /// Also write a request descriptor next to the record.
    #[arg(long, conflicts_with = "family")]
    catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SpecArgs {
    /// Request JSON with the flat `*_float_curve_type` / `*_scale` keys.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output record JSON.
    #[arg(long)]
    out: PathBuf,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Record JSON or bare `curve_json`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = colorcurve::config::DEFAULT_TEXTURE_SIZE)]
    width: u32,

    #[arg(long, default_value_t = colorcurve::config::DEFAULT_TEXTURE_SIZE)]
    height: u32,

    /// Skip the checkerboard matte.
    #[arg(long)]
    transparent: bool,

    /// Write gradient statistics as JSON.
    #[arg(long)]
    stats: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct IntegralArgs {
    /// Record JSON, bare `curve_json`, or (with `--rows`) sampled channel rows.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long, default_value_t = 128)]
    width: usize,

    /// Treat the input as `{r_curve, g_curve, b_curve, a_curve}` and emit an integral image.
    #[arg(long)]
    rows: bool,

    /// Height of the integral image (with `--rows`).
    #[arg(long, default_value_t = 128, requires = "rows")]
    height: usize,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Record JSON or bare `curve_json`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Random(args) => cmd_random(args),
        Command::Spec(args) => cmd_spec(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Integral(args) => cmd_integral(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn read_json_value(path: &Path) -> anyhow::Result<serde_json::Value> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse JSON '{}'", path.display()))
}

/// Accept either a full record or its `curve_json` payload.
fn curve_json_of(doc: serde_json::Value) -> serde_json::Value {
    match doc {
        serde_json::Value::Object(mut map) if map.contains_key("curve_json") => {
            map.remove("curve_json").unwrap_or_default()
        }
        other => other,
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize JSON")?;
    write_output(path, text.as_bytes())
}

fn cmd_random(args: RandomArgs) -> anyhow::Result<()> {
    let mut rng = make_rng(args.seed);
    if let Some(catalog_path) = &args.catalog {
        let entry = colorcurve::assemble_catalog_entry(&mut rng)?;
        write_json(catalog_path, &entry.spec)?;
        return write_json(&args.out, &entry.record);
    }
    let record = colorcurve::assemble_random_with(args.family, &mut rng)?;
    write_json(&args.out, &record)
}

fn cmd_spec(args: SpecArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read request '{}'", args.in_path.display()))?;
    let spec = CurveSpec::from_json_str(&text).context("parse request")?;
    for (label, raw) in [
        ("R", &spec.r_float_curve_type),
        ("G", &spec.g_float_curve_type),
        ("B", &spec.b_float_curve_type),
        ("A", &spec.a_float_curve_type),
    ] {
        if let Some(raw) = raw.as_deref().filter(|r| r.parse::<ShapeFamily>().is_err()) {
            tracing::warn!(channel = label, family = raw, "unknown shape family, using PARABOLIC");
        }
    }

    let mut rng = make_rng(args.seed);
    let mut appended: Vec<(uuid::Uuid, String)> = Vec::new();
    let record = colorcurve::assemble_from_spec(&spec, &mut rng, &mut appended)?;
    for (id, name) in &appended {
        let options = name_options(Some(name));
        tracing::info!(%id, ?options, "record metadata");
    }
    write_json(&args.out, &record)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let curve_json = curve_json_of(read_json_value(&args.in_path)?);
    let settings = RasterSettings {
        width: args.width,
        height: args.height,
        transparent_background: args.transparent,
    };
    let preview = colorcurve::rasterize_json(&curve_json, &settings)
        .with_context(|| format!("'{}' has no complete R/G/B/A curves", args.in_path.display()))?;

    write_output(&args.out, &preview.encode_png()?)?;
    if let Some(stats_path) = &args.stats {
        write_json(stats_path, &preview.stats)?;
    }
    Ok(())
}

fn cmd_integral(args: IntegralArgs) -> anyhow::Result<()> {
    let doc = read_json_value(&args.in_path)?;
    let out = if args.rows {
        let rows: ChannelRows = serde_json::from_value(doc).context("parse channel rows")?;
        let image = colorcurve::compute_integral_image(&rows, args.width, args.height)
            .context("channel rows are missing or shorter than --width")?;
        serde_json::to_value(image)?
    } else {
        let row = colorcurve::compute_row_integral_json(&curve_json_of(doc), args.width)
            .with_context(|| format!("'{}' has no complete R/G/B/A curves", args.in_path.display()))?;
        serde_json::to_value(row)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let curve_json = curve_json_of(read_json_value(&args.in_path)?);
    let exported = colorcurve::convert_to_engine_json(&curve_json.to_string())?;
    match &args.out {
        Some(path) => write_output(path, exported.as_bytes()),
        None => {
            println!("{exported}");
            Ok(())
        }
    }
}

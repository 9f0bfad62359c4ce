use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_dither::{ChannelOrder, DitherMethod, Ditherer, Palette, ParsedPalette};
use sprite_forge::models::AppConfig;
use sprite_forge::services::{
    convert_565_dir, convert_565_file, dither_file, output_path_for_565, output_path_for_dither,
};

#[derive(Parser)]
#[command(name = "sprite-forge")]
#[command(about = "Sprite Forge - palette dithering and RGB565 conversion for SPI displays")]
struct Cli {
    /// YAML config file (defaults to $SPRITE_FORGE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a PNG to a palette with dithering
    Dither {
        /// Input PNG file
        input: PathBuf,

        /// Palette file (one hex color per line)
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Output PNG file (default: <input>_dithered.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dithering method: floyd (diffusion) or ordered (bayer)
        #[arg(short, long)]
        method: Option<DitherMethod>,
    },
    /// Convert a PNG (or a directory of PNGs) to raw 16-bit pixels
    Rgb565 {
        /// Input PNG file, or a directory with --batch
        input: PathBuf,

        /// Output file (default: <input>.rgb565 or <input>.bgr565)
        output: Option<PathBuf>,

        /// Put blue in the high bits (BGR565)
        #[arg(long)]
        bgr: bool,

        /// Write transparent pixels as magenta 0xF81F instead of black
        #[arg(long)]
        color_key: bool,

        /// Convert every PNG in the input directory
        #[arg(long)]
        batch: bool,
    },
    /// Show the colors a palette file resolves to
    Palette {
        /// Palette file (default: from config, else the built-in palette)
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sprite_forge=info,palette_dither=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Commands::Dither {
            input,
            palette,
            output,
            method,
        } => run_dither_command(&config, &input, palette, output, method),
        Commands::Rgb565 {
            input,
            output,
            bgr,
            color_key,
            batch,
        } => run_rgb565_command(&config, &input, output, bgr, color_key, batch),
        Commands::Palette { file } => run_palette_command(&config, file),
    }
}

/// Resolve the palette from the command line, then config, then the default.
fn resolve_palette(config: &AppConfig, cli_palette: Option<PathBuf>) -> anyhow::Result<ParsedPalette> {
    match cli_palette.or_else(|| config.palette.clone()) {
        Some(path) => Palette::load(&path)
            .with_context(|| format!("Failed to load palette {}", path.display())),
        None => {
            tracing::info!("Using default 16-color palette");
            Ok(ParsedPalette {
                palette: Palette::default_palette(),
                malformed: Vec::new(),
                used_default: true,
            })
        }
    }
}

fn run_dither_command(
    config: &AppConfig,
    input: &Path,
    palette: Option<PathBuf>,
    output: Option<PathBuf>,
    method: Option<DitherMethod>,
) -> anyhow::Result<()> {
    anyhow::ensure!(input.exists(), "Input file not found: {}", input.display());

    let parsed = resolve_palette(config, palette)?;
    let output = output.unwrap_or_else(|| output_path_for_dither(input));
    let method = method.unwrap_or(config.method);

    let every = config.progress_rows;
    let ditherer = Ditherer::new(parsed.palette)
        .method(method)
        .on_progress(move |done, total| {
            if every > 0 && (done % every == 0 || done == total) {
                tracing::info!("Processing: {done}/{total} rows");
            }
        });

    dither_file(input, &output, &ditherer)
        .with_context(|| format!("Failed to dither {}", input.display()))?;

    println!("Saved: {}", output.display());
    Ok(())
}

fn run_rgb565_command(
    config: &AppConfig,
    input: &Path,
    output: Option<PathBuf>,
    bgr: bool,
    color_key: bool,
    batch: bool,
) -> anyhow::Result<()> {
    let order = if bgr {
        ChannelOrder::Bgr
    } else {
        config.channel_order
    };
    let alpha = config.alpha_mode(color_key);

    if batch {
        if output.is_some() {
            tracing::warn!("Output path is ignored with --batch");
        }
        let report = convert_565_dir(input, order, alpha)
            .with_context(|| format!("Failed to convert directory {}", input.display()))?;
        for (path, reason) in &report.failed {
            eprintln!("Error converting {}: {reason}", path.display());
        }
        println!("Batch conversion complete: {} files", report.converted.len());
        return Ok(());
    }

    anyhow::ensure!(input.exists(), "File not found: {}", input.display());
    let output = output.unwrap_or_else(|| output_path_for_565(input, order));
    let written = convert_565_file(input, &output, order, alpha)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!("Saved {} as {order} ({written} bytes)", output.display());
    Ok(())
}

fn run_palette_command(config: &AppConfig, file: Option<PathBuf>) -> anyhow::Result<()> {
    let parsed = resolve_palette(config, file)?;

    for line in &parsed.malformed {
        println!(
            "Skipped line {}: {:?} ({})",
            line.line_number, line.content, line.error
        );
    }
    if parsed.used_default {
        println!("Palette: default ({} colors)", parsed.palette.len());
    } else {
        println!("Palette: {} colors", parsed.palette.len());
    }
    for (i, color) in parsed.palette.colors().iter().enumerate() {
        println!("  {i:2}  {color}");
    }
    Ok(())
}

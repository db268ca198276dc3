use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use halo::{add_shadow, add_sharp_border, io, round_corners, Rgba};

#[derive(Parser, Debug)]
#[command(name = "halo", version, about = "Decorate transparent rasters without clipping them")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Round the outer corners on an enlarged canvas.
    Round(RoundArgs),
    /// Draw a sharp border around the alpha silhouette.
    Border(BorderArgs),
    /// Cast a soft drop shadow behind the subject.
    Shadow(ShadowArgs),
}

#[derive(Args, Debug)]
struct RoundArgs {
    /// Input raster (any decodable format; coerced to RGBA).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = "rounded.png")]
    out: PathBuf,

    /// Corner radius in pixels.
    #[arg(long, default_value_t = 20)]
    radius: u32,

    /// Color behind the rounded corners, as R,G,B,A.
    #[arg(long, value_parser = parse_rgba, default_value = "0,0,0,0")]
    background: Rgba,
}

#[derive(Args, Debug)]
struct BorderArgs {
    /// Input raster (any decodable format; coerced to RGBA).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = "bordered.png")]
    out: PathBuf,

    /// Border color, as R,G,B,A.
    #[arg(long, value_parser = parse_rgba, default_value = "0,0,0,255")]
    color: Rgba,

    /// How many pixels outward the border extends.
    #[arg(long, default_value_t = 5)]
    width: u32,
}

#[derive(Args, Debug)]
struct ShadowArgs {
    /// Input raster (any decodable format; coerced to RGBA).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = "shadowed.png")]
    out: PathBuf,

    /// Shadow color, as R,G,B,A.
    #[arg(long, value_parser = parse_rgba, default_value = "0,0,0,100")]
    color: Rgba,

    /// Horizontal shadow offset (positive = right).
    #[arg(long, default_value_t = 5)]
    dx: i32,

    /// Vertical shadow offset (positive = down).
    #[arg(long, default_value_t = 5)]
    dy: i32,

    /// Gaussian blur radius for the shadow softness.
    #[arg(long, default_value_t = 10.0)]
    sigma: f32,

    /// Additional transparent margin on every side.
    #[arg(long, default_value_t = 0)]
    extra_padding: u32,
}

fn parse_rgba(s: &str) -> Result<Rgba, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!("expected R,G,B,A, got '{s}'"));
    }

    let mut color = [0u8; 4];
    for (slot, part) in color.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid channel value '{part}'"))?;
    }
    Ok(color)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Round(args) => cmd_round(args),
        Command::Border(args) => cmd_border(args),
        Command::Shadow(args) => cmd_shadow(args),
    }
}

fn cmd_round(args: RoundArgs) -> anyhow::Result<()> {
    let image = io::load_rgba(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let out = round_corners(image.view(), args.radius, args.background);
    io::save_png(&args.out, out.view()).with_context(|| format!("write '{}'", args.out.display()))
}

fn cmd_border(args: BorderArgs) -> anyhow::Result<()> {
    let image = io::load_rgba(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let out = add_sharp_border(image.view(), args.color, args.width);
    io::save_png(&args.out, out.view()).with_context(|| format!("write '{}'", args.out.display()))
}

fn cmd_shadow(args: ShadowArgs) -> anyhow::Result<()> {
    let image = io::load_rgba(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let out = add_shadow(
        image.view(),
        args.color,
        (args.dx, args.dy),
        args.sigma,
        args.extra_padding,
    )?;
    io::save_png(&args.out, out.view()).with_context(|| format!("write '{}'", args.out.display()))
}

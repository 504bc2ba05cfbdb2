use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "typegif", version, about = "Render text as a typing animation GIF")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full animation as a GIF.
    Render(RenderArgs),
    /// Render a single frame of the animation as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output GIF path.
    #[arg(long, default_value = "out.gif")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Frame index (0-based; frame 0 is the blank page).
    #[arg(long)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Text to type.
    #[arg(long, default_value = "")]
    text: String,

    /// JSON config file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file (TrueType/OpenType).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in pixels.
    #[arg(long)]
    font_size: Option<u32>,

    /// Frame width in pixels.
    #[arg(long)]
    width: Option<u16>,

    /// Maximum text area height in pixels.
    #[arg(long)]
    height: Option<u16>,

    /// Lines per page.
    #[arg(long)]
    lines: Option<usize>,

    /// Delay per frame in 1/100 s.
    #[arg(long)]
    delay: Option<u16>,

    /// Top margin in pixels (negative values clamp to 0).
    #[arg(long, allow_negative_numbers = true)]
    margin_top: Option<i32>,
    /// Bottom margin in pixels.
    #[arg(long, allow_negative_numbers = true)]
    margin_bottom: Option<i32>,
    /// Left margin in pixels.
    #[arg(long, allow_negative_numbers = true)]
    margin_left: Option<i32>,
    /// Right margin in pixels.
    #[arg(long, allow_negative_numbers = true)]
    margin_right: Option<i32>,

    /// Keep punctuation spacing exactly as given.
    #[arg(long)]
    no_normalize_punctuation: bool,
}

impl CommonArgs {
    fn to_config(&self) -> anyhow::Result<typegif::TyperConfig> {
        let mut cfg = match &self.config {
            Some(path) => typegif::TyperConfig::load(path)?,
            None => typegif::TyperConfig::default(),
        };
        if let Some(font) = &self.font {
            cfg.font_path = font.clone();
        }
        if let Some(v) = self.font_size {
            cfg.font_size = v;
        }
        if let Some(v) = self.width {
            cfg.frame_width = v;
        }
        if let Some(v) = self.height {
            cfg.frame_height = v;
        }
        if let Some(v) = self.lines {
            cfg.max_lines = v;
        }
        if let Some(v) = self.delay {
            cfg.delay = v;
        }
        let m = cfg.margins;
        let signed = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        cfg.margins = typegif::Margins::clamped(
            self.margin_top.unwrap_or(signed(m.top)),
            self.margin_bottom.unwrap_or(signed(m.bottom)),
            self.margin_left.unwrap_or(signed(m.left)),
            self.margin_right.unwrap_or(signed(m.right)),
        );
        if self.no_normalize_punctuation {
            cfg.normalize_punctuation = false;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let text_given = match &cli.cmd {
        Some(Command::Render(args)) => !args.common.text.is_empty(),
        Some(Command::Frame(args)) => !args.common.text.is_empty(),
        None => false,
    };
    if !text_given {
        print_usage();
        return Ok(());
    }

    match cli.cmd {
        Some(Command::Render(args)) => cmd_render(args),
        Some(Command::Frame(args)) => cmd_frame(args),
        None => Ok(()),
    }
}

fn print_usage() {
    println!("Usage: typegif render --text \"Hello World!\" --out out.gif");
    println!();
    println!("{}", Cli::command().render_long_help());
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut typer = typegif::Typer::new(args.common.to_config()?)?;
    let anim = typer.generate(&args.common.text)?;
    anim.save(&args.out)
        .with_context(|| format!("write gif '{}'", args.out.display()))?;
    eprintln!("wrote {} ({} frames)", args.out.display(), anim.len());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut typer = typegif::Typer::new(args.common.to_config()?)?;
    let anim = typer.generate(&args.common.text)?;
    let frame = anim.frames().get(args.index).with_context(|| {
        format!(
            "frame {} out of range (animation has {} frames)",
            args.index,
            anim.len()
        )
    })?;

    typegif::encode::animation::ensure_parent_dir(&args.out)?;
    let canvas = frame.frame.canvas;
    image::save_buffer_with_format(
        &args.out,
        &frame.frame.to_rgba8(anim.palette()),
        u32::from(canvas.width),
        u32::from(canvas.height),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "driftlab", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize a plan for a prompt and print it as JSON.
    Plan(PlanArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render an MP4 clip (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Prompt text; blank falls back to the default prompt.
    #[arg(long, default_value = "")]
    prompt: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Prompt text; blank falls back to the default prompt.
    #[arg(long, default_value = "")]
    prompt: String,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    geometry: GeometryArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Prompt text; blank falls back to the default prompt.
    #[arg(long, default_value = "")]
    prompt: String,

    /// Output MP4 path; defaults to a filename derived from the plan title.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Overwrite output if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    #[command(flatten)]
    geometry: GeometryArgs,
}

#[derive(Parser, Debug)]
struct GeometryArgs {
    /// Output width in pixels.
    #[arg(long, default_value_t = 720)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Output frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

impl GeometryArgs {
    fn to_opts(&self) -> anyhow::Result<driftlab::RenderOpts> {
        Ok(driftlab::RenderOpts {
            canvas: driftlab::Canvas::new(self.width, self.height)?,
            fps: driftlab::Fps::new(self.fps, 1)?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let plan = driftlab::synthesize(&args.prompt);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let opts = args.geometry.to_opts()?;
    let plan = driftlab::synthesize(&args.prompt);

    let frames_total = opts.fps.secs_to_frames_round(plan.duration_secs).max(1);
    if args.frame >= frames_total {
        anyhow::bail!(
            "frame {} out of range (plan has {} frames)",
            args.frame,
            frames_total
        );
    }

    let mut rng = driftlab::SeededRng::new(plan.seed);
    let particles =
        driftlab::build_field(&plan, &mut rng, opts.canvas.width, opts.canvas.height);
    let mut surface = driftlab::Surface::new(opts.canvas.width, opts.canvas.height);

    // Replay the loop up to the requested frame so trails and grain match
    // the full render exactly.
    let frame_dur = opts.fps.frame_duration_secs();
    for f in 0..=args.frame {
        let elapsed = if f + 1 == frames_total {
            plan.duration_secs
        } else {
            ((f + 1) as f64 * frame_dur).min(plan.duration_secs)
        };
        let progress = elapsed / plan.duration_secs;
        driftlab::compose_frame(&mut surface, &plan, &particles, progress, elapsed);
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let frame = surface.to_frame();
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let opts = args.geometry.to_opts()?;
    let plan = driftlab::synthesize(&args.prompt);
    let out_path = args
        .out
        .unwrap_or_else(|| PathBuf::from(plan.suggested_filename("mp4")));

    let mut sink = driftlab::FfmpegSink::new(driftlab::FfmpegSinkOpts {
        out_path: out_path.clone(),
        overwrite: args.overwrite,
    });

    let mut sess = driftlab::RenderSession::new(opts);
    let mut last_pct = -1i64;
    let outcome = sess.render(&plan, &mut sink, |progress| {
        let pct = (progress * 100.0).round() as i64;
        if pct != last_pct {
            eprint!("\rrendering {pct:3}%");
            last_pct = pct;
        }
    })?;
    eprintln!();

    match outcome {
        driftlab::RenderOutcome::Completed { frames } => {
            eprintln!("wrote {} ({frames} frames)", out_path.display());
        }
        driftlab::RenderOutcome::Cancelled => {
            eprintln!("render cancelled; no output written");
        }
    }
    Ok(())
}

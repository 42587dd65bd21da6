use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use filmstrip::{
    Effect, Event, Interaction, NullAudio, Player, PlayerConfig, Progress, RecordingHost,
    RoundPolicy, ScrollSample, SequenceStore, SoftwareSurface, Viewport, apply_effects,
    frame_position, load_from_dir, resolve_frame,
};

#[derive(Parser, Debug)]
#[command(name = "filmstrip", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the frame for a given progress as a PNG.
    Frame(FrameArgs),
    /// Load a sequence and run a scripted playback, reporting transitions.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input player configuration JSON.
    #[arg(long = "config")]
    config_path: PathBuf,

    /// Progress through the sequence in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input player configuration JSON.
    #[arg(long = "config")]
    config_path: PathBuf,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Simulated milliseconds between animation ticks.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Override the configured gate mode.
    #[arg(long, value_enum)]
    gate: Option<GateChoice>,

    /// Scroll samples swept through manual mode after the handoff.
    #[arg(long, default_value_t = 8)]
    scroll_steps: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GateChoice {
    Interaction,
    IntroReplay,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<PlayerConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: PlayerConfig =
        serde_json::from_reader(r).with_context(|| "parse player config JSON")?;
    config.validate()?;
    Ok(config)
}

fn load_store(config: &PlayerConfig, config_path: &Path) -> anyhow::Result<SequenceStore> {
    let root = config_path.parent().unwrap_or_else(|| Path::new("."));
    let (store, _notices) = load_from_dir(config, root)?;
    Ok(store)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = read_config(&args.config_path)?;
    let store = load_store(&config, &args.config_path)?;

    // Static renders use the scroll driver's mapping.
    let progress = Progress::new(args.progress);
    let position = frame_position(progress, config.frame_count);
    let frame = resolve_frame(RoundPolicy::Floor, position, config.frame_count);

    let mut surface = SoftwareSurface::new(args.width, args.height);
    filmstrip::render_frame(&mut surface, &store, frame);

    let img = image::RgbaImage::from_raw(args.width, args.height, surface.data().to_vec())
        .context("assemble output image")?;
    img.save(&args.out)
        .with_context(|| format!("write PNG to '{}'", args.out.display()))?;

    println!(
        "rendered frame {} of {} (progress {:.3}) to {}",
        frame.0,
        config.frame_count,
        progress.value(),
        args.out.display()
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut config = read_config(&args.config_path)?;
    if let Some(gate) = args.gate {
        config.gate = match gate {
            GateChoice::Interaction => filmstrip::GateMode::Interaction,
            GateChoice::IntroReplay => filmstrip::GateMode::IntroReplay,
        };
    }

    let (store, notices) = {
        let root = args.config_path.parent().unwrap_or_else(|| Path::new("."));
        load_from_dir(&config, root)?
    };
    println!(
        "loaded {} of {} frames ({} settled)",
        (0..config.frame_count)
            .filter(|i| store.get(filmstrip::FrameIndex(*i)).is_some())
            .count(),
        config.frame_count,
        store.settled_count()
    );

    let viewport = Viewport::new(args.width, args.height)?;
    let mut sim = Simulation {
        player: Player::new(config.clone())?,
        store,
        surface: SoftwareSurface::new(args.width, args.height),
        scroll: RecordingHost::default(),
        audio: NullAudio,
        now_ms: 0,
        effects_applied: 0,
    };

    sim.feed(Event::Resize(viewport));
    for notice in notices {
        sim.feed(Event::Load(notice));
    }

    // Interaction unblocks both waiting phases; harmless elsewhere.
    sim.feed(Event::Interact(Interaction::Click));
    sim.run_ticks(args.tick_ms);
    if sim.player.phase().accepts_interaction() {
        sim.feed(Event::Interact(Interaction::ScrollAttempt));
        sim.run_ticks(args.tick_ms);
    }

    // Manual sweep from the handoff offset back through the track.
    let scroll_height = f64::from(args.height) * config.track_vh;
    for step in 0..=args.scroll_steps {
        let t = f64::from(step) / f64::from(args.scroll_steps.max(1));
        sim.feed(Event::Scroll(ScrollSample {
            scroll_top: (scroll_height - f64::from(args.height)) * t,
            scroll_height,
            viewport_height: f64::from(args.height),
        }));
    }

    println!(
        "final phase {:?}, frame {}, scroll_top {:.1}, {} effects applied",
        sim.player.phase(),
        sim.player.last_frame().0,
        sim.scroll.scroll_top,
        sim.effects_applied
    );
    Ok(())
}

struct Simulation {
    player: Player,
    store: SequenceStore,
    surface: SoftwareSurface,
    scroll: RecordingHost,
    audio: NullAudio,
    now_ms: u64,
    effects_applied: usize,
}

impl Simulation {
    fn feed(&mut self, event: Event) -> bool {
        let before = self.player.phase();
        let effects = self.player.handle(event);
        let after = self.player.phase();
        self.effects_applied += effects.len();

        if before != after {
            println!("t={}ms {:?} -> {:?}", self.now_ms, before, after);
        }
        for effect in &effects {
            if matches!(effect, Effect::SetScrollTop(_) | Effect::PlayAudio) {
                println!(
                    "t={}ms effect {}",
                    self.now_ms,
                    serde_json::to_string(effect).unwrap_or_default()
                );
            }
        }

        apply_effects(
            &effects,
            &self.store,
            &mut self.surface,
            &mut self.scroll,
            &mut self.audio,
            self.player.config().audio.as_ref(),
        )
    }

    fn run_ticks(&mut self, tick_ms: u64) {
        // Bounded in case no completion is reachable.
        for _ in 0..100_000 {
            let requested = self.feed(Event::Tick(self.now_ms));
            self.now_ms += tick_ms;
            if !requested {
                break;
            }
        }
    }
}

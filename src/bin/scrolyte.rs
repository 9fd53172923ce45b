use std::{
    cell::RefCell,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrolyte", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a scene JSON and print a summary.
    Validate(ValidateArgs),
    /// Evaluate element styles at one scroll offset.
    Sample(SampleArgs),
    /// Sweep a scroll range and print the session events it produces.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll offset to evaluate at.
    #[arg(long)]
    scroll: f64,

    /// Evaluation timestamp in seconds. Entrance and marquee clocks start
    /// at 0, so large values show the settled page.
    #[arg(long, default_value_t = 0.0)]
    now: f64,

    /// Evaluate under reduced motion.
    #[arg(long)]
    reduced: bool,

    /// Output JSON path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First scroll offset.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset.
    #[arg(long)]
    to: f64,

    /// Scroll step per tick.
    #[arg(long, default_value_t = 100.0)]
    step: f64,
}

/// On-disk scene: a page composition plus the geometry a host would measure.
#[derive(Debug, serde::Deserialize)]
struct Scene {
    page: scrolyte::PageComposition,
    viewport: scrolyte::Viewport,
    layout: scrolyte::DocumentLayout,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: Scene = serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    scene.page.validate()?;

    for id in &scene.page.sections {
        if scene.layout.rect(id).is_none() {
            eprintln!("warning: section '{id}' has no rect in the layout");
        }
    }

    eprintln!(
        "ok: {} sections, {} bindings, {} entrances, {} marquees",
        scene.page.sections.len(),
        scene.page.bindings.len(),
        scene.page.entrances.len(),
        scene.page.marquees.len()
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;

    let opts = scrolyte::SessionOpts {
        reduced_motion: args.reduced.then_some(true),
    };
    let mut session = scrolyte::PageSession::new(scene.page, opts)?;
    session.mount(scene.viewport, scene.layout, 0.0);
    session.handle_scroll(args.scroll, 0.0);

    let styles = session.evaluate(args.now)?;
    let json = serde_json::to_string_pretty(&styles).with_context(|| "serialize styles")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write styles '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.step <= 0.0 {
        anyhow::bail!("--step must be > 0");
    }
    if args.to < args.from {
        anyhow::bail!("--to must be >= --from");
    }
    let scene = read_scene_json(&args.in_path)?;

    let mut session = scrolyte::PageSession::new(scene.page, scrolyte::SessionOpts::default())?;

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    session.subscribe(move |e: &scrolyte::PageEvent| sink.borrow_mut().push(e.clone()));

    session.mount(scene.viewport, scene.layout, 0.0);
    for event in events.borrow_mut().drain(..) {
        println!("   mount  {}", describe(&event));
    }

    let mut scroll = args.from;
    let mut tick = 0u64;
    while scroll <= args.to {
        let now = tick as f64 / 60.0;
        session.handle_scroll(scroll, now);
        for event in events.borrow_mut().drain(..) {
            println!("{scroll:>8.1}  {}", describe(&event));
        }
        scroll += args.step;
        tick += 1;
    }

    let stats = session.stats();
    eprintln!(
        "{} ticks, {} section changes, {} entrances armed, {} events",
        stats.scroll_ticks, stats.section_changes, stats.entrances_armed, stats.events_dispatched
    );
    Ok(())
}

fn describe(event: &scrolyte::PageEvent) -> String {
    match event {
        scrolyte::PageEvent::ActiveSectionChanged { previous, current } => match previous {
            Some(prev) => format!("section {prev} -> {current}"),
            None => format!("section -> {current}"),
        },
        scrolyte::PageEvent::EntranceArmed { group } => format!("entrance armed: {group}"),
        scrolyte::PageEvent::MotionPreferenceChanged { preference } => {
            format!("motion preference: {preference:?}")
        }
        scrolyte::PageEvent::CondensedChanged { condensed } => {
            format!("nav condensed: {condensed}")
        }
    }
}

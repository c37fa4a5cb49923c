use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path as FsPath, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use kinema::PathSegment as _;

#[derive(Parser, Debug)]
#[command(name = "kinema", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the named interpolator presets.
    Catalog,
    /// Sample an interpolator preset as JSON.
    Ease(EaseArgs),
    /// Measure and sample a path described in JSON.
    Path(PathArgs),
    /// Run a director through a sequence of scene switches and print the transition events.
    Switch(SwitchArgs),
}

#[derive(Parser, Debug)]
struct EaseArgs {
    /// Preset name (see `kinema catalog`).
    #[arg(long)]
    name: String,

    /// Number of samples over `[0, 1]`.
    #[arg(long, default_value_t = 32)]
    samples: usize,

    /// Output JSON path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Input path JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of samples along the path.
    #[arg(long, default_value_t = 16)]
    samples: usize,

    /// Output JSON path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SwitchArgs {
    /// Number of scenes to cycle through.
    #[arg(long, default_value_t = 3)]
    scenes: usize,

    /// Transition length in milliseconds.
    #[arg(long, default_value_t = 500.0)]
    duration: f64,

    /// Fade while sliding.
    #[arg(long)]
    fade: bool,

    /// Ticks per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

/// Path description accepted by `kinema path`.
#[derive(serde::Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PathDoc {
    Polyline {
        points: Vec<[f64; 2]>,
        #[serde(default)]
        closed: bool,
    },
    CatmullRom {
        points: Vec<[f64; 2]>,
        #[serde(default)]
        closed: bool,
    },
    Rectangle {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        #[serde(default)]
        clockwise: bool,
    },
}

#[derive(serde::Serialize, Debug)]
struct PathReport {
    length: f64,
    bounds: kinema::Rectangle,
    svg: String,
    samples: Vec<kinema::Point>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Catalog => cmd_catalog(),
        Command::Ease(args) => cmd_ease(args),
        Command::Path(args) => cmd_path(args),
        Command::Switch(args) => cmd_switch(args),
    }
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&FsPath>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(f), value)
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, value).context("write json to stdout")?;
            writeln!(lock)?;
        }
    }
    Ok(())
}

fn cmd_catalog() -> anyhow::Result<()> {
    let names: Vec<&str> = kinema::Interpolator::catalog()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    write_json(&names, None)
}

fn cmd_ease(args: EaseArgs) -> anyhow::Result<()> {
    let interpolator = kinema::Interpolator::by_name(&args.name)
        .with_context(|| format!("unknown interpolator preset '{}'", args.name))?;
    if args.samples < 2 {
        anyhow::bail!("--samples must be at least 2, got {}", args.samples);
    }
    let report = serde_json::json!({
        "name": args.name,
        "interpolator": interpolator,
        "points": interpolator.contour(args.samples - 1),
    });
    write_json(&report, args.out.as_deref())
}

fn read_path_doc(path: &FsPath) -> anyhow::Result<PathDoc> {
    let f = File::open(path).with_context(|| format!("open path '{}'", path.display()))?;
    let doc: PathDoc =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse path JSON")?;
    Ok(doc)
}

fn build_path(doc: &PathDoc) -> anyhow::Result<kinema::Path> {
    let path = match doc {
        PathDoc::Polyline { points, closed } => {
            let [first, rest @ ..] = points.as_slice() else {
                anyhow::bail!("polyline needs at least one point");
            };
            if rest.is_empty() {
                anyhow::bail!("polyline needs at least two points");
            }
            let mut path = kinema::Path::new();
            path.begin_path(first[0], first[1]);
            for p in rest {
                path.add_line_to(p[0], p[1]);
            }
            if *closed {
                path.close_path()?;
            }
            path.end_path();
            path
        }
        PathDoc::CatmullRom { points, closed } => {
            let points: Vec<kinema::Point> =
                points.iter().map(|p| kinema::Point::new(p[0], p[1])).collect();
            kinema::Path::catmull_rom(&points, *closed)?
        }
        PathDoc::Rectangle {
            x0,
            y0,
            x1,
            y1,
            clockwise,
        } => kinema::Path::rectangle(*x0, *y0, *x1, *y1, *clockwise),
    };
    Ok(path)
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let doc = read_path_doc(&args.in_path)?;
    let path = build_path(&doc)?;
    if args.samples < 2 {
        anyhow::bail!("--samples must be at least 2, got {}", args.samples);
    }

    let last = (args.samples - 1) as f64;
    let report = PathReport {
        length: path.length(),
        bounds: path.bounding_box(),
        svg: path.to_bez_path().to_svg(),
        samples: (0..args.samples)
            .map(|i| path.position(i as f64 / last))
            .collect(),
    };
    write_json(&report, args.out.as_deref())
}

fn cmd_switch(args: SwitchArgs) -> anyhow::Result<()> {
    if args.scenes == 0 {
        anyhow::bail!("--scenes must be at least 1");
    }
    let mut runtime = kinema::Runtime::new(kinema::RuntimeOpts {
        fps: args.fps,
        ..kinema::RuntimeOpts::default()
    })?;

    let mut director = kinema::Director::new(kinema::DirectorOpts::default());
    for _ in 0..args.scenes {
        director.create_scene();
    }
    let id = runtime.register_director(director);

    for step in 0..args.scenes {
        let director = runtime
            .director_mut(id)
            .context("director vanished from runtime")?;
        director.switch_to_next_scene(args.duration, args.fade)?;
        // One extra frame so a transition that ends exactly on the boundary is reported.
        let events = runtime.run_for(args.duration + 1000.0 / args.fps);
        for (_, event) in events {
            let line = match event {
                kinema::DirectorEvent::SceneActivated(i) => {
                    serde_json::json!({ "step": step, "time": runtime.time(), "activated": i })
                }
                kinema::DirectorEvent::SceneHidden(i) => {
                    serde_json::json!({ "step": step, "time": runtime.time(), "hidden": i })
                }
            };
            println!("{line}");
        }
    }
    Ok(())
}

use clap::{Parser, Subcommand};
use segment3d::{
    analyze,
    geometry::{Segment3D, Vector3D},
    intersect,
    io::{parse_segment, read_segment_pair_json},
    IntersectionOutcome,
};
use std::io::Write;

/// Machine-readable result of a single intersection query.
#[derive(serde::Serialize)]
struct Report {
    intersects: bool,
    point: Option<Vector3D>,
    reason: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    t: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s: Option<f64>,
}

impl From<IntersectionOutcome> for Report {
    fn from(outcome: IntersectionOutcome) -> Self {
        let (t, s) = match outcome {
            IntersectionOutcome::Point { t, s, .. } | IntersectionOutcome::OutOfRange { t, s } => {
                (Some(t), Some(s))
            }
            _ => (None, None),
        };
        Self {
            intersects: outcome.is_intersection(),
            point: outcome.point(),
            reason: outcome.reason(),
            t,
            s,
        }
    }
}

/// Output switches shared by the query commands.
#[derive(clap::Args, Debug, Clone, Copy)]
struct OutputOpts {
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
    /// Also print why the segments do or do not meet.
    #[arg(long)]
    explain: bool,
}

/// Intersect two finite line segments in 3D space.
#[derive(Parser)]
#[command(name = "segment3d_cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Intersect the two built-in demo segments (the default).
    Demo,
    /// Intersect two segments, each given as x1,y1,z1,x2,y2,z2.
    Intersect {
        #[arg(value_parser = segment_arg, allow_hyphen_values = true)]
        a: Segment3D,
        #[arg(value_parser = segment_arg, allow_hyphen_values = true)]
        b: Segment3D,
        #[command(flatten)]
        output: OutputOpts,
    },
    /// Intersect the segment pair stored in a JSON file.
    IntersectFile {
        path: String,
        #[command(flatten)]
        output: OutputOpts,
    },
}

fn segment_arg(text: &str) -> Result<Segment3D, String> {
    parse_segment(text).map_err(|e| e.to_string())
}

fn demo_segments() -> (Segment3D, Segment3D) {
    (
        Segment3D::from(((0.0, 0.0, 0.0), (1.0, 1.0, 0.0))),
        Segment3D::from(((1.0, 0.0, 0.0), (1.0, 1.0, 0.0))),
    )
}

/// Prints the demo result. The miss branch has no trailing newline.
fn run_demo() -> Result<(), String> {
    let (a, b) = demo_segments();
    match intersect(&a, &b) {
        Some(p) => println!("{}", p),
        None => {
            print!("no intersection");
            std::io::stdout().flush().map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

fn print_outcome(a: &Segment3D, b: &Segment3D, output: OutputOpts) -> Result<(), String> {
    let outcome = analyze(a, b);
    if output.json {
        let json = serde_json::to_string(&Report::from(outcome)).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }
    match outcome.point() {
        Some(p) => println!("{}", p),
        None => println!("no intersection"),
    }
    if output.explain {
        match outcome {
            IntersectionOutcome::NonCoplanar { triple } => {
                println!("reason: {} (triple product {})", outcome.reason(), triple)
            }
            IntersectionOutcome::Parallel { det } => {
                println!("reason: {} (det {})", outcome.reason(), det)
            }
            IntersectionOutcome::OutOfRange { t, s } | IntersectionOutcome::Point { t, s, .. } => {
                println!("reason: {} (t={}, s={})", outcome.reason(), t, s)
            }
        }
        println!("lengths: a={}, b={}", a.length(), b.length());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(),
        Commands::Intersect { a, b, output } => {
            log::info!("intersecting {} -> {} with {} -> {}", a.start, a.end, b.start, b.end);
            print_outcome(&a, &b, output)
        }
        Commands::IntersectFile { path, output } => match read_segment_pair_json(&path) {
            Ok(pair) => print_outcome(&pair.a, &pair.b, output),
            Err(e) => Err(format!("Error reading {}: {}", path, e)),
        },
    };
    if let Err(msg) = result {
        eprintln!("{}", msg);
        std::process::exit(1);
    }
}

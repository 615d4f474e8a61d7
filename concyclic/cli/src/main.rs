//! Concyclic CLI
//!
//! Count and list circles through four or more lattice points

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use concyclic_core::{
    count_circles, enumerate_circles, load_point_set, load_point_sets, Locus, Point, PointSet,
    Session, SessionConfig,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "concyclic")]
#[command(about = "Find sets of four or more lattice points lying on one circle")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count distinct circles through at least four points
    Count(InputArgs),

    /// List one descriptor per circle, in enumeration order
    List {
        #[command(flatten)]
        input: InputArgs,

        /// Stop after this many circles
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Verify every point set in a directory against its expectation
    Check {
        /// Directory of point-set JSON files
        dir: PathBuf,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Point-set JSON file
    #[arg(required_unless_present = "points", conflicts_with = "points")]
    file: Option<PathBuf>,

    /// Inline points as `x,y` pairs, e.g. `--points 0,0 1,0 -3,4`
    ///
    /// Takes every following value, so pass it after any other option
    #[arg(long, num_args = 1.., allow_hyphen_values = true, value_parser = parse_point)]
    points: Vec<Point>,

    /// Only search points with x < bound and y > -bound
    #[arg(long, default_value_t = SessionConfig::default().bound)]
    bound: i32,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got `{}`", s))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{}`: {}", s, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in `{}`: {}", s, e))?;
    Ok(Point::new(x, y))
}

impl InputArgs {
    /// Session holding the requested points under the requested bound
    fn session(&self) -> Result<Session> {
        let points = match &self.file {
            Some(path) => {
                load_point_set(path)
                    .with_context(|| format!("loading {}", path.display()))?
                    .points
            }
            None => self.points.clone(),
        };
        let given = points.len();

        let config = SessionConfig::with_bound(self.bound)?;
        let mut session = Session::new(config)?;
        session.set_points(points);

        let (duplicates, hidden) = dropped_points(given, &session);
        if duplicates > 0 {
            warn!(duplicates, "ignoring repeated points");
        }
        if hidden > 0 {
            warn!(hidden, bound = self.bound, "ignoring points outside the bound");
        }
        info!(
            placed = session.points().len(),
            visible = session.visible_points().len(),
            "input ready"
        );
        Ok(session)
    }
}

/// Repeated and out-of-bound counts among `given` input points
fn dropped_points(given: usize, session: &Session) -> (usize, usize) {
    let placed = session.points().len();
    (given - placed, placed - session.visible_points().len())
}

fn describe(locus: Locus) -> String {
    match locus {
        Locus::Line { through: (a, b) } => format!("line through {} and {}", a, b),
        Locus::Circle { center, radius } => {
            format!("circle centre ({:.3}, {:.3}) radius {:.3}", center.0, center.1, radius)
        }
    }
}

fn run_count(input: &InputArgs) -> Result<()> {
    let mut session = input.session()?;
    let count = session.wait_count()?;
    println!("{}", session.count_state());
    info!(count, "done");
    Ok(())
}

fn run_list(input: &InputArgs, limit: Option<usize>, json: bool) -> Result<()> {
    let points = input.session()?.visible_points();
    let circles = enumerate_circles(&points).take(limit.unwrap_or(usize::MAX));

    if json {
        let listed: Vec<_> = circles
            .map(|circle| {
                serde_json::json!({
                    "p1": circle.p1,
                    "p2": circle.p2,
                    "tangent": circle.tangent.to_string(),
                    "locus": circle.locus(),
                    "members": circle.members(&points),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    for (n, circle) in circles.enumerate() {
        let members: Vec<String> = circle.members(&points).iter().map(Point::to_string).collect();
        println!("#{} {}: {}", n + 1, circle, describe(circle.locus()));
        println!("    {}", members.join(" "));
    }
    Ok(())
}

fn check_set(set: &PointSet) -> Result<i64> {
    let counted = count_circles(&set.points);
    let listed = enumerate_circles(&set.points).count() as i64;

    if counted != listed {
        bail!("{}: count {} but enumeration yields {}", set.id, counted, listed);
    }
    if let Some(expected) = set.expected_circles {
        if counted != expected {
            bail!("{}: expected {} circles, found {}", set.id, expected, counted);
        }
    }
    Ok(counted)
}

fn run_check(dir: &Path) -> Result<()> {
    let sets = load_point_sets(dir).with_context(|| format!("loading {}", dir.display()))?;

    let mut failures = 0;
    for set in &sets {
        match check_set(set) {
            Ok(n) => println!("ok   {} ({} circles)", set.id, n),
            Err(e) => {
                failures += 1;
                println!("FAIL {}", e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} point sets failed", failures, sets.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Count(input) => run_count(input),
        Command::List { input, limit, json } => run_list(input, *limit, *json),
        Command::Check { dir } => run_check(dir),
    }
}

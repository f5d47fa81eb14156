//! Assessment CLI
//!
//! Rank the legal moves of a demo position and print or save the report.

use analysis::{AssessConfig, AssessmentReport, Assessor};
use mosaic_core::{evaluate_for, legal_moves, Position};
use std::env;
use std::path::PathBuf;

fn print_usage() {
    println!("Mosaic move-quality assessor");
    println!();
    println!("Usage:");
    println!("  mosaic assess [--plies N] [--depth D] [--time MS] [--config PATH] [--out PATH]");
    println!("  mosaic demo  [--plies N]");
    println!();
    println!("Options:");
    println!("  --plies N      advance the demo position N plies first (default 0)");
    println!("  --depth D      alpha-beta depth per move");
    println!("  --time MS      wall-clock budget per move in milliseconds");
    println!("  --config PATH  TOML scoring calibration");
    println!("  --out PATH     also write the report as JSON");
    println!();
    println!("Examples:");
    println!("  mosaic assess --plies 12 --depth 3 --time 200");
    println!("  mosaic assess --config calibration.toml --out report.json");
}

/// Deterministic demo position: the opening position advanced by the
/// statically best move at each ply.
fn demo_position(plies: u32) -> Position {
    let mut pos = Position::startpos();
    for _ in 0..plies {
        if pos.game_over {
            break;
        }
        let mover = pos.to_move;
        let best = legal_moves(&pos).into_iter().max_by(|a, b| {
            let va = evaluate_for(&pos.apply(*a), mover);
            let vb = evaluate_for(&pos.apply(*b), mover);
            va.partial_cmp(&vb)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.notation().cmp(&a.notation()))
        });
        match best {
            Some(mv) => pos = pos.apply(mv),
            None => break,
        }
    }
    pos
}

struct CliArgs {
    plies: u32,
    depth: Option<u8>,
    time_ms: Option<u64>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut parsed = CliArgs {
        plies: 0,
        depth: None,
        time_ms: None,
        config: None,
        out: None,
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--plies" | "-p" => {
                if i + 1 < args.len() {
                    parsed.plies = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    parsed.depth = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--time" | "-t" => {
                if i + 1 < args.len() {
                    parsed.time_ms = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    parsed.out = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => {
                eprintln!("Warning: ignoring unknown argument {}", other);
            }
        }
        i += 1;
    }
    parsed
}

fn run_assess(args: &[String]) {
    let cli = parse_args(args);

    let mut config = match &cli.config {
        Some(path) => match AssessConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        },
        None => AssessConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(ms) = cli.time_ms {
        config.move_time_ms = Some(ms);
    }

    let pos = demo_position(cli.plies);
    let assessor = Assessor::new(config);
    let results = match assessor.assess(&pos) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let report = AssessmentReport::new(&pos, results);
    print!("{}", report.render_text());

    if let Some(out) = &cli.out {
        match report.save(out) {
            Ok(()) => println!("\nReport written to {}", out.display()),
            Err(e) => eprintln!("Warning: failed to write report: {}", e),
        }
    }
}

fn run_demo(args: &[String]) {
    let cli = parse_args(args);
    let pos = demo_position(cli.plies);
    println!(
        "Demo position after {} plies: round {}, player {} to move, {} legal moves",
        cli.plies,
        pos.round,
        pos.to_move,
        legal_moves(&pos).len()
    );
    for (i, f) in pos.factories.iter().enumerate() {
        let tiles: Vec<&str> = f.iter().map(|t| t.name()).collect();
        println!("  factory {}: [{}]", i + 1, tiles.join(", "));
    }
    let center: Vec<&str> = pos.center.iter().map(|t| t.name()).collect();
    println!(
        "  center: [{}]{}",
        center.join(", "),
        if pos.center_has_marker { " +marker" } else { "" }
    );
    println!(
        "  scores: {} / {}",
        pos.players[0].score, pos.players[1].score
    );
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "assess" => run_assess(&args[2..]),
        "demo" => run_demo(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }
}

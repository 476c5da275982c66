//! Nim position analyzer binary.
//!
//! Usage:
//!   cargo run --release --bin analyze -- [OPTIONS]
//!
//! Options:
//!   --variant <NAME>     simple | regular | misere | split (default: regular)
//!   --state <PILES>      Starting position, e.g. "3,5,7" (default: random)
//!   --seed <N>           Random seed for the generated opening
//!   --no-prune           Use exhaustive minimax instead of alpha-beta
//!   --sweep <N>          Solve every single-pile opening 1..=N in parallel
//!   --output <FILE>      Write a JSON report (default: none)

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

use nim_solver::games::{SimpleNim, SplitNim, TakeawayNim};
use nim_solver::play::{Player, PlayerKind, PlayerOrder};
use nim_solver::search::{Ruleset, Score, SearchConfig, Solver, StartLimits, WIN};

/// One turn of the played-out optimal line.
#[derive(Serialize)]
struct TurnReport {
    player: String,
    leaves: String,
    score: Score,
}

/// Full report for one analyzed game.
#[derive(Serialize)]
struct GameReport {
    variant: String,
    start: String,
    turns: Vec<TurnReport>,
    winner: String,
    nodes_visited: u64,
    cache_hits: u64,
    cutoffs: u64,
    cache_size: usize,
    elapsed_seconds: f64,
}

/// One opening of a sweep: the exact value for the first player.
#[derive(Serialize)]
struct SweepEntry {
    opening: u32,
    first_player_score: Score,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report {
    Game(GameReport),
    Sweep {
        variant: String,
        entries: Vec<SweepEntry>,
    },
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut variant = "regular".to_string();
    let mut state_arg: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut prune = true;
    let mut sweep: Option<u32> = None;
    let mut output_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--variant" | "-v" => {
                i += 1;
                if i < args.len() {
                    variant = args[i].clone();
                }
            }
            "--state" => {
                i += 1;
                if i < args.len() {
                    state_arg = Some(args[i].clone());
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--no-prune" => {
                prune = false;
            }
            "--sweep" => {
                i += 1;
                if i < args.len() {
                    sweep = args[i].parse().ok();
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Nim Position Analyzer");
    println!("=================================================");
    println!();
    println!("Variant: {}", variant);

    let config = SearchConfig::default().with_pruning(prune);
    if !prune {
        println!("Search: exhaustive minimax (pruning disabled)");
    }

    let report = match variant.as_str() {
        "simple" => run_simple(state_arg, seed, sweep, config),
        "regular" => run_piles(TakeawayNim::regular(), "regular", state_arg, seed, sweep, config),
        "misere" => run_piles(TakeawayNim::misere(), "misere", state_arg, seed, sweep, config),
        "split" => run_piles(SplitNim::new(), "split", state_arg, seed, sweep, config),
        other => {
            eprintln!("Unknown variant: {}", other);
            print_help();
            return;
        }
    };

    if let Some(path) = output_file {
        let json = serde_json::to_string_pretty(&report).expect("report serialization failed");
        let mut file = File::create(&path).expect("cannot create output file");
        file.write_all(json.as_bytes()).expect("cannot write output file");
        println!();
        println!("Report written to {}", path);
    }
}

fn print_help() {
    println!("Nim position analyzer");
    println!();
    println!("Options:");
    println!("  --variant <NAME>   simple | regular | misere | split");
    println!("  --state <PILES>    starting position, e.g. \"3,5,7\"");
    println!("  --seed <N>         random seed for the generated opening");
    println!("  --no-prune         exhaustive minimax instead of alpha-beta");
    println!("  --sweep <N>        solve every single-pile opening 1..=N");
    println!("  --output <FILE>    write a JSON report");
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run_simple(
    state_arg: Option<String>,
    seed: Option<u64>,
    sweep: Option<u32>,
    config: SearchConfig,
) -> Report {
    let rules = SimpleNim::new();
    if let Some(limit) = sweep {
        return sweep_openings(rules, "simple", limit, config, |n| n);
    }

    let start = match state_arg {
        Some(arg) => parse_piles(&arg)[0],
        None => rules.random_start(&StartLimits::default(), &mut make_rng(seed)),
    };
    play_out(rules, "simple", start, config)
}

fn run_piles<R>(
    rules: R,
    name: &str,
    state_arg: Option<String>,
    seed: Option<u64>,
    sweep: Option<u32>,
    config: SearchConfig,
) -> Report
where
    R: Ruleset<State = Vec<u32>> + Send + Sync,
{
    if let Some(limit) = sweep {
        return sweep_openings(rules, name, limit, config, |n| vec![n]);
    }

    let start = match state_arg {
        Some(arg) => parse_piles(&arg),
        None => rules.random_start(&StartLimits::default(), &mut make_rng(seed)),
    };
    play_out(rules, name, start, config)
}

fn parse_piles(arg: &str) -> Vec<u32> {
    arg.split(',')
        .map(|part| {
            part.trim()
                .parse()
                .unwrap_or_else(|_| panic!("invalid pile count: {:?}", part))
        })
        .collect()
}

/// Play the position out with both sides on the engine, printing each turn.
fn play_out<R: Ruleset>(rules: R, name: &str, start: R::State, config: SearchConfig) -> Report {
    let mut solver = Solver::new(rules.clone(), config);
    let start_description = rules.describe(&start);
    println!("Starting Pile: {}", start_description);
    println!();

    let solve_start = Instant::now();
    let mut state = start;
    let mut mover = Player::first(PlayerKind::Ai);
    let mut turns = Vec::new();

    while let Some(result) = solver.best_move(&state) {
        println!(
            "{} turn: Left {} (score {:+})",
            mover,
            rules.describe(&result.state),
            result.score
        );
        turns.push(TurnReport {
            player: mover.to_string(),
            leaves: rules.describe(&result.state),
            score: result.score,
        });
        state = result.state;
        mover = match mover.order {
            PlayerOrder::First => Player::second(PlayerKind::Ai),
            PlayerOrder::Second => Player::first(PlayerKind::Ai),
        };
    }

    // The side to move faces a terminal position; the terminal sign says
    // whether being on the move there wins or loses.
    let winner = if rules.evaluate(&state, true) == Some(WIN) {
        mover
    } else {
        match mover.order {
            PlayerOrder::First => Player::second(PlayerKind::Ai),
            PlayerOrder::Second => Player::first(PlayerKind::Ai),
        }
    };
    let elapsed = solve_start.elapsed().as_secs_f64();

    println!();
    println!("{} wins! Game ends.", winner);
    println!();
    println!("Nodes visited: {}", solver.stats().nodes_visited);
    println!("Cache hits:    {}", solver.stats().cache_hits);
    println!("Cutoffs:       {}", solver.stats().cutoffs);
    println!("Cache size:    {}", solver.cache_size());
    println!("Elapsed:       {:.3}s", elapsed);

    Report::Game(GameReport {
        variant: name.to_string(),
        start: start_description,
        turns,
        winner: winner.to_string(),
        nodes_visited: solver.stats().nodes_visited,
        cache_hits: solver.stats().cache_hits,
        cutoffs: solver.stats().cutoffs,
        cache_size: solver.cache_size(),
        elapsed_seconds: elapsed,
    })
}

/// Solve every single-pile opening up to `limit`, one solver per opening.
///
/// Openings are independent games, so this parallelizes over whole games;
/// each individual search stays single-threaded.
fn sweep_openings<R, F>(
    rules: R,
    name: &str,
    limit: u32,
    config: SearchConfig,
    to_state: F,
) -> Report
where
    R: Ruleset + Send + Sync,
    R::State: Send,
    F: Fn(u32) -> R::State + Send + Sync,
{
    println!("Sweeping openings 1..={}", limit);

    let bar = ProgressBar::new(limit as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} openings")
            .expect("invalid progress template"),
    );

    let start = Instant::now();
    let mut entries: Vec<SweepEntry> = (1..=limit)
        .collect::<Vec<u32>>()
        .par_iter()
        .map(|&opening| {
            let mut solver = Solver::new(rules.clone(), config.clone());
            let state = to_state(opening);
            let score = if solver.is_terminal(&state) {
                solver.rules().evaluate(&state, true).unwrap_or(WIN)
            } else {
                solver.score(&state, true)
            };
            bar.inc(1);
            SweepEntry {
                opening,
                first_player_score: score,
            }
        })
        .collect();
    bar.finish();
    entries.sort_by_key(|entry| entry.opening);

    println!();
    for entry in &entries {
        let verdict = if entry.first_player_score == WIN {
            "first player wins"
        } else {
            "second player wins"
        };
        println!("  {:>3}: {}", entry.opening, verdict);
    }
    println!();
    println!("Swept {} openings in {:.3}s", limit, start.elapsed().as_secs_f64());

    Report::Sweep {
        variant: name.to_string(),
        entries,
    }
}

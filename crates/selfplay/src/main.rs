//! Self-play CLI
//!
//! Plays the alpha-beta engine against a random mover.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chess_core::Color;
use selfplay::{run, tally, SelfPlayConfig};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Self-play: alpha-beta engine vs random mover");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--depth D] [--games N] [--max-moves N]");
    println!("           [--seed S] [--black] [--book FILE] [--record FILE]");
    println!();
    println!("Command-line flags override values from the config file.");
    println!("Set RUST_LOG=debug to see every move.");
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> anyhow::Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn parse_args(args: &[String]) -> anyhow::Result<Option<SelfPlayConfig>> {
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => SelfPlayConfig::load(Path::new(value(args, i, "--config")?))?,
        None => SelfPlayConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" | "-c" => i += 1,
            "--depth" | "-d" => {
                config.engine.depth = value(args, i, flag)?.parse().context("bad --depth")?;
                i += 1;
            }
            "--games" | "-g" => {
                config.games = value(args, i, flag)?.parse().context("bad --games")?;
                i += 1;
            }
            "--max-moves" => {
                config.max_moves = value(args, i, flag)?.parse().context("bad --max-moves")?;
                i += 1;
            }
            "--seed" => {
                config.seed = Some(value(args, i, flag)?.parse().context("bad --seed")?);
                i += 1;
            }
            "--book" => {
                config.engine.book_path = Some(PathBuf::from(value(args, i, flag)?));
                i += 1;
            }
            "--record" => {
                config.record_path = Some(PathBuf::from(value(args, i, flag)?));
                i += 1;
            }
            "--black" => config.engine_side = Color::Black,
            "help" | "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument {other:?}"),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    println!(
        "=== Self-play: depth {}, {} game(s), engine plays {:?} ===",
        config.engine.depth, config.games, config.engine_side
    );

    let records = run(&config)?;
    for (n, record) in records.iter().enumerate() {
        println!(
            "Game {}: {} ({:?}, {} plies)",
            n + 1,
            record.result(),
            record.termination,
            record.moves.len()
        );
        println!("  final position: {}", record.final_fen);
    }

    let (wins, losses, draws) = tally(&records, config.engine_side);
    println!();
    println!("=== Final Result ===");
    println!("Engine: {wins} wins, {losses} losses, {draws} draws");
    Ok(())
}

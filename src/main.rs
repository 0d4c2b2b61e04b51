use anyhow::{ensure, Result};
use clap::Parser;
use log::info;

use last_mile::engine::{Autopilot, GameConfig, WarehouseWorld};
use last_mile::script::CommandScript;

#[derive(Parser)]
#[command(name = "last_mile")]
#[command(about = "Headless warehouse forklift game")]
struct Cli {
    /// Maximum number of ticks to run
    #[arg(long, default_value = "2000")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value = "0.1")]
    delta: f32,

    /// Seed for reproducible order generation
    #[arg(long)]
    seed: Option<u64>,

    /// Command script replayed right after the start, e.g. "U U A W300 L"
    #[arg(long)]
    script: Option<String>,

    /// Let the built-in autopilot play
    #[arg(long)]
    autopilot: bool,

    /// Only log the final result
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,last_mile=info"),
    )
    .init();

    let cli = Cli::parse();
    ensure!(
        cli.delta > 0.0 && cli.delta.is_finite(),
        "--delta must be a positive number of seconds, got {}",
        cli.delta
    );

    let script = cli
        .script
        .as_deref()
        .map(CommandScript::parse)
        .transpose()?;

    run_headless(&cli, script.as_ref());
    Ok(())
}

/// Run a session in headless mode (no graphics)
fn run_headless(cli: &Cli, script: Option<&CommandScript>) {
    let delta_ms = ((cli.delta * 1000.0).round() as u64).max(1);
    let ticks_per_second = (1000 / delta_ms).max(1) as u32;

    if !cli.quiet {
        println!("Running warehouse session in headless mode...");
        println!("Ticks: {}, Delta: {}s", cli.ticks, cli.delta);
        println!();
    }

    let mut world = WarehouseWorld::with_config(GameConfig::default(), cli.seed);
    world.start_game();

    if !cli.quiet {
        println!("Initial state:");
        world.print_summary();
        world.draw_map();
    }

    if let Some(script) = script {
        let outcomes = script.run(&mut world);
        info!("Replayed {} script commands", outcomes.len());
    }

    let autopilot = cli.autopilot.then(Autopilot::new);

    let mut tick = 0;
    while tick < cli.ticks && world.session.is_playing() {
        if let Some(command) = autopilot.as_ref().and_then(|pilot| pilot.next_command(&world)) {
            world.apply(command);
        }

        tick += 1;
        world.advance(delta_ms);

        if !cli.quiet && tick % ticks_per_second == 0 {
            println!("--- After tick {} ({:.1}s) ---", tick, world.now_ms() as f32 / 1000.0);
            world.print_summary();
            world.draw_map();
        }
    }

    if !cli.quiet {
        println!("=== Final State ===");
        world.print_summary();
        world.draw_map();
    }

    let snapshot = world.snapshot();
    info!("=== SESSION COMPLETE ===");
    info!("Status: {:?}", snapshot.status);
    info!("Orders completed: {}", snapshot.completed_orders);
    info!("Money earned: {}", snapshot.money);
    info!("Moves left: {}", snapshot.moves);
    match snapshot.rank {
        Some(rank) => info!("Rank: {}", rank),
        None => info!("Rank: pending (session still running after {} ticks)", tick),
    }
}

//! goap - elevator demo for the goal-oriented action planner.
//!
//! - `goap run` - plan one trip and execute it tick by tick
//! - `goap demo` - scripted two-leg scenario (floor 4, then floor -2)
//! - `goap plan` - plan only, print the sequence and its cost

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use goap_cli::{elevator, plan_trip, travel, DemoConfig};
use goap_core::{Plan, State};

#[derive(Parser)]
#[command(name = "goap")]
#[command(about = "Goal-oriented action planning elevator demo", version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a trip and execute it
    Run {
        /// Starting floor
        #[arg(long, allow_hyphen_values = true)]
        from: Option<i64>,

        /// Destination floor
        #[arg(long, allow_hyphen_values = true)]
        to: Option<i64>,

        /// Doors open at start (1) or closed (0)
        #[arg(long)]
        door: Option<u8>,

        /// Milliseconds between ticks
        #[arg(long)]
        tick_ms: Option<u64>,
    },

    /// Scripted scenario: floor 0 -> 4 -> -2, doors open at each stop
    Demo {
        /// Milliseconds between ticks
        #[arg(long)]
        tick_ms: Option<u64>,
    },

    /// Plan only
    Plan {
        /// Starting floor
        #[arg(long, allow_hyphen_values = true)]
        from: Option<i64>,

        /// Destination floor
        #[arg(long, allow_hyphen_values = true)]
        to: Option<i64>,

        /// Doors open at start (1) or closed (0)
        #[arg(long)]
        door: Option<u8>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = DemoConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Run {
            from,
            to,
            door,
            tick_ms,
        }) => {
            let (start, goal) = config.trip_states(from, to, door);
            run_trip(&config, start, goal, tick_ms).await
        }
        Some(Commands::Demo { tick_ms }) => run_demo(&config, tick_ms).await,
        Some(Commands::Plan { from, to, door }) => {
            let (start, goal) = config.trip_states(from, to, door);
            let plan = plan_trip(&elevator::registry(), config.planner, &start, &goal)?;
            print_plan(&plan);
            Ok(())
        }
        None => {
            println!("goap - goal-oriented action planning elevator demo");
            println!();
            println!("Usage: goap <COMMAND>");
            println!();
            println!("Commands:");
            println!("  run    Plan a trip and execute it");
            println!("  demo   Scripted scenario: floor 0 -> 4 -> -2");
            println!("  plan   Plan only");
            println!();
            println!("Run 'goap --help' for more information.");
            Ok(())
        }
    }
}

fn tick_duration(config: &DemoConfig, tick_ms: Option<u64>) -> Duration {
    Duration::from_millis(tick_ms.unwrap_or(config.tick_ms))
}

async fn run_trip(
    config: &DemoConfig,
    mut state: State,
    goal: State,
    tick_ms: Option<u64>,
) -> Result<()> {
    let registry = elevator::registry();

    println!("Current state:");
    println!("{state}");

    let report = travel(
        &registry,
        config.planner,
        &mut state,
        &goal,
        tick_duration(config, tick_ms),
    )
    .await?;
    print_plan(&report.plan);

    println!("Arrived after {} ticks:", report.ticks);
    println!("{state}");
    Ok(())
}

async fn run_demo(config: &DemoConfig, tick_ms: Option<u64>) -> Result<()> {
    let registry = elevator::registry();
    let tick = tick_duration(config, tick_ms);
    let mut state = elevator::state(0, true);

    println!("Current state:");
    println!("{state}");

    for floor in [4, -2] {
        println!("Heading to floor {floor}, doors open");
        let goal = elevator::state(floor, true);
        let report = travel(&registry, config.planner, &mut state, &goal, tick).await?;
        print_plan(&report.plan);
        println!("{state}");
    }

    println!("Done!");
    Ok(())
}

fn print_plan(plan: &Plan) {
    println!("Plan (cost {}):", plan.cost);
    if plan.is_empty() {
        println!("  (nothing to do)");
    }
    for action in &plan.actions {
        println!("  - {action}");
    }
}

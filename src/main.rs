//! Life engine CLI - Run simulations from a grid file or JSON configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use life_engine::{
    compute::{LifeSession, SessionStats},
    schema::{EdgePolicy, Grid, SimConfig, parse_grid, render_grid},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <grid.txt|config.json> [steps] [bounded|toroidal]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation and print the result.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  grid.txt     Text grid ('1', '#', '*', 'X' = alive, anything else dead)");
        eprintln!("  config.json  JSON simulation configuration (dimensions, policy, seed)");
        eprintln!("  steps        Number of generations (default: 100)");
        eprintln!("  policy       Edge policy for text grids (default: bounded)");
        eprintln!();
        eprintln!("Example configuration is printed with --example.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let (grid, policy) = load_simulation(&path, args.get(3).map(String::as_str));

    println!("Game of Life");
    println!("============");
    println!("Grid: {}x{} ({:?})", grid.rows(), grid.cols(), policy);
    println!("Steps: {}", steps);
    println!();

    let mut session = LifeSession::new(grid, policy);
    let initial = SessionStats::from_session(&session);
    println!("Initial population: {}", initial.population);

    let start = Instant::now();
    session.run(steps);
    let elapsed = start.elapsed();

    let stats = SessionStats::from_session(&session);
    println!(
        "Final population: {} (density {:.4})",
        stats.population, stats.density
    );
    println!(
        "Time: {:.2}ms ({:.1} generations/s)",
        elapsed.as_secs_f32() * 1000.0,
        steps as f32 / elapsed.as_secs_f32()
    );
    println!();

    for line in render_grid(session.grid()) {
        println!("{}", line);
    }
}

/// Load a grid and edge policy from a text grid or JSON config file.
fn load_simulation(path: &Path, policy_arg: Option<&str>) -> (Grid, EdgePolicy) {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path.display(), e);
        std::process::exit(1);
    });

    if path.extension().is_some_and(|ext| ext == "json") {
        let config: SimConfig = serde_json::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        });
        let grid = config.seed.generate(config.rows, config.cols);
        (grid, config.edge_policy)
    } else {
        let grid = parse_grid(contents.lines()).unwrap_or_else(|e| {
            eprintln!("Error parsing grid: {}", e);
            std::process::exit(1);
        });
        let policy = match policy_arg {
            Some("toroidal") => EdgePolicy::Toroidal,
            Some("bounded") | None => EdgePolicy::Bounded,
            Some(other) => {
                eprintln!("Unknown edge policy: {}", other);
                std::process::exit(1);
            }
        };
        (grid, policy)
    }
}

fn print_example_config() {
    let config = SimConfig::default();
    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}

use colored::Colorize;
use std::env;
use std::path::Path;

use generic_collections::config::DemoConfig;
use generic_collections::demo;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => match DemoConfig::load(Path::new(&path)) {
            Ok(config) => {
                eprintln!("{} {}", "✓ Loaded datasets from".green(), path);
                config
            }
            Err(err) => {
                eprintln!("{} {}: {}", "✗ Could not load".red().bold(), path, err);
                return Err(err.into());
            }
        },
        None => DemoConfig::default(),
    };

    println!("{}", "=== Generic Collection Utilities ===".bold());
    for line in demo::run(&config) {
        println!("{}", line);
    }

    Ok(())
}

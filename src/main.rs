use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use genegrid::config::ConfigManager;
use genegrid::model::{validate_generations, Pedigree};
use genegrid::render::Renderer;
use genegrid::types::{MAX_GENERATIONS, MIN_GENERATIONS};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CONFIG_FILE: &str = "genegrid.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("\nGenetic Inheritance Visualization Generator");
    println!("==========================================");

    let manager = ConfigManager::new();
    if Path::new(CONFIG_FILE).exists() {
        manager.load_from_file(CONFIG_FILE)?;
        log::info!("Loaded configuration overrides from {}", CONFIG_FILE);
    }
    let config = manager.get();

    let num_generations = prompt_generations()?;

    let mut rng = match config.inheritance.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let pedigree = Pedigree::build(num_generations, &config.palette, &mut rng)?;
    let svg = Renderer::new(config.layout).render(&pedigree)?;

    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let output_file = PathBuf::from(format!(
        "genetic_inheritance_{}gen_{}.svg",
        num_generations, timestamp
    ));
    std::fs::write(&output_file, &svg)?;

    println!(
        "\nYour {}-generation genetic inheritance diagram has been created!",
        num_generations
    );
    println!("File generated: {}", output_file.display());
    println!("\nThis diagram shows how genetic traits pass from generation to generation,");
    println!("with each person inheriting half their traits from each parent.");
    println!("\nYou can open this SVG file in any web browser to view it.");

    Ok(())
}

/// Ask for a generation count until the user supplies one in range.
/// Validation failures are recoverable here; anything else propagates.
fn prompt_generations() -> anyhow::Result<u32> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(
            "\nEnter number of generations ({}-{}): ",
            MIN_GENERATIONS, MAX_GENERATIONS
        );
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("Input closed before a generation count was supplied");
        }

        match line.trim().parse::<u32>() {
            Ok(n) => match validate_generations(n) {
                Ok(()) => return Ok(n),
                Err(_) => println!(
                    "Please enter a number between {} and {}.",
                    MIN_GENERATIONS, MAX_GENERATIONS
                ),
            },
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

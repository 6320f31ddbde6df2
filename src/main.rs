// main.rs - CLI entry point

use mlst2phyloviz::cli::Config;
use mlst2phyloviz::prelude::*;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
        if !args.quiet {
            println!("📄 Loaded configuration from: {}", config_path);
        }
    }

    // Validate all arguments before touching any input
    let config = validate_args(&args)?;

    if !args.quiet {
        println!("🚀 {}", mlst2phyloviz::get_info());
    }

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !args.quiet {
            println!("🧵 Threads: {}", n);
        }
    }

    let total_start = Instant::now();
    let summary = run_pipeline(&config)?;

    if !args.quiet {
        println!("\n🎉 === CONVERSION COMPLETED ===");
        println!(
            "⏱️  Total execution time: {:.2}s",
            total_start.elapsed().as_secs_f64()
        );
        println!(
            "📊 {} profiles × {} loci for scheme {}",
            summary.written.profiles,
            summary.header.len(),
            summary.selection.target
        );
    }

    Ok(())
}

use clap::Parser;
use ellipse_area::core::batch_pipeline::DryRunSummary;
use ellipse_area::core::ConfigProvider;
use ellipse_area::utils::{logger, validation::Validate};
use ellipse_area::{AreaEngine, AreaError, AxisPolicy, BatchPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-area")]
#[command(about = "Ellipse area batches driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "area-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the axis policy from the config
    #[arg(long, value_enum)]
    policy: Option<AxisPolicy>,

    /// Dry run - show what would be processed without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn fail(e: &AreaError) -> ! {
    tracing::error!(
        "❌ Area batch failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based area batch");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(policy) = args.policy {
        config.validation.policy = policy;
        tracing::info!("🔧 Axis policy overridden to: {:?}", policy);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    display_config_summary(&config, &args);

    let pipeline = BatchPipeline::new(LocalStorage::new("."), config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        match pipeline.dry_run().await {
            Ok(summary) => display_dry_run(&summary),
            Err(e) => fail(&e),
        }
        return Ok(());
    }

    let engine = AreaEngine::new(pipeline);

    match engine.run().await {
        Ok(written) => {
            println!("✅ Area batch completed successfully!");
            for path in written {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        println!("  Description: {}", description);
    }
    println!("  Input: {}", config.input.path);
    println!("  Output: {}", config.output_path());
    println!("  Formats: {:?}", config.output_formats());
    println!("  Axis policy: {:?}", config.axis_policy());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn display_dry_run(summary: &DryRunSummary) {
    println!("🔍 Dry Run Analysis:");
    println!("  Rows: {}", summary.rows);
    println!("  Out-of-domain rows: {}", summary.out_of_domain);
    match summary.policy {
        AxisPolicy::Propagate => println!("  These rows would be computed unguarded"),
        AxisPolicy::Skip => println!("  These rows would be skipped"),
        AxisPolicy::Fail if summary.would_fail() => println!("  The batch would fail"),
        AxisPolicy::Fail => println!("  The batch would succeed"),
    }
    for path in &summary.outputs {
        println!("  Would write: {}", path);
    }
}

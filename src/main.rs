use clap::Parser;
use ellipse_area::utils::{logger, validation::Validate};
use ellipse_area::{AreaEngine, AreaError, BatchPipeline, CliConfig, LocalStorage};

fn fail(e: &AreaError) -> ! {
    tracing::error!(
        "❌ Failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code())
}

fn run_single(config: &CliConfig) -> Result<(), AreaError> {
    let record = config.single_record()?;
    println!("{}", config.render_single(&record)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    if !config.is_batch() {
        if let Err(e) = run_single(&config) {
            fail(&e);
        }
        return Ok(());
    }

    let storage = LocalStorage::new(".");
    let pipeline = BatchPipeline::new(storage, config);
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

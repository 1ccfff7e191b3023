use aid_report::config::Command;
use aid_report::utils::error::{AidError, ErrorSeverity};
use aid_report::utils::{logger, validation::Validate};
use aid_report::{
    CliConfig, LocalStorage, ReportEngine, SearchPipeline, SubsidyConfig, SubsidyPipeline,
};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting aid-report CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(output_path) => {
            tracing::info!("✅ Report completed successfully!");
            println!("✅ Report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

fn run(config: &CliConfig) -> Result<String, AidError> {
    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    match &config.command {
        Command::Search(args) => {
            let search = args.resolve()?;
            search.validate()?;

            let output = LocalStorage::new(&search.output_path);
            let pipeline = SearchPipeline::new(LocalStorage::new(""), output, search);
            ReportEngine::new_with_monitoring(pipeline, config.monitor).run()
        }
        Command::Subsidies(args) => {
            let subsidies = SubsidyConfig::from(args.clone());
            subsidies.validate()?;

            let output = LocalStorage::new(&subsidies.output_path);
            let pipeline = SubsidyPipeline::new(LocalStorage::new(""), output, subsidies);
            ReportEngine::new_with_monitoring(pipeline, config.monitor).run()
        }
    }
}

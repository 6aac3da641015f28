use age_gate::utils::logger;
use age_gate::{AgeClassifier, CliConfig};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 載入配置
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            // 配置無效時以預設等級初始化日誌
            logger::init_cli_logger(config.verbose, None);
            tracing::error!(
                "Configuration failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    tracing::debug!("Resolved settings: {:?}", settings);

    let classifier = AgeClassifier::with_prompt(settings.prompt);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match classifier.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(verdict) => {
            tracing::debug!("Finished with {:?}", verdict);
        }
        Err(e) => {
            tracing::error!(
                "Age check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!();
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }
}

use anyhow::Context;
use clap::Parser;
use small_lambdas::utils::{logger, validation::Validate};
use small_lambdas::{CliConfig, DemoRunner, LambdaError, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting small-lambdas");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let demo_config = match config
        .load_demo_config()
        .and_then(|c| c.validate().map(|_| c))
    {
        Ok(c) => c,
        Err(e) => exit_with(&e),
    };

    let demos = config.selected_demos();
    let mut runner = DemoRunner::new(demo_config);

    let report = match runner.run(&demos) {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    match config.format {
        OutputFormat::Text => {
            for line in report.lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            let json = report.to_json().context("rendering report as JSON")?;
            println!("{}", json);
        }
    }

    tracing::info!("All demos completed");
    Ok(())
}

fn exit_with(e: &LambdaError) -> ! {
    tracing::error!("{} (Category: {:?})", e, e.category());
    tracing::error!("Suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

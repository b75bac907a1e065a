use clap::Parser;
use html_to_page::core::ConfigProvider;
use html_to_page::utils::{logger, validation::Validate};
use html_to_page::{CliConfig, ConversionEngine, ConvertError, LocalStorage, PagePipeline, RuleSet, TomlConfig};
use std::path::Path;

fn main() {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting html-to-page");
    tracing::debug!("CLI config: {:?}", args);

    let exit_code = if args.list_rules {
        match RuleSet::jsx_defaults().to_json() {
            Ok(rules) => {
                println!("{}", rules);
                0
            }
            Err(e) => report_failure(&e),
        }
    } else {
        match &args.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                match TomlConfig::from_file(path) {
                    Ok(config) => run(
                        config.with_overrides(args.input.as_deref(), args.output.as_deref(), args.keep_comments),
                        &args,
                    ),
                    Err(e) => report_failure(&e),
                }
            }
            None => run(args.clone(), &args),
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run<C: ConfigProvider + Validate>(config: C, args: &CliConfig) -> i32 {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return report_failure(&e);
    }

    let pipeline = PagePipeline::new(LocalStorage::default(), config);
    let engine = ConversionEngine::new(pipeline);
    tracing::debug!("Using {} substitution rules", engine.pipeline().rules().len());

    if args.dry_run {
        tracing::info!("DRY RUN MODE - nothing will be written");
        return match engine.render() {
            Ok(document) => {
                println!("{}", document.text());
                0
            }
            Err(e) => report_failure(&e),
        };
    }

    match engine.run() {
        Ok(report) => {
            tracing::info!(
                "Converted {} bytes of body markup ({} replacements)",
                report.body_len,
                report.hits.iter().map(|hit| hit.count).sum::<usize>()
            );
            if let Ok(json) = report.to_json() {
                tracing::debug!("Conversion report: {}", json);
            }
            let name = Path::new(&report.output_path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| report.output_path.clone());
            println!("Successfully converted {}", name);
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &ConvertError) -> i32 {
    tracing::error!(
        "Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

    match e {
        // The not-found notice is the run's status line.
        ConvertError::BodyNotFoundError => println!("{}", e),
        _ => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        }
    }

    e.exit_code()
}

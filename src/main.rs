use clap::Parser;
use nullbound::utils::logger;
use nullbound::{xml, BoundaryChecker, CliConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting nullbound audit");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let discovery = match cli.discovery().and_then(|d| d.validate().map(|_| d)) {
        Ok(discovery) => discovery,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let registry = xml::xml_registry();
    let checker = BoundaryChecker::new(&registry, discovery);
    let report = checker.check();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if report.is_clean() {
        tracing::info!("✅ All boundary fields are explicitly tagged");
    } else {
        tracing::error!("❌ {} violation(s) found", report.violations().len());
        std::process::exit(1);
    }

    Ok(())
}

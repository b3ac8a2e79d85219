use clap::Parser;
use fuel_savings::utils::{logger, validation::Validate};
use fuel_savings::{
    CliConfig, FuelSavingsCalculator, InputSource, OutputFormat, SavingsError, SavingsReport,
};

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> Result<(), SavingsError> {
    let config = cli.effective_config()?;
    let input = config.savings_input()?;

    input
        .validate()
        .inspect_err(|e| tracing::warn!("Input validation failed: {}", e))?;

    if input.entered_mileage().is_none() {
        tracing::info!("No mileage entered yet, nothing to compare");
    }

    let report = FuelSavingsCalculator::compute_savings_report(&input)?;

    match cli.output_format(&config) {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn render_text(report: &SavingsReport) -> String {
    format!(
        "Monthly mileage:     {:.2}\n\
         Trade monthly cost:  {:.2}\n\
         New monthly cost:    {:.2}\n\
         Monthly savings:     {:.2}\n\
         Annual savings:      {:.2}\n\
         3-year savings:      {:.2}\n",
        report.monthly_mileage,
        report.trade_monthly_cost,
        report.new_monthly_cost,
        report.monthly_savings,
        report.annual_savings,
        report.three_year_savings,
    )
}

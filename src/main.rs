use anyhow::Result;
use clap::Parser;
use log::info;

use gr1spec::{AgentConfiguration, AgentSpecification, AgentSpecificationOptions};

mod cli;
use cli::{Commands, Gr1SpecCli, SpecArgs};

fn main() -> Result<()> {
    let cli = Gr1SpecCli::parse();

    setup_logging(&cli.log_level);

    match &cli.command {
        Commands::Build { spec, output } => {
            let specification = build_specification(spec)?;

            let (file_path, _) = specification.write_structured_slugs(output)?;
            ui_summary(spec);
            cli::ui::print_success(&format!(
                "specification written to {}",
                file_path.display()
            ));
        }

        Commands::Preview { spec } => {
            let specification = build_specification(spec)?;
            println!("{}", specification.render());
        }
    }

    Ok(())
}

fn build_specification(args: &SpecArgs) -> Result<gr1spec::Gr1Specification> {
    let config = AgentConfiguration::load(&args.agent, &args.config_dir);

    let options = AgentSpecificationOptions {
        action_outcomes: args.action_outcomes.clone(),
        sm_outcomes: args.sm_outcomes.clone(),
        strict_order: args.strict_order,
        regions_of_interest: args.regions.clone(),
    };

    info!(
        "building specification {} for agent {}",
        args.name, args.agent
    );

    let specification = AgentSpecification::build(
        &args.name,
        &config,
        &args.initial_conditions,
        &args.goals,
        &options,
    )?;

    Ok(specification)
}

fn ui_summary(args: &SpecArgs) {
    cli::ui::print_result("Specification", &args.name);
    cli::ui::print_result("Agent", &args.agent);
    cli::ui::print_result("Goals", &args.goals.join(", "));
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}

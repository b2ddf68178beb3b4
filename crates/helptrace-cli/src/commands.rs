use anyhow::Result;
use is_terminal::IsTerminal;

use super::args::{Cli, Commands, SessionCommand};
use super::handlers;
use crate::config::Config;
use crate::dataset;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let color = std::io::stdout().is_terminal();

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let (dataset, _source) = dataset::load(cli.data.as_deref(), &config, color)?;

    match command {
        Commands::Stats => handlers::stats::handle(&dataset, cli.format, color),
        Commands::Active => handlers::active::handle(&dataset, cli.format, color),
        Commands::Charts => handlers::charts::handle(&dataset, cli.format, color),

        Commands::Session { command } => match command {
            SessionCommand::List {
                query,
                limit,
                tickets_only,
            } => handlers::list::handle(
                &dataset,
                query.as_deref(),
                limit,
                tickets_only,
                cli.format,
                color,
            ),
            SessionCommand::Show {
                session_id,
                section,
            } => handlers::show::handle(&dataset, &session_id, section, cli.format, color),
            SessionCommand::Export { format, output } => {
                handlers::export::handle(&dataset, format, output.as_deref())
            }
        },

        Commands::Dashboard => handlers::dashboard::handle(dataset, &config),
    }
}

fn show_guidance() {
    println!("helptrace - Helpdesk session analytics\n");
    println!("Quick commands:");
    println!("  helptrace stats                   # Dashboard stat cards");
    println!("  helptrace session list            # Browse session history");
    println!("  helptrace session list --query q  # Search sessions");
    println!("  helptrace session show <ID>       # Transcript and AI summary");
    println!("  helptrace dashboard               # Interactive dashboard\n");
    println!("For more commands:");
    println!("  helptrace --help");
}

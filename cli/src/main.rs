mod commands;
mod input;
mod output;
mod terminal;

use commands::CommandLine;
use output::OutputFormat;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = commands.to_config();
    let format = OutputFormat::from(commands.csv.clone());

    let hosts: Vec<String> = input::require_hosts(input::collect_hosts(commands.hosts).await?)?;

    commands::lookup::lookup(hosts, &cfg, &format).await
}

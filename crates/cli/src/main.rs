use clap::Parser;

use boxoffice_cli::config::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    boxoffice_observability::init(cli.log_format);

    let stdout = std::io::stdout();
    boxoffice_cli::run(&cli, &mut stdout.lock())
}

use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;
use routedeck_app::Config;
use routedeck_client::RoutesClient;

pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let client = RoutesClient::new(config.resolve_base_url(cli.url.as_deref()));

    match cli.command {
        Commands::List { name, page, size } => {
            handlers::list::handle(client, &config, name, page, size, cli.format).await
        }
        Commands::Show { id } => handlers::show::handle(client, id, cli.format).await,
        Commands::Create { fields } => {
            handlers::edit::handle_create(client, fields, cli.format).await
        }
        Commands::Update { id, fields } => {
            handlers::edit::handle_update(client, id, fields, cli.format).await
        }
        Commands::Delete { id, yes } => handlers::delete::handle(client, id, yes).await,
        Commands::Watch { name, size } => handlers::watch::handle(client, &config, name, size).await,
    }
}

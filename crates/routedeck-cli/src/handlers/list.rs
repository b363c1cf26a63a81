use crate::args::OutputFormat;
use crate::views::PagePrinter;
use anyhow::Result;
use routedeck_app::{Config, ListController, ViewState};
use routedeck_client::RoutesClient;

pub async fn handle(
    client: RoutesClient,
    config: &Config,
    name: Option<String>,
    page: usize,
    size: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let state = ViewState::new(
        page,
        size.unwrap_or(config.page_size),
        name.unwrap_or_default(),
    );

    let mut controller = ListController::with_state(client, PagePrinter::new(format), state);
    // the placeholder has already been printed; the error sets the exit status
    controller.refresh().await?;
    Ok(())
}

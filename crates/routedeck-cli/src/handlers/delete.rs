use anyhow::Result;
use routedeck_app::ConfirmDelete;
use routedeck_client::{RouteApi, RoutesClient};
use std::io::{BufRead, Write};

/// Interactive y/N prompt on the controlling terminal.
struct StdinConfirm;

impl ConfirmDelete for StdinConfirm {
    fn confirm(&self, id: i64) -> bool {
        print!("Delete route #{}? [y/N] ", id);
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

struct AlwaysConfirm;

impl ConfirmDelete for AlwaysConfirm {
    fn confirm(&self, _id: i64) -> bool {
        true
    }
}

pub async fn handle(client: RoutesClient, id: i64, yes: bool) -> Result<()> {
    let confirm: &dyn ConfirmDelete = if yes { &AlwaysConfirm } else { &StdinConfirm };
    if !confirm.confirm(id) {
        println!("Aborted");
        return Ok(());
    }

    client.delete(id).await?;
    println!("Deleted route #{}", id);
    Ok(())
}

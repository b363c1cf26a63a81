use crate::args::{OutputFormat, RouteFieldArgs};
use anyhow::Result;
use routedeck_app::{EditSession, RouteDraft};
use routedeck_client::RoutesClient;
use routedeck_types::Route;

/// Overlay the supplied field arguments onto a draft, leaving everything
/// else as populated (blank for create, fetched values for update).
fn apply_fields(draft: &mut RouteDraft, fields: RouteFieldArgs) {
    let overlay = |target: &mut String, value: Option<String>| {
        if let Some(v) = value {
            *target = v;
        }
    };
    overlay(&mut draft.name, fields.name);
    overlay(&mut draft.coord_x, fields.coord_x);
    overlay(&mut draft.coord_y, fields.coord_y);
    overlay(&mut draft.from_name, fields.from_name);
    overlay(&mut draft.from_x, fields.from_x);
    overlay(&mut draft.from_y, fields.from_y);
    overlay(&mut draft.to_name, fields.to_name);
    overlay(&mut draft.to_x, fields.to_x);
    overlay(&mut draft.to_y, fields.to_y);
    overlay(&mut draft.distance, fields.distance);
    overlay(&mut draft.rating, fields.rating);
}

fn report(route: &Route, verb: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(route)?),
        OutputFormat::Plain => match route.id {
            Some(id) => println!("{} route #{}", verb, id),
            None => println!("{} route", verb),
        },
    }
    Ok(())
}

pub async fn handle_create(
    client: RoutesClient,
    fields: RouteFieldArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut session = EditSession::default();
    session.open_create();
    if let Some(draft) = session.draft_mut() {
        apply_fields(draft, fields);
    }

    let created = session.submit(&client).await?;
    report(&created, "Created", format)
}

pub async fn handle_update(
    client: RoutesClient,
    id: i64,
    fields: RouteFieldArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut session = EditSession::default();
    // populate from the current record so unspecified fields are preserved
    session.open_edit(&client, id).await?;
    if let Some(draft) = session.draft_mut() {
        apply_fields(draft, fields);
    }

    let updated = session.submit(&client).await?;
    report(&updated, "Updated", format)
}

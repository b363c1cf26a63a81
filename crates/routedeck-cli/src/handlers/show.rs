use crate::args::OutputFormat;
use anyhow::Result;
use routedeck_client::{RouteApi, RoutesClient};
use routedeck_types::{Route, timefmt};

pub async fn handle(client: RoutesClient, id: i64, format: OutputFormat) -> Result<()> {
    let route = client.get(id).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&route)?),
        OutputFormat::Plain => {
            for line in detail_lines(&route) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn detail_lines(route: &Route) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(id) = route.id {
        lines.push(format!("id:          {}", id));
    }
    lines.push(format!("name:        {}", route.name));
    if let Some(c) = route.coordinates {
        lines.push(format!("coordinates: {}, {}", c.x, c.y));
    }
    if let Some(from) = &route.from {
        lines.push(format!("from:        {} ({}, {})", from.name, from.x, from.y));
    }
    if let Some(to) = &route.to {
        let name = to.name.as_deref().unwrap_or("");
        let x = to.x.map(|v| v.to_string()).unwrap_or_default();
        let y = to.y.map(|v| v.to_string()).unwrap_or_default();
        lines.push(format!("to:          {} ({}, {})", name, x, y));
    }
    if let Some(distance) = route.distance {
        lines.push(format!("distance:    {}", distance));
    }
    if let Some(rating) = route.rating {
        lines.push(format!("rating:      {}", rating));
    }
    if let Some(created) = &route.creation_date {
        lines.push(format!("created:     {}", timefmt::normalize(created)));
    }
    lines
}

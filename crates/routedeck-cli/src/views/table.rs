use owo_colors::OwoColorize;
use routedeck_app::ViewState;
use routedeck_types::{Route, timefmt};

const NAME_WIDTH: usize = 20;
const LOCATION_WIDTH: usize = 12;

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

fn cell_opt(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn header_line() -> String {
    format!(
        "{:>6}  {:<name$}  {:<16}  {:<loc$}  {:<loc$}  {:>8}  {:>6}  {:<23}",
        "id",
        "name",
        "coordinates",
        "from",
        "to",
        "distance",
        "rating",
        "created",
        name = NAME_WIDTH,
        loc = LOCATION_WIDTH,
    )
}

fn route_line(route: &Route) -> String {
    let coordinates = route
        .coordinates
        .map(|c| format!("{}, {}", c.x, c.y))
        .unwrap_or_default();
    let from = route
        .from
        .as_ref()
        .map(|l| l.name.as_str())
        .unwrap_or_default();
    let to = route
        .to
        .as_ref()
        .and_then(|l| l.name.as_deref())
        .unwrap_or_default();
    let created = route
        .creation_date
        .as_deref()
        .map(timefmt::normalize)
        .unwrap_or_default();

    format!(
        "{:>6}  {:<name$}  {:<16}  {:<loc$}  {:<loc$}  {:>8}  {:>6}  {:<23}",
        cell_opt(route.id),
        truncate(&route.name, NAME_WIDTH),
        truncate(&coordinates, 16),
        truncate(from, LOCATION_WIDTH),
        truncate(to, LOCATION_WIDTH),
        cell_opt(route.distance),
        cell_opt(route.rating),
        created,
        name = NAME_WIDTH,
        loc = LOCATION_WIDTH,
    )
}

fn footer_line(state: &ViewState) -> String {
    let mut footer = format!("Page {} · size {}", state.page() + 1, state.size());
    if !state.filter().is_empty() {
        footer.push_str(&format!(" · filter \"{}\"", state.filter()));
    }
    footer
}

/// Full table render for one page: header, rows (or the empty-state
/// placeholder), footer. Always a complete replacement of the previous page.
pub fn page_lines(routes: &[Route], state: &ViewState) -> Vec<String> {
    let mut lines = vec![header_line().bold().to_string()];
    if routes.is_empty() {
        lines.push("No data".dimmed().to_string());
    } else {
        for route in routes {
            lines.push(route_line(route));
        }
    }
    lines.push(String::new());
    lines.push(footer_line(state).dimmed().to_string());
    lines
}

/// Inline placeholder for a failed fetch. The view stays interactive; the
/// next poll or gesture retries naturally.
pub fn error_lines(message: &str, state: &ViewState) -> Vec<String> {
    vec![
        message.red().to_string(),
        String::new(),
        footer_line(state).dimmed().to_string(),
    ]
}

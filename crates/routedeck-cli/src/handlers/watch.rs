use crate::views::{AnsiTerminal, ScreenView, TerminalWriter};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use routedeck_app::{AppEvent, Config, ListController, ListPresenter, PageMove, Poller, ViewState};
use routedeck_client::{RouteApi, RoutesClient};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy)]
enum KeyAction {
    NextPage,
    PrevPage,
    ClearFilter,
    Refresh,
    Quit,
}

pub async fn handle(
    client: RoutesClient,
    config: &Config,
    name: Option<String>,
    size: Option<usize>,
) -> Result<()> {
    let state = ViewState::new(
        0,
        size.unwrap_or(config.page_size),
        name.unwrap_or_default(),
    );
    let mut controller =
        ListController::with_state(client, ScreenView::new(AnsiTerminal::new()), state);

    let (event_tx, mut events) = mpsc::channel(16);
    let poller = Poller::start(config.poll_interval(), event_tx);

    let (key_tx, mut keys) = mpsc::channel(16);
    std::thread::spawn(move || read_keys(key_tx));

    terminal::enable_raw_mode()?;
    let _ = controller.refresh().await;

    let result = run_loop(&mut controller, &mut events, &mut keys).await;

    // teardown: the timer must not outlive the view
    poller.stop();
    let _ = terminal::disable_raw_mode();
    AnsiTerminal::new().write_line("");

    result
}

async fn run_loop<A: RouteApi, P: ListPresenter>(
    controller: &mut ListController<A, P>,
    events: &mut mpsc::Receiver<AppEvent>,
    keys: &mut mpsc::Receiver<KeyAction>,
) -> Result<()> {
    // a failed fetch has already painted the placeholder; the view stays up
    // and retries on the next tick or gesture
    loop {
        tokio::select! {
            Some(AppEvent::Tick) = events.recv() => {
                // poll fires with whatever view state is current; it never
                // resets page, size, or filter
                let _ = controller.refresh().await;
            }
            Some(action) = keys.recv() => match action {
                KeyAction::NextPage => {
                    let _ = controller.paginate(PageMove::Next).await;
                }
                KeyAction::PrevPage => {
                    let _ = controller.paginate(PageMove::Prev).await;
                }
                KeyAction::ClearFilter => {
                    let _ = controller.clear_search().await;
                }
                KeyAction::Refresh => {
                    let _ = controller.refresh().await;
                }
                KeyAction::Quit => break,
            },
            else => break,
        }
    }
    Ok(())
}

/// Blocking key reader, bridged into the event loop over a channel.
fn read_keys(tx: mpsc::Sender<KeyAction>) {
    loop {
        if tx.is_closed() {
            return;
        }
        match event::poll(Duration::from_millis(200)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(_) => return,
        }
        let Ok(Event::Key(key)) = event::read() else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyAction::Quit)
            }
            KeyCode::Char('n') | KeyCode::Right => Some(KeyAction::NextPage),
            KeyCode::Char('p') | KeyCode::Left => Some(KeyAction::PrevPage),
            KeyCode::Char('c') => Some(KeyAction::ClearFilter),
            KeyCode::Char('r') => Some(KeyAction::Refresh),
            KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
            _ => None,
        };
        if let Some(action) = action
            && tx.blocking_send(action).is_err()
        {
            return;
        }
    }
}

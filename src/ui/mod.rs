use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use anyhow::{Context, Result};
use futures::channel::mpsc::UnboundedReceiver;
use termion::{
  event::Key,
  raw::{IntoRawMode, RawTerminal},
  screen::AlternateScreen
};
use tokio::time::interval;
use tokio_stream::{once, wrappers::IntervalStream, Stream, StreamExt};
use tracing::debug;
use tui::{backend::TermionBackend, Terminal};

use crate::catalog::Car;
use self::render::{draw, layout};
use self::user_input::user_input;
use self::view::{Flow, View};

mod card;
mod render;
mod user_input;
mod view;

/// Animation frame length
const FRAME: Duration = Duration::from_millis(16);

type TermBackend = TermionBackend<AlternateScreen<RawTerminal<Stdout>>>;

enum Event {
  Key(Key),
  Catalog(Vec<Car>),
  Tick,

  /// stdin is gone, nothing can ever ask to quit again
  InputClosed
}

/// Every source the view reacts to as one stream. Keys end with `InputClosed`,
/// ticks never end.
fn events<K, C>(keys: K, catalog: C) -> impl Stream<Item = Event> + Unpin
where
  K: Stream<Item = Key> + Unpin,
  C: Stream<Item = Vec<Car>> + Unpin
{
  let keys = keys.map(Event::Key).chain(once(Event::InputClosed));
  let catalog = catalog.map(Event::Catalog);
  let ticks = IntervalStream::new(interval(FRAME)).map(|_| Event::Tick);

  keys.merge(catalog).merge(ticks)
}

pub struct UI {
  /// terminal abstraction
  terminal: Terminal<TermBackend>,

  view: View
}

impl UI {
  pub fn new() -> Result<Self> {
    let stdout = io::stdout()
      .into_raw_mode()
      .context("Failed to put terminal into 'raw mode'")?;

    let backend = TermionBackend::new(AlternateScreen::from(stdout));
    let mut terminal = Terminal::new(backend).context("Failed to initialize terminal abstraction")?;

    terminal.clear().context("Failed to clear terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    Ok(UI { terminal, view: View::new() })
  }

  fn render(&mut self) -> Result<()> {
    let area = self.terminal.size().context("Failed to get terminal size")?;
    let areas = layout(area, self.view.showroom.category().is_some());

    // the strip only becomes scrollable once its width is known
    self.view.strip.attach(areas.strip_viewport());

    let view = &self.view;
    self.terminal
      .draw(move |f| draw(f, view, &areas))
      .context("Failed to render")?;

    Ok(())
  }

  /// Handles input, catalog and animation events, redrawing after each one that
  /// changed something. Returns when the user quits.
  pub async fn listen(&mut self, catalog: UnboundedReceiver<Vec<Car>>) -> Result<()> {
    let mut events = events(user_input(), catalog);

    self.render()?;

    while let Some(event) = events.next().await {
      let redraw = match event {
        Event::Key(key) => match self.view.on_key(key) {
          Flow::Quit => break,
          Flow::Continue => true
        },
        Event::Catalog(cars) => {
          self.view.on_catalog(cars);
          true
        },
        Event::Tick => self.view.on_tick(Instant::now()),
        Event::InputClosed => {
          debug!("input closed");
          break;
        }
      };

      if redraw { self.render()?; }
    }

    debug!("leaving catalog view");
    Ok(())
  }
}

impl Drop for UI {
  fn drop(&mut self) {
    // raw mode and the alternate screen restore themselves, the cursor does not
    let _ = self.terminal.show_cursor();
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;
  use futures::channel::mpsc::unbounded;
  use termion::event::Key;
  use tokio_stream::StreamExt;

  use super::{events, Event};
  use crate::catalog::Car;

  #[tokio::test]
  async fn exhausted_input_ends_the_view() {
    let (_catalog_tx, catalog_rx) = unbounded::<Vec<Car>>();
    let mut events = events(tokio_stream::iter(vec![Key::Char('x')]), catalog_rx);

    let mut keys = 0;
    let closed = tokio::time::timeout(Duration::from_secs(2), async {
      while let Some(event) = events.next().await {
        match event {
          Event::Key(_) => keys += 1,
          Event::InputClosed => return true,
          _ => ()
        }
      }
      false
    }).await;

    assert_eq!(closed.ok(), Some(true));
    assert_eq!(keys, 1);
  }

  #[tokio::test]
  async fn catalog_arrives_alongside_keys() {
    let (catalog_tx, catalog_rx) = unbounded::<Vec<Car>>();
    catalog_tx.unbounded_send(vec![]).unwrap();
    let (_key_tx, key_rx) = unbounded::<Key>();
    let mut events = events(key_rx, catalog_rx);

    let delivered = tokio::time::timeout(Duration::from_secs(2), async {
      while let Some(event) = events.next().await {
        if let Event::Catalog(cars) = event { return cars.is_empty(); }
      }
      false
    }).await;

    assert_eq!(delivered.ok(), Some(true));
  }
}

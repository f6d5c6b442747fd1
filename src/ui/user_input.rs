use std::thread;
use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use termion::{event::Key, input::TermRead};

/// Key presses from stdin. termion only reads blocking, so a dedicated thread
/// does the reading and forwards every key until the receiver goes away.
pub fn user_input() -> UnboundedReceiver<Key> {
  let (key_tx, key_rx) = unbounded();

  thread::spawn(move || {
    for key in std::io::stdin().keys().filter_map(Result::ok) {
      if key_tx.unbounded_send(key).is_err() { return; }
    }
  });

  key_rx
}

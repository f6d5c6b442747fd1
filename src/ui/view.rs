use std::time::{Duration, Instant};
use termion::event::Key;
use tracing::{debug, info};

use crate::catalog::Car;
use crate::filter::Showroom;
use crate::scroll::{ScrollDirection, Strip};
use super::card::strip_width;

/// How long a navigation button stays lit after being pressed
const PRESS_HIGHLIGHT: Duration = Duration::from_millis(150);

/// Which selector the up/down keys act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus { Category, SubOption }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow { Continue, Quit }

/// Everything the screen shows, independent of any terminal
#[derive(Debug)]
pub struct View {
  pub showroom: Showroom,
  pub strip: Strip,
  pub focus: Focus,

  /// track the last pressed button for rendering purposes
  pub pressed: Option<(ScrollDirection, Instant)>
}

impl View {
  pub fn new() -> Self {
    View {
      showroom: Showroom::new(),
      strip: Strip::new(),
      focus: Focus::Category,
      pressed: None
    }
  }

  pub fn on_catalog(&mut self, cars: Vec<Car>) {
    info!(count = cars.len(), "showing catalog");
    self.showroom.on_loaded(cars);
    self.refit();
  }

  pub fn on_key(&mut self, key: Key) -> Flow {
    match key {
      Key::Esc => return Flow::Quit,
      Key::Ctrl(k) => match k.to_ascii_lowercase() {
        'c' | 'd' => return Flow::Quit,
        _ => ()
      },

      Key::Up   => self.step_selector(false),
      Key::Down => self.step_selector(true),

      Key::Left  => self.scroll(ScrollDirection::Left),
      Key::Right => self.scroll(ScrollDirection::Right),

      Key::BackTab => self.toggle_focus(),

      Key::Char(k) => match k {
        'q' | 'Q' => return Flow::Quit,
        '\t' => self.toggle_focus(),

        'k' => self.step_selector(false),
        'j' => self.step_selector(true),

        '<' | ',' | 'h' => self.scroll(ScrollDirection::Left),
        '>' | '.' | 'l' => self.scroll(ScrollDirection::Right),

        _ => ()
      },

      _ => ()
    }

    Flow::Continue
  }

  /// Advances animations. Returns whether anything visible changed.
  pub fn on_tick(&mut self, now: Instant) -> bool {
    let mut changed = self.strip.tick();

    if let Some((_, at)) = self.pressed {
      if now.duration_since(at) >= PRESS_HIGHLIGHT {
        self.pressed = None;
        changed = true;
      }
    }

    changed
  }

  fn scroll(&mut self, direction: ScrollDirection) {
    self.pressed = Some((direction, Instant::now()));

    match self.strip.scroll(direction) {
      Some(requested) => debug!(?direction, requested, "scrolling catalog"),
      None => debug!(?direction, "catalog strip not drawn yet, ignoring scroll")
    }
  }

  fn toggle_focus(&mut self) {
    self.focus = match self.focus {
      Focus::Category if self.showroom.category().is_some() => Focus::SubOption,
      _ => Focus::Category
    };
  }

  fn step_selector(&mut self, forward: bool) {
    match (self.focus, forward) {
      (Focus::Category, true)   => self.showroom.next_category(),
      (Focus::Category, false)  => self.showroom.previous_category(),
      (Focus::SubOption, true)  => self.showroom.next_sub_option(),
      (Focus::SubOption, false) => self.showroom.previous_sub_option()
    }

    // the sub-option selector disappears along with the category
    if self.showroom.category().is_none() {
      self.focus = Focus::Category;
    }

    self.refit();
  }

  fn refit(&mut self) {
    self.strip.set_content_width(strip_width(self.showroom.filtered().len()));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::filter::Category;

  fn car(id: &str, model_name: &str, body_type: &str) -> Car {
    Car {
      id: id.into(),
      model_name: model_name.into(),
      body_type: body_type.into(),
      model_type: "mild hybrid".into(),
      image_url: format!("/images/{}.jpg", id)
    }
  }

  fn view() -> View {
    let mut view = View::new();
    view.on_catalog(vec![
      car("xc90", "XC90", "suv"),
      car("s90", "S90", "sedan"),
      car("xc60", "XC60", "suv"),
      car("v90", "V90", "estate")
    ]);
    view
  }

  #[test]
  fn quits_on_exit_keys() {
    for key in [Key::Esc, Key::Char('q'), Key::Ctrl('c'), Key::Ctrl('d')] {
      assert_eq!(view().on_key(key), Flow::Quit);
    }
    assert_eq!(view().on_key(Key::Char('x')), Flow::Continue);
  }

  #[test]
  fn arrows_drive_both_selectors() {
    let mut view = view();

    view.on_key(Key::Down);
    view.on_key(Key::Down);
    assert_eq!(view.showroom.category(), Some(Category::BodyType));

    view.on_key(Key::Char('\t'));
    assert_eq!(view.focus, Focus::SubOption);

    view.on_key(Key::Down);
    assert_eq!(view.showroom.sub_option(), Some("suv"));
    assert_eq!(view.showroom.filtered().len(), 2);
  }

  #[test]
  fn focus_stays_on_category_while_unset() {
    let mut view = view();
    view.on_key(Key::Char('\t'));
    assert_eq!(view.focus, Focus::Category);

    view.on_key(Key::Down);
    view.on_key(Key::Char('\t'));
    assert_eq!(view.focus, Focus::SubOption);
    view.on_key(Key::BackTab);
    assert_eq!(view.focus, Focus::Category);

    // stepping back to the placeholder hides the sub-option selector
    view.on_key(Key::Up);
    assert_eq!(view.showroom.category(), None);
    assert_eq!(view.focus, Focus::Category);
  }

  #[test]
  fn scroll_keys_are_ignored_until_drawn() {
    let mut view = view();
    view.on_key(Key::Right);
    assert!(!view.strip.is_animating());
    assert!(view.pressed.is_some());
  }

  #[test]
  fn scroll_keys_animate_strip_after_draw() {
    let mut view = view();
    view.strip.attach(40);

    view.on_key(Key::Char('>'));
    assert!(view.strip.is_animating());

    let (_, now) = view.pressed.unwrap();
    while view.on_tick(now) {}
    assert_eq!(view.strip.offset(), 40);

    // highlight fades once its time is up
    assert!(view.pressed.is_some());
    assert!(view.on_tick(now + PRESS_HIGHLIGHT * 2));
    assert!(view.pressed.is_none());
  }

  #[test]
  fn filtering_clamps_scroll_position() {
    let mut view = view();
    view.strip.attach(30);
    view.strip.scroll_to(i64::MAX);
    while view.strip.tick() {}
    assert!(view.strip.offset() > 0);

    view.on_key(Key::Down);
    view.on_key(Key::Char('\t'));
    view.on_key(Key::Down);
    assert_eq!(view.showroom.filtered().len(), 1);
    assert_eq!(view.strip.offset(), 0);
  }
}

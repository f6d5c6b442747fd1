use std::ops::Range;
use tui::{
  backend::Backend,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  symbols::line::VERTICAL,
  text::{Span, Spans},
  widgets::{Block, Borders, Paragraph, Tabs},
  Frame
};
use unicode_width::UnicodeWidthStr;

use crate::filter::Category;
use crate::scroll::ScrollDirection;
use super::card::{strip_rows, CARD_HEIGHT};
use super::view::{Focus, View};

const BUTTON_WIDTH: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;

/// Screen regions, computed before each draw so the strip width is known up front
#[derive(Debug, Clone, Copy)]
pub struct Areas {
  pub category: Rect,
  pub sub_option: Option<Rect>,
  pub strip: Rect,
  pub left_button: Rect,
  pub right_button: Rect,
  pub footer: Rect
}

impl Areas {
  /// Columns of catalog visible inside the strip's border
  pub fn strip_viewport(&self) -> u16 {
    self.strip.width.saturating_sub(2)
  }
}

pub fn layout(area: Rect, show_sub_option: bool) -> Areas {
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3),
      Constraint::Length(if show_sub_option { 3 } else { 0 }),
      Constraint::Length(CARD_HEIGHT + 2),
      Constraint::Length(BUTTON_HEIGHT),
      Constraint::Length(1),
      Constraint::Min(0)
    ].as_ref())
    .split(area);

  // buttons sit side by side in the middle of their row
  let row = chunks[3];
  let middle = row.x + row.width / 2;
  let left_button = Rect::new(middle.saturating_sub(BUTTON_WIDTH + 1), row.y, BUTTON_WIDTH, row.height).intersection(row);
  let right_button = Rect::new(middle + 1, row.y, BUTTON_WIDTH, row.height).intersection(row);

  Areas {
    category: chunks[0],
    sub_option: if show_sub_option { Some(chunks[1]) } else { None },
    strip: chunks[2],
    left_button,
    right_button,
    footer: chunks[4]
  }
}

fn selector_block<'a>(title: String, focused: bool) -> Block<'a> {
  Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(if focused { Style::default().fg(Color::Yellow) } else { Style::default() })
}

/// Titles that fit in `width` columns around `selected`, walking back toward
/// the first title before filling forward. Every title costs its width plus
/// padding and divider.
fn visible_window(widths: &[usize], selected: usize, width: usize) -> Range<usize> {
  if widths.is_empty() { return 0..0; }

  let cost = |w: usize| w + 3;
  let selected = selected.min(widths.len() - 1);

  let mut start = selected;
  let mut used = cost(widths[selected]);
  while start > 0 && used + cost(widths[start - 1]) <= width {
    start -= 1;
    used += cost(widths[start]);
  }

  let mut end = selected + 1;
  while end < widths.len() && used + cost(widths[end]) <= width {
    used += cost(widths[end]);
    end += 1;
  }

  start..end
}

/// A one-row selector over `titles` whose selected entry is always on screen
fn selector<'a>(titles: Vec<String>, selected: usize, block: Block<'a>, area: Rect) -> Tabs<'a> {
  let widths: Vec<usize> = titles.iter().map(|t| t.width()).collect();
  let window = visible_window(&widths, selected, usize::from(area.width.saturating_sub(2)));
  let shown = selected.saturating_sub(window.start);

  let titles = titles
    .into_iter()
    .skip(window.start)
    .take(window.len())
    .map(Spans::from)
    .collect();

  Tabs::new(titles)
    .block(block)
    .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .divider(VERTICAL)
    .select(shown)
}

// draw based on state
pub fn draw<B: Backend>(f: &mut Frame<B>, view: &View, areas: &Areas) {
  let showroom = &view.showroom;

  let mut category_titles = vec![String::from("Select Category")];
  category_titles.extend(Category::ALL.iter().map(|c| c.label().to_string()));

  let categories = selector(
    category_titles,
    showroom.category_index(),
    selector_block("Filter by Category".into(), view.focus == Focus::Category),
    areas.category
  );
  f.render_widget(categories, areas.category);

  if let (Some(category), Some(area)) = (showroom.category(), areas.sub_option) {
    let options = showroom.sub_options();
    let selected = showroom.sub_option_index(&options);

    let mut titles = vec![format!("Select {}", category)];
    titles.extend(options);

    let sub_options = selector(
      titles,
      selected,
      selector_block(format!("Select {}", category), view.focus == Focus::SubOption),
      area
    );
    f.render_widget(sub_options, area);
  }

  let strip = Paragraph::new(strip_rows(showroom.filtered()))
    .block(Block::default().title("Catalog").borders(Borders::ALL))
    .scroll((0, view.strip.offset()));
  f.render_widget(strip, areas.strip);

  let lit = |direction| matches!(view.pressed, Some((d, _)) if d == direction);
  let pad = |name, state| {
    Paragraph::new(name)
      .style(
        Style::default()
          .bg(if state { Color::Blue } else { Color::LightBlue })
          .fg(Color::White)
      )
      .alignment(Alignment::Center)
  };
  f.render_widget(pad("\n<", lit(ScrollDirection::Left)), areas.left_button);
  f.render_widget(pad("\n>", lit(ScrollDirection::Right)), areas.right_button);

  let footer = Paragraph::new(Spans::from(vec![
    Span::styled(
      format!(" {} of {} cars", showroom.filtered().len(), showroom.cars().len()),
      Style::default().add_modifier(Modifier::BOLD)
    ),
    Span::styled(
      "   tab focus · ↑/↓ choose · ←/→ scroll · q quit",
      Style::default().fg(Color::DarkGray)
    )
  ]));
  f.render_widget(footer, areas.footer);
}

#[cfg(test)]
mod tests {
  use tui::{backend::TestBackend, Terminal};

  use super::*;
  use crate::catalog::Car;
  use crate::ui::card::CALL_TO_ACTION;

  const WIDTH: u16 = 80;
  const HEIGHT: u16 = 30;

  fn car(id: &str, model_name: &str, body_type: &str) -> Car {
    Car {
      id: id.into(),
      model_name: model_name.into(),
      body_type: body_type.into(),
      model_type: "recharge".into(),
      image_url: format!("/images/{}.jpg", id)
    }
  }

  fn loaded() -> View {
    let mut view = View::new();
    view.on_catalog(vec![
      car("xc90", "XC90", "suv"),
      car("s60", "S60", "sedan"),
      car("c40", "C40", "suv"),
      car("v60", "V60", "estate")
    ]);
    view
  }

  fn screen(view: &mut View) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let areas = layout(Rect::new(0, 0, WIDTH, HEIGHT), view.showroom.category().is_some());
    view.strip.attach(areas.strip_viewport());

    let view = &*view;
    terminal.draw(|f| draw(f, view, &areas)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
      .map(|y| (0..WIDTH).map(|x| buffer.get(x, y).symbol.as_str()).collect::<String>())
      .collect::<Vec<_>>()
      .join("\n")
  }

  #[test]
  fn empty_catalog_shows_controls_only() {
    let text = screen(&mut View::new());

    assert!(text.contains("Select Category"));
    assert!(text.contains("Model Name"));
    assert!(text.contains("0 of 0 cars"));
    assert!(!text.contains(CALL_TO_ACTION));
    assert!(!text.contains("Select modelName"));
  }

  #[test]
  fn loaded_catalog_shows_cards() {
    let text = screen(&mut loaded());

    assert!(text.contains("XC90 recharge"));
    assert!(text.contains("S60 recharge"));
    assert!(text.contains(CALL_TO_ACTION));
    assert!(text.contains("4 of 4 cars"));
  }

  #[test]
  fn sub_option_selector_appears_with_category() {
    let mut view = loaded();
    view.showroom.on_category_change(Some(Category::BodyType));
    view.showroom.on_sub_option_change(Some("suv")).unwrap();

    let text = screen(&mut view);
    assert!(text.contains("Select bodyType"));
    assert!(text.contains("estate"));
    assert!(text.contains("2 of 4 cars"));
    assert!(!text.contains("S60 recharge"));
  }

  #[test]
  fn selected_sub_option_stays_visible_in_long_lists() {
    let mut view = View::new();
    view.on_catalog(
      (0..20)
        .map(|i| car(&format!("m{:02}", i), &format!("Model-{:02}", i), "suv"))
        .collect()
    );
    view.showroom.on_category_change(Some(Category::ModelName));
    view.showroom.on_sub_option_change(Some("Model-19")).unwrap();

    let text = screen(&mut view);
    let selector_row = text.lines().nth(4).unwrap();
    assert!(selector_row.contains("Model-19"), "{}", selector_row);
    assert!(!selector_row.contains("Model-00"));

    // back at the placeholder the list starts from the beginning again
    view.showroom.on_sub_option_change(None).unwrap();
    let text = screen(&mut view);
    let selector_row = text.lines().nth(4).unwrap();
    assert!(selector_row.contains("Select modelName"));
    assert!(selector_row.contains("Model-00"));
  }

  #[test]
  fn window_keeps_selection_and_prefers_the_start() {
    let widths = [5; 10];
    assert_eq!(visible_window(&widths, 0, 32), 0..4);
    assert_eq!(visible_window(&widths, 9, 32), 6..10);
    assert_eq!(visible_window(&widths, 2, 32), 0..4);
    assert_eq!(visible_window(&widths, 3, 4), 3..4);
    assert_eq!(visible_window(&[], 0, 80), 0..0);
  }

  #[test]
  fn scrolled_strip_hides_leading_cards() {
    let mut view = loaded();
    screen(&mut view);

    view.strip.scroll_to(i64::MAX);
    while view.strip.tick() {}

    let text = screen(&mut view);
    assert!(!text.contains("XC90 recharge"));
    assert!(text.contains("V60 recharge"));
  }

  #[test]
  fn buttons_fit_inside_narrow_screens() {
    let areas = layout(Rect::new(0, 0, 6, 30), false);
    assert!(areas.left_button.right() <= 6);
    assert!(areas.right_button.right() <= 6);
  }
}

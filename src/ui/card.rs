use tui::{
  style::{Color, Modifier, Style},
  text::{Span, Spans}
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use crate::catalog::Car;

/// Outer width of a card, borders included
pub const CARD_WIDTH: u16 = 24;

/// Blank columns between neighbouring cards
pub const CARD_GAP: u16 = 2;

pub const CARD_HEIGHT: u16 = 10;

pub const CALL_TO_ACTION: &str = "LEARN > SHOP >";

const INNER_WIDTH: usize = CARD_WIDTH as usize - 4;
const IMAGE_WIDTH: usize = INNER_WIDTH - 2;
const CTA_COLOR: Color = Color::Rgb(0x5a, 0x89, 0xc2);

/// Total columns taken by `count` cards laid side by side
pub fn strip_width(count: usize) -> u16 {
  let stride = usize::from(CARD_WIDTH + CARD_GAP);
  u16::try_from(count.saturating_mul(stride)).unwrap_or(u16::MAX)
}

/// Cuts or pads `text` to exactly `width` terminal columns
fn fit(text: &str, width: usize) -> String {
  let columns = text.width();
  if columns <= width {
    return format!("{}{}", text, " ".repeat(width - columns));
  }

  // leave one column for the ellipsis, a wide char that does not fit becomes padding
  let mut cut = String::new();
  let mut used = 0;
  for ch in text.chars() {
    let w = ch.width().unwrap_or(0);
    if used + w > width.saturating_sub(1) { break; }
    cut.push(ch);
    used += w;
  }

  if width > 0 {
    cut.push('…');
    used += 1;
  }
  cut.push_str(&" ".repeat(width - used));
  cut
}

fn centered(text: &str, width: usize) -> String {
  let columns = text.width().min(width);
  let left = (width - columns) / 2;
  fit(&format!("{}{}", " ".repeat(left), text), width)
}

/// Last path segment of the image reference, what the placeholder frame shows
fn image_name(image_url: &str) -> &str {
  image_url
    .trim_end_matches('/')
    .rsplit('/')
    .next()
    .unwrap_or(image_url)
}

/// A bordered row holding `inner`, whose spans must add up to the inner width
fn framed(inner: Vec<Span<'static>>) -> Vec<Span<'static>> {
  let mut row = Vec::with_capacity(inner.len() + 3);
  row.push(Span::raw("│ "));
  row.extend(inner);
  row.push(Span::raw(" │"));
  row.push(Span::raw(" ".repeat(usize::from(CARD_GAP))));
  row
}

/// The card for `car`, one `Vec<Span>` per terminal row, each exactly
/// `CARD_WIDTH + CARD_GAP` columns wide.
pub fn card_rows(car: &Car) -> Vec<Vec<Span<'static>>> {
  let border = "─".repeat(usize::from(CARD_WIDTH) - 2);
  let gap = " ".repeat(usize::from(CARD_GAP));

  // model name first, the variant gets whatever room is left
  let name = fit(&car.model_name, INNER_WIDTH);
  let name = name.trim_end().to_string();
  let name_len = name.width();
  let variant = if name_len + 1 < INNER_WIDTH {
    fit(&format!(" {}", car.model_type), INNER_WIDTH - name_len)
  } else {
    " ".repeat(INNER_WIDTH - name_len)
  };

  let image_border = "─".repeat(IMAGE_WIDTH);

  vec![
    vec![Span::raw(format!("┌{}┐{}", border, gap))],
    framed(vec![Span::styled(fit(&car.body_type, INNER_WIDTH), Style::default().fg(Color::Gray))]),
    framed(vec![
      Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
      Span::raw(variant)
    ]),
    framed(vec![Span::raw(" ".repeat(INNER_WIDTH))]),
    framed(vec![Span::styled(format!("┌{}┐", image_border), Style::default().fg(Color::DarkGray))]),
    framed(vec![
      Span::styled("│", Style::default().fg(Color::DarkGray)),
      Span::raw(centered(image_name(&car.image_url), IMAGE_WIDTH)),
      Span::styled("│", Style::default().fg(Color::DarkGray))
    ]),
    framed(vec![Span::styled(format!("└{}┘", image_border), Style::default().fg(Color::DarkGray))]),
    framed(vec![Span::raw(" ".repeat(INNER_WIDTH))]),
    framed(vec![Span::styled(fit(CALL_TO_ACTION, INNER_WIDTH), Style::default().fg(CTA_COLOR))]),
    vec![Span::raw(format!("└{}┘{}", border, gap))]
  ]
}

/// Lays the cards side by side: row `r` of the strip is row `r` of every card.
pub fn strip_rows(cars: &[Car]) -> Vec<Spans<'static>> {
  let mut rows: Vec<Vec<Span<'static>>> = vec![vec![]; usize::from(CARD_HEIGHT)];

  for car in cars {
    for (row, spans) in rows.iter_mut().zip(card_rows(car)) {
      row.extend(spans);
    }
  }

  rows.into_iter().map(Spans::from).collect()
}

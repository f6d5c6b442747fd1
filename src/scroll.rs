use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection { Left, Right }

/// Horizontal viewport over the card strip, measured in terminal columns.
/// Behaves like a browser scroll container: requests may overshoot, the
/// offset itself always stays inside the content.
#[derive(Debug, Clone, Default)]
pub struct Strip {
  /// Visible width, known only once the strip has been drawn
  viewport_width: Option<u16>,

  content_width: u16,

  offset: u16,

  /// Where the running animation is heading, equal to `offset` when idle
  target: u16
}

impl Strip {
  pub fn new() -> Self { Self::default() }

  pub fn offset(&self) -> u16 { self.offset }

  pub fn is_animating(&self) -> bool { self.offset != self.target }

  /// Records the visible width, called on every draw
  pub fn attach(&mut self, viewport_width: u16) {
    self.viewport_width = Some(viewport_width);
    self.clamp();
  }

  pub fn set_content_width(&mut self, content_width: u16) {
    self.content_width = content_width;
    self.clamp();
  }

  /// Pages the strip by one viewport width. Returns the requested offset, before
  /// clamping, or `None` if the strip has never been drawn.
  pub fn scroll(&mut self, direction: ScrollDirection) -> Option<i64> {
    let width = i64::from(self.viewport_width?);
    let current = i64::from(self.offset);

    let requested = match direction {
      ScrollDirection::Left  => current - width,
      ScrollDirection::Right => current + width
    };

    self.scroll_to(requested);
    Some(requested)
  }

  /// Starts a smooth scroll toward `target`, clamped to the scrollable range.
  pub fn scroll_to(&mut self, target: i64) {
    let clamped = target.clamp(0, i64::from(self.max_offset()));
    self.target = u16::try_from(clamped).unwrap_or(u16::MAX);
    trace!(requested = target, clamped = self.target, "scroll");
  }

  /// Advances the animation by one frame, easing out toward the target.
  /// Returns whether the offset moved.
  pub fn tick(&mut self) -> bool {
    if !self.is_animating() { return false; }

    let distance = self.target.abs_diff(self.offset);
    let step = ((distance + 2) / 3).max(1);

    self.offset = if self.target > self.offset {
      self.offset + step
    } else {
      self.offset - step
    };

    true
  }

  fn max_offset(&self) -> u16 {
    self.content_width.saturating_sub(self.viewport_width.unwrap_or(0))
  }

  fn clamp(&mut self) {
    let max = self.max_offset();
    self.offset = self.offset.min(max);
    self.target = self.target.min(max);
  }
}

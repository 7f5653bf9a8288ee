use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::shapes::rect::RectRenderer;
use crate::render::shapes::text::TextRenderer;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawList, ZIndex};
use crate::text::{FontId, FontSystem, SYSTEM_FONT_PATHS};

use super::PanelLayout;

const TEXT_SIZE: f32 = 13.0;
const PADDING: f32 = 8.0;
const TITLE_PADDING: f32 = 4.0;

/// Immediate-mode debug overlay.
///
/// Each frame: [`begin_frame`](Self::begin_frame), one or more
/// [`panel`](Self::panel) calls, then [`render`](Self::render) after the scene
/// so the panel lands on top.
pub struct DebugOverlay {
    fonts: FontSystem,
    font: Option<FontId>,
    draw_list: DrawList,
    rects: RectRenderer,
    text: TextRenderer,
}

impl DebugOverlay {
    /// Loads the first available system font. Without one, panels are drawn
    /// without text.
    pub fn new() -> Self {
        let mut fonts = FontSystem::new();
        let font = match fonts.load_first_available(SYSTEM_FONT_PATHS) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("debug overlay has no font: {e}");
                None
            }
        };
        Self::with_font(fonts, font)
    }

    fn with_font(fonts: FontSystem, font: Option<FontId>) -> Self {
        Self {
            fonts,
            font,
            draw_list: DrawList::new(),
            rects: RectRenderer::new(),
            text: TextRenderer::new(),
        }
    }

    pub fn begin_frame(&mut self) {
        self.draw_list.clear();
    }

    /// Records a fixed panel with a title bar and one text line per entry.
    ///
    /// Lines that do not fit are clipped to the panel body.
    pub fn panel<S: AsRef<str>>(&mut self, layout: &PanelLayout, title: &str, lines: &[S]) {
        let rect = layout.rect();
        let line_height = self.line_height();
        let (title_bar, body) = rect.split_top(line_height + 2.0 * TITLE_PADDING);

        self.draw_list.push_rect(ZIndex::PANEL, body, body_color());
        self.draw_list.push_rect(ZIndex::PANEL, title_bar, title_color());

        let Some(font) = self.font else { return };

        self.draw_list.push_clip(title_bar);
        self.draw_list.push_text(
            ZIndex::LABEL,
            title,
            font,
            TEXT_SIZE,
            text_color(),
            Vec2::new(title_bar.origin.x + PADDING, title_bar.origin.y + TITLE_PADDING),
        );
        self.draw_list.pop_clip();

        self.draw_list.push_clip(body);
        let content = body.inset(PADDING);
        for (i, line) in lines.iter().enumerate() {
            let origin = Vec2::new(content.origin.x, content.origin.y + i as f32 * line_height);
            self.draw_list
                .push_text(ZIndex::LABEL, line.as_ref(), font, TEXT_SIZE, text_color(), origin);
        }
        self.draw_list.pop_clip();
    }

    /// Draws everything recorded since [`begin_frame`](Self::begin_frame).
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.draw_list.is_empty() {
            return;
        }
        self.rects.render(ctx, target, &mut self.draw_list);
        self.text.render(ctx, target, &mut self.draw_list, &self.fonts);
    }

    fn line_height(&self) -> f32 {
        match self.font {
            Some(id) => self.fonts.line_height(id, TEXT_SIZE),
            None => TEXT_SIZE,
        }
    }
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new()
    }
}

fn body_color() -> Color {
    Color::from_straight(0.06, 0.06, 0.06, 0.94)
}

fn title_color() -> Color {
    Color::from_straight(0.16, 0.29, 0.48, 1.0)
}

fn text_color() -> Color {
    Color::from_straight(1.0, 1.0, 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::scene::DrawCmd;

    fn fontless() -> DebugOverlay {
        DebugOverlay::with_font(FontSystem::new(), None)
    }

    #[test]
    fn fontless_panel_still_draws_background() {
        let mut overlay = fontless();
        overlay.begin_frame();
        overlay.panel(&PanelLayout::initial(800.0), "Details", &["a", "b"]);

        let rects: Vec<Rect> = overlay
            .draw_list
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Rect(r) => Some(r.rect),
                DrawCmd::Text(_) => None,
            })
            .collect();
        assert_eq!(rects.len(), 2);

        // Title bar and body tile the panel exactly.
        let layout = PanelLayout::initial(800.0).rect();
        let (body, title) = (rects[0], rects[1]);
        assert_eq!(title.origin, layout.origin);
        assert_eq!(body.max(), layout.max());
        assert_eq!(title.size.y + body.size.y, layout.size.y);
    }

    #[test]
    fn begin_frame_discards_previous_panels() {
        let mut overlay = fontless();
        overlay.panel(&PanelLayout::fit(900.0, 300.0), "Details", &["x"]);
        assert!(!overlay.draw_list.is_empty());
        overlay.begin_frame();
        assert!(overlay.draw_list.is_empty());
    }
}

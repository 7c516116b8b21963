/// Vertical anchor of a text block relative to its position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Horizontal anchor of a text block relative to its position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One positioned, aligned text draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextParams<'a> {
    pub x: f32,
    pub y: f32,
    pub valign: VAlign,
    pub halign: HAlign,
    pub text: &'a str,
}

impl<'a> TextParams<'a> {
    pub fn new(text: &'a str, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            valign: VAlign::default(),
            halign: HAlign::default(),
            text,
        }
    }

    pub fn align(mut self, valign: VAlign, halign: HAlign) -> Self {
        self.valign = valign;
        self.halign = halign;
        self
    }
}

/// Draws text and reports its measured `(width, height)` in pixels.
pub trait TextRenderer {
    fn text(&mut self, params: &TextParams<'_>) -> (f32, f32);
}

impl<F> TextRenderer for F
where
    F: FnMut(&TextParams<'_>) -> (f32, f32),
{
    fn text(&mut self, params: &TextParams<'_>) -> (f32, f32) {
        self(params)
    }
}

/// Renderer that only logs draws; reports every text as zero-sized.
#[derive(Debug, Default)]
pub struct LogRenderer {
    draws: u64,
}

impl LogRenderer {
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl TextRenderer for LogRenderer {
    fn text(&mut self, params: &TextParams<'_>) -> (f32, f32) {
        self.draws += 1;
        log::info!(
            "text {:?} at ({:.2}, {:.2}) aligned {:?}/{:?}",
            params.text,
            params.x,
            params.y,
            params.valign,
            params.halign,
        );
        (0.0, 0.0)
    }
}

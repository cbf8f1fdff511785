use dicebag::prelude::*;

/// Character cells per face, border included.
const FACE_WIDTH: usize = 9;
const FACE_HEIGHT: usize = 5;
const GAP: usize = 1;

/// Rasterizes face drawings into plain text, one box per die.
///
/// Colors are dropped; pips become `o` and numerals are written out.
pub struct TextCanvas {
    lines: Vec<Vec<char>>,
    current: Option<(usize, usize, f32, f32, f32)>,
}

impl TextCanvas {
    pub fn for_layout(layout: &DieLayout) -> Self {
        let width = layout.columns as usize * (FACE_WIDTH + GAP);
        let height = layout.rows as usize * FACE_HEIGHT;
        Self {
            lines: vec![vec![' '; width]; height],
            current: None,
        }
    }

    fn put(&mut self, row: usize, col: usize, c: char) {
        if let Some(cell) = self.lines.get_mut(row).and_then(|line| line.get_mut(col)) {
            *cell = c;
        }
    }

    /// Interior cell of the current face for a pixel position.
    fn interior(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (row0, col0, fx, fy, size) = self.current?;
        let cell = |frac: f32, inner: usize| {
            let index = (frac.clamp(0.0, 1.0) * inner as f32) as usize;
            1 + index.min(inner - 1)
        };
        Some((
            row0 + cell((y - fy) / size, FACE_HEIGHT - 2),
            col0 + cell((x - fx) / size, FACE_WIDTH - 2),
        ))
    }

    pub fn render(self) -> String {
        self.lines
            .into_iter()
            .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FaceCanvas for TextCanvas {
    fn fill_square(&mut self, x: f32, y: f32, size: f32, _color: Color) {
        let row0 = (y / size).round() as usize * FACE_HEIGHT;
        let col0 = (x / size).round() as usize * (FACE_WIDTH + GAP);
        self.current = Some((row0, col0, x, y, size));

        let last_row = row0 + FACE_HEIGHT - 1;
        let last_col = col0 + FACE_WIDTH - 1;
        for col in col0..=last_col {
            self.put(row0, col, '-');
            self.put(last_row, col, '-');
        }
        for row in row0 + 1..last_row {
            self.put(row, col0, '|');
            self.put(row, last_col, '|');
            for col in col0 + 1..last_col {
                self.put(row, col, ' ');
            }
        }
        for (row, col) in [(row0, col0), (row0, last_col), (last_row, col0), (last_row, last_col)] {
            self.put(row, col, '+');
        }
    }

    fn fill_circle(&mut self, center_x: f32, center_y: f32, _radius: f32, _color: Color) {
        if let Some((row, col)) = self.interior(center_x, center_y) {
            self.put(row, col, 'o');
        }
    }

    fn draw_text(&mut self, center_x: f32, center_y: f32, text: &str, _font_size: f32, _color: Color) {
        let Some((row, center_col)) = self.interior(center_x, center_y) else {
            return;
        };
        let len = text.chars().count();
        let start = center_col.saturating_sub(len / 2);
        for (i, c) in text.chars().enumerate() {
            self.put(row, start + i, c);
        }
    }
}

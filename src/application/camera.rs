/// Camera manages viewport and zoom for the viewer.
///
/// Screen y grows downward while world y grows upward, so local row `j` of an
/// `nrows`-tall window is drawn at screen row `nrows - 1 - j`.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.1, 20.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.1, 20.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Screen position of the top-left corner of local cell `(i, j)`
    pub fn cell_to_screen(&self, i: usize, j: usize, nrows: usize, cell_size: f32) -> (f32, f32) {
        let size = cell_size * self.zoom;
        let row_from_top = nrows.saturating_sub(j + 1) as f32;
        (i as f32 * size + self.offset_x, row_from_top * size + self.offset_y)
    }

    /// Local cell under a screen position. May fall outside the window.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, nrows: usize, cell_size: f32) -> (i64, i64) {
        let size = cell_size * self.zoom;
        let i = ((screen_x - self.offset_x) / size).floor() as i64;
        let row_from_top = ((screen_y - self.offset_y) / size).floor() as i64;
        (i, nrows as i64 - 1 - row_from_top)
    }

    /// Zoom and center so an `ncols` x `nrows` window fills the viewport
    pub fn fit(&mut self, ncols: usize, nrows: usize, viewport: (f32, f32), cell_size: f32) {
        let (width, height) = viewport;
        let zoom_x = width / (ncols as f32 * cell_size);
        let zoom_y = height / (nrows as f32 * cell_size);
        self.zoom = zoom_x.min(zoom_y).clamp(0.1, 20.0);

        let size = cell_size * self.zoom;
        self.offset_x = (width - ncols as f32 * size) / 2.0;
        self.offset_y = (height - nrows as f32 * size) / 2.0;
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Stage display state.
#[derive(Default)]
pub struct ViewportState {
    /// Wallpaper uploaded to the GPU, shared by every tile.
    pub texture: Option<egui::TextureHandle>,
}

impl ViewportState {
    pub fn clear(&mut self) {
        self.texture = None;
    }
}

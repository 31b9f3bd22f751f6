use image::RgbImage;

use crate::selection_logic::{compose_display, normalize_rect, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    ButtonDown,
    Move,
    ButtonUp,
}

/// Owns the source image and the frame shown for the current drag.
pub struct RegionSelector {
    source: RgbImage,
    display: RgbImage,
    zoomed: Option<RgbImage>,
    state: SelectionState,
}

impl RegionSelector {
    pub fn new(source: RgbImage) -> Self {
        let display = source.clone();
        RegionSelector { source, display, zoomed: None, state: SelectionState::default() }
    }

    /// 处理一次鼠标事件; 坐标不做任何校验
    pub fn handle_pointer_event(&mut self, kind: PointerEvent, x: i32, y: i32) {
        match kind {
            PointerEvent::ButtonDown if !self.state.dragging => {
                self.state.dragging = true;
                self.state.point_a = (x, y);
                log::debug!("drag started at ({x}, {y})");
            }
            PointerEvent::Move if self.state.dragging => {
                self.state.point_b = (x, y);
                let comp = compose_display(&self.source, &self.state);
                log::trace!(
                    "composed {}x{} frame, region {}x{}",
                    comp.display.width(),
                    comp.display.height(),
                    comp.zoomed.width(),
                    comp.zoomed.height()
                );
                self.display = comp.display;
                self.zoomed = Some(comp.zoomed);
            }
            PointerEvent::ButtonUp => {
                if self.state.dragging {
                    self.state.point_b = (x, y);
                    let rect = normalize_rect(self.state.point_a, self.state.point_b);
                    log::debug!("drag ended, selection {:?}-{:?}", rect.top_left(), rect.bottom_right());
                }
                self.state.dragging = false;
            }
            _ => {}
        }
    }

    pub fn current_display_image(&self) -> &RgbImage {
        &self.display
    }

    /// Region from the latest frame, magnified if it was big enough.
    pub fn zoomed_region(&self) -> Option<&RgbImage> {
        self.zoomed.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state
    }
}

// src/input.rs
//
// minifb only exposes polled mouse state; turn it into discrete events.

use minifb::{MouseButton, MouseMode, Window};

use crate::selection::PointerEvent;

#[derive(Debug, Default)]
pub struct PointerTracker {
    down: bool,
    pos: Option<(i32, i32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每帧调用一次, 返回本帧产生的事件
    ///
    /// A move is reported before a button transition of the same frame.
    /// Without a cursor position the last known one is reused.
    pub fn poll(&mut self, down: bool, pos: Option<(f32, f32)>) -> Vec<(PointerEvent, i32, i32)> {
        let mut events = Vec::new();

        if let Some((mx, my)) = pos {
            let p = (mx as i32, my as i32);
            if self.pos != Some(p) {
                self.pos = Some(p);
                events.push((PointerEvent::Move, p.0, p.1));
            }
        }

        if down != self.down {
            self.down = down;
            if let Some((x, y)) = self.pos {
                let kind = if down { PointerEvent::ButtonDown } else { PointerEvent::ButtonUp };
                events.push((kind, x, y));
            }
        }

        events
    }
}

/// Mouse state of a minifb window, coordinates passed through unclamped.
pub fn poll_window(tracker: &mut PointerTracker, window: &Window) -> Vec<(PointerEvent, i32, i32)> {
    let down = window.get_mouse_down(MouseButton::Left);
    let pos = window.get_mouse_pos(MouseMode::Pass);
    tracker.poll(down, pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointerEvent::*;

    #[test]
    fn press_drag_release() {
        let mut t = PointerTracker::new();
        assert_eq!(t.poll(false, Some((5.0, 5.0))), vec![(Move, 5, 5)]);
        assert_eq!(t.poll(true, Some((5.0, 5.0))), vec![(ButtonDown, 5, 5)]);
        assert_eq!(t.poll(true, Some((9.7, 12.2))), vec![(Move, 9, 12)]);
        assert_eq!(t.poll(false, Some((9.0, 12.0))), vec![(ButtonUp, 9, 12)]);
    }

    #[test]
    fn move_comes_before_transition() {
        let mut t = PointerTracker::new();
        t.poll(false, Some((1.0, 1.0)));
        assert_eq!(t.poll(true, Some((3.0, 4.0))), vec![(Move, 3, 4), (ButtonDown, 3, 4)]);
        assert_eq!(t.poll(false, Some((6.0, 4.0))), vec![(Move, 6, 4), (ButtonUp, 6, 4)]);
    }

    #[test]
    fn still_cursor_emits_nothing() {
        let mut t = PointerTracker::new();
        t.poll(true, Some((2.0, 2.0)));
        assert!(t.poll(true, Some((2.0, 2.0))).is_empty());
    }

    #[test]
    fn missing_position_reuses_last() {
        let mut t = PointerTracker::new();
        t.poll(true, Some((4.0, 4.0)));
        assert_eq!(t.poll(false, None), vec![(ButtonUp, 4, 4)]);
    }

    #[test]
    fn press_without_any_position_is_dropped() {
        let mut t = PointerTracker::new();
        assert!(t.poll(true, None).is_empty());
        assert_eq!(t.poll(true, Some((1.0, 2.0))), vec![(Move, 1, 2)]);
    }

    #[test]
    fn outside_coordinates_pass_through() {
        let mut t = PointerTracker::new();
        assert_eq!(t.poll(false, Some((-12.0, 500.0))), vec![(Move, -12, 500)]);
    }
}

/// How far an element leans toward the pointer, as a fraction of the
/// pointer's distance from the element center.
pub const MAGNETIC_DAMPING: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };
}

/// Pointer-following offset for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFollow {
    damping: f64,
    offset: Offset,
    attached: bool,
}

impl Default for PointerFollow {
    fn default() -> Self {
        Self::new(MAGNETIC_DAMPING)
    }
}

impl PointerFollow {
    pub fn new(damping: f64) -> Self {
        Self {
            damping,
            offset: Offset::ZERO,
            attached: true,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn pointer_moved(&mut self, bounds: Bounds, pointer: (f64, f64)) -> Offset {
        if self.attached {
            let (cx, cy) = bounds.center();
            self.offset = Offset {
                dx: (pointer.0 - cx) * self.damping,
                dy: (pointer.1 - cy) * self.damping,
            };
        }
        self.offset
    }

    pub fn pointer_left(&mut self) -> Offset {
        if self.attached {
            self.offset = Offset::ZERO;
        }
        self.offset
    }

    /// The element went away; later pointer events do nothing.
    pub fn detach(&mut self) {
        self.attached = false;
        self.offset = Offset::ZERO;
    }

    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.offset.dx, self.offset.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_at_100() -> Bounds {
        // center (100, 100)
        Bounds::new(80.0, 60.0, 40.0, 80.0)
    }

    fn assert_offset(actual: Offset, dx: f64, dy: f64) {
        assert!((actual.dx - dx).abs() < 1e-9, "dx {} != {dx}", actual.dx);
        assert!((actual.dy - dy).abs() < 1e-9, "dy {} != {dy}", actual.dy);
    }

    #[test]
    fn test_center() {
        assert_eq!(square_at_100().center(), (100.0, 100.0));
    }

    #[test]
    fn test_pointer_offset_is_damped() {
        let mut follow = PointerFollow::default();
        let offset = follow.pointer_moved(square_at_100(), (130.0, 115.0));
        assert_offset(offset, 9.0, 4.5);
        assert_offset(follow.offset(), 9.0, 4.5);
    }

    #[test]
    fn test_offset_recomputed_each_move() {
        let mut follow = PointerFollow::default();
        follow.pointer_moved(square_at_100(), (130.0, 115.0));
        let offset = follow.pointer_moved(square_at_100(), (90.0, 100.0));
        assert_offset(offset, -3.0, 0.0);
    }

    #[test]
    fn test_pointer_leave_resets() {
        let mut follow = PointerFollow::default();
        follow.pointer_moved(square_at_100(), (130.0, 115.0));
        assert_eq!(follow.pointer_left(), Offset::ZERO);
        assert_eq!(follow.css_transform(), "translate(0px, 0px)");
    }

    #[test]
    fn test_detached_is_inert() {
        let mut follow = PointerFollow::default();
        follow.pointer_moved(square_at_100(), (130.0, 115.0));
        follow.detach();

        assert!(!follow.is_attached());
        assert_eq!(
            follow.pointer_moved(square_at_100(), (200.0, 200.0)),
            Offset::ZERO
        );
    }

    #[test]
    fn test_css_transform() {
        let mut follow = PointerFollow::default();
        follow.pointer_moved(square_at_100(), (130.0, 115.0));
        assert_eq!(follow.css_transform(), "translate(9px, 4.5px)");
    }
}

/// Anything with a center point and a full width/height.
pub trait Bounds {
    fn center(&self) -> (f32, f32);
    fn size(&self) -> (f32, f32);

    fn left(&self) -> f32 {
        self.center().0 - self.size().0 / 2.0
    }

    fn right(&self) -> f32 {
        self.center().0 + self.size().0 / 2.0
    }

    fn top(&self) -> f32 {
        self.center().1 - self.size().1 / 2.0
    }

    fn bottom(&self) -> f32 {
        self.center().1 + self.size().1 / 2.0
    }
}

/// Axis-aligned overlap test. Boxes that only touch along an edge still
/// count as colliding; only a strict gap on some axis separates them.
pub fn collides(a: &impl Bounds, b: &impl Bounds) -> bool {
    !(a.right() < b.left() || a.bottom() < b.top() || a.left() > b.right() || a.top() > b.bottom())
}

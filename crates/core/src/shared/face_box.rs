/// A detected face in source-image pixel space.
///
/// Field order follows the detector convention `(top, right, bottom, left)`.
/// Valid boxes satisfy `left < right` and `top < bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceBox {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl FaceBox {
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Integer center, rounding toward the top-left.
    pub fn center(&self) -> (u32, u32) {
        (
            self.left + self.width() / 2,
            self.top + self.height() / 2,
        )
    }

    /// The box with the greatest area; the earliest one wins ties.
    pub fn largest(faces: &[FaceBox]) -> Option<&FaceBox> {
        faces.iter().fold(None, |best: Option<&FaceBox>, f| match best {
            Some(b) if b.area() >= f.area() => Some(b),
            _ => Some(f),
        })
    }
}

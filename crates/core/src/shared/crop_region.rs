use std::fmt;

/// Square sub-rectangle of a source image as `(left, top, right, bottom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRegion {
    pub fn square(left: u32, top: u32, size: u32) -> Self {
        Self {
            left,
            top,
            right: left + size,
            bottom: top + size,
        }
    }

    pub fn size(&self) -> u32 {
        self.right - self.left
    }

    pub fn is_square(&self) -> bool {
        self.right - self.left == self.bottom - self.top
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= width
            && self.bottom <= height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.left..self.right).contains(&x) && (self.top..self.bottom).contains(&y)
    }
}

/// How a crop region was chosen; reported per file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropMethod {
    Face,
    Fallback,
}

impl fmt::Display for CropMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropMethod::Face => write!(f, "face"),
            CropMethod::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropPlan {
    pub region: CropRegion,
    pub method: CropMethod,
}

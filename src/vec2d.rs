/// Row-major 2D grid, `(x, y)` lives at `y * width + x` and row 0 is the top of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Vec2D<T> {
    pub fn from_buffer(width: usize, height: usize, buffer: Vec<T>) -> Vec2D<T> {
        assert_eq!(buffer.len(), width * height);
        Vec2D {
            buffer,
            width,
            height,
        }
    }

}

/// Pixel coordinates of buffer `index` in a grid `width` cells wide.
pub fn coordinates(width: usize, index: usize) -> (usize, usize) {
    (index % width, index / width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let grid = Vec2D::from_buffer(3, 2, (0u8..6).collect());
        assert_eq!(grid.at(2, 1), 5);
        assert_eq!(grid.at(0, 1), 3);
        assert_eq!(coordinates(grid.width, 5), (2, 1));
        assert_eq!(coordinates(grid.width, 2), (2, 0));
    }
}

use super::color::Color;

/// Row-major color grid plus the per-pixel depth record for one render
/// pass. Larger stored depth means nearer; the clear value loses to any
/// finite depth.
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<Color>,
    depth: Vec<f32>,
}

impl Framebuffer {
    pub const DEPTH_CLEAR: f32 = f32::NEG_INFINITY;

    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            color: vec![Color::TRANSPARENT; size],
            depth: vec![Self::DEPTH_CLEAR; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get_color(&self, x: u32, y: u32) -> Option<Color> {
        self.coords_to_index(x, y).map(|i| self.color[i])
    }

    pub fn get_depth(&self, x: u32, y: u32) -> Option<f32> {
        self.coords_to_index(x, y).map(|i| self.depth[i])
    }

    /// Out-of-canvas writes are dropped. Callers clamp their iteration
    /// ranges first; a projected box can still reach past the canvas.
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.coords_to_index(x, y) {
            self.color[i] = color;
        }
    }

    pub fn set_depth(&mut self, x: u32, y: u32, depth: f32) {
        if let Some(i) = self.coords_to_index(x, y) {
            self.depth[i] = depth;
        }
    }

    /// Depth test: store and report true only when `depth` is strictly
    /// greater than the current value. Ties keep the first writer.
    pub fn set_depth_if_greater(&mut self, x: u32, y: u32, depth: f32) -> bool {
        match self.coords_to_index(x, y) {
            Some(i) if depth > self.depth[i] => {
                self.depth[i] = depth;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.color.fill(Color::TRANSPARENT);
        self.depth.fill(Self::DEPTH_CLEAR);
    }

    pub fn colors(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        self.color.iter().enumerate().map(move |(i, c)| {
            let (x, y) = self.index_to_coords(i as u32);
            (x, y, *c)
        })
    }

    fn coords_to_index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((x + y * self.width) as usize)
        } else {
            None
        }
    }

    fn index_to_coords(&self, index: u32) -> (u32, u32) {
        (index % self.width, index / self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cleared() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.get_color(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(fb.get_depth(3, 2), Some(Framebuffer::DEPTH_CLEAR));
    }

    #[test]
    fn rejects_out_of_range_access() {
        let mut fb = Framebuffer::new(4, 3);
        assert_eq!(fb.get_color(4, 0), None);
        assert_eq!(fb.get_depth(0, 3), None);
        fb.set_color(4, 0, Color::WHITE);
        fb.set_depth(0, 3, 1.0);
        assert!(!fb.set_depth_if_greater(7, 7, 1.0));
        // the in-range grid is untouched
        assert!(fb.colors().all(|(_, _, c)| c == Color::TRANSPARENT));
    }

    #[test]
    fn depth_test_larger_wins_strictly() {
        let mut fb = Framebuffer::new(2, 2);
        assert!(fb.set_depth_if_greater(1, 1, -0.5));
        assert_eq!(fb.get_depth(1, 1), Some(-0.5));
        // equal depth never overwrites
        assert!(!fb.set_depth_if_greater(1, 1, -0.5));
        // smaller (farther) loses
        assert!(!fb.set_depth_if_greater(1, 1, -0.9));
        // larger (nearer) wins
        assert!(fb.set_depth_if_greater(1, 1, 0.25));
        assert_eq!(fb.get_depth(1, 1), Some(0.25));
    }

    #[test]
    fn clear_resets_both_grids() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_color(0, 1, Color::WHITE);
        fb.set_depth(0, 1, 0.5);
        fb.clear();
        assert_eq!(fb.get_color(0, 1), Some(Color::TRANSPARENT));
        assert_eq!(fb.get_depth(0, 1), Some(Framebuffer::DEPTH_CLEAR));
    }
}

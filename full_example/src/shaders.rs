use softraster::{Color, PixelStage, StageResult, Vertex};

/// Shades every fragment with its interpolated ambient material color
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbientShading;

impl PixelStage<Vertex> for AmbientShading {
    #[inline]
    fn shade(&self, vertex: &Vertex, _depth: f32) -> StageResult<Color> {
        Ok(vertex.ambient)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ambient_shading() {
        let vertex = Vertex::at(0.0, 0.0, 0.0).with_color(Color::new(0.25, 0.5, 0.75));

        assert_eq!(AmbientShading.shade(&vertex, 0.3).unwrap(), Color::new(0.25, 0.5, 0.75));
    }
}

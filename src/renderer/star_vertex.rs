use crate::particles::StarData;

/// Interleaved per-star vertex for backends that upload a single buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// Convert star buffers to GPU vertex format
pub fn prepare_render_data(stars: &StarData, gpu_buffer: &mut Vec<StarVertex>) {
    gpu_buffer.clear();
    gpu_buffer.reserve(stars.count);

    for i in 0..stars.count {
        gpu_buffer.push(StarVertex {
            position: stars.position(i),
            size: stars.sizes[i],
            color: stars.color(i),
            opacity: stars.opacities[i],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<StarVertex>(), 32);
    }

    #[test]
    fn test_prepare_render_data_reuses_buffer() {
        let mut stars = StarData::new(3);
        stars.set_position(1, [1.0, 2.0, 3.0]);
        stars.set_color(1, [0.5, 0.25, 1.0]);
        stars.sizes[1] = 4.0;
        stars.opacities[1] = 0.5;

        let mut buffer = vec![StarVertex::default(); 10];
        prepare_render_data(&stars, &mut buffer);

        assert_eq!(buffer.len(), 3);
        assert_eq!(
            buffer[1],
            StarVertex {
                position: [1.0, 2.0, 3.0],
                size: 4.0,
                color: [0.5, 0.25, 1.0],
                opacity: 0.5,
            }
        );

        let bytes: &[u8] = bytemuck::cast_slice(&buffer);
        assert_eq!(bytes.len(), 3 * 32);
    }
}

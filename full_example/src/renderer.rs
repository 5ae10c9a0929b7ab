use std::time::Instant;

use anyhow::Result;

use softraster::image_compat::save_resource;
use softraster::{GaussianBlur, Rasterizer, TransformStage, UnsignedColor, Vertex};

use crate::camera::Camera;
use crate::model::Model;
use crate::settings::Settings;
use crate::shaders::AmbientShading;

/// Draws every shape of `model` as seen from `camera`, then blurs the result.
pub fn render_model(settings: &Settings, model: &Model, camera: &Camera) -> Result<Rasterizer<Vertex, UnsignedColor>> {
    let mut rasterizer = Rasterizer::new(settings.width, settings.height)?;

    let start = Instant::now();
    rasterizer.clear_render_target(UnsignedColor::new(0, 0, 0));
    info!("Clear took {:?}", start.elapsed());

    let matrix = camera.projection_matrix() * camera.view_matrix() * model.world_matrix;

    rasterizer.set_vertex_stage(TransformStage::new(matrix));
    rasterizer.set_pixel_stage(AmbientShading);
    rasterizer.set_compute_stage(GaussianBlur::new(settings.blur_config()?)?);

    let start = Instant::now();

    for shape in &model.shapes {
        rasterizer.set_vertex_buffer(shape.vertices.clone());
        rasterizer.set_index_buffer(shape.indices.clone());

        let stats = rasterizer.draw(shape.indices.number_of_elements(), 0)?;

        debug!("Shape {:?}: {:?}", shape.name, stats);
    }

    rasterizer.final_draw()?;

    info!("Render took {:?}", start.elapsed());

    Ok(rasterizer)
}

/// Loads the model and camera described by `settings`, renders them and saves the final image.
pub fn render(settings: &Settings) -> Result<()> {
    let model = Model::load_obj(&settings.model_path)?;
    let camera = Camera::from_settings(settings);

    let rasterizer = render_model(settings, &model, &camera)?;

    save_resource(rasterizer.final_render_target(), &settings.result_path)?;

    info!("Saved result to {}", settings.result_path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::sync::Arc;

    use nalgebra::Matrix4;

    use softraster::{Color, Resource};

    use super::*;
    use crate::model::Shape;

    fn settings() -> Settings {
        Settings {
            width: 16,
            height: 16,
            blur_radius: 1,
            blur_sigma: 1.0,
            ..Settings::default()
        }
    }

    fn quad_model() -> Model {
        let color = Color::new(1.0, 0.5, 0.0);

        let vertices = vec![
            Vertex::at(-1.0, -1.0, 0.0).with_color(color),
            Vertex::at(1.0, -1.0, 0.0).with_color(color),
            Vertex::at(1.0, 1.0, 0.0).with_color(color),
            Vertex::at(-1.0, 1.0, 0.0).with_color(color),
        ];

        Model {
            shapes: vec![Shape {
                name: "quad".to_owned(),
                vertices: Arc::new(Resource::from_vec(vertices)),
                indices: Arc::new(Resource::from_vec(vec![0, 1, 2, 0, 2, 3])),
            }],
            world_matrix: Matrix4::identity(),
        }
    }

    #[test]
    fn test_render_model() {
        let settings = settings();
        let camera = Camera::from_settings(&settings);

        let rasterizer = render_model(&settings, &quad_model(), &camera).unwrap();

        // the quad sits in the middle of the view, the corners stay black
        let center = *rasterizer.render_target().item_at(8, 8).unwrap();
        let corner = *rasterizer.render_target().item_at(0, 0).unwrap();

        assert!(center.r >= 250 && center.g >= 120 && center.b == 0);
        assert_eq!(corner, UnsignedColor::new(0, 0, 0));

        let blurred = *rasterizer.final_render_target().item_at(8, 8).unwrap();
        assert!(blurred.r > 200);
    }

    #[test]
    fn test_render_writes_result() {
        let dir = std::env::temp_dir().join(format!("softraster_render_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tri.obj"), "v -1 -1 0\nv 1 -1 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let settings = Settings {
            model_path: dir.join("tri.obj"),
            result_path: dir.join("result.png"),
            ..settings()
        };

        render(&settings).unwrap();

        assert!(dir.join("result.png").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}

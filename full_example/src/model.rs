use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use nalgebra::{Matrix4, Point3, Vector2, Vector3};

use softraster::{Color, Resource, Vertex};

/// One shape of a model, with its own vertex and index buffer
pub struct Shape {
    pub name: String,
    pub vertices: Arc<Resource<Vertex>>,
    pub indices: Arc<Resource<u32>>,
}

pub struct Model {
    pub shapes: Vec<Shape>,
    pub world_matrix: Matrix4<f32>,
}

fn color(values: Option<[f32; 3]>) -> Color {
    values.map_or(Color::BLACK, |[r, g, b]| Color::new(r, g, b))
}

impl Model {
    /// Loads every shape of an OBJ file, along with its materials if there are any.
    ///
    /// Faces are triangulated, missing normals and texture coordinates are zero,
    /// and shapes without a material are black.
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Model> {
        let path = path.as_ref();

        let (models, materials) = tobj::load_obj(path, &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        }).with_context(|| format!("loading model {}", path.display()))?;

        let materials = materials.unwrap_or_else(|err| {
            warn!("No materials for {}: {}", path.display(), err);
            Vec::new()
        });

        let shapes = models.into_iter().map(|model| {
            let mesh = model.mesh;

            let material = mesh.material_id.and_then(|id| materials.get(id));

            let (ambient, diffuse, emissive) = match material {
                Some(material) => (color(material.ambient), color(material.diffuse), color(material.emissive)),
                None => (Color::BLACK, Color::BLACK, Color::BLACK),
            };

            let vertices: Vec<Vertex> = mesh.positions.chunks_exact(3).enumerate().map(|(i, position)| {
                let normal = mesh.normals.get(i * 3..i * 3 + 3).map_or(Vector3::zeros(), |n| Vector3::new(n[0], n[1], n[2]));
                let uv = mesh.texcoords.get(i * 2..i * 2 + 2).map_or(Vector2::zeros(), |t| Vector2::new(t[0], t[1]));

                Vertex {
                    position: Point3::new(position[0], position[1], position[2]),
                    normal,
                    uv,
                    ambient,
                    diffuse,
                    emissive,
                }
            }).collect();

            debug!("Loaded shape {:?} with {} indices", model.name, mesh.indices.len());

            Shape {
                name: model.name,
                vertices: Arc::new(Resource::from_vec(vertices)),
                indices: Arc::new(Resource::from_vec(mesh.indices)),
            }
        }).collect();

        Ok(Model { shapes, world_matrix: Matrix4::identity() })
    }
}

//! Scene graphs consumed by the two engines.
//!
//! The rasterizer and the ray tracer each take their own scene type; nothing
//! links the two.

use crate::light::Light;
use crate::model::ModelInstance;
use crate::sphere::Sphere;

/// Meshes placed in the world plus the lights that shine on them.
#[derive(Clone, Debug, Default)]
pub struct RasterScene {
    pub instances: Vec<ModelInstance>,
    pub lights: Vec<Light>,
}

impl RasterScene {
    pub fn new(instances: Vec<ModelInstance>, lights: Vec<Light>) -> Self {
        Self { instances, lights }
    }
}

/// Spheres plus lights, for the ray tracer.
#[derive(Clone, Debug, Default)]
pub struct TraceScene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl TraceScene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }
}

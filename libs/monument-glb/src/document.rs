//! # glTF Document
//!
//! Typed model of the JSON chunk. Field order matches the serialized key
//! order. Optional fields are skipped when absent so the writer's output is
//! stable, and default when missing so the reader accepts files written by
//! other exporters.

use config::constants::{
    ASSET_GENERATOR, ASSET_VERSION, COMPONENT_FLOAT, COMPONENT_UNSIGNED_SHORT, MATERIAL_BASE_COLOR,
    MATERIAL_METALLIC, MATERIAL_NAME, MATERIAL_ROUGHNESS,
};
use serde::{Deserialize, Serialize, Serializer};

/// Accessor element type for three-component attributes.
pub const TYPE_VEC3: &str = "VEC3";

/// Accessor element type for index data.
pub const TYPE_SCALAR: &str = "SCALAR";

/// A float written the way JavaScript's `JSON.stringify` writes numbers:
/// integral values carry no fractional part (`1`, not `1.0`).
///
/// # Example
///
/// ```rust
/// use monument_glb::document::JsNumber;
///
/// assert_eq!(serde_json::to_string(&JsNumber(1.0)).unwrap(), "1");
/// assert_eq!(serde_json::to_string(&JsNumber(-0.0)).unwrap(), "0");
/// assert_eq!(serde_json::to_string(&JsNumber(0.05)).unwrap(), "0.05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct JsNumber(pub f64);

/// Largest magnitude below which every integral f64 is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for JsNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl From<f64> for JsNumber {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub nodes: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indices: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<usize>,
}

/// Vertex attribute accessor indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "POSITION")]
    pub position: usize,
    #[serde(rename = "NORMAL", default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<usize>,
    #[serde(rename = "COLOR_0", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub double_sided: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    pub base_color_factor: [JsNumber; 4],
    pub metallic_factor: JsNumber,
    pub roughness_factor: JsNumber,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    pub byte_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    pub buffer: usize,
    #[serde(default)]
    pub byte_offset: usize,
    pub byte_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_stride: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub buffer_view: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,
    pub component_type: u32,
    pub count: usize,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec<JsNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec<JsNumber>>,
}

impl Accessor {
    /// Float VEC3 accessor over `buffer_view`.
    pub fn vec3(buffer_view: usize, count: usize) -> Self {
        Self {
            buffer_view,
            byte_offset: None,
            component_type: COMPONENT_FLOAT,
            count,
            kind: TYPE_VEC3.to_string(),
            min: None,
            max: None,
        }
    }

    /// Unsigned short SCALAR accessor over `buffer_view`.
    pub fn indices(buffer_view: usize, count: usize) -> Self {
        Self {
            component_type: COMPONENT_UNSIGNED_SHORT,
            kind: TYPE_SCALAR.to_string(),
            ..Self::vec3(buffer_view, count)
        }
    }

    /// Attaches per-axis bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: [f64; 3], max: [f64; 3]) -> Self {
        self.min = Some(min.iter().copied().map(JsNumber).collect());
        self.max = Some(max.iter().copied().map(JsNumber).collect());
        self
    }
}

/// The complete JSON chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GltfDocument {
    pub asset: Asset,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub meshes: Vec<Mesh>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub buffers: Vec<Buffer>,
    #[serde(default)]
    pub buffer_views: Vec<BufferView>,
    #[serde(default)]
    pub accessors: Vec<Accessor>,
}

impl GltfDocument {
    /// Single-scene, single-mesh document with the shared low-poly material.
    ///
    /// Accessors are expected in the order position, normal, color, indices.
    pub fn single_mesh(
        byte_length: usize,
        buffer_views: Vec<BufferView>,
        accessors: Vec<Accessor>,
    ) -> Self {
        Self {
            asset: Asset {
                version: ASSET_VERSION.to_string(),
                generator: Some(ASSET_GENERATOR.to_string()),
            },
            scenes: vec![Scene { nodes: vec![0] }],
            nodes: vec![Node { mesh: Some(0) }],
            meshes: vec![Mesh {
                primitives: vec![Primitive {
                    attributes: Attributes {
                        position: 0,
                        normal: Some(1),
                        color: Some(2),
                    },
                    indices: Some(3),
                    material: Some(0),
                }],
            }],
            materials: vec![Material::low_poly()],
            buffers: vec![Buffer { byte_length }],
            buffer_views,
            accessors,
        }
    }

    /// The first primitive of the first mesh.
    pub fn primary_primitive(&self) -> Option<&Primitive> {
        self.meshes.first()?.primitives.first()
    }
}

impl Material {
    /// Double-sided, slightly metallic, fairly rough; tint comes from vertex
    /// colors.
    pub fn low_poly() -> Self {
        Self {
            name: Some(MATERIAL_NAME.to_string()),
            double_sided: true,
            pbr_metallic_roughness: Some(PbrMetallicRoughness {
                base_color_factor: MATERIAL_BASE_COLOR.map(|c| JsNumber(f64::from(c))),
                metallic_factor: JsNumber(MATERIAL_METALLIC),
                roughness_factor: JsNumber(MATERIAL_ROUGHNESS),
            }),
        }
    }
}

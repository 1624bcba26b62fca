#[non_exhaustive]
pub struct TransformModel;

impl TransformModel {
    pub const GEN4_IMAGE: &'static str = "runwayml/gen4-image";
}

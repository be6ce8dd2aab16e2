use serde::Serialize;

use crate::renderer::RendererKind;

#[derive(Serialize, Debug)]
pub struct JsonRecord<'a> {
    pub schema: &'static str,
    pub image: String,
    pub index: u32,
    pub seed: u64,
    pub renderer: RendererKind,
    pub palette: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_sigma: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,
    pub format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
}

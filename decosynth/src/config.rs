use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct DecorationCfg {
    pub out_dir: PathBuf,
    pub count: u32,
    pub progress_every: u32,
}

impl Default for DecorationCfg {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("elements/decorations"),
            count: 200,
            progress_every: 50,
        }
    }
}

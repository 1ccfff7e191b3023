use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Sort direction applied to the found projects before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
    /// Skip sorting; the order left by dedup is unspecified.
    Input,
}

pub trait ConfigProvider {
    fn sources(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn report_name(&self) -> String;
    fn keyword(&self) -> &str;
    fn country(&self) -> &str;
    fn include_zero(&self) -> bool;
    fn sort_order(&self) -> SortOrder;
    fn report_formats(&self) -> &[String];
}

pub trait Pipeline {
    type Extracted;
    type Transformed;

    fn extract(&self) -> Result<Self::Extracted>;
    fn transform(&self, data: Self::Extracted) -> Result<Self::Transformed>;
    fn load(&self, result: Self::Transformed) -> Result<String>;
}

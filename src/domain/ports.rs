use crate::domain::model::{BodyFragment, OutputDocument};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn strip_comments(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<BodyFragment>;
    fn transform(&self, body: BodyFragment) -> Result<OutputDocument>;
    fn load(&self, document: OutputDocument) -> Result<String>;
}

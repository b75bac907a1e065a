pub mod etl;
pub mod extract;
pub mod pipeline;
pub mod rules;
pub mod template;

pub use crate::domain::model::{
    BodyFragment, ConversionReport, OutputDocument, RawMarkup, RewrittenFragment, RuleHit,
    SourceDocument,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

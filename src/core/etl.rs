use crate::core::{ConversionReport, OutputDocument, Pipeline};
use crate::utils::error::Result;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<ConversionReport> {
        let (body_len, document) = self.extract_and_transform()?;
        let hits = document.hits.clone();

        // Load
        tracing::info!("Loading page...");
        let output_path = self.pipeline.load(document)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(ConversionReport {
            output_path,
            body_len,
            hits,
        })
    }

    /// Runs extract and transform only; nothing is written.
    pub fn render(&self) -> Result<OutputDocument> {
        self.extract_and_transform().map(|(_, document)| document)
    }

    fn extract_and_transform(&self) -> Result<(usize, OutputDocument)> {
        tracing::info!("Starting conversion...");

        // Extract
        tracing::info!("Extracting body...");
        let body = self.pipeline.extract()?;
        let body_len = body.len();
        tracing::info!("Extracted {} bytes of body markup", body_len);

        // Transform
        tracing::info!("Transforming body...");
        let document = self.pipeline.transform(body)?;
        tracing::info!("Rendered page of {} bytes", document.text().len());

        Ok((body_len, document))
    }
}

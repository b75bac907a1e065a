use crate::core::extract::{extract_body, strip_comments, strip_embedded_scripts};
use crate::core::rules::{apply_substitutions, RuleSet};
use crate::core::template::{wrap, PageTemplate};
use crate::core::{BodyFragment, ConfigProvider, OutputDocument, Pipeline, SourceDocument, Storage};
use crate::utils::error::{ConvertError, Result};

pub struct PagePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rules: RuleSet,
    template: PageTemplate,
}

impl<S: Storage, C: ConfigProvider> PagePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_rules(storage, config, RuleSet::jsx_defaults())
    }

    pub fn with_rules(storage: S, config: C, rules: RuleSet) -> Self {
        Self {
            storage,
            config,
            rules,
            template: PageTemplate::default(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read_source(&self) -> Result<SourceDocument> {
        let path = self.config.input_path();
        tracing::debug!("Reading source document: {}", path);

        let bytes = self.storage.read_file(path).map_err(|e| match e {
            ConvertError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                ConvertError::SourceNotFoundError {
                    path: path.to_string(),
                }
            }
            other => other,
        })?;

        let text = String::from_utf8(bytes).map_err(|_| ConvertError::EncodingError {
            path: path.to_string(),
        })?;

        Ok(SourceDocument::new(path, text))
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for PagePipeline<S, C> {
    fn extract(&self) -> Result<BodyFragment> {
        let source = self.read_source()?;
        let body = extract_body(&source)?;
        tracing::debug!(
            "Extracted {} of {} bytes from {}",
            body.len(),
            source.text.len(),
            source.path
        );
        Ok(body)
    }

    fn transform(&self, body: BodyFragment) -> Result<OutputDocument> {
        let mut fragment = strip_embedded_scripts(body.as_str());

        if self.config.strip_comments() {
            fragment = strip_comments(&fragment);
        }

        let rewritten = apply_substitutions(&fragment, &self.rules);
        tracing::debug!(
            "Applied {} rules, {} replacements",
            self.rules.len(),
            rewritten.total_replacements()
        );

        let hits = rewritten.hits.clone();
        Ok(wrap(rewritten, &self.template).with_hits(hits))
    }

    fn load(&self, document: OutputDocument) -> Result<String> {
        let output_path = self.config.output_path();
        tracing::debug!("Writing {} bytes to {}", document.text().len(), output_path);

        self.storage
            .write_file(output_path, document.text().as_bytes())?;

        Ok(output_path.to_string())
    }
}

use crate::domain::model::{OutputDocument, RawMarkup};

/// The fixed Next.js page the converted body is embedded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub stylesheet: String,
    pub component_name: String,
    pub root_class: String,
    pub script_src: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self {
            stylesheet: "./soltio.css".to_string(),
            component_name: "Home".to_string(),
            root_class: "bg-[#05050f] text-white min-h-screen".to_string(),
            script_src: "/script.js".to_string(),
        }
    }
}

impl PageTemplate {
    pub fn render(&self, body: &RawMarkup) -> OutputDocument {
        let page = format!(
            r#"import Script from 'next/script';
import '{stylesheet}';
import Link from 'next/link';

export default function {component}() {{
  return (
    <div className="{root_class}">
      <Script src="{script_src}" strategy="afterInteractive" />
      {body}
    </div>
  );
}}
"#,
            stylesheet = self.stylesheet,
            component = self.component_name,
            root_class = self.root_class,
            script_src = self.script_src,
            body = body.as_str(),
        );

        OutputDocument::new(&page)
    }
}

pub fn wrap(fragment: impl Into<RawMarkup>, template: &PageTemplate) -> OutputDocument {
    template.render(&fragment.into())
}

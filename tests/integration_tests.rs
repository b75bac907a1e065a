use anyhow::Result;
use html_to_page::{CliConfig, ConversionEngine, ConvertError, LocalStorage, PagePipeline, TomlConfig};
use std::fs;
use tempfile::TempDir;

const EXPECTED_PAGE: &str = r#"import Script from 'next/script';
import './soltio.css';
import Link from 'next/link';

export default function Home() {
  return (
    <div className="bg-[#05050f] text-white min-h-screen">
      <Script src="/script.js" strategy="afterInteractive" />
      <div className="a"><br /></div>
    </div>
  );
}"#;

fn cli_config(input: &str, output: &str) -> CliConfig {
    CliConfig {
        input: Some(input.to_string()),
        output: Some(output.to_string()),
        ..CliConfig::default()
    }
}

#[test]
fn test_end_to_end_conversion() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    fs::write(
        temp_dir.path().join("index.html"),
        "<!DOCTYPE html>\n<html><head><title>x</title></head><body><div class=\"a\"><br></div></body></html>\n",
    )?;

    let pipeline = PagePipeline::new(
        LocalStorage::new(base),
        cli_config("index.html", "src/app/page.tsx"),
    );
    let report = ConversionEngine::new(pipeline).run()?;

    assert_eq!(report.output_path, "src/app/page.tsx");
    assert_eq!(report.body_len, "<div class=\"a\"><br></div>".len());

    let written = fs::read_to_string(temp_dir.path().join("src/app/page.tsx"))?;
    assert_eq!(written, EXPECTED_PAGE);
    Ok(())
}

#[test]
fn test_missing_body_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    fs::write(temp_dir.path().join("index.html"), "<html><main>no body</main></html>")?;

    let pipeline = PagePipeline::new(LocalStorage::new(base), cli_config("index.html", "page.tsx"));
    let err = ConversionEngine::new(pipeline).run().unwrap_err();

    assert!(matches!(err, ConvertError::BodyNotFoundError));
    assert_eq!(err.to_string(), "Could not find body");
    assert_eq!(err.exit_code(), 1);
    assert!(!temp_dir.path().join("page.tsx").exists());
    Ok(())
}

#[test]
fn test_missing_body_keeps_existing_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    fs::write(temp_dir.path().join("index.html"), "<body>unterminated")?;
    fs::write(temp_dir.path().join("page.tsx"), "previous")?;

    let pipeline = PagePipeline::new(LocalStorage::new(base), cli_config("index.html", "page.tsx"));
    assert!(ConversionEngine::new(pipeline).run().is_err());

    assert_eq!(fs::read_to_string(temp_dir.path().join("page.tsx"))?, "previous");
    Ok(())
}

#[test]
fn test_missing_source_document() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();

    let pipeline = PagePipeline::new(LocalStorage::new(base), cli_config("index.html", "page.tsx"));
    let err = ConversionEngine::new(pipeline).run().unwrap_err();

    assert!(matches!(err, ConvertError::SourceNotFoundError { .. }));
    assert_eq!(err.exit_code(), 3);
    Ok(())
}

#[test]
fn test_existing_output_is_overwritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    fs::write(temp_dir.path().join("index.html"), "<body><p>new</p></body>")?;
    fs::write(temp_dir.path().join("page.tsx"), "stale content")?;

    let pipeline = PagePipeline::new(LocalStorage::new(base), cli_config("index.html", "page.tsx"));
    ConversionEngine::new(pipeline).run()?;

    let written = fs::read_to_string(temp_dir.path().join("page.tsx"))?;
    assert!(!written.contains("stale content"));
    assert!(written.contains("      <p>new</p>\n"));
    Ok(())
}

#[test]
fn test_realistic_page() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    let html = r#"<html>
<head><script src="/head.js"></script></head>
<body>
    <!-- navigation -->
    <nav class="nav">
        <svg viewBox="0 0 24 24" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 6h16"/></svg>
    </nav>
    <section class="hero">
        <div class="bar" style="width: 59%;"></div>
        <div class="bar" style="width: 30%"></div>
        <div class="bar" style="width: 20%"></div>
        <img class="shot" style="height: 80%" src="/a.png">
        <div style="width: 10%"></div>
        Line one<br>Line two
    </section>
    <script>
        document.querySelector('.nav').classList.add('ready');
    </script>
</body>
</html>"#;
    fs::write(temp_dir.path().join("index.html"), html)?;

    let pipeline = PagePipeline::new(LocalStorage::new(base), cli_config("index.html", "page.tsx"));
    let engine = ConversionEngine::new(pipeline);
    assert_eq!(engine.pipeline().rules().len(), 9);
    let page = engine.render()?;
    let text = page.text();

    assert!(text.contains(r#"<nav className="nav">"#));
    assert!(text.contains(r#"strokeWidth="2" strokeLinecap="round" strokeLinejoin="round""#));
    assert!(text.contains(r#"<div className="bar" style={{ width: "59%" }}></div>"#));
    assert!(text.contains(r#"<div className="bar" style={{ width: "30%" }}></div>"#));
    assert!(text.contains(r#"<div className="bar" style={{ width: "20%" }}></div>"#));
    assert!(text.contains(r#"<img className="shot" style={{ height: "80%" }} src="/a.png">"#));
    assert!(text.contains(r#"<div style="width: 10%"></div>"#));
    assert!(text.contains("Line one<br />Line two"));
    assert!(!text.contains("querySelector"));
    assert!(!text.contains("head.js"));
    assert!(!text.contains("<!--"));
    assert!(!text.replace("className=\"", "").contains("class=\""));

    // render never writes
    assert!(!temp_dir.path().join("page.tsx").exists());
    Ok(())
}

#[test]
fn test_toml_config_drives_pipeline() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_str().unwrap().to_string();
    fs::create_dir_all(temp_dir.path().join("site"))?;
    fs::write(
        temp_dir.path().join("site/index.html"),
        "<body><!-- kept --><span class=\"k\"></span></body>",
    )?;

    let config = TomlConfig::from_toml_str(
        r#"
[source]
input_path = "site/index.html"

[load]
output_path = "web/page.jsx"

[transform]
strip_comments = false
"#,
    )?;

    let pipeline = PagePipeline::new(LocalStorage::new(base), config);
    let report = ConversionEngine::new(pipeline).run()?;
    assert_eq!(report.output_path, "web/page.jsx");

    let written = fs::read_to_string(temp_dir.path().join("web/page.jsx"))?;
    assert!(written.contains(r#"<!-- kept --><span className="k"></span>"#));
    Ok(())
}

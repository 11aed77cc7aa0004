//! HTML rendering for the single-page web interface.

use base64::Engine;

use crate::ocr::{ExtractionError, ExtractionResult};
use crate::utils::{accept_attribute, format_size, html_escape, sniff_image_mime};

use super::upload::{ImageUpload, IMAGE_FIELD};

/// Stylesheet for the web interface.
pub const CSS: &str = include_str!("styles.css");

/// Shows the picked file before submitting and disables the button while waiting.
const PREVIEW_JS: &str = r#"
const input = document.getElementById('image-input');
const preview = document.getElementById('preview');
input.addEventListener('change', () => {
    const file = input.files[0];
    if (!file) { preview.innerHTML = ''; return; }
    const url = URL.createObjectURL(file);
    preview.innerHTML = '<figure><img alt="Uploaded Image"><figcaption>Uploaded Image</figcaption></figure>';
    preview.querySelector('img').src = url;
    const info = document.getElementById('extract-info');
    if (info) info.style.display = 'none';
});
document.getElementById('upload-form').addEventListener('submit', () => {
    const button = document.getElementById('extract-button');
    button.disabled = true;
    button.textContent = 'Processing image...';
});
"#;

/// Full page wrapper: header, upload sidebar, main area and footer.
pub fn base_template(model: &str, sidebar: &str, main: &str) -> String {
    let model = html_escape(model);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{model} OCR</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <div class="app">
        <aside>{sidebar}</aside>
        <main>
            <header>
                <h1>{model} OCR Vision</h1>
                <p>Extract and analyze text from images</p>
            </header>
            {main}
        </main>
        <footer>Powered by {model} | Local OCR Extraction</footer>
    </div>
    <script>{js}</script>
</body>
</html>"#,
        model = model,
        sidebar = sidebar,
        main = main,
        js = PREVIEW_JS,
    )
}

/// Upload form with optional preview of a previously submitted image.
fn upload_sidebar(previous: Option<&ImageUpload>) -> String {
    let preview = previous.map(image_preview).unwrap_or_default();
    format!(
        r#"<h2>Upload Image</h2>
<form id="upload-form" method="post" action="/extract" enctype="multipart/form-data">
    <input id="image-input" type="file" name="{field}" accept="{accept}" required>
    <div id="preview" class="preview">{preview}</div>
    <button id="extract-button" class="primary" type="submit">Extract Text</button>
</form>"#,
        field = IMAGE_FIELD,
        accept = accept_attribute(),
        preview = preview,
    )
}

fn image_preview(upload: &ImageUpload) -> String {
    let data = base64::engine::general_purpose::STANDARD.encode(&upload.bytes);
    format!(
        r#"<figure><img alt="Uploaded Image" src="data:{mime};base64,{data}"><figcaption>{name} ({size})</figcaption></figure>"#,
        mime = sniff_image_mime(&upload.bytes),
        data = data,
        name = html_escape(&upload.filename),
        size = format_size(upload.bytes.len() as u64),
    )
}

fn alert(kind: &str, message: &str) -> String {
    format!(
        r#"<div class="alert {}">{}</div>"#,
        kind,
        html_escape(message)
    )
}

/// Landing page, optionally showing a form error.
pub fn upload_page(model: &str, error: Option<&str>) -> String {
    let mut main = String::new();
    if let Some(error) = error {
        main.push_str(&alert("error", error));
    }
    main.push_str(r#"<div id="extract-info" class="alert info">Upload an image to begin text extraction.</div>"#);
    base_template(model, &upload_sidebar(None), &main)
}

/// Results panel: raw text, metrics and, when present, detected entities.
pub fn results_section(result: &ExtractionResult) -> String {
    let mut html = format!(
        r#"<section id="results">
    <h2>Extracted Text</h2>
    <pre class="code"><code>{text}</code></pre>
    <div class="metrics">
        <div class="metric"><div class="label">Lines</div><div class="value">{lines}</div></div>
        <div class="metric"><div class="label">Words</div><div class="value">{words}</div></div>
    </div>"#,
        text = html_escape(&result.raw_text),
        lines = result.line_count,
        words = result.word_count,
    );

    if !result.entities.is_empty() {
        let json = serde_json::to_string_pretty(&result.entities).unwrap_or_default();
        html.push_str(&format!(
            r#"
    <section id="entities">
        <h2>Detected Entities</h2>
        <pre class="code"><code>{}</code></pre>
    </section>"#,
            html_escape(&json)
        ));
    }

    html.push_str("\n</section>");
    html
}

/// Page shown after a successful extraction.
pub fn results_page(model: &str, upload: &ImageUpload, result: &ExtractionResult) -> String {
    base_template(model, &upload_sidebar(Some(upload)), &results_section(result))
}

/// Page shown when the recognizer failed; no results panel.
pub fn failure_page(model: &str, upload: &ImageUpload, error: &ExtractionError) -> String {
    let main = format!(
        "{}{}",
        alert("error", &error.to_string()),
        alert("error", "Failed to extract text from the image.")
    );
    base_template(model, &upload_sidebar(Some(upload)), &main)
}

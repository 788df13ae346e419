use dioxus::prelude::*;
use serde::Deserialize;

use crate::client::model::error::ApiError;

/// Outcome of one file upload as reported by the browser script.
#[derive(Deserialize)]
struct UploadOutcome {
    url: Option<String>,
    status: Option<u16>,
    message: Option<String>,
}

/// Uploads every file selected in the `<input type="file">` with the given element id.
///
/// Multipart bodies are built by the browser's `FormData`, so the file bytes never cross
/// into wasm. Uploads run one at a time and stop at the first failure.
pub async fn upload_selected_images(input_id: &str) -> Result<Vec<String>, ApiError> {
    let script = format!(
        r#"
        const input = document.getElementById("{input_id}");
        const files = input ? Array.from(input.files) : [];
        for (const file of files) {{
            const form = new FormData();
            form.append("file", file);
            try {{
                const res = await fetch("/api/upload", {{ method: "POST", body: form, credentials: "include" }});
                const body = await res.json().catch(() => ({{}}));
                if (res.ok) {{
                    dioxus.send({{ url: body.url }});
                }} else {{
                    dioxus.send({{ status: res.status, message: body.message || "Upload failed" }});
                    break;
                }}
            }} catch (e) {{
                dioxus.send({{ status: 500, message: String(e) }});
                break;
            }}
        }}
        if (input) input.value = "";
        dioxus.send(null);
        "#
    );

    let mut eval = document::eval(&script);
    let mut urls = Vec::new();

    loop {
        let outcome = eval
            .recv::<Option<UploadOutcome>>()
            .await
            .map_err(|e| ApiError {
                status: 500,
                message: format!("Upload script failed: {}", e),
            })?;

        match outcome {
            None => return Ok(urls),
            Some(UploadOutcome { url: Some(url), .. }) => urls.push(url),
            Some(failure) => {
                return Err(ApiError {
                    status: failure.status.unwrap_or(500),
                    message: failure
                        .message
                        .unwrap_or_else(|| "Upload failed".to_string()),
                })
            }
        }
    }
}

use super::surface::ReviewSurface;

/// Test double for the host webview: records every script fragment and
/// mirrors what the box would display by decoding the textContent payload.
#[derive(Default)]
pub struct RecordingSurface {
    pub evals: Vec<String>,
    pub box_text: Option<String>,
}

impl ReviewSurface for RecordingSurface {
    fn eval_js(&mut self, js: &str) {
        if js.contains("box.remove()") {
            self.box_text = None;
        } else if let Some(text) = decode_text_content(js) {
            self.box_text = Some(text);
        }

        self.evals.push(js.to_string());
    }
}

// Pulls the JSON string literal out of `box.textContent=<payload>;`, the way
// the page's JS engine would.
fn decode_text_content(js: &str) -> Option<String> {
    let (_, payload) = js.split_once("box.textContent=")?;
    let payload = payload.trim_end().strip_suffix(';')?;
    serde_json::from_str(payload).ok()
}

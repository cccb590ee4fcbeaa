/// Markup the host is about to render for the review surface. The add-on
/// appends to it during the render event instead of touching the page later.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub head: String,
    pub body: String,
}

/// Host-side handle to the rendered review surface. The host owns the page;
/// the add-on only ever runs script fragments against it.
pub trait ReviewSurface {
    fn eval_js(&mut self, js: &str);

    /// JS expression that delivers a named action back to the add-on.
    fn action_js(&self, action: &str) -> String {
        format!("pycmd('{action}')")
    }
}

pub const BUTTON_ID: &str = "sentenceButton";
pub const SENTENCE_BOX_ID: &str = "exampleSentence";

/// JSON string encoding doubles as JS string escaping, so sentence text can
/// only ever land in the page as text, never as markup.
pub fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

pub fn button_style() -> String {
    format!("<style>#{BUTTON_ID} {{ margin-left:8px; padding:4px 8px; font-size:12px; }}</style>")
}

pub fn button_html(action_js: &str) -> String {
    format!("<button id=\"{BUTTON_ID}\" onclick=\"{action_js}\">get example sentence</button>")
}

/// Creates the box on first use, then overwrites its text content.
pub fn show_sentence_js(text: &str) -> String {
    format!(
        "var box=document.getElementById('{SENTENCE_BOX_ID}');\
         if(!box){{box=document.createElement('div');box.id='{SENTENCE_BOX_ID}';\
         document.body.appendChild(box);}}\
         box.textContent={};",
        js_string(text)
    )
}

pub fn remove_box_js() -> String {
    format!("var box=document.getElementById('{SENTENCE_BOX_ID}');if(box){{box.remove();}}")
}

//! Browser side effects: file downloads, file picking and new tabs.
//!
//! Each operation needs a DOM; off the browser they report an error and do nothing.

/// Offers `text` as a download named `file_name`.
#[cfg(target_arch = "wasm32")]
pub fn download_text(file_name: &str, mime: &str, text: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let describe = |err: JsValue| format!("{err:?}");

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(describe)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(describe)?;

    let clicked = (|| -> Result<(), String> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or("document unavailable")?;
        let anchor = document
            .create_element("a")
            .map_err(describe)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| "anchor element unavailable".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        Ok(())
    })();
    let _ = Url::revoke_object_url(&url);
    clicked
}

/// Downloads are only available in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn download_text(_file_name: &str, _mime: &str, _text: &str) -> Result<(), String> {
    Err("downloads are unavailable on this host".to_string())
}

/// Opens `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or("window unavailable")?;
        window
            .open_with_url_and_target(url, "_blank")
            .map(|_| ())
            .map_err(|err| format!("{err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Err("new tabs are unavailable on this host".to_string())
    }
}

/// A file chosen through an `<input type="file">`.
pub struct PickedFile {
    #[cfg(target_arch = "wasm32")]
    file: web_sys::File,
}

/// First file selected in the input that fired `ev`. The input is reset so picking the same file
/// again fires another change.
pub fn picked_file(ev: &web_sys::Event) -> Option<PickedFile> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let input = ev
            .target()?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?;
        let file = input.files()?.get(0)?;
        input.set_value("");
        Some(PickedFile { file })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ev;
        None
    }
}

impl PickedFile {
    /// Reads the whole file as text.
    pub async fn read_text(self) -> Result<String, String> {
        #[cfg(target_arch = "wasm32")]
        {
            let value = wasm_bindgen_futures::JsFuture::from(self.file.text())
                .await
                .map_err(|err| format!("{err:?}"))?;
            value
                .as_string()
                .ok_or_else(|| "file is not text".to_string())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err("file reads are unavailable on this host".to_string())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn side_effects_are_refused_off_browser() {
        assert!(download_text("a.json", "application/json", "{}").is_err());
        assert!(open_in_new_tab("https://kasm.local/").is_err());
    }
}

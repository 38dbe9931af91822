//! Playback of synthesized speech through a Blob URL.

/// A started playback. [`Playback::stop`] pauses it and releases the object URL.
pub struct Playback {
    #[cfg(target_arch = "wasm32")]
    audio: web_sys::HtmlAudioElement,
    #[cfg(target_arch = "wasm32")]
    url: String,
}

impl Playback {
    /// Stops playback and revokes the object URL.
    pub fn stop(self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = self.audio.pause() {
                leptos::logging::warn!("audio pause failed: {err:?}");
            }
            if let Err(err) = web_sys::Url::revoke_object_url(&self.url) {
                leptos::logging::warn!("audio url revoke failed: {err:?}");
            }
        }
    }
}

/// Starts playing `bytes` as `audio/mpeg`.
#[cfg(target_arch = "wasm32")]
pub fn play_audio(bytes: &[u8]) -> Result<Playback, String> {
    use web_sys::{Blob, BlobPropertyBag, HtmlAudioElement, Url};

    let describe = |err: wasm_bindgen::JsValue| format!("{err:?}");

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("audio/mpeg");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(describe)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(describe)?;
    let audio = match HtmlAudioElement::new_with_src(&url) {
        Ok(audio) => audio,
        Err(err) => {
            let _ = Url::revoke_object_url(&url);
            return Err(describe(err));
        }
    };
    if let Err(err) = audio.play() {
        let _ = Url::revoke_object_url(&url);
        return Err(describe(err));
    }
    Ok(Playback { audio, url })
}

/// Audio output is only available in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn play_audio(_bytes: &[u8]) -> Result<Playback, String> {
    Err("audio playback is unavailable on this host".to_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn playback_is_refused_off_browser() {
        assert!(play_audio(&[0, 1, 2]).is_err());
    }
}

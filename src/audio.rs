use crate::config::Settings;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const MUSIC_CONTAINER_ID: &str = "music-container";

const NO_AUDIO_TEXT: &str =
    "If you are reading this, it is because your browser does not support the audio element.";

fn create_audio(
    document: &web::Document,
    url: &str,
    controls: bool,
) -> anyhow::Result<web::HtmlAudioElement> {
    let audio = document
        .create_element("audio")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlAudioElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    audio.set_src(url);
    audio.set_controls(controls);
    audio.set_autoplay(true);
    audio.set_loop(true);

    let fallback = document
        .create_element("p")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    fallback.set_text_content(Some(NO_AUDIO_TEXT));
    audio
        .append_child(&fallback)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(audio)
}

/// Append a looping, autoplaying `<audio>` to `#music-container`.
///
/// Returns `Ok(false)` when music is disabled or the container is absent.
pub fn attach_background_music(
    document: &web::Document,
    settings: &Settings,
) -> anyhow::Result<bool> {
    let Some(url) = settings.music_url.as_deref() else {
        return Ok(false);
    };
    let Some(container) = document.get_element_by_id(MUSIC_CONTAINER_ID) else {
        log::info!("[audio] no #{}, background music off", MUSIC_CONTAINER_ID);
        return Ok(false);
    };
    let audio = create_audio(document, url, settings.music_controls)?;
    container
        .append_child(&audio)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[audio] background music attached");
    Ok(true)
}

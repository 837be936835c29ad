//! Shared layout: fragments, translations and language buttons

use crate::{
    dom::{Document, LANG_ATTRIBUTE, TRANSLATION_ATTRIBUTE},
    error::AppResult,
    models::{Dictionary, LanguageCode},
    services::Services,
};

/// Fill every configured layout slot present on the page, in order.
/// Slots absent from the page are skipped without a fetch.
pub async fn load_fragments<D: Document>(services: &Services, page: &mut D) -> AppResult<()> {
    for fragment in &services.site.fragments {
        if !page.contains(&fragment.slot) {
            continue;
        }
        let html = services.fetcher.fetch(&fragment.path).await?;
        page.set_html(&fragment.slot, &html);
    }
    Ok(())
}

/// Replace the text of every tagged element whose key resolves.
/// Returns how many elements were translated.
pub fn apply_translations<D: Document>(page: &mut D, dict: &Dictionary) -> usize {
    let mut applied = 0;
    for id in page.ids_with_attribute(TRANSLATION_ATTRIBUTE) {
        let Some(key) = page.attribute(&id, TRANSLATION_ATTRIBUTE) else {
            continue;
        };
        if let Some(text) = dict.lookup(&key) {
            page.set_text(&id, &text);
            applied += 1;
        }
    }
    applied
}

/// Apply the language remembered from an earlier visit
pub async fn apply_stored_language<D: Document>(
    services: &Services,
    page: &mut D,
) -> AppResult<LanguageCode> {
    let stored = services.locale.stored_language();
    let (active, dict) = services.locale.resolve(&stored).await?;
    show_language(page, &active, &dict);
    Ok(active)
}

/// Handle a click on a language button
pub async fn switch_language<D: Document>(
    services: &Services,
    page: &mut D,
    lang: &LanguageCode,
) -> AppResult<LanguageCode> {
    let (active, dict) = services.locale.select(lang).await?;
    show_language(page, &active, &dict);
    Ok(active)
}

/// Language code of a language button, if `id` is one
pub fn language_button<D: Document>(page: &D, id: &str) -> Option<String> {
    page.attribute(id, LANG_ATTRIBUTE)
}

fn show_language<D: Document>(page: &mut D, lang: &LanguageCode, dict: &Dictionary) {
    page.set_language(lang.as_str());
    let applied = apply_translations(page, dict);
    tracing::debug!("Applied {} translations for {}", applied, lang);
}

use crate::app::state::{ShopAction, ShopModel};
use crate::shop::{Language, ShopConfig, web_engine};
use yew::prelude::*;

pub fn build_lang_change(
    dispatcher: &UseReducerDispatcher<ShopModel>,
    config: ShopConfig,
) -> Callback<Language> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |lang: Language| {
        // The page text is shared; only the first switch to a language rewrites it.
        if lang != crate::i18n::current_lang() {
            if let Err(err) = web_engine().set_language(&config, lang) {
                log::warn!("language preference not saved: {err}");
            }
            crate::i18n::set_lang(lang);
            crate::i18n::apply_translations();
        }
        dispatcher.dispatch(ShopAction::SetLanguage(lang));
    })
}

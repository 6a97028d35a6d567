use crate::dom;
use crate::i18n;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

pub const SCROLL_TOP_ID: &str = "scroll-to-top";
pub const SCROLL_TOP_CLASS: &str = "scroll-to-top";

/// Starts hidden; the scroll effect writes opacity and visibility.
pub const SCROLL_TOP_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; \
width: 50px; height: 50px; border-radius: 50%; \
background: linear-gradient(135deg, #E95420 0%, #B53629 100%); color: #FFFFFF; \
border: none; font-size: 20px; cursor: pointer; opacity: 0; visibility: hidden; \
transition: all 0.3s ease; z-index: 1000; box-shadow: 0 5px 20px rgba(102, 102, 102, 0.3);";

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollTopButtonProps {
    pub on_click: Callback<()>,
}

fn scale_on(transform: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if let Some(button) = e
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        {
            dom::set_styles(&button, &[("transform", transform)]);
        }
    })
}

/// Floating back-to-top button.
#[function_component(ScrollTopButton)]
pub fn scroll_top_button(p: &ScrollTopButtonProps) -> Html {
    let on_click = {
        let cb = p.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <button id={SCROLL_TOP_ID} class={SCROLL_TOP_CLASS} type="button"
            style={SCROLL_TOP_STYLE}
            aria-label={i18n::t("scroll_top")}
            onclick={on_click}
            onmouseenter={scale_on("scale(1.1)")}
            onmouseleave={scale_on("scale(1)")}>{ "↑" }</button>
    }
}

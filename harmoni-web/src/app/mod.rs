pub mod handlers;
pub mod state;
pub mod view;
pub mod wiring;

use crate::shop::ShopSession;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    /// Session restored at startup; the reducer owns it from then on.
    pub session: ShopSession,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let app_state = state::use_app_state(props.session.clone());
    let handlers = handlers::AppHandlers::new(&app_state);
    let model = &*app_state.model;

    wiring::use_delegated_clicks(&handlers);
    wiring::use_cart_badge(model.session.get_count());
    wiring::use_language_buttons(model.session.language());

    view::render_app(model, &handlers)
}

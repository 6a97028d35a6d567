use crate::app::handlers::AppHandlers;
use crate::app::state::ShopModel;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::ui::cart_drawer::CartDrawer;
use crate::components::ui::search_overlay::SearchOverlay;
use crate::shop::CatalogItem;
use yew::prelude::*;

/// Current search matches, cloned out of the shared catalog.
#[must_use]
pub fn search_results(model: &ShopModel) -> Vec<CatalogItem> {
    model
        .session
        .search(&model.query)
        .into_iter()
        .cloned()
        .collect()
}

pub fn render_app(model: &ShopModel, handlers: &AppHandlers) -> Html {
    let session = &model.session;
    let currency = session.currency();
    let on_scroll_top = Callback::from(|()| crate::effects::nav::smooth_scroll_to(0.0));

    html! {
        <>
            <CartDrawer
                open={model.cart_open}
                lines={session.lines().to_vec()}
                total={session.get_total()}
                currency={currency.clone()}
                checkout_href={AttrValue::from(session.checkout_url())}
                lang={session.language()}
                on_increment={handlers.increment.clone()}
                on_decrement={handlers.decrement.clone()}
                on_remove={handlers.remove.clone()}
                on_close={handlers.close_cart.clone()}
            />
            <SearchOverlay
                open={model.search_open}
                query={AttrValue::from(model.query.clone())}
                results={search_results(model)}
                currency={currency}
                lang={session.language()}
                on_query={handlers.query.clone()}
                on_add={handlers.add.clone()}
                on_close={handlers.close_search.clone()}
            />
            <ScrollTopButton on_click={on_scroll_top} />
            <div id="shop-status" class="sr-only" aria-live="polite"></div>
        </>
    }
}

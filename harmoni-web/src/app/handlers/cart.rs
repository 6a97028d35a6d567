use crate::app::state::{ShopAction, ShopModel};
use yew::prelude::*;

pub fn build_add(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<(String, u64)> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |(name, price): (String, u64)| {
        // Cards without a name or a price are not purchasable.
        if name.is_empty() || price == 0 {
            log::debug!("ignoring add for unpriced card {name:?}");
            return;
        }
        dispatcher.dispatch(ShopAction::Add { name, price });
    })
}

pub fn build_increment(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<String> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |name: String| dispatcher.dispatch(ShopAction::Increment(name)))
}

pub fn build_decrement(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<String> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |name: String| dispatcher.dispatch(ShopAction::Decrement(name)))
}

pub fn build_remove(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<String> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |name: String| dispatcher.dispatch(ShopAction::Remove(name)))
}

pub fn build_open_cart(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<()> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |()| dispatcher.dispatch(ShopAction::OpenCart))
}

pub fn build_close_cart(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<()> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |()| dispatcher.dispatch(ShopAction::CloseCart))
}

use crate::app::state::{ShopAction, ShopModel};
use yew::prelude::*;

pub fn build_query(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<String> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |query: String| dispatcher.dispatch(ShopAction::Query(query)))
}

pub fn build_open_search(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<()> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |()| dispatcher.dispatch(ShopAction::OpenSearch))
}

pub fn build_close_search(dispatcher: &UseReducerDispatcher<ShopModel>) -> Callback<()> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |()| dispatcher.dispatch(ShopAction::CloseSearch))
}

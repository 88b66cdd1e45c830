use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-2 gap-2">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">
                    <i class="fas fa-chart-line"></i>
                    {" Stockview"}
                </Link<Route>>
                <h1 class="text-xl font-bold px-2" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                <Link<Route> to={Route::Settings} classes="btn btn-ghost btn-circle">
                    <i class="fas fa-gear text-xl"></i>
                </Link<Route>>
            </div>
        </div>
    }
}

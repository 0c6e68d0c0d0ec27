use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Nothing here"}</h1>
            <p>
                {"This page does not exist. "}
                <Link<Route> to={Route::Home}>
                    {"Back to the landing page"}
                </Link<Route>>
            </p>
        </div>
    }
}

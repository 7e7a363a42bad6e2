use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page" style="text-align: center; padding: 10rem 1.5rem;">
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
        </div>
    }
}

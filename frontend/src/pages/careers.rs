use yew::prelude::*;

use crate::content::CATALOG;

#[function_component(Careers)]
pub fn careers() -> Html {
    html! {
        <div class="careers-page" style="max-width: 48rem; margin: 0 auto; padding: 9rem 1.5rem 6rem;">
            <h1>{"Join Us"}</h1>
            <p>
                {"We hire security analysts, engineers, designers and trainers who like solving real problems for real customers. Internships are open every season."}
            </p>
            {
                if let Some(careers) = CATALOG.navigation.careers() {
                    html! {
                        <a class="button-gradient" href={careers.href()} target="_blank" rel="noopener noreferrer">
                            {"See open positions"}
                        </a>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

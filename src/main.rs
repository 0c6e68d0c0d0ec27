use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info};

mod config;
mod tilt;
mod motion {
    pub mod controller;
    pub mod environment;
    pub mod preference;
    pub mod subsystems;
}
mod components {
    pub mod motion_toggle;
    pub mod tilt_card;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use motion::{
    controller::MotionController,
    environment::system_prefers_reduced_motion,
    preference::MotionPreference,
};
use pages::{
    landing::Landing,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(
    route: Route,
    motion: MotionPreference,
    on_toggle: Callback<()>,
    controller: Rc<MotionController>,
) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing motion={motion} on_toggle={on_toggle} controller={controller} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // Read once; a mid-session change of the system setting is not tracked
    let motion = use_state(|| MotionPreference::from_system(system_prefers_reduced_motion()));
    // One per page, so remounting Landing never starts the libraries twice
    let controller = use_state(|| Rc::new(MotionController::new()));

    let handle_toggle = {
        let motion = motion.clone();
        Callback::from(move |_| {
            let next = (*motion).toggle();
            debug!("Motion {}", if next.enabled() { "enabled" } else { "disabled" });
            motion.set(next);
        })
    };

    let render = {
        let motion = *motion;
        let controller = (*controller).clone();
        Callback::from(move |route: Route| {
            switch(route, motion, handle_toggle.clone(), controller.clone())
        })
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

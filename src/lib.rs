use std::rc::Rc;

use log::error;
use yew::prelude::*;

pub mod config;
pub mod content;
pub mod motion {
    pub mod counter;
    pub mod easing;
    pub mod frame;
    pub mod hooks;
    pub mod marquee;
    pub mod observer;
    pub mod reveal;
    pub mod tween;
}
pub mod components {
    pub mod counter;
    pub mod marquee;
    pub mod navbar;
    pub mod reveal;
}
pub mod pages {
    pub mod landing;
}

use components::navbar::Nav;
use content::SiteContent;
use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    let site = use_memo(|_| content::load().map(Rc::new), ());

    match &*site {
        Ok(site) => {
            let site: Rc<SiteContent> = site.clone();
            html! {
                <div class="app">
                    <Nav items={site.nav.clone()} />
                    <Landing content={site} />
                </div>
            }
        }
        Err(err) => {
            error!("{}", err);
            html! {
                <main class="landing-page content-error">
                    <h1>{"NightCircuit Studios"}</h1>
                    <p>{"This page could not be loaded. Please try again later."}</p>
                </main>
            }
        }
    }
}

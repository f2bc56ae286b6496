use yew::prelude::*;

use crate::config;
use crate::motion::hooks::{use_mount_reveal, use_reveal};
use crate::motion::reveal::Entrance;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub entrance: Entrance,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Plays its entrance the first time enough of it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let fired = use_reveal(node.clone(), props.threshold);

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={props.class.clone()}
            style={props.entrance.style(fired)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MountRevealProps {
    pub entrance: Entrance,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays its entrance as soon as it mounts.
#[function_component(MountReveal)]
pub fn mount_reveal(props: &MountRevealProps) -> Html {
    let fired = use_mount_reveal();

    html! {
        <div class={props.class.clone()} style={props.entrance.style(fired)}>
            { for props.children.iter() }
        </div>
    }
}

use yew::prelude::*;

use crate::motion::hooks::{use_count_up, use_reveal};

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub from: i64,
    pub to: i64,
}

/// A number that counts up once it scrolls into view. Blank before that.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), 0.0);
    let value = use_count_up(props.from, props.to, visible);

    html! {
        <span ref={node} class="counter">
            { value.map(|v| v.to_string()).unwrap_or_default() }
        </span>
    }
}

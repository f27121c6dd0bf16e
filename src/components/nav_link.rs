use yew::prelude::*;

use crate::section::Section;

/// Click handler that routes through the page's single navigate callback
/// instead of letting the browser jump to the fragment.
pub fn on_navigate(navigate: &Callback<Section>, section: Section) -> Callback<MouseEvent> {
    let navigate = navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigate.emit(section);
    })
}

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub section: Section,
    pub navigate: Callback<Section>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    html! {
        <a
            href={props.section.href()}
            class={props.class.clone()}
            onclick={on_navigate(&props.navigate, props.section)}
        >
            { for props.children.iter() }
        </a>
    }
}

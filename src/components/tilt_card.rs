use web_sys::HtmlElement;
use yew::prelude::*;

use crate::motion::preference::MotionPreference;
use crate::tilt::{reset_surface, tilt_surface, PointerSample};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    pub motion: MotionPreference,
    #[prop_or_default]
    pub reveal_running: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Card that leans towards the cursor. The transform is written straight to
/// the element's style, Yew never re-renders on pointer-move.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let card_ref = use_node_ref();
    let enabled = props.motion.enabled();

    let onpointermove = {
        let card_ref = card_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let pointer = PointerSample {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            };
            tilt_surface(enabled, card_ref.cast::<HtmlElement>().as_ref(), pointer);
        })
    };

    let onpointerleave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: PointerEvent| {
            reset_surface(card_ref.cast::<HtmlElement>().as_ref());
        })
    };

    html! {
        <div
            ref={card_ref}
            class="tilt-card"
            style="transform-style: preserve-3d;"
            data-aos={props.motion.reveal_hint(props.reveal_running, "fade-up")}
            {onpointermove}
            {onpointerleave}
        >
            { for props.children.iter() }
        </div>
    }
}

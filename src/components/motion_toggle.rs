use yew::prelude::*;

use crate::motion::preference::MotionPreference;

#[derive(Properties, PartialEq)]
pub struct MotionToggleProps {
    pub motion: MotionPreference,
    pub on_toggle: Callback<()>,
}

#[function_component(MotionToggle)]
pub fn motion_toggle(props: &MotionToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class="motion-toggle">
            <button class="motion-toggle-button" {onclick}>
                {props.motion.toggle_label()}
            </button>
        </div>
    }
}

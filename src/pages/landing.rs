use std::rc::Rc;

use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::components::motion_toggle::MotionToggle;
use crate::components::tilt_card::TiltCard;
use crate::config;
use crate::motion::controller::MotionController;
use crate::motion::preference::MotionPreference;
use crate::motion::subsystems::{RevealConfig, RevealOnScroll, ScrollSmoother, SmootherConfig};

const LANDING_CSS: &str = r#"
    .landing-page {
        background: #ffffff;
        color: #111827;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    .motion-toggle {
        position: fixed;
        top: 1rem;
        right: 1rem;
        z-index: 50;
    }
    .motion-toggle-button {
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        border: 1px solid #e5e7eb;
        border-radius: 0.5rem;
        background: #ffffff;
        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
        cursor: pointer;
    }
    .motion-toggle-button:hover {
        background: #f9fafb;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        padding: 0 1.5rem;
    }
    .hero h1 {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #4b5563;
        max-width: 42rem;
    }
    .hero-cta {
        margin-top: 2.5rem;
        padding: 1rem 2rem;
        background: #2563eb;
        color: #ffffff;
        border: none;
        border-radius: 0.75rem;
        font-size: 1rem;
        cursor: pointer;
        transition: background 0.2s;
    }
    .hero-cta:hover {
        background: #1d4ed8;
    }
    .features {
        padding: 8rem 2rem;
        background: #f9fafb;
    }
    .features h2 {
        font-size: 2.25rem;
        font-weight: 700;
        text-align: center;
        margin-bottom: 5rem;
    }
    .features-grid {
        display: grid;
        gap: 3.5rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    @media (min-width: 768px) {
        .features-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
    .feature-item {
        padding: 2rem;
        background: #ffffff;
        border-radius: 1rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .feature-item h3,
    .tilt-card h3 {
        font-size: 1.5rem;
        font-weight: 600;
        margin-bottom: 0.75rem;
    }
    .feature-item p,
    .tilt-card p {
        color: #4b5563;
    }
    .tilt-section {
        padding: 8rem 1.5rem;
        display: flex;
        justify-content: center;
    }
    .tilt-card {
        width: 100%;
        max-width: 28rem;
        padding: 2.5rem;
        background: #ffffff;
        border-radius: 1rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: transform 200ms;
    }
    .footer-cta {
        min-height: 100vh;
        background: #111827;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        padding: 0 1.5rem;
    }
    .footer-cta h2 {
        font-size: 3rem;
        font-weight: 700;
        color: #ffffff;
        margin-bottom: 1.5rem;
    }
    .footer-cta p {
        font-size: 1.125rem;
        color: #d1d5db;
        max-width: 36rem;
    }
    .page-footer {
        padding: 2rem 0;
        text-align: center;
        color: #6b7280;
    }
"#;

#[derive(Properties)]
pub struct LandingProps {
    pub motion: MotionPreference,
    pub on_toggle: Callback<()>,
    pub controller: Rc<MotionController>,
}

impl PartialEq for LandingProps {
    fn eq(&self, other: &Self) -> bool {
        self.motion == other.motion
            && self.on_toggle == other.on_toggle
            && Rc::ptr_eq(&self.controller, &other.controller)
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let motion = props.motion;
    let reveal_running = use_state(|| props.controller.is_running(RevealOnScroll::NAME));

    // The controller only acts on its first call, so a remount under the
    // router never starts the libraries again
    {
        let controller = props.controller.clone();
        let reveal_running = reveal_running.clone();
        use_effect_with_deps(
            move |_| {
                let smoother = ScrollSmoother::new(SmootherConfig::default());
                let reveal = RevealOnScroll::new(RevealConfig::default());
                let started = controller.initialize_if_enabled(motion, &[&smoother, &reveal]);
                info!("Landing mounted, {} motion subsystem(s) started", started);
                reveal_running.set(controller.is_running(RevealOnScroll::NAME));
                || ()
            },
            (),
        );
    }

    let reveal = |value: &'static str| motion.reveal_hint(*reveal_running, value);

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <MotionToggle motion={motion} on_toggle={props.on_toggle.clone()} />

            <div id={motion.hint(config::SMOOTH_WRAPPER_ID)}>
                <div id={motion.hint(config::SMOOTH_CONTENT_ID)}>

                    // Hero Section
                    <section class="hero">
                        <h1 data-aos={reveal("fade-up")}>
                            {"Premium Motion Landing Page"}
                        </h1>
                        <p
                            class="hero-subtitle"
                            data-aos={reveal("fade-up")}
                            data-aos-delay={reveal("100")}
                        >
                            {"Smooth scrolling, subtle animations, and calm interactions."}
                        </p>
                        <button
                            class="hero-cta"
                            data-aos={reveal("fade-up")}
                            data-aos-delay={reveal("200")}
                        >
                            {"Get Started"}
                        </button>
                    </section>

                    // Features Section
                    <section class="features">
                        <h2 data-aos={reveal("fade-up")}>{"Designed with Care"}</h2>

                        <div class="features-grid">
                            <div
                                class="feature-item"
                                data-aos={reveal("fade-up")}
                                data-speed={motion.hint("0.9")}
                            >
                                <h3>{"Subtle Animations"}</h3>
                                <p>{"Motion that enhances without distracting."}</p>
                            </div>

                            <div
                                class="feature-item"
                                data-aos={reveal("fade-up")}
                                data-aos-delay={reveal("100")}
                                data-speed={motion.hint("1.05")}
                            >
                                <h3>{"Lightweight UI"}</h3>
                                <p>{"Fast loads, clean layout, lots of air."}</p>
                            </div>

                            <div
                                class="feature-item"
                                data-aos={reveal("fade-up")}
                                data-aos-delay={reveal("200")}
                                data-speed={motion.hint("0.95")}
                            >
                                <h3>{"Accessibility First"}</h3>
                                <p>{"Motion respects user comfort."}</p>
                            </div>
                        </div>
                    </section>

                    // 3D hover card
                    <section class="tilt-section">
                        <TiltCard motion={motion} reveal_running={*reveal_running}>
                            <h3>{"Cursor-based 3D Hover"}</h3>
                            <p>{"Depth using pure CSS transforms, no WebGL."}</p>
                        </TiltCard>
                    </section>

                    <section class="footer-cta">
                        <h2 data-aos={reveal("fade-up")}>{"Motion Done Right"}</h2>
                        <p
                            data-aos={reveal("fade-up")}
                            data-aos-delay={reveal("100")}
                        >
                            {"Designed to guide attention, not overwhelm."}
                        </p>
                    </section>

                    <footer class="page-footer">
                        {format!("© {} Premium UX Landing", year)}
                    </footer>

                </div>
            </div>
        </div>
    }
}

mod cards;
mod dom;
mod form;
mod installer;
mod menu;
mod overlay;
mod particles;
mod reveal;
mod scroll;

use web_sys::window;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "⚡",
        title: "Fast by default",
        body: "Pages ship as static assets and render before the first scroll.",
    },
    Feature {
        icon: "◎",
        title: "Focused design",
        body: "Every section earns its place; nothing competes with the message.",
    },
    Feature {
        icon: "✦",
        title: "Crafted motion",
        body: "Subtle depth and entrance cues that step aside when motion is reduced.",
    },
    Feature {
        icon: "⌘",
        title: "Keyboard friendly",
        body: "Navigation closes on Escape and never traps focus.",
    },
    Feature {
        icon: "☰",
        title: "Works on phones",
        body: "A compact menu below tablet width, full navigation above it.",
    },
    Feature {
        icon: "✉",
        title: "Direct contact",
        body: "A short form with instant feedback on every field.",
    },
];

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;

    html! {
        <article class="card">
            <span class="card-icon" aria-hidden="true">{feature.icon}</span>
            <h3>{feature.title}</h3>
            <p>{feature.body}</p>
        </article>
    }
}

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), move |_| {
        let effects = installer::install();
        move || drop(effects)
    });

    html! {
        <>
            <div id="loading-screen" class="loading-screen" aria-hidden="true">
                <div class="loader"></div>
            </div>

            <header class="header">
                <a class="logo" href="#top">{"Northwind"}</a>
                <button
                    class="hamburger"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-controls="primary-navigation"
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
                <nav id="primary-navigation" class="nav-menu" aria-label="Primary">
                    <ul>
                        <li><a href="#features">{"Features"}</a></li>
                        <li><a href="#about">{"About"}</a></li>
                        <li><a href="#contact">{"Contact"}</a></li>
                    </ul>
                </nav>
            </header>

            <main id="top">
                <section class="hero">
                    <div class="parallax-layer layer-back" aria-hidden="true"></div>
                    <div class="parallax-layer layer-mid" aria-hidden="true"></div>
                    <div class="parallax-layer layer-front" aria-hidden="true"></div>
                    <div class="particles" aria-hidden="true"></div>
                    <div class="hero-copy">
                        <h1>{"Build the launch page your product deserves"}</h1>
                        <p>{"Clear copy, quiet motion and a layout that holds up on every screen."}</p>
                        <a class="cta" href="#contact">{"Start a project"}</a>
                    </div>
                </section>

                <section id="features" class="section">
                    <h2 class="section-title">{"What you get"}</h2>
                    <div class="card-grid">
                        { for FEATURES.iter().cloned().map(|feature| html! { <FeatureCard feature={feature} /> }) }
                    </div>
                </section>

                <section id="about" class="section">
                    <h2 class="section-title">{"About"}</h2>
                    <p data-reveal="">
                        {"We are a small studio building marketing sites for teams that ship. "}
                        {"Each page is hand-tuned, measured and kept deliberately light."}
                    </p>
                </section>

                <section id="contact" class="section">
                    <h2 class="section-title">{"Contact"}</h2>
                    <form class="contact-form">
                        <div class="form-group">
                            <label for="contact-name">{"Name"}</label>
                            <input id="contact-name" name="name" type="text" required=true autocomplete="name" />
                        </div>
                        <div class="form-group">
                            <label for="contact-email">{"Email"}</label>
                            <input id="contact-email" name="email" type="email" required=true autocomplete="email" />
                        </div>
                        <div class="form-group">
                            <label for="contact-message">{"Message"}</label>
                            <textarea id="contact-message" name="message" rows="5" required=true />
                        </div>
                        <button class="submit-btn" type="submit">{"Send message"}</button>
                    </form>
                </section>
            </main>

            <footer class="footer">
                <p>{"© Northwind Studio"}</p>
            </footer>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

use gloo_events::EventListener;
use js_sys::Date;
use std::rc::Rc;
use web_sys::{window, Document, Event, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::{
    CertificateEntry, ABOUT_BODY, ABOUT_HEADLINE, ACHIEVEMENTS, BRAND_FIRST, BRAND_LAST,
    CERTIFICATES, CONTACT_BODY, CONTACT_HEADLINE, EDUCATION, EMAIL, EXPERIENCE,
    FEATURED_CERTIFICATE, GITHUB_URL, HERO_INTRO, LOCATION, MAILTO, OWNER_NAME, PROFILE_ALT,
    PROFILE_IMAGE, PROJECTS, SKILL_GROUPS, SOCIAL_LINKS, TAGLINE,
};
use crate::protection::{ContentGuard, DocumentHost};
use crate::view_state::{
    self, lightbox_click, nav_sections, FullscreenImage, LightboxTarget, SectionId,
    SectionScroller, ViewAction, ViewState,
};

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: ViewAction) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

fn document() -> Option<Document> {
    window()?.document()
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn scroll_behavior() -> ScrollBehavior {
    if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

struct DocumentScroller {
    document: Option<Document>,
}

impl DocumentScroller {
    fn current() -> Self {
        Self {
            document: document(),
        }
    }
}

impl SectionScroller for DocumentScroller {
    fn scroll_into_view(&self, section: SectionId) -> bool {
        let Some(element) = self
            .document
            .as_ref()
            .and_then(|d| d.get_element_by_id(section.as_str()))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(scroll_behavior());
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[hook]
fn use_scroll_monitor(view: UseReducerDispatcher<ViewState>) {
    use_effect_with((), move |_| {
        view.dispatch(ViewAction::Scrolled(scroll_offset()));

        let listener = window().map(|win| {
            EventListener::new(&win, "scroll", move |_| {
                view.dispatch(ViewAction::Scrolled(scroll_offset()));
            })
        });

        move || drop(listener)
    });
}

fn location_hash() -> Option<String> {
    window()?.location().hash().ok()
}

/// Syncs the active section with a `#section` deep link present on load.
#[hook]
fn use_initial_anchor(view: UseReducerDispatcher<ViewState>) {
    use_effect_with((), move |_| {
        let action = location_hash().and_then(|hash| {
            view_state::navigate_to_id(&DocumentScroller::current(), hash.trim_start_matches('#'))
        });
        if let Some(action) = action {
            view.dispatch(action);
        }
    });
}

#[hook]
fn use_content_guard() {
    use_effect_with((), |_| {
        let guard = document().map(|doc| ContentGuard::install(&DocumentHost::new(doc)));

        move || drop(guard)
    });
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ThumbnailProps {
    src: AttrValue,
    alt: AttrValue,
    #[prop_or_default]
    lightbox_alt: Option<AttrValue>,
    fallback_glyph: AttrValue,
    fallback_label: AttrValue,
    #[prop_or_default]
    class: Classes,
    on_open: Callback<FullscreenImage>,
}

/// Clickable image that swaps itself for a glyph and caption when it fails
/// to load.
#[function_component(Thumbnail)]
fn thumbnail(props: &ThumbnailProps) -> Html {
    let failed = use_state_eq(|| false);

    if *failed {
        return html! {
            <div class={classes!("image-fallback", props.class.clone())} role="img" aria-label={props.alt.clone()}>
                <span class="fallback-glyph" aria-hidden="true">{props.fallback_glyph.clone()}</span>
                <span class="fallback-label">{props.fallback_label.clone()}</span>
            </div>
        };
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    let onclick = {
        let on_open = props.on_open.clone();
        let src = props.src.to_string();
        let alt = props
            .lightbox_alt
            .as_ref()
            .unwrap_or(&props.alt)
            .to_string();
        Callback::from(move |_: MouseEvent| {
            on_open.emit(FullscreenImage {
                src: src.clone(),
                alt: alt.clone(),
            });
        })
    };

    html! {
        <img
            class={classes!("thumbnail", props.class.clone())}
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            draggable="false"
            {onclick}
            {onerror}
        />
    }
}

fn lightbox_handler(
    target: LightboxTarget,
    on_action: Callback<ViewAction>,
) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        if target != LightboxTarget::Backdrop {
            event.stop_propagation();
        }
        if let Some(action) = lightbox_click(target) {
            on_action.emit(action);
        }
    })
}

#[derive(Properties, PartialEq)]
struct LightboxProps {
    image: FullscreenImage,
    on_action: Callback<ViewAction>,
}

#[function_component(Lightbox)]
fn lightbox(props: &LightboxProps) -> Html {
    html! {
        <div
            class="lightbox"
            role="dialog"
            aria-modal="true"
            aria-label={props.image.alt.clone()}
            onclick={lightbox_handler(LightboxTarget::Backdrop, props.on_action.clone())}
        >
            <figure class="lightbox-frame">
                <img
                    class="lightbox-image"
                    src={props.image.src.clone()}
                    alt={props.image.alt.clone()}
                    draggable="false"
                    onclick={lightbox_handler(LightboxTarget::Image, props.on_action.clone())}
                />
                <button
                    class="lightbox-close"
                    type="button"
                    aria-label="Close image"
                    onclick={lightbox_handler(LightboxTarget::CloseButton, props.on_action.clone())}
                >
                    {"✕"}
                </button>
                <figcaption class="lightbox-caption">{props.image.alt.clone()}</figcaption>
            </figure>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavigationProps {
    view: ViewState,
    on_navigate: Callback<SectionId>,
    on_toggle_menu: Callback<MouseEvent>,
}

#[function_component(Navigation)]
fn navigation(props: &NavigationProps) -> Html {
    let menu_open = props.view.menu_open;
    let links = nav_sections()
        .map(|section| {
            let id = section.id;
            let on_navigate = props.on_navigate.clone();
            html! {
                <button
                    key={id.as_str()}
                    type="button"
                    class={classes!("nav-link", props.view.is_active(id).then_some("is-active"))}
                    aria-current={props.view.is_active(id).then_some("true")}
                    onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(id))}
                >
                    {section.label}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={classes!("site-nav", props.view.scrolled.then_some("is-scrolled"))}>
            <div class="nav-bar">
                <div class="brand">{BRAND_FIRST}<span class="accent">{"."}</span></div>
                <div class="nav-links desktop-only">{links.clone()}</div>
                <button
                    class="menu-toggle mobile-only"
                    type="button"
                    aria-label={if menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu_open.to_string()}
                    onclick={props.on_toggle_menu.clone()}
                >
                    <span aria-hidden="true">{if menu_open { "✕" } else { "☰" }}</span>
                </button>
            </div>
            if menu_open {
                <div class="mobile-menu mobile-only">{links}</div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_navigate: Callback<SectionId>,
    on_open_image: Callback<FullscreenImage>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let go_to = |section: SectionId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <p class="badge">{TAGLINE}</p>
                    <h1>{BRAND_FIRST}<br /><span class="faded">{BRAND_LAST}</span></h1>
                    <p class="lead">{HERO_INTRO}</p>
                    <div class="hero-actions">
                        <button class="button primary" type="button" onclick={go_to(SectionId::Projects)}>{"PORTFOLIO"}</button>
                        <button class="button ghost" type="button" onclick={go_to(SectionId::Contact)}>{"CONTACT"}</button>
                    </div>
                    <ul class="social-row">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <li key={social.label}>
                                <a
                                    href={social.href}
                                    title={social.label}
                                    target={(!social.href.starts_with("mailto:")).then_some("_blank")}
                                    rel="noopener noreferrer"
                                >
                                    <span aria-hidden="true">{social.glyph}</span>
                                    <span class="social-label">{social.label}</span>
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="hero-portrait">
                    <Thumbnail
                        src={PROFILE_IMAGE}
                        alt={PROFILE_ALT}
                        fallback_glyph="☺"
                        fallback_label="Profile Photo"
                        class={classes!("portrait")}
                        on_open={props.on_open_image.clone()}
                    />
                </div>
            </div>
            <div class="scroll-hint" aria-hidden="true">{"⌄"}</div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={SectionId::About.as_str()} class="section-block centered">
            <h2 class="eyebrow">{"About Me"}</h2>
            <h3 class="headline">{ABOUT_HEADLINE}<br />{"Building "}<span class="faded">{"Robust Systems"}</span></h3>
            <p class="body-copy">{ABOUT_BODY}</p>
        </section>
    }
}

#[function_component(Education)]
fn education() -> Html {
    html! {
        <section id={SectionId::Education.as_str()} class="section-block">
            <div class="two-column">
                <div>
                    <h3 class="column-title"><span aria-hidden="true">{"▤ "}</span>{"Education"}</h3>
                    <ol class="timeline">
                        { for EDUCATION.iter().map(|entry| html! {
                            <li key={entry.degree} class={classes!("timeline-item", entry.current.then_some("is-current"))}>
                                <span class="pill">{entry.period}</span>
                                <h4>{entry.degree}</h4>
                                <p class="accent-text">{entry.school}</p>
                                <p class="muted">{entry.detail}</p>
                            </li>
                        }) }
                    </ol>
                </div>
                <div>
                    <h3 class="column-title"><span aria-hidden="true">{"★ "}</span>{"Achievements"}</h3>
                    <div class="card-stack">
                        { for ACHIEVEMENTS.iter().map(|achievement| html! {
                            <article key={achievement.title} class="card achievement">
                                <span class="card-glyph" aria-hidden="true">{achievement.glyph}</span>
                                <div>
                                    <h4>{achievement.title}</h4>
                                    if !achievement.summary.is_empty() {
                                        <p class="muted">{achievement.summary}</p>
                                    }
                                    if !achievement.points.is_empty() {
                                        <ul class="bullet-list">
                                            { for achievement.points.iter().map(|(name, detail)| html! {
                                                <li key={*name}><strong>{*name}{":"}</strong>{" "}{*detail}</li>
                                            }) }
                                        </ul>
                                    }
                                    if !achievement.links.is_empty() {
                                        <div class="link-row">
                                            { for achievement.links.iter().map(|(label, href)| html! {
                                                <ExternalLink key={*label} href={*href} label={*label} />
                                            }) }
                                        </div>
                                    }
                                </div>
                            </article>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ImageSectionProps {
    on_open_image: Callback<FullscreenImage>,
}

#[function_component(Experience)]
fn experience(props: &ImageSectionProps) -> Html {
    html! {
        <section id={SectionId::Experience.as_str()} class="section-block">
            <h2 class="eyebrow">{"My Journey"}</h2>
            <h3 class="headline">{"Work Experience"}</h3>
            <ol class="timeline">
                { for EXPERIENCE.iter().map(|entry| html! {
                    <li key={entry.role} class="timeline-item is-current">
                        <span class="pill">{entry.date}</span>
                        <h4>{entry.role}<span class="muted">{" • "}</span><span class="accent-text">{entry.organization}</span></h4>
                        <p class="body-copy">{entry.summary}</p>
                        if let Some((image, alt)) = entry.certificate {
                            <Thumbnail
                                src={image}
                                alt={alt}
                                fallback_glyph="▤"
                                fallback_label="Internship Certificate"
                                class={classes!("certificate-thumb")}
                                on_open={props.on_open_image.clone()}
                            />
                        }
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <section id={SectionId::Skills.as_str()} class="section-block">
            <h2 class="eyebrow">{"Expertise"}</h2>
            <h3 class="headline">{"Technical Skills"}</h3>
            <div class="card-grid">
                { for SKILL_GROUPS.iter().map(|group| html! {
                    <article key={group.title} class="card">
                        <h4><span class="card-glyph" aria-hidden="true">{group.glyph}</span>{group.title}</h4>
                        <div class="chip-row">
                            { for group.skills.iter().map(|skill| html! {
                                <span key={*skill} class="chip">{*skill}</span>
                            }) }
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section id={SectionId::Projects.as_str()} class="section-block">
            <div class="section-header">
                <div>
                    <h2 class="eyebrow">{"Portfolio"}</h2>
                    <h3 class="headline">{"Featured Projects"}</h3>
                </div>
                <ExternalLink href={GITHUB_URL} label="View Github" />
            </div>
            <div class="card-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <article key={project.name} class="card project">
                        <div class="project-art" aria-hidden="true">{project.glyph}</div>
                        <h4>{project.name}</h4>
                        <p class="muted">{project.summary}</p>
                        <div class="chip-row">
                            { for project.tags.iter().map(|tag| html! { <span key={*tag} class="chip">{*tag}</span> }) }
                        </div>
                        <div class="link-row">
                            if let Some(demo) = project.demo {
                                <ExternalLink href={demo} label="Live Demo" />
                            }
                            if let Some(source) = project.source {
                                <ExternalLink href={source} label="Source" />
                            }
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}

fn certificate_card(cert: &CertificateEntry, on_open_image: &Callback<FullscreenImage>) -> Html {
    html! {
        <article key={cert.image} class="card certificate">
            <Thumbnail
                src={cert.image}
                alt={cert.thumbnail_alt()}
                lightbox_alt={Some(AttrValue::from(cert.lightbox_alt()))}
                fallback_glyph="▤"
                fallback_label="Cert Photo"
                class={classes!("certificate-thumb")}
                on_open={on_open_image.clone()}
            />
            <h4>{cert.title}</h4>
            <div class="meta-row">
                <span class="accent-text">{cert.issuer}</span>
                <span class="muted">{cert.date}</span>
            </div>
            if let Some(link) = cert.link {
                <ExternalLink href={link} label="View Credential" />
            }
        </article>
    }
}

#[function_component(Certifications)]
fn certifications(props: &ImageSectionProps) -> Html {
    let featured = &FEATURED_CERTIFICATE;

    html! {
        <section id={SectionId::Certifications.as_str()} class="section-block">
            <h2 class="eyebrow">{"Education & Learning"}</h2>
            <h3 class="headline">{"Certifications"}</h3>
            <article class="card featured-certificate">
                <Thumbnail
                    src={featured.image}
                    alt={featured.title}
                    fallback_glyph="▤"
                    fallback_label="Certificate"
                    class={classes!("certificate-thumb")}
                    on_open={props.on_open_image.clone()}
                />
                <div class="featured-copy">
                    <p class="eyebrow">{featured.kind}</p>
                    <h4>{featured.title}</h4>
                    <p class="muted">{"Issued by "}<span class="accent-text">{featured.issuer}</span>{" • "}{featured.program}</p>
                    <p class="body-copy">{featured.description}</p>
                    <ExternalLink href={featured.link} label="View Credential on Coursera" />
                    <div class="two-column">
                        <div>
                            <p class="eyebrow">{"Coursework Highlights"}</p>
                            <ul class="bullet-list">
                                { for featured.highlights.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                            </ul>
                        </div>
                        <div>
                            <p class="eyebrow">{"Skills Gained"}</p>
                            <div class="chip-row">
                                { for featured.skills.iter().map(|skill| html! { <span key={*skill} class="chip">{*skill}</span> }) }
                            </div>
                        </div>
                    </div>
                </div>
            </article>
            <div class="card-grid">
                { for CERTIFICATES.iter().map(|cert| certificate_card(cert, &props.on_open_image)) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={SectionId::Contact.as_str()} class="section-block centered">
            <h2 class="eyebrow">{"Get In Touch"}</h2>
            <h3 class="headline">{CONTACT_HEADLINE}</h3>
            <p class="body-copy">{CONTACT_BODY}</p>
            <a class="button primary" href={MAILTO}>{"SAY HELLO"}</a>
            <div class="contact-grid">
                <div><span class="card-glyph" aria-hidden="true">{"⌖"}</span><h4>{"Location"}</h4><p class="muted">{LOCATION}</p></div>
                <div><span class="card-glyph" aria-hidden="true">{"✉"}</span><h4>{"Email"}</h4><p class="muted">{EMAIL}</p></div>
                <div><span class="card-glyph" aria-hidden="true">{"⌥"}</span><h4>{"Social"}</h4><p class="muted">{"github.com/anant720"}</p></div>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let view = use_reducer_eq(ViewState::default);

    use_scroll_monitor(view.dispatcher());
    use_initial_anchor(view.dispatcher());
    use_content_guard();

    let on_action = {
        let dispatcher = view.dispatcher();
        Callback::from(move |action: ViewAction| dispatcher.dispatch(action))
    };

    let on_navigate = {
        let on_action = on_action.clone();
        Callback::from(move |section: SectionId| {
            if let Some(action) = view_state::navigate_to(&DocumentScroller::current(), section) {
                on_action.emit(action);
            }
        })
    };

    let on_toggle_menu = on_action.reform(|_: MouseEvent| ViewAction::ToggleMenu);
    let on_open_image =
        on_action.reform(|image: FullscreenImage| view_state::open_image(image.src, image.alt));
    let year = Date::new_0().get_full_year();

    html! {
        <div class="page-shell">
            <Navigation
                view={(*view).clone()}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <main id="content">
                <Hero on_navigate={on_navigate} on_open_image={on_open_image.clone()} />
                <About />
                <Education />
                <Experience on_open_image={on_open_image.clone()} />
                <Skills />
                <Projects />
                <Certifications on_open_image={on_open_image} />
                <Contact />
            </main>
            <footer class="site-footer">
                <p class="muted">{format!("© {year} {OWNER_NAME}. Built with Rust & Yew.")}</p>
            </footer>
            if let Some(image) = view.fullscreen_image.clone() {
                <Lightbox image={image} on_action={on_action} />
            }
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(
        document()
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

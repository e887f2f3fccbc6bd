use chrono::Datelike;
use yew::prelude::*;

use crate::animation::{self, stagger_index, AnimationVariant, HoverEffect};
use crate::components::reveal::{Reveal, RevealTrigger};
use crate::components::shimmer::ShimmerHeading;
use crate::components::video::BackgroundVideo;
use crate::config;
use crate::content::{
    self, Category, EventDetailCard, TimelineMilestone, CATEGORIES, CONTACT_EMAIL, CONTACT_PHONE,
    EVENT_DETAILS, GOLD, NAV_LINKS, PILLARS, SITE_NAME, TIMELINE,
};
use crate::icons::{Icon, IconSvg};

fn child_class(variant: AnimationVariant) -> Classes {
    classes!("motion-child", variant.class_name())
}

fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

fn section_intro(badge: &'static str, title: &'static str, lead: &'static str) -> Html {
    html! {
        <Reveal variant={AnimationVariant::StaggerChildren} class={classes!("section-intro")}>
            <div class={child_class(AnimationVariant::FadeIn)} style={stagger_index(0)}>
                <div class="section-badge">{ badge }</div>
                <ShimmerHeading text={title} />
                <p class="section-lead">{ lead }</p>
            </div>
        </Reveal>
    }
}

#[function_component(SiteHeader)]
fn site_header() -> Html {
    html! {
        <header class="site-header">
            <div class="container header-bar">
                <div class="brand">
                    <IconSvg icon={Icon::Trophy} class={classes!("brand-icon")} />
                    <Reveal variant={AnimationVariant::TitleSlide} trigger={RevealTrigger::OnMount} class={classes!("brand-title-wrap")}>
                        <span class="brand-title gradient-text" style={GOLD.css_vars()}>
                            { SITE_NAME }
                        </span>
                    </Reveal>
                </div>
                <nav class="site-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a class="nav-link" href={link.href()}>{ link.label }</a>
                    }) }
                </nav>
                <a class="btn btn-gold header-cta" href="#nominate">{ "Register Now" }</a>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <BackgroundVideo
                src={config::media_url(content::HERO_VIDEO)}
                label="video"
                overlay={classes!("overlay-hero")}
            />
            <div class="container hero-grid">
                <Reveal variant={AnimationVariant::StaggerChildren} trigger={RevealTrigger::OnMount} class={classes!("hero-copy")}>
                    <div class={classes!(child_class(AnimationVariant::FadeIn), "pill")} style={stagger_index(0)}>
                        { "Inaugural Ceremony 2025" }
                    </div>
                    <h1 class={classes!(child_class(AnimationVariant::FadeIn), "hero-title")} style={stagger_index(1)}>
                        <span>{ "Celebrating" }</span>
                        <span class="gradient-text" style="--accent-from: #fcd34d; --accent-to: #f59e0b;">
                            { "Excellence" }
                        </span>
                        <span>{ "in the Vaishya Community" }</span>
                    </h1>
                    <p class={classes!(child_class(AnimationVariant::FadeIn), "hero-lead")} style={stagger_index(2)}>
                        { "Join us for the inaugural Vaishya Excellence Awards, recognizing outstanding achievements and contributions within our community." }
                    </p>
                    <div class={classes!(child_class(AnimationVariant::FadeIn), "button-row")} style={stagger_index(3)}>
                        <a class="btn btn-gold btn-lg" href="#nominate">{ "Register Now" }</a>
                        <a class="btn btn-glass btn-lg" href="#about">{ "Learn More" }</a>
                    </div>
                </Reveal>
                <Reveal variant={AnimationVariant::HeroPop} trigger={RevealTrigger::OnMount} class={classes!("framed-image")}>
                    <div class="image-glow glow-gold"></div>
                    <img src={content::HERO_IMAGE} alt="Awards Ceremony" width="600" height="400" />
                    <Reveal variant={AnimationVariant::SparkleGlint} trigger={RevealTrigger::OnMount} class={classes!("corner-icon", "corner-bottom-right")}>
                        <IconSvg icon={Icon::Sparkles} class={classes!("icon-xl", "icon-light-gold")} />
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section section-warm">
            <div class="container">
                { section_intro(
                    "Our Legacy",
                    "About The Awards",
                    "The Vaishya Excellence Awards is a pioneering initiative to recognize and celebrate the remarkable achievements of individuals from our community across various fields.",
                ) }
                <div class="split">
                    <Reveal variant={AnimationVariant::SlideFromLeft} class={classes!("framed-image")}>
                        <div class="image-glow glow-dusk"></div>
                        <img
                            class="about-image"
                            src={config::media_url(content::ABOUT_IMAGE)}
                            alt="Community Celebration"
                            width="600"
                            height="400"
                            loading="lazy"
                        />
                        <div class="corner-badge corner-top-left">
                            <IconSvg icon={Icon::Award} class={classes!("icon-lg", "icon-gold")} />
                        </div>
                    </Reveal>
                    <Reveal variant={AnimationVariant::StaggerChildren} class={classes!("pillars")}>
                        <ul>
                            { for PILLARS.iter().enumerate().map(|(i, (heading, body))| html! {
                                <li class={child_class(AnimationVariant::FadeIn)} style={stagger_index(i)}>
                                    <h3>{ *heading }</h3>
                                    <p>{ *body }</p>
                                </li>
                            }) }
                        </ul>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

fn category_card(index: usize, category: &Category) -> Html {
    html! {
        <div
            id={category.criteria_anchor()}
            class={classes!(child_class(AnimationVariant::FadeIn), "category-cell")}
            style={format!("{} {}", stagger_index(index), category.color.css_vars())}
        >
            <div class={classes!("card", "category-card", HoverEffect::Grow.class_name())}>
                <div class="card-tint"></div>
                <div class="card-stripe"></div>
                <div class="card-body">
                    <div class="icon-bubble">
                        <IconSvg icon={category.icon} class={classes!("icon-md", "accent-icon")} />
                    </div>
                    <h3 class="category-title">{ category.title }</h3>
                    <a class="criteria-link gradient-text" href={format!("#{}", category.criteria_anchor())}>
                        { "View Criteria" }
                        <IconSvg icon={Icon::ChevronRight} class={classes!("icon-sm")} />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Categories)]
fn categories() -> Html {
    html! {
        <section id="categories" class="section section-banded">
            <div class="container">
                { section_intro(
                    "Recognition",
                    "Award Categories",
                    "Recognizing excellence across multiple domains that reflect the diverse talents of our community.",
                ) }
                <Reveal variant={AnimationVariant::StaggerChildren} class={classes!("category-grid")}>
                    { for CATEGORIES.iter().enumerate().map(|(i, category)| category_card(i, category)) }
                </Reveal>
            </div>
        </section>
    }
}

fn detail_card(index: usize, card: &EventDetailCard) -> Html {
    html! {
        <div
            class={classes!(child_class(AnimationVariant::FadeIn), "detail-cell")}
            style={format!("{} {}", stagger_index(index), card.banner.css_vars())}
        >
            <div class={classes!("card", "detail-card", HoverEffect::Lift.class_name())}>
                <div class="detail-banner">
                    <img src={card.image_url()} alt={card.image_alt} loading="lazy" />
                    <div class="detail-banner-icon">
                        <IconSvg icon={card.icon} class={classes!("icon-xxl")} />
                    </div>
                </div>
                <div class="card-body">
                    <h3 class="detail-title">{ card.title }</h3>
                    <p class="muted">
                        { card.lines[0] }
                        <br />
                        { card.lines[1] }
                    </p>
                </div>
            </div>
        </div>
    }
}

#[function_component(EventDetails)]
fn event_details() -> Html {
    html! {
        <section id="details" class="section section-fade-up">
            <div class="blob blob-top-right"></div>
            <div class="blob blob-bottom-left"></div>
            <div class="container">
                { section_intro(
                    "Join Us",
                    "Event Details",
                    "Join us for an evening of celebration and recognition.",
                ) }
                <Reveal variant={AnimationVariant::StaggerChildren} class={classes!("detail-grid")}>
                    { for EVENT_DETAILS.iter().enumerate().map(|(i, card)| detail_card(i, card)) }
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Nominate)]
fn nominate() -> Html {
    html! {
        <section id="nominate" class="section section-video">
            <BackgroundVideo
                src={config::media_url(content::NOMINATION_VIDEO)}
                label="second video"
                overlay={classes!("overlay-ember")}
            />
            <div class="container split">
                <Reveal variant={AnimationVariant::SlideFromLeft} class={classes!("cta-copy")}>
                    <div class="pill pill-light">{ "Recognize Excellence" }</div>
                    <h2 class="cta-title">{ "Nominate a Deserving Individual" }</h2>
                    <p class="cta-lead">
                        { "Do you know someone from our community who has made exceptional contributions? Nominate them for recognition at our inaugural awards ceremony." }
                    </p>
                    <div class="button-row">
                        <a class="btn btn-light btn-lg" href="#nominate">{ "Nominate Now" }</a>
                        <a class="btn btn-glass btn-lg" href="#categories">{ "View Criteria" }</a>
                    </div>
                </Reveal>
                <Reveal variant={AnimationVariant::NominationPop} class={classes!("framed-image")}>
                    <div class="image-glow glow-white"></div>
                    <img
                        src={config::media_url(content::NOMINATION_IMAGE)}
                        alt="Nomination"
                        width="600"
                        height="400"
                        loading="lazy"
                    />
                    <Reveal variant={AnimationVariant::StarGlint} class={classes!("corner-icon", "corner-top-left")}>
                        <IconSvg icon={Icon::Star} class={classes!("icon-xl", "icon-light-gold")} />
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}

fn milestone_row(index: usize, milestone: &TimelineMilestone) -> Html {
    html! {
        <div
            class={classes!(child_class(AnimationVariant::FadeIn), "milestone-cell")}
            style={format!("{} {}", stagger_index(index), milestone.color.css_vars())}
        >
            <div class={classes!("milestone", HoverEffect::Nudge.class_name())}>
                <div class="milestone-dot">
                    <IconSvg icon={Icon::Calendar} class={classes!("icon-sm")} />
                </div>
                <div class="milestone-text">
                    <h3 class="milestone-title" style={format!("color: {};", milestone.ink)}>
                        { milestone.title }
                    </h3>
                    <p class="milestone-date">{ milestone.date }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Timeline)]
fn timeline() -> Html {
    html! {
        <section id="timeline" class="section section-warm">
            <div class="container">
                { section_intro(
                    "Timeline",
                    "Key Dates",
                    "Mark your calendar for these important milestones.",
                ) }
                <Reveal variant={AnimationVariant::StaggerChildren} class={classes!("timeline")}>
                    { for TIMELINE.iter().enumerate().map(|(i, milestone)| milestone_row(i, milestone)) }
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Sponsorship)]
fn sponsorship() -> Html {
    let [first, second, third] = content::GALLERY_IMAGES;
    html! {
        <section id="sponsor" class="section section-ember">
            <div class="container">
                <Reveal variant={AnimationVariant::RiseIn} class={classes!("sponsor-grid")}>
                    <div class="sponsor-copy">
                        <h2 class="sponsor-title">{ "Be Part of This Historic Event" }</h2>
                        <p class="sponsor-lead">
                            { "The inaugural Vaishya Excellence Awards is more than just a ceremony - it's the beginning of a legacy. Join us in celebrating the achievements of our community." }
                        </p>
                        <div class="button-row">
                            <a class="btn btn-light btn-lg" href={mailto()}>{ "Become a Sponsor" }</a>
                            <a class="btn btn-glass btn-lg" href={mailto()}>{ "Contact Us" }</a>
                        </div>
                    </div>
                    <div class="gallery">
                        <img src={config::media_url(first)} alt="Awards Gallery" width="300" height="400" loading="lazy" />
                        <div class="gallery-stack">
                            <img src={config::media_url(second)} alt="Awards Gallery" width="300" height="200" loading="lazy" />
                            <img src={config::media_url(third)} alt="Awards Gallery" width="300" height="200" loading="lazy" />
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="container footer-bar">
                <div class="footer-brand">
                    <div class="brand">
                        <IconSvg icon={Icon::Trophy} class={classes!("brand-icon")} />
                        <span class="brand-title gradient-text" style={GOLD.css_vars()}>{ SITE_NAME }</span>
                    </div>
                    <p class="muted small">{ "Celebrating excellence and achievement in our community." }</p>
                </div>
                <div class="footer-contact">
                    <a class="contact-line" href={mailto()}>
                        <IconSvg icon={Icon::Mail} class={classes!("icon-sm", "icon-gold")} />
                        <span>{ CONTACT_EMAIL }</span>
                    </a>
                    <div class="contact-line">
                        <IconSvg icon={Icon::Phone} class={classes!("icon-sm", "icon-gold")} />
                        <span>{ CONTACT_PHONE }</span>
                    </div>
                </div>
                <p class="muted small copyright">
                    { format!("© {} {}. All rights reserved.", year, SITE_NAME) }
                </p>
            </div>
        </footer>
    }
}

#[function_component(AwardsPage)]
pub fn awards_page() -> Html {
    html! {
        <div class="awards-page">
            <SiteHeader />
            <main>
                <Hero />
                <About />
                <Categories />
                <EventDetails />
                <Nominate />
                <Timeline />
                <Sponsorship />
            </main>
            <SiteFooter />
            <style>{ animation::stylesheet() }</style>
            <style>
                {r#"
                .awards-page {
                    display: flex;
                    flex-direction: column;
                    min-height: 100vh;
                    font-family: "Inter", system-ui, -apple-system, sans-serif;
                    color: #1c1917;
                    background: #ffffff;
                }

                .awards-page main {
                    flex: 1;
                }

                .container {
                    width: 100%;
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    position: relative;
                    z-index: 10;
                }

                .gradient-text {
                    background: linear-gradient(90deg, var(--accent-from), var(--accent-to));
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .muted {
                    color: #78716c;
                }

                .small {
                    font-size: 0.875rem;
                }

                /* Icons */
                .icon { display: inline-block; flex-shrink: 0; }
                .icon-sm { width: 1rem; height: 1rem; }
                .icon-md { width: 2rem; height: 2rem; }
                .icon-lg { width: 2.5rem; height: 2.5rem; }
                .icon-xl { width: 3rem; height: 3rem; }
                .icon-xxl { width: 4rem; height: 4rem; color: #ffffff; }
                .icon-gold { color: #f59e0b; }
                .icon-light-gold { color: #fcd34d; }
                .accent-icon { color: var(--accent-from); }

                /* Header */
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    border-bottom: 1px solid #f5f5f4;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                }

                .header-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 4rem;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .brand-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #f59e0b;
                }

                .brand-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .site-nav {
                    display: none;
                    gap: 1.5rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #f59e0b;
                }

                .header-cta {
                    display: none;
                }

                /* Buttons */
                .button-row {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding-top: 1rem;
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.375rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    border: 1px solid transparent;
                    transition: background 0.2s ease, opacity 0.2s ease;
                }

                .btn-lg {
                    padding: 0.75rem 2rem;
                    font-size: 1rem;
                }

                .btn-gold {
                    color: #ffffff;
                    background: linear-gradient(90deg, #f59e0b, #ea580c);
                }

                .btn-gold:hover {
                    background: linear-gradient(90deg, #d97706, #c2410c);
                }

                .btn-glass {
                    color: #ffffff;
                    border-color: rgba(255, 255, 255, 0.4);
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                }

                .btn-glass:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .btn-light {
                    color: #78350f;
                    background: #ffffff;
                }

                .btn-light:hover {
                    opacity: 0.9;
                }

                /* Background video */
                .background-video {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .background-video video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .video-overlay {
                    position: absolute;
                    inset: 0;
                    mix-blend-mode: multiply;
                }

                .overlay-hero {
                    background: linear-gradient(90deg, rgba(88, 28, 135, 0.7), rgba(120, 53, 15, 0.7));
                }

                .overlay-ember {
                    background: linear-gradient(90deg, rgba(120, 53, 15, 0.8), rgba(124, 45, 18, 0.8));
                }

                /* Sections */
                .section,
                .hero {
                    position: relative;
                    width: 100%;
                    padding: 3rem 0;
                    overflow: hidden;
                }

                .section-warm {
                    background: linear-gradient(180deg, #fffbeb, #ffffff);
                }

                .section-fade-up {
                    background: linear-gradient(180deg, #ffffff, #fffbeb);
                }

                .section-banded {
                    background: linear-gradient(135deg, #fef3c7, #fffbeb 50%, #fff7ed);
                    border-top: 1px solid rgba(245, 158, 11, 0.5);
                    border-bottom: 1px solid rgba(245, 158, 11, 0.5);
                }

                .section-ember {
                    color: #ffffff;
                    background: linear-gradient(90deg, #78350f, #7c2d12);
                }

                .section-intro {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 1rem;
                }

                .section-badge {
                    display: inline-block;
                    border-radius: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.875rem;
                    color: #92400e;
                    background: #fef3c7;
                    border: 1px solid #fde68a;
                }

                .section-title {
                    margin: 0.5rem 0;
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    background: linear-gradient(90deg, #d97706, #ea580c);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-lead {
                    max-width: 900px;
                    margin: 0 auto;
                    color: #78716c;
                    line-height: 1.6;
                }

                .split {
                    display: grid;
                    gap: 1.5rem;
                    align-items: center;
                    padding: 3rem 0;
                }

                /* Hero */
                .hero {
                    padding: 3rem 0;
                }

                .hero-grid {
                    display: grid;
                    gap: 1.5rem;
                    align-items: center;
                }

                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .pill {
                    display: inline-block;
                    align-self: flex-start;
                    border-radius: 9999px;
                    padding: 0.25rem 1rem;
                    font-size: 0.875rem;
                    color: #ffffff;
                    background: rgba(245, 158, 11, 0.2);
                    border: 1px solid rgba(245, 158, 11, 0.3);
                    backdrop-filter: blur(4px);
                }

                .pill-light {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.2);
                }

                .hero-title {
                    margin: 0;
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: #ffffff;
                    text-shadow: 0 4px 8px rgba(0, 0, 0, 0.3);
                }

                .hero-title span {
                    display: block;
                }

                .hero-lead {
                    max-width: 600px;
                    color: rgba(255, 255, 255, 0.9);
                }

                .framed-image {
                    position: relative;
                    margin: 0 auto;
                }

                .framed-image img {
                    position: relative;
                    z-index: 10;
                    max-width: 100%;
                    height: auto;
                    border-radius: 0.5rem;
                    object-fit: cover;
                    border: 2px solid rgba(252, 211, 77, 0.3);
                }

                .image-glow {
                    position: absolute;
                    inset: -1rem;
                    border-radius: 0.75rem;
                    opacity: 0.3;
                    filter: blur(24px);
                }

                .glow-gold { background: linear-gradient(90deg, #f59e0b, #ea580c); }
                .glow-dusk { background: linear-gradient(90deg, rgba(168, 85, 247, 0.2), rgba(245, 158, 11, 0.2)); }
                .glow-white { background: rgba(255, 255, 255, 0.2); }

                .corner-icon,
                .corner-badge {
                    position: absolute;
                    z-index: 20;
                }

                .corner-badge {
                    padding: 0.5rem;
                    border-radius: 9999px;
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .corner-bottom-right { bottom: -1.5rem; right: -1.5rem; }
                .corner-top-left { top: -1.5rem; left: -1.5rem; }

                /* About */
                .about-image {
                    aspect-ratio: 16 / 9;
                    border-color: #fde68a !important;
                }

                .pillars ul {
                    display: grid;
                    gap: 1.5rem;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }

                .pillars h3 {
                    margin: 0 0 0.25rem;
                    font-size: 1.25rem;
                    color: #b45309;
                }

                .pillars p {
                    margin: 0;
                    color: #78716c;
                }

                /* Cards */
                .card {
                    position: relative;
                    height: 100%;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .card-body {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 0.5rem;
                    padding: 1.5rem;
                }

                .card-tint {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                    background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
                }

                .card-stripe {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 0.25rem;
                    background: linear-gradient(90deg, var(--accent-from), var(--accent-to));
                }

                .icon-bubble {
                    padding: 0.75rem;
                    border-radius: 9999px;
                    background: #ffffff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .category-grid,
                .detail-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .category-title,
                .detail-title {
                    margin: 0;
                    font-weight: 700;
                }

                .criteria-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                }

                .criteria-link .icon {
                    color: var(--accent-to);
                }

                .detail-banner {
                    position: relative;
                    height: 10rem;
                    background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
                }

                .detail-banner img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    mix-blend-mode: overlay;
                    opacity: 0.5;
                }

                .detail-banner-icon {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .blob {
                    position: absolute;
                    width: 20rem;
                    height: 20rem;
                    border-radius: 9999px;
                    opacity: 0.2;
                    filter: blur(64px);
                }

                .blob-top-right { top: -10rem; right: -10rem; background: #fde68a; }
                .blob-bottom-left { bottom: -10rem; left: -10rem; background: #fed7aa; }

                /* Nomination */
                .section-video .cta-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .cta-title {
                    margin: 0;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #ffffff;
                }

                .cta-lead {
                    color: rgba(255, 255, 255, 0.9);
                }

                .section-video .framed-image img {
                    border-color: rgba(255, 255, 255, 0.3);
                }

                /* Timeline */
                .timeline {
                    display: grid;
                    gap: 1.5rem;
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 3rem 0;
                }

                .milestone {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border: 1px solid #e7e5e4;
                    border-radius: 0.5rem;
                    background: #ffffff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .milestone-dot {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    color: #ffffff;
                    background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
                }

                .milestone-dot .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .milestone-title {
                    margin: 0;
                    font-weight: 600;
                }

                .milestone-date {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #78716c;
                }

                /* Sponsorship */
                .sponsor-grid {
                    display: grid;
                    gap: 2.5rem;
                    align-items: center;
                }

                .sponsor-title {
                    margin: 0 0 1rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                }

                .sponsor-lead {
                    max-width: 600px;
                    color: rgba(255, 255, 255, 0.8);
                }

                .sponsor-copy .button-row {
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .gallery {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .gallery-stack {
                    display: grid;
                    grid-template-rows: 1fr 1fr;
                    gap: 1rem;
                }

                .gallery img {
                    width: 100%;
                    height: 100%;
                    border-radius: 0.5rem;
                    object-fit: cover;
                }

                /* Footer */
                .site-footer {
                    width: 100%;
                    border-top: 1px solid #f5f5f4;
                    background: linear-gradient(180deg, #fffbeb, #ffffff);
                }

                .footer-bar {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding-top: 2rem;
                    padding-bottom: 2rem;
                }

                .footer-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-line {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: inherit;
                    text-decoration: none;
                }

                @media (min-width: 400px) {
                    .button-row {
                        flex-direction: row;
                    }
                }

                @media (min-width: 640px) {
                    .hero-title { font-size: 3rem; }
                    .section-title { font-size: 3rem; }
                    .cta-title { font-size: 2.25rem; }
                    .sponsor-title { font-size: 2.25rem; }
                }

                @media (min-width: 768px) {
                    .section, .hero { padding: 6rem 0; }
                    .site-nav { display: flex; }
                    .header-cta { display: inline-flex; }
                    .hero-title { font-size: 3.75rem; }
                    .hero-lead, .cta-lead, .sponsor-lead, .section-lead { font-size: 1.25rem; }
                    .sponsor-title { font-size: 3rem; }
                    .category-grid { grid-template-columns: repeat(2, 1fr); }
                    .detail-grid { grid-template-columns: repeat(2, 1fr); }
                    .detail-cell:last-child { grid-column: span 2; }
                    .footer-bar { padding-top: 3rem; padding-bottom: 3rem; }
                }

                @media (min-width: 1024px) {
                    .section, .hero { padding: 8rem 0; }
                    .hero-grid, .split, .sponsor-grid { grid-template-columns: 1fr 1fr; gap: 3rem; }
                    .hero-grid .framed-image, .split .framed-image { order: 2; }
                    .category-grid { grid-template-columns: repeat(3, 1fr); }
                    .detail-grid { grid-template-columns: repeat(3, 1fr); }
                    .detail-cell:last-child { grid-column: span 1; }
                    .footer-bar { flex-direction: row; align-items: center; justify-content: space-between; padding-top: 4rem; padding-bottom: 4rem; }
                    .footer-contact { flex-direction: row; gap: 1.5rem; }
                }

                @media (min-width: 1280px) {
                    .category-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_page() -> String {
        ServerRenderer::<AwardsPage>::new().hydratable(false).render().await
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect()
    }

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let html = render_page().await;
        let order = positions(
            &html,
            &[
                "<header class=\"site-header\"",
                "Inaugural Ceremony 2025",
                "id=\"about\"",
                "id=\"categories\"",
                "id=\"details\"",
                "id=\"nominate\"",
                "id=\"timeline\"",
                "id=\"sponsor\"",
                "<footer class=\"site-footer\"",
            ],
        );
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", order);
    }

    #[tokio::test]
    async fn one_card_per_category() {
        let html = render_page().await;
        assert_eq!(html.matches("category-card").count(), CATEGORIES.len());
        for category in CATEGORIES.iter() {
            let anchor = category.criteria_anchor();
            assert_eq!(html.matches(&format!("id=\"{}\"", anchor)).count(), 1, "{anchor}");
            assert_eq!(html.matches(&format!("href=\"#{}\"", anchor)).count(), 1, "{anchor}");
            assert!(html.contains(&format!(">{}</h3>", category.title.replace('&', "&amp;"))));
        }
    }

    #[tokio::test]
    async fn milestones_keep_declaration_order() {
        let html = render_page().await;
        let titles: Vec<String> = TIMELINE.iter().map(|m| format!(">{}</h3>", m.title)).collect();
        let needles: Vec<&str> = titles.iter().map(String::as_str).collect();
        let order = positions(&html, &needles);
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", order);
        assert_eq!(html.matches("class=\"milestone-title\"").count(), TIMELINE.len());
    }

    #[tokio::test]
    async fn nav_and_videos_are_present() {
        let html = render_page().await;
        for link in NAV_LINKS.iter() {
            assert!(html.contains(&format!("href=\"{}\"", link.href())), "{}", link.label);
        }
        assert_eq!(html.matches("<video").count(), 2);
        assert!(html.contains("https://v0.blob.com/awards-background.mp4"));
        assert!(html.contains("https://v0.blob.com/awards-background-2.mp4"));
    }

    #[tokio::test]
    async fn sections_start_hidden() {
        let html = render_page().await;
        let class_lists: Vec<&str> = html
            .split("class=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert!(class_lists.iter().any(|c| c.contains("motion-stagger")));
        assert!(class_lists.iter().all(|c| !c.contains(animation::REVEALED_CLASS)));
        assert_eq!(html.matches("class=\"section-title motion-shimmer\"").count(), 4);
    }

    #[tokio::test]
    async fn footer_shows_current_year() {
        let html = render_page().await;
        let year = chrono::Local::now().year();
        assert!(html.contains(&format!("© {} Vaishya Excellence Awards", year)));
        assert!(html.contains(CONTACT_EMAIL));
    }
}

use std::rc::Rc;

use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::marquee::TestimonialMarquee;
use crate::components::reveal::{MountReveal, Reveal};
use crate::config;
use crate::content::{MediaKind, SiteContent};
use crate::motion::reveal::Entrance;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;

    html! {
        <main class="landing-page">
            <HeroSection studio={content.studio.clone()} />
            <ImpactSection content={content.clone()} />
            <PortfolioSection content={content.clone()} />
            <ProcessSection content={content.clone()} />
            <TestimonialsSection content={content.clone()} />
            <Footer content={content.clone()} />
            <style>{LANDING_CSS}</style>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    studio: AttrValue,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    let rise = Entrance::fade_up(20.0).with_duration(800);

    html! {
        <section class="hero">
            <div class="hero-glow"></div>

            <MountReveal entrance={rise}>
                <h1 class="hero-title">
                    {"Build a personal brand that gets you "}
                    <span class="accent-script">{"credibility"}</span>
                    {" in the next 90-120 days."}
                </h1>
            </MountReveal>

            <MountReveal entrance={rise.with_delay(200)}>
                <p class="hero-subtitle">
                    {format!(
                        "We make it happen. {} helps entrepreneurs and founders scale their personal brands with strategic design that brings them more leads and revenue.",
                        props.studio
                    )}
                </p>
            </MountReveal>

            <MountReveal entrance={Entrance::pop(0.8).with_delay(400)}>
                <button class="hero-cta">{"Book a call now"}</button>
            </MountReveal>

            <MountReveal entrance={rise.with_delay(600)} class="social-proof">
                <div class="avatar-stack">
                    { for (1..=3).map(|i| html! {
                        <img
                            class="avatar"
                            src={format!("https://i.pravatar.cc/40?img={}", i)}
                            alt={format!("Client {}", i)}
                        />
                    }) }
                </div>
                <p class="social-proof-text">{"50+ Clients Satisfied"}</p>
            </MountReveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    content: Rc<SiteContent>,
}

#[function_component(ImpactSection)]
fn impact_section(props: &SectionProps) -> Html {
    html! {
        <section class="impact" id="services">
            <h2 class="section-title">
                {"Our "}<span class="accent-script">{"Impact"}</span>{" So Far"}
            </h2>
            <div class="stats-grid">
                { for props.content.stats.iter().enumerate().map(|(index, stat)| html! {
                    <Reveal
                        key={index}
                        entrance={Entrance::fade_up(50.0).staggered(index, config::STAGGER_STEP_MS)}
                    >
                        <p class="stat-number">
                            <Counter from={stat.from} to={stat.to} />
                            {stat.suffix.clone()}
                        </p>
                        <p class="stat-label">{stat.label.clone()}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(PortfolioSection)]
fn portfolio_section(props: &SectionProps) -> Html {
    html! {
        <section id="casestudies" class="portfolio">
            <Reveal entrance={Entrance::fade_up(50.0).with_duration(600)} class="section-intro">
                <h2 class="section-title">
                    {"Some of Our "}<span class="accent-script">{"Hand-Crafted Pieces."}</span>
                </h2>
                <p class="section-lead">
                    {"Our system and process build a powerful brand presence and turn followers into customers."}
                </p>
            </Reveal>
            <div class="portfolio-grid">
                { for props.content.projects.iter().enumerate().map(|(index, project)| {
                    let media = match project.kind {
                        MediaKind::Video => html! {
                            <video
                                class="portfolio-media"
                                src={project.src.clone()}
                                autoplay={true}
                                loop={true}
                                muted={true}
                            />
                        },
                        MediaKind::Image => html! {
                            <img class="portfolio-media" src={project.src.clone()} alt={project.title.clone()} />
                        },
                    };
                    html! {
                        <Reveal
                            key={index}
                            class="portfolio-card"
                            entrance={Entrance::fade_up(50.0).staggered(index, config::STAGGER_STEP_MS)}
                        >
                            { media }
                            <div class="portfolio-shade"></div>
                            <div class="portfolio-caption">
                                <h3>{project.title.clone()}</h3>
                                <p>{project.description.clone()}</p>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
fn process_section(props: &SectionProps) -> Html {
    html! {
        <section id="process" class="process">
            <Reveal entrance={Entrance::fade_up(50.0).with_duration(600)}>
                <h2 class="section-title process-title">
                    {"Our Sophisticated System and Process to Make Your Brand Go "}
                    <span class="accent-script">{"Big-Title"}</span>
                </h2>
            </Reveal>
            <div class="timeline">
                <div class="timeline-line"></div>
                { for props.content.process.iter().enumerate().map(|(index, step)| html! {
                    <Reveal
                        key={index}
                        class="timeline-step"
                        entrance={Entrance::slide_x(-50.0).with_duration(600).staggered(index, config::STAGGER_STEP_MS)}
                    >
                        <div class="timeline-dot"></div>
                        <div class="timeline-body">
                            <h3>{step.name.clone()}</h3>
                            <p>{step.description.clone()}</p>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
fn testimonials_section(props: &SectionProps) -> Html {
    html! {
        <section class="testimonials">
            <div class="testimonials-header">
                <p class="section-kicker">{"Don't take our word for it"}</p>
                <h2 class="section-title">{"Our happy clients say about us"}</h2>
            </div>
            <TestimonialMarquee testimonials={props.content.testimonials.clone()} />
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let content = &props.content;

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{content.brand.clone()}</h3>
                    <p class="footer-tagline">
                        {"Empowering Your Projects, Enhancing Your Success, Every Step of the Way."}
                    </p>
                    <div class="footer-socials">
                        { for content.socials.iter().map(|social| html! {
                            <a href={social.link.clone()} aria-label={social.name.clone()}>{social.name.clone()}</a>
                        }) }
                    </div>
                </div>
                <div class="footer-columns">
                    <div>
                        <h4>{"Sections"}</h4>
                        <ul>
                            { for content.footer_sections.iter().map(|section| html! {
                                <li><a href={section.link.clone()}>{section.name.clone()}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Start a Conversation"}</h4>
                        <p class="footer-tagline">{"Ready to build something different?"}</p>
                        <a class="footer-mail" href={format!("mailto:{}", content.contact_email)}>
                            {content.contact_email.clone()}
                        </a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© 2025 {}. All rights reserved.", content.studio)}</p>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        background: #000;
        color: #fff;
        min-height: 100vh;
        overflow-x: hidden;
    }
    .accent-script {
        font-family: "Caveat", cursive;
        color: #c084fc;
        text-transform: none;
    }
    .section-title {
        font-size: clamp(2.5rem, 6vw, 3.75rem);
        font-weight: 700;
        text-align: center;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin: 0;
    }
    section {
        padding: 5rem 1rem;
    }

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        overflow: hidden;
    }
    .hero-glow {
        position: absolute;
        top: 0;
        left: 50%;
        width: 75rem;
        height: 55rem;
        background: rgba(88, 28, 135, 0.2);
        border-radius: 9999px;
        filter: blur(64px);
        transform: translate(-50%, -50%);
        pointer-events: none;
    }
    .hero-title {
        font-size: clamp(3rem, 7vw, 4.5rem);
        font-weight: 700;
        max-width: 56rem;
        line-height: 1.1;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin: 0;
    }
    .hero-subtitle {
        margin-top: 1.5rem;
        color: #9ca3af;
        max-width: 36rem;
    }
    .hero-cta {
        margin-top: 2rem;
        background: #9333ea;
        color: #fff;
        font-weight: 600;
        padding: 0.5rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        cursor: pointer;
        transition: background 300ms, box-shadow 300ms;
    }
    .hero-cta:hover {
        background: #7e22ce;
        box-shadow: 0 0 20px rgba(168, 85, 247, 0.4);
    }
    .social-proof {
        margin-top: 1.5rem;
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .avatar-stack {
        display: flex;
    }
    .avatar {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        border: 2px solid #000;
        margin-left: -0.5rem;
    }
    .social-proof-text {
        font-size: 0.875rem;
        color: #9ca3af;
    }

    .stats-grid {
        max-width: 56rem;
        margin: 4rem auto 0;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 3rem 2rem;
        text-align: center;
    }
    .stat-number {
        font-size: 4.5rem;
        color: #e5e7eb;
        margin: 0;
    }
    .counter {
        display: inline-block;
        min-width: 1ch;
    }
    .stat-label {
        margin-top: 0.5rem;
        font-size: 1.125rem;
        color: #6b7280;
    }

    .section-intro {
        text-align: center;
    }
    .section-lead {
        margin: 1rem auto 0;
        font-size: 1.125rem;
        color: #9ca3af;
        max-width: 42rem;
    }
    .portfolio-grid {
        margin: 3rem auto 0;
        max-width: 72rem;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1.5rem;
    }
    .portfolio-card {
        position: relative;
        aspect-ratio: 9 / 16;
        border-radius: 0.5rem;
        overflow: hidden;
    }
    .portfolio-media {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 300ms;
    }
    .portfolio-card:hover .portfolio-media {
        transform: scale(1.05);
    }
    .portfolio-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
    }
    .portfolio-caption {
        position: relative;
        height: 100%;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
        padding: 1.5rem;
    }
    .portfolio-caption h3 {
        font-size: 1.5rem;
        margin: 0;
    }
    .portfolio-caption p {
        color: #d1d5db;
        margin: 0;
    }

    .process-title {
        max-width: 56rem;
        margin: 0 auto;
    }
    .timeline {
        position: relative;
        margin-top: 5rem;
        padding: 0 1.5rem;
    }
    .timeline-line {
        position: absolute;
        left: calc(1.5rem + 0.5rem);
        top: 0;
        height: 100%;
        width: 2px;
        background: #1f2937;
    }
    .timeline-step {
        position: relative;
        padding-left: 3rem;
        margin-bottom: 3rem;
    }
    .timeline-dot {
        position: absolute;
        left: 0.5rem;
        top: 0.25rem;
        width: 1rem;
        height: 1rem;
        border-radius: 9999px;
        background: #fff;
        transform: translateX(-50%);
        box-shadow: 0 0 0 4px #000;
        z-index: 1;
    }
    .timeline-body {
        display: grid;
        grid-template-columns: 1fr;
        gap: 0.5rem 2rem;
    }
    .timeline-body h3 {
        font-size: 1.5rem;
        color: #c084fc;
        margin: 0;
    }
    .timeline-body p {
        font-size: 1.125rem;
        color: #9ca3af;
        margin: 0;
    }
    @media (min-width: 768px) {
        .timeline-body {
            grid-template-columns: 1fr 2fr;
        }
    }

    .testimonials-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-kicker {
        font-size: 1.125rem;
        color: #9ca3af;
    }
    .marquee {
        position: relative;
        width: 100%;
        overflow: hidden;
    }
    .horizontal-fade {
        mask-image: linear-gradient(to right, transparent, #000 10%, #000 90%, transparent);
        -webkit-mask-image: linear-gradient(to right, transparent, #000 10%, #000 90%, transparent);
    }
    .marquee-track {
        display: flex;
        width: max-content;
    }
    .marquee-track--static {
        animation: marquee-scroll linear infinite;
    }
    @keyframes marquee-scroll {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    .testimonial-card {
        background: rgba(17, 24, 39, 0.8);
        border-color: rgba(255, 255, 255, 0.1);
        border-radius: 0.5rem;
    }
    .testimonial-head {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }
    .testimonial-avatar {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
    }
    .testimonial-name {
        font-weight: 700;
        margin: 0;
    }
    .testimonial-title {
        font-size: 0.875rem;
        color: #9ca3af;
        margin: 0;
    }
    .testimonial-quote {
        margin-top: 1rem;
        font-size: 1.125rem;
        color: #d1d5db;
    }

    .site-footer {
        padding: 5rem 2rem 3rem;
    }
    .footer-grid {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
    }
    .footer-brand {
        font-size: 1.25rem;
        margin: 0;
    }
    .footer-tagline {
        margin-top: 0.5rem;
        color: #9ca3af;
    }
    .footer-socials {
        display: flex;
        gap: 1rem;
        margin-top: 1rem;
    }
    .footer-socials a, .footer-columns a {
        color: #9ca3af;
        text-decoration: none;
        transition: color 200ms;
    }
    .footer-socials a:hover {
        color: #c084fc;
    }
    .footer-columns {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-around;
        gap: 2rem;
    }
    .footer-columns ul {
        list-style: none;
        padding: 0;
        margin: 0.5rem 0 0;
    }
    .footer-columns a:hover {
        color: #fff;
    }
    .footer-columns .footer-mail {
        color: #c084fc;
        word-break: break-all;
    }
    .footer-bottom {
        margin-top: 4rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        text-align: center;
        font-size: 0.75rem;
        color: #6b7280;
    }
    @media (min-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr 2fr;
        }
    }
"#;

use log::warn;
use stylist::Style;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::content::Testimonial;
use crate::motion::frame::run_frames;
use crate::motion::marquee::{doubled, Marquee};

#[derive(Properties, PartialEq)]
pub struct TestimonialMarqueeProps {
    pub testimonials: Vec<Testimonial>,
}

fn track_style() -> Option<Style> {
    let css = format!(
        r#"
        display: flex;
        width: max-content;
        will-change: transform;
        & > .testimonial-card {{
            {card}
        }}
        "#,
        card = config::TESTIMONIAL_CARD.css(),
    );
    match Style::new(css) {
        Ok(style) => Some(style),
        Err(err) => {
            warn!("marquee style rejected: {}", err);
            None
        }
    }
}

/// Testimonials rendered twice in a row. The strip scrolls left by one copy's
/// width and wraps, so the second copy takes the place of the first.
#[function_component(TestimonialMarquee)]
pub fn testimonial_marquee(props: &TestimonialMarqueeProps) -> Html {
    let track = use_node_ref();
    let hovered = use_mut_ref(|| false);
    let frames_available = use_state(|| true);
    let style = use_memo(|_| track_style(), ());

    let marquee = Marquee::of_items(
        config::TESTIMONIAL_CARD,
        props.testimonials.len(),
        config::MARQUEE_SPEED_PX_PER_S,
    );

    {
        let hovered = hovered.clone();
        let frames_available = frames_available.clone();
        use_effect_with_deps(
            move |(track, marquee): &(NodeRef, Marquee)| {
                let track = track.clone();
                let marquee = *marquee;
                let mut clock_ms = 0.0;
                let mut last_frame: Option<f64> = None;

                let handle = run_frames(move |elapsed_ms| {
                    let delta = last_frame.map(|last| elapsed_ms - last).unwrap_or(0.0);
                    last_frame = Some(elapsed_ms);
                    // Hovering holds the strip where it is.
                    if !*hovered.borrow() {
                        clock_ms += delta;
                    }
                    if let Some(element) = track.cast::<HtmlElement>() {
                        let _ = element.style().set_property(
                            "transform",
                            &format!("translate3d(-{:.2}px, 0, 0)", marquee.offset_at(clock_ms)),
                        );
                    }
                    true
                });

                if handle.is_none() {
                    warn!("no animation frames available, falling back to css marquee");
                    frames_available.set(false);
                }
                move || drop(handle)
            },
            (track.clone(), marquee),
        );
    }

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| *hovered.borrow_mut() = true)
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| *hovered.borrow_mut() = false)
    };

    let track_class = classes!(
        "marquee-track",
        (*style).as_ref().map(|style| style.get_class_name().to_string()),
        (!*frames_available).then(|| "marquee-track--static"),
    );
    // The keyframe fallback moves half the track (one copy) per loop.
    let track_inline = (!*frames_available)
        .then(|| AttrValue::from(format!("animation-duration: {:.2}s;", marquee.period_s())));

    html! {
        <div class="marquee horizontal-fade" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div ref={track} class={track_class} style={track_inline}>
                {
                    doubled(&props.testimonials).into_iter().enumerate().map(|(index, testimonial)| {
                        html! {
                            <div key={index} class="testimonial-card">
                                <div class="testimonial-head">
                                    <img
                                        src={format!("https://i.pravatar.cc/48?img={}", (index % 6) + 4)}
                                        alt={testimonial.name.clone()}
                                        class="testimonial-avatar"
                                    />
                                    <div>
                                        <p class="testimonial-name">{testimonial.name.clone()}</p>
                                        <p class="testimonial-title">{testimonial.title.clone()}</p>
                                    </div>
                                </div>
                                <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

use super::{Icon, Reveal, SectionHeader};
use crate::content::{PLANS, Plan};
use crate::motion::{CARD_STAGGER_MS, Motion, stagger};
use crate::icons::ICON_CHECK;
use leptos::prelude::*;

/// Three pricing tiers; the highlighted one carries a badge.
#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="section section-pricing">
            <div class="section-rule" aria-hidden="true"></div>
            <div class="container">
                <SectionHeader
                    eyebrow="Pricing"
                    description="Start free, scale as you grow. No hidden fees, no surprise bills."
                >
                    "Simple, transparent pricing"
                </SectionHeader>

                <div class="plans-grid">
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| view! { <PlanCard plan=plan index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan, index: usize) -> impl IntoView {
    let motion = Motion::rise(40.0, 600).delayed(stagger(index, CARD_STAGGER_MS));
    let (card_class, check_class, cta_class) = if plan.highlighted {
        ("plan-card plan-highlighted", "icon icon-check accent", "btn btn-primary btn-block")
    } else {
        ("plan-card", "icon icon-check", "btn btn-ghost btn-block")
    };

    view! {
        <Reveal motion=motion class=card_class>
            {plan.badge.map(|badge| view! { <span class="plan-badge">{badge}</span> })}
            <div class="plan-head">
                <h3 class="plan-name">{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>
            </div>
            <p class="plan-price">
                <span class="plan-amount">{plan.price}</span>
                {(!plan.period.is_empty()).then(|| view! { <span class="plan-period">{plan.period}</span> })}
            </p>
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li>
                            <Icon path=ICON_CHECK stroke_width="2.5" class=check_class />
                            {*feature}
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <a href=plan.href class=cta_class>{plan.cta}</a>
        </Reveal>
    }
}

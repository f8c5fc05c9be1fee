use yew::prelude::*;

use crate::hooks::use_animated_counter;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub amount: f64,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let value = use_animated_counter(props.amount);

    html! {
        <div class="total-balance-amount">{value}</div>
    }
}

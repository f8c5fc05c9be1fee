use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::{CounterState, DashboardConfig};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Formatted value easing from the last rendered amount to `amount`.
///
/// Each new target starts one frame loop; a loop stops once its transition
/// lands or a newer target (or unmount) bumps the generation.
#[hook]
pub fn use_animated_counter(amount: f64) -> String {
    let config = use_context::<Rc<DashboardConfig>>().unwrap_or_default();
    let counter = use_mut_ref(|| CounterState::new(config.counter_duration_ms));
    let generation = use_mut_ref(|| 0u64);
    let display = use_state({
        let config = config.clone();
        move || format_counter(&CounterState::new(0), &config)
    });

    {
        let counter = counter.clone();
        let generation = generation.clone();
        let display = display.clone();

        use_effect_with(amount.to_bits(), move |_| {
            let needs_frames = retarget(&mut counter.borrow_mut(), amount, js_sys::Date::now());

            if needs_frames {
                let current = {
                    let mut generation = generation.borrow_mut();
                    *generation += 1;
                    *generation
                };
                let counter = counter.clone();
                let generation = generation.clone();
                let config = config.clone();

                spawn_local(async move {
                    loop {
                        TimeoutFuture::new(config.counter_frame_ms).await;
                        if *generation.borrow() != current {
                            break;
                        }

                        let mut counter = counter.borrow_mut();
                        counter.tick(js_sys::Date::now());
                        display.set(format_counter(&counter, &config));
                        if !counter.is_animating() {
                            break;
                        }
                    }
                });
            }

            move || {
                *generation.borrow_mut() += 1;
            }
        });
    }

    (*display).clone()
}

/// Points `counter` at `amount` and reports whether a frame loop must run.
/// The effect cleanup stops the previous loop on every dependency change,
/// so a transition still in progress needs a new loop even when the target
/// compares equal (e.g. `0.0` after `-0.0`).
fn retarget(counter: &mut CounterState, amount: f64, now_ms: f64) -> bool {
    let started = counter.set_target(amount, now_ms);
    started || counter.is_animating()
}

fn format_counter(counter: &CounterState, config: &DashboardConfig) -> String {
    counter.display(&config.currency_symbol, config.currency_decimals)
}

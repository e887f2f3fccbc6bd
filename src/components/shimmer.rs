use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animation::{AnimationVariant, Shimmer};

impl Reducible for Shimmer {
    type Action = ();

    fn reduce(self: Rc<Self>, _tick: ()) -> Rc<Self> {
        Rc::new(self.tick())
    }
}

pub trait Ticker {
    type Handle;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        let mut on_tick = on_tick;
        Interval::new(period_ms, move || on_tick())
    }
}

// Ticks until dropped.
pub struct ShimmerPulse<T: Ticker> {
    _handle: T::Handle,
}

impl<T: Ticker> ShimmerPulse<T> {
    pub fn start(ticker: &T, on_tick: impl FnMut() + 'static) -> Self {
        Self {
            _handle: ticker.every(Shimmer::period_ms(), Box::new(on_tick)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ShimmerHeadingProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ShimmerHeading)]
pub fn shimmer_heading(props: &ShimmerHeadingProps) -> Html {
    let shimmer = use_reducer(Shimmer::default);

    {
        let dispatcher = shimmer.dispatcher();
        use_effect_with_deps(
            move |_| {
                let pulse = ShimmerPulse::start(&IntervalTicker, move || dispatcher.dispatch(()));
                move || drop(pulse)
            },
            (),
        );
    }

    html! {
        <h2
            class={classes!("section-title", AnimationVariant::Shimmer.class_name(), props.class.clone())}
            style={shimmer.style()}
        >
            { props.text.clone() }
        </h2>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use crate::animation::ShimmerPhase;

    type Slot = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

    #[derive(Default)]
    struct FakeClock {
        slot: Slot,
        period: Cell<u32>,
    }

    struct FakeHandle(Slot);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl FakeClock {
        fn advance(&self) {
            let pending = self.slot.borrow_mut().take();
            if let Some(mut on_tick) = pending {
                on_tick();
                *self.slot.borrow_mut() = Some(on_tick);
            }
        }

        fn is_scheduled(&self) -> bool {
            self.slot.borrow().is_some()
        }
    }

    impl Ticker for FakeClock {
        type Handle = FakeHandle;

        fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> FakeHandle {
            self.period.set(period_ms);
            *self.slot.borrow_mut() = Some(on_tick);
            FakeHandle(self.slot.clone())
        }
    }

    fn counting_pulse(
        clock: &FakeClock,
    ) -> (ShimmerPulse<FakeClock>, Rc<Cell<Shimmer>>, Rc<Cell<usize>>) {
        let shimmer = Rc::new(Cell::new(Shimmer::default()));
        let ticks = Rc::new(Cell::new(0));
        let pulse = {
            let shimmer = shimmer.clone();
            let ticks = ticks.clone();
            ShimmerPulse::start(clock, move || {
                shimmer.set(shimmer.get().tick());
                ticks.set(ticks.get() + 1);
            })
        };
        (pulse, shimmer, ticks)
    }

    #[test]
    fn pulse_ticks_at_the_shimmer_period() {
        let clock = FakeClock::default();
        let (_pulse, shimmer, ticks) = counting_pulse(&clock);
        assert_eq!(clock.period.get(), 1500);

        for _ in 0..3 {
            clock.advance();
        }
        assert_eq!(ticks.get(), 3);
        assert_eq!(shimmer.get().phase(), ShimmerPhase::Bright);
    }

    #[test]
    fn dropping_the_pulse_stops_ticking() {
        let clock = FakeClock::default();
        let (pulse, shimmer, ticks) = counting_pulse(&clock);

        clock.advance();
        clock.advance();
        assert_eq!(ticks.get(), 2);

        drop(pulse);
        assert!(!clock.is_scheduled());

        clock.advance();
        clock.advance();
        assert_eq!(ticks.get(), 2);
        assert_eq!(shimmer.get().phase(), ShimmerPhase::Dim);
    }
}

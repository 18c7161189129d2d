// Breathing space: timed inhale / hold / exhale cycle

use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

pub fn render() -> Html {
    html! { <BreathingSpace /> }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
}

impl Phase {
    /// Seconds spent in each phase
    pub fn seconds(&self) -> u32 {
        match self {
            Phase::Inhale => 4,
            Phase::Hold => 7,
            Phase::Exhale => 8,
        }
    }

    pub fn next(&self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold,
            Phase::Hold => Phase::Exhale,
            Phase::Exhale => Phase::Inhale,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Inhale => "吸って",
            Phase::Hold => "止めて",
            Phase::Exhale => "吐いて",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathingState {
    pub phase: Phase,
    pub remaining: u32,
    pub cycles: u32,
}

impl Default for BreathingState {
    fn default() -> Self {
        Self {
            phase: Phase::Inhale,
            remaining: Phase::Inhale.seconds(),
            cycles: 0,
        }
    }
}

pub enum BreathingAction {
    Tick,
    Reset,
}

impl Reducible for BreathingState {
    type Action = BreathingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BreathingAction::Reset => Rc::new(Self::default()),
            BreathingAction::Tick if self.remaining > 1 => Rc::new(Self {
                remaining: self.remaining - 1,
                ..(*self).clone()
            }),
            BreathingAction::Tick => {
                let phase = self.phase.next();
                let cycles = if phase == Phase::Inhale {
                    self.cycles + 1
                } else {
                    self.cycles
                };
                Rc::new(Self {
                    phase,
                    remaining: phase.seconds(),
                    cycles,
                })
            }
        }
    }
}

#[function_component(BreathingSpace)]
pub fn breathing_space() -> Html {
    let state = use_reducer(BreathingState::default);
    let running = use_state(|| false);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(*running, move |running| {
            let interval = running.then(|| {
                Interval::new(1_000, move || dispatcher.dispatch(BreathingAction::Tick))
            });
            move || drop(interval)
        });
    }

    let toggle = {
        let running = running.clone();
        Callback::from(move |_| running.set(!*running))
    };

    let reset = {
        let state = state.clone();
        let running = running.clone();
        Callback::from(move |_| {
            running.set(false);
            state.dispatch(BreathingAction::Reset);
        })
    };

    let phase_class = match state.phase {
        Phase::Inhale => "inhale",
        Phase::Hold => "hold",
        Phase::Exhale => "exhale",
    };

    html! {
        <div class="page breathing">
            <h1>{ "呼吸スペース" }</h1>
            <div class={classes!("breathing-circle", phase_class, running.then(|| "running"))}>
                <span class="phase">{ state.phase.label() }</span>
                <span class="remaining">{ state.remaining.to_string() }</span>
            </div>
            <p>{ format!("{}サイクル完了", state.cycles) }</p>
            <button onclick={toggle}>{ if *running { "一時停止" } else { "開始" } }</button>
            <button onclick={reset}>{ "リセット" }</button>
        </div>
    }
}

use std::fmt::Write;

pub const REVEALED_CLASS: &str = "is-revealed";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl MotionState {
    pub const REST: MotionState = MotionState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    const fn faded() -> Self {
        MotionState { opacity: 0.0, ..Self::REST }
    }

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    ForeverReverse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub repeat: Repeat,
    pub stagger: Option<f32>,
}

impl Transition {
    const fn over(duration: f32) -> Self {
        Transition { duration, delay: 0.0, repeat: Repeat::Once, stagger: None }
    }

    const fn after(self, delay: f32) -> Self {
        Transition { delay, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantSpec {
    pub hidden: MotionState,
    pub visible: MotionState,
    pub transition: Transition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationVariant {
    FadeIn,
    StaggerChildren,
    Shimmer,
    TitleSlide,
    SlideFromLeft,
    HeroPop,
    NominationPop,
    SparkleGlint,
    StarGlint,
    RiseIn,
}

impl AnimationVariant {
    pub const ALL: [AnimationVariant; 10] = [
        AnimationVariant::FadeIn,
        AnimationVariant::StaggerChildren,
        AnimationVariant::Shimmer,
        AnimationVariant::TitleSlide,
        AnimationVariant::SlideFromLeft,
        AnimationVariant::HeroPop,
        AnimationVariant::NominationPop,
        AnimationVariant::SparkleGlint,
        AnimationVariant::StarGlint,
        AnimationVariant::RiseIn,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            AnimationVariant::FadeIn => "motion-fade-in",
            AnimationVariant::StaggerChildren => "motion-stagger",
            AnimationVariant::Shimmer => "motion-shimmer",
            AnimationVariant::TitleSlide => "motion-title-slide",
            AnimationVariant::SlideFromLeft => "motion-slide-left",
            AnimationVariant::HeroPop => "motion-hero-pop",
            AnimationVariant::NominationPop => "motion-nomination-pop",
            AnimationVariant::SparkleGlint => "motion-sparkle-glint",
            AnimationVariant::StarGlint => "motion-star-glint",
            AnimationVariant::RiseIn => "motion-rise-in",
        }
    }

    pub fn spec(self) -> VariantSpec {
        let rest = MotionState::REST;
        match self {
            AnimationVariant::FadeIn => VariantSpec {
                hidden: MotionState { y: 20.0, ..MotionState::faded() },
                visible: rest,
                transition: Transition::over(0.6),
            },
            AnimationVariant::StaggerChildren => VariantSpec {
                hidden: MotionState::faded(),
                visible: rest,
                transition: Transition { stagger: Some(0.2), ..Transition::over(0.0) },
            },
            AnimationVariant::Shimmer => VariantSpec {
                hidden: MotionState { opacity: 0.3, ..rest },
                visible: rest,
                transition: Transition { repeat: Repeat::ForeverReverse, ..Transition::over(1.5) },
            },
            AnimationVariant::TitleSlide => VariantSpec {
                hidden: MotionState { x: -20.0, ..MotionState::faded() },
                visible: rest,
                transition: Transition::over(0.5),
            },
            AnimationVariant::SlideFromLeft => VariantSpec {
                hidden: MotionState { x: -50.0, ..MotionState::faded() },
                visible: rest,
                transition: Transition::over(0.8),
            },
            AnimationVariant::HeroPop => VariantSpec {
                hidden: MotionState { scale: 0.8, rotate: -5.0, ..MotionState::faded() },
                visible: rest,
                transition: Transition::over(0.8).after(0.3),
            },
            AnimationVariant::NominationPop => VariantSpec {
                hidden: MotionState { scale: 0.8, rotate: 5.0, ..MotionState::faded() },
                visible: rest,
                transition: Transition::over(0.8),
            },
            AnimationVariant::SparkleGlint => VariantSpec {
                hidden: MotionState::faded(),
                visible: rest,
                transition: Transition::over(1.0).after(1.0),
            },
            AnimationVariant::StarGlint => VariantSpec {
                hidden: MotionState::faded(),
                visible: rest,
                transition: Transition::over(1.0).after(0.5),
            },
            AnimationVariant::RiseIn => VariantSpec {
                hidden: MotionState { y: 20.0, ..MotionState::faded() },
                visible: rest,
                transition: Transition::over(0.8),
            },
        }
    }

    pub fn container_style(self) -> Option<String> {
        self.spec()
            .transition
            .stagger
            .map(|step| format!("--stagger-step: {}s;", step))
    }
}

pub fn stagger_index(index: usize) -> String {
    format!("--stagger-index: {};", index)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEffect {
    Grow,
    Lift,
    Nudge,
}

impl HoverEffect {
    pub const DURATION: f32 = 0.2;

    pub fn class_name(self) -> &'static str {
        match self {
            HoverEffect::Grow => "hover-grow",
            HoverEffect::Lift => "hover-lift",
            HoverEffect::Nudge => "hover-nudge",
        }
    }

    fn target(self) -> MotionState {
        match self {
            HoverEffect::Grow => MotionState { scale: 1.05, ..MotionState::REST },
            HoverEffect::Lift => MotionState { y: -5.0, ..MotionState::REST },
            HoverEffect::Nudge => MotionState { x: 5.0, ..MotionState::REST },
        }
    }
}

pub fn stylesheet() -> String {
    let mut css = String::new();
    for variant in AnimationVariant::ALL {
        let spec = variant.spec();
        let class = variant.class_name();
        if spec.transition.repeat == Repeat::ForeverReverse {
            let _ = writeln!(
                css,
                ".{class} {{ transition: opacity {}s ease-in-out; }}",
                spec.transition.duration
            );
            continue;
        }
        let _ = writeln!(
            css,
            ".{class} {{ {} transition-property: opacity, transform; transition-duration: {}s; \
             transition-timing-function: ease-out; \
             transition-delay: calc({}s + var(--stagger-index, 0) * var(--stagger-step, 0s)); }}",
            spec.hidden.css(),
            spec.transition.duration,
            spec.transition.delay
        );
        let _ = writeln!(
            css,
            ".{revealed}.{class}, .{revealed} .{class} {{ {} }}",
            spec.visible.css(),
            revealed = REVEALED_CLASS
        );
    }
    for hover in [HoverEffect::Grow, HoverEffect::Lift, HoverEffect::Nudge] {
        let class = hover.class_name();
        let _ = writeln!(
            css,
            ".{class} {{ transition: transform {}s ease-out; }}\n.{class}:hover {{ transform: translate({}px, {}px) scale({}); }}",
            HoverEffect::DURATION,
            hover.target().x,
            hover.target().y,
            hover.target().scale
        );
    }
    css
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn observe(&mut self, visible: bool) -> bool {
        match (self.state, visible) {
            (RevealState::Hidden, true) => {
                self.state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShimmerPhase {
    Dim,
    Bright,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shimmer {
    phase: ShimmerPhase,
}

impl Default for Shimmer {
    fn default() -> Self {
        Self { phase: ShimmerPhase::Dim }
    }
}

impl Shimmer {
    pub fn period_ms() -> u32 {
        (AnimationVariant::Shimmer.spec().transition.duration * 1000.0) as u32
    }

    #[cfg(test)]
    pub fn phase(&self) -> ShimmerPhase {
        self.phase
    }

    pub fn tick(self) -> Self {
        let phase = match self.phase {
            ShimmerPhase::Dim => ShimmerPhase::Bright,
            ShimmerPhase::Bright => ShimmerPhase::Dim,
        };
        Self { phase }
    }

    pub fn opacity(&self) -> f32 {
        let spec = AnimationVariant::Shimmer.spec();
        match self.phase {
            ShimmerPhase::Dim => spec.hidden.opacity,
            ShimmerPhase::Bright => spec.visible.opacity,
        }
    }

    pub fn style(&self) -> String {
        format!("opacity: {};", self.opacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fade_in_matches_preset() {
        let spec = AnimationVariant::FadeIn.spec();
        assert_eq!(spec.hidden.opacity, 0.0);
        assert_eq!(spec.hidden.y, 20.0);
        assert_eq!(spec.visible, MotionState::REST);
        assert_eq!(spec.transition.duration, 0.6);
        assert_eq!(spec.transition.repeat, Repeat::Once);
    }

    #[test]
    fn only_stagger_sets_a_step() {
        for variant in AnimationVariant::ALL {
            let step = variant.spec().transition.stagger;
            if variant == AnimationVariant::StaggerChildren {
                assert_eq!(step, Some(0.2));
                assert_eq!(variant.container_style().as_deref(), Some("--stagger-step: 0.2s;"));
            } else {
                assert_eq!(step, None, "{:?}", variant);
                assert_eq!(variant.container_style(), None);
            }
        }
    }

    #[test]
    fn shimmer_is_the_only_endless_preset() {
        let endless: Vec<_> = AnimationVariant::ALL
            .into_iter()
            .filter(|v| v.spec().transition.repeat == Repeat::ForeverReverse)
            .collect();
        assert_eq!(endless, [AnimationVariant::Shimmer]);
    }

    #[test]
    fn class_names_are_distinct() {
        let names: HashSet<_> = AnimationVariant::ALL.iter().map(|v| v.class_name()).collect();
        assert_eq!(names.len(), AnimationVariant::ALL.len());
    }

    #[test]
    fn stylesheet_covers_every_preset() {
        let css = stylesheet();
        for variant in AnimationVariant::ALL {
            assert!(css.contains(&format!(".{} {{", variant.class_name())), "{:?}", variant);
        }
        assert!(css.contains(".is-revealed.motion-fade-in, .is-revealed .motion-fade-in"));
        assert!(css.contains("translate(0px, 20px)"));
        assert!(css.contains(".hover-grow:hover { transform: translate(0px, 0px) scale(1.05); }"));
        assert!(css.contains(".hover-lift:hover { transform: translate(0px, -5px) scale(1); }"));
        assert!(!css.contains(".is-revealed.motion-shimmer"));
    }

    #[test]
    fn latch_reveals_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert_eq!(latch.state(), RevealState::Hidden);

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        let refires = [false, true, false, true, true]
            .into_iter()
            .filter(|visible| latch.observe(*visible))
            .count();
        assert_eq!(refires, 0);
        assert_eq!(latch.state(), RevealState::Revealed);
    }

    #[test]
    fn shimmer_alternates_without_end() {
        let mut shimmer = Shimmer::default();
        assert_eq!(shimmer.opacity(), 0.3);
        for i in 1..=1_000u64 {
            shimmer = shimmer.tick();
            let expected = if i % 2 == 1 { ShimmerPhase::Bright } else { ShimmerPhase::Dim };
            assert_eq!(shimmer.phase(), expected);
        }
        assert_eq!(shimmer.tick().style(), "opacity: 1;");
    }

    #[test]
    fn shimmer_period_follows_preset() {
        assert_eq!(Shimmer::period_ms(), 1500);
    }
}

use glam::Vec2;
use lockfunnel_core::Percentage;

use crate::{palette, Color};

const SECTION_GAP: f32 = 36.0;
const STAGE_BOX_SIZE: Vec2 = Vec2::new(132.0, 72.0);
const GUN_LOCK_TOP: f32 = 208.0;
const ATTEMPT_TOP: f32 = 332.0;
const OUTCOME_BOX_SIZE: Vec2 = Vec2::new(156.0, 70.0);
const OUTCOME_TOP: f32 = 196.0;
const OUTCOME_SPACING: f32 = 5.0;
const FATALITY_CHANCE: u8 = 85;

/// Where a box's caption is drawn relative to the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptionPlacement {
    /// Centered above the box, last line closest to the outline.
    Above,
    /// To the right of the box: the headline above its vertical center, the
    /// remaining lines below it.
    Right,
}

/// Circle persons spawn into.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionCircle {
    /// Circle center in canvas pixels.
    pub center: Vec2,
    /// Circle radius in pixels.
    pub radius: f32,
    /// Caption lines drawn above the circle.
    pub caption: [&'static str; 2],
}

/// Outlined stage of the funnel with a colored left edge.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelBox {
    /// Top-left corner in canvas pixels.
    pub origin: Vec2,
    /// Width and height in pixels.
    pub size: Vec2,
    /// Color of the left edge and the headline.
    pub accent: Color,
    /// Caption position.
    pub placement: CaptionPlacement,
    /// Emphasized line drawn in the accent color, if any.
    pub headline: Option<String>,
    /// Regular caption lines.
    pub lines: Vec<String>,
}

impl FunnelBox {
    fn stage(origin: Vec2, accent: Color, lines: Vec<String>) -> Self {
        Self {
            origin,
            size: STAGE_BOX_SIZE,
            accent,
            placement: CaptionPlacement::Above,
            headline: None,
            lines,
        }
    }

    fn outcome(origin: Vec2, accent: Color, headline: &str, lines: &[&str]) -> Self {
        Self {
            origin,
            size: OUTCOME_BOX_SIZE,
            accent,
            placement: CaptionPlacement::Right,
            headline: Some(headline.to_owned()),
            lines: lines.iter().map(|line| (*line).to_owned()).collect(),
        }
    }
}

/// Static funnel: decision circle, two stage boxes and three outcome boxes.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelDiagram {
    /// Circle persons spawn into.
    pub decision: DecisionCircle,
    /// Gun lock, attempt, saved, unsuccessful and fatal boxes in that order.
    pub boxes: Vec<FunnelBox>,
}

impl FunnelDiagram {
    /// Lays out the funnel to the right of the decision circle.
    ///
    /// Outcome percentages are placeholders; only the prevention chance
    /// follows the lock effectiveness parameter.
    #[must_use]
    pub fn new(
        decision_center: Vec2,
        decision_radius: f32,
        lock_effectiveness: Percentage,
    ) -> Self {
        let stage_left = decision_center.x + decision_radius + SECTION_GAP;
        let outcome_left = stage_left + STAGE_BOX_SIZE.x + SECTION_GAP;
        let outcome_top = |index: f32| OUTCOME_TOP + index * (OUTCOME_BOX_SIZE.y + OUTCOME_SPACING);

        let boxes = vec![
            FunnelBox::stage(
                Vec2::new(stage_left, GUN_LOCK_TOP),
                palette::GUN_LOCK,
                vec![
                    "Gun lock on".to_owned(),
                    format!("Chance at prevention: {}%", lock_effectiveness.get()),
                ],
            ),
            FunnelBox::stage(
                Vec2::new(stage_left, ATTEMPT_TOP),
                palette::ATTEMPT,
                vec![
                    "Suicide attempt".to_owned(),
                    format!("Chance of fatality: {FATALITY_CHANCE}%"),
                ],
            ),
            FunnelBox::outcome(
                Vec2::new(outcome_left, outcome_top(0.0)),
                palette::SAVED,
                "XX %",
                &["Saved"],
            ),
            FunnelBox::outcome(
                Vec2::new(outcome_left, outcome_top(1.0)),
                palette::UNSUCCESSFUL,
                "YY %",
                &["Unsuccessful", "attempt"],
            ),
            FunnelBox::outcome(
                Vec2::new(outcome_left, outcome_top(2.0)),
                palette::FATAL,
                "ZZ %",
                &["Fatal", "attempt"],
            ),
        ];

        Self {
            decision: DecisionCircle {
                center: decision_center,
                radius: decision_radius,
                caption: ["Decision to attempt", "suicide by firearm"],
            },
            boxes,
        }
    }
}

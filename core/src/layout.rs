//! # Diagram Layout Engine
//!
//! Pure geometry: automaton + canvas constraints in, coordinates out.
//! Nothing in this module draws; the renderer consumes the
//! [`DiagramLayout`] it produces, which keeps the placement math testable
//! without a raster surface.

use crate::automaton::Automaton;

pub const STATE_RADIUS: f32 = 30.0;
pub const MIN_SPACING: f32 = 80.0;
pub const MAX_SPACING: f32 = 120.0;
/// Center of state 0.
pub const START_X: f32 = 100.0;
/// Horizontal canvas reserve kept clear of the state chain.
pub const MARGIN_RESERVE: f32 = 200.0;

const START_ARROW_LEN: f32 = 50.0;
const LABEL_RAISE: f32 = 20.0;
const START_ARROWHEAD_SIZE: f32 = 10.0;
const ARROWHEAD_SIZE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Canvas for an automaton: 100 horizontal units per consumed symbol,
    /// at least 800, plus the margin reserve. Height is fixed.
    pub fn for_automaton(automaton: &Automaton) -> Self {
        let base = 100 * automaton.symbol_count() as u32;
        Self {
            width: base.max(800) + MARGIN_RESERVE as u32,
            height: 400,
        }
    }
}

/// One state circle. Final states render as two concentric circles.
#[derive(Debug, Clone)]
pub struct StateShape {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub label: String,
    pub is_final: bool,
}

impl StateShape {
    /// Radius of the inner ring on an accepting state.
    pub fn inner_radius(&self) -> f32 {
        self.radius - 5.0
    }
}

/// A labeled transition arrow between two adjacent states. The segment
/// runs boundary to boundary, not center to center.
#[derive(Debug, Clone)]
pub struct TransitionArrow {
    pub from_x: f32,
    pub to_x: f32,
    pub y: f32,
    pub head_size: f32,
    pub label: char,
    pub label_x: f32,
    pub label_y: f32,
}

/// The pseudo-arrow marking state 0 as initial.
#[derive(Debug, Clone)]
pub struct StartArrow {
    pub from_x: f32,
    pub to_x: f32,
    pub y: f32,
    pub head_size: f32,
    pub label_x: f32,
    pub label_y: f32,
}

#[derive(Debug, Clone)]
pub struct DiagramLayout {
    pub width: u32,
    pub height: u32,
    pub spacing: f32,
    pub states: Vec<StateShape>,
    pub transitions: Vec<TransitionArrow>,
    pub start: StartArrow,
}

/// Computes the full diagram geometry.
///
/// Spacing is the available width split across the transitions, clamped
/// to `[MIN_SPACING, MAX_SPACING]`. An under-sized canvas saturates the
/// clamp at the minimum and may overflow; sizing the canvas so that does
/// not happen is [`CanvasSize::for_automaton`]'s job.
pub fn layout(automaton: &Automaton, canvas: CanvasSize) -> DiagramLayout {
    let n = automaton.symbol_count();
    let available = canvas.width as f32 - MARGIN_RESERVE;
    let spacing = (available / n as f32).clamp(MIN_SPACING, MAX_SPACING);
    let y = canvas.height as f32 / 2.0;

    let state_x = |i: usize| START_X + i as f32 * spacing;

    let states = (0..=n)
        .map(|i| {
            let is_final = i == automaton.final_state();
            StateShape {
                index: i,
                x: state_x(i),
                y,
                radius: STATE_RADIUS,
                label: if is_final {
                    format!("q{i} (final)")
                } else {
                    format!("q{i}")
                },
                is_final,
            }
        })
        .collect();

    let transitions = automaton
        .symbols()
        .iter()
        .enumerate()
        .map(|(i, symbol)| {
            let from_center = state_x(i);
            let to_center = state_x(i + 1);
            TransitionArrow {
                from_x: from_center + STATE_RADIUS,
                to_x: to_center - STATE_RADIUS,
                y,
                head_size: ARROWHEAD_SIZE,
                label: symbol.as_char(),
                label_x: (from_center + to_center) / 2.0,
                label_y: y - LABEL_RAISE,
            }
        })
        .collect();

    // Tail sits 50 units left of the state-0 center; the head stops at
    // the circle boundary.
    let tail_x = START_X - START_ARROW_LEN;
    let start = StartArrow {
        from_x: tail_x,
        to_x: START_X - STATE_RADIUS,
        y,
        head_size: START_ARROWHEAD_SIZE,
        label_x: tail_x - 30.0,
        label_y: y - 10.0,
    };

    DiagramLayout {
        width: canvas.width,
        height: canvas.height,
        spacing,
        states,
        transitions,
        start,
    }
}

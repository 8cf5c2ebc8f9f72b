//! Radial presenter: the steps as nodes on a wheel joined by curved arcs,
//! with the selected step's details beside it
//!
//! The wheel is laid out in a 500×500 drawing space (y down) and painted on
//! a braille canvas whose bounds leave a margin for the labels.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context, Points},
        Block, BorderType, Paragraph, Wrap,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{radial::RadialState, AppState},
    domain::{
        catalog::{Catalog, StepId},
        geometry::{Point, RadialLayout},
        glyph::Icon,
    },
    presentation::{components::Components, widgets::detail_card::DetailCardWidget},
};

pub const WHEEL: RadialLayout = RadialLayout::new(Point::new(250.0, 250.0), 200.0);
pub const NODE_RADIUS: f64 = 40.0;
pub const EMPHASIZED_RADIUS: f64 = 45.0;
pub const LABEL_OFFSET: f64 = 70.0;
const LABEL_HIT_RADIUS: f64 = 40.0;
const ARC_SEGMENTS: usize = 32;

const MIN: f64 = -40.0;
const MAX: f64 = 540.0;
const SPAN: f64 = MAX - MIN;

pub const INSTRUCTION: &str = "Cliquez sur une étape du cercle pour voir les détails";

#[derive(Debug, Clone, Default)]
pub struct RadialComponent;

impl RadialComponent {
    pub fn new() -> Self {
        Self
    }

    /// `[wheel, details]` halves of the presenter body
    fn split(body: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body)
    }

    fn wheel_block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
    }

    /// Canvas area of the wheel for a given presenter body
    pub fn wheel_area(body: Rect) -> Rect {
        Self::wheel_block().inner(Self::split(body)[0])
    }

    /// Drawing-space point at the middle of a terminal cell, if the cell is
    /// on the canvas
    pub fn canvas_point(canvas: Rect, column: u16, row: u16) -> Option<Point> {
        if !canvas.contains(Position::new(column, row)) {
            return None;
        }
        let fx = (f64::from(column - canvas.x) + 0.5) / f64::from(canvas.width);
        let fy = (f64::from(row - canvas.y) + 0.5) / f64::from(canvas.height);
        Some(Point::new(MIN + fx * SPAN, MIN + fy * SPAN))
    }

    /// Step whose node or label is under the terminal cell, for a screen of
    /// size `screen`
    pub fn node_at(screen: Rect, column: u16, row: u16, catalog: &Catalog) -> Option<StepId> {
        let canvas = Self::wheel_area(Components::body_area(screen));
        let point = Self::canvas_point(canvas, column, row)?;
        let count = catalog.len();
        WHEEL
            .hit_test(point, count, EMPHASIZED_RADIUS)
            .or_else(|| {
                WHEEL
                    .with_radius(WHEEL.radius + LABEL_OFFSET)
                    .hit_test(point, count, LABEL_HIT_RADIUS)
            })
            .and_then(|index| catalog.at(index))
            .map(|step| step.id)
    }

    pub fn view(&self, radial: &RadialState, state: &AppState, frame: &mut Frame, area: Rect) {
        let [wheel, details] = Self::split(area);
        let canvas_area = Self::wheel_block().inner(wheel);
        let catalog = &state.catalog;
        // drawing-space width of one terminal column, for centering text
        let column_width = SPAN / f64::from(canvas_area.width.max(1));

        let canvas = Canvas::default()
            .block(Self::wheel_block())
            .marker(Marker::Braille)
            .x_bounds([MIN, MAX])
            .y_bounds([MIN, MAX])
            .paint(|ctx| Self::paint(ctx, radial, catalog, column_width));
        frame.render_widget(canvas, wheel);

        match radial.selected().and_then(|id| catalog.get(id)) {
            Some(step) => {
                let (start, _) = step.color_scheme.gradient();
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(step.color_scheme.border()))
                    .title(
                        Line::from(format!(" {} {} ", step.icon.glyph(), step.title))
                            .style(Style::default().fg(step.color_scheme.text()).bg(start).bold()),
                    )
                    .title_bottom(
                        Line::from(format!(" {} Échap ", Icon::X.glyph())).right_aligned(),
                    );
                let inner = block.inner(details);
                frame.render_widget(block, details);

                let [text, cards] =
                    Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(inner);
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::from(step.subtitle).bold(),
                        Line::default(),
                        Line::from(step.description),
                    ])
                    .wrap(Wrap { trim: true }),
                    text,
                );
                DetailCardWidget::render_stack(step.details, cards, frame.buffer_mut());
            }
            None => {
                let [_, text, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(3),
                    Constraint::Fill(1),
                ])
                .areas(details);
                frame.render_widget(
                    Paragraph::new(INSTRUCTION)
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true })
                        .style(state.config.config.styles.get_or_default("hint")),
                    text,
                );
            }
        }
    }

    fn paint(ctx: &mut Context, radial: &RadialState, catalog: &Catalog, column_width: f64) {
        let count = catalog.len();

        // dashed connectors
        for arc in WHEEL.arcs(count) {
            let coords: Vec<(f64, f64)> = arc
                .sample(ARC_SEGMENTS)
                .into_iter()
                .step_by(2)
                .map(flip)
                .collect();
            ctx.draw(&Points {
                coords: &coords,
                color: Color::DarkGray,
            });
        }

        for (step, p) in catalog.steps().iter().zip(WHEEL.positions(count)) {
            let color = step.color_scheme.border();
            let radius = if radial.is_emphasized(step.id) {
                EMPHASIZED_RADIUS
            } else {
                NODE_RADIUS
            };
            let (x, y) = flip(p);
            ctx.draw(&Circle {
                x,
                y,
                radius,
                color,
            });
            if radial.is_selected(step.id) {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: radius + 8.0,
                    color: Color::White,
                });
            }
        }

        ctx.layer();

        let labels = WHEEL.with_radius(WHEEL.radius + LABEL_OFFSET);
        for (i, step) in catalog.steps().iter().enumerate() {
            let node = WHEEL.position(i, count);
            let number = step.id.to_string();
            let mut style = Style::default().fg(step.color_scheme.gradient().1).bold();
            if radial.is_emphasized(step.id) {
                style = style.reversed();
            }
            print_centered(ctx, node, format!(" {number} "), style, column_width);
            print_centered(
                ctx,
                labels.position(i, count),
                step.short_title().to_string(),
                Style::default().fg(Color::Gray),
                column_width,
            );
        }

        let badge = Style::default().fg(Color::Magenta).bold();
        for (text, dy) in [("MICRO-", -12.0), ("NEEDLING", 12.0)] {
            let at = Point::new(WHEEL.center.x, WHEEL.center.y + dy);
            print_centered(ctx, at, text.to_string(), badge, column_width);
        }
    }
}

/// Drawing space has y pointing down, the canvas has it pointing up
fn flip(p: Point) -> (f64, f64) {
    (p.x, MIN + MAX - p.y)
}

/// Labels starting left of the canvas are dropped, so they are pushed back
/// inside
fn print_centered(ctx: &mut Context, at: Point, text: String, style: Style, column_width: f64) {
    let width = text.width() as f64 * column_width;
    let (x, y) = flip(at);
    let x = (x - width / 2.0).clamp(MIN, (MAX - width).max(MIN));
    ctx.print(x, y, Line::styled(text, style));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::radial::RadialMsg,
            state::view::{PresenterKind, PresenterState},
        },
        presentation::components::tests::render_to_string,
    };

    const SCREEN: Rect = Rect::new(0, 0, 120, 40);

    #[test]
    fn test_wheel_area() {
        // body starts on row 2, 60% of 120 columns, minus the border
        assert_eq!(
            RadialComponent::wheel_area(Components::body_area(SCREEN)),
            Rect::new(1, 3, 70, 35)
        );
    }

    #[test]
    fn test_canvas_point_corners() {
        let canvas = Rect::new(0, 0, 58, 58);
        let top_left = RadialComponent::canvas_point(canvas, 0, 0).unwrap();
        assert!((top_left.x - (MIN + 5.0)).abs() < 1e-9);
        assert!((top_left.y - (MIN + 5.0)).abs() < 1e-9);
        assert_eq!(RadialComponent::canvas_point(canvas, 58, 0), None);
    }

    #[test]
    fn test_node_at() {
        let catalog = Catalog::default();
        // top node: drawing point (250, 50)
        assert_eq!(
            RadialComponent::node_at(SCREEN, 35, 8, &catalog),
            Some(StepId(1))
        );
        // wheel center
        assert_eq!(RadialComponent::node_at(SCREEN, 36, 20, &catalog), None);
        // outside the wheel
        assert_eq!(RadialComponent::node_at(SCREEN, 100, 20, &catalog), None);
    }

    #[test]
    fn test_label_is_clickable() {
        let catalog = Catalog::default();
        // label of the top node sits at drawing point (250, -20)
        assert_eq!(
            RadialComponent::node_at(SCREEN, 35, 4, &catalog),
            Some(StepId(1))
        );
    }

    #[test]
    fn test_render_without_selection() {
        let screen = render_to_string(&AppState::new(PresenterKind::Radial), 120, 40);
        assert!(screen.contains("MICRO-"));
        assert!(screen.contains("NEEDLING"));
        assert!(screen.contains("Cliquez sur une étape"));
    }

    #[test]
    fn test_render_selected_details() {
        let mut state = AppState::new(PresenterKind::Radial);
        if let PresenterState::Radial(radial) = &mut state.view.presenter {
            radial.update(RadialMsg::Select(StepId(2)));
        }
        let screen = render_to_string(&state, 120, 40);
        assert!(screen.contains("RÉACTION DE LA PEAU"));
        assert!(screen.contains("Auto-réparation naturelle"));
        assert!(!screen.contains("Cliquez sur une étape"));
    }
}

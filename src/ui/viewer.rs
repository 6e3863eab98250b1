/// Swipe gesture recognition over the presented photo
///
/// A transparent canvas stacked on top of the photo. Pressing starts a
/// drag, horizontal movement is reported to the app as a displacement
/// from the press origin, and releasing resets the drag. Once the drag
/// passes the decision threshold a directional hint is drawn over the
/// photo edge: keep on the right, delete on the left.

use iced::widget::canvas::{self, Program};
use iced::mouse::{self, Cursor};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::Message;

/// Width of the directional hint band, in logical pixels
const HINT_BAND_WIDTH: f32 = 96.0;

/// Gesture area for the presented photo
pub struct SwipeArea {
    /// Horizontal displacement that counts as a decision
    pub threshold: f32,
}

impl Program<Message> for SwipeArea {
    type State = DragState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Directional hint once the drag is past the threshold
        if state.is_dragging && state.offset_x.abs() > self.threshold {
            let (label, color, band_x) = if state.offset_x > 0.0 {
                (
                    "KEEP",
                    Color::from_rgba(0.2, 0.8, 0.3, 0.35),
                    bounds.width - HINT_BAND_WIDTH,
                )
            } else {
                ("DELETE", Color::from_rgba(0.9, 0.2, 0.2, 0.35), 0.0)
            };

            let band = canvas::Path::rectangle(
                Point::new(band_x, 0.0),
                Size::new(HINT_BAND_WIDTH, bounds.height),
            );
            frame.fill(&band, color);

            frame.fill_text(canvas::Text {
                content: label.to_string(),
                position: Point::new(band_x + HINT_BAND_WIDTH / 2.0, bounds.height / 2.0),
                color: Color::WHITE,
                size: 20.0.into(),
                horizontal_alignment: iced::alignment::Horizontal::Center,
                vertical_alignment: iced::alignment::Vertical::Center,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        _bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse button press - start the drag at the press origin
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position() {
                    state.is_dragging = true;
                    state.origin = Some(pos);
                    state.offset_x = 0.0;
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse button release - end the drag
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.is_dragging = false;
                state.origin = None;
                state.offset_x = 0.0;
                return (canvas::event::Status::Captured, None);
            }

            // Mouse move - report horizontal displacement while dragging
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging {
                    if let (Some(current_pos), Some(origin)) = (cursor.position(), state.origin) {
                        let dx = current_pos.x - origin.x;
                        state.offset_x = dx;
                        return (canvas::event::Status::Captured, Some(Message::SwipeMoved(dx)));
                    }
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub origin: Option<Point>,
    pub offset_x: f32,
}

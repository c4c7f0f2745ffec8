//! Surface that records primitives instead of rasterizing them

use crate::render::paint::{LineCap, Paint};
use crate::render::surface::{Point, StateStack, Surface, SurfaceSize};

/// One recorded primitive with the style it was drawn in
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// The whole surface was erased
    Clear,
    /// A filled circle
    FillCircle {
        /// Circle centre
        center: Point,
        /// Circle radius
        radius: f64,
        /// Fill paint in effect
        paint: Paint,
    },
    /// A stroked line segment
    StrokeLine {
        /// Segment start
        from: Point,
        /// Segment end
        to: Point,
        /// Stroke paint in effect
        paint: Paint,
        /// Line width in effect
        line_width: f64,
        /// Line cap in effect
        line_cap: LineCap,
    },
}

/// Surface keeping an ordered log of every primitive drawn on it
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: SurfaceSize,
    states: StateStack,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Empty recording for a surface of the given size
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            states: StateStack::new(),
            commands: Vec::new(),
        }
    }

    /// Commands in drawing order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of stroked segments recorded
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::StrokeLine { .. }))
            .count()
    }

    /// Number of filled circles recorded
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillCircle { .. }))
            .count()
    }

    /// Endpoints of every stroked segment, in drawing order
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::StrokeLine { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn states(&self) -> &StateStack {
        &self.states
    }

    fn states_mut(&mut self) -> &mut StateStack {
        &mut self.states
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: self.states.current().fill.clone(),
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let state = self.states.current();
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            paint: state.stroke.clone(),
            line_width: state.line_width,
            line_cap: state.line_cap,
        });
    }
}
